//! # Styles & Canvas
//!
//! Block styles are sparse: an unset property falls back to the block
//! library default for the type, then to the document's global styles.
//! Patches shallow-merge field-by-field.

use serde::{Deserialize, Serialize};

/// Four-sided inset, used for padding and margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Insets {
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Light,
    Normal,
    Medium,
    Bold,
}

/// Sparse per-block visual properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BlockStyles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Insets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Insets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
}

impl BlockStyles {
    /// Shallow-merge: every set field of `patch` overwrites this value.
    pub fn merge(&mut self, patch: &BlockStyles) {
        macro_rules! take {
            ($field:ident) => {
                if patch.$field.is_some() {
                    self.$field = patch.$field.clone();
                }
            };
        }
        take!(font_size);
        take!(font_weight);
        take!(color);
        take!(background_color);
        take!(text_align);
        take!(padding);
        take!(margin);
        take!(border_radius);
        take!(border_width);
        take!(border_color);
        take!(width);
        take!(height);
        take!(max_width);
    }

    pub fn is_empty(&self) -> bool {
        *self == BlockStyles::default()
    }
}

/// Document-wide style defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStyles {
    pub primary_color: String,
    pub secondary_color: String,
    pub font_family: String,
    pub font_size: f64,
    pub line_height: f64,
    pub background_color: String,
    pub text_color: String,
    pub border_radius: f64,
    pub spacing_unit: f64,
}

impl Default for GlobalStyles {
    fn default() -> Self {
        Self {
            primary_color: "#1d4ed8".to_string(),
            secondary_color: "#f59e0b".to_string(),
            font_family: "Inter, sans-serif".to_string(),
            font_size: 14.0,
            line_height: 1.5,
            background_color: "#ffffff".to_string(),
            text_color: "#1f2937".to_string(),
            border_radius: 4.0,
            spacing_unit: 8.0,
        }
    }
}

/// Sparse patch over [`GlobalStyles`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStylesPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing_unit: Option<f64>,
}

impl GlobalStylesPatch {
    pub fn is_empty(&self) -> bool {
        *self == GlobalStylesPatch::default()
    }
}

impl GlobalStyles {
    /// Shallow-merge a patch into these styles.
    pub fn merge(&mut self, patch: &GlobalStylesPatch) {
        macro_rules! take {
            ($field:ident) => {
                if let Some(value) = &patch.$field {
                    self.$field = value.clone();
                }
            };
        }
        take!(primary_color);
        take!(secondary_color);
        take!(font_family);
        take!(font_size);
        take!(line_height);
        take!(background_color);
        take!(text_color);
        take!(border_radius);
        take!(spacing_unit);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanvasUnit {
    Px,
    Mm,
    In,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
    pub unit: CanvasUnit,
}

impl Default for CanvasSize {
    // A4 portrait
    fn default() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            unit: CanvasUnit::Mm,
        }
    }
}
