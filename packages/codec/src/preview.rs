//! # Preview & Export Payloads
//!
//! Request/response shapes exchanged with the rendering collaborator. The
//! projection is pure: no markup is produced here, and the collaborator's
//! output is treated as opaque.

use proposal_document::{Block, CanvasSize, EditorState, GlobalStyles};
use serde::{Deserialize, Serialize};

/// Customer substitution data for customer-info blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub company: String,
}

/// Company substitution data for company-info blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyData {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub logo_url: String,
}

/// Payload handed to the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    pub template_id: String,
    pub blocks: Vec<Block>,
    pub global_styles: GlobalStyles,
    pub canvas_size: CanvasSize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_data: Option<CustomerData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_data: Option<CompanyData>,
}

/// The collaborator's preview response. Markup is opaque to this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResponse {
    pub html: String,
    pub css: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Png,
    Jpeg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportOrientation {
    Portrait,
    Landscape,
}

/// Options for the export endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub orientation: ExportOrientation,
    /// Raster quality, 1..=100. Ignored for PDF.
    pub quality: u8,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Pdf,
            orientation: ExportOrientation::Portrait,
            quality: 90,
        }
    }
}

/// Project an editor state into a preview/export request.
///
/// This is the only path by which block content reaches the rendering
/// collaborator.
pub fn to_preview_request(
    state: &EditorState,
    template_id: &str,
    customer_data: Option<CustomerData>,
    company_data: Option<CompanyData>,
) -> PreviewRequest {
    PreviewRequest {
        template_id: template_id.to_string(),
        blocks: state.blocks.clone(),
        global_styles: state.global_styles.clone(),
        canvas_size: state.canvas_size,
        customer_data,
        company_data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use proposal_document::{library, BlockType};

    #[test]
    fn test_projection_excludes_ui_state() {
        let mut state = EditorState::new();
        state
            .blocks
            .push(library::get(BlockType::Text).instantiate("b-1".to_string(), Utc::now()));
        state.selected_block_id = Some("b-1".to_string());
        state.is_preview_mode = true;

        let request = to_preview_request(&state, "tpl-1", None, None);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["templateId"], "tpl-1");
        assert_eq!(json["blocks"].as_array().unwrap().len(), 1);
        assert!(json.get("selectedBlockId").is_none());
        assert!(json.get("isPreviewMode").is_none());
        // Absent substitution data is omitted entirely.
        assert!(json.get("customerData").is_none());
    }

    #[test]
    fn test_customer_data_passes_through() {
        let customer = CustomerData {
            name: "Jamie Fog".to_string(),
            email: "jamie@example.com".to_string(),
            phone: "+49 30 1234".to_string(),
            address: "Sonnenallee 1, Berlin".to_string(),
            company: "Fog Household".to_string(),
        };

        let request = to_preview_request(&EditorState::new(), "tpl-1", Some(customer.clone()), None);
        assert_eq!(request.customer_data, Some(customer));
    }

    #[test]
    fn test_export_options_defaults() {
        let options = ExportOptions::default();
        assert_eq!(options.format, ExportFormat::Pdf);
        assert_eq!(options.orientation, ExportOrientation::Portrait);
        assert_eq!(options.quality, 90);

        let json = serde_json::to_value(options).unwrap();
        assert_eq!(json["format"], "pdf");
        assert_eq!(json["orientation"], "portrait");
    }
}
