//! # Block Model
//!
//! A proposal document is an ordered sequence of typed content blocks.
//! Each block owns its content payload, a sparse style set, an absolute
//! canvas position, and editing metadata.
//!
//! Content is a sum type keyed by the block's type tag: a `text` block can
//! only carry text fields, a `pricing-table` block can only carry line
//! items. Cross-type content is unrepresentable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::styles::BlockStyles;

/// Closed enumeration of block types.
///
/// Adding a variant here requires a matching content payload and a library
/// entry; both are enforced by exhaustive matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockType {
    Text,
    Heading,
    Image,
    Table,
    Spacer,
    Divider,
    CustomerInfo,
    CompanyInfo,
    PricingTable,
    Gallery,
    HeroSection,
    Footer,
    Header,
}

impl BlockType {
    /// All block types, in library display order.
    pub const ALL: [BlockType; 13] = [
        BlockType::Heading,
        BlockType::Text,
        BlockType::Image,
        BlockType::Gallery,
        BlockType::Table,
        BlockType::PricingTable,
        BlockType::CustomerInfo,
        BlockType::CompanyInfo,
        BlockType::HeroSection,
        BlockType::Header,
        BlockType::Footer,
        BlockType::Spacer,
        BlockType::Divider,
    ];

    /// Wire tag for this type (kebab-case, matches the serialized form).
    pub fn as_tag(&self) -> &'static str {
        match self {
            BlockType::Text => "text",
            BlockType::Heading => "heading",
            BlockType::Image => "image",
            BlockType::Table => "table",
            BlockType::Spacer => "spacer",
            BlockType::Divider => "divider",
            BlockType::CustomerInfo => "customer-info",
            BlockType::CompanyInfo => "company-info",
            BlockType::PricingTable => "pricing-table",
            BlockType::Gallery => "gallery",
            BlockType::HeroSection => "hero-section",
            BlockType::Footer => "footer",
            BlockType::Header => "header",
        }
    }

    /// Parse a wire tag back into a type.
    pub fn parse_tag(tag: &str) -> Option<BlockType> {
        BlockType::ALL
            .iter()
            .copied()
            .find(|block_type| block_type.as_tag() == tag)
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Library grouping for the block picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockCategory {
    Content,
    Media,
    Data,
    Layout,
    Branding,
}

/// Content payload, tagged by block type.
///
/// Serializes adjacently tagged so the wire form is
/// `{"type": "text", "content": {...}}`, which is flattened into the block
/// record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "kebab-case")]
pub enum BlockContent {
    Text(TextContent),
    Heading(HeadingContent),
    Image(ImageContent),
    Table(TableContent),
    Spacer(SpacerContent),
    Divider(DividerContent),
    CustomerInfo(CustomerInfoContent),
    CompanyInfo(CompanyInfoContent),
    PricingTable(PricingTableContent),
    Gallery(GalleryContent),
    HeroSection(HeroSectionContent),
    Footer(FooterContent),
    Header(HeaderContent),
}

impl BlockContent {
    /// The type tag this payload belongs to.
    pub fn block_type(&self) -> BlockType {
        match self {
            BlockContent::Text(_) => BlockType::Text,
            BlockContent::Heading(_) => BlockType::Heading,
            BlockContent::Image(_) => BlockType::Image,
            BlockContent::Table(_) => BlockType::Table,
            BlockContent::Spacer(_) => BlockType::Spacer,
            BlockContent::Divider(_) => BlockType::Divider,
            BlockContent::CustomerInfo(_) => BlockType::CustomerInfo,
            BlockContent::CompanyInfo(_) => BlockType::CompanyInfo,
            BlockContent::PricingTable(_) => BlockType::PricingTable,
            BlockContent::Gallery(_) => BlockType::Gallery,
            BlockContent::HeroSection(_) => BlockType::HeroSection,
            BlockContent::Footer(_) => BlockType::Footer,
            BlockContent::Header(_) => BlockType::Header,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TextContent {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HeadingContent {
    pub text: String,
    /// Heading level, 1..=6.
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ImageContent {
    pub url: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TableContent {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub has_header_row: bool,
    pub striped: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SpacerContent {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DividerContent {}

/// Which customer fields the rendered card shows. The values themselves are
/// substituted by the rendering collaborator from `CustomerData`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CustomerInfoContent {
    pub show_name: bool,
    pub show_email: bool,
    pub show_phone: bool,
    pub show_address: bool,
    pub show_company: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompanyInfoContent {
    pub show_logo: bool,
    pub show_tagline: bool,
    pub show_contact: bool,
    pub show_website: bool,
}

/// One priced line in a pricing table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LineItem {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    /// `quantity * unit_price`, kept in sync by [`PricingTableContent::recompute`].
    pub total: f64,
}

impl LineItem {
    pub fn new(description: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
            total: quantity * unit_price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PricingTableContent {
    pub items: Vec<LineItem>,
    /// Fractional tax rate, e.g. `0.19` for 19%.
    pub tax_rate: f64,
    pub currency: String,
}

impl PricingTableContent {
    /// Re-derive every line total from quantity and unit price.
    pub fn recompute(&mut self) {
        for item in &mut self.items {
            item.total = item.quantity * item.unit_price;
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(|item| item.total).sum()
    }

    pub fn tax(&self) -> f64 {
        self.subtotal() * self.tax_rate
    }

    pub fn total(&self) -> f64 {
        self.subtotal() + self.tax()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GalleryImage {
    pub url: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GalleryContent {
    pub images: Vec<GalleryImage>,
    pub columns: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HeroSectionContent {
    pub title: String,
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FooterContent {
    pub text: String,
    pub show_page_number: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HeaderContent {
    pub text: String,
    pub show_logo: bool,
}

/// Absolute placement and stacking order on the canvas.
///
/// Paint order is the block sequence; `z_index` only breaks stacking ties
/// when blocks visually overlap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z_index: i32,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z_index: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockMetadata {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: BlockCategory,
    pub is_locked: bool,
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A single placed content unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Stable for the block's lifetime, unique within a document.
    pub id: String,
    #[serde(flatten)]
    pub content: BlockContent,
    pub styles: BlockStyles,
    pub position: Position,
    pub metadata: BlockMetadata,
}

impl Block {
    pub fn block_type(&self) -> BlockType {
        self.content.block_type()
    }

    /// Bump the modification timestamp.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.metadata.updated_at = now;
    }
}
