//! # Block Library
//!
//! Static catalog mapping every block type to its default content, default
//! styles, and picker metadata. [`get`] is total over [`BlockType`]: the
//! exhaustive match makes a missing entry a compile error, not a runtime
//! lookup failure.

use crate::block::{
    BlockCategory, BlockContent, BlockType, CompanyInfoContent, CustomerInfoContent,
    DividerContent, FooterContent, GalleryContent, HeaderContent, HeadingContent, HeroSectionContent, ImageContent,
    PricingTableContent, SpacerContent, TableContent, TextContent,
};
use crate::styles::{BlockStyles, FontWeight, Insets, TextAlign};

/// One library entry: everything the picker and the add-operation need.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockDefinition {
    pub block_type: BlockType,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: BlockCategory,
    pub default_content: BlockContent,
    pub default_styles: BlockStyles,
}

impl BlockDefinition {
    /// Build a block from this entry's defaults.
    pub fn instantiate(&self, id: String, now: chrono::DateTime<chrono::Utc>) -> crate::Block {
        crate::Block {
            id,
            content: self.default_content.clone(),
            styles: self.default_styles.clone(),
            position: crate::Position::default(),
            metadata: crate::BlockMetadata {
                title: self.title.to_string(),
                description: None,
                category: self.category,
                is_locked: false,
                is_visible: true,
                created_at: now,
                updated_at: now,
            },
        }
    }
}

/// Look up the library entry for a block type.
pub fn get(block_type: BlockType) -> BlockDefinition {
    match block_type {
        BlockType::Text => BlockDefinition {
            block_type,
            title: "Text",
            description: "Paragraph of body text",
            icon: "text",
            category: BlockCategory::Content,
            default_content: BlockContent::Text(TextContent {
                text: "Enter your text here".to_string(),
            }),
            default_styles: BlockStyles {
                font_size: Some(14.0),
                ..BlockStyles::default()
            },
        },
        BlockType::Heading => BlockDefinition {
            block_type,
            title: "Heading",
            description: "Section heading",
            icon: "heading",
            category: BlockCategory::Content,
            default_content: BlockContent::Heading(HeadingContent {
                text: "Section title".to_string(),
                level: 2,
            }),
            default_styles: BlockStyles {
                font_size: Some(24.0),
                font_weight: Some(FontWeight::Bold),
                ..BlockStyles::default()
            },
        },
        BlockType::Image => BlockDefinition {
            block_type,
            title: "Image",
            description: "Single image with optional caption",
            icon: "image",
            category: BlockCategory::Media,
            default_content: BlockContent::Image(ImageContent {
                url: String::new(),
                alt: String::new(),
                caption: None,
            }),
            default_styles: BlockStyles {
                max_width: Some(600.0),
                ..BlockStyles::default()
            },
        },
        BlockType::Table => BlockDefinition {
            block_type,
            title: "Table",
            description: "Free-form data table",
            icon: "table",
            category: BlockCategory::Data,
            default_content: BlockContent::Table(TableContent {
                headers: vec!["Item".to_string(), "Description".to_string()],
                rows: vec![vec![String::new(), String::new()]],
                has_header_row: true,
                striped: false,
            }),
            default_styles: BlockStyles {
                border_width: Some(1.0),
                border_color: Some("#e5e7eb".to_string()),
                ..BlockStyles::default()
            },
        },
        BlockType::Spacer => BlockDefinition {
            block_type,
            title: "Spacer",
            description: "Vertical whitespace",
            icon: "spacer",
            category: BlockCategory::Layout,
            default_content: BlockContent::Spacer(SpacerContent::default()),
            default_styles: BlockStyles {
                height: Some(32.0),
                ..BlockStyles::default()
            },
        },
        BlockType::Divider => BlockDefinition {
            block_type,
            title: "Divider",
            description: "Horizontal rule",
            icon: "divider",
            category: BlockCategory::Layout,
            default_content: BlockContent::Divider(DividerContent::default()),
            default_styles: BlockStyles {
                border_width: Some(1.0),
                border_color: Some("#d1d5db".to_string()),
                margin: Some(Insets::symmetric(16.0, 0.0)),
                ..BlockStyles::default()
            },
        },
        BlockType::CustomerInfo => BlockDefinition {
            block_type,
            title: "Customer info",
            description: "Card with the customer's contact details",
            icon: "customer",
            category: BlockCategory::Data,
            default_content: BlockContent::CustomerInfo(CustomerInfoContent {
                show_name: true,
                show_email: true,
                show_phone: true,
                show_address: true,
                show_company: false,
            }),
            default_styles: BlockStyles {
                padding: Some(Insets::uniform(16.0)),
                background_color: Some("#f9fafb".to_string()),
                border_radius: Some(6.0),
                ..BlockStyles::default()
            },
        },
        BlockType::CompanyInfo => BlockDefinition {
            block_type,
            title: "Company info",
            description: "Card with your company details",
            icon: "company",
            category: BlockCategory::Branding,
            default_content: BlockContent::CompanyInfo(CompanyInfoContent {
                show_logo: true,
                show_tagline: true,
                show_contact: true,
                show_website: true,
            }),
            default_styles: BlockStyles {
                padding: Some(Insets::uniform(16.0)),
                ..BlockStyles::default()
            },
        },
        BlockType::PricingTable => BlockDefinition {
            block_type,
            title: "Pricing table",
            description: "Line items with subtotal, tax and total",
            icon: "pricing",
            category: BlockCategory::Data,
            default_content: BlockContent::PricingTable(PricingTableContent {
                items: Vec::new(),
                tax_rate: 0.19,
                currency: "EUR".to_string(),
            }),
            default_styles: BlockStyles {
                border_width: Some(1.0),
                border_color: Some("#e5e7eb".to_string()),
                ..BlockStyles::default()
            },
        },
        BlockType::Gallery => BlockDefinition {
            block_type,
            title: "Gallery",
            description: "Image grid",
            icon: "gallery",
            category: BlockCategory::Media,
            default_content: BlockContent::Gallery(GalleryContent {
                images: Vec::new(),
                columns: 3,
            }),
            default_styles: BlockStyles::default(),
        },
        BlockType::HeroSection => BlockDefinition {
            block_type,
            title: "Hero section",
            description: "Full-width opener with title and subtitle",
            icon: "hero",
            category: BlockCategory::Layout,
            default_content: BlockContent::HeroSection(HeroSectionContent {
                title: "Your solar proposal".to_string(),
                subtitle: "Prepared individually for you".to_string(),
                background_url: None,
            }),
            default_styles: BlockStyles {
                padding: Some(Insets::symmetric(48.0, 24.0)),
                text_align: Some(TextAlign::Center),
                font_size: Some(32.0),
                font_weight: Some(FontWeight::Bold),
                ..BlockStyles::default()
            },
        },
        BlockType::Footer => BlockDefinition {
            block_type,
            title: "Footer",
            description: "Repeated page footer",
            icon: "footer",
            category: BlockCategory::Branding,
            default_content: BlockContent::Footer(FooterContent {
                text: String::new(),
                show_page_number: true,
            }),
            default_styles: BlockStyles {
                font_size: Some(10.0),
                color: Some("#6b7280".to_string()),
                text_align: Some(TextAlign::Center),
                ..BlockStyles::default()
            },
        },
        BlockType::Header => BlockDefinition {
            block_type,
            title: "Header",
            description: "Repeated page header",
            icon: "header",
            category: BlockCategory::Branding,
            default_content: BlockContent::Header(HeaderContent {
                text: String::new(),
                show_logo: true,
            }),
            default_styles: BlockStyles {
                font_size: Some(10.0),
                color: Some("#6b7280".to_string()),
                ..BlockStyles::default()
            },
        },
    }
}

/// All entries in one category, in library display order.
pub fn list_by_category(category: BlockCategory) -> Vec<BlockDefinition> {
    BlockType::ALL
        .iter()
        .map(|block_type| get(*block_type))
        .filter(|definition| definition.category == category)
        .collect()
}

/// Every category that has at least one entry, in first-seen order.
pub fn categories() -> Vec<BlockCategory> {
    let mut seen = Vec::new();
    for block_type in BlockType::ALL {
        let category = get(block_type).category;
        if !seen.contains(&category) {
            seen.push(category);
        }
    }
    seen
}
