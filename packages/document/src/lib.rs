//! # Proposal Document Model
//!
//! Data model for the block-based proposal editor.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: blocks + styles + canvas + state  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: mutations + history + dirty state   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ codec: template records + preview payloads  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core principles
//!
//! 1. **Content is a sum type**: the payload shape is keyed by the block's
//!    type tag, so cross-type fields cannot exist.
//! 2. **Sequence order is paint order**: `z_index` only breaks stacking
//!    ties between overlapping blocks.
//! 3. **The library is total**: every block type has defaults, checked at
//!    compile time by exhaustive matching.

mod block;
mod id;
pub mod library;
mod state;
mod styles;

pub use block::{
    Block, BlockCategory, BlockContent, BlockMetadata, BlockType, CompanyInfoContent,
    CustomerInfoContent, DividerContent, FooterContent, GalleryContent, GalleryImage,
    HeaderContent, HeadingContent, HeroSectionContent, ImageContent, LineItem, Position,
    PricingTableContent, SpacerContent, TableContent, TextContent,
};
pub use id::{document_seed, IdGenerator};
pub use library::BlockDefinition;
pub use state::{DocumentSnapshot, EditorState};
pub use styles::{
    BlockStyles, CanvasSize, CanvasUnit, FontWeight, GlobalStyles, GlobalStylesPatch, Insets,
    TextAlign,
};
