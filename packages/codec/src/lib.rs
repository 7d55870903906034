//! # Proposal Template Codec
//!
//! Converts the in-memory document model to and from the persisted
//! template format, and produces the request payload for the rendering
//! collaborator.
//!
//! ## Contracts
//!
//! - `deserialize(serialize(state))` reproduces blocks, global styles and
//!   canvas size field-for-field; UI state (selection, preview, dirty) and
//!   history are never persisted.
//! - Decoding reports the block index and type tag of the first offending
//!   block.
//! - Projection to [`PreviewRequest`] performs no rendering.

mod decode;
mod preview;
mod record;

pub use decode::{
    decode_template, decode_template_str, encode_template, encode_template_str, DecodeError,
};
pub use preview::{
    to_preview_request, CompanyData, CustomerData, ExportFormat, ExportOptions, ExportOrientation,
    PreviewRequest, PreviewResponse,
};
pub use record::{deserialize, serialize, TemplateMeta, TemplateRecord};
