//! Error types for the editor

use proposal_codec::DecodeError;
use thiserror::Error;

/// Errors surfaced by the engine. Only template loading can fail; every
/// other operation resolves unknown ids and out-of-range indices by no-op
/// or clamping.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Template decode failed: {0}")]
    Decode(#[from] DecodeError),

    #[error("Invalid template: block {index} has empty id")]
    EmptyBlockId { index: usize },

    #[error("Invalid template: duplicate block id `{id}` at index {index}")]
    DuplicateBlockId { id: String, index: usize },
}
