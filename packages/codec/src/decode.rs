//! # Record Decoding
//!
//! JSON boundary for template records. Blocks are decoded one at a time so
//! a failure names the block index and the offending type tag instead of
//! pointing somewhere into a kilobyte of JSON.

use chrono::{DateTime, Utc};
use proposal_document::{Block, BlockType, CanvasSize, GlobalStyles};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::record::TemplateRecord;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Template is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Template record is malformed: {0}")]
    InvalidRecord(String),

    #[error("Block {index} has unknown type `{block_type}`")]
    UnknownBlockType { index: usize, block_type: String },

    #[error("Block {index} ({block_type}) is malformed: {reason}")]
    InvalidBlock {
        index: usize,
        block_type: String,
        reason: String,
    },
}

/// Record shell with blocks left raw so each can be decoded with context.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecord {
    id: String,
    name: String,
    #[serde(default)]
    description: Option<String>,
    blocks: Vec<Value>,
    global_styles: GlobalStyles,
    canvas_size: CanvasSize,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    user_id: String,
}

/// Decode a template record from a JSON value.
pub fn decode_template(value: Value) -> Result<TemplateRecord, DecodeError> {
    let raw: RawRecord =
        serde_json::from_value(value).map_err(|e| DecodeError::InvalidRecord(e.to_string()))?;

    let mut blocks = Vec::with_capacity(raw.blocks.len());
    for (index, block_value) in raw.blocks.into_iter().enumerate() {
        blocks.push(decode_block(index, block_value)?);
    }

    Ok(TemplateRecord {
        id: raw.id,
        name: raw.name,
        description: raw.description,
        blocks,
        global_styles: raw.global_styles,
        canvas_size: raw.canvas_size,
        created_at: raw.created_at,
        updated_at: raw.updated_at,
        user_id: raw.user_id,
    })
}

/// Decode a template record from JSON text.
pub fn decode_template_str(json: &str) -> Result<TemplateRecord, DecodeError> {
    let value: Value = serde_json::from_str(json)?;
    decode_template(value)
}

/// Encode a template record to a JSON value.
pub fn encode_template(record: &TemplateRecord) -> serde_json::Result<Value> {
    serde_json::to_value(record)
}

/// Encode a template record to JSON text.
pub fn encode_template_str(record: &TemplateRecord) -> serde_json::Result<String> {
    serde_json::to_string(record)
}

fn decode_block(index: usize, value: Value) -> Result<Block, DecodeError> {
    let block_type = value
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    if BlockType::parse_tag(&block_type).is_none() {
        return Err(DecodeError::UnknownBlockType { index, block_type });
    }

    serde_json::from_value(value).map_err(|e| DecodeError::InvalidBlock {
        index,
        block_type,
        reason: e.to_string(),
    })
}
