//! # Template Record
//!
//! The persisted serialization of a document, exchanged with storage.
//! Projection is pure and lossy by design: selection, preview mode, the
//! dirty flag and the history stacks are never persisted.

use chrono::{DateTime, Utc};
use proposal_document::{Block, CanvasSize, EditorState, GlobalStyles};
use serde::{Deserialize, Serialize};

/// Persisted template shape, exactly as stored and transported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRecord {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub blocks: Vec<Block>,
    pub global_styles: GlobalStyles,
    pub canvas_size: CanvasSize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: String,
}

/// Template-level metadata supplied by the host when serializing. The
/// codec never invents ids or timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateMeta {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Project an editor state into its persisted form.
pub fn serialize(state: &EditorState, meta: &TemplateMeta) -> TemplateRecord {
    TemplateRecord {
        id: meta.id.clone(),
        name: meta.name.clone(),
        description: meta.description.clone(),
        blocks: state.blocks.clone(),
        global_styles: state.global_styles.clone(),
        canvas_size: state.canvas_size,
        created_at: meta.created_at,
        updated_at: meta.updated_at,
        user_id: meta.user_id.clone(),
    }
}

/// Rehydrate an editor state from a persisted record: no selection, not in
/// preview mode, not dirty, fresh history.
pub fn deserialize(record: &TemplateRecord) -> EditorState {
    EditorState {
        blocks: record.blocks.clone(),
        selected_block_id: None,
        is_preview_mode: false,
        is_dirty: false,
        global_styles: record.global_styles.clone(),
        canvas_size: record.canvas_size,
    }
}
