//! # Editor State
//!
//! The full editable state of one open document: the block sequence, the
//! document-wide styles, the canvas, and the transient UI flags. The block
//! sequence order is the canvas paint/reading order and is preserved
//! exactly across serialization.

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::styles::{CanvasSize, GlobalStyles};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    pub blocks: Vec<Block>,
    /// At most one selected block; UI affordance only, never persisted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_block_id: Option<String>,
    pub is_preview_mode: bool,
    /// True iff the state changed since the last successful save or load.
    pub is_dirty: bool,
    pub global_styles: GlobalStyles,
    pub canvas_size: CanvasSize,
}

impl EditorState {
    /// Fresh empty document.
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            selected_block_id: None,
            is_preview_mode: false,
            is_dirty: false,
            global_styles: GlobalStyles::default(),
            canvas_size: CanvasSize::default(),
        }
    }

    pub fn find_block(&self, block_id: &str) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id == block_id)
    }

    pub fn find_block_mut(&mut self, block_id: &str) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|block| block.id == block_id)
    }

    pub fn index_of(&self, block_id: &str) -> Option<usize> {
        self.blocks.iter().position(|block| block.id == block_id)
    }

    pub fn selected_block(&self) -> Option<&Block> {
        self.selected_block_id
            .as_deref()
            .and_then(|id| self.find_block(id))
    }

    /// The persisted/undoable portion of the state.
    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            blocks: self.blocks.clone(),
            global_styles: self.global_styles.clone(),
            canvas_size: self.canvas_size,
        }
    }

    /// Replace the document portion of the state from a snapshot. The
    /// selection is kept only if the selected block still exists; the
    /// preview and dirty flags are left for the caller to manage.
    pub fn restore(&mut self, snapshot: DocumentSnapshot) {
        self.blocks = snapshot.blocks;
        self.global_styles = snapshot.global_styles;
        self.canvas_size = snapshot.canvas_size;

        if let Some(selected) = self.selected_block_id.clone() {
            if self.find_block(&selected).is_none() {
                self.selected_block_id = None;
            }
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of the undoable document state: blocks, global styles, canvas.
/// Selection, preview flag and dirty flag are deliberately excluded.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSnapshot {
    pub blocks: Vec<Block>,
    pub global_styles: GlobalStyles,
    pub canvas_size: CanvasSize,
}
