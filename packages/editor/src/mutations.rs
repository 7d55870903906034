//! # Document Mutations
//!
//! High-level semantic operations on a proposal document.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: Each mutation represents a semantic operation
//! 2. **Deterministic**: Fresh ids are assigned before application, so a
//!    serialized mutation replays to the same result
//! 3. **Validated**: Structural problems (unknown ids, out-of-range
//!    indices) resolve by clamping or no-op, never by corrupting state
//!
//! ## Mutation Semantics
//!
//! ### InsertBlock
//! - Carries the complete block, already merged with library defaults
//! - Out-of-range index clamps to the valid range; no index appends
//!
//! ### UpdateBlock
//! - Shallow-merge of content/styles/position/metadata patches
//! - Content replacement must keep the block's type; a type-mismatched
//!   payload is ignored (changing type means replacing the block)
//!
//! ### RemoveBlock
//! - Clears the selection if it pointed at the removed block
//! - Unknown id is a no-op

use chrono::{DateTime, Utc};
use proposal_document::{
    Block, BlockCategory, BlockContent, BlockStyles, CanvasUnit, EditorState, GlobalStylesPatch,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Sparse patch over a block's position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PositionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
}

impl PositionPatch {
    pub fn is_empty(&self) -> bool {
        *self == PositionPatch::default()
    }
}

/// Sparse patch over a block's metadata. Timestamps are engine-managed and
/// cannot be patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MetadataPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<BlockCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
}

impl MetadataPatch {
    pub fn is_empty(&self) -> bool {
        *self == MetadataPatch::default()
    }
}

/// Combined patch for [`Mutation::UpdateBlock`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BlockPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<BlockContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<BlockStyles>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetadataPatch>,
}

impl BlockPatch {
    pub fn is_empty(&self) -> bool {
        *self == BlockPatch::default()
    }

    pub fn content(content: BlockContent) -> Self {
        Self {
            content: Some(content),
            ..Self::default()
        }
    }

    pub fn styles(styles: BlockStyles) -> Self {
        Self {
            styles: Some(styles),
            ..Self::default()
        }
    }
}

/// Semantic mutations over the document state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Mutation {
    /// Insert a fully-built block at an index (append when absent).
    InsertBlock {
        index: Option<usize>,
        block: Block,
    },

    /// Remove a block by id.
    RemoveBlock { block_id: String },

    /// Shallow-merge patches into an existing block.
    UpdateBlock { block_id: String, patch: BlockPatch },

    /// Clone a block right after itself. The clone id is assigned by the
    /// engine before application.
    DuplicateBlock { block_id: String, clone_id: String },

    /// Move the block at `from` to `to`, shifting the blocks in between.
    ReorderBlocks { from: usize, to: usize },

    /// Shallow-merge into the document-wide styles.
    UpdateGlobalStyles { patch: GlobalStylesPatch },

    /// Resize the canvas.
    UpdateCanvasSize {
        width: Option<f64>,
        height: Option<f64>,
        unit: Option<CanvasUnit>,
    },
}

impl Mutation {
    /// Apply to the state. Returns whether the state changed; a `false`
    /// return guarantees the state is untouched.
    pub fn apply(&self, state: &mut EditorState, now: DateTime<Utc>) -> bool {
        match self {
            Mutation::InsertBlock { index, block } => Self::apply_insert(state, *index, block),
            Mutation::RemoveBlock { block_id } => Self::apply_remove(state, block_id),
            Mutation::UpdateBlock { block_id, patch } => {
                Self::apply_update(state, block_id, patch, now)
            }
            Mutation::DuplicateBlock { block_id, clone_id } => {
                Self::apply_duplicate(state, block_id, clone_id, now)
            }
            Mutation::ReorderBlocks { from, to } => Self::apply_reorder(state, *from, *to),
            Mutation::UpdateGlobalStyles { patch } => Self::apply_global_styles(state, patch),
            Mutation::UpdateCanvasSize {
                width,
                height,
                unit,
            } => Self::apply_canvas_size(state, *width, *height, *unit),
        }
    }

    fn apply_insert(state: &mut EditorState, index: Option<usize>, block: &Block) -> bool {
        let insert_index = index.unwrap_or(state.blocks.len()).min(state.blocks.len());
        state.blocks.insert(insert_index, block.clone());
        true
    }

    fn apply_remove(state: &mut EditorState, block_id: &str) -> bool {
        let Some(index) = state.index_of(block_id) else {
            warn!(block_id, "remove ignored, no such block");
            return false;
        };

        state.blocks.remove(index);
        if state.selected_block_id.as_deref() == Some(block_id) {
            state.selected_block_id = None;
        }
        true
    }

    fn apply_update(
        state: &mut EditorState,
        block_id: &str,
        patch: &BlockPatch,
        now: DateTime<Utc>,
    ) -> bool {
        if patch.is_empty() {
            return false;
        }

        let Some(block) = state.find_block_mut(block_id) else {
            warn!(block_id, "update ignored, no such block");
            return false;
        };

        let mut changed = false;

        if let Some(content) = &patch.content {
            if content.block_type() == block.content.block_type() {
                block.content = content.clone();
                if let BlockContent::PricingTable(pricing) = &mut block.content {
                    pricing.recompute();
                }
                changed = true;
            } else {
                warn!(
                    block_id,
                    expected = %block.content.block_type(),
                    got = %content.block_type(),
                    "content patch ignored, type is immutable"
                );
            }
        }

        if let Some(styles) = &patch.styles {
            block.styles.merge(styles);
            changed = true;
        }

        if let Some(position) = &patch.position {
            if !position.is_empty() {
                if let Some(x) = position.x {
                    block.position.x = x;
                }
                if let Some(y) = position.y {
                    block.position.y = y;
                }
                if let Some(z_index) = position.z_index {
                    block.position.z_index = z_index;
                }
                changed = true;
            }
        }

        if let Some(metadata) = &patch.metadata {
            if !metadata.is_empty() {
                if let Some(title) = &metadata.title {
                    block.metadata.title = title.clone();
                }
                if let Some(description) = &metadata.description {
                    block.metadata.description = Some(description.clone());
                }
                if let Some(category) = metadata.category {
                    block.metadata.category = category;
                }
                if let Some(is_locked) = metadata.is_locked {
                    block.metadata.is_locked = is_locked;
                }
                if let Some(is_visible) = metadata.is_visible {
                    block.metadata.is_visible = is_visible;
                }
                changed = true;
            }
        }

        if changed {
            block.touch(now);
        }
        changed
    }

    fn apply_duplicate(
        state: &mut EditorState,
        block_id: &str,
        clone_id: &str,
        now: DateTime<Utc>,
    ) -> bool {
        let Some(index) = state.index_of(block_id) else {
            warn!(block_id, "duplicate ignored, no such block");
            return false;
        };

        let mut clone = state.blocks[index].clone();
        clone.id = clone_id.to_string();
        clone.position.x += 16.0;
        clone.position.y += 16.0;
        clone.metadata.title = format!("{} (copy)", clone.metadata.title);
        clone.metadata.created_at = now;
        clone.metadata.updated_at = now;

        state.blocks.insert(index + 1, clone);
        true
    }

    fn apply_reorder(state: &mut EditorState, from: usize, to: usize) -> bool {
        if state.blocks.is_empty() {
            return false;
        }

        let last = state.blocks.len() - 1;
        let from = from.min(last);
        let to = to.min(last);
        if from == to {
            return false;
        }

        let block = state.blocks.remove(from);
        state.blocks.insert(to, block);
        true
    }

    fn apply_global_styles(state: &mut EditorState, patch: &GlobalStylesPatch) -> bool {
        if patch.is_empty() {
            return false;
        }
        state.global_styles.merge(patch);
        true
    }

    fn apply_canvas_size(
        state: &mut EditorState,
        width: Option<f64>,
        height: Option<f64>,
        unit: Option<CanvasUnit>,
    ) -> bool {
        if width.is_none() && height.is_none() && unit.is_none() {
            return false;
        }

        if let Some(width) = width {
            state.canvas_size.width = width;
        }
        if let Some(height) = height {
            state.canvas_size.height = height;
        }
        if let Some(unit) = unit {
            state.canvas_size.unit = unit;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proposal_document::{library, BlockType, TextContent};

    fn state_with(ids: &[&str]) -> EditorState {
        let mut state = EditorState::new();
        for id in ids {
            state
                .blocks
                .push(library::get(BlockType::Text).instantiate(id.to_string(), Utc::now()));
        }
        state
    }

    #[test]
    fn test_insert_clamps_index() {
        let mut state = state_with(&["a"]);
        let block = library::get(BlockType::Heading).instantiate("b".to_string(), Utc::now());

        let mutation = Mutation::InsertBlock {
            index: Some(999),
            block,
        };
        assert!(mutation.apply(&mut state, Utc::now()));
        assert_eq!(state.blocks[1].id, "b");
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut state = state_with(&["a"]);
        let before = state.clone();

        let mutation = Mutation::RemoveBlock {
            block_id: "missing".to_string(),
        };
        assert!(!mutation.apply(&mut state, Utc::now()));
        assert_eq!(state, before);
    }

    #[test]
    fn test_remove_clears_selection() {
        let mut state = state_with(&["a", "b"]);
        state.selected_block_id = Some("a".to_string());

        let mutation = Mutation::RemoveBlock {
            block_id: "a".to_string(),
        };
        assert!(mutation.apply(&mut state, Utc::now()));
        assert_eq!(state.selected_block_id, None);
        assert_eq!(state.blocks.len(), 1);
    }

    #[test]
    fn test_update_rejects_cross_type_content() {
        let mut state = state_with(&["a"]);
        let before = state.clone();

        let patch = BlockPatch::content(BlockContent::Heading(
            proposal_document::HeadingContent {
                text: "nope".to_string(),
                level: 1,
            },
        ));
        let mutation = Mutation::UpdateBlock {
            block_id: "a".to_string(),
            patch,
        };

        assert!(!mutation.apply(&mut state, Utc::now()));
        assert_eq!(state, before);
    }

    #[test]
    fn test_update_merges_content_and_bumps_timestamp() {
        let mut state = state_with(&["a"]);
        let created = state.blocks[0].metadata.created_at;

        let later = created + chrono::Duration::seconds(5);
        let mutation = Mutation::UpdateBlock {
            block_id: "a".to_string(),
            patch: BlockPatch::content(BlockContent::Text(TextContent {
                text: "updated".to_string(),
            })),
        };
        assert!(mutation.apply(&mut state, later));

        assert_eq!(
            state.blocks[0].content,
            BlockContent::Text(TextContent {
                text: "updated".to_string()
            })
        );
        assert_eq!(state.blocks[0].metadata.created_at, created);
        assert_eq!(state.blocks[0].metadata.updated_at, later);
    }

    #[test]
    fn test_reorder_preserves_relative_order() {
        let mut state = state_with(&["a", "b", "c", "d"]);

        let mutation = Mutation::ReorderBlocks { from: 3, to: 1 };
        assert!(mutation.apply(&mut state, Utc::now()));

        let order: Vec<&str> = state.blocks.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(order, ["a", "d", "b", "c"]);
    }

    #[test]
    fn test_reorder_equal_indices_is_noop() {
        let mut state = state_with(&["a", "b"]);
        let before = state.clone();

        assert!(!Mutation::ReorderBlocks { from: 1, to: 1 }.apply(&mut state, Utc::now()));
        // Out-of-range indices clamp, which can also resolve to a no-op.
        assert!(!Mutation::ReorderBlocks { from: 7, to: 9 }.apply(&mut state, Utc::now()));
        assert_eq!(state, before);
    }

    #[test]
    fn test_duplicate_inserts_after_source() {
        let mut state = state_with(&["a", "b"]);

        let mutation = Mutation::DuplicateBlock {
            block_id: "a".to_string(),
            clone_id: "a2".to_string(),
        };
        assert!(mutation.apply(&mut state, Utc::now()));

        let order: Vec<&str> = state.blocks.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(order, ["a", "a2", "b"]);
        assert!(state.blocks[1].metadata.title.ends_with("(copy)"));
        assert_eq!(state.blocks[1].content, state.blocks[0].content);
    }

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::UpdateBlock {
            block_id: "a".to_string(),
            patch: BlockPatch::content(BlockContent::Text(TextContent {
                text: "hello".to_string(),
            })),
        };

        let json = serde_json::to_string(&mutation).unwrap();
        let deserialized: Mutation = serde_json::from_str(&json).unwrap();
        assert_eq!(mutation, deserialized);
    }
}
