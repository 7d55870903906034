//! # Editor Engine
//!
//! The sole writer of the document state. One engine instance per open
//! document; hosts needing several open documents construct several
//! engines and pass them by handle. There is no process-wide editor.
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Edit → Preview → Save
//!   ↓      ↓       ↓        ↓
//! Codec  Mutations Codec   Codec + mark_saved()
//! ```
//!
//! Every recordable operation snapshots the pre-mutation state, applies
//! the mutation atomically, marks the document dirty and notifies
//! listeners. Operations that cannot complete leave the state untouched.

use chrono::Utc;
use proposal_codec::TemplateRecord;
use proposal_document::{
    library, BlockContent, BlockStyles, BlockType, CanvasUnit, DocumentSnapshot, EditorState,
    GlobalStylesPatch, IdGenerator, Position,
};
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::errors::EditorError;
use crate::events::{ChangeKind, EditorEvent, HistoryDirection, Listeners, SubscriptionId};
use crate::history::History;
use crate::mutations::{BlockPatch, Mutation};

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Maximum undo depth (0 = unlimited).
    pub max_history_size: usize,

    /// When true, undo/redo clears the dirty flag if the restored state
    /// equals the last saved snapshot. When false, undo/redo never clears
    /// it.
    pub clear_dirty_on_saved_state: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_history_size: 100,
            clear_dirty_on_saved_state: true,
        }
    }
}

/// Payload for [`EditorEngine::add_block`]: a block type plus optional
/// overrides of the library defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AddBlockRequest {
    pub block_type: BlockType,
    pub content: Option<BlockContent>,
    pub styles: Option<BlockStyles>,
    pub position: Option<Position>,
    pub title: Option<String>,
    /// Insertion index; appends when absent, clamps when out of range.
    pub index: Option<usize>,
}

impl AddBlockRequest {
    pub fn of(block_type: BlockType) -> Self {
        Self {
            block_type,
            content: None,
            styles: None,
            position: None,
            title: None,
            index: None,
        }
    }

    pub fn with_content(mut self, content: BlockContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_styles(mut self, styles: BlockStyles) -> Self {
        self.styles = Some(styles);
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn at_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

/// Mutation API over one open document.
pub struct EditorEngine {
    state: EditorState,
    history: History,
    ids: IdGenerator,
    /// Snapshot of the last saved/loaded document, for dirty re-checks.
    saved: Option<DocumentSnapshot>,
    listeners: Listeners,
    options: EngineOptions,
}

impl EditorEngine {
    /// Engine over a fresh empty document.
    pub fn new(options: EngineOptions) -> Self {
        let state = EditorState::new();
        let saved = Some(state.snapshot());
        Self {
            state,
            history: History::with_max_size(options.max_history_size),
            ids: IdGenerator::new("draft"),
            saved,
            listeners: Listeners::default(),
            options,
        }
    }

    // --- accessors -------------------------------------------------------

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    // --- events ----------------------------------------------------------

    pub fn subscribe(&mut self, listener: impl Fn(&EditorEvent) + 'static) -> SubscriptionId {
        self.listeners.subscribe(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    // --- recordable mutations -------------------------------------------

    /// Add a block built from library defaults merged with the request's
    /// overrides. Returns the new block's id. Always succeeds.
    pub fn add_block(&mut self, request: AddBlockRequest) -> String {
        let now = Utc::now();
        let definition = library::get(request.block_type);
        let mut block = definition.instantiate(self.ids.fresh(), now);

        if let Some(content) = request.content {
            if content.block_type() == request.block_type {
                block.content = content;
                if let BlockContent::PricingTable(pricing) = &mut block.content {
                    pricing.recompute();
                }
            } else {
                warn!(
                    expected = %request.block_type,
                    got = %content.block_type(),
                    "content override ignored, wrong type"
                );
            }
        }
        if let Some(styles) = &request.styles {
            block.styles.merge(styles);
        }
        if let Some(position) = request.position {
            block.position = position;
        }
        if let Some(title) = request.title {
            block.metadata.title = title;
        }

        let id = block.id.clone();
        self.apply_recorded(
            Mutation::InsertBlock {
                index: request.index,
                block,
            },
            ChangeKind::BlockAdded,
        );
        id
    }

    /// Remove a block. No-op (returns false) if the id is unknown.
    pub fn remove_block(&mut self, block_id: &str) -> bool {
        self.apply_recorded(
            Mutation::RemoveBlock {
                block_id: block_id.to_string(),
            },
            ChangeKind::BlockRemoved,
        )
    }

    /// Shallow-merge patches into a block. No-op if the id is unknown, the
    /// patch is empty, or only a type-mismatched content patch was given.
    pub fn update_block(&mut self, block_id: &str, patch: BlockPatch) -> bool {
        self.apply_recorded(
            Mutation::UpdateBlock {
                block_id: block_id.to_string(),
                patch,
            },
            ChangeKind::BlockUpdated,
        )
    }

    /// Clone a block right after itself. Returns the clone's id, or `None`
    /// if the source id is unknown.
    pub fn duplicate_block(&mut self, block_id: &str) -> Option<String> {
        let clone_id = self.ids.fresh();
        let applied = self.apply_recorded(
            Mutation::DuplicateBlock {
                block_id: block_id.to_string(),
                clone_id: clone_id.clone(),
            },
            ChangeKind::BlockDuplicated,
        );
        applied.then_some(clone_id)
    }

    /// Move a block, clamping out-of-range indices. No-op when the
    /// resolved indices are equal.
    pub fn reorder_blocks(&mut self, from: usize, to: usize) -> bool {
        self.apply_recorded(
            Mutation::ReorderBlocks { from, to },
            ChangeKind::BlocksReordered,
        )
    }

    /// Shallow-merge into the document-wide styles.
    pub fn update_global_styles(&mut self, patch: GlobalStylesPatch) -> bool {
        self.apply_recorded(
            Mutation::UpdateGlobalStyles { patch },
            ChangeKind::GlobalStylesUpdated,
        )
    }

    /// Resize the canvas.
    pub fn update_canvas_size(
        &mut self,
        width: Option<f64>,
        height: Option<f64>,
        unit: Option<CanvasUnit>,
    ) -> bool {
        self.apply_recorded(
            Mutation::UpdateCanvasSize {
                width,
                height,
                unit,
            },
            ChangeKind::CanvasResized,
        )
    }

    // --- non-recordable operations --------------------------------------

    /// Change the selection. Not recorded in history and never dirties the
    /// document. Selecting an unknown id is a no-op.
    pub fn select_block(&mut self, block_id: Option<&str>) {
        match block_id {
            Some(id) if self.state.find_block(id).is_none() => {
                warn!(block_id = id, "select ignored, no such block");
            }
            _ => {
                let next = block_id.map(str::to_string);
                if next != self.state.selected_block_id {
                    self.state.selected_block_id = next.clone();
                    self.listeners
                        .emit(&EditorEvent::SelectionChanged { block_id: next });
                }
            }
        }
    }

    /// Flip preview mode. Not recorded in history. Returns the new value.
    pub fn toggle_preview_mode(&mut self) -> bool {
        self.state.is_preview_mode = !self.state.is_preview_mode;
        let enabled = self.state.is_preview_mode;
        self.listeners
            .emit(&EditorEvent::PreviewModeChanged { enabled });
        enabled
    }

    /// Step back one recorded mutation. Returns false on an empty stack,
    /// leaving state and history byte-for-byte unchanged.
    pub fn undo(&mut self) -> bool {
        let current = self.state.snapshot();
        let Some(previous) = self.history.undo(current) else {
            return false;
        };

        self.state.restore(previous);
        self.refresh_dirty_after_history();
        self.listeners.emit(&EditorEvent::HistoryMoved {
            direction: HistoryDirection::Undo,
        });
        true
    }

    /// Step forward again after an undo. Returns false on an empty stack.
    pub fn redo(&mut self) -> bool {
        let current = self.state.snapshot();
        let Some(next) = self.history.redo(current) else {
            return false;
        };

        self.state.restore(next);
        self.refresh_dirty_after_history();
        self.listeners.emit(&EditorEvent::HistoryMoved {
            direction: HistoryDirection::Redo,
        });
        true
    }

    // --- lifecycle -------------------------------------------------------

    /// Replace the whole state from a decoded template record. Resets the
    /// history (the load is not undoable) and clears the dirty flag. On
    /// failure the current state is left untouched.
    pub fn load_template(&mut self, record: &TemplateRecord) -> Result<(), EditorError> {
        Self::validate_record(record)?;

        let state = proposal_codec::deserialize(record);
        let mut ids = IdGenerator::new(&record.id);
        ids.resync(state.blocks.iter().map(|block| block.id.as_str()));

        self.saved = Some(state.snapshot());
        self.state = state;
        self.ids = ids;
        self.history.clear();

        debug!(template_id = %record.id, blocks = self.state.blocks.len(), "template loaded");
        self.listeners.emit(&EditorEvent::TemplateLoaded);
        Ok(())
    }

    /// Decode JSON text and load it. Decode failures surface with the
    /// offending block's index and type; the current state is untouched.
    pub fn load_template_str(&mut self, json: &str) -> Result<(), EditorError> {
        let record = proposal_codec::decode_template_str(json)?;
        self.load_template(&record)
    }

    /// Discard everything and start over with an empty document and a
    /// fresh history.
    pub fn reset_editor(&mut self) {
        self.state = EditorState::new();
        self.history.clear();
        self.ids = IdGenerator::new("draft");
        self.saved = Some(self.state.snapshot());
        self.listeners.emit(&EditorEvent::EditorReset);
    }

    /// Record that the current state was successfully persisted. The host
    /// calls this only after its save request succeeds; a failed save must
    /// leave the document dirty.
    pub fn mark_saved(&mut self) {
        self.saved = Some(self.state.snapshot());
        self.state.is_dirty = false;
        self.listeners.emit(&EditorEvent::Saved);
    }

    // --- internals -------------------------------------------------------

    fn apply_recorded(&mut self, mutation: Mutation, kind: ChangeKind) -> bool {
        let before = self.state.snapshot();
        if !mutation.apply(&mut self.state, Utc::now()) {
            return false;
        }

        self.history.record(before);
        self.state.is_dirty = true;
        debug!(?kind, "mutation applied");
        self.listeners.emit(&EditorEvent::StateChanged { kind });
        true
    }

    fn refresh_dirty_after_history(&mut self) {
        let at_saved = self
            .saved
            .as_ref()
            .is_some_and(|saved| *saved == self.state.snapshot());

        if at_saved {
            if self.options.clear_dirty_on_saved_state {
                self.state.is_dirty = false;
            }
        } else {
            self.state.is_dirty = true;
        }
    }

    fn validate_record(record: &TemplateRecord) -> Result<(), EditorError> {
        let mut seen = HashSet::new();
        for (index, block) in record.blocks.iter().enumerate() {
            if block.id.trim().is_empty() {
                return Err(EditorError::EmptyBlockId { index });
            }
            if !seen.insert(block.id.as_str()) {
                return Err(EditorError::DuplicateBlockId {
                    id: block.id.clone(),
                    index,
                });
            }
        }
        Ok(())
    }
}

impl Default for EditorEngine {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}
