//! # Proposal Editor
//!
//! Mutation engine for the block-based proposal editor.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: blocks + styles + editor state    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditorEngine                        │
//! │  - Apply mutations with validation          │
//! │  - Undo/redo over document snapshots        │
//! │  - Dirty tracking against the saved state   │
//! │  - Notify listeners on every transition     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ codec: template records + preview payloads  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core principles
//!
//! 1. **One engine per document**: no ambient singleton; hosts hold the
//!    engine by handle
//! 2. **Atomic operations**: an operation either fully applies or leaves
//!    the state untouched
//! 3. **Snapshot history**: every recordable mutation is undoable; loads
//!    and resets start a fresh history
//! 4. **UI state stays local**: selection and preview mode never enter the
//!    history and are never persisted
//!
//! ## Usage
//!
//! ```rust
//! use proposal_document::BlockType;
//! use proposal_editor::{AddBlockRequest, EditorEngine, EngineOptions};
//!
//! let mut engine = EditorEngine::new(EngineOptions::default());
//!
//! let id = engine.add_block(AddBlockRequest::of(BlockType::Heading));
//! engine.select_block(Some(id.as_str()));
//!
//! assert!(engine.is_dirty());
//! assert!(engine.undo());
//! assert!(engine.state().blocks.is_empty());
//! ```

mod engine;
mod errors;
mod events;
mod history;
mod mutations;

pub use engine::{AddBlockRequest, EditorEngine, EngineOptions};
pub use errors::EditorError;
pub use events::{ChangeKind, EditorEvent, HistoryDirection, SubscriptionId};
pub use history::History;
pub use mutations::{BlockPatch, MetadataPatch, Mutation, PositionPatch};

// Re-export common types for convenience
pub use proposal_codec::{TemplateMeta, TemplateRecord};
pub use proposal_document::EditorState;
