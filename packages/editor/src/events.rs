//! # Editor Events
//!
//! Subscribe/notify contract between the engine and whatever binds to it
//! (a UI layer, a sync service, a test harness). Listeners are plain
//! callbacks invoked synchronously after a state transition completes;
//! the engine stays free of any UI-toolkit dependency.

/// What kind of recordable mutation changed the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    BlockAdded,
    BlockRemoved,
    BlockUpdated,
    BlockDuplicated,
    BlocksReordered,
    GlobalStylesUpdated,
    CanvasResized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    Undo,
    Redo,
}

/// Notification emitted by the engine after a successful operation.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// A recordable mutation was applied.
    StateChanged { kind: ChangeKind },
    /// The selection changed (not recorded in history).
    SelectionChanged { block_id: Option<String> },
    /// Preview mode was toggled (not recorded in history).
    PreviewModeChanged { enabled: bool },
    /// An undo or redo step was applied.
    HistoryMoved { direction: HistoryDirection },
    /// A template replaced the whole state; history was reset.
    TemplateLoaded,
    /// The editor was reset to an empty document.
    EditorReset,
    /// The current state was marked as saved.
    Saved,
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&EditorEvent)>;

/// Registry of event listeners.
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl Listeners {
    pub(crate) fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Returns whether the subscription existed.
    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn emit(&self, event: &EditorEvent) {
        for (_, listener) in &self.entries {
            listener(event);
        }
    }
}
