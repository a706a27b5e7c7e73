//! Board state container. The poller is the only writer, the views are
//! the only readers; Leptos signal scheduling gives the single-writer /
//! single-reader discipline without explicit synchronization.

use contracts::inventory::FetchResult;
use contracts::snapshot::BoardSnapshot;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct BoardState {
    /// Last committed fetch cycle (items + server token together).
    pub snapshot: RwSignal<BoardSnapshot>,
    /// Client wall-clock of the last successful poll.
    pub checked_at: RwSignal<Option<String>>,
    /// True only during the initial load.
    pub loading: RwSignal<bool>,
    /// User-facing message from a failed initial load.
    pub error: RwSignal<Option<String>>,
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            snapshot: RwSignal::new(BoardSnapshot::default()),
            checked_at: RwSignal::new(None),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
        }
    }

    /// Commits one successful fetch cycle. An unchanged server token
    /// leaves the snapshot untouched and does not notify subscribers, so
    /// the rendered list stays byte-identical across no-change polls.
    pub fn commit(&self, fresh: FetchResult) {
        self.snapshot.maybe_update(|snap| snap.apply(fresh));
        self.checked_at
            .set(Some(chrono::Local::now().format("%H:%M:%S").to_string()));
        self.loading.set(false);
        if self.error.with_untracked(|e| e.is_some()) {
            self.error.set(None);
        }
    }

    /// Records a failed fetch cycle. Only the initial load surfaces the
    /// message (and clears the loading indicator); background failures
    /// are logged and the last-good snapshot stays on screen.
    pub fn fail(&self, message: String, initial: bool) {
        if initial {
            log::error!("initial inventory load failed: {}", message);
            self.error.set(Some(message));
            self.loading.set(false);
        } else {
            log::warn!("background refresh failed: {}", message);
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
