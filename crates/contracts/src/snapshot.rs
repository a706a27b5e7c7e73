//! Change detection between fetch cycles.

use crate::inventory::{FetchResult, InventoryItem};

/// The last committed fetch cycle. Items and the server token always move
/// together, so the board never shows a list from one cycle next to the
/// timestamp of another.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardSnapshot {
    pub items: Vec<InventoryItem>,
    pub updated_at: Option<String>,
}

impl BoardSnapshot {
    /// Applies one fetch cycle. When the server token is unchanged the
    /// fresh list is discarded and the snapshot stays untouched. Returns
    /// whether anything was replaced.
    pub fn apply(&mut self, fresh: FetchResult) -> bool {
        if self.updated_at.as_deref() == Some(fresh.updated_at.as_str()) {
            return false;
        }
        self.items = fresh.items;
        self.updated_at = Some(fresh.updated_at);
        true
    }
}
