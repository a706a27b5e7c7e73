mod cards;
mod table;

pub use cards::CardBoard;
pub use table::StockTable;

use leptos::prelude::*;

use crate::state::BoardState;

/// Persistent "last updated" line shown above both views: the opaque
/// server token plus the client wall-clock of the last successful poll.
#[component]
pub fn BoardStatus(state: BoardState) -> impl IntoView {
    view! {
        <p class="board-status">
            "마지막 업데이트: "
            {move || state.snapshot.get().updated_at.unwrap_or_default()}
            {move || state.checked_at.get().map(|t| format!(" (확인 {})", t))}
        </p>
    }
}
