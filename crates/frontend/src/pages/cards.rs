//! Card-grid view over the single inventory endpoint.

use contracts::format::format_quantity;
use contracts::inventory::InventoryItem;
use leptos::prelude::*;

use super::BoardStatus;
use crate::api;
use crate::poller;
use crate::state::BoardState;

#[component]
pub fn CardBoard() -> impl IntoView {
    let state = BoardState::new();
    poller::start_polling(state, api::fetch_inventory);

    let items = move || state.snapshot.get().items;

    view! {
        <section class="board">
            <Show
                when=move || !state.loading.get()
                fallback=|| view! { <div class="spinner">"불러오는 중..."</div> }
            >
                <Show
                    when=move || state.error.get().is_none()
                    fallback=move || {
                        view! { <p class="error">{move || state.error.get()}</p> }
                    }
                >
                    <BoardStatus state=state />
                    <Show
                        when=move || !items().is_empty()
                        fallback=|| view! { <p class="empty">"데이터가 없습니다."</p> }
                    >
                        <div class="card-grid">
                            <For
                                each=move || items().into_iter().enumerate()
                                key=|(index, _)| *index
                                children=|(_, item): (usize, InventoryItem)| {
                                    view! { <ItemCard item=item /> }
                                }
                            />
                        </div>
                    </Show>
                </Show>
            </Show>
        </section>
    }
}

#[component]
fn ItemCard(item: InventoryItem) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-info">
                <h3>{item.name}</h3>
                <p>{item.brand}</p>
                <p>{item.origin}</p>
                <p>{item.trace_code.unwrap_or_else(|| "N/A".to_string())}</p>
            </div>
            <div class="card-qty">{format_quantity(item.quantity_kg)}</div>
        </div>
    }
}
