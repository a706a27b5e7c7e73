//! Table view over the two-source (stock balance + product master)
//! pipeline.

use contracts::format::{format_price, format_quantity};
use contracts::inventory::InventoryItem;
use leptos::prelude::*;

use super::BoardStatus;
use crate::api;
use crate::poller;
use crate::state::BoardState;

#[component]
pub fn StockTable() -> impl IntoView {
    let state = BoardState::new();
    poller::start_polling(state, api::fetch_merged_inventory);

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
                        <table class="stock-table">
                            <thead>
                                <tr>
                                    <th>"품명"</th>
                                    <th>"브랜드"</th>
                                    <th>"원산지"</th>
                                    <th>"수량"</th>
                                    <th>"단가"</th>
                                    <th>"이력번호"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || items().into_iter().enumerate()
                                    key=|(index, _)| *index
                                    children=|(_, item): (usize, InventoryItem)| {
                                        view! { <ItemRow item=item /> }
                                    }
                                />
                            </tbody>
                        </table>
                    </Show>
                </Show>
            </Show>
        </section>
    }
}

#[component]
fn ItemRow(item: InventoryItem) -> impl IntoView {
    let price = item
        .unit_price
        .map(format_price)
        .unwrap_or_else(|| "-".to_string());
    view! {
        <tr>
            <td>{item.name}</td>
            <td>{item.brand}</td>
            <td>{item.origin}</td>
            <td class="num">{format_quantity(item.quantity_kg)}</td>
            <td class="num">{price}</td>
            <td>{item.trace_code.unwrap_or_else(|| "N/A".to_string())}</td>
        </tr>
    }
}
