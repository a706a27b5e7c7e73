use leptos::prelude::*;
use leptos_router::components::{A, Route, Router, Routes};
use leptos_router::path;

use crate::pages::{CardBoard, StockTable};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app">
                <header class="app-header">
                    <h1>"📦 재고 현황"</h1>
                    <nav>
                        <A href="/">"카드"</A>
                        <A href="/table">"표"</A>
                    </nav>
                </header>
                <main>
                    // navigating away unmounts the active view, which
                    // tears down its poll loop via on_cleanup
                    <Routes fallback=|| {
                        view! { <p class="empty">"페이지를 찾을 수 없습니다."</p> }
                    }>
                        <Route path=path!("/") view=CardBoard />
                        <Route path=path!("/table") view=StockTable />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
