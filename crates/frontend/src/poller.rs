//! Periodic refresh task tied to the view lifetime.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use contracts::inventory::FetchResult;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::state::BoardState;

pub const POLL_INTERVAL_MS: u32 = 60_000;

/// Loads once immediately, then refreshes every [`POLL_INTERVAL_MS`].
///
/// Only the initial load drives the loading indicator or surfaces an
/// error; background ticks keep the last-good display on failure and
/// just log. Each tick awaits its fetch before sleeping again, so polls
/// never overlap even when a request runs long. The loop stops when the
/// owning view is cleaned up; the alive flag is re-checked after every
/// await because a fetch resolving after cleanup must not touch the
/// view's disposed signals.
pub fn start_polling<F, Fut>(state: BoardState, fetch: F)
where
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<FetchResult, String>> + 'static,
{
    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    state.loading.set(true);
    spawn_local(async move {
        let result = fetch().await;
        if !alive.load(Ordering::Relaxed) {
            return;
        }
        match result {
            Ok(fresh) => state.commit(fresh),
            Err(message) => state.fail(message, true),
        }

        loop {
            TimeoutFuture::new(POLL_INTERVAL_MS).await;
            if !alive.load(Ordering::Relaxed) {
                break;
            }
            let result = fetch().await;
            if !alive.load(Ordering::Relaxed) {
                break;
            }
            match result {
                Ok(fresh) => state.commit(fresh),
                Err(message) => state.fail(message, false),
            }
        }
    });
}
