//! Service Tasks
//!
//! Runs a service future on the tokio bridge and hands its output back to
//! the UI thread.
//!
//! ```text
//! controller ── spawn_service(future, apply) ──▶ run_in_tokio(future)
//!     ▲                                                 │
//!     └──────────── apply(output, &mut App) ◀───────────┘
//! ```

use std::future::Future;
use std::time::Duration;

use gpui::App;
use sysclean_core::services::run_in_tokio;

/// Run `future` on the tokio runtime and apply its output on the UI thread
pub fn spawn_service<T, F, A>(cx: &mut App, future: F, apply: A)
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
    A: FnOnce(T, &mut App) + 'static,
{
    cx.spawn(async move |cx| {
        let output = run_in_tokio(future).await;
        if cx.update(|cx| apply(output, cx)).is_err() {
            tracing::debug!("Application closed before a service call finished");
        }
    })
    .detach();
}

/// Run `apply` on the UI thread after `delay`
pub fn after<A>(cx: &mut App, delay: Duration, apply: A)
where
    A: FnOnce(&mut App) + 'static,
{
    cx.spawn(async move |cx| {
        smol::Timer::after(delay).await;
        cx.update(apply).ok();
    })
    .detach();
}
