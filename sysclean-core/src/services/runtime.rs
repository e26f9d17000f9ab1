//! Tokio Runtime Bridge
//!
//! GPUI drives its own executor, while reqwest and the service futures
//! expect tokio. Service calls made from the UI are shipped to a process-wide
//! tokio runtime and awaited from the GPUI task.
//!
//! ```text
//! GPUI task ── run_in_tokio(services.system.cache_files()) ──▶ tokio worker
//!     ▲                                                          │
//!     └──────────────────────── Result<T> ◀──────────────────────┘
//! ```

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::{Builder, Runtime};

static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

fn runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| {
        Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("sysclean-io")
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime")
    })
}

/// Run `future` on the tokio runtime and await its output from any executor
pub async fn run_in_tokio<F, T>(future: F) -> T
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    match runtime().spawn(future).await {
        Ok(output) => output,
        Err(e) => std::panic::resume_unwind(e.into_panic()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_in_tokio_from_a_foreign_executor() {
        let value = futures::executor::block_on(run_in_tokio(async {
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
            42
        }));
        assert_eq!(value, 42);
    }
}
