//! One-shot delayed actions on the tokio clock.
//!
//! Everything here goes through `tokio::time`, so tests drive it with a paused
//! clock (`#[tokio::test(start_paused = true)]` and `tokio::time::advance`).

use std::time::Duration;

use tokio::runtime::{Handle, TryCurrentError};
use tokio::task::JoinHandle;

/// Handle to a scheduled action. Dropping it leaves the action scheduled.
#[derive(Debug)]
pub struct CancelHandle(JoinHandle<()>);

impl CancelHandle {
    /// Prevents the action from running if it has not run yet.
    pub fn cancel(&self) {
        self.0.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.0.is_finished()
    }
}

/// Runs `action` once, `delay` from now. The deadline is fixed here, not when
/// the spawned task is first polled. Fails outside a tokio runtime.
pub fn schedule<F>(delay: Duration, action: F) -> Result<CancelHandle, TryCurrentError>
where
    F: FnOnce() + Send + 'static,
{
    let runtime = Handle::try_current()?;
    let sleep = tokio::time::sleep(delay);
    let handle = runtime.spawn(async move {
        sleep.await;
        action();
    });
    Ok(CancelHandle(handle))
}
