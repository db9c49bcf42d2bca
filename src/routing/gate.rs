#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use std::cell::RefCell;
use std::future::Future;

use futures::future::{LocalBoxFuture, Shared};
use futures::FutureExt;

/// One-shot initialization gate for the session probe.
///
/// The first caller of [`SessionGate::ensure_ready`] runs its fetch;
/// callers that arrive while that fetch is still in flight await the same
/// shared future (their own closure is never invoked), and every caller
/// after completion returns immediately. This makes the probe exactly-once
/// no matter how many navigations race on first load.
///
/// Single-threaded by construction (`RefCell`), matching the browser's
/// event loop.
#[derive(Default)]
pub struct SessionGate {
    phase: RefCell<Phase>,
}

#[derive(Default)]
enum Phase {
    #[default]
    Idle,
    InFlight(Shared<LocalBoxFuture<'static, ()>>),
    Ready,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the one-time fetch has completed.
    pub fn is_ready(&self) -> bool {
        matches!(*self.phase.borrow(), Phase::Ready)
    }

    /// Suspend until the one-time fetch has completed, starting it if no
    /// one has yet.
    pub async fn ensure_ready<F, Fut>(&self, fetch: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        let in_flight = {
            let mut phase = self.phase.borrow_mut();
            match &*phase {
                Phase::Ready => return,
                Phase::InFlight(shared) => shared.clone(),
                Phase::Idle => {
                    let shared = fetch().boxed_local().shared();
                    *phase = Phase::InFlight(shared.clone());
                    shared
                }
            }
        };
        // Borrow released before suspending.
        in_flight.await;
        *self.phase.borrow_mut() = Phase::Ready;
    }
}
