use super::*;

use std::cell::Cell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::executor::{block_on, LocalPool};
use futures::task::LocalSpawnExt;

// =============================================================
// Sequential calls
// =============================================================

#[test]
fn first_call_runs_fetch_and_becomes_ready() {
    let gate = SessionGate::new();
    let calls = Rc::new(Cell::new(0u32));
    assert!(!gate.is_ready());

    let c = calls.clone();
    block_on(gate.ensure_ready(move || async move { c.set(c.get() + 1) }));

    assert!(gate.is_ready());
    assert_eq!(calls.get(), 1);
}

#[test]
fn later_calls_skip_the_fetch() {
    let gate = SessionGate::new();
    let calls = Rc::new(Cell::new(0u32));

    let c = calls.clone();
    block_on(gate.ensure_ready(move || async move { c.set(c.get() + 1) }));
    let c = calls.clone();
    block_on(gate.ensure_ready(move || async move { c.set(c.get() + 1) }));

    assert_eq!(calls.get(), 1);
}

// =============================================================
// Concurrent first navigations
// =============================================================

#[test]
fn concurrent_callers_share_one_in_flight_fetch() {
    let mut pool = LocalPool::new();
    let spawner = pool.spawner();

    let gate = Rc::new(SessionGate::new());
    let calls = Rc::new(Cell::new(0u32));
    let finished = Rc::new(Cell::new(0u32));
    let (release, released) = oneshot::channel::<()>();

    // First navigation: fetch blocks until released.
    {
        let gate = gate.clone();
        let calls = calls.clone();
        let finished = finished.clone();
        spawner
            .spawn_local(async move {
                gate.ensure_ready(move || async move {
                    calls.set(calls.get() + 1);
                    let _ = released.await;
                })
                .await;
                finished.set(finished.get() + 1);
            })
            .expect("spawn");
    }

    // Second navigation arrives while the fetch is still in flight; its
    // closure must never run.
    {
        let gate = gate.clone();
        let calls = calls.clone();
        let finished = finished.clone();
        spawner
            .spawn_local(async move {
                gate.ensure_ready(move || async move { calls.set(calls.get() + 100) })
                    .await;
                finished.set(finished.get() + 1);
            })
            .expect("spawn");
    }

    pool.run_until_stalled();
    assert_eq!(calls.get(), 1, "exactly one fetch started");
    assert_eq!(finished.get(), 0, "both navigations still suspended");
    assert!(!gate.is_ready());

    release.send(()).expect("release fetch");
    pool.run();

    assert_eq!(calls.get(), 1, "no duplicate fetch after release");
    assert_eq!(finished.get(), 2, "both navigations resumed");
    assert!(gate.is_ready());
}
