//! Navigation guard core.
//!
//! DESIGN
//! ======
//! Split into a one-shot [`gate::SessionGate`] (make the very first
//! navigation wait for the session probe, exactly once, even if several
//! navigations race) and a pure [`guard::GuardPolicy`] (decide allow vs
//! redirect from the target path and the live identity). Both are plain
//! single-threaded types so the whole flow is unit-testable off-browser;
//! `app::NavigationGuard` wires them to the router.

pub mod gate;
pub mod guard;

pub use gate::SessionGate;
pub use guard::{guard_navigation, GuardDecision, GuardPolicy, NavigationRequest};
