//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `ui`) so individual components can
//! depend on small focused models. Each struct is plain data wrapped in an
//! `RwSignal` and provided via context by the root component.

pub mod session;
pub mod ui;
