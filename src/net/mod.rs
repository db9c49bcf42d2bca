//! Network layer: wire types shared with the backend and REST helpers.

pub mod api;
pub mod types;
