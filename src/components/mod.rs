//! Shared UI components.

pub mod nav_bar;
pub mod notice_banner;
