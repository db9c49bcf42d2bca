//! Page components, one per route.

pub mod admin;
pub mod gallery;
pub mod home;
pub mod login;
