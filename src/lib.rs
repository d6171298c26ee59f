//! Agent checklist: pick tasks across three fixed categories and persist the
//! selection as a JSON snapshot plus an MDX intake document.

pub mod api;
pub mod config;
pub mod document;
pub mod models;
pub mod store;
