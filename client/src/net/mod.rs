//! Network adapters for the browser build.

pub mod api;
