//! viewvoyage library
//!
//! Session and catalog stores for the viewvoyage video demo, persisted to a
//! key-value backend, plus the upload simulation and terminal front end.

pub mod app;
pub mod core;
pub mod error;
pub mod storage;
pub mod types;
pub mod ui;
pub mod utils;
