//! Core modules: upload simulation and display formatting

pub mod format;
pub mod upload;
