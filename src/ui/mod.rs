//! Terminal front end: rendering and prompts

pub mod picker;
pub mod render;
