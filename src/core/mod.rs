//! Core data – path normalisation, value holders, the widget registry and the
//! derived navigation tree.
//!
//! Nothing in this module depends on any TUI or rendering crate, so headless
//! mode runs on exactly this code.

pub mod fs;
pub mod nav;
pub mod path;
pub mod registry;
pub mod value;
pub mod widget;
