//! Application orchestration — the public handle, interactive state, event
//! sources and input handling.

pub mod event;
pub mod handle;
pub mod handler;
pub mod picker;
pub mod runtime;
pub mod state;
