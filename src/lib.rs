//! Path-addressed form widgets with an auto-built navigation tree.
//!
//! Widgets are registered under slash-separated paths such as
//! `"Person/Name"`.  Every folder-like prefix (`/Person`) becomes a node in
//! the navigation sidebar, and the last segment (`Name`) is the widget's
//! label.  Values are read and written by the same path.
//!
//! Rendering uses Ratatui on the terminal; pass `headless = true` to
//! [`ChibiUi::create`] to get the same registry semantics without a terminal.

pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod ui;

pub use app::event::AppEvent;
pub use app::handle::ChibiUi;
pub use app::runtime::run;
pub use config::AppConfig;
pub use crate::core::value::Value;
pub use crate::core::widget::WidgetKind;
pub use error::{Result, UiError};
