//! Error type shared by the registry and the [`ChibiUi`](crate::ChibiUi) handle.

use thiserror::Error;

/// Everything that can go wrong when registering, reading or writing widgets.
#[derive(Debug, Error)]
pub enum UiError {
    /// A widget is already registered under this path.
    #[error("a widget is already registered at `{0}`")]
    DuplicatePath(String),

    /// No widget (or navigation node) exists at this path.
    #[error("path `{0}` not found")]
    NotFound(String),

    /// The path contained no segments after normalisation.
    #[error("path has no segments")]
    EmptyPath,

    /// `set` was called with a value the holder cannot store.
    #[error("`{path}` holds {expected}, cannot store {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// The UI was closed; its values are gone.
    #[error("the UI has been closed")]
    Closed,

    /// Terminal setup, drawing or teardown failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, UiError>;
