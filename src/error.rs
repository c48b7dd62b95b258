//! Error types for the dialog system

use thiserror::Error;

/// Result type for dialog operations
pub type DialogResult<T> = std::result::Result<T, DialogError>;

/// Dialog-specific error types
#[derive(Debug, Error)]
pub enum DialogError {
    /// A required surface was not registered on the stage. A dialog with no
    /// accessibility root is a programming error, so this fails construction
    /// outright instead of attempting a degraded mount.
    #[error("required surface '{0}' not found on the stage")]
    SurfaceMissing(&'static str),

    /// A session is already mounted through this manager. Overlapping
    /// dialogs must be serialized by the caller.
    #[error("a dialog session is already mounted")]
    AlreadyMounted,
}
