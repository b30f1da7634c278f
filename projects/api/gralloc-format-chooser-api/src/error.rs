//! Error types for selector registration.

use gralloc_format_chooser::BlockTableError;
use thiserror::Error;

/// Errors that can occur while installing the process-wide selector.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A selector was installed before; the first one stays in place.
    #[error("A format selector is already installed")]
    AlreadyInstalled,

    /// The supplied block table is invalid.
    #[error("Invalid block table: {0}")]
    BlockTable(#[from] BlockTableError),
}
