use gralloc_format_chooser::{BlockTableError, FormatError};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    BlockTable(#[from] BlockTableError),
    #[error(transparent)]
    Format(#[from] FormatError),
}
