//! Error types of the format selector.

use thiserror::Error;

/// Errors returned when a requested format can't be turned into a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The value is outside every private format range.
    #[error("Invalid private format: {0:#x}")]
    InvalidFormat(i32),

    /// A YUV wide block layout was requested, but the platform can't produce it.
    #[error("Wide block AFBC is not supported for YUV base format {0:#x}")]
    UnsupportedWideBlockFormat(u32),
}

/// Errors raised while building or loading a [`BlockTable`].
///
/// [`BlockTable`]: crate::BlockTable
#[derive(Debug, Error)]
pub enum BlockTableError {
    /// A block would match no usage at all, so it could never take part in selection.
    #[error("Hardware block {index} has an empty usage mask")]
    EmptyUsageMask {
        /// Position of the block within the table.
        index: usize,
    },

    /// The table holds more blocks than can be reported through the C interface.
    #[error("Too many hardware blocks: {0}")]
    TooManyBlocks(usize),

    /// Serialized table data could not be decoded.
    #[error("Failed to decode block table: {0}")]
    Decode(bincode::error::DecodeError),

    /// The table could not be serialized.
    #[error("Failed to encode block table: {0}")]
    Encode(bincode::error::EncodeError),
}
