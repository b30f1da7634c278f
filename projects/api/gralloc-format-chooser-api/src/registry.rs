//! The process-wide selector slot.
//!
//! The slot is written at most once. Readers get a shared reference for the lifetime of the
//! process, so requests never lock.

use crate::error::ApiError;
use gralloc_format_chooser::{
    BlockTable, ExtendedFormat, FormatSelector, SelectorConfig, UsageFlags,
};
use std::sync::OnceLock;

/// `EINVAL`, as reported by [`select_format_code`] for undecodable private formats.
pub const EINVAL: i32 = 22;

static SELECTOR: OnceLock<FormatSelector> = OnceLock::new();

/// Installs the process-wide selector.
///
/// Only the first call succeeds; later calls hand their selector back.
pub fn install(selector: FormatSelector) -> Result<(), FormatSelector> {
    SELECTOR.set(selector).inspect_err(|_| {
        log::warn!("Rejected format selector: one is already installed");
    })
}

/// Loads a serialized block table and installs a selector over it.
pub fn install_from_bytes(bytes: &[u8], config: SelectorConfig) -> Result<(), ApiError> {
    let table = BlockTable::from_bytes(bytes)?;
    install(FormatSelector::new(table, config)).map_err(|_| ApiError::AlreadyInstalled)
}

/// The installed selector, if any.
pub fn installed() -> Option<&'static FormatSelector> {
    SELECTOR.get()
}

/// Selects a format and packs it into its 64-bit code.
///
/// Failures are reported in band, as `-EINVAL` reinterpreted as [`u64`]. Without an installed
/// selector the requested format is passed through unchanged.
pub fn select_format_code(format: i32, usage: i32, buffer_size: i32) -> u64 {
    let Some(selector) = installed() else {
        log::debug!("No format selector installed, passing {format:#x} through");
        return ExtendedFormat::plain(format as u32).to_u64();
    };

    match selector.select_format(format, UsageFlags::from_raw(usage), buffer_size) {
        Ok(selected) => selected.to_u64(),
        Err(error) => {
            log::debug!("{error}");
            -(EINVAL as i64) as u64
        }
    }
}
