//! # C API (FFI)
//!
//! *Note: The C API is only available when the `c-exports` feature is enabled.*
//!
//! | Function                         | Purpose                                                 |
//! |----------------------------------|---------------------------------------------------------|
//! | `gralloc_install_block_table`    | Install the process-wide selector from a serialized table |
//! | `gralloc_select_format`          | Select the internal format of an allocation             |
//! | `gralloc_get_internal_info`      | Inspect the installed block table                       |
//! | `gralloc_get_internal_format`    | Resolve a HAL format to its weight matrix row           |
//! | `gfc_error_message`              | Describe a [`GfcErrorCode`]                              |
//!
//! ```c
//! // `table` and `table_len` hold a table written by `BlockTable::to_bytes`.
//! GfcErrorCode result = gralloc_install_block_table(table, table_len, NULL);
//! if (result != GFC_SUCCESS) {
//!     fprintf(stderr, "%s\n", gfc_error_message(result));
//! }
//!
//! uint64_t format = gralloc_select_format(HAL_PIXEL_FORMAT_RGBA_8888,
//!                                         GRALLOC_USAGE_HW_TEXTURE, width * height * 4);
//! ```

pub mod error;

pub use error::GfcErrorCode;

use crate::registry;
use core::ffi::{c_int, c_void};
use gralloc_format_chooser::{SelectorConfig, SelectorConfigBuilder};

/// FFI-safe version of [`SelectorConfig`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GfcSelectorConfig {
    /// Skip selection entirely.
    pub selection_disabled: bool,
    /// Never compress buffers for external displays.
    pub no_external_afbc: bool,
    /// Framebuffer targets stay uncompressed.
    pub framebuffer_hal: bool,
    /// Wide block AFBC is available for YUV.
    pub yuv_wide_block_afbc: bool,
    /// The GPU supports AFBC.
    pub afbc_capable: bool,
    /// Width of the primary display, `0` if unknown.
    pub display_width: u32,
    /// Height of the primary display, `0` if unknown.
    pub display_height: u32,
}

impl Default for GfcSelectorConfig {
    fn default() -> Self {
        SelectorConfig::default().into()
    }
}

impl From<SelectorConfig> for GfcSelectorConfig {
    fn from(config: SelectorConfig) -> Self {
        Self {
            selection_disabled: config.selection_disabled,
            no_external_afbc: config.no_external_afbc,
            framebuffer_hal: config.framebuffer_hal,
            yuv_wide_block_afbc: config.yuv_wide_block_afbc,
            afbc_capable: config.afbc_capable,
            display_width: config.display_width,
            display_height: config.display_height,
        }
    }
}

impl From<GfcSelectorConfig> for SelectorConfig {
    fn from(config: GfcSelectorConfig) -> Self {
        SelectorConfigBuilder::new()
            .selection_disabled(config.selection_disabled)
            .no_external_afbc(config.no_external_afbc)
            .framebuffer_hal(config.framebuffer_hal)
            .yuv_wide_block_afbc(config.yuv_wide_block_afbc)
            .afbc_capable(config.afbc_capable)
            .display_size(config.display_width, config.display_height)
            .build()
    }
}

/// Installs the process-wide selector from a serialized block table.
///
/// # Parameters
///
/// - `data`: Serialized block table (see `BlockTable::to_bytes`)
/// - `len`: Length of `data` in bytes
/// - `config`: Selector switches, or null for the defaults
///
/// # Returns
///
/// [`GfcErrorCode::Success`], or the reason the selector was not installed.
///
/// # Safety
///
/// - `data` must be valid for reads of `len` bytes
/// - `config` must be null or point to a valid [`GfcSelectorConfig`]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn gralloc_install_block_table(
    data: *const u8,
    len: usize,
    config: *const GfcSelectorConfig,
) -> GfcErrorCode {
    if data.is_null() {
        return GfcErrorCode::NullDataPointer;
    }

    let bytes = unsafe { core::slice::from_raw_parts(data, len) };
    let config = unsafe { config.as_ref() }.copied().unwrap_or_default();
    registry::install_from_bytes(bytes, config.into()).into()
}

/// Selects the internal format of an allocation.
///
/// # Returns
///
/// The packed extended format code; `-EINVAL` (as an unsigned 64-bit value) for private formats
/// which can't be decoded.
#[unsafe(no_mangle)]
pub extern "C" fn gralloc_select_format(req_format: c_int, usage: c_int, buffer_size: c_int) -> u64 {
    registry::select_format_code(req_format, usage, buffer_size)
}

/// Exposes the installed block table for inspection.
///
/// On success `*blkconf_size` receives the number of blocks and `*gpu_conf` is `1` when the GPU
/// supports AFBC, `0` otherwise. The returned table must not be written to.
///
/// # Returns
///
/// Address of the first block, or null if either pointer is null, no selector is installed,
/// or selection is disabled. Nothing is written in that case.
///
/// # Safety
///
/// `blkconf_size` and `gpu_conf` must each be null or valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn gralloc_get_internal_info(
    blkconf_size: *mut c_int,
    gpu_conf: *mut c_int,
) -> *const c_void {
    if blkconf_size.is_null() || gpu_conf.is_null() {
        return core::ptr::null();
    }

    let Some(info) = registry::installed().and_then(|selector| selector.configuration()) else {
        return core::ptr::null();
    };

    // Tables hold at most `MAX_BLOCKS` entries.
    unsafe {
        *blkconf_size = info.blocks.len() as c_int;
        *gpu_conf = c_int::from(info.afbc_capable);
    }
    info.blocks.as_ptr().cast()
}

/// Resolves a HAL format to its weight matrix row, `-1` if it takes no part in selection.
#[unsafe(no_mangle)]
pub extern "C" fn gralloc_get_internal_format(hal_format: c_int) -> c_int {
    gralloc_format_chooser::resolve_index(hal_format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn config_conversions_preserve_every_switch() {
        let config = SelectorConfigBuilder::new()
            .no_external_afbc(true)
            .framebuffer_hal(false)
            .display_size(800, 600)
            .build();

        let ffi = GfcSelectorConfig::from(config);
        assert_eq!(SelectorConfig::from(ffi), config);
        assert_eq!(
            SelectorConfig::from(GfcSelectorConfig::default()),
            SelectorConfig::default()
        );
    }

    #[test]
    fn install_rejects_null_data() {
        let result = unsafe { gralloc_install_block_table(core::ptr::null(), 16, core::ptr::null()) };
        assert_eq!(result, GfcErrorCode::NullDataPointer);
    }

    #[test]
    fn install_rejects_garbage() {
        let data = [0xFFu8; 3];
        let result =
            unsafe { gralloc_install_block_table(data.as_ptr(), data.len(), core::ptr::null()) };
        assert_eq!(result, GfcErrorCode::InvalidBlockTable);
    }

    #[test]
    fn internal_info_needs_both_pointers() {
        let mut size: c_int = -5;
        let mut gpu: c_int = -5;

        let table =
            unsafe { gralloc_get_internal_info(&mut size, core::ptr::null_mut()) };
        assert!(table.is_null());
        let table = unsafe { gralloc_get_internal_info(core::ptr::null_mut(), &mut gpu) };
        assert!(table.is_null());
        assert_eq!((size, gpu), (-5, -5));
    }

    #[rstest]
    #[case(0x1, 0)]
    #[case(0x4, 3)]
    #[case(0x3231_5659, 7)]
    #[case(0x23, 10)]
    #[case(0x22, -1)]
    #[case(0, -1)]
    fn internal_format_index(#[case] format: c_int, #[case] expected: c_int) {
        assert_eq!(gralloc_get_internal_format(format), expected);
    }
}
