//! The C interface over the process-wide registry. Runs as a single test, as the registry can
//! only be installed once per process.
#![cfg(feature = "c-exports")]

use core::ffi::c_int;
use gralloc_format_chooser::reference::reference_block_table;
use gralloc_format_chooser::{HalPixelFormat, HardwareBlock, InternalFormat, UsageFlags};
use gralloc_format_chooser_api::c_api::{
    GfcErrorCode, GfcSelectorConfig, gralloc_get_internal_info, gralloc_install_block_table,
    gralloc_select_format,
};

#[test]
fn c_interface_lifecycle() {
    let mut size: c_int = 0;
    let mut gpu: c_int = 0;

    // Nothing installed yet.
    let table = unsafe { gralloc_get_internal_info(&mut size, &mut gpu) };
    assert!(table.is_null());

    let bytes = reference_block_table().to_bytes().unwrap();
    let config = GfcSelectorConfig {
        afbc_capable: false,
        ..GfcSelectorConfig::default()
    };
    let result = unsafe { gralloc_install_block_table(bytes.as_ptr(), bytes.len(), &config) };
    assert_eq!(result, GfcErrorCode::Success);

    let table = unsafe { gralloc_get_internal_info(&mut size, &mut gpu) };
    assert!(!table.is_null());
    assert_eq!(size, 3);
    assert_eq!(gpu, 0);

    let blocks = unsafe {
        core::slice::from_raw_parts(table.cast::<HardwareBlock>(), size as usize)
    };
    assert_eq!(blocks, reference_block_table().blocks());

    // An AFBC incapable GPU never gets compressed layouts.
    let format = gralloc_select_format(
        HalPixelFormat::Rgba8888.raw(),
        UsageFlags::HW_TEXTURE.bits() as c_int,
        1 << 24,
    );
    assert_eq!(format, InternalFormat::Rgba8888.extended_format().to_u64());

    let result =
        unsafe { gralloc_install_block_table(bytes.as_ptr(), bytes.len(), core::ptr::null()) };
    assert_eq!(result, GfcErrorCode::AlreadyInstalled);
}
