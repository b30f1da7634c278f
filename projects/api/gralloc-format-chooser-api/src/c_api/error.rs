//! C API error handling.

use crate::error::ApiError;
use core::ffi::c_char;

/// C-compatible error codes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GfcErrorCode {
    /// Operation succeeded
    Success = 0,
    /// Null pointer provided for data parameter
    NullDataPointer = 1,
    /// The block table data could not be loaded
    InvalidBlockTable = 2,
    /// A format selector is already installed
    AlreadyInstalled = 3,
}

impl From<ApiError> for GfcErrorCode {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::AlreadyInstalled => Self::AlreadyInstalled,
            ApiError::BlockTable(_) => Self::InvalidBlockTable,
        }
    }
}

impl<T> From<Result<T, ApiError>> for GfcErrorCode {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(_) => Self::Success,
            Err(error) => error.into(),
        }
    }
}

/// Get a human-readable error message for a [`GfcErrorCode`].
///
/// # Safety
///
/// The returned pointer is valid for the lifetime of the program and must not be freed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn gfc_error_message(error_code: GfcErrorCode) -> *const c_char {
    match error_code {
        GfcErrorCode::Success => c"Success".as_ptr(),
        GfcErrorCode::NullDataPointer => c"Null pointer provided for data parameter".as_ptr(),
        GfcErrorCode::InvalidBlockTable => c"The block table data could not be loaded".as_ptr(),
        GfcErrorCode::AlreadyInstalled => c"A format selector is already installed".as_ptr(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::ffi::CStr;
    use gralloc_format_chooser::BlockTableError;
    use rstest::rstest;

    #[rstest]
    #[case(GfcErrorCode::Success, "Success")]
    #[case(GfcErrorCode::NullDataPointer, "Null pointer provided for data parameter")]
    #[case(GfcErrorCode::InvalidBlockTable, "The block table data could not be loaded")]
    #[case(GfcErrorCode::AlreadyInstalled, "A format selector is already installed")]
    fn error_messages(#[case] code: GfcErrorCode, #[case] expected: &str) {
        let message = unsafe { CStr::from_ptr(gfc_error_message(code)) };
        assert_eq!(message.to_str().unwrap(), expected);
    }

    #[test]
    fn api_errors_map_to_codes() {
        assert_eq!(
            GfcErrorCode::from(ApiError::AlreadyInstalled),
            GfcErrorCode::AlreadyInstalled
        );
        assert_eq!(
            GfcErrorCode::from(ApiError::BlockTable(BlockTableError::TooManyBlocks(1000))),
            GfcErrorCode::InvalidBlockTable
        );
        assert_eq!(
            GfcErrorCode::from(Ok::<(), ApiError>(())),
            GfcErrorCode::Success
        );
    }
}
