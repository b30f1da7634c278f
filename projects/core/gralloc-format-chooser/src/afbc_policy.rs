//! Eligibility of compressed (AFBC) layouts for a request.
//!
//! Compression only pays off for buffers which cover a large part of the display; small buffers
//! (cursors, thumbnails) are kept uncompressed. The threshold is expressed as a percentage of the
//! display area, [`AFBC_MIN_SIZE_PERCENT`].

use crate::usage::UsageFlags;

/// Minimum buffer size, as a percentage of the display area, for AFBC to be allowed.
pub const AFBC_MIN_SIZE_PERCENT: i128 = 75;

/// Decides whether compressed layouts may be chosen.
///
/// # Parameters
///
/// - `usage`: Usage of the request. [`UsageFlags::NO_AFBC`] always wins.
/// - `buffer_size`: Size of the buffer in bytes, as reported by the caller.
/// - `display_area`: `width * height` of the primary display. `0` means unknown, in which case
///   the size ratio is not applied.
pub fn afbc_allowed(usage: UsageFlags, buffer_size: i64, display_area: u64) -> bool {
    if usage.disables_afbc() {
        return false;
    }

    if display_area == 0 {
        return true;
    }

    // Widened so `size * 100` never overflows.
    (i128::from(buffer_size) * 100) / i128::from(display_area) >= AFBC_MIN_SIZE_PERCENT
}

/// [`afbc_allowed`] bound to a selector configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AfbcPolicy {
    /// Area of the primary display; `0` if unknown.
    pub display_area: u64,
    /// Never compress buffers which may be shown on an external display.
    pub no_external_afbc: bool,
}

impl AfbcPolicy {
    /// Creates a policy for a `width` x `height` display.
    pub fn new(display_width: u32, display_height: u32, no_external_afbc: bool) -> Self {
        Self {
            display_area: u64::from(display_width) * u64::from(display_height),
            no_external_afbc,
        }
    }

    /// Whether compressed layouts are eligible for this request.
    pub fn allowed(&self, usage: UsageFlags, buffer_size: i64) -> bool {
        if self.no_external_afbc && usage.contains(UsageFlags::EXTERNAL_DISP) {
            return false;
        }

        afbc_allowed(usage, buffer_size, self.display_area)
    }
}
