//! Resolution of canonical pixel formats into weight matrix rows.

use super::HalPixelFormat;
use derive_enum_all_values::AllValues;

/// A canonical format which takes part in weighted selection.
///
/// Each value is a row of every [`HardwareBlock`] weight matrix. Formats without a
/// [`RequestFormat`] are never scored; the selector hands them back unchanged.
///
/// [`HardwareBlock`]: crate::HardwareBlock
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum RequestFormat {
    /// [`HalPixelFormat::Rgba8888`]
    Rgba8888 = 0,
    /// [`HalPixelFormat::Rgbx8888`]
    Rgbx8888 = 1,
    /// [`HalPixelFormat::Rgb888`]
    Rgb888 = 2,
    /// [`HalPixelFormat::Rgb565`]
    Rgb565 = 3,
    /// [`HalPixelFormat::Bgra8888`]
    Bgra8888 = 4,
    /// [`HalPixelFormat::SrgbA8888`]
    SrgbA8888 = 5,
    /// [`HalPixelFormat::SrgbX8888`]
    SrgbX8888 = 6,
    /// [`HalPixelFormat::Yv12`]
    Yv12 = 7,
    /// [`HalPixelFormat::Y8`]
    Y8 = 8,
    /// [`HalPixelFormat::Y16`]
    Y16 = 9,
    /// [`HalPixelFormat::YCbCr420_888`]
    YCbCr420_888 = 10,
}

impl RequestFormat {
    /// Number of rows in a weight matrix.
    pub const COUNT: usize = Self::all_values().len();

    /// Resolves a raw canonical format.
    ///
    /// Returns [`None`] for anything which isn't explicitly classified, including
    /// [`HalPixelFormat::ImplementationDefined`].
    pub const fn resolve(format: i32) -> Option<Self> {
        match HalPixelFormat::from_raw(format) {
            Some(format) => Self::from_pixel_format(format),
            None => None,
        }
    }

    /// Resolves a known canonical format.
    pub const fn from_pixel_format(format: HalPixelFormat) -> Option<Self> {
        Some(match format {
            HalPixelFormat::Rgba8888 => Self::Rgba8888,
            HalPixelFormat::Rgbx8888 => Self::Rgbx8888,
            HalPixelFormat::Rgb888 => Self::Rgb888,
            HalPixelFormat::Rgb565 => Self::Rgb565,
            HalPixelFormat::Bgra8888 => Self::Bgra8888,
            HalPixelFormat::SrgbA8888 => Self::SrgbA8888,
            HalPixelFormat::SrgbX8888 => Self::SrgbX8888,
            HalPixelFormat::Yv12 => Self::Yv12,
            HalPixelFormat::Y8 => Self::Y8,
            HalPixelFormat::Y16 => Self::Y16,
            HalPixelFormat::YCbCr420_888 => Self::YCbCr420_888,
            HalPixelFormat::YCrCbNv12_10 | HalPixelFormat::ImplementationDefined => return None,
        })
    }

    /// Returns the row with the given index.
    pub const fn from_index(index: usize) -> Option<Self> {
        let all = Self::all_values();
        if index < all.len() {
            Some(all[index])
        } else {
            None
        }
    }

    /// The row index of this format.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The canonical format this row stands for.
    pub const fn pixel_format(self) -> HalPixelFormat {
        match self {
            Self::Rgba8888 => HalPixelFormat::Rgba8888,
            Self::Rgbx8888 => HalPixelFormat::Rgbx8888,
            Self::Rgb888 => HalPixelFormat::Rgb888,
            Self::Rgb565 => HalPixelFormat::Rgb565,
            Self::Bgra8888 => HalPixelFormat::Bgra8888,
            Self::SrgbA8888 => HalPixelFormat::SrgbA8888,
            Self::SrgbX8888 => HalPixelFormat::SrgbX8888,
            Self::Yv12 => HalPixelFormat::Yv12,
            Self::Y8 => HalPixelFormat::Y8,
            Self::Y16 => HalPixelFormat::Y16,
            Self::YCbCr420_888 => HalPixelFormat::YCbCr420_888,
        }
    }
}

/// Diagnostic form of [`RequestFormat::resolve`]: the row index, or `-1` if unclassified.
pub fn resolve_index(format: i32) -> i32 {
    RequestFormat::resolve(format).map_or(-1, |request| request.index() as i32)
}
