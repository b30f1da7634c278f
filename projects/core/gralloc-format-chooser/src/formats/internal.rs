//! The candidate set: every physical layout the selector may substitute.
//!
//! The declaration order of [`InternalFormat`] is the configuration order of the weight matrix
//! columns. It is part of the selection contract: when two candidates finish with the same score,
//! the one declared first wins.

use super::{ArmFormat, ExtendedFormat, FormatModifiers, HalPixelFormat};
use derive_enum_all_values::AllValues;

/// A physical layout candidate (a weight matrix column).
#[allow(missing_docs)]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum InternalFormat {
    // Uncompressed HAL layouts
    Rgba8888,
    Rgbx8888,
    Rgb888,
    Rgb565,
    Bgra8888,
    SrgbA8888,
    SrgbX8888,
    Yv12,
    Y8,
    Y16,
    YCbCr420_888,

    // AFBC
    Rgba8888Afbc,
    Rgbx8888Afbc,
    Rgb888Afbc,
    Rgb565Afbc,
    Bgra8888Afbc,
    Yv12Afbc,
    Yuv420Afbc8Bit,
    Yuv422Afbc8Bit,

    // AFBC, split block
    Rgba8888AfbcSplitBlk,
    Rgbx8888AfbcSplitBlk,
    Rgb888AfbcSplitBlk,
    Bgra8888AfbcSplitBlk,
    Yuv420Afbc8BitSplitBlk,

    // AFBC, wide block
    Rgba8888AfbcWideBlk,
    Rgbx8888AfbcWideBlk,
    Rgb888AfbcWideBlk,
    Rgb565AfbcWideBlk,
    Bgra8888AfbcWideBlk,
    Yv12AfbcWideBlk,
    Yuv420Afbc8BitWideBlk,
    Yuv422Afbc8BitWideBlk,

    // AFBC, 10-bit YUV
    Yuv420Afbc10Bit,
    Yuv422Afbc10Bit,

    // Uncompressed 10-bit YUV
    Y0L2,
    P010,
    P210,
    Y210,
    Y410,
}

const fn hal(format: HalPixelFormat, modifiers: FormatModifiers) -> ExtendedFormat {
    ExtendedFormat::new(format.base_id(), modifiers)
}

const fn arm(format: ArmFormat, modifiers: FormatModifiers) -> ExtendedFormat {
    ExtendedFormat::new(format.base_id(), modifiers)
}

const NONE: FormatModifiers = FormatModifiers::empty();
const AFBC: FormatModifiers = FormatModifiers::AFBC;
const AFBC_YUV: FormatModifiers = FormatModifiers::AFBC.union(FormatModifiers::AFBC_YUV);
const SPLIT: FormatModifiers = FormatModifiers::AFBC_SPLITBLK;
const SPLIT_YUV: FormatModifiers = FormatModifiers::AFBC_SPLITBLK.union(FormatModifiers::AFBC_YUV);
const WIDE: FormatModifiers = FormatModifiers::AFBC_WIDEBLK;
const WIDE_SPLIT: FormatModifiers =
    FormatModifiers::AFBC_WIDEBLK.union(FormatModifiers::AFBC_SPLITBLK);
const WIDE_YUV: FormatModifiers = FormatModifiers::AFBC_WIDEBLK.union(FormatModifiers::AFBC_YUV);
const AFBC_10BIT: FormatModifiers = AFBC_YUV.union(FormatModifiers::EXTENDED_YUV);
const EXT_YUV: FormatModifiers = FormatModifiers::EXTENDED_YUV;

impl InternalFormat {
    /// Number of candidates (`LAST`); candidates occupy `[0, COUNT)`.
    pub const COUNT: usize = Self::all_values().len();

    /// Returns the candidate with the given column index.
    pub const fn from_index(index: usize) -> Option<Self> {
        let all = Self::all_values();
        if index < all.len() {
            Some(all[index])
        } else {
            None
        }
    }

    /// The column index of this candidate.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether this candidate is a compressed layout.
    pub const fn is_compressed(self) -> bool {
        self.extended_format().is_compressed()
    }

    /// The extended format this candidate is substituted with.
    pub const fn extended_format(self) -> ExtendedFormat {
        use HalPixelFormat as H;
        match self {
            Self::Rgba8888 => hal(H::Rgba8888, NONE),
            Self::Rgbx8888 => hal(H::Rgbx8888, NONE),
            Self::Rgb888 => hal(H::Rgb888, NONE),
            Self::Rgb565 => hal(H::Rgb565, NONE),
            Self::Bgra8888 => hal(H::Bgra8888, NONE),
            Self::SrgbA8888 => hal(H::SrgbA8888, NONE),
            Self::SrgbX8888 => hal(H::SrgbX8888, NONE),
            Self::Yv12 => hal(H::Yv12, NONE),
            Self::Y8 => hal(H::Y8, NONE),
            Self::Y16 => hal(H::Y16, NONE),
            Self::YCbCr420_888 => hal(H::YCbCr420_888, NONE),

            Self::Rgba8888Afbc => hal(H::Rgba8888, AFBC),
            Self::Rgbx8888Afbc => hal(H::Rgbx8888, AFBC),
            Self::Rgb888Afbc => hal(H::Rgb888, AFBC),
            Self::Rgb565Afbc => hal(H::Rgb565, AFBC),
            Self::Bgra8888Afbc => hal(H::Bgra8888, AFBC),
            Self::Yv12Afbc => hal(H::Yv12, AFBC),
            Self::Yuv420Afbc8Bit => arm(ArmFormat::Yuv420Afbc8Bit, AFBC_YUV),
            Self::Yuv422Afbc8Bit => arm(ArmFormat::Yuv422Afbc8Bit, AFBC_YUV),

            Self::Rgba8888AfbcSplitBlk => hal(H::Rgba8888, SPLIT),
            Self::Rgbx8888AfbcSplitBlk => hal(H::Rgbx8888, SPLIT),
            Self::Rgb888AfbcSplitBlk => hal(H::Rgb888, SPLIT),
            Self::Bgra8888AfbcSplitBlk => hal(H::Bgra8888, SPLIT),
            Self::Yuv420Afbc8BitSplitBlk => arm(ArmFormat::Yuv420Afbc8Bit, SPLIT_YUV),

            Self::Rgba8888AfbcWideBlk => hal(H::Rgba8888, WIDE_SPLIT),
            Self::Rgbx8888AfbcWideBlk => hal(H::Rgbx8888, WIDE_SPLIT),
            Self::Rgb888AfbcWideBlk => hal(H::Rgb888, WIDE_SPLIT),
            Self::Rgb565AfbcWideBlk => hal(H::Rgb565, WIDE),
            Self::Bgra8888AfbcWideBlk => hal(H::Bgra8888, WIDE_SPLIT),
            Self::Yv12AfbcWideBlk => hal(H::Yv12, WIDE),
            Self::Yuv420Afbc8BitWideBlk => arm(ArmFormat::Yuv420Afbc8Bit, WIDE_YUV),
            Self::Yuv422Afbc8BitWideBlk => arm(ArmFormat::Yuv422Afbc8Bit, WIDE_YUV),

            Self::Yuv420Afbc10Bit => arm(ArmFormat::Yuv420Afbc10Bit, AFBC_10BIT),
            Self::Yuv422Afbc10Bit => arm(ArmFormat::Yuv422Afbc10Bit, AFBC_10BIT),

            Self::Y0L2 => arm(ArmFormat::Y0L2, EXT_YUV),
            Self::P010 => arm(ArmFormat::P010, EXT_YUV),
            Self::P210 => arm(ArmFormat::P210, EXT_YUV),
            Self::Y210 => arm(ArmFormat::Y210, EXT_YUV),
            Self::Y410 => arm(ArmFormat::Y410, EXT_YUV),
        }
    }
}
