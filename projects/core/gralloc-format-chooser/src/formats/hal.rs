//! Canonical (HAL) pixel formats and the ARM specific base format ids.
//!
//! Two families of ids end up in the low 32 bits of an [`ExtendedFormat`]:
//!
//! - [`HalPixelFormat`]: the logical formats requested by consumers. For uncompressed and
//!   RGB(A) compressed layouts the HAL value doubles as the base id.
//! - [`ArmFormat`]: YUV layouts which have no HAL value of their own (compressed 8/10-bit YUV,
//!   and the extended 10-bit YUV layouts).
//!
//! The ARM ids are kept below `0x100` so they can be addressed from every private format range
//! (see [`crate::private_format`]), and they never collide with a HAL value.
//!
//! [`ExtendedFormat`]: crate::formats::ExtendedFormat

use derive_enum_all_values::AllValues;

/// A canonical pixel format, as requested by the allocating consumer.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum HalPixelFormat {
    /// 32-bit RGBA, 8 bits per channel.
    Rgba8888 = 0x1,
    /// 32-bit RGB with an unused padding channel.
    Rgbx8888 = 0x2,
    /// Packed 24-bit RGB.
    Rgb888 = 0x3,
    /// 16-bit RGB (5:6:5).
    Rgb565 = 0x4,
    /// 32-bit BGRA, 8 bits per channel.
    Bgra8888 = 0x5,
    /// sRGB encoded RGBA.
    SrgbA8888 = 0xC,
    /// sRGB encoded RGBX.
    SrgbX8888 = 0xD,
    /// 10-bit semi-planar YUV 4:2:0, as produced by some video decoders.
    YCrCbNv12_10 = 0x17,
    /// Placeholder format resolved by the allocator.
    ImplementationDefined = 0x22,
    /// Flexible YUV 4:2:0.
    YCbCr420_888 = 0x23,
    /// Single 8-bit luma plane.
    Y8 = 0x2020_3859,
    /// Single 16-bit luma plane.
    Y16 = 0x2036_3159,
    /// Planar YVU 4:2:0.
    Yv12 = 0x3231_5659,
}

impl HalPixelFormat {
    /// Converts a raw HAL value into a known format, if it is one.
    pub const fn from_raw(value: i32) -> Option<Self> {
        Some(match value {
            0x1 => Self::Rgba8888,
            0x2 => Self::Rgbx8888,
            0x3 => Self::Rgb888,
            0x4 => Self::Rgb565,
            0x5 => Self::Bgra8888,
            0xC => Self::SrgbA8888,
            0xD => Self::SrgbX8888,
            0x17 => Self::YCrCbNv12_10,
            0x22 => Self::ImplementationDefined,
            0x23 => Self::YCbCr420_888,
            0x2020_3859 => Self::Y8,
            0x2036_3159 => Self::Y16,
            0x3231_5659 => Self::Yv12,
            _ => return None,
        })
    }

    /// The raw HAL value.
    pub const fn raw(self) -> i32 {
        self as i32
    }

    /// The value used as the base id of an extended format.
    pub const fn base_id(self) -> u32 {
        self as u32
    }
}

/// YUV layouts which only exist as internal formats.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum ArmFormat {
    /// AFBC compressed 8-bit YUV 4:2:0.
    Yuv420Afbc8Bit = 0x80,
    /// AFBC compressed 8-bit YUV 4:2:2.
    Yuv422Afbc8Bit = 0x81,
    /// AFBC compressed 10-bit YUV 4:2:0.
    Yuv420Afbc10Bit = 0x82,
    /// AFBC compressed 10-bit YUV 4:2:2.
    Yuv422Afbc10Bit = 0x83,
    /// Packed 10-bit YUV 4:2:0 (2x2 luma + chroma per 64 bits).
    Y0L2 = 0x84,
    /// Semi-planar 10-bit YUV 4:2:0, 16 bits per sample.
    P010 = 0x85,
    /// Semi-planar 10-bit YUV 4:2:2, 16 bits per sample.
    P210 = 0x86,
    /// Packed 10-bit YUV 4:2:2.
    Y210 = 0x87,
    /// Packed 10-bit YUV 4:4:4 with 2-bit alpha.
    Y410 = 0x88,
}

impl ArmFormat {
    /// Looks up the ARM format with the given base id.
    pub const fn from_base_id(base_id: u32) -> Option<Self> {
        Some(match base_id {
            0x80 => Self::Yuv420Afbc8Bit,
            0x81 => Self::Yuv422Afbc8Bit,
            0x82 => Self::Yuv420Afbc10Bit,
            0x83 => Self::Yuv422Afbc10Bit,
            0x84 => Self::Y0L2,
            0x85 => Self::P010,
            0x86 => Self::P210,
            0x87 => Self::Y210,
            0x88 => Self::Y410,
            _ => return None,
        })
    }

    /// The value used as the base id of an extended format.
    pub const fn base_id(self) -> u32 {
        self as u32
    }

    /// Whether this is one of the AFBC compressed 8-bit YUV layouts.
    pub const fn is_afbc_8bit_yuv(self) -> bool {
        matches!(self, Self::Yuv420Afbc8Bit | Self::Yuv422Afbc8Bit)
    }

    /// Whether this is one of the AFBC compressed 10-bit YUV layouts.
    pub const fn is_afbc_10bit_yuv(self) -> bool {
        matches!(self, Self::Yuv420Afbc10Bit | Self::Yuv422Afbc10Bit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hal_formats_roundtrip_through_raw_values() {
        for format in HalPixelFormat::all_values() {
            assert_eq!(HalPixelFormat::from_raw(format.raw()), Some(*format));
        }
        assert_eq!(HalPixelFormat::from_raw(0), None);
        assert_eq!(HalPixelFormat::from_raw(0x7F), None);
    }

    #[test]
    fn arm_ids_do_not_collide_with_hal_values() {
        for arm in ArmFormat::all_values() {
            assert!(arm.base_id() < 0x100);
            assert_eq!(HalPixelFormat::from_raw(arm.base_id() as i32), None);
            assert_eq!(ArmFormat::from_base_id(arm.base_id()), Some(*arm));
        }
    }
}
