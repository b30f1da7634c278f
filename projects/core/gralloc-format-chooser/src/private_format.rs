//! Decoding of directly encoded ("private") formats.
//!
//! A caller which sets [`UsageFlags::PRIVATE_FORMAT`] passes a layout it already knows, encoded
//! as a base format id offset into one of four ranges:
//!
//! | Base    | Range                          | Layout                  |
//! |---------|--------------------------------|-------------------------|
//! | `0x100` | [`PrivateRange::Afbc`]         | AFBC                    |
//! | `0x200` | [`PrivateRange::AfbcSplitBlk`] | AFBC, split block       |
//! | `0x400` | [`PrivateRange::YuvExt`]       | 10-bit (extended) YUV   |
//! | `0x500` | [`PrivateRange::AfbcWideBlk`]  | AFBC, wide block        |
//!
//! A value `v` belongs to a range when `base < v <= base + 0xFF`. Because the HAL id of YV12
//! doesn't fit in a byte, the three AFBC ranges also accept `base + YV12`.
//!
//! Decoding never consults the hardware block table.
//!
//! [`UsageFlags::PRIVATE_FORMAT`]: crate::UsageFlags::PRIVATE_FORMAT

use crate::error::FormatError;
use crate::formats::{ArmFormat, ExtendedFormat, FormatModifiers, HalPixelFormat};

/// Width of a private format range, past its base.
pub const PRIVATE_RANGE_SPAN: i32 = 0xFF;

/// A range of directly encoded formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrivateRange {
    /// Plain AFBC.
    Afbc,
    /// AFBC with split blocks.
    AfbcSplitBlk,
    /// Extended 10-bit YUV.
    YuvExt,
    /// AFBC with wide blocks.
    AfbcWideBlk,
}

impl PrivateRange {
    /// All ranges, in the order they are tested.
    pub const ALL: [Self; 4] = [Self::Afbc, Self::AfbcSplitBlk, Self::YuvExt, Self::AfbcWideBlk];

    /// The base offset of the range.
    pub const fn base(self) -> i32 {
        match self {
            Self::Afbc => 0x100,
            Self::AfbcSplitBlk => 0x200,
            Self::YuvExt => 0x400,
            Self::AfbcWideBlk => 0x500,
        }
    }

    /// Whether `value` is encoded in this range.
    pub const fn contains(self, value: i32) -> bool {
        let base = self.base();
        if value > base && value <= base + PRIVATE_RANGE_SPAN {
            return true;
        }

        match self {
            Self::YuvExt => false,
            _ => value == base + HalPixelFormat::Yv12.raw(),
        }
    }

    /// Finds the range `value` is encoded in.
    pub fn classify(value: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|range| range.contains(value))
    }

    /// Encodes a base id into this range. This is the value a caller passes in.
    pub const fn encode(self, base_id: u32) -> i32 {
        self.base() + base_id as i32
    }
}

/// Decoder for directly encoded formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrivateFormatDecoder {
    /// Whether the platform can produce wide block AFBC for YUV layouts.
    pub yuv_wide_block: bool,
}

impl PrivateFormatDecoder {
    /// Creates a decoder.
    pub const fn new(yuv_wide_block: bool) -> Self {
        Self { yuv_wide_block }
    }

    /// Decodes a directly encoded format into its layout.
    ///
    /// # Errors
    ///
    /// - [`FormatError::InvalidFormat`] if `value` is outside every range.
    /// - [`FormatError::UnsupportedWideBlockFormat`] for YUV ids in the wide block range, when
    ///   [`Self::yuv_wide_block`] is off.
    pub fn decode(&self, value: i32) -> Result<ExtendedFormat, FormatError> {
        let range = PrivateRange::classify(value).ok_or(FormatError::InvalidFormat(value))?;
        let base_id = (value - range.base()) as u32;
        let arm = ArmFormat::from_base_id(base_id);

        let format = match range {
            PrivateRange::Afbc => {
                let mut modifiers = FormatModifiers::AFBC;
                if arm.is_some_and(ArmFormat::is_afbc_8bit_yuv) {
                    modifiers |= FormatModifiers::AFBC_YUV;
                }
                ExtendedFormat::new(base_id, modifiers)
            }
            PrivateRange::AfbcSplitBlk => {
                // 4:2:2 has no split block variant
                let mut modifiers = FormatModifiers::AFBC_SPLITBLK;
                if arm == Some(ArmFormat::Yuv420Afbc8Bit) {
                    modifiers |= FormatModifiers::AFBC_YUV;
                }
                ExtendedFormat::new(base_id, modifiers)
            }
            PrivateRange::YuvExt => match arm {
                Some(arm) if arm.is_afbc_10bit_yuv() => ExtendedFormat::new(
                    base_id,
                    FormatModifiers::AFBC
                        | FormatModifiers::AFBC_YUV
                        | FormatModifiers::EXTENDED_YUV,
                ),
                Some(
                    ArmFormat::Y0L2
                    | ArmFormat::P010
                    | ArmFormat::P210
                    | ArmFormat::Y210
                    | ArmFormat::Y410,
                ) => ExtendedFormat::new(base_id, FormatModifiers::EXTENDED_YUV),
                _ => {
                    log::debug!("No extended YUV layout for base id {base_id:#x}");
                    ExtendedFormat::NONE
                }
            },
            PrivateRange::AfbcWideBlk => self.decode_wide_block(base_id, arm)?,
        };

        Ok(format)
    }

    fn decode_wide_block(
        &self,
        base_id: u32,
        arm: Option<ArmFormat>,
    ) -> Result<ExtendedFormat, FormatError> {
        const RGBA_8888: u32 = HalPixelFormat::Rgba8888.base_id();
        const RGBX_8888: u32 = HalPixelFormat::Rgbx8888.base_id();
        const BGRA_8888: u32 = HalPixelFormat::Bgra8888.base_id();
        const RGB_888: u32 = HalPixelFormat::Rgb888.base_id();
        const RGB_565: u32 = HalPixelFormat::Rgb565.base_id();
        const YV12: u32 = HalPixelFormat::Yv12.base_id();

        if let Some(arm) = arm.filter(|arm| arm.is_afbc_8bit_yuv() || arm.is_afbc_10bit_yuv()) {
            if !self.yuv_wide_block {
                return Err(FormatError::UnsupportedWideBlockFormat(base_id));
            }

            let modifiers = if arm.is_afbc_8bit_yuv() {
                FormatModifiers::AFBC_WIDEBLK | FormatModifiers::AFBC_YUV
            } else {
                FormatModifiers::EXTENDED_YUV | FormatModifiers::AFBC_YUV
            };
            return Ok(ExtendedFormat::new(base_id, modifiers));
        }

        let modifiers = match base_id {
            RGBA_8888 | RGBX_8888 | BGRA_8888 | RGB_888 => {
                FormatModifiers::AFBC_SPLITBLK | FormatModifiers::AFBC_WIDEBLK
            }
            RGB_565 | YV12 => FormatModifiers::AFBC_WIDEBLK,
            _ => {
                log::debug!("Wide block layout for unlisted base id {base_id:#x}");
                FormatModifiers::AFBC_WIDEBLK
            }
        };

        Ok(ExtendedFormat::new(base_id, modifiers))
    }
}
