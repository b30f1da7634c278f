//! Extended (internal) format representation and its packed 64-bit encoding.
//!
//! Internally an extended format is a tagged pair: a base format id plus a set of
//! [`FormatModifiers`]. It is only packed into the 64-bit wire code at the interface boundary.
//!
//! # The Code Format
//!
//! The code is a [`u64`] with the following layout:
//!
//! `u32` - Base format id ([`HalPixelFormat`] or [`ArmFormat`] value)
//! `u1`  - AFBC
//! `u1`  - AFBC split block
//! `u1`  - AFBC wide block
//! `u1`  - ARM AFBC YUV
//! `u1`  - Extended (10-bit) YUV
//! `u27` - Reserved, always zero.
//!
//! The base id and the modifier bits never overlap, so the encoding is a plain bitwise OR.
//!
//! [`HalPixelFormat`]: crate::formats::HalPixelFormat
//! [`ArmFormat`]: crate::formats::ArmFormat

use bitfield::bitfield;
use bitflags::bitflags;

/// Mask of the base format id within a packed code.
pub const FORMAT_MASK: u64 = 0x0000_0000_FFFF_FFFF;

/// Mask of the modifier bits within a packed code.
pub const MODIFIER_MASK: u64 = 0xFFFF_FFFF_0000_0000;

/// Bit position of the first modifier bit within a packed code.
pub const MODIFIER_SHIFT: u32 = 32;

bitflags! {
    /// Modifier flags of an extended format.
    ///
    /// Split block and wide block are AFBC sub-modes, so they carry the [`FormatModifiers::AFBC`]
    /// bit with them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FormatModifiers: u32 {
        /// ARM frame buffer compression.
        const AFBC = 1 << 0;
        /// AFBC using split blocks.
        const AFBC_SPLITBLK = Self::AFBC.bits() | (1 << 1);
        /// AFBC using wide (32x8) superblocks.
        const AFBC_WIDEBLK = Self::AFBC.bits() | (1 << 2);
        /// 8 or 10-bit YUV in the ARM specific AFBC layout.
        const AFBC_YUV = 1 << 3;
        /// Uncompressed (or compressed) 10-bit YUV.
        const EXTENDED_YUV = 1 << 4;

        /// Every bit which marks a layout as compressed.
        const COMPRESSION = Self::AFBC.bits()
            | Self::AFBC_SPLITBLK.bits()
            | Self::AFBC_WIDEBLK.bits()
            | Self::AFBC_YUV.bits();
    }
}

bitfield! {
    /// Packed 64-bit extended format code, as handed to the allocator.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ExtendedFormatCode(u64);
    impl Debug;
    u64;

    /// Base format id (32 bits)
    pub base_id, set_base_id: 31, 0;
    /// All modifier bits (32 bits)
    pub modifier_bits, set_modifier_bits: 63, 32;
    /// AFBC flag
    pub afbc, _: 32;
    /// AFBC split block flag
    pub afbc_split_block, _: 33;
    /// AFBC wide block flag
    pub afbc_wide_block, _: 34;
    /// ARM AFBC YUV flag
    pub afbc_yuv, _: 35;
    /// Extended YUV flag
    pub extended_yuv, _: 36;
}

impl ExtendedFormatCode {
    /// The raw packed value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for ExtendedFormatCode {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ExtendedFormatCode> for u64 {
    fn from(code: ExtendedFormatCode) -> Self {
        code.0
    }
}

/// A physical buffer layout: base format id plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ExtendedFormat {
    /// The base format id (a HAL pixel format or an ARM specific id).
    pub base_id: u32,
    /// The modifiers applied to the base format.
    pub modifiers: FormatModifiers,
}

impl ExtendedFormat {
    /// The empty format; the "no allocation" sentinel.
    pub const NONE: Self = Self::new(0, FormatModifiers::empty());

    /// Creates a new extended format.
    pub const fn new(base_id: u32, modifiers: FormatModifiers) -> Self {
        Self { base_id, modifiers }
    }

    /// An uncompressed format with no modifiers.
    pub const fn plain(base_id: u32) -> Self {
        Self::new(base_id, FormatModifiers::empty())
    }

    /// Whether this layout carries any compression related modifier.
    pub const fn is_compressed(&self) -> bool {
        self.modifiers.intersects(FormatModifiers::COMPRESSION)
    }

    /// Packs the format into its 64-bit code.
    pub fn encode(self) -> ExtendedFormatCode {
        let mut code = ExtendedFormatCode::default();
        code.set_base_id(u64::from(self.base_id));
        code.set_modifier_bits(u64::from(self.modifiers.bits()));
        code
    }

    /// Packs the format into its raw 64-bit value.
    pub fn to_u64(self) -> u64 {
        self.encode().raw()
    }

    /// Unpacks a 64-bit code. Unknown modifier bits are retained.
    pub fn decode(code: ExtendedFormatCode) -> Self {
        Self::new(
            code.base_id() as u32,
            FormatModifiers::from_bits_retain(code.modifier_bits() as u32),
        )
    }
}

impl From<ExtendedFormat> for u64 {
    fn from(format: ExtendedFormat) -> Self {
        format.to_u64()
    }
}

impl From<ExtendedFormat> for ExtendedFormatCode {
    fn from(format: ExtendedFormat) -> Self {
        format.encode()
    }
}

impl core::fmt::Display for ExtendedFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:#x}", self.to_u64())
    }
}
