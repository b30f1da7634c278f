//! Gralloc usage flags.

use bitflags::bitflags;

bitflags! {
    /// Usage bits of an allocation request.
    ///
    /// Unknown bits are retained so that block usage masks may refer to vendor specific bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct UsageFlags: u32 {
        /// Buffer is rarely read by the CPU.
        const SW_READ_RARELY = 0x0000_0002;
        /// Buffer is often read by the CPU.
        const SW_READ_OFTEN = 0x0000_0003;
        /// Mask of the CPU read field.
        const SW_READ_MASK = 0x0000_000F;
        /// Buffer is rarely written by the CPU.
        const SW_WRITE_RARELY = 0x0000_0020;
        /// Buffer is often written by the CPU.
        const SW_WRITE_OFTEN = 0x0000_0030;
        /// Mask of the CPU write field.
        const SW_WRITE_MASK = 0x0000_00F0;

        /// Sampled by the GPU.
        const HW_TEXTURE = 0x0000_0100;
        /// Rendered to by the GPU.
        const HW_RENDER = 0x0000_0200;
        /// Used by a 2D blitter.
        const HW_2D = 0x0000_0400;
        /// Scanned out by a hardware composer overlay.
        const HW_COMPOSER = 0x0000_0800;
        /// Framebuffer target.
        const HW_FB = 0x0000_1000;
        /// Shown on an external display.
        const EXTERNAL_DISP = 0x0000_2000;
        /// Protected content path.
        const PROTECTED = 0x0000_4000;
        /// Hardware cursor.
        const CURSOR = 0x0000_8000;
        /// Input to a video encoder.
        const HW_VIDEO_ENCODER = 0x0001_0000;
        /// Written by the camera pipeline.
        const HW_CAMERA_WRITE = 0x0002_0000;
        /// Read by the camera pipeline.
        const HW_CAMERA_READ = 0x0004_0000;
        /// Used as a RenderScript allocation.
        const RENDERSCRIPT = 0x0010_0000;

        /// Rotation field, shared with vendor format hints.
        const ROT_MASK = 0x0F00_0000;

        /// Private bit 0.
        const PRIVATE_0 = 0x1000_0000;
        /// Private bit 1.
        const PRIVATE_1 = 0x2000_0000;
        /// Private bit 2.
        const PRIVATE_2 = 0x4000_0000;
        /// Private bit 3.
        const PRIVATE_3 = 0x8000_0000;

        /// Disables compressed layouts. Only effective when both bits are present.
        const NO_AFBC = Self::PRIVATE_1.bits() | Self::PRIVATE_2.bits();
        /// The requested format is a directly encoded private format.
        const PRIVATE_FORMAT = Self::PRIVATE_3.bits();
    }
}

impl UsageFlags {
    /// Value of the rotation field which asks for P010 on the legacy path.
    pub const TO_USE_ARM_P010: u32 = 0x0A00_0000;

    /// Reinterprets the signed usage word of the C interface.
    pub const fn from_raw(usage: i32) -> Self {
        Self::from_bits_retain(usage as u32)
    }

    /// Whether any CPU read or write bit is present.
    pub const fn has_software_access(self) -> bool {
        self.intersects(Self::SW_READ_MASK.union(Self::SW_WRITE_MASK))
    }

    /// Whether the caller opted out of compressed layouts.
    pub const fn disables_afbc(self) -> bool {
        self.contains(Self::NO_AFBC)
    }

    /// Whether the requested format should be decoded as a private format.
    pub const fn requests_private_format(self) -> bool {
        self.contains(Self::PRIVATE_FORMAT)
    }

    /// The raw value of the rotation field (still in place, not shifted).
    pub const fn rotation(self) -> u32 {
        self.bits() & Self::ROT_MASK.bits()
    }
}
