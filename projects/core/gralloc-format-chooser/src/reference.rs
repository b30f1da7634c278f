//! A ready made block table for a typical Mali GPU + display platform.
//!
//! | Block   | Usage                            | Plain | AFBC | Split block | Wide block |
//! |---------|----------------------------------|-------|------|-------------|------------|
//! | GPU     | texture, render, 2D              | 50    | 100  | 50          | -          |
//! | Display | composer, framebuffer, external  | 50    | 50   | 100         | -          |
//! | Camera  | camera read/write                | 50    | -    | -           | -          |
//!
//! Every request is only ever offered its own layout family (see [`CandidateFamily`]).

use crate::block_table::BlockTable;
use crate::formats::{InternalFormat, RequestFormat};
use crate::hw_block::{
    BlockKind, HardwareBlock, WEIGHT_MOST_PREFERRED, WEIGHT_SUPPORTED, WEIGHT_UNSUPPORTED,
};
use crate::usage::UsageFlags;

/// The layouts a request can be stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateFamily {
    /// Uncompressed layout.
    pub plain: InternalFormat,
    /// AFBC layout.
    pub afbc: Option<InternalFormat>,
    /// AFBC, split block layout.
    pub split_block: Option<InternalFormat>,
    /// AFBC, wide block layout.
    pub wide_block: Option<InternalFormat>,
}

impl CandidateFamily {
    /// The family of `request`.
    pub const fn of(request: RequestFormat) -> Self {
        use InternalFormat as I;

        let (plain, afbc, split_block, wide_block) = match request {
            RequestFormat::Rgba8888 => (
                I::Rgba8888,
                Some(I::Rgba8888Afbc),
                Some(I::Rgba8888AfbcSplitBlk),
                Some(I::Rgba8888AfbcWideBlk),
            ),
            RequestFormat::Rgbx8888 => (
                I::Rgbx8888,
                Some(I::Rgbx8888Afbc),
                Some(I::Rgbx8888AfbcSplitBlk),
                Some(I::Rgbx8888AfbcWideBlk),
            ),
            RequestFormat::Rgb888 => (
                I::Rgb888,
                Some(I::Rgb888Afbc),
                Some(I::Rgb888AfbcSplitBlk),
                Some(I::Rgb888AfbcWideBlk),
            ),
            RequestFormat::Rgb565 => (
                I::Rgb565,
                Some(I::Rgb565Afbc),
                None,
                Some(I::Rgb565AfbcWideBlk),
            ),
            RequestFormat::Bgra8888 => (
                I::Bgra8888,
                Some(I::Bgra8888Afbc),
                Some(I::Bgra8888AfbcSplitBlk),
                Some(I::Bgra8888AfbcWideBlk),
            ),
            RequestFormat::SrgbA8888 => (I::SrgbA8888, None, None, None),
            RequestFormat::SrgbX8888 => (I::SrgbX8888, None, None, None),
            RequestFormat::Yv12 => (I::Yv12, Some(I::Yv12Afbc), None, Some(I::Yv12AfbcWideBlk)),
            RequestFormat::Y8 => (I::Y8, None, None, None),
            RequestFormat::Y16 => (I::Y16, None, None, None),
            RequestFormat::YCbCr420_888 => (
                I::YCbCr420_888,
                Some(I::Yuv420Afbc8Bit),
                Some(I::Yuv420Afbc8BitSplitBlk),
                Some(I::Yuv420Afbc8BitWideBlk),
            ),
        };

        Self {
            plain,
            afbc,
            split_block,
            wide_block,
        }
    }
}

/// Weights a block gives to each member of a family.
struct FamilyWeights {
    plain: i16,
    afbc: i16,
    split_block: i16,
    wide_block: i16,
}

fn family_block(kind: BlockKind, usage: UsageFlags, weights: FamilyWeights) -> HardwareBlock {
    let mut block = HardwareBlock::new(kind, usage);
    for request in RequestFormat::all_values() {
        let family = CandidateFamily::of(*request);
        block.set_weight(*request, family.plain, weights.plain);

        let compressed = [
            (family.afbc, weights.afbc),
            (family.split_block, weights.split_block),
            (family.wide_block, weights.wide_block),
        ];
        for (candidate, weight) in compressed
            .into_iter()
            .filter_map(|(candidate, weight)| Some((candidate?, weight)))
        {
            block.set_weight(*request, candidate, weight);
        }
    }
    block
}

/// The GPU: prefers AFBC, can't handle wide blocks.
pub fn gpu_block() -> HardwareBlock {
    family_block(
        BlockKind::Gpu,
        UsageFlags::HW_TEXTURE | UsageFlags::HW_RENDER | UsageFlags::HW_2D,
        FamilyWeights {
            plain: WEIGHT_SUPPORTED,
            afbc: WEIGHT_MOST_PREFERRED,
            split_block: WEIGHT_SUPPORTED,
            wide_block: WEIGHT_UNSUPPORTED,
        },
    )
}

/// The display controller: prefers split block AFBC, can't handle wide blocks.
pub fn display_block() -> HardwareBlock {
    family_block(
        BlockKind::Display,
        UsageFlags::HW_COMPOSER | UsageFlags::HW_FB | UsageFlags::EXTERNAL_DISP,
        FamilyWeights {
            plain: WEIGHT_SUPPORTED,
            afbc: WEIGHT_SUPPORTED,
            split_block: WEIGHT_MOST_PREFERRED,
            wide_block: WEIGHT_UNSUPPORTED,
        },
    )
}

/// The camera pipeline: uncompressed only.
pub fn camera_block() -> HardwareBlock {
    family_block(
        BlockKind::Camera,
        UsageFlags::HW_CAMERA_WRITE | UsageFlags::HW_CAMERA_READ,
        FamilyWeights {
            plain: WEIGHT_SUPPORTED,
            afbc: WEIGHT_UNSUPPORTED,
            split_block: WEIGHT_UNSUPPORTED,
            wide_block: WEIGHT_UNSUPPORTED,
        },
    )
}

/// GPU, display and camera, in that order.
pub fn reference_block_table() -> BlockTable {
    BlockTable::from_blocks_unchecked(alloc::vec![gpu_block(), display_block(), camera_block()])
}
