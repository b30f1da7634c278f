//! Hardware blocks: the producers and consumers a buffer may pass through.
//!
//! Every block carries a usage mask, which decides whether it takes part in a request, and a
//! weight matrix indexed by `[request][candidate]`. A weight of [`WEIGHT_UNSUPPORTED`] means the
//! block can't handle the candidate at all; any other value is the block's preference for it.

use crate::formats::{InternalFormat, RequestFormat};
use crate::usage::UsageFlags;

/// The block can't handle the candidate.
pub const WEIGHT_UNSUPPORTED: i16 = -1;
/// The block can handle the candidate.
pub const WEIGHT_SUPPORTED: i16 = 50;
/// The candidate is the block's preferred layout.
pub const WEIGHT_MOST_PREFERRED: i16 = 100;

/// Weights of a single block, `[request][candidate]`.
pub type WeightMatrix = [[i16; InternalFormat::COUNT]; RequestFormat::COUNT];

/// Kind of IP a hardware block stands for. Informational only; never used for selection.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, bincode::Encode, bincode::Decode)]
pub enum BlockKind {
    /// GPU (texturing, rendering).
    Gpu = 0,
    /// Display controller / composer.
    Display = 1,
    /// Camera pipeline.
    Camera = 2,
    /// Video encoder or decoder.
    VideoCodec = 3,
    /// Anything else.
    #[default]
    Other = 4,
}

/// One producer/consumer path and its weighted layout preferences.
#[repr(C)]
#[derive(Debug, Clone, PartialEq, Eq, bincode::Encode, bincode::Decode)]
pub struct HardwareBlock {
    /// Kind of IP this block stands for.
    pub kind: BlockKind,
    /// Usage bits which route a buffer through this block.
    pub usage_mask: u32,
    /// Preferences, `[request][candidate]`.
    pub weights: WeightMatrix,
}

impl HardwareBlock {
    /// Creates a block which supports nothing yet.
    pub fn new(kind: BlockKind, usage: UsageFlags) -> Self {
        Self {
            kind,
            usage_mask: usage.bits(),
            weights: [[WEIGHT_UNSUPPORTED; InternalFormat::COUNT]; RequestFormat::COUNT],
        }
    }

    /// The usage mask of this block.
    pub fn usage(&self) -> UsageFlags {
        UsageFlags::from_bits_retain(self.usage_mask)
    }

    /// Whether a request with `usage` passes through this block.
    pub fn matches(&self, usage: UsageFlags) -> bool {
        self.usage_mask & usage.bits() != 0
    }

    /// The weight of `candidate` for `request`, or [`None`] if the block can't handle it.
    pub fn weight(&self, request: RequestFormat, candidate: InternalFormat) -> Option<i16> {
        match self.raw_weight(request, candidate) {
            WEIGHT_UNSUPPORTED => None,
            weight => Some(weight),
        }
    }

    /// The weight of `candidate` for `request`, including the unsupported sentinel.
    pub fn raw_weight(&self, request: RequestFormat, candidate: InternalFormat) -> i16 {
        self.weights[request.index()][candidate.index()]
    }

    /// Sets the weight of `candidate` for `request`.
    pub fn set_weight(&mut self, request: RequestFormat, candidate: InternalFormat, weight: i16) {
        self.weights[request.index()][candidate.index()] = weight;
    }

    /// Builder form of [`Self::set_weight`].
    pub fn with_weight(
        mut self,
        request: RequestFormat,
        candidate: InternalFormat,
        weight: i16,
    ) -> Self {
        self.set_weight(request, candidate, weight);
        self
    }

    /// The whole weight matrix.
    pub fn weights(&self) -> &WeightMatrix {
        &self.weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_blocks_support_nothing() {
        let block = HardwareBlock::new(BlockKind::Gpu, UsageFlags::HW_TEXTURE);
        for request in RequestFormat::all_values() {
            for candidate in InternalFormat::all_values() {
                assert_eq!(block.weight(*request, *candidate), None);
            }
        }
    }

    #[test]
    fn weights_are_addressed_by_request_and_candidate() {
        let block = HardwareBlock::new(BlockKind::Display, UsageFlags::HW_COMPOSER).with_weight(
            RequestFormat::Rgb565,
            InternalFormat::Rgb565Afbc,
            WEIGHT_MOST_PREFERRED,
        );

        assert_eq!(
            block.weight(RequestFormat::Rgb565, InternalFormat::Rgb565Afbc),
            Some(WEIGHT_MOST_PREFERRED)
        );
        assert_eq!(
            block.weight(RequestFormat::Rgba8888, InternalFormat::Rgb565Afbc),
            None
        );
        assert_eq!(
            block.weights()[RequestFormat::Rgb565.index()][InternalFormat::Rgb565Afbc.index()],
            WEIGHT_MOST_PREFERRED
        );
    }

    #[test]
    fn usage_matching_is_an_intersection() {
        let block = HardwareBlock::new(
            BlockKind::Gpu,
            UsageFlags::HW_TEXTURE | UsageFlags::HW_RENDER,
        );

        assert!(block.matches(UsageFlags::HW_RENDER));
        assert!(block.matches(UsageFlags::HW_RENDER | UsageFlags::HW_COMPOSER));
        assert!(!block.matches(UsageFlags::HW_COMPOSER));
        assert!(!block.matches(UsageFlags::empty()));
    }
}
