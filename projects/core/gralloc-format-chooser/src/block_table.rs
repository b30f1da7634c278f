//! The immutable set of hardware blocks a selector scores against.

use crate::error::BlockTableError;
use crate::hw_block::HardwareBlock;
use crate::usage::UsageFlags;
use alloc::vec::Vec;

/// Maximum number of blocks in a table.
pub const MAX_BLOCKS: usize = 256;

/// An ordered, immutable collection of [`HardwareBlock`]s.
///
/// Built once through [`BlockTableBuilder`] (or loaded with [`BlockTable::from_bytes`]) and only
/// read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, bincode::Encode, bincode::Decode)]
pub struct BlockTable {
    blocks: Vec<HardwareBlock>,
}

impl BlockTable {
    /// Starts building a table.
    pub fn builder() -> BlockTableBuilder {
        BlockTableBuilder::new()
    }

    /// Wraps blocks which are valid by construction.
    pub(crate) fn from_blocks_unchecked(blocks: Vec<HardwareBlock>) -> Self {
        debug_assert!(validate(&blocks).is_ok());
        Self { blocks }
    }

    /// All blocks, in configuration order.
    pub fn blocks(&self) -> &[HardwareBlock] {
        &self.blocks
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the table holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Address of the first block, for read-only inspection through the C interface.
    pub fn as_ptr(&self) -> *const HardwareBlock {
        self.blocks.as_ptr()
    }

    /// The blocks a request with `usage` passes through.
    pub fn matching(&self, usage: UsageFlags) -> impl Iterator<Item = &HardwareBlock> + '_ {
        self.blocks.iter().filter(move |block| block.matches(usage))
    }

    /// Serializes the table.
    pub fn to_bytes(&self) -> Result<Vec<u8>, BlockTableError> {
        bincode::encode_to_vec(self, bincode::config::standard()).map_err(BlockTableError::Encode)
    }

    /// Deserializes a table written by [`Self::to_bytes`]. The result is validated like a
    /// freshly built table.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BlockTableError> {
        let (table, _): (Self, usize) =
            bincode::decode_from_slice(bytes, bincode::config::standard())
                .map_err(BlockTableError::Decode)?;
        validate(&table.blocks)?;
        Ok(table)
    }
}

fn validate(blocks: &[HardwareBlock]) -> Result<(), BlockTableError> {
    if blocks.len() > MAX_BLOCKS {
        return Err(BlockTableError::TooManyBlocks(blocks.len()));
    }

    if let Some(index) = blocks.iter().position(|block| block.usage_mask == 0) {
        return Err(BlockTableError::EmptyUsageMask { index });
    }

    Ok(())
}

/// Builder for a [`BlockTable`].
#[derive(Debug, Clone, Default)]
pub struct BlockTableBuilder {
    blocks: Vec<HardwareBlock>,
}

impl BlockTableBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a block. Blocks are scored in the order they are added.
    pub fn block(mut self, block: HardwareBlock) -> Self {
        self.blocks.push(block);
        self
    }

    /// Builds the table.
    ///
    /// # Errors
    ///
    /// - [`BlockTableError::EmptyUsageMask`] if a block matches no usage.
    /// - [`BlockTableError::TooManyBlocks`] if more than [`MAX_BLOCKS`] blocks were added.
    pub fn build(self) -> Result<BlockTable, BlockTableError> {
        validate(&self.blocks)?;
        Ok(BlockTable {
            blocks: self.blocks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hw_block::BlockKind;

    #[test]
    fn builder_keeps_block_order() {
        let table = BlockTable::builder()
            .block(HardwareBlock::new(BlockKind::Gpu, UsageFlags::HW_TEXTURE))
            .block(HardwareBlock::new(BlockKind::Display, UsageFlags::HW_COMPOSER))
            .build()
            .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.blocks()[0].kind, BlockKind::Gpu);
        assert_eq!(table.blocks()[1].kind, BlockKind::Display);
        assert_eq!(table.as_ptr(), table.blocks().as_ptr());
    }

    #[test]
    fn empty_usage_masks_are_rejected() {
        let result = BlockTable::builder()
            .block(HardwareBlock::new(BlockKind::Gpu, UsageFlags::HW_TEXTURE))
            .block(HardwareBlock::new(BlockKind::Other, UsageFlags::empty()))
            .build();

        assert!(matches!(
            result,
            Err(BlockTableError::EmptyUsageMask { index: 1 })
        ));
    }

    #[test]
    fn block_count_is_bounded() {
        let mut builder = BlockTable::builder();
        for _ in 0..=MAX_BLOCKS {
            builder = builder.block(HardwareBlock::new(BlockKind::Gpu, UsageFlags::HW_TEXTURE));
        }

        assert!(matches!(
            builder.build(),
            Err(BlockTableError::TooManyBlocks(count)) if count == MAX_BLOCKS + 1
        ));
    }

    #[test]
    fn empty_tables_are_allowed() {
        let table = BlockTable::builder().build().unwrap();
        assert!(table.is_empty());
        assert_eq!(table.matching(UsageFlags::HW_TEXTURE).count(), 0);
    }

    #[test]
    fn matching_filters_by_usage() {
        let table = BlockTable::builder()
            .block(HardwareBlock::new(BlockKind::Gpu, UsageFlags::HW_TEXTURE))
            .block(HardwareBlock::new(BlockKind::Display, UsageFlags::HW_COMPOSER))
            .block(HardwareBlock::new(
                BlockKind::Camera,
                UsageFlags::HW_CAMERA_READ | UsageFlags::HW_TEXTURE,
            ))
            .build()
            .unwrap();

        let kinds: Vec<_> = table
            .matching(UsageFlags::HW_TEXTURE)
            .map(|block| block.kind)
            .collect();
        assert_eq!(kinds, [BlockKind::Gpu, BlockKind::Camera]);
    }

    #[test]
    fn serialized_tables_load_back() {
        let table = crate::reference::reference_block_table();
        let bytes = table.to_bytes().unwrap();
        assert_eq!(BlockTable::from_bytes(&bytes).unwrap(), table);
    }

    #[test]
    fn truncated_data_fails_to_load() {
        let bytes = crate::reference::reference_block_table().to_bytes().unwrap();
        assert!(matches!(
            BlockTable::from_bytes(&bytes[..bytes.len() / 2]),
            Err(BlockTableError::Decode(_))
        ));
    }

    #[test]
    fn loaded_tables_are_validated() {
        // Bypass the builder to produce data a builder would reject.
        let table = BlockTable {
            blocks: alloc::vec![HardwareBlock::new(BlockKind::Gpu, UsageFlags::empty())],
        };
        let bytes = table.to_bytes().unwrap();

        assert!(matches!(
            BlockTable::from_bytes(&bytes),
            Err(BlockTableError::EmptyUsageMask { index: 0 })
        ));
    }
}
