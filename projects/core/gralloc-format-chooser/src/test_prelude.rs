//! Test prelude for the format selector.
//!
//! Helpers for putting together small block tables without going through the reference
//! configuration.

pub(crate) use crate::block_table::BlockTable;
pub(crate) use crate::formats::{InternalFormat, RequestFormat};
pub(crate) use crate::hw_block::{BlockKind, HardwareBlock};
pub(crate) use crate::usage::UsageFlags;

/// Creates a block which gives `weights` to the listed candidates for every request, and
/// rejects everything else.
pub(crate) fn block(usage: UsageFlags, weights: &[(InternalFormat, i16)]) -> HardwareBlock {
    let mut block = HardwareBlock::new(BlockKind::Other, usage);
    for request in RequestFormat::all_values() {
        for (candidate, weight) in weights {
            block.set_weight(*request, *candidate, *weight);
        }
    }
    block
}

/// Builds a table out of the given blocks.
pub(crate) fn table_of(blocks: impl IntoIterator<Item = HardwareBlock>) -> BlockTable {
    blocks
        .into_iter()
        .fold(BlockTable::builder(), |builder, block| builder.block(block))
        .build()
        .expect("test blocks are valid")
}
