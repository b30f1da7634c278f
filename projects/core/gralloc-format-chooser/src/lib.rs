//! Selection of internal buffer formats for graphics allocations.
//!
//! A consumer asks for a buffer in a logical pixel format (say, RGBA 8888) with a set of
//! [`UsageFlags`] describing where the buffer will go (GPU, display, camera, ...). Each of those
//! hardware paths has its own preference for the physical layout of the buffer, and some layouts
//! (AFBC compressed variants in particular) are only usable by some of them.
//!
//! [`FormatSelector`] picks one layout every participating path can handle, using a weighted
//! vote over the [`BlockTable`]. The result is an [`ExtendedFormat`]: a base format id plus
//! [`FormatModifiers`], which packs into the 64-bit code handed to the allocator.
//!
//! # Example
//!
//! ```
//! use gralloc_format_chooser::{
//!     reference::reference_block_table, FormatSelector, HalPixelFormat, InternalFormat,
//!     SelectorConfig, UsageFlags,
//! };
//!
//! let selector = FormatSelector::new(reference_block_table(), SelectorConfig::default());
//! let format = selector
//!     .select_format(HalPixelFormat::Rgba8888.raw(), UsageFlags::HW_TEXTURE, 0)
//!     .unwrap();
//!
//! assert_eq!(format, InternalFormat::Rgba8888Afbc.extended_format());
//! ```
#![no_std]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod afbc_policy;
pub mod block_table;
pub mod error;
pub mod formats;
pub mod hw_block;
pub mod private_format;
pub mod reference;
pub mod score;
pub mod selector;
pub mod usage;

#[cfg(test)]
pub(crate) mod test_prelude;

pub use afbc_policy::{afbc_allowed, AfbcPolicy};
pub use block_table::{BlockTable, BlockTableBuilder};
pub use error::{BlockTableError, FormatError};
pub use formats::{
    resolve_index, ArmFormat, ExtendedFormat, ExtendedFormatCode, FormatModifiers,
    HalPixelFormat, InternalFormat, RequestFormat,
};
pub use hw_block::{BlockKind, HardwareBlock, WeightMatrix};
pub use private_format::{PrivateFormatDecoder, PrivateRange};
pub use selector::{
    ConfigurationInfo, FormatSelector, Selection, SelectionPath, SelectorConfig,
    SelectorConfigBuilder,
};
pub use usage::UsageFlags;
