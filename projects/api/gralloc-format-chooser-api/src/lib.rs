#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! Process-wide registration of a [`FormatSelector`], and the C interface built on top of it.
//!
//! The embedding allocator installs one selector at start up; every later request is served
//! from it without locking.
//!
//! ```
//! use gralloc_format_chooser::reference::reference_block_table;
//! use gralloc_format_chooser::{FormatSelector, HalPixelFormat, SelectorConfig, UsageFlags};
//! use gralloc_format_chooser_api::{install, select_format_code};
//!
//! let selector = FormatSelector::new(reference_block_table(), SelectorConfig::default());
//! install(selector).ok();
//!
//! let code = select_format_code(
//!     HalPixelFormat::Rgba8888.raw(),
//!     UsageFlags::SW_READ_OFTEN.bits() as i32,
//!     0,
//! );
//! assert_eq!(code, HalPixelFormat::Rgba8888.raw() as u64);
//! ```
//!
//! # Features
//!
//! - `std` (default): the registry.
//! - `c-exports`: `gralloc_select_format`, `gralloc_get_internal_info` and
//!   `gralloc_get_internal_format`, see [`c_api`].
//!
//! [`FormatSelector`]: gralloc_format_chooser::FormatSelector

pub mod error;

#[cfg(feature = "std")]
pub mod registry;

/// C API functions (enabled with the c-exports feature)
#[cfg(feature = "c-exports")]
pub mod c_api;

pub use error::ApiError;
pub use gralloc_format_chooser::resolve_index;

#[cfg(feature = "std")]
pub use registry::{EINVAL, install, install_from_bytes, installed, select_format_code};
