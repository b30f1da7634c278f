//! Pixel format model.
//!
//! - [`HalPixelFormat`] / [`ArmFormat`]: base format ids.
//! - [`RequestFormat`]: canonical formats which are scored (weight matrix rows).
//! - [`InternalFormat`]: layout candidates (weight matrix columns).
//! - [`ExtendedFormat`]: a base id plus [`FormatModifiers`], packed into an
//!   [`ExtendedFormatCode`] at the boundary.

pub mod extended;
pub mod hal;
pub mod internal;
pub mod request;

pub use extended::{
    ExtendedFormat, ExtendedFormatCode, FormatModifiers, FORMAT_MASK, MODIFIER_MASK,
    MODIFIER_SHIFT,
};
pub use hal::{ArmFormat, HalPixelFormat};
pub use internal::InternalFormat;
pub use request::{resolve_index, RequestFormat};
