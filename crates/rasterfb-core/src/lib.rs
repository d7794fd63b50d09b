//! rasterfb core - pixel formats and pixel access over raw raster memory
//!
//! This crate provides the pieces needed to treat a raw framebuffer region
//! as an image:
//!
//! - [`ChannelSpec`] - bit position of one color channel in a packed pixel
//! - [`PixelFormat`] - validated layout of a packed pixel
//! - [`encode`] / [`decode`] - the color codec
//! - [`CanonicalColor`] / [`Rgba16`] - the interchange color representation
//! - [`PixelBuffer`] / [`PixelView`] - pixel grids over borrowed bytes
//! - [`ScreenInfo`] / [`DeviceDescriptor`] - the device-reported layout and
//!   the provider seam for mapped display memory
//!
//! # Features
//!
//! - `image`: [`Rgba16`] for `image::Rgba<u8>` and `image::Rgba<u16>`
//! - `embedded-graphics`: [`PixelBuffer`] as an `embedded-graphics`
//!   `DrawTarget`
//!
//! # Logging
//!
//! Diagnostics go through `tracing`; no subscriber is installed here.

pub mod buffer;
pub mod channel;
pub mod codec;
pub mod color;
pub mod descriptor;
pub mod error;
pub mod format;

pub use buffer::{ByteOrder, PixelBuffer, PixelView};
pub use channel::{Channel, ChannelSpec, Expansion};
pub use codec::{PackedPixel, decode, encode};
pub use color::{CanonicalColor, Rgba16};
pub use descriptor::{BitField, DeviceDescriptor, ScreenInfo};
pub use error::{Error, FormatIssue, Result};
pub use format::PixelFormat;
