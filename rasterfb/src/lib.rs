//! rasterfb - random-access pixel grid over raw framebuffer memory
//!
//! A display surface is usually reachable as a contiguous byte buffer with
//! a row pitch and a device-defined pixel layout. This crate exposes such a
//! buffer as an image addressed in a canonical 16-bit-per-channel color.
//!
//! Acquiring the memory and the layout (opening the device, querying its
//! descriptor, mapping it) is left to the caller, who hands both over
//! through [`DeviceDescriptor`] or [`PixelBuffer::new`].
//!
//! # Example
//!
//! ```
//! use rasterfb::{BitField, CanonicalColor, PixelBuffer, PixelFormat, ScreenInfo};
//!
//! let info = ScreenInfo {
//!     red: BitField::new(11, 5),
//!     green: BitField::new(5, 6),
//!     blue: BitField::new(0, 5),
//!     alpha: BitField::default(),
//!     bits_per_pixel: 16,
//!     line_length: 640 * 2,
//!     xres: 640,
//!     yres: 480,
//! };
//! let format = PixelFormat::from_screen_info(&info).unwrap();
//!
//! let mut memory = vec![0u8; info.region_len()];
//! let mut fb = PixelBuffer::new(&mut memory, 640 * 2, 640, 480, format);
//! fb.set_pixel(10, 20, CanonicalColor::WHITE);
//! assert_eq!(fb.get_pixel(10, 20), format.convert(CanonicalColor::WHITE));
//! ```

pub use rasterfb_core::*;
