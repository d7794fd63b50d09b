//! Device descriptor model
//!
//! The pixel layout, pitch and resolution of a display surface come from
//! the operating system, not from this crate. [`ScreenInfo`] is the plain
//! data a device query hands over, and [`DeviceDescriptor`] is the seam a
//! device wrapper implements so that a [`PixelBuffer`] can be built from it.
//!
//! Opening devices, mapping memory and switching terminal modes all live
//! behind that trait in the caller's code.
//!
//! # See also
//!
//! Linux: `struct fb_bitfield`, `struct fb_var_screeninfo` and
//! `struct fb_fix_screeninfo` in `<linux/fb.h>`
//!
//! [`PixelBuffer`]: crate::PixelBuffer

use crate::channel::ChannelSpec;

/// Device-reported position of one color channel
///
/// Field order follows `struct fb_bitfield`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct BitField {
    /// Offset of the least significant bit, counted from the right
    pub offset: u32,
    /// Number of bits
    pub length: u32,
    /// Non-zero if the most significant bit is on the right
    pub msb_right: u32,
}

impl BitField {
    /// Create a bit field with normal (MSB-left) bit order.
    pub const fn new(offset: u32, length: u32) -> Self {
        Self {
            offset,
            length,
            msb_right: 0,
        }
    }

    /// Position of this field as a [`ChannelSpec`], ignoring bit order.
    pub const fn channel_spec(&self) -> ChannelSpec {
        ChannelSpec::new(self.length, self.offset)
    }
}

/// Screen properties reported by a display device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScreenInfo {
    /// Red channel
    pub red: BitField,
    /// Green channel
    pub green: BitField,
    /// Blue channel
    pub blue: BitField,
    /// Alpha channel (`transp` in `fb_var_screeninfo`)
    pub alpha: BitField,
    /// Bits per pixel
    pub bits_per_pixel: u32,
    /// Bytes per row, including padding
    pub line_length: u32,
    /// Visible horizontal resolution
    pub xres: u32,
    /// Visible vertical resolution
    pub yres: u32,
}

impl ScreenInfo {
    /// Channel bit fields in red, green, blue, alpha order.
    pub fn bit_fields(&self) -> [BitField; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Minimum length of the pixel region in bytes (`line_length * yres`).
    pub fn region_len(&self) -> usize {
        self.line_length as usize * self.yres as usize
    }
}

/// Provider of a display surface: a descriptor plus its mapped pixel memory
///
/// Implementors own the device handle and the mapping. A
/// [`PixelBuffer`](crate::PixelBuffer) built from a provider only borrows
/// the pixels, so it cannot outlive them.
pub trait DeviceDescriptor {
    /// Current screen properties.
    fn screen_info(&self) -> ScreenInfo;

    /// Mapped pixel memory, at least [`ScreenInfo::region_len`] bytes.
    fn pixels_mut(&mut self) -> &mut [u8];
}
