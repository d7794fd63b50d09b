//! Channel codec
//!
//! A [`ChannelSpec`] locates one color channel inside a packed pixel. It
//! converts between the 16-bit canonical value of that channel and the
//! narrow bit field the hardware stores.
//!
//! # Expansion
//!
//! Packing always keeps the top `length` bits of the 16-bit value. Unpacking
//! has to widen the narrow field back to 16 bits, which is done according to
//! an [`Expansion`] policy:
//!
//! - [`Expansion::Truncate`] places the field at the top of the 16-bit range
//!   and zero-fills the low bits (`0b11111` at 5 bits becomes `0xF800`).
//! - [`Expansion::Replicate`] repeats the field's bits into the low bits
//!   (`0b11111` at 5 bits becomes `0xFFFF`).
//!
//! Either way, packing the unpacked value restores the original field.
//!
//! # See also
//!
//! Linux: `struct fb_bitfield` in `<linux/fb.h>`

use std::fmt;

/// Largest channel length a canonical color can hold
pub const MAX_CHANNEL_LENGTH: u32 = 16;

/// Color channel identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red
    Red,
    /// Green
    Green,
    /// Blue
    Blue,
    /// Alpha (transparency)
    Alpha,
}

impl Channel {
    /// All channels in canonical order.
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];

    /// Lowercase channel name.
    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Alpha => "alpha",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Policy for widening a narrow channel value to 16 bits on decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Expansion {
    /// Shift to the top of the range, zero-fill the low bits
    #[default]
    Truncate,
    /// Shift to the top of the range, repeat the value into the low bits
    Replicate,
}

/// Position of one color channel within a packed pixel
///
/// `length == 0` means the channel is absent from the hardware format.
///
/// # Examples
///
/// ```
/// use rasterfb_core::ChannelSpec;
///
/// // Green in RGB565
/// let green = ChannelSpec::new(6, 5);
/// assert_eq!(green.pack(0xFFFF), 0b111111 << 5);
/// assert_eq!(green.unpack(0b111111 << 5), 0xFC00);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ChannelSpec {
    /// Number of bits
    pub length: u32,
    /// Bit offset of the least significant bit, counted from the right
    pub offset: u32,
}

impl ChannelSpec {
    /// A channel that is not present in the pixel.
    pub const ABSENT: ChannelSpec = ChannelSpec {
        length: 0,
        offset: 0,
    };

    /// Create a channel spec.
    ///
    /// No validation is done here; [`PixelFormat`](crate::PixelFormat)
    /// rejects lengths above 16.
    pub const fn new(length: u32, offset: u32) -> Self {
        Self { length, offset }
    }

    /// Whether the channel is present in the pixel.
    #[inline]
    pub fn is_present(&self) -> bool {
        self.length != 0
    }

    /// Mask covering `length` low bits.
    #[inline]
    fn mask(&self) -> u32 {
        (1u32 << self.length.min(MAX_CHANNEL_LENGTH)) - 1
    }

    /// Project a 16-bit channel value into this channel's bit field.
    ///
    /// Absent channels contribute nothing. Otherwise the top `length` bits of
    /// `value` are kept and moved to `offset`. Bits pushed past bit 31 are
    /// lost.
    #[inline]
    pub fn pack(&self, value: u16) -> u32 {
        if self.length == 0 {
            return 0;
        }
        let length = self.length.min(MAX_CHANNEL_LENGTH);
        let field = (u32::from(value) >> (MAX_CHANNEL_LENGTH - length)) & self.mask();
        field.checked_shl(self.offset).unwrap_or(0)
    }

    /// Extract the raw `length`-bit field from a packed pixel.
    #[inline]
    pub fn field(&self, packed: u32) -> u32 {
        packed.checked_shr(self.offset).unwrap_or(0) & self.mask()
    }

    /// Extract this channel as a 16-bit value, zero-filling the low bits.
    ///
    /// An absent channel reads as `0xFFFF`. That is the right answer for a
    /// missing alpha channel (fully opaque); it is also what a zero-length
    /// red, green or blue channel reads as.
    #[inline]
    pub fn unpack(&self, packed: u32) -> u16 {
        if self.length == 0 {
            return u16::MAX;
        }
        let length = self.length.min(MAX_CHANNEL_LENGTH);
        (self.field(packed) << (MAX_CHANNEL_LENGTH - length)) as u16
    }

    /// Extract this channel as a 16-bit value, repeating the field's bits
    /// into the low bits.
    ///
    /// Absent channels read as `0xFFFF`, as with [`unpack`](Self::unpack).
    pub fn unpack_replicated(&self, packed: u32) -> u16 {
        if self.length == 0 {
            return u16::MAX;
        }
        let length = self.length.min(MAX_CHANNEL_LENGTH) as i32;
        let field = self.field(packed);

        let mut out = 0u32;
        let mut shift = MAX_CHANNEL_LENGTH as i32 - length;
        while shift > -length {
            if shift >= 0 {
                out |= field << shift;
            } else {
                out |= field >> -shift;
            }
            shift -= length;
        }
        out as u16
    }

    /// Extract this channel using the given expansion policy.
    #[inline]
    pub fn unpack_with(&self, packed: u32, expansion: Expansion) -> u16 {
        match expansion {
            Expansion::Truncate => self.unpack(packed),
            Expansion::Replicate => self.unpack_replicated(packed),
        }
    }
}
