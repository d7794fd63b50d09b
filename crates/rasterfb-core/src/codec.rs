//! Pixel codec
//!
//! Stateless conversion between a [`CanonicalColor`] and a packed pixel
//! value for a given [`PixelFormat`].
//!
//! Encoding is lossy whenever a channel is narrower than 16 bits:
//! `decode(encode(c))` clears the bits the hardware cannot store. Decoding
//! loses nothing that the channels hold, so `encode(decode(p))` gives back
//! the channel bits of `p` exactly.

use crate::channel::Channel;
use crate::color::CanonicalColor;
use crate::format::PixelFormat;

/// Hardware-native pixel value; only the low `bits_per_pixel` bits are
/// significant.
pub type PackedPixel = u32;

/// Pack a color into a pixel value.
///
/// Each channel is packed independently and the results are OR'd together.
#[inline]
pub fn encode(color: CanonicalColor, format: &PixelFormat) -> PackedPixel {
    format.red().pack(color.r)
        | format.green().pack(color.g)
        | format.blue().pack(color.b)
        | format.alpha().pack(color.a)
}

/// Unpack a pixel value into a color.
///
/// Channels are widened to 16 bits using the format's
/// [`Expansion`](crate::Expansion) policy.
#[inline]
pub fn decode(packed: PackedPixel, format: &PixelFormat) -> CanonicalColor {
    let expansion = format.expansion();
    CanonicalColor {
        r: format.red().unpack_with(packed, expansion),
        g: format.green().unpack_with(packed, expansion),
        b: format.blue().unpack_with(packed, expansion),
        a: format.alpha().unpack_with(packed, expansion),
    }
}

/// Mask of every bit owned by one of the format's channels.
pub fn channel_mask(format: &PixelFormat) -> PackedPixel {
    Channel::ALL
        .into_iter()
        .map(|ch| format.channel(ch).pack(u16::MAX))
        .fold(0, |acc, bits| acc | bits)
}
