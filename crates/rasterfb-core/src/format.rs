//! PixelFormat - hardware pixel layout
//!
//! A [`PixelFormat`] is the validated description of how a device packs a
//! color into one pixel: the bit position of each of the four channels plus
//! the pixel's byte width. It is built once from the device-reported
//! descriptor and then reused for every pixel access.
//!
//! # Validation
//!
//! Construction fails with [`Error::UnsupportedFormat`] when a channel is
//! wider than 16 bits, when a channel uses reversed ("MSB-right") bit order,
//! or when the pixel width is zero, not a whole number of bytes, or wider
//! than 32 bits. Channel offsets are trusted as reported.
//!
//! A zero-length red, green or blue channel is accepted but logged: such a
//! channel decodes as `0xFFFF`, which only makes sense for a missing alpha
//! channel. See [`PixelFormat::absent_color_channels`].
//!
//! # See also
//!
//! Linux: `struct fb_var_screeninfo` in `<linux/fb.h>`

use crate::channel::{Channel, ChannelSpec, Expansion, MAX_CHANNEL_LENGTH};
use crate::codec;
use crate::color::CanonicalColor;
use crate::descriptor::ScreenInfo;
use crate::error::{FormatIssue, Result};
use tracing::{debug, warn};

/// Largest supported pixel width in bits
pub const MAX_BITS_PER_PIXEL: u32 = 32;

/// Validated pixel layout
///
/// # Examples
///
/// ```
/// use rasterfb_core::{CanonicalColor, ChannelSpec, PixelFormat};
///
/// let format = PixelFormat::new(
///     ChannelSpec::new(5, 11),
///     ChannelSpec::new(6, 5),
///     ChannelSpec::new(5, 0),
///     ChannelSpec::ABSENT,
///     16,
/// )
/// .unwrap();
/// assert_eq!(format, PixelFormat::rgb565());
/// assert_eq!(format.encode(CanonicalColor::WHITE), 0xFFFF);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelFormat {
    red: ChannelSpec,
    green: ChannelSpec,
    blue: ChannelSpec,
    alpha: ChannelSpec,
    bytes_per_pixel: u32,
    expansion: Expansion,
}

impl PixelFormat {
    /// Build a format from four channel positions and a pixel width in bits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`](crate::Error::UnsupportedFormat)
    /// if a channel is longer than 16 bits, or `bits_per_pixel` is 0, not a
    /// multiple of 8, or greater than 32.
    pub fn new(
        red: ChannelSpec,
        green: ChannelSpec,
        blue: ChannelSpec,
        alpha: ChannelSpec,
        bits_per_pixel: u32,
    ) -> Result<Self> {
        let channels = [red, green, blue, alpha];
        for (channel, spec) in Channel::ALL.into_iter().zip(channels) {
            if spec.length > MAX_CHANNEL_LENGTH {
                return Err(reject(FormatIssue::ChannelTooWide {
                    channel,
                    length: spec.length,
                }));
            }
        }
        check_bits_per_pixel(bits_per_pixel)?;

        let format = Self {
            red,
            green,
            blue,
            alpha,
            bytes_per_pixel: bits_per_pixel / 8,
            expansion: Expansion::Truncate,
        };
        for channel in format.absent_color_channels() {
            warn!(
                %channel,
                "{channel} channel has zero length and will always decode as 0xFFFF"
            );
        }
        debug!(
            red = ?format.red,
            green = ?format.green,
            blue = ?format.blue,
            alpha = ?format.alpha,
            bits_per_pixel,
            "accepted pixel format"
        );
        Ok(format)
    }

    /// Build a format from a device-reported descriptor.
    ///
    /// Adds the MSB-right check on top of [`PixelFormat::new`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`](crate::Error::UnsupportedFormat)
    /// for reversed bit order plus every case rejected by
    /// [`PixelFormat::new`].
    pub fn from_screen_info(info: &ScreenInfo) -> Result<Self> {
        for (channel, field) in Channel::ALL.into_iter().zip(info.bit_fields()) {
            if field.msb_right != 0 {
                return Err(reject(FormatIssue::MsbRight { channel }));
            }
        }
        Self::new(
            info.red.channel_spec(),
            info.green.channel_spec(),
            info.blue.channel_spec(),
            info.alpha.channel_spec(),
            info.bits_per_pixel,
        )
    }

    /// 16-bit `RRRRRGGGGGGBBBBB`, no alpha.
    pub const fn rgb565() -> Self {
        Self::known(
            ChannelSpec::new(5, 11),
            ChannelSpec::new(6, 5),
            ChannelSpec::new(5, 0),
            ChannelSpec::ABSENT,
            2,
        )
    }

    /// 8-bit `RRRGGGBB`, no alpha.
    pub const fn rgb332() -> Self {
        Self::known(
            ChannelSpec::new(3, 5),
            ChannelSpec::new(3, 2),
            ChannelSpec::new(2, 0),
            ChannelSpec::ABSENT,
            1,
        )
    }

    /// 24-bit packed RGB, blue in the lowest byte.
    pub const fn rgb888() -> Self {
        Self::known(
            ChannelSpec::new(8, 16),
            ChannelSpec::new(8, 8),
            ChannelSpec::new(8, 0),
            ChannelSpec::ABSENT,
            3,
        )
    }

    /// 32-bit RGB with an unused top byte.
    pub const fn xrgb8888() -> Self {
        Self::known(
            ChannelSpec::new(8, 16),
            ChannelSpec::new(8, 8),
            ChannelSpec::new(8, 0),
            ChannelSpec::ABSENT,
            4,
        )
    }

    /// 32-bit RGB with alpha in the top byte.
    pub const fn argb8888() -> Self {
        Self::known(
            ChannelSpec::new(8, 16),
            ChannelSpec::new(8, 8),
            ChannelSpec::new(8, 0),
            ChannelSpec::new(8, 24),
            4,
        )
    }

    const fn known(
        red: ChannelSpec,
        green: ChannelSpec,
        blue: ChannelSpec,
        alpha: ChannelSpec,
        bytes_per_pixel: u32,
    ) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
            bytes_per_pixel,
            expansion: Expansion::Truncate,
        }
    }

    /// Return a copy of this format that decodes with another expansion
    /// policy.
    pub const fn with_expansion(mut self, expansion: Expansion) -> Self {
        self.expansion = expansion;
        self
    }

    /// Red channel position.
    #[inline]
    pub fn red(&self) -> ChannelSpec {
        self.red
    }

    /// Green channel position.
    #[inline]
    pub fn green(&self) -> ChannelSpec {
        self.green
    }

    /// Blue channel position.
    #[inline]
    pub fn blue(&self) -> ChannelSpec {
        self.blue
    }

    /// Alpha channel position.
    #[inline]
    pub fn alpha(&self) -> ChannelSpec {
        self.alpha
    }

    /// Channel position by identifier.
    pub fn channel(&self, channel: Channel) -> ChannelSpec {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
            Channel::Alpha => self.alpha,
        }
    }

    /// Bytes occupied by one pixel (1 to 4).
    #[inline]
    pub fn bytes_per_pixel(&self) -> u32 {
        self.bytes_per_pixel
    }

    /// Bits occupied by one pixel (8, 16, 24 or 32).
    #[inline]
    pub fn bits_per_pixel(&self) -> u32 {
        self.bytes_per_pixel * 8
    }

    /// Decode expansion policy.
    #[inline]
    pub fn expansion(&self) -> Expansion {
        self.expansion
    }

    /// Whether the format stores an alpha channel.
    pub fn has_alpha(&self) -> bool {
        self.alpha.is_present()
    }

    /// Red, green or blue channels that have zero length.
    ///
    /// These decode as `0xFFFF` like a missing alpha channel would.
    pub fn absent_color_channels(&self) -> Vec<Channel> {
        [Channel::Red, Channel::Green, Channel::Blue]
            .into_iter()
            .filter(|&ch| !self.channel(ch).is_present())
            .collect()
    }

    /// Pack a color into this format. See [`codec::encode`].
    #[inline]
    pub fn encode(&self, color: CanonicalColor) -> u32 {
        codec::encode(color, self)
    }

    /// Unpack a pixel in this format. See [`codec::decode`].
    #[inline]
    pub fn decode(&self, packed: u32) -> CanonicalColor {
        codec::decode(packed, self)
    }

    /// Quantize a color to the closest color this format can represent.
    pub fn convert(&self, color: CanonicalColor) -> CanonicalColor {
        self.decode(self.encode(color))
    }
}

fn check_bits_per_pixel(bits_per_pixel: u32) -> Result<()> {
    if bits_per_pixel == 0 {
        return Err(reject(FormatIssue::ZeroBitsPerPixel));
    }
    if bits_per_pixel % 8 != 0 {
        return Err(reject(FormatIssue::UnalignedBitsPerPixel(bits_per_pixel)));
    }
    if bits_per_pixel > MAX_BITS_PER_PIXEL {
        return Err(reject(FormatIssue::BitsPerPixelTooLarge(bits_per_pixel)));
    }
    Ok(())
}

fn reject(issue: FormatIssue) -> crate::Error {
    debug!(%issue, "rejected pixel format");
    issue.into()
}
