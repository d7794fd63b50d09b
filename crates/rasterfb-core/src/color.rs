//! Canonical color
//!
//! [`CanonicalColor`] is the interchange representation for every pixel
//! read or written through this crate: four independent 16-bit channels,
//! decoupled from any hardware bit widths.
//!
//! Other color types plug in through the [`Rgba16`] trait. With the `image`
//! feature enabled, `image::Rgba<u16>` and `image::Rgba<u8>` implement it.

/// A color with four 16-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CanonicalColor {
    /// Red
    pub r: u16,
    /// Green
    pub g: u16,
    /// Blue
    pub b: u16,
    /// Alpha (`0xFFFF` = opaque)
    pub a: u16,
}

impl CanonicalColor {
    pub const BLACK: CanonicalColor = CanonicalColor::new(0, 0, 0, 0xFFFF);
    pub const WHITE: CanonicalColor = CanonicalColor::new(0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF);
    pub const TRANSPARENT: CanonicalColor = CanonicalColor::new(0, 0, 0, 0);

    /// Create a color from four 16-bit channels.
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    pub const fn opaque(r: u16, g: u16, b: u16) -> Self {
        Self::new(r, g, b, 0xFFFF)
    }

    /// Create a color from 8-bit channels, widening each by `v * 0x101`.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(widen8(r), widen8(g), widen8(b), widen8(a))
    }

    /// Narrow to 8-bit channels by keeping the high byte.
    pub const fn to_rgba8(self) -> [u8; 4] {
        [
            (self.r >> 8) as u8,
            (self.g >> 8) as u8,
            (self.b >> 8) as u8,
            (self.a >> 8) as u8,
        ]
    }

    /// Channels as an `[r, g, b, a]` array.
    pub const fn to_array(self) -> [u16; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[inline]
const fn widen8(v: u8) -> u16 {
    v as u16 * 0x101
}

impl From<[u16; 4]> for CanonicalColor {
    fn from([r, g, b, a]: [u16; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<CanonicalColor> for [u16; 4] {
    fn from(c: CanonicalColor) -> Self {
        c.to_array()
    }
}

/// Anything that can be read as, and built from, four 16-bit channels
///
/// This is the seam through which other color libraries talk to a
/// [`PixelBuffer`](crate::PixelBuffer).
pub trait Rgba16 {
    /// Channels as `[r, g, b, a]`.
    fn rgba16(&self) -> [u16; 4];

    /// Build from `[r, g, b, a]`.
    fn from_rgba16(rgba: [u16; 4]) -> Self;

    /// Convert to the canonical representation.
    fn to_canonical(&self) -> CanonicalColor {
        CanonicalColor::from(self.rgba16())
    }
}

impl Rgba16 for CanonicalColor {
    fn rgba16(&self) -> [u16; 4] {
        self.to_array()
    }

    fn from_rgba16(rgba: [u16; 4]) -> Self {
        Self::from(rgba)
    }

    fn to_canonical(&self) -> CanonicalColor {
        *self
    }
}

impl Rgba16 for [u16; 4] {
    fn rgba16(&self) -> [u16; 4] {
        *self
    }

    fn from_rgba16(rgba: [u16; 4]) -> Self {
        rgba
    }
}

#[cfg(feature = "image")]
mod image_interop {
    use super::{CanonicalColor, Rgba16};

    impl Rgba16 for image::Rgba<u16> {
        fn rgba16(&self) -> [u16; 4] {
            self.0
        }

        fn from_rgba16(rgba: [u16; 4]) -> Self {
            image::Rgba(rgba)
        }
    }

    impl Rgba16 for image::Rgba<u8> {
        fn rgba16(&self) -> [u16; 4] {
            let [r, g, b, a] = self.0;
            CanonicalColor::from_rgba8(r, g, b, a).to_array()
        }

        fn from_rgba16(rgba: [u16; 4]) -> Self {
            image::Rgba(CanonicalColor::from(rgba).to_rgba8())
        }
    }

    impl From<image::Rgba<u16>> for CanonicalColor {
        fn from(px: image::Rgba<u16>) -> Self {
            CanonicalColor::from(px.0)
        }
    }

    impl From<CanonicalColor> for image::Rgba<u16> {
        fn from(c: CanonicalColor) -> Self {
            image::Rgba(c.to_array())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba8_widening() {
        let c = CanonicalColor::from_rgba8(0xFF, 0x80, 0x00, 0x01);
        assert_eq!(c, CanonicalColor::new(0xFFFF, 0x8080, 0x0000, 0x0101));
        assert_eq!(c.to_rgba8(), [0xFF, 0x80, 0x00, 0x01]);
    }

    #[test]
    fn test_array_conversions() {
        let c = CanonicalColor::opaque(1, 2, 3);
        let arr: [u16; 4] = c.into();
        assert_eq!(arr, [1, 2, 3, 0xFFFF]);
        assert_eq!(CanonicalColor::from(arr), c);
        assert_eq!(arr.to_canonical(), c);
        assert_eq!(<[u16; 4]>::from_rgba16(c.rgba16()), arr);
    }

    #[test]
    fn test_constants() {
        assert_eq!(CanonicalColor::BLACK.a, 0xFFFF);
        assert_eq!(CanonicalColor::TRANSPARENT, CanonicalColor::default());
        assert_eq!(CanonicalColor::WHITE.rgba16(), [0xFFFF; 4]);
    }

    #[cfg(feature = "image")]
    #[test]
    fn test_image_rgba_interop() {
        let px = image::Rgba([0x12u8, 0x34, 0x56, 0xFF]);
        assert_eq!(px.rgba16(), [0x1212, 0x3434, 0x5656, 0xFFFF]);
        assert_eq!(image::Rgba::<u8>::from_rgba16(px.rgba16()), px);

        let wide = image::Rgba([1u16, 2, 3, 4]);
        assert_eq!(CanonicalColor::from(wide), CanonicalColor::new(1, 2, 3, 4));
    }
}
