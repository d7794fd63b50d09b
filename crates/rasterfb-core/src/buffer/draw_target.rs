//! `embedded-graphics` drawing support
//!
//! Lets any `embedded-graphics` drawable render straight into a
//! [`PixelBuffer`]. Pixels outside the grid are clipped.

use super::PixelBuffer;
use crate::color::{CanonicalColor, Rgba16};
use embedded_graphics_core::Pixel;
use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{OriginDimensions, Point, Size};
use embedded_graphics_core::pixelcolor::{Rgb888, RgbColor};

impl Rgba16 for Rgb888 {
    fn rgba16(&self) -> [u16; 4] {
        CanonicalColor::from_rgba8(self.r(), self.g(), self.b(), 0xFF).to_array()
    }

    fn from_rgba16(rgba: [u16; 4]) -> Self {
        let [r, g, b, _] = CanonicalColor::from(rgba).to_rgba8();
        Rgb888::new(r, g, b)
    }
}

impl OriginDimensions for PixelBuffer<'_> {
    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

impl DrawTarget for PixelBuffer<'_> {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.set_pixel(x, y, color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}
