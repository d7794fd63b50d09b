//! PixelBuffer - pixel grid over borrowed raster memory
//!
//! [`PixelBuffer`] turns a raw byte region (usually a memory-mapped display
//! surface) into a `width x height` grid addressed in canonical color.
//! [`PixelView`] is the read-only counterpart.
//!
//! # Memory layout
//!
//! - Pixel `(x, y)` starts at byte `y * pitch + x * bytes_per_pixel`
//! - `pitch` may exceed `width * bytes_per_pixel`; padding is never touched
//! - A pixel's bytes form one packed value, little-endian unless another
//!   [`ByteOrder`] is selected
//!
//! # Bounds
//!
//! Access outside `[0, width) x [0, height)` never fails. Reads return the
//! color that packed value `0` decodes to and writes are dropped. Pixels
//! whose bytes lie past the end of a short region are treated the same way.
//!
//! # Ownership model
//!
//! Both types borrow the region and never allocate or free it. The borrow
//! ties their lifetime to the region's. Nothing here synchronizes with
//! other observers of the memory, such as display scanout, so a multi-byte
//! pixel may be seen half written.

mod access;
#[cfg(feature = "embedded-graphics")]
mod draw_target;

pub use access::{ByteOrder, read_packed, write_packed};

use crate::codec::{self, PackedPixel};
use crate::color::{CanonicalColor, Rgba16};
use crate::descriptor::DeviceDescriptor;
use crate::error::Result;
use crate::format::PixelFormat;
use tracing::{debug, warn};

/// Geometry shared by [`PixelBuffer`] and [`PixelView`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    width: u32,
    height: u32,
    pitch: usize,
    format: PixelFormat,
    byte_order: ByteOrder,
}

impl Layout {
    fn new(region_len: usize, pitch: usize, width: u32, height: u32, format: PixelFormat) -> Self {
        let required = pitch.saturating_mul(height as usize);
        if region_len < required {
            warn!(
                region_len,
                required, "pixel region is shorter than pitch * height; trailing pixels are unreachable"
            );
        }
        Self {
            width,
            height,
            pitch,
            format,
            byte_order: ByteOrder::default(),
        }
    }

    #[inline]
    fn bytes_per_pixel(&self) -> usize {
        self.format.bytes_per_pixel() as usize
    }

    /// Grid position of `(x, y)`, if it is in bounds.
    #[inline]
    fn position(&self, x: i32, y: i32) -> Option<(u32, u32)> {
        let (x, y) = (u32::try_from(x).ok()?, u32::try_from(y).ok()?);
        (x < self.width && y < self.height).then_some((x, y))
    }

    #[inline]
    fn contains(&self, x: i32, y: i32) -> bool {
        self.position(x, y).is_some()
    }

    /// Byte range of pixel `(x, y)`.
    ///
    /// `None` if the pixel is out of bounds or its offset does not fit in
    /// `usize`.
    #[inline]
    fn byte_range(&self, x: u32, y: u32) -> Option<std::ops::Range<usize>> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let bpp = self.bytes_per_pixel();
        let start = (y as usize)
            .checked_mul(self.pitch)?
            .checked_add((x as usize).checked_mul(bpp)?)?;
        Some(start..start.checked_add(bpp)?)
    }

    #[inline]
    fn read(&self, data: &[u8], x: i32, y: i32) -> Option<PackedPixel> {
        let (x, y) = self.position(x, y)?;
        let bytes = data.get(self.byte_range(x, y)?)?;
        Some(read_packed(bytes, self.byte_order))
    }

    #[inline]
    fn write(&self, data: &mut [u8], x: i32, y: i32, value: PackedPixel) {
        if let Some((x, y)) = self.position(x, y) {
            self.write_at(data, x, y, value);
        }
    }

    /// Store `value` at grid position `(x, y)`. Returns `false` when the
    /// pixel's bytes are not inside `data`.
    #[inline]
    fn write_at(&self, data: &mut [u8], x: u32, y: u32, value: PackedPixel) -> bool {
        match self.byte_range(x, y).and_then(|r| data.get_mut(r)) {
            Some(bytes) => {
                write_packed(bytes, value, self.byte_order);
                true
            }
            None => false,
        }
    }

    #[inline]
    fn get_pixel(&self, data: &[u8], x: i32, y: i32) -> CanonicalColor {
        codec::decode(self.read(data, x, y).unwrap_or(0), &self.format)
    }
}

/// Mutable pixel grid over a borrowed byte region
///
/// # Examples
///
/// ```
/// use rasterfb_core::{CanonicalColor, PixelBuffer, PixelFormat};
///
/// let mut memory = vec![0u8; 8 * 2];
/// let mut fb = PixelBuffer::new(&mut memory, 8, 3, 2, PixelFormat::rgb565());
///
/// fb.set_pixel(1, 1, CanonicalColor::WHITE);
/// assert_eq!(fb.get_packed(1, 1), Some(0xFFFF));
///
/// // Out of bounds writes are ignored, reads return the default color
/// fb.set_pixel(3, 0, CanonicalColor::WHITE);
/// assert_eq!(fb.get_pixel(-1, 0), PixelFormat::rgb565().decode(0));
/// ```
#[derive(Debug)]
pub struct PixelBuffer<'a> {
    data: &'a mut [u8],
    layout: Layout,
}

impl<'a> PixelBuffer<'a> {
    /// Wrap a byte region as a pixel grid.
    ///
    /// `pitch` is the number of bytes per row. The region should hold at
    /// least `pitch * height` bytes; pixels beyond its end read as the
    /// default color and ignore writes. Per-pixel access takes `i32`
    /// coordinates, so it reaches columns and rows up to `i32::MAX`;
    /// [`fill`](Self::fill) covers the whole grid.
    pub fn new(
        region: &'a mut [u8],
        pitch: usize,
        width: u32,
        height: u32,
        format: PixelFormat,
    ) -> Self {
        let layout = Layout::new(region.len(), pitch, width, height, format);
        Self {
            data: region,
            layout,
        }
    }

    /// Build a pixel grid from a device's descriptor and mapped memory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`](crate::Error::UnsupportedFormat)
    /// if the device's pixel layout is rejected by
    /// [`PixelFormat::from_screen_info`].
    pub fn from_device<D: DeviceDescriptor + ?Sized>(device: &'a mut D) -> Result<Self> {
        let info = device.screen_info();
        let format = PixelFormat::from_screen_info(&info)?;
        debug!(
            xres = info.xres,
            yres = info.yres,
            line_length = info.line_length,
            bits_per_pixel = info.bits_per_pixel,
            "opened pixel buffer"
        );
        Ok(Self::new(
            device.pixels_mut(),
            info.line_length as usize,
            info.xres,
            info.yres,
            format,
        ))
    }

    /// Use the given byte order for packed pixels.
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.layout.byte_order = byte_order;
        self
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.layout.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.layout.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.layout.width, self.layout.height)
    }

    /// Bytes per row.
    #[inline]
    pub fn pitch(&self) -> usize {
        self.layout.pitch
    }

    /// Bytes per pixel, taken from the format.
    #[inline]
    pub fn bytes_per_pixel(&self) -> u32 {
        self.layout.format.bytes_per_pixel()
    }

    /// Pixel format used to encode and decode colors.
    #[inline]
    pub fn format(&self) -> &PixelFormat {
        &self.layout.format
    }

    /// Byte order of packed pixels in memory.
    #[inline]
    pub fn byte_order(&self) -> ByteOrder {
        self.layout.byte_order
    }

    /// Whether `(x, y)` lies inside the grid.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.layout.contains(x, y)
    }

    /// Read the color at `(x, y)`.
    ///
    /// Out of bounds coordinates return the color packed value `0` decodes
    /// to.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> CanonicalColor {
        self.layout.get_pixel(self.data, x, y)
    }

    /// Write a color at `(x, y)`.
    ///
    /// Out of bounds coordinates are ignored without touching memory.
    #[inline]
    pub fn set_pixel<C: Rgba16>(&mut self, x: i32, y: i32, color: C) {
        if !self.layout.contains(x, y) {
            return;
        }
        let packed = codec::encode(color.to_canonical(), &self.layout.format);
        self.layout.write(self.data, x, y, packed);
    }

    /// Read the raw packed value at `(x, y)`.
    ///
    /// Returns `None` if the pixel is out of bounds.
    #[inline]
    pub fn get_packed(&self, x: i32, y: i32) -> Option<PackedPixel> {
        self.layout.read(self.data, x, y)
    }

    /// Write a raw packed value at `(x, y)`; ignored if out of bounds.
    #[inline]
    pub fn set_packed(&mut self, x: i32, y: i32, value: PackedPixel) {
        self.layout.write(self.data, x, y, value);
    }

    /// Set every pixel in the grid to one color.
    ///
    /// Row padding between `width * bytes_per_pixel` and `pitch` is left
    /// untouched. Pixels past the end of a short region are skipped.
    pub fn fill<C: Rgba16>(&mut self, color: C) {
        let packed = codec::encode(color.to_canonical(), &self.layout.format);
        let (width, height) = self.dimensions();
        // Offsets only grow along a row and down the grid, so the first pixel
        // that misses the region ends its row, and a row that misses at x = 0
        // ends the fill.
        for y in 0..height {
            let mut written = 0u32;
            for x in 0..width {
                if !self.layout.write_at(self.data, x, y, packed) {
                    break;
                }
                written += 1;
            }
            if written == 0 {
                break;
            }
        }
    }

    /// The underlying bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.data
    }

    /// Borrow as a read-only view.
    pub fn as_view(&self) -> PixelView<'_> {
        PixelView {
            data: self.data,
            layout: self.layout,
        }
    }
}

/// Read-only pixel grid over a borrowed byte region
///
/// Addressing and bounds behave exactly like [`PixelBuffer`].
#[derive(Debug, Clone, Copy)]
pub struct PixelView<'a> {
    data: &'a [u8],
    layout: Layout,
}

impl<'a> PixelView<'a> {
    /// Wrap a byte region as a read-only pixel grid.
    pub fn new(region: &'a [u8], pitch: usize, width: u32, height: u32, format: PixelFormat) -> Self {
        let layout = Layout::new(region.len(), pitch, width, height, format);
        Self {
            data: region,
            layout,
        }
    }

    /// Use the given byte order for packed pixels.
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.layout.byte_order = byte_order;
        self
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.layout.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.layout.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.layout.width, self.layout.height)
    }

    /// Bytes per row.
    #[inline]
    pub fn pitch(&self) -> usize {
        self.layout.pitch
    }

    /// Pixel format used to decode colors.
    #[inline]
    pub fn format(&self) -> &PixelFormat {
        &self.layout.format
    }

    /// Whether `(x, y)` lies inside the grid.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.layout.contains(x, y)
    }

    /// Read the color at `(x, y)`; see [`PixelBuffer::get_pixel`].
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> CanonicalColor {
        self.layout.get_pixel(self.data, x, y)
    }

    /// Read the raw packed value at `(x, y)`.
    #[inline]
    pub fn get_packed(&self, x: i32, y: i32) -> Option<PackedPixel> {
        self.layout.read(self.data, x, y)
    }

    /// The underlying bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }
}
