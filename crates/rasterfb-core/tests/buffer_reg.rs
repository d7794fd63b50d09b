//! Pixel buffer regression test
//!
//! Bounds behavior across buffer sizes and pixel widths, write/read cycles
//! through padded rows, and buffers opened from a device descriptor.

use rasterfb_core::{
    ByteOrder, CanonicalColor, ChannelSpec, PixelBuffer, PixelFormat, PixelView, decode, encode,
};
use rasterfb_test::{MemoryDevice, RegParams, checksum, screen_info};

/// One format per supported pixel width.
fn formats() -> Vec<PixelFormat> {
    let gray16 = PixelFormat::new(
        ChannelSpec::new(16, 0),
        ChannelSpec::new(0, 0),
        ChannelSpec::new(0, 0),
        ChannelSpec::new(0, 0),
        16,
    )
    .unwrap();
    vec![
        PixelFormat::rgb332(),
        PixelFormat::rgb565(),
        gray16,
        PixelFormat::rgb888(),
        PixelFormat::xrgb8888(),
        PixelFormat::argb8888(),
    ]
}

fn sample_colors() -> Vec<CanonicalColor> {
    vec![
        CanonicalColor::BLACK,
        CanonicalColor::WHITE,
        CanonicalColor::TRANSPARENT,
        CanonicalColor::new(0x1234, 0x5678, 0x9ABC, 0xDEF0),
        CanonicalColor::new(0xFFFF, 0x0001, 0x8000, 0x7FFF),
    ]
}

#[test]
fn buffer_bounds_reg() {
    let mut rp = RegParams::new("buffer_bounds");

    // --- Test 1: out of bounds reads return decode(0) for every size ---
    for format in formats() {
        let zero = decode(0, &format);
        for (width, height) in [(0u32, 0u32), (1, 1), (3, 2), (7, 5)] {
            let pitch = width as usize * format.bytes_per_pixel() as usize + 3;
            let mut memory = vec![0xA5u8; pitch * height as usize];
            let fb = PixelBuffer::new(&mut memory, pitch, width, height, format);
            let (w, h) = (width as i32, height as i32);
            for (x, y) in [(-1, 0), (0, -1), (w, 0), (0, h), (w, h), (-100, 100)] {
                rp.compare_colors(zero, fb.get_pixel(x, y));
            }
        }
    }

    // --- Test 2: out of bounds writes leave memory untouched ---
    for format in formats() {
        let (width, height) = (5u32, 4u32);
        let pitch = width as usize * format.bytes_per_pixel() as usize + 2;
        let mut memory: Vec<u8> = (0..pitch * height as usize).map(|i| i as u8).collect();
        let before = checksum(&memory);
        let mut fb = PixelBuffer::new(&mut memory, pitch, width, height, format);
        for (x, y) in [(-1, -1), (5, 0), (0, 4), (i32::MAX, 0), (0, i32::MIN)] {
            fb.set_pixel(x, y, CanonicalColor::WHITE);
        }
        rp.compare_values(before as f64, checksum(fb.as_bytes()) as f64, 0.0);
        rp.check(before == checksum(&memory));
    }

    assert!(rp.cleanup());
}

#[test]
fn buffer_access_reg() {
    let mut rp = RegParams::new("buffer_access");

    // --- Test 1: set then get yields decode(encode(c)) for every pixel ---
    for format in formats() {
        let (width, height) = (6u32, 3u32);
        let pitch = width as usize * format.bytes_per_pixel() as usize + 4;
        let mut memory = vec![0u8; pitch * height as usize];
        let mut fb = PixelBuffer::new(&mut memory, pitch, width, height, format);
        for (i, color) in sample_colors().into_iter().enumerate() {
            let expected = decode(encode(color, &format), &format);
            let mut mismatches = 0;
            for y in 0..height as i32 {
                for x in 0..width as i32 {
                    fb.set_pixel(x, y, color);
                    if fb.get_pixel(x, y) != expected {
                        mismatches += 1;
                    }
                }
            }
            rp.compare_values(0.0, mismatches as f64, 0.0);
            rp.compare_colors(format.convert(color), fb.get_pixel(i as i32 % 6, 1));
        }
    }

    // --- Test 2: row padding is never written ---
    let format = PixelFormat::rgb888();
    let (width, height, pitch) = (4u32, 3u32, 16usize);
    let mut memory = vec![0xEEu8; pitch * height as usize];
    let mut fb = PixelBuffer::new(&mut memory, pitch, width, height, format);
    fb.fill(CanonicalColor::BLACK);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            fb.set_pixel(x, y, CanonicalColor::WHITE);
        }
    }
    for row in memory.chunks(pitch) {
        rp.compare_bytes(&[0xFF; 12], &row[..12]);
        rp.compare_bytes(&[0xEE; 4], &row[12..]);
    }

    // --- Test 3: little-endian byte layout by default, big-endian on request ---
    let mut memory = vec![0u8; 8];
    let mut fb = PixelBuffer::new(&mut memory, 8, 2, 1, PixelFormat::argb8888());
    fb.set_packed(0, 0, 0x0102_0304);
    fb = fb.with_byte_order(ByteOrder::BigEndian);
    fb.set_packed(1, 0, 0x0102_0304);
    rp.compare_bytes(&[4, 3, 2, 1, 1, 2, 3, 4], fb.as_bytes());

    // --- Test 4: a read-only view sees what the buffer wrote ---
    let format = PixelFormat::rgb565();
    let mut memory = vec![0u8; 2 * 4];
    {
        let mut fb = PixelBuffer::new(&mut memory, 4, 2, 2, format);
        fb.set_pixel(1, 1, CanonicalColor::opaque(0xFFFF, 0, 0));
    }
    let view = PixelView::new(&memory, 4, 2, 2, format);
    rp.compare_values(0xF800 as f64, view.get_packed(1, 1).unwrap_or(0) as f64, 0.0);
    rp.compare_colors(CanonicalColor::opaque(0xF800, 0, 0), view.get_pixel(1, 1));
    rp.compare_colors(decode(0, &format), view.get_pixel(2, 1));

    assert!(rp.cleanup());
}

#[test]
fn buffer_device_reg() {
    let mut rp = RegParams::new("buffer_device");

    // --- Test 1: buffers opened from a device honor its descriptor ---
    for format in formats() {
        let info = screen_info(&format, 8, 6, 5);
        let mut dev = MemoryDevice::new("fb0", info, 0x3C);
        let before = checksum(dev.pixels());
        {
            let mut fb = dev.open().unwrap();
            rp.compare_values(8.0, fb.width() as f64, 0.0);
            rp.compare_values(6.0, fb.height() as f64, 0.0);
            rp.compare_values(info.line_length as f64, fb.pitch() as f64, 0.0);

            fb.set_pixel(8, 0, CanonicalColor::WHITE);
            fb.set_pixel(0, 6, CanonicalColor::WHITE);
        }
        rp.compare_values(before as f64, checksum(dev.pixels()) as f64, 0.0);

        let color = CanonicalColor::new(0xABCD, 0x1234, 0xFEDC, 0x8000);
        {
            let mut fb = dev.open().unwrap();
            fb.set_pixel(7, 5, color);
        }
        let fb = dev.open().unwrap();
        rp.compare_colors(format.convert(color), fb.get_pixel(7, 5));
        rp.compare_colors(decode(0, &format), fb.get_pixel(-1, 5));
    }

    // --- Test 2: unsupported descriptors are reported ---
    let mut info = screen_info(&PixelFormat::rgb565(), 8, 6, 0);
    info.green.msb_right = 1;
    let mut dev = MemoryDevice::new("fb1", info, 0);
    rp.check(dev.open().is_err());

    assert!(rp.cleanup());
}
