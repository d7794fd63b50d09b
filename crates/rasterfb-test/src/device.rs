//! In-memory display device

use crate::error::{TestError, TestResult};
use rasterfb_core::{DeviceDescriptor, PixelBuffer, ScreenInfo};

/// Heap-backed stand-in for a memory-mapped display device
///
/// The pixel region is sized from the descriptor (`line_length * yres`)
/// and pre-filled with a byte pattern so tests can tell written bytes from
/// untouched ones.
#[derive(Debug, Clone)]
pub struct MemoryDevice {
    name: String,
    info: ScreenInfo,
    pixels: Vec<u8>,
}

impl MemoryDevice {
    /// Create a device whose memory is filled with `fill`.
    pub fn new(name: &str, info: ScreenInfo, fill: u8) -> Self {
        Self {
            name: name.to_string(),
            info,
            pixels: vec![fill; info.region_len()],
        }
    }

    /// Device name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current memory contents
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Build a pixel buffer over this device's memory.
    pub fn open(&mut self) -> TestResult<PixelBuffer<'_>> {
        let name = self.name.clone();
        PixelBuffer::from_device(self).map_err(|source| TestError::DeviceOpen { name, source })
    }
}

impl DeviceDescriptor for MemoryDevice {
    fn screen_info(&self) -> ScreenInfo {
        self.info
    }

    fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterfb_core::PixelFormat;

    #[test]
    fn test_open_memory_device() {
        let info = crate::screen_info(&PixelFormat::rgb565(), 4, 3, 2);
        let mut dev = MemoryDevice::new("fb-test", info, 0xAA);
        assert_eq!(dev.pixels().len(), 30);

        let fb = dev.open().unwrap();
        assert_eq!(fb.dimensions(), (4, 3));
        assert_eq!(fb.pitch(), 10);
        assert_eq!(fb.get_packed(0, 0), Some(0xAAAA));
    }

    #[test]
    fn test_open_rejects_bad_format() {
        let mut info = crate::screen_info(&PixelFormat::rgb565(), 4, 3, 0);
        info.bits_per_pixel = 12;
        let mut dev = MemoryDevice::new("fb-bad", info, 0);
        let err = dev.open().unwrap_err();
        assert!(err.to_string().contains("fb-bad"));
        assert!(matches!(err, TestError::DeviceOpen { .. }));
    }
}
