//! rasterfb-test - Regression test framework for rasterfb
//!
//! Shared tooling for the `tests/*_reg.rs` regression tests:
//!
//! - [`RegParams`]: numbered checks that collect failures instead of
//!   panicking on the first one
//! - [`MemoryDevice`]: a heap-backed [`DeviceDescriptor`] standing in for a
//!   mapped display device
//! - [`checksum`]: fingerprint of a whole pixel region
//! - [`init_logging`]: `tracing` subscriber for test output
//!
//! # Usage
//!
//! ```ignore
//! use rasterfb_test::RegParams;
//!
//! let mut rp = RegParams::new("codec");
//! rp.compare_values(65535.0, packed as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: "compare" (default) or "display"
//! - `RUST_LOG`: log filter, `info` when unset
//!
//! [`DeviceDescriptor`]: rasterfb_core::DeviceDescriptor

mod device;
mod error;
mod params;

pub use device::MemoryDevice;
pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use rasterfb_core::{BitField, PixelFormat, ScreenInfo};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Install the test log subscriber.
///
/// Honors `RUST_LOG` and defaults to `info`. Safe to call from every test;
/// only the first call installs anything.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_test_writer()
        .with_timer(fmt::time::uptime());

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}

/// FNV-1a hash of a byte region.
pub fn checksum(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    bytes.iter().fold(OFFSET_BASIS, |hash, &b| {
        (hash ^ u64::from(b)).wrapping_mul(PRIME)
    })
}

/// Describe a screen using `format`, with `row_padding` extra bytes per row.
pub fn screen_info(format: &PixelFormat, xres: u32, yres: u32, row_padding: u32) -> ScreenInfo {
    let field = |spec: rasterfb_core::ChannelSpec| BitField::new(spec.offset, spec.length);
    ScreenInfo {
        red: field(format.red()),
        green: field(format.green()),
        blue: field(format.blue()),
        alpha: field(format.alpha()),
        bits_per_pixel: format.bits_per_pixel(),
        line_length: xres * format.bytes_per_pixel() + row_padding,
        xres,
        yres,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum() {
        assert_eq!(checksum(&[]), 0xcbf2_9ce4_8422_2325);
        assert_eq!(checksum(b"a"), 0xaf63_dc4c_8601_ec8c);
        assert_ne!(checksum(&[0, 1]), checksum(&[1, 0]));
    }

    #[test]
    fn test_screen_info_round_trips_format() {
        let info = screen_info(&PixelFormat::argb8888(), 10, 4, 8);
        assert_eq!(info.line_length, 48);
        assert_eq!(info.region_len(), 192);
        assert_eq!(
            PixelFormat::from_screen_info(&info).unwrap(),
            PixelFormat::argb8888()
        );
    }
}
