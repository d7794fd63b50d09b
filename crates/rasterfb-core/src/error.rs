//! Error types for rasterfb-core
//!
//! The only failure this crate knows about happens when a device-reported
//! pixel layout cannot be expressed as a [`PixelFormat`]. Once a format has
//! been accepted, every pixel access is total: out-of-range reads return a
//! default color and out-of-range writes are dropped.
//!
//! [`PixelFormat`]: crate::PixelFormat

use crate::channel::Channel;
use thiserror::Error;

/// rasterfb error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The device pixel layout is not supported
    #[error("unsupported format: {0}")]
    UnsupportedFormat(FormatIssue),
}

/// Reason a pixel layout was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatIssue {
    /// A channel is wider than the 16 bits of the canonical color
    #[error("{channel} channel is {length} bits wide, at most 16 are supported")]
    ChannelTooWide { channel: Channel, length: u32 },

    /// A channel uses reversed bit significance
    #[error("{channel} channel has msb_right set")]
    MsbRight { channel: Channel },

    /// The descriptor reports zero bits per pixel
    #[error("pixel size is zero")]
    ZeroBitsPerPixel,

    /// Bits per pixel is not a whole number of bytes
    #[error("pixel size of {0} bits is not a multiple of 8")]
    UnalignedBitsPerPixel(u32),

    /// Bits per pixel does not fit a 32-bit packed pixel
    #[error("pixel size of {0} bits is greater than 32")]
    BitsPerPixelTooLarge(u32),
}

impl From<FormatIssue> for Error {
    fn from(issue: FormatIssue) -> Self {
        Error::UnsupportedFormat(issue)
    }
}

/// Result type alias for rasterfb operations
pub type Result<T> = std::result::Result<T, Error>;
