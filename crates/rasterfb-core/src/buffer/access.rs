//! Byte-level pixel access
//!
//! A packed pixel occupies `bytes_per_pixel` consecutive bytes of the
//! region. These helpers assemble and split those bytes. Byte order is
//! never detected; the caller states it with [`ByteOrder`].

/// Byte order of a packed pixel in memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    /// Least significant byte first (typical host/device pairing)
    #[default]
    LittleEndian,
    /// Most significant byte first
    BigEndian,
}

/// Read a packed pixel from its bytes.
///
/// `bytes.len()` is the pixel width in bytes, at most 4.
#[inline]
pub fn read_packed(bytes: &[u8], order: ByteOrder) -> u32 {
    let fold = |acc: u32, (i, &b): (usize, &u8)| acc | (u32::from(b) << (8 * i));
    match order {
        ByteOrder::LittleEndian => bytes.iter().enumerate().fold(0, fold),
        ByteOrder::BigEndian => bytes.iter().rev().enumerate().fold(0, fold),
    }
}

/// Write a packed pixel into its bytes.
///
/// Bits above `8 * bytes.len()` are dropped.
#[inline]
pub fn write_packed(bytes: &mut [u8], value: u32, order: ByteOrder) {
    match order {
        ByteOrder::LittleEndian => {
            for (i, b) in bytes.iter_mut().enumerate() {
                *b = (value >> (8 * i)) as u8;
            }
        }
        ByteOrder::BigEndian => {
            for (i, b) in bytes.iter_mut().rev().enumerate() {
                *b = (value >> (8 * i)) as u8;
            }
        }
    }
}
