//! Channel and pixel codec regression test
//!
//! Exhaustive pack/unpack checks over every channel length and every 16-bit
//! input, plus the RGB565 reference values.

use rasterfb_core::{CanonicalColor, ChannelSpec, Expansion, PixelFormat, decode, encode};
use rasterfb_test::RegParams;

#[test]
fn codec_reg() {
    let mut rp = RegParams::new("codec");

    // --- Test 1: unpack(pack(v)) clears the low 16 - length bits ---
    for length in 1..=16u32 {
        for offset in [0u32, 5, 16 - length] {
            let ch = ChannelSpec::new(length, offset);
            let low_mask = !((1u32 << (16 - length)) - 1) as u16;
            let mismatches = (0..=u16::MAX)
                .filter(|&v| ch.unpack(ch.pack(v)) != v & low_mask)
                .count();
            rp.compare_values(0.0, mismatches as f64, 0.0);
        }
    }

    // --- Test 2: absent channels always unpack to 0xFFFF ---
    for offset in [0u32, 7, 31] {
        let ch = ChannelSpec::new(0, offset);
        let all_opaque = [0u32, 1, 0xFFFF, 0x8000_0000, u32::MAX]
            .into_iter()
            .all(|p| ch.unpack(p) == 0xFFFF);
        rp.check(all_opaque);
        rp.compare_values(0.0, ch.pack(0xFFFF) as f64, 0.0);
    }

    // --- Test 3: RGB565 reference values ---
    let rgb565 = PixelFormat::new(
        ChannelSpec::new(5, 11),
        ChannelSpec::new(6, 5),
        ChannelSpec::new(5, 0),
        ChannelSpec::new(0, 0),
        16,
    )
    .unwrap();
    let white565 = CanonicalColor::new(0xF800, 0xFC00, 0xF800, 0xFFFF);
    rp.compare_values(0xFFFF as f64, encode(white565, &rgb565) as f64, 0.0);
    rp.compare_colors(white565, decode(0xFFFF, &rgb565));

    // --- Test 4: encode(decode(p)) == p for every 16-bit RGB565 pixel ---
    let lossless = (0..=0xFFFFu32).all(|p| encode(decode(p, &rgb565), &rgb565) == p);
    rp.check(lossless);

    // --- Test 5: decode(encode(c)) keeps only the top bits ---
    let c = CanonicalColor::new(0xFFFF, 0x0421, 0x07FF, 0x1234);
    rp.compare_colors(
        CanonicalColor::new(0xF800, 0x0400, 0x0000, 0xFFFF),
        decode(encode(c, &rgb565), &rgb565),
    );

    // --- Test 6: replicated expansion, 24-bit pixels ---
    let rgb888 = PixelFormat::rgb888().with_expansion(Expansion::Replicate);
    rp.compare_colors(
        CanonicalColor::opaque(0x1212, 0x3434, 0x5656),
        decode(0x123456, &rgb888),
    );
    rp.compare_values(
        0x123456 as f64,
        encode(CanonicalColor::opaque(0x1212, 0x3434, 0x5656), &rgb888) as f64,
        0.0,
    );

    assert!(rp.cleanup());
}
