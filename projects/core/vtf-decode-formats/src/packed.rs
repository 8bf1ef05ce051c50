//! Formats packing a pixel into 2 bytes with fewer than 8 bits per channel.
//!
//! 5 and 6 bit channels are expanded with [`upsample`]. `BGRA4444` instead copies each
//! nibble into both halves of its output byte.

use crate::pixels::map_pixels;
use vtf_decode_common::{
    color_565::{decomp565, upsample},
    color_8888::Color8888,
};

/// Loads `RGB565`: red in the low bits of the first byte.
///
/// # Safety
///
/// `input_ptr` must be valid for reads of `width * height * 2` bytes, and
/// `output_ptr` for writes of `width * height * 4` bytes.
pub unsafe fn load_rgb565(input_ptr: *const u8, output_ptr: *mut u8, width: usize, height: usize) {
    map_pixels::<2>(input_ptr, output_ptr, width * height, |[lo, hi]| {
        let (r, g, b) = decomp565(lo, hi);
        Color8888::new(upsample(5, r), upsample(6, g), upsample(5, b), 255)
    })
}

/// Loads `BGR565`: blue in the low bits of the first byte.
///
/// # Safety
///
/// `input_ptr` must be valid for reads of `width * height * 2` bytes, and
/// `output_ptr` for writes of `width * height * 4` bytes.
pub unsafe fn load_bgr565(input_ptr: *const u8, output_ptr: *mut u8, width: usize, height: usize) {
    map_pixels::<2>(input_ptr, output_ptr, width * height, |[lo, hi]| {
        let (b, g, r) = decomp565(lo, hi);
        Color8888::new(upsample(5, r), upsample(6, g), upsample(5, b), 255)
    })
}

/// Loads `BGRA4444`. The first byte holds green (high nibble) and blue (low nibble), the
/// second alpha (high nibble) and red (low nibble).
///
/// # Safety
///
/// `input_ptr` must be valid for reads of `width * height * 2` bytes, and
/// `output_ptr` for writes of `width * height * 4` bytes.
pub unsafe fn load_bgra4444(input_ptr: *const u8, output_ptr: *mut u8, width: usize, height: usize) {
    map_pixels::<2>(input_ptr, output_ptr, width * height, |[lo, hi]| {
        Color8888::new(
            (hi & 0x0F) | (hi << 4),
            (lo & 0xF0) | (lo >> 4),
            (lo & 0x0F) | (lo << 4),
            (hi & 0xF0) | (hi >> 4),
        )
    })
}

/// Splits a `BGRX5551`/`BGRA5551` pixel into upsampled colour and the alpha bit.
#[inline(always)]
fn decode_5551(lo: u8, hi: u8) -> (u8, u8, u8, bool) {
    (
        upsample(5, (hi & 0b0111_1100) << 1),
        upsample(5, ((lo & 0b1110_0000) >> 2) | ((hi & 0b0000_0011) << 6)),
        upsample(5, (lo & 0b0001_1111) << 3),
        hi & 0b1000_0000 != 0,
    )
}

/// Loads `BGRA5551`: 5 bits per colour, the top bit selects alpha 0 or 255.
///
/// # Safety
///
/// `input_ptr` must be valid for reads of `width * height * 2` bytes, and
/// `output_ptr` for writes of `width * height * 4` bytes.
pub unsafe fn load_bgra5551(input_ptr: *const u8, output_ptr: *mut u8, width: usize, height: usize) {
    map_pixels::<2>(input_ptr, output_ptr, width * height, |[lo, hi]| {
        let (r, g, b, alpha) = decode_5551(lo, hi);
        Color8888::new(r, g, b, if alpha { 255 } else { 0 })
    })
}

/// Loads `BGRX5551`: same layout as `BGRA5551` but the alpha bit is ignored.
///
/// # Safety
///
/// `input_ptr` must be valid for reads of `width * height * 2` bytes, and
/// `output_ptr` for writes of `width * height * 4` bytes.
pub unsafe fn load_bgrx5551(input_ptr: *const u8, output_ptr: *mut u8, width: usize, height: usize) {
    map_pixels::<2>(input_ptr, output_ptr, width * height, |[lo, hi]| {
        let (r, g, b, _) = decode_5551(lo, hi);
        Color8888::new(r, g, b, 255)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case([0x1F, 0x00], [255, 0, 0, 255])]
    #[case([0xE0, 0x07], [0, 255, 0, 255])]
    #[case([0x00, 0xF8], [0, 0, 255, 255])]
    #[case([0xFF, 0xFF], [255, 255, 255, 255])]
    #[case([0x00, 0x00], [0, 0, 0, 255])]
    fn rgb565(#[case] input: [u8; 2], #[case] expected: [u8; 4]) {
        assert_eq!(run_loader(load_rgb565, &input, 1, 1), expected);
    }

    #[rstest]
    #[case([0x1F, 0x00], [0, 0, 255, 255])]
    #[case([0xE0, 0x07], [0, 255, 0, 255])]
    #[case([0x00, 0xF8], [255, 0, 0, 255])]
    fn bgr565(#[case] input: [u8; 2], #[case] expected: [u8; 4]) {
        assert_eq!(run_loader(load_bgr565, &input, 1, 1), expected);
    }

    #[rstest]
    #[case([0x00, 0x0F], [255, 0, 0, 0])]
    #[case([0xF0, 0x00], [0, 255, 0, 0])]
    #[case([0x0F, 0x00], [0, 0, 255, 0])]
    #[case([0x00, 0xF0], [0, 0, 0, 255])]
    #[case([0x5A, 0x3C], [0xCC, 0x55, 0xAA, 0x33])]
    fn bgra4444_replicates_nibbles(#[case] input: [u8; 2], #[case] expected: [u8; 4]) {
        assert_eq!(run_loader(load_bgra4444, &input, 1, 1), expected);
    }

    #[rstest]
    #[case([0x00, 0x7C], [255, 0, 0, 0])]
    #[case([0xE0, 0x03], [0, 255, 0, 0])]
    #[case([0x1F, 0x00], [0, 0, 255, 0])]
    #[case([0x00, 0x80], [0, 0, 0, 255])]
    #[case([0xFF, 0xFF], [255, 255, 255, 255])]
    fn bgra5551(#[case] input: [u8; 2], #[case] expected: [u8; 4]) {
        assert_eq!(run_loader(load_bgra5551, &input, 1, 1), expected);
    }

    #[rstest]
    #[case([0x00, 0x7C], [255, 0, 0, 255])]
    #[case([0x00, 0x80], [0, 0, 0, 255])]
    #[case([0xFF, 0x7F], [255, 255, 255, 255])]
    fn bgrx5551_ignores_alpha_bit(#[case] input: [u8; 2], #[case] expected: [u8; 4]) {
        assert_eq!(run_loader(load_bgrx5551, &input, 1, 1), expected);
    }

    #[test]
    fn packed_loaders_use_2_byte_stride() {
        let input = [0x1F, 0x00, 0x00, 0xF8, 0xE0, 0x07, 0x00, 0x00];
        let output = run_loader(load_rgb565, &input, 2, 2);
        assert_eq!(
            output,
            [255, 0, 0, 255, 0, 0, 255, 255, 0, 255, 0, 255, 0, 0, 0, 255]
        );
    }
}
