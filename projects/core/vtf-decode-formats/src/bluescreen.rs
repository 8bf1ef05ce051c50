//! Colour-keyed 24-bit formats where pure blue means fully transparent.

use crate::channel_order::{ChannelOrder, BGR, RGB};
use crate::pixels::map_pixels;
use vtf_decode_common::color_8888::{Color8888, TRANSPARENT_BLACK};

/// The colour treated as transparent.
pub const BLUESCREEN_KEY: Color8888 = Color8888::new(0, 0, 255, 255);

#[inline(always)]
unsafe fn decode_bluescreen(
    order: ChannelOrder,
    input_ptr: *const u8,
    output_ptr: *mut u8,
    pixel_count: usize,
) {
    let ChannelOrder { r, g, b, .. } = order;
    map_pixels::<3>(input_ptr, output_ptr, pixel_count, |px| {
        let color = Color8888::new(px[r], px[g], px[b], 255);
        if color == BLUESCREEN_KEY {
            TRANSPARENT_BLACK
        } else {
            color
        }
    })
}

/// Loads `RGB888_BLUESCREEN`.
///
/// # Safety
///
/// `input_ptr` must be valid for reads of `width * height * 3` bytes, and
/// `output_ptr` for writes of `width * height * 4` bytes.
pub unsafe fn load_rgb888_bluescreen(
    input_ptr: *const u8,
    output_ptr: *mut u8,
    width: usize,
    height: usize,
) {
    decode_bluescreen(RGB, input_ptr, output_ptr, width * height)
}

/// Loads `BGR888_BLUESCREEN`.
///
/// # Safety
///
/// `input_ptr` must be valid for reads of `width * height * 3` bytes, and
/// `output_ptr` for writes of `width * height * 4` bytes.
pub unsafe fn load_bgr888_bluescreen(
    input_ptr: *const u8,
    output_ptr: *mut u8,
    width: usize,
    height: usize,
) {
    decode_bluescreen(BGR, input_ptr, output_ptr, width * height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case([0, 0, 255], [0, 0, 0, 0])]
    #[case([10, 20, 30], [10, 20, 30, 255])]
    #[case([0, 1, 255], [0, 1, 255, 255])]
    #[case([255, 0, 0], [255, 0, 0, 255])]
    fn rgb888_bluescreen(#[case] input: [u8; 3], #[case] expected: [u8; 4]) {
        assert_eq!(run_loader(load_rgb888_bluescreen, &input, 1, 1), expected);
    }

    #[rstest]
    // Stored as B G R, so the key is the first byte.
    #[case([255, 0, 0], [0, 0, 0, 0])]
    #[case([0, 0, 255], [255, 0, 0, 255])]
    #[case([30, 20, 10], [10, 20, 30, 255])]
    fn bgr888_bluescreen(#[case] input: [u8; 3], #[case] expected: [u8; 4]) {
        assert_eq!(run_loader(load_bgr888_bluescreen, &input, 1, 1), expected);
    }

    #[test]
    fn only_keyed_pixels_become_transparent() {
        let input = [0, 0, 255, 1, 2, 3, 0, 0, 255, 0, 0, 254];
        let output = run_loader(load_rgb888_bluescreen, &input, 2, 2);
        assert_eq!(
            output,
            [0, 0, 0, 0, 1, 2, 3, 255, 0, 0, 0, 0, 0, 0, 254, 255]
        );
    }
}
