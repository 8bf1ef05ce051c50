//! Intensity, alpha-only and two-channel formats.

use crate::pixels::map_pixels;
use vtf_decode_common::color_8888::Color8888;

/// Loads `I8`: one luminance byte replicated into red, green and blue.
///
/// # Safety
///
/// `input_ptr` must be valid for reads of `width * height` bytes, and
/// `output_ptr` for writes of `width * height * 4` bytes.
pub unsafe fn load_i8(input_ptr: *const u8, output_ptr: *mut u8, width: usize, height: usize) {
    map_pixels::<1>(input_ptr, output_ptr, width * height, |[i]| {
        Color8888::new(i, i, i, 255)
    })
}

/// Loads `IA88`: luminance followed by alpha.
///
/// # Safety
///
/// `input_ptr` must be valid for reads of `width * height * 2` bytes, and
/// `output_ptr` for writes of `width * height * 4` bytes.
pub unsafe fn load_ia88(input_ptr: *const u8, output_ptr: *mut u8, width: usize, height: usize) {
    map_pixels::<2>(input_ptr, output_ptr, width * height, |[i, a]| {
        Color8888::new(i, i, i, a)
    })
}

/// Loads `A8`: black with the stored alpha.
///
/// # Safety
///
/// `input_ptr` must be valid for reads of `width * height` bytes, and
/// `output_ptr` for writes of `width * height * 4` bytes.
pub unsafe fn load_a8(input_ptr: *const u8, output_ptr: *mut u8, width: usize, height: usize) {
    map_pixels::<1>(input_ptr, output_ptr, width * height, |[a]| {
        Color8888::new(0, 0, 0, a)
    })
}

/// Loads `UV88` into red and green.
///
/// # Safety
///
/// `input_ptr` must be valid for reads of `width * height * 2` bytes, and
/// `output_ptr` for writes of `width * height * 4` bytes.
pub unsafe fn load_uv88(input_ptr: *const u8, output_ptr: *mut u8, width: usize, height: usize) {
    map_pixels::<2>(input_ptr, output_ptr, width * height, |[u, v]| {
        Color8888::new(u, v, 0, 255)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(0, [0, 0, 0, 255])]
    #[case(128, [128, 128, 128, 255])]
    #[case(255, [255, 255, 255, 255])]
    fn i8_replicates_luminance(#[case] input: u8, #[case] expected: [u8; 4]) {
        assert_eq!(run_loader(load_i8, &[input], 1, 1), expected);
    }

    #[rstest]
    #[case([200, 0], [200, 200, 200, 0])]
    #[case([17, 99], [17, 17, 17, 99])]
    fn ia88(#[case] input: [u8; 2], #[case] expected: [u8; 4]) {
        assert_eq!(run_loader(load_ia88, &input, 1, 1), expected);
    }

    #[test]
    fn a8_is_black_with_alpha() {
        let output = run_loader(load_a8, &[0, 77, 255, 1], 2, 2);
        assert_eq!(
            output,
            [0, 0, 0, 0, 0, 0, 0, 77, 0, 0, 0, 255, 0, 0, 0, 1]
        );
    }

    #[test]
    fn uv88_fills_blue_and_alpha() {
        let output = run_loader(load_uv88, &[12, 34, 56, 78], 2, 1);
        assert_eq!(output, [12, 34, 0, 255, 56, 78, 0, 255]);
    }
}
