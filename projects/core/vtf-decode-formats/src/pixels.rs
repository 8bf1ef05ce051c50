//! Shared per-pixel loop used by every fixed-stride loader.

use vtf_decode_common::color_8888::Color8888;

/// Decodes `pixel_count` pixels of `BPP` input bytes each into RGBA8888 output.
///
/// # Safety
///
/// - `input_ptr` must be valid for reads of `pixel_count * BPP` bytes.
/// - `output_ptr` must be valid for writes of `pixel_count * 4` bytes.
#[inline(always)]
pub(crate) unsafe fn map_pixels<const BPP: usize>(
    input_ptr: *const u8,
    output_ptr: *mut u8,
    pixel_count: usize,
    decode: impl Fn([u8; BPP]) -> Color8888,
) {
    let mut src = input_ptr;
    let mut dst = output_ptr;
    for _ in 0..pixel_count {
        let bytes = (src as *const [u8; BPP]).read_unaligned();
        decode(bytes).write_to_ptr(dst);
        src = src.add(BPP);
        dst = dst.add(4);
    }
}
