//! Whole-image DXT1 decoding into an RGBA8888 raster.
//!
//! Blocks are stored in raster block order, `ceil(width / 4)` blocks per block row.
//! VTF dimensions are powers of two, so images handed to these functions never contain
//! partial blocks; callers must validate that before calling in.

use crate::{block::decode_dxt1_block, Dxt1Variant, DXT1_BLOCK_SIZE};

/// Number of input bytes a `width` x `height` DXT1 image occupies.
///
/// ```
/// use vtf_decode_dxt1::dxt1_data_size;
///
/// assert_eq!(dxt1_data_size(4, 4), 8);
/// assert_eq!(dxt1_data_size(16, 8), 64);
/// ```
#[inline]
pub const fn dxt1_data_size(width: usize, height: usize) -> usize {
    width.div_ceil(4) * height.div_ceil(4) * DXT1_BLOCK_SIZE
}

/// Decodes a whole DXT1 image into RGBA8888 pixels.
///
/// # Parameters
///
/// - `input_ptr`: Pointer to the DXT1 blocks
/// - `output_ptr`: Pointer to the RGBA8888 output, `width * height * 4` bytes
/// - `width`, `height`: Image dimensions in pixels
/// - `variant`: Which colour index 3 maps to in 3-colour blocks
///
/// # Safety
///
/// - `width` and `height` must be multiples of 4.
/// - `input_ptr` must be valid for reads of [`dxt1_data_size`]`(width, height)` bytes.
/// - `output_ptr` must be valid for writes of `width * height * 4` bytes.
/// - The two regions must not overlap.
pub unsafe fn decode_dxt1_image(
    input_ptr: *const u8,
    output_ptr: *mut u8,
    width: usize,
    height: usize,
    variant: Dxt1Variant,
) {
    debug_assert!(width % 4 == 0 && height % 4 == 0);

    let blocks_wide = width / 4;
    let blocks_high = height / 4;
    let row_stride = width * 4;

    let mut block_ptr = input_ptr;
    for block_y in 0..blocks_high {
        for block_x in 0..blocks_wide {
            let decoded = decode_dxt1_block(block_ptr, variant);
            block_ptr = block_ptr.add(DXT1_BLOCK_SIZE);

            let mut dst = output_ptr.add(block_y * 4 * row_stride + block_x * 16);
            for y in 0..4 {
                let row = decoded.row_bytes(y);
                core::ptr::copy_nonoverlapping(row.as_ptr(), dst, row.len());
                dst = dst.add(row_stride);
            }
        }
    }
}

/// Loader entry for `DXT1`: 3-colour blocks map index 3 to opaque black.
///
/// # Safety
///
/// Same requirements as [`decode_dxt1_image`].
pub unsafe fn load_dxt1(input_ptr: *const u8, output_ptr: *mut u8, width: usize, height: usize) {
    decode_dxt1_image(input_ptr, output_ptr, width, height, Dxt1Variant::Opaque)
}

/// Loader entry for `DXT1_ONEBITALPHA`: 3-colour blocks map index 3 to transparent black.
///
/// # Safety
///
/// Same requirements as [`decode_dxt1_image`].
pub unsafe fn load_dxt1_onebitalpha(
    input_ptr: *const u8,
    output_ptr: *mut u8,
    width: usize,
    height: usize,
) {
    decode_dxt1_image(input_ptr, output_ptr, width, height, Dxt1Variant::OneBitAlpha)
}
