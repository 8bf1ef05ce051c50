//! DXT1 (BC1) block decoding.
//!
//! Uses the 'ideal' rounding described in the DX9 docs: endpoints are expanded to 8 bits
//! by bit replication, then the derived colours are computed per channel with truncating
//! division. This is what the Source engine produces, as opposed to the DX10, AMD or Nvidia
//! hardware approximations.

use crate::Dxt1Variant;
use vtf_decode_common::{
    color_565::{decomp565, upsample},
    color_8888::Color8888,
    decoded_4x4_block::Decoded4x4Block,
};

/// Decodes a DXT1 endpoint into an opaque colour.
///
/// [`decomp565`] yields the channels lowest bits first, so for the standard endpoint layout
/// they come out as blue, green, red.
#[inline(always)]
fn decode_endpoint(lo: u8, hi: u8) -> Color8888 {
    let (b, g, r) = decomp565(lo, hi);
    Color8888::new(upsample(5, r), upsample(6, g), upsample(5, b), 255)
}

/// Builds the 4-entry colour table of a block from its two endpoints.
#[inline(always)]
fn build_color_table(src: [u8; 4], variant: Dxt1Variant) -> [Color8888; 4] {
    let c0 = decode_endpoint(src[0], src[1]);
    let c1 = decode_endpoint(src[2], src[3]);
    let c0_raw = u16::from_le_bytes([src[0], src[1]]);
    let c1_raw = u16::from_le_bytes([src[2], src[3]]);

    let (c2, c3) = if c0_raw > c1_raw {
        // Four-color block
        let third = |a: u8, b: u8| ((2 * a as u32 + b as u32) / 3) as u8;
        (
            Color8888::new(third(c0.r, c1.r), third(c0.g, c1.g), third(c0.b, c1.b), 255),
            Color8888::new(third(c1.r, c0.r), third(c1.g, c0.g), third(c1.b, c0.b), 255),
        )
    } else {
        // Three-color block, index 3 depends on the variant.
        let half = |a: u8, b: u8| ((a as u32 + b as u32) / 2) as u8;
        (
            Color8888::new(half(c0.r, c1.r), half(c0.g, c1.g), half(c0.b, c1.b), 255),
            variant.fourth_color(),
        )
    };

    [c0, c1, c2, c3]
}

/// Decodes a DXT1 block into a structured representation of pixels
///
/// # Parameters
///
/// - `src`: Pointer to the source DXT1 block (must point to at least 8 bytes of valid memory)
/// - `variant`: Which colour index 3 maps to in 3-colour blocks
///
/// # Returns
///
/// A [`Decoded4x4Block`] containing all 16 decoded pixels
///
/// # Safety
///
/// The caller must ensure that `src` points to at least 8 bytes of valid memory.
///
/// # Example
///
/// ```
/// use vtf_decode_dxt1::{decode_dxt1_block, Dxt1Variant};
///
/// let block = [0u8; 8];
/// unsafe {
///     let decoded = decode_dxt1_block(block.as_ptr(), Dxt1Variant::Opaque);
///     let pixel_at_0_0 = decoded.get_pixel_unchecked(0, 0);
///     assert_eq!(pixel_at_0_0.a, 255);
/// }
/// ```
#[inline(always)]
pub unsafe fn decode_dxt1_block(src: *const u8, variant: Dxt1Variant) -> Decoded4x4Block {
    let bytes = (src as *const [u8; 8]).read_unaligned();
    let table = build_color_table([bytes[0], bytes[1], bytes[2], bytes[3]], variant);

    let mut result = Decoded4x4Block::new(Color8888::default());
    for y in 0..4 {
        // One byte per row; the top pair of bits is the leftmost pixel.
        let row = bytes[4 + y];
        for x in 0..4 {
            let index = (row >> (6 - 2 * x)) & 0b11;
            result.set_pixel_unchecked(x, y, *table.get_unchecked(index as usize));
        }
    }

    result
}

/// Safely wraps the unsafe [`decode_dxt1_block`] function for use with slices
///
/// # Returns
///
/// A decoded block, else [`None`] if the slice is too short.
#[inline(always)]
pub fn decode_dxt1_block_from_slice(src: &[u8], variant: Dxt1Variant) -> Option<Decoded4x4Block> {
    if src.len() < crate::DXT1_BLOCK_SIZE {
        return None;
    }
    unsafe { Some(decode_dxt1_block(src.as_ptr(), variant)) }
}
