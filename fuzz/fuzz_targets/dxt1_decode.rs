#![no_main]

// Compares our DXT1_ONEBITALPHA block decoder against rgbcx-sys using the Ideal method.
// rgbcx reads the least significant index pair as the leftmost pixel, VTF data the most
// significant, so the index bytes are mirrored before being handed to rgbcx.

use core::mem;
use libfuzzer_sys::{arbitrary, fuzz_target};
use rgbcx_sys::root::rgbcx;
use vtf_decode_common::color_8888::Color8888;
use vtf_decode_common::decoded_4x4_block::Decoded4x4Block;
use vtf_decode_dxt1::{decode_dxt1_block, Dxt1Variant};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Dxt1Block {
    pub bytes: [u8; 8],
}

fuzz_target!(|block: Dxt1Block| {
    let ours = unsafe { decode_dxt1_block(block.bytes.as_ptr(), Dxt1Variant::OneBitAlpha) };
    let rgbcx_decoded = rgbcx_decode_to_block(&to_lsb_first(block.bytes));
    assert_eq!(ours, rgbcx_decoded, "Decoded blocks don't match");

    // Plain DXT1 only differs in the alpha of index 3.
    let opaque = unsafe { decode_dxt1_block(block.bytes.as_ptr(), Dxt1Variant::Opaque) };
    for (o, a) in opaque.pixels.iter().zip(ours.pixels.iter()) {
        assert_eq!(o.without_alpha(), a.without_alpha());
        assert_eq!(o.a, 255);
    }
});

/// Reverses the order of the four 2-bit indices within each row byte.
fn to_lsb_first(mut bytes: [u8; 8]) -> [u8; 8] {
    for row in &mut bytes[4..] {
        let b = *row;
        *row = (b >> 6) | ((b >> 2) & 0b0000_1100) | ((b << 2) & 0b0011_0000) | (b << 6);
    }
    bytes
}

fn rgbcx_decode_to_block(block: &[u8; 8]) -> Decoded4x4Block {
    let mut rgba_buffer = [0u8; 4 * 16];

    unsafe {
        rgbcx::unpack_bc1(
            block.as_ptr() as *const ::std::os::raw::c_void,
            rgba_buffer.as_mut_ptr() as *mut ::std::os::raw::c_void,
            true, // set_alpha
            rgbcx::bc1_approx_mode::cBC1Ideal,
        );
    }

    // RGBA byte order matches Color8888's layout.
    let pixels: [Color8888; 16] = unsafe { mem::transmute(rgba_buffer) };
    Decoded4x4Block { pixels }
}
