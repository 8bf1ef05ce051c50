#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod block;
pub mod image;

pub use block::{decode_dxt1_block, decode_dxt1_block_from_slice};
pub use image::{decode_dxt1_image, dxt1_data_size, load_dxt1, load_dxt1_onebitalpha};

use derive_enum_all_values::AllValues;
use vtf_decode_common::color_8888::{Color8888, OPAQUE_BLACK, TRANSPARENT_BLACK};

/// Size of a single DXT1 block in bytes.
pub const DXT1_BLOCK_SIZE: usize = 8;

/// Selects which of the two DXT1 flavours stored in VTF files is decoded.
///
/// Both share the block layout; they only disagree on the colour used for index 3
/// of a 3-colour block.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AllValues)]
pub enum Dxt1Variant {
    /// `DXT1`: index 3 of a 3-colour block is opaque black.
    #[default]
    Opaque = 0,
    /// `DXT1_ONEBITALPHA`: index 3 of a 3-colour block is fully transparent.
    OneBitAlpha = 1,
}

impl Dxt1Variant {
    /// Colour used for index 3 when a block is in 3-colour mode.
    #[inline(always)]
    pub const fn fourth_color(self) -> Color8888 {
        match self {
            Dxt1Variant::Opaque => OPAQUE_BLACK,
            Dxt1Variant::OneBitAlpha => TRANSPARENT_BLACK,
        }
    }
}

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
