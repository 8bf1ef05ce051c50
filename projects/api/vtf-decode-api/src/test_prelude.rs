//! Common test prelude for avoiding duplicate imports in test modules.

pub use rstest::rstest;

pub use crate::ImageFormat;

/// DXT1 block with white and black endpoints; every row uses indices 0, 1, 2, 3.
pub const OPAQUE_DXT1_BLOCK: [u8; 8] = [0xFF, 0xFF, 0x00, 0x00, 0x1B, 0x1B, 0x1B, 0x1B];

/// DXT1 block with black and white endpoints (3-colour mode); every row uses indices 0, 1, 2, 3.
pub const TRANSPARENT_DXT1_BLOCK: [u8; 8] = [0x00, 0x00, 0xFF, 0xFF, 0x1B, 0x1B, 0x1B, 0x1B];
