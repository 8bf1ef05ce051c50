//! Common test imports and utilities for DXT1 tests
//!
//! This module provides a common set of imports and helpers used across the test modules
//! in this crate.

// Re-export the test framework
pub use rstest::rstest;

/// Expected pixels of a row holding indices `0, 1, 2, 3` in a white/black 4-colour block.
pub const OPAQUE_MODE_ROW: [[u8; 4]; 4] = [
    [255, 255, 255, 255],
    [0, 0, 0, 255],
    [170, 170, 170, 255],
    [85, 85, 85, 255],
];

/// Flattens 4 pixels into the 16 bytes of one block row.
pub fn row_of(pixels: [[u8; 4]; 4]) -> [u8; 16] {
    let mut out = [0u8; 16];
    for (chunk, pixel) in out.chunks_exact_mut(4).zip(pixels) {
        chunk.copy_from_slice(&pixel);
    }
    out
}

/// Builds `blocks_wide * blocks_high` DXT1 blocks where each block's index bytes are
/// derived from its position, so misplaced blocks are detectable.
pub fn positional_blocks(blocks_wide: usize, blocks_high: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(blocks_wide * blocks_high * 8);
    for by in 0..blocks_high {
        for bx in 0..blocks_wide {
            let tag = (by * blocks_wide + bx) as u8;
            data.extend_from_slice(&[0xFF, 0xFF, 0x00, 0x00]);
            data.extend_from_slice(&[tag, tag.rotate_left(2), tag.rotate_left(4), tag.rotate_left(6)]);
        }
    }
    data
}
