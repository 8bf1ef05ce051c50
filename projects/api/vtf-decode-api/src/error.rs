//! Error types for decode operations.

use crate::allocate::AllocateError;
use alloc::string::String;
use core::fmt;
use thiserror::Error;

/// Which of the two buffers passed to a decode call had the wrong length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferKind {
    /// The packed source bytes.
    Input,
    /// The RGBA8888 destination.
    Output,
}

impl fmt::Display for BufferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BufferKind::Input => "input",
            BufferKind::Output => "output",
        })
    }
}

/// Errors that can occur while decoding an image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The format has no loader, or the name/id does not identify a known format.
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Zero width or height, dimensions whose buffer sizes overflow `usize`, or
    /// block-compressed dimensions that are not multiples of 4.
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width in pixels
        width: usize,
        /// Height in pixels
        height: usize,
    },

    /// A buffer does not have exactly the length the format and dimensions require.
    #[error("The {kind} buffer has the wrong size: expected {expected} bytes, got {actual} bytes.")]
    BufferSizeMismatch {
        /// The buffer that was wrong
        kind: BufferKind,
        /// The required size in bytes
        expected: usize,
        /// The actual size in bytes
        actual: usize,
    },

    /// The output buffer could not be allocated.
    #[error("Memory allocation failed: {0}")]
    AllocationFailed(#[from] AllocateError),
}
