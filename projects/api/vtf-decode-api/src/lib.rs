#![doc = include_str!("../README.MD")]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod allocate;
pub mod canvas;
pub mod decode;
pub mod error;

pub use decode::{
    decode, decode_allocating, decode_by_id, decode_by_name, decoded_size, required_input_size,
};
pub use error::{BufferKind, DecodeError};
pub use vtf_decode_formats::ImageFormat;

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
