#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]

pub mod bluescreen;
pub mod channel_order;
pub mod dispatch;
pub mod format;
pub mod packed;
pub mod scalar;

mod pixels;

pub use channel_order::ChannelOrder;
pub use dispatch::{loader_for, LoaderFn, DISPATCH_TABLE};
pub use format::{FormatError, ImageFormat, FORMAT_COUNT};

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
