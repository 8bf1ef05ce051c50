//! Byte-aligned formats with one byte per channel.
//!
//! A [`ChannelOrder`] records which input byte holds each output channel. Without an alpha
//! byte the stride is 3 and output alpha is 255; with one the stride is 4 and alpha is
//! copied verbatim.

use crate::pixels::map_pixels;
use vtf_decode_common::color_8888::Color8888;

/// Input byte offsets of each channel within a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelOrder {
    /// Offset of red.
    pub r: usize,
    /// Offset of green.
    pub g: usize,
    /// Offset of blue.
    pub b: usize,
    /// Offset of alpha, if the format stores one.
    pub a: Option<usize>,
}

impl ChannelOrder {
    const fn rgb(r: usize, g: usize, b: usize) -> Self {
        Self { r, g, b, a: None }
    }

    const fn rgba(r: usize, g: usize, b: usize, a: usize) -> Self {
        Self { r, g, b, a: Some(a) }
    }

    /// Input bytes per pixel.
    #[inline]
    pub const fn stride(&self) -> usize {
        match self.a {
            Some(_) => 4,
            None => 3,
        }
    }
}

/// `R G B A`. Also used for `UVLX8888` and `UVWQ8888`.
pub const RGBA: ChannelOrder = ChannelOrder::rgba(0, 1, 2, 3);
/// `B G R A`
pub const BGRA: ChannelOrder = ChannelOrder::rgba(2, 1, 0, 3);
/// `A B G R`
pub const ABGR: ChannelOrder = ChannelOrder::rgba(3, 2, 1, 0);
/// `ARGB8888` as it is really laid out on disk: `G B A R`.
pub const ARGB: ChannelOrder = ChannelOrder::rgba(3, 0, 1, 2);
/// `R G B`
pub const RGB: ChannelOrder = ChannelOrder::rgb(0, 1, 2);
/// `B G R`
pub const BGR: ChannelOrder = ChannelOrder::rgb(2, 1, 0);

/// Decodes `pixel_count` pixels laid out in `order`.
///
/// # Safety
///
/// - `input_ptr` must be valid for reads of `pixel_count * order.stride()` bytes.
/// - `output_ptr` must be valid for writes of `pixel_count * 4` bytes.
#[inline(always)]
pub unsafe fn decode_with_order(
    order: ChannelOrder,
    input_ptr: *const u8,
    output_ptr: *mut u8,
    pixel_count: usize,
) {
    let ChannelOrder { r, g, b, a } = order;
    match a {
        Some(a) => map_pixels::<4>(input_ptr, output_ptr, pixel_count, |px| {
            Color8888::new(px[r], px[g], px[b], px[a])
        }),
        None => map_pixels::<3>(input_ptr, output_ptr, pixel_count, |px| {
            Color8888::new(px[r], px[g], px[b], 255)
        }),
    }
}

macro_rules! channel_order_loader {
    ($(#[$doc:meta])* $name:ident, $order:expr) => {
        $(#[$doc])*
        ///
        /// # Safety
        ///
        /// `input_ptr` must be valid for reads of the format's frame size, and
        /// `output_ptr` for writes of `width * height * 4` bytes.
        pub unsafe fn $name(input_ptr: *const u8, output_ptr: *mut u8, width: usize, height: usize) {
            decode_with_order($order, input_ptr, output_ptr, width * height)
        }
    };
}

channel_order_loader!(
    /// Loads `RGBA8888`.
    load_rgba8888,
    RGBA
);
channel_order_loader!(
    /// Loads `BGRA8888`.
    load_bgra8888,
    BGRA
);
channel_order_loader!(
    /// Loads `ABGR8888`.
    load_abgr8888,
    ABGR
);
channel_order_loader!(
    /// Loads `ARGB8888`, using its real `G B A R` byte order.
    load_argb8888,
    ARGB
);
channel_order_loader!(
    /// Loads `RGB888`.
    load_rgb888,
    RGB
);
channel_order_loader!(
    /// Loads `BGR888`.
    load_bgr888,
    BGR
);
channel_order_loader!(
    /// Loads `UVLX8888`, laid out like `RGBA8888`.
    load_uvlx8888,
    RGBA
);
channel_order_loader!(
    /// Loads `UVWQ8888`, laid out like `RGBA8888`.
    load_uvwq8888,
    RGBA
);

/// Loads `BGRX8888`: 4 bytes per pixel, the fourth byte is skipped and alpha is 255.
///
/// # Safety
///
/// `input_ptr` must be valid for reads of `width * height * 4` bytes, and
/// `output_ptr` for writes of `width * height * 4` bytes.
pub unsafe fn load_bgrx8888(input_ptr: *const u8, output_ptr: *mut u8, width: usize, height: usize) {
    map_pixels::<4>(input_ptr, output_ptr, width * height, |px| {
        Color8888::new(px[2], px[1], px[0], 255)
    })
}
