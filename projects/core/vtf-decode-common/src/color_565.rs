//! # 565 Bit Expansion
//!
//! Primitives for unpacking 16-bit `5:6:5` colours into 8-bit channels.
//!
//! Every packed-bit loader goes through the same two steps:
//!
//! 1. [`decomp565`] splits the two little-endian bytes into three channels, each left
//!    in the *high* bits of a byte (5 bit channels occupy bits 3-7, the 6 bit channel
//!    occupies bits 2-7).
//! 2. [`upsample`] fills the vacated low bits by replicating the top bits of the channel.
//!
//! Bit replication (as opposed to rescaling with `x * 255 / 31`) maps the maximum input
//! onto `255` and matches the reference decoder bit for bit.
//!
//! ```
//! use vtf_decode_common::color_565::{decomp565, upsample};
//!
//! let (r, g, b) = decomp565(0x1F, 0x00);
//! assert_eq!((upsample(5, r), upsample(6, g), upsample(5, b)), (255, 0, 0));
//! ```

use crate::color_8888::Color8888;

/// Splits a little-endian 565-packed colour into its three channels.
///
/// `a` is the first (low) byte, `b` the second (high) byte. The channels are returned in
/// storage order, lowest bits first:
///
/// - first: bits 0-4 of `a`, shifted into bits 3-7.
/// - second: the 6 bit middle channel (bits 5-7 of `a` and bits 0-2 of `b`), in bits 2-7.
/// - third: bits 3-7 of `b`, left in place.
///
/// Which of these is red and which is blue depends on the format.
/// See [`upsample`] for expanding the results to full 8-bit values.
#[inline(always)]
pub const fn decomp565(a: u8, b: u8) -> (u8, u8, u8) {
    (
        (a & 0b0001_1111) << 3,
        ((b & 0b0000_0111) << 5) | ((a & 0b1110_0000) >> 3),
        b & 0b1111_1000,
    )
}

/// Stretches `bits` worth of high-aligned data to fill the whole byte.
///
/// This is done by duplicating the MSBs into the vacated low bits:
/// `value | (value >> bits)`.
///
/// # Examples
///
/// ```
/// use vtf_decode_common::color_565::upsample;
///
/// assert_eq!(upsample(5, 0b1111_1000), 255);
/// assert_eq!(upsample(6, 0b1111_1100), 255);
/// assert_eq!(upsample(5, 0b1000_0000), 0b1000_0100);
/// ```
#[inline(always)]
pub const fn upsample(bits: u32, value: u8) -> u8 {
    value | (value >> bits)
}

/// Represents a 16-bit RGB565 colour (5 bits red, 6 bits green, 5 bits blue)
/// as stored in DXT1 colour endpoints.
///
/// Red lives in the top 5 bits of the 16-bit value, blue in the bottom 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color565 {
    /// The underlying 16-bit RGB565 value
    value: u16,
}

impl Color565 {
    /// Creates a new [`Color565`] from the raw 16-bit value
    #[inline]
    pub fn from_raw(value: u16) -> Self {
        Self { value }
    }

    /// Creates a new [`Color565`] from two bytes in little-endian order, as laid out on disk.
    #[inline]
    pub fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self {
            value: u16::from_le_bytes(bytes),
        }
    }

    /// Returns the raw 16-bit value
    #[inline]
    pub fn raw_value(&self) -> u16 {
        self.value
    }

    #[inline(always)]
    fn channels(&self) -> (u8, u8, u8) {
        let [lo, hi] = self.value.to_le_bytes();
        decomp565(lo, hi)
    }

    /// Extracts the expanded 8-bit red component
    #[inline]
    pub fn red(&self) -> u8 {
        upsample(5, self.channels().2)
    }

    /// Extracts the expanded 8-bit green component
    #[inline]
    pub fn green(&self) -> u8 {
        upsample(6, self.channels().1)
    }

    /// Extracts the expanded 8-bit blue component
    #[inline]
    pub fn blue(&self) -> u8 {
        upsample(5, self.channels().0)
    }

    /// Compares the raw packed values of two [`Color565`]s.
    ///
    /// DXT1 picks its decoding mode from this comparison, so it must be done on the
    /// packed 16-bit values rather than on any decoded form.
    #[inline]
    pub fn greater_than(&self, other: &Self) -> bool {
        self.value > other.value
    }

    /// Converts this [`Color565`] to a [`Color8888`] with full opacity (alpha=255)
    ///
    /// # Examples
    ///
    /// ```
    /// use vtf_decode_common::color_565::Color565;
    ///
    /// let rgba8888 = Color565::from_raw(0xF800).to_color_8888();
    /// assert_eq!(rgba8888.r, 255);
    /// assert_eq!(rgba8888.g, 0);
    /// assert_eq!(rgba8888.b, 0);
    /// assert_eq!(rgba8888.a, 255);
    /// ```
    pub fn to_color_8888(&self) -> Color8888 {
        self.to_color_8888_with_alpha(255)
    }

    /// Converts this RGB565 color to a RGBA8888 color with the specified alpha value
    pub fn to_color_8888_with_alpha(&self, alpha: u8) -> Color8888 {
        Color8888::new(self.red(), self.green(), self.blue(), alpha)
    }
}
