//! A single decoded RGBA8888 pixel.

/// Represents a single RGBA8888 pixel, in the same byte order as the decoded output buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Color8888 {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0-255)
    pub a: u8,
}

/// Opaque black; the fourth DXT1 colour in 3-colour mode.
pub const OPAQUE_BLACK: Color8888 = Color8888::new(0, 0, 0, 255);

/// Fully transparent black; the fourth DXT1_ONEBITALPHA colour in 3-colour mode,
/// and the result of a colour-keyed pixel.
pub const TRANSPARENT_BLACK: Color8888 = Color8888::new(0, 0, 0, 0);

impl Color8888 {
    /// Constructs a new [`Color8888`] from the specified red, green, blue, and alpha components.
    ///
    /// # Examples
    ///
    /// ```
    /// use vtf_decode_common::color_8888::Color8888;
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// assert_eq!(pixel.r, 255);
    /// assert_eq!(pixel.a, 255);
    /// ```
    #[inline(always)]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the pixel as `[r, g, b, a]`, the layout used in output buffers.
    #[inline(always)]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns the pixel with alpha forced to zero, for comparisons that ignore alpha.
    #[inline(always)]
    pub const fn without_alpha(self) -> Self {
        Self::new(self.r, self.g, self.b, 0)
    }

    /// Writes this pixel to `ptr` as 4 consecutive bytes.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes of 4 bytes.
    #[inline(always)]
    pub unsafe fn write_to_ptr(self, ptr: *mut u8) {
        // Color8888 is repr(C) with four u8 fields; alignment is 1.
        (ptr as *mut Color8888).write_unaligned(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_bytes_is_rgba_order() {
        assert_eq!(Color8888::new(1, 2, 3, 4).to_bytes(), [1, 2, 3, 4]);
    }

    #[test]
    fn write_to_ptr_matches_to_bytes() {
        let mut buf = [0u8; 6];
        let pixel = Color8888::new(10, 20, 30, 40);
        unsafe { pixel.write_to_ptr(buf.as_mut_ptr().add(1)) };
        assert_eq!(buf, [0, 10, 20, 30, 40, 0]);
    }

    #[test]
    fn without_alpha_clears_alpha_only() {
        assert_eq!(
            Color8888::new(9, 8, 7, 6).without_alpha(),
            Color8888::new(9, 8, 7, 0)
        );
    }
}
