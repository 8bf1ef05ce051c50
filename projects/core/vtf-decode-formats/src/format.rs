//! The set of pixel formats a VTF file may declare.

use core::fmt;
use core::str::FromStr;
use derive_enum_all_values::AllValues;
use thiserror::Error;

/// Number of entries in [`ImageFormat`]; also the size of the dispatch table.
pub const FORMAT_COUNT: usize = 27;

/// Pixel formats of VTF image data.
///
/// The discriminants are the format ids stored in VTF headers.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum ImageFormat {
    RGBA8888 = 0,
    ABGR8888 = 1,
    RGB888 = 2,
    BGR888 = 3,
    RGB565 = 4,
    I8 = 5,
    IA88 = 6,
    /// Indexed palette. Valve's own tools never implemented it; always unsupported.
    P8 = 7,
    A8 = 8,
    /// `RGB888` where pure blue is transparent.
    RGB888Bluescreen = 9,
    /// `BGR888` where pure blue is transparent.
    BGR888Bluescreen = 10,
    /// Stored in the byte order `G B A R`, despite the name.
    ARGB8888 = 11,
    BGRA8888 = 12,
    DXT1 = 13,
    /// Unsupported.
    DXT3 = 14,
    /// Unsupported.
    DXT5 = 15,
    BGRX8888 = 16,
    BGR565 = 17,
    BGRX5551 = 18,
    BGRA4444 = 19,
    /// DXT1 where index 3 of a 3-colour block is transparent.
    DXT1OneBitAlpha = 20,
    BGRA5551 = 21,
    /// Two channels of coordinate data, exposed as red and green.
    UV88 = 22,
    UVWQ8888 = 23,
    /// Unsupported.
    RGBA16161616F = 24,
    /// Unsupported.
    RGBA16161616 = 25,
    UVLX8888 = 26,
}

/// Errors raised when resolving an [`ImageFormat`] from outside data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The name does not match any known format.
    #[error("Unknown image format name")]
    UnknownName,

    /// The id read from a header does not match any known format.
    #[error("Unknown image format id: {0}")]
    UnknownId(u32),
}

impl ImageFormat {
    /// Looks a format up by its VTF header id.
    pub const fn from_id(id: u32) -> Option<Self> {
        Some(match id {
            0 => Self::RGBA8888,
            1 => Self::ABGR8888,
            2 => Self::RGB888,
            3 => Self::BGR888,
            4 => Self::RGB565,
            5 => Self::I8,
            6 => Self::IA88,
            7 => Self::P8,
            8 => Self::A8,
            9 => Self::RGB888Bluescreen,
            10 => Self::BGR888Bluescreen,
            11 => Self::ARGB8888,
            12 => Self::BGRA8888,
            13 => Self::DXT1,
            14 => Self::DXT3,
            15 => Self::DXT5,
            16 => Self::BGRX8888,
            17 => Self::BGR565,
            18 => Self::BGRX5551,
            19 => Self::BGRA4444,
            20 => Self::DXT1OneBitAlpha,
            21 => Self::BGRA5551,
            22 => Self::UV88,
            23 => Self::UVWQ8888,
            24 => Self::RGBA16161616F,
            25 => Self::RGBA16161616,
            26 => Self::UVLX8888,
            _ => return None,
        })
    }

    /// The VTF header id of this format.
    #[inline]
    pub const fn id(self) -> u32 {
        self as u32
    }

    /// The canonical name of the format, e.g. `"DXT1_ONEBITALPHA"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::RGBA8888 => "RGBA8888",
            Self::ABGR8888 => "ABGR8888",
            Self::RGB888 => "RGB888",
            Self::BGR888 => "BGR888",
            Self::RGB565 => "RGB565",
            Self::I8 => "I8",
            Self::IA88 => "IA88",
            Self::P8 => "P8",
            Self::A8 => "A8",
            Self::RGB888Bluescreen => "RGB888_BLUESCREEN",
            Self::BGR888Bluescreen => "BGR888_BLUESCREEN",
            Self::ARGB8888 => "ARGB8888",
            Self::BGRA8888 => "BGRA8888",
            Self::DXT1 => "DXT1",
            Self::DXT3 => "DXT3",
            Self::DXT5 => "DXT5",
            Self::BGRX8888 => "BGRX8888",
            Self::BGR565 => "BGR565",
            Self::BGRX5551 => "BGRX5551",
            Self::BGRA4444 => "BGRA4444",
            Self::DXT1OneBitAlpha => "DXT1_ONEBITALPHA",
            Self::BGRA5551 => "BGRA5551",
            Self::UV88 => "UV88",
            Self::UVWQ8888 => "UVWQ8888",
            Self::RGBA16161616F => "RGBA16161616F",
            Self::RGBA16161616 => "RGBA16161616",
            Self::UVLX8888 => "UVLX8888",
        }
    }

    /// Bytes per pixel for formats that store whole pixels, [`None`] for block-compressed ones.
    pub const fn bytes_per_pixel(self) -> Option<usize> {
        match self {
            Self::I8 | Self::P8 | Self::A8 => Some(1),
            Self::RGB565
            | Self::IA88
            | Self::BGR565
            | Self::BGRX5551
            | Self::BGRA4444
            | Self::BGRA5551
            | Self::UV88 => Some(2),
            Self::RGB888 | Self::BGR888 | Self::RGB888Bluescreen | Self::BGR888Bluescreen => {
                Some(3)
            }
            Self::RGBA8888
            | Self::ABGR8888
            | Self::ARGB8888
            | Self::BGRA8888
            | Self::BGRX8888
            | Self::UVWQ8888
            | Self::UVLX8888 => Some(4),
            Self::RGBA16161616F | Self::RGBA16161616 => Some(8),
            Self::DXT1 | Self::DXT1OneBitAlpha | Self::DXT3 | Self::DXT5 => None,
        }
    }

    /// Bytes per 4x4 block for block-compressed formats, [`None`] otherwise.
    pub const fn block_size(self) -> Option<usize> {
        match self {
            Self::DXT1 | Self::DXT1OneBitAlpha => Some(8),
            Self::DXT3 | Self::DXT5 => Some(16),
            _ => None,
        }
    }

    /// Whether the format is stored as 4x4 compressed blocks.
    #[inline]
    pub const fn is_compressed(self) -> bool {
        self.block_size().is_some()
    }

    /// Whether decoded pixels may have an alpha other than 255.
    ///
    /// Colour-keyed formats count, since pure blue decodes to transparent. Plain `DXT1`
    /// does not: its fourth colour is opaque black.
    pub const fn has_alpha(self) -> bool {
        matches!(
            self,
            Self::RGBA8888
                | Self::ABGR8888
                | Self::ARGB8888
                | Self::BGRA8888
                | Self::UVWQ8888
                | Self::UVLX8888
                | Self::IA88
                | Self::A8
                | Self::BGRA4444
                | Self::BGRA5551
                | Self::RGB888Bluescreen
                | Self::BGR888Bluescreen
                | Self::DXT1OneBitAlpha
                | Self::DXT3
                | Self::DXT5
                | Self::RGBA16161616F
                | Self::RGBA16161616
        )
    }

    /// Whether the channels hold vector/coordinate data (e.g. normal or du/dv maps)
    /// rather than colour.
    ///
    /// These decode exactly like their colour counterparts; the flag is informational.
    #[inline]
    pub const fn holds_vector_data(self) -> bool {
        matches!(self, Self::UV88 | Self::UVWQ8888 | Self::UVLX8888)
    }

    /// Number of bytes one `width` x `height` image (one mip level of one frame) occupies,
    /// or [`None`] if the computation overflows.
    ///
    /// ```
    /// use vtf_decode_formats::ImageFormat;
    ///
    /// assert_eq!(ImageFormat::RGB888.frame_size(4, 2), Some(24));
    /// assert_eq!(ImageFormat::DXT1.frame_size(8, 8), Some(32));
    /// assert_eq!(ImageFormat::DXT5.frame_size(8, 8), Some(64));
    /// ```
    pub const fn frame_size(self, width: usize, height: usize) -> Option<usize> {
        match (self.bytes_per_pixel(), self.block_size()) {
            (Some(bpp), _) => match width.checked_mul(height) {
                Some(pixels) => pixels.checked_mul(bpp),
                None => None,
            },
            (None, Some(block_size)) => {
                match width.div_ceil(4).checked_mul(height.div_ceil(4)) {
                    Some(blocks) => blocks.checked_mul(block_size),
                    None => None,
                }
            }
            (None, None) => None,
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ImageFormat {
    type Err = FormatError;

    /// Parses the canonical, upper-case format name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all_values()
            .iter()
            .copied()
            .find(|format| format.name() == s)
            .ok_or(FormatError::UnknownName)
    }
}

impl TryFrom<u32> for ImageFormat {
    type Error = FormatError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Self::from_id(id).ok_or(FormatError::UnknownId(id))
    }
}
