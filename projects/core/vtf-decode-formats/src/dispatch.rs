//! Maps each [`ImageFormat`] to the loader that decodes it.
//!
//! The table is built at compile time and never changes, so it can be read from any
//! thread without synchronisation.

use crate::bluescreen::*;
use crate::channel_order::*;
use crate::format::{ImageFormat, FORMAT_COUNT};
use crate::packed::*;
use crate::scalar::*;
use vtf_decode_dxt1::{load_dxt1, load_dxt1_onebitalpha};

/// Signature shared by every loader: `(input_ptr, output_ptr, width, height)`.
///
/// # Safety
///
/// A loader may only be called once the dimensions and both buffer lengths have been
/// validated for its format; see [`ImageFormat::frame_size`].
pub type LoaderFn = unsafe fn(*const u8, *mut u8, usize, usize);

const fn loader_entry(format: ImageFormat) -> Option<LoaderFn> {
    use ImageFormat::*;
    let loader: LoaderFn = match format {
        RGBA8888 => load_rgba8888,
        ABGR8888 => load_abgr8888,
        RGB888 => load_rgb888,
        BGR888 => load_bgr888,
        RGB565 => load_rgb565,
        I8 => load_i8,
        IA88 => load_ia88,
        A8 => load_a8,
        RGB888Bluescreen => load_rgb888_bluescreen,
        BGR888Bluescreen => load_bgr888_bluescreen,
        ARGB8888 => load_argb8888,
        BGRA8888 => load_bgra8888,
        DXT1 => load_dxt1,
        BGRX8888 => load_bgrx8888,
        BGR565 => load_bgr565,
        BGRX5551 => load_bgrx5551,
        BGRA4444 => load_bgra4444,
        DXT1OneBitAlpha => load_dxt1_onebitalpha,
        BGRA5551 => load_bgra5551,
        UV88 => load_uv88,
        UVWQ8888 => load_uvwq8888,
        UVLX8888 => load_uvlx8888,
        P8 | DXT3 | DXT5 | RGBA16161616F | RGBA16161616 => return None,
    };
    Some(loader)
}

const fn build_dispatch_table() -> [Option<LoaderFn>; FORMAT_COUNT] {
    let mut table: [Option<LoaderFn>; FORMAT_COUNT] = [None; FORMAT_COUNT];
    let mut id = 0;
    while id < FORMAT_COUNT {
        if let Some(format) = ImageFormat::from_id(id as u32) {
            table[id] = loader_entry(format);
        }
        id += 1;
    }
    table
}

/// Loaders indexed by format id. [`None`] marks formats that cannot be decoded.
pub static DISPATCH_TABLE: [Option<LoaderFn>; FORMAT_COUNT] = build_dispatch_table();

/// Returns the loader for `format`, or [`None`] if the format is unsupported.
#[inline]
pub fn loader_for(format: ImageFormat) -> Option<LoaderFn> {
    DISPATCH_TABLE[format as usize]
}

impl ImageFormat {
    /// Whether a loader exists for this format.
    ///
    /// ```
    /// use vtf_decode_formats::ImageFormat;
    ///
    /// assert!(ImageFormat::DXT1.is_supported());
    /// assert!(!ImageFormat::P8.is_supported());
    /// ```
    #[inline]
    pub fn is_supported(self) -> bool {
        loader_for(self).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(ImageFormat::P8)]
    #[case(ImageFormat::DXT3)]
    #[case(ImageFormat::DXT5)]
    #[case(ImageFormat::RGBA16161616F)]
    #[case(ImageFormat::RGBA16161616)]
    fn unsupported_formats_have_no_loader(#[case] format: ImageFormat) {
        assert!(loader_for(format).is_none());
        assert!(!format.is_supported());
    }

    #[test]
    fn supported_format_count() {
        let supported = ImageFormat::all_values()
            .iter()
            .filter(|f| f.is_supported())
            .count();
        assert_eq!(supported, FORMAT_COUNT - 5);
    }

    #[test]
    fn table_is_indexed_by_id() {
        for &format in ImageFormat::all_values() {
            assert_eq!(DISPATCH_TABLE[format.id() as usize].is_some(), format.is_supported());
        }
    }

    #[rstest]
    #[case(ImageFormat::RGB565, &[0x1F, 0x00], [255, 0, 0, 255])]
    #[case(ImageFormat::I8, &[128], [128, 128, 128, 255])]
    #[case(ImageFormat::RGB888Bluescreen, &[0, 0, 255], [0, 0, 0, 0])]
    #[case(ImageFormat::ARGB8888, &[2, 3, 4, 1], [1, 2, 3, 4])]
    #[case(ImageFormat::UVWQ8888, &[1, 2, 3, 4], [1, 2, 3, 4])]
    fn dispatches_to_matching_loader(
        #[case] format: ImageFormat,
        #[case] input: &[u8],
        #[case] expected: [u8; 4],
    ) {
        let loader = loader_for(format).unwrap();
        assert_eq!(run_loader(loader, input, 1, 1), expected);
    }

    #[rstest]
    #[case(ImageFormat::DXT1, [0, 0, 0, 255])]
    #[case(ImageFormat::DXT1OneBitAlpha, [0, 0, 0, 0])]
    fn dxt1_variants_dispatch_separately(#[case] format: ImageFormat, #[case] index3: [u8; 4]) {
        // 3-colour block, every pixel index 3.
        let block = [0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];
        let output = run_loader(loader_for(format).unwrap(), &block, 4, 4);
        for pixel in output.chunks_exact(4) {
            assert_eq!(pixel, index3);
        }
    }

    #[test]
    fn every_loader_fills_the_whole_output() {
        let (width, height) = (8, 4);
        for &format in ImageFormat::all_values() {
            let Some(loader) = loader_for(format) else {
                continue;
            };
            let input: Vec<u8> = (0..format.frame_size(width, height).unwrap())
                .map(|i| (i * 37) as u8)
                .collect();
            let first = run_loader(loader, &input, width, height);
            let second = run_loader(loader, &input, width, height);
            assert_eq!(first.len(), width * height * 4);
            assert_eq!(first, second, "{format} is not deterministic");
        }
    }
}
