//! Creating blank RGBA8888 canvases and exporting decoded images.
//!
//! Images are exported as binary PPM (`P6`): an ASCII header followed by the red, green
//! and blue bytes of every pixel. PPM has no alpha channel, so alpha is dropped.

use crate::decode::decoded_size;
use crate::error::{BufferKind, DecodeError};
use alloc::{format, vec, vec::Vec};

/// Allocates a zeroed `width` x `height` RGBA8888 buffer, ready to be decoded into.
///
/// # Errors
///
/// [`DecodeError::InvalidDimensions`] if `width * height * 4` overflows.
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use vtf_decode_api::canvas::blank;
///
/// assert_eq!(blank(2, 1)?, [0u8; 8]);
/// # Ok(())
/// # }
/// ```
pub fn blank(width: usize, height: usize) -> Result<Vec<u8>, DecodeError> {
    let len =
        decoded_size(width, height).ok_or(DecodeError::InvalidDimensions { width, height })?;
    Ok(vec![0; len])
}

/// The PPM header for a `width` x `height` image.
fn ppm_header(width: usize, height: usize) -> alloc::string::String {
    format!("P6 {width} {height} 255\n")
}

fn validate_canvas(pixels: &[u8], width: usize, height: usize) -> Result<(), DecodeError> {
    let expected =
        decoded_size(width, height).ok_or(DecodeError::InvalidDimensions { width, height })?;
    if pixels.len() != expected {
        return Err(DecodeError::BufferSizeMismatch {
            kind: BufferKind::Input,
            expected,
            actual: pixels.len(),
        });
    }
    Ok(())
}

/// Converts a `width` x `height` RGBA8888 image to a binary PPM file.
///
/// # Errors
///
/// - [`DecodeError::InvalidDimensions`] if `width * height * 4` overflows
/// - [`DecodeError::BufferSizeMismatch`] if `pixels` is not exactly `width * height * 4` bytes
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use vtf_decode_api::canvas::to_ppm;
///
/// let ppm = to_ppm(&[1, 2, 3, 4, 5, 6, 7, 8], 2, 1)?;
/// assert_eq!(ppm, b"P6 2 1 255\n\x01\x02\x03\x05\x06\x07");
/// # Ok(())
/// # }
/// ```
pub fn to_ppm(pixels: &[u8], width: usize, height: usize) -> Result<Vec<u8>, DecodeError> {
    validate_canvas(pixels, width, height)?;

    let header = ppm_header(width, height);
    let mut ppm = Vec::with_capacity(header.len() + width * height * 3);
    ppm.extend_from_slice(header.as_bytes());
    for pixel in pixels.chunks_exact(4) {
        ppm.extend_from_slice(&pixel[..3]);
    }
    Ok(ppm)
}

/// Streams the same bytes as [`to_ppm`] into `writer`, one row at a time.
///
/// # Errors
///
/// Returns [`std::io::ErrorKind::InvalidInput`] wrapping the [`DecodeError`] if
/// `pixels` does not match the dimensions, or any error raised by `writer`.
#[cfg(feature = "std")]
pub fn write_ppm<W: std::io::Write>(
    mut writer: W,
    pixels: &[u8],
    width: usize,
    height: usize,
) -> std::io::Result<()> {
    validate_canvas(pixels, width, height)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    writer.write_all(ppm_header(width, height).as_bytes())?;
    if width == 0 {
        return writer.flush();
    }

    let mut row = Vec::with_capacity(width * 3);
    for row_pixels in pixels.chunks_exact(width * 4) {
        row.clear();
        for pixel in row_pixels.chunks_exact(4) {
            row.extend_from_slice(&pixel[..3]);
        }
        writer.write_all(&row)?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(2, 1, 8)]
    #[case(4, 4, 64)]
    #[case(1, 3, 12)]
    fn blank_is_zeroed(#[case] width: usize, #[case] height: usize, #[case] len: usize) {
        let canvas = blank(width, height).unwrap();
        assert_eq!(canvas.len(), len);
        assert!(canvas.iter().all(|&b| b == 0));
    }

    #[rstest]
    #[case(usize::MAX / 2, 3)]
    #[case(usize::MAX, 1)]
    #[case(usize::MAX / 4 + 1, 1)]
    fn blank_rejects_overflowing_dimensions(#[case] width: usize, #[case] height: usize) {
        assert_eq!(
            blank(width, height),
            Err(DecodeError::InvalidDimensions { width, height })
        );
    }

    #[test]
    fn ppm_drops_alpha() {
        let pixels = [10, 20, 30, 0, 40, 50, 60, 255, 1, 2, 3, 4, 5, 6, 7, 8];
        let ppm = to_ppm(&pixels, 2, 2).unwrap();

        let header = b"P6 2 2 255\n";
        assert_eq!(&ppm[..header.len()], header);
        assert_eq!(
            &ppm[header.len()..],
            [10, 20, 30, 40, 50, 60, 1, 2, 3, 5, 6, 7]
        );
    }

    #[test]
    fn ppm_length_is_header_plus_rgb() {
        let ppm = to_ppm(&blank(16, 8).unwrap(), 16, 8).unwrap();
        assert_eq!(ppm.len(), "P6 16 8 255\n".len() + 16 * 8 * 3);
    }

    #[rstest]
    #[case(7)]
    #[case(9)]
    #[case(0)]
    fn ppm_rejects_wrong_length(#[case] len: usize) {
        assert_eq!(
            to_ppm(&vec![0; len], 2, 1),
            Err(DecodeError::BufferSizeMismatch {
                kind: BufferKind::Input,
                expected: 8,
                actual: len,
            })
        );
    }

    #[test]
    fn ppm_rejects_overflowing_dimensions() {
        assert_eq!(
            to_ppm(&[], usize::MAX, 2),
            Err(DecodeError::InvalidDimensions {
                width: usize::MAX,
                height: 2
            })
        );
    }

    #[test]
    fn decoded_image_exports() {
        let mut canvas = blank(1, 1).unwrap();
        crate::decode(ImageFormat::RGB888Bluescreen, &mut canvas, &[0, 0, 255], 1, 1).unwrap();
        assert_eq!(to_ppm(&canvas, 1, 1).unwrap(), b"P6 1 1 255\n\0\0\0");
    }

    #[test]
    fn write_ppm_matches_to_ppm() {
        let pixels: Vec<u8> = (0..4 * 3 * 4).map(|i| i as u8).collect();
        let mut written = Vec::new();
        write_ppm(&mut written, &pixels, 4, 3).unwrap();
        assert_eq!(written, to_ppm(&pixels, 4, 3).unwrap());
    }

    #[test]
    fn write_ppm_rejects_wrong_length() {
        let mut written = Vec::new();
        let err = write_ppm(&mut written, &[0; 5], 1, 1).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
        assert!(written.is_empty());
    }
}
