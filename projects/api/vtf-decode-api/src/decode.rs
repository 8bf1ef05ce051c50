//! Validated decode entry points.
//!
//! Every function here checks, in order: that the format has a loader, that the
//! dimensions are usable, the output length, then the input length. Nothing is written
//! unless all checks pass.

use crate::allocate::allocate_align_64;
use crate::error::{BufferKind, DecodeError};
use alloc::string::{String, ToString};
use likely_stable::unlikely;
use safe_allocator_api::RawAlloc;
use vtf_decode_formats::{loader_for, ImageFormat, LoaderFn};

/// Size in bytes of a decoded `width` x `height` RGBA8888 image, or [`None`] on overflow.
#[inline]
pub const fn decoded_size(width: usize, height: usize) -> Option<usize> {
    match width.checked_mul(height) {
        Some(pixels) => pixels.checked_mul(4),
        None => None,
    }
}

/// Number of input bytes `format` needs for a `width` x `height` image.
///
/// # Errors
///
/// - [`DecodeError::UnsupportedFormat`] if `format` cannot be decoded
/// - [`DecodeError::InvalidDimensions`] if the dimensions cannot be decoded in `format`
pub fn required_input_size(
    format: ImageFormat,
    width: usize,
    height: usize,
) -> Result<usize, DecodeError> {
    resolve_loader(format)?;
    Ok(validate_dimensions(format, width, height)?.input_len)
}

/// Buffer sizes of a validated decode call.
struct FrameLayout {
    input_len: usize,
    output_len: usize,
}

fn resolve_loader(format: ImageFormat) -> Result<LoaderFn, DecodeError> {
    loader_for(format).ok_or_else(|| DecodeError::UnsupportedFormat(format.name().to_string()))
}

fn validate_dimensions(
    format: ImageFormat,
    width: usize,
    height: usize,
) -> Result<FrameLayout, DecodeError> {
    let invalid = DecodeError::InvalidDimensions { width, height };
    if unlikely(width == 0 || height == 0) {
        return Err(invalid);
    }

    // Partial blocks never occur in VTF files.
    if unlikely(format.is_compressed() && (width % 4 != 0 || height % 4 != 0)) {
        return Err(invalid);
    }

    match (decoded_size(width, height), format.frame_size(width, height)) {
        (Some(output_len), Some(input_len)) => Ok(FrameLayout {
            input_len,
            output_len,
        }),
        _ => Err(invalid),
    }
}

#[inline]
fn check_len(kind: BufferKind, expected: usize, actual: usize) -> Result<(), DecodeError> {
    if unlikely(expected != actual) {
        return Err(DecodeError::BufferSizeMismatch {
            kind,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Decodes one image of `format` from `input` into `output` as RGBA8888.
///
/// # Parameters
///
/// - `format`: Pixel format of `input`
/// - `output`: Destination, exactly `width * height * 4` bytes
/// - `input`: Packed source pixels, exactly [`ImageFormat::frame_size`] bytes
/// - `width`, `height`: Image dimensions in pixels
///
/// # Errors
///
/// - [`DecodeError::UnsupportedFormat`] if `format` has no loader
/// - [`DecodeError::InvalidDimensions`] if either dimension is zero, a size overflows,
///   or a DXT1 dimension is not a multiple of 4
/// - [`DecodeError::BufferSizeMismatch`] if `output` or `input` has the wrong length
///
/// On error, `output` is left untouched.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use vtf_decode_api::{decode, ImageFormat};
///
/// let mut output = [0u8; 4];
/// decode(ImageFormat::I8, &mut output, &[128], 1, 1)?;
/// assert_eq!(output, [128, 128, 128, 255]);
/// # Ok(())
/// # }
/// ```
pub fn decode(
    format: ImageFormat,
    output: &mut [u8],
    input: &[u8],
    width: usize,
    height: usize,
) -> Result<(), DecodeError> {
    let loader = resolve_loader(format)?;
    let layout = validate_dimensions(format, width, height)?;
    check_len(BufferKind::Output, layout.output_len, output.len())?;
    check_len(BufferKind::Input, layout.input_len, input.len())?;

    // Safety: both lengths match what the loader reads and writes for these dimensions.
    unsafe { loader(input.as_ptr(), output.as_mut_ptr(), width, height) };
    Ok(())
}

/// Same as [`decode`], with the format given by its canonical name (e.g. `"DXT1_ONEBITALPHA"`).
///
/// # Errors
///
/// [`DecodeError::UnsupportedFormat`] carrying `name` if it is not a known format;
/// otherwise as [`decode`].
pub fn decode_by_name(
    name: &str,
    output: &mut [u8],
    input: &[u8],
    width: usize,
    height: usize,
) -> Result<(), DecodeError> {
    let format = name
        .parse::<ImageFormat>()
        .map_err(|_| DecodeError::UnsupportedFormat(String::from(name)))?;
    decode(format, output, input, width, height)
}

/// Same as [`decode`], with the format given by its VTF header id.
///
/// # Errors
///
/// [`DecodeError::UnsupportedFormat`] if `id` is not a known format; otherwise as [`decode`].
pub fn decode_by_id(
    id: u32,
    output: &mut [u8],
    input: &[u8],
    width: usize,
    height: usize,
) -> Result<(), DecodeError> {
    let format = ImageFormat::try_from(id)
        .map_err(|e| DecodeError::UnsupportedFormat(e.to_string()))?;
    decode(format, output, input, width, height)
}

/// Decodes one image into a newly allocated buffer.
///
/// The buffer is 64-byte aligned and is not zeroed before decoding; every byte is
/// written by the loader.
///
/// # Errors
///
/// - [`DecodeError::AllocationFailed`] if the output could not be allocated
/// - otherwise as [`decode`], minus the output length check
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use vtf_decode_api::{decode_allocating, ImageFormat};
///
/// let decoded = decode_allocating(ImageFormat::RGB888, &[1, 2, 3, 4, 5, 6], 2, 1)?;
/// assert_eq!(decoded.as_slice(), &[1, 2, 3, 255, 4, 5, 6, 255]);
/// # Ok(())
/// # }
/// ```
pub fn decode_allocating(
    format: ImageFormat,
    input: &[u8],
    width: usize,
    height: usize,
) -> Result<RawAlloc, DecodeError> {
    let loader = resolve_loader(format)?;
    let layout = validate_dimensions(format, width, height)?;
    check_len(BufferKind::Input, layout.input_len, input.len())?;

    let mut output = allocate_align_64(layout.output_len)?;

    // Safety: input length is validated and the allocation holds exactly output_len bytes.
    unsafe { loader(input.as_ptr(), output.as_mut_ptr(), width, height) };
    Ok(output)
}
