use crate::error::CliError;
use crate::util::*;
use argh::FromArgs;
use bytesize::ByteSize;
#[cfg(feature = "multithreaded")]
use rayon::prelude::*;
use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};
use vtf_decode_api::{canvas::write_ppm, decode_allocating, required_input_size, ImageFormat};

#[derive(FromArgs, Debug)]
/// Decode raw VTF pixel data (one image per file) to PPM
#[argh(subcommand, name = "decode")]
pub struct DecodeCmd {
    /// input file, or directory searched recursively
    #[argh(option, from_str_fn(existing_cli_path))]
    pub input: PathBuf,

    /// output directory path
    #[argh(option, from_str_fn(canonicalize_cli_path))]
    pub output: PathBuf,

    /// pixel format of every input, e.g. DXT1 or BGRA8888
    #[argh(option)]
    pub format: ImageFormat,

    /// image width in pixels
    #[argh(option)]
    pub width: usize,

    /// image height in pixels
    #[argh(option)]
    pub height: usize,
}

/// Totals for one run of the decode command.
#[derive(Debug, Default)]
pub struct DecodeSummary {
    pub decoded: u64,
    pub failed: u64,
    pub bytes_read: u64,
}

pub fn handle_decode_command(cmd: DecodeCmd) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let summary = decode_files(&cmd)?;
    let elapsed = start.elapsed();

    let throughput = if elapsed.as_secs_f64() > 0.0 {
        ByteSize((summary.bytes_read as f64 / elapsed.as_secs_f64()) as u64)
    } else {
        ByteSize(0)
    };

    println!("Decoded {} files ({} failed)", summary.decoded, summary.failed);
    println!("Time taken: {elapsed:.2?}");
    println!("Data processed: {}", ByteSize(summary.bytes_read));
    println!("Throughput: {throughput}/s");
    Ok(())
}

/// Decodes every input file of `cmd`, logging and counting the ones that fail.
///
/// # Errors
///
/// Fails before touching any file if the format or dimensions cannot be decoded at all.
pub fn decode_files(cmd: &DecodeCmd) -> Result<DecodeSummary, CliError> {
    let expected_len = required_input_size(cmd.format, cmd.width, cmd.height)?;
    tracing::debug!(
        format = %cmd.format,
        width = cmd.width,
        height = cmd.height,
        expected_len,
        "decoding"
    );

    let mut files = Vec::new();
    if cmd.input.is_dir() {
        find_all_files(&cmd.input, &mut files)?;
    } else {
        files.push(cmd.input.clone());
    }

    if files.is_empty() {
        return Err(CliError::InvalidArgument(format!(
            "no files found in {}",
            cmd.input.display()
        )));
    }
    tracing::info!("Found {} files to decode", files.len());

    let decoded = AtomicU64::new(0);
    let bytes_read = AtomicU64::new(0);
    let process = |path: &PathBuf| {
        let result = decode_file(path, &cmd.input, &cmd.output, cmd);
        if let Some(bytes) = handle_process_entry_error(path, result) {
            decoded.fetch_add(1, Ordering::Relaxed);
            bytes_read.fetch_add(bytes, Ordering::Relaxed);
        }
    };

    #[cfg(feature = "multithreaded")]
    files.par_iter().for_each(process);
    #[cfg(not(feature = "multithreaded"))]
    files.iter().for_each(process);

    let decoded = decoded.into_inner();
    Ok(DecodeSummary {
        decoded,
        failed: files.len() as u64 - decoded,
        bytes_read: bytes_read.into_inner(),
    })
}

/// Decodes one file and writes it out as PPM, returning the number of bytes read.
fn decode_file(
    path: &Path,
    input_root: &Path,
    output_root: &Path,
    cmd: &DecodeCmd,
) -> Result<u64, CliError> {
    let target = output_path_for(path, input_root, output_root);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    let pixels = with_mapped_file(path, |input| {
        Ok(decode_allocating(cmd.format, input, cmd.width, cmd.height)?)
    })?;

    let writer = BufWriter::new(File::create(&target)?);
    write_ppm(writer, pixels.as_slice(), cmd.width, cmd.height)?;

    tracing::debug!(source = %path.display(), target = %target.display(), "decoded");
    Ok(cmd.format.frame_size(cmd.width, cmd.height).unwrap_or_default() as u64)
}
