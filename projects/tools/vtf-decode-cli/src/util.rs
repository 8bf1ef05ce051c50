use crate::error::CliError;
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::fs;
use std::path::*;

/// Recursively collects every file below `dir`.
///
/// Directories or entries that cannot be read are skipped.
pub fn find_all_files(dir: &Path, files: &mut Vec<PathBuf>) -> std::io::Result<()> {
    let dir_entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Ok(()),
    };

    for entry in dir_entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue, // e.g. no access
        };

        let path = entry.path();
        if path.is_dir() {
            find_all_files(&path, files)?;
        } else {
            files.push(path);
        }
    }
    Ok(())
}

/// Canonicalizes a CLI path argument, creating the directory if it doesn't exist.
pub fn canonicalize_cli_path(value: &str) -> Result<PathBuf, String> {
    let path = Path::new(value);

    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| format!("Failed to create directory: {e}"))?;
    }

    fs::canonicalize(path).map_err(|e| format!("Invalid path: {e}"))
}

/// Canonicalizes a CLI path argument that must already exist.
pub fn existing_cli_path(value: &str) -> Result<PathBuf, String> {
    fs::canonicalize(value).map_err(|e| format!("Invalid path '{value}': {e}"))
}

/// Where the PPM for `source` goes: its path relative to `input_root`, mirrored under
/// `output_root`, with the extension replaced by `ppm`.
///
/// When `source` is `input_root` itself (a single input file), only its file name is kept.
pub fn output_path_for(source: &Path, input_root: &Path, output_root: &Path) -> PathBuf {
    let relative = match source.strip_prefix(input_root) {
        Ok(relative) if !relative.as_os_str().is_empty() => relative.to_path_buf(),
        _ => source.file_name().map(PathBuf::from).unwrap_or_default(),
    };
    output_root.join(relative).with_extension("ppm")
}

/// Memory maps `path` and hands its contents to `f`.
///
/// Empty files are passed as an empty slice without being mapped.
pub fn with_mapped_file<R>(
    path: &Path,
    f: impl FnOnce(&[u8]) -> Result<R, CliError>,
) -> Result<R, CliError> {
    let handle = ReadOnlyFileHandle::open(path)?;
    let size = handle.size()? as usize;
    if size == 0 {
        return f(&[]);
    }

    let mapping = ReadOnlyMmap::new(&handle, 0, size)?;
    f(mapping.as_slice())
}

/// Logs a failed file, so one bad file does not stop the others.
pub fn handle_process_entry_error(path: &Path, result: Result<u64, CliError>) -> Option<u64> {
    match result {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            tracing::error!(path = %path.display(), "{e}");
            None
        }
    }
}
