use std::io;
use thiserror::Error;
use vtf_decode_api::DecodeError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("Failed to open file handle: {0}")]
    FileHandle(#[from] lightweight_mmap::handles::HandleOpenError),
    #[error("Failed to create memory mapping: {0}")]
    MemoryMapping(#[from] lightweight_mmap::mmap::MmapError),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
