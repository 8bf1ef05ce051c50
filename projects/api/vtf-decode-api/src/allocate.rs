//! Uninitialized, 64-byte aligned output buffers.

use core::alloc::{Layout, LayoutError};
use safe_allocator_api::prelude::AllocError;
use safe_allocator_api::RawAlloc;
use thiserror::Error;

/// Allocates data with an alignment of 64 bytes.
///
/// # Parameters
///
/// - `num_bytes`: The number of bytes to allocate
///
/// # Returns
///
/// A [`RawAlloc`] containing the allocated data
pub fn allocate_align_64(num_bytes: usize) -> Result<RawAlloc, AllocateError> {
    let layout = Layout::from_size_align(num_bytes, 64)?;
    Ok(RawAlloc::new(layout)?)
}

/// An error that happened while allocating an output buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocateError {
    /// The requested size does not form a valid layout (larger than `isize::MAX`).
    #[error("Invalid layout provided: {0}")]
    LayoutError(#[from] LayoutError),

    /// The allocator could not provide the memory.
    #[error(transparent)]
    AllocationFailed(#[from] AllocError),
}
