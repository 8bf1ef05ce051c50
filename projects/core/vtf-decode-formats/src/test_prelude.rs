//! Common test prelude for avoiding duplicate imports in test modules.

pub use rstest::rstest;

/// Runs a raw loader over `input`, returning a freshly allocated RGBA8888 buffer.
pub fn run_loader(
    loader: unsafe fn(*const u8, *mut u8, usize, usize),
    input: &[u8],
    width: usize,
    height: usize,
) -> Vec<u8> {
    let mut output = vec![0xAAu8; width * height * 4];
    unsafe { loader(input.as_ptr(), output.as_mut_ptr(), width, height) };
    output
}
