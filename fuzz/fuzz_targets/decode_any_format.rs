#![no_main]

// Feeds arbitrary formats, dimensions and buffers through the checked entry point. It must
// either decode or return an error, never panic or touch the output on failure.

use libfuzzer_sys::{arbitrary, fuzz_target};
use vtf_decode_api::decode_by_id;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct DecodeInput {
    pub format_id: u8,
    pub width: u8,
    pub height: u8,
    pub output_len: u16,
    pub input: Vec<u8>,
}

fuzz_target!(|data: DecodeInput| {
    let mut output = vec![0xA5u8; data.output_len as usize];
    let result = decode_by_id(
        data.format_id as u32,
        &mut output,
        &data.input,
        data.width as usize,
        data.height as usize,
    );

    if result.is_err() {
        assert!(output.iter().all(|&b| b == 0xA5));
    }
});
