pub mod decode;
pub mod formats;
