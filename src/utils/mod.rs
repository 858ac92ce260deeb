pub mod input;

pub use input::{MAX_INPUT_SIZE_BYTES, decode_clippings, read_clippings_file, validate_file_size};
