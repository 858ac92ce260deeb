use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Largest export accepted: 256MB
pub const MAX_INPUT_SIZE_BYTES: u64 = 256 * 1024 * 1024;

/// Read a clippings export into memory as text
///
/// The whole file is read before parsing starts. A leading UTF-8 byte-order mark, which Kindle
/// devices write, is removed.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or read
/// - The file is larger than [`MAX_INPUT_SIZE_BYTES`]
/// - The contents are not valid UTF-8
pub fn read_clippings_file(path: &Path) -> Result<String> {
    // Size is checked on the open handle so the file cannot change in between
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open clippings file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .with_context(|| format!("Failed to read clippings file: {}", path.display()))?;

    decode_clippings(&bytes)
        .map(Cow::into_owned)
        .with_context(|| format!("Failed to decode clippings file: {}", path.display()))
}

/// Decode UTF-8 bytes, stripping a leading byte-order mark if present
pub fn decode_clippings(bytes: &[u8]) -> Result<Cow<'_, str>> {
    let (text, malformed) = encoding_rs::UTF_8.decode_with_bom_removal(bytes);
    if malformed {
        bail!("Input is not valid UTF-8");
    }
    Ok(text)
}

/// Validates that a file's size is within [`MAX_INPUT_SIZE_BYTES`]
///
/// # Errors
///
/// Returns an error if the file metadata cannot be read or the file is too large.
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_INPUT_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_INPUT_SIZE_BYTES
        );
    }

    Ok(())
}
