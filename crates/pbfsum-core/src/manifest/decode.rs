//! Content-based gzip detection and ASCII decoding of manifest payloads.

use std::borrow::Cow;
use std::io::Read;

use flate2::read::MultiGzDecoder;

use super::ManifestError;

/// First two bytes of every gzip member (RFC 1952).
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// True if the payload starts with the gzip magic header.
pub fn is_gzip(raw: &[u8]) -> bool {
    raw.starts_with(&GZIP_MAGIC)
}

/// Decompress `raw` if it carries the gzip magic header; otherwise borrow it unchanged.
///
/// Concatenated gzip members are decoded in full.
pub fn decompress_if_gzip(raw: &[u8]) -> Result<Cow<'_, [u8]>, ManifestError> {
    if !is_gzip(raw) {
        return Ok(Cow::Borrowed(raw));
    }
    let mut out = Vec::new();
    MultiGzDecoder::new(raw)
        .read_to_end(&mut out)
        .map_err(ManifestError::Decompress)?;
    tracing::debug!(
        compressed = raw.len(),
        decompressed = out.len(),
        "decompressed gzip manifest"
    );
    Ok(Cow::Owned(out))
}

/// Interpret bytes as ASCII and strip surrounding whitespace.
pub(crate) fn decode_ascii(bytes: &[u8]) -> Result<&str, ManifestError> {
    if let Some(offset) = bytes.iter().position(|b| !b.is_ascii()) {
        return Err(ManifestError::NotAscii {
            offset,
            byte: bytes[offset],
        });
    }
    // ASCII is always valid UTF-8.
    let text = std::str::from_utf8(bytes).unwrap_or_default().trim();
    if text.is_empty() {
        return Err(ManifestError::Empty);
    }
    Ok(text)
}
