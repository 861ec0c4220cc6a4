//! Parse `.md5` checksum manifests, plain or gzip-compressed.
//!
//! A manifest is one line of whitespace-separated tokens:
//! `<hex-checksum> [*]<filename> ...`. Only the checksum and the first token
//! naming a data file are consumed; everything else is ignored.

mod decode;
mod error;

pub use decode::{decompress_if_gzip, is_gzip, GZIP_MAGIC};
pub use error::ManifestError;

/// Suffix of the data files these manifests accompany.
pub const DEFAULT_DATA_SUFFIX: &str = ".osm.pbf";

/// Expected checksum and (optionally) the file name the manifest refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumRecord {
    /// Lowercase hex digest; never empty.
    pub checksum: String,
    /// First token ending with the data-file suffix, `*` marker stripped.
    pub referenced_filename: Option<String>,
}

/// Parse raw manifest bytes, looking for a `.osm.pbf` file name.
pub fn parse_manifest(raw: &[u8]) -> Result<ChecksumRecord, ManifestError> {
    parse_manifest_with_suffix(raw, DEFAULT_DATA_SUFFIX)
}

/// Parse raw manifest bytes; `data_suffix` selects which token is the referenced file name.
///
/// Compression is detected from the content, never from a file name. A
/// manifest whose file name does not end with `data_suffix` (or has none)
/// still parses, with `referenced_filename` left as `None`.
pub fn parse_manifest_with_suffix(
    raw: &[u8],
    data_suffix: &str,
) -> Result<ChecksumRecord, ManifestError> {
    let payload = decompress_if_gzip(raw)?;
    let text = decode::decode_ascii(&payload)?;

    let mut tokens = text.split_whitespace();
    let checksum = tokens
        .next()
        .ok_or(ManifestError::Empty)?
        .to_ascii_lowercase();

    let referenced_filename = tokens
        .map(|t| t.trim_start_matches('*'))
        .find(|t| t.ends_with(data_suffix))
        .map(str::to_string);

    tracing::debug!(
        checksum = %checksum,
        file = ?referenced_filename,
        "parsed manifest"
    );

    Ok(ChecksumRecord {
        checksum,
        referenced_filename,
    })
}

/// Turns manifest bytes into a [`ChecksumRecord`].
///
/// Hosts that already own the download/verify call site pass an
/// implementation to [`crate::Verifier`] instead of patching a library at
/// runtime. Plain functions and closures with the right signature qualify.
pub trait ManifestParser {
    fn parse(&self, raw: &[u8]) -> Result<ChecksumRecord, ManifestError>;
}

impl<F> ManifestParser for F
where
    F: Fn(&[u8]) -> Result<ChecksumRecord, ManifestError>,
{
    fn parse(&self, raw: &[u8]) -> Result<ChecksumRecord, ManifestError> {
        self(raw)
    }
}

/// [`ManifestParser`] that accepts plain or gzip-compressed manifests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GzipAwareParser {
    pub data_suffix: String,
}

impl GzipAwareParser {
    pub fn new(data_suffix: impl Into<String>) -> Self {
        Self {
            data_suffix: data_suffix.into(),
        }
    }
}

impl Default for GzipAwareParser {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_SUFFIX)
    }
}

impl ManifestParser for GzipAwareParser {
    fn parse(&self, raw: &[u8]) -> Result<ChecksumRecord, ManifestError> {
        parse_manifest_with_suffix(raw, &self.data_suffix)
    }
}
