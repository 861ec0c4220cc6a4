//! Error type for manifests that cannot be turned into a checksum record.

use std::fmt;

/// The manifest bytes (after optional decompression) are not a usable checksum line.
#[derive(Debug)]
pub enum ManifestError {
    /// Payload starts with the gzip magic header but does not decompress.
    Decompress(std::io::Error),
    /// Decoded payload contains a byte outside the ASCII range.
    NotAscii { offset: usize, byte: u8 },
    /// Nothing but whitespace (or nothing at all) once decoded.
    Empty,
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::Decompress(e) => write!(f, "gzip decompression failed: {}", e),
            ManifestError::NotAscii { offset, byte } => {
                write!(f, "not ASCII text: byte 0x{:02x} at offset {}", byte, offset)
            }
            ManifestError::Empty => write!(f, "manifest is empty"),
        }
    }
}

impl std::error::Error for ManifestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ManifestError::Decompress(e) => Some(e),
            ManifestError::NotAscii { .. } | ManifestError::Empty => None,
        }
    }
}
