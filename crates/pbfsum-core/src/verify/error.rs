//! Error types for manifest verification.

use std::fmt;
use std::path::PathBuf;

use crate::manifest::ManifestError;

/// Verification could not produce a yes/no answer.
#[derive(Debug)]
pub enum VerifyError {
    /// The manifest was read but is not a usable checksum line.
    MalformedManifest {
        path: PathBuf,
        source: ManifestError,
    },
    /// The target or the manifest could not be opened or read.
    Io { path: PathBuf, source: std::io::Error },
}

impl VerifyError {
    /// Path of the file the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            VerifyError::MalformedManifest { path, .. } | VerifyError::Io { path, .. } => path,
        }
    }
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyError::MalformedManifest { path, source } => {
                write!(f, "malformed manifest {}: {}", path.display(), source)
            }
            VerifyError::Io { path, source } => write!(f, "read {}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for VerifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VerifyError::MalformedManifest { source, .. } => Some(source),
            VerifyError::Io { source, .. } => Some(source),
        }
    }
}
