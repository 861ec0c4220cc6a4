//! Verify a downloaded data file against its (possibly gzipped) MD5 manifest.

mod error;

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::checksum;
use crate::config::PbfsumConfig;
use crate::manifest::{ChecksumRecord, GzipAwareParser, ManifestParser};

pub use error::VerifyError;

/// Outcome of comparing a data file with its manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    /// What the manifest says.
    pub record: ChecksumRecord,
    /// Lowercase hex MD5 of the target file.
    pub actual: String,
}

impl Verification {
    pub fn expected(&self) -> &str {
        &self.record.checksum
    }

    pub fn is_match(&self) -> bool {
        self.actual.eq_ignore_ascii_case(&self.record.checksum)
    }
}

/// Verifies data files with an injected manifest parser.
///
/// Build one at startup and pass it to whatever performs downloads; that is
/// the only place the parsing behaviour is chosen.
#[derive(Debug, Clone)]
pub struct Verifier<P = GzipAwareParser> {
    parser: P,
}

impl Default for Verifier<GzipAwareParser> {
    fn default() -> Self {
        Self::gzip_aware()
    }
}

impl Verifier<GzipAwareParser> {
    /// Gzip-aware parsing with the `.osm.pbf` data suffix.
    pub fn gzip_aware() -> Self {
        Self::new(GzipAwareParser::default())
    }

    pub fn from_config(cfg: &PbfsumConfig) -> Self {
        Self::new(GzipAwareParser::new(cfg.data_suffix.clone()))
    }
}

impl<P: ManifestParser> Verifier<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Returns true iff the MD5 of `target` equals the checksum in `manifest`.
    pub fn verify(&self, target: &Path, manifest: &Path) -> Result<bool, VerifyError> {
        Ok(self.check(target, manifest)?.is_match())
    }

    /// Like [`Verifier::verify`] but keeps both digests for reporting.
    pub fn check(&self, target: &Path, manifest: &Path) -> Result<Verification, VerifyError> {
        let record = read_manifest(manifest, &self.parser)?;
        let actual = checksum::md5_path(target).map_err(|source| VerifyError::Io {
            path: target.to_path_buf(),
            source,
        })?;
        let v = Verification { record, actual };
        if v.is_match() {
            tracing::debug!(target = %target.display(), md5 = %v.actual, "checksum ok");
        } else {
            tracing::warn!(
                target = %target.display(),
                manifest = %manifest.display(),
                expected = %v.expected(),
                actual = %v.actual,
                "checksum mismatch"
            );
        }
        Ok(v)
    }
}

/// Verify `target` against `manifest` with the gzip-aware parser and `.osm.pbf` suffix.
pub fn verify(target: &Path, manifest: &Path) -> Result<bool, VerifyError> {
    Verifier::gzip_aware().verify(target, manifest)
}

/// Read a manifest file in full and parse it with `parser`.
pub fn read_manifest<P: ManifestParser + ?Sized>(
    path: &Path,
    parser: &P,
) -> Result<ChecksumRecord, VerifyError> {
    let raw = fs::read(path).map_err(|source| VerifyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parser
        .parse(&raw)
        .map_err(|source| VerifyError::MalformedManifest {
            path: path.to_path_buf(),
            source,
        })
}

/// Conventional manifest location for `target`: the same path with `suffix` appended
/// (`europe-latest.osm.pbf` -> `europe-latest.osm.pbf.md5`).
pub fn default_manifest_path(target: &Path, suffix: &str) -> PathBuf {
    let mut s: OsString = target.as_os_str().to_owned();
    s.push(suffix);
    PathBuf::from(s)
}
