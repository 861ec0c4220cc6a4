pub mod config;
pub mod logging;

pub mod checksum;
pub mod manifest;
pub mod verify;

pub use manifest::{parse_manifest, ChecksumRecord, ManifestError, ManifestParser};
pub use verify::{verify, Verifier, VerifyError};
