//! `pbfsum verify <target>` – check a data file against its manifest.

use anyhow::Result;
use pbfsum_core::manifest::ManifestParser;
use pbfsum_core::Verifier;
use std::path::Path;

/// Prints `<target>: OK` or `<target>: FAILED` and returns whether the digests matched.
/// Unreadable files and malformed manifests are errors, never a silent mismatch.
pub fn run_verify<P: ManifestParser>(
    verifier: &Verifier<P>,
    target: &Path,
    manifest: &Path,
) -> Result<bool> {
    let v = verifier.check(target, manifest)?;
    if v.is_match() {
        println!("{}: OK", target.display());
    } else {
        println!("{}: FAILED", target.display());
        eprintln!("  expected {}", v.expected());
        eprintln!("  actual   {}", v.actual);
    }
    Ok(v.is_match())
}
