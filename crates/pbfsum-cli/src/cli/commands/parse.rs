//! `pbfsum parse <manifest>` – show what a manifest records.

use anyhow::Result;
use pbfsum_core::manifest::ManifestParser;
use pbfsum_core::verify::read_manifest;
use pbfsum_core::Verifier;
use std::path::Path;

pub fn run_parse<P: ManifestParser>(verifier: &Verifier<P>, manifest: &Path) -> Result<()> {
    let record = read_manifest(manifest, verifier.parser())?;
    println!("checksum: {}", record.checksum);
    println!(
        "file:     {}",
        record.referenced_filename.as_deref().unwrap_or("-")
    );
    Ok(())
}
