//! `pbfsum checksum <path>` – compute MD5 of a file.

use anyhow::{Context, Result};
use pbfsum_core::checksum;
use std::path::Path;

/// Compute and print MD5 of the given file in `md5sum` format.
pub fn run_checksum(path: &Path) -> Result<()> {
    let digest = checksum::md5_path(path).with_context(|| format!("read {}", path.display()))?;
    println!("{}  {}", digest, path.display());
    Ok(())
}
