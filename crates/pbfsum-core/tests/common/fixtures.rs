//! Scratch data files and manifests for verification tests.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(data).unwrap();
    enc.finish().unwrap()
}

/// Write `body` to `<dir>/<name>` and return the path.
pub fn write_file(dir: &Path, name: &str, body: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

/// Write a `<name>.md5` manifest next to the data file, optionally gzipped.
pub fn write_manifest(dir: &Path, name: &str, text: &str, compressed: bool) -> PathBuf {
    let body = if compressed {
        gzip(text.as_bytes())
    } else {
        text.as_bytes().to_vec()
    };
    write_file(dir, &format!("{name}.md5"), &body)
}
