//! MD5 digests of downloaded data files.
//!
//! MD5 is what Geofabrik publishes next to every extract, so it is the only
//! algorithm supported here.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

const BUF_SIZE: usize = 64 * 1024;

/// Compute MD5 of a file and return the digest as lowercase hex.
/// The whole file is hashed; reads in chunks to keep memory use bounded.
pub fn md5_path(path: &Path) -> io::Result<String> {
    let mut f = File::open(path)?;
    let mut ctx = md5::Context::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = match f.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        ctx.consume(&buf[..n]);
    }
    Ok(hex::encode(ctx.compute().0))
}

/// MD5 of an in-memory buffer as lowercase hex.
pub fn md5_bytes(data: &[u8]) -> String {
    hex::encode(md5::compute(data).0)
}
