//! SHA-256 fingerprints for byte slices and files
//!
//! Used across the workspace to identify blobs and files by content. Digests
//! are 32 bytes, displayed as 64 lowercase hex chars.

use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::info;

use crate::error::{CoreError, CoreResult};

/// SHA-256 digest of a byte slice. Always 32 bytes.
pub fn sha256_bytes(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// SHA-256 digest of a byte slice as 64 lowercase hex chars.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256_bytes(data))
}

/// SHA-256 digest of a file on disk, as 64 lowercase hex chars.
///
/// Reads in 64KB chunks so arbitrarily large files never have to fit in
/// memory. Fails with [`CoreError::NotFound`] if the path does not exist.
pub fn sha256_file(path: &Path) -> CoreResult<String> {
    info!("hashing file {}", path.display());
    if !path.exists() {
        return Err(CoreError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let mut file = std::fs::File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; 64 * 1024];

    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}
