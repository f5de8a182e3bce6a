//! SHA-1 helpers shared by the fetcher.

use std::path::Path;

use sha1::{Digest, Sha1};
use tokio::io::AsyncReadExt;

use crate::core::error::{NativesError, NativesResult};

const BUF_SIZE: usize = 64 * 1024;

/// Length of a hex-encoded SHA-1 digest.
pub const SHA1_HEX_LEN: usize = 40;

/// Validate sidecar content: trimmed, exactly 40 hex digits.
/// Returns the digest in lowercase.
pub fn parse_sha1(content: &str) -> Option<String> {
    let trimmed = content.trim();
    if trimmed.len() == SHA1_HEX_LEN && trimmed.bytes().all(|b| b.is_ascii_hexdigit()) {
        Some(trimmed.to_ascii_lowercase())
    } else {
        None
    }
}

/// Compute the SHA-1 of a file as lowercase hex, reading it in chunks.
pub async fn sha1_file(path: &Path) -> NativesResult<String> {
    let mut file = tokio::fs::File::open(path)
        .await
        .map_err(|e| NativesError::io(path, e))?;
    let mut hasher = Sha1::new();
    let mut buf = vec![0u8; BUF_SIZE];
    loop {
        let n = file
            .read(&mut buf)
            .await
            .map_err(|e| NativesError::io(path, e))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}
