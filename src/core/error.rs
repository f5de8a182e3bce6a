use std::path::{Path, PathBuf};
use thiserror::Error;

/// Central error type for the whole generator.
/// Every module returns `Result<T, NativesError>`.
#[derive(Debug, Error)]
pub enum NativesError {
    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── Network ─────────────────────────────────────────
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Download failed for {url}: HTTP {status}")]
    DownloadFailed { url: String, status: u16 },

    // ── Integrity ───────────────────────────────────────
    #[error("Invalid SHA-1 sidecar from {url}: {content:?}")]
    InvalidChecksum { url: String, content: String },

    #[error("SHA-1 mismatch for {path}: expected {expected}, got {actual}")]
    Sha1Mismatch {
        path: String,
        expected: String,
        actual: String,
    },

    // ── Maven ───────────────────────────────────────────
    #[error("Invalid Maven coordinate: {0}")]
    InvalidMavenCoordinate(String),

    #[error("Unknown repository: {0}")]
    UnknownRepository(String),

    #[error("Unsupported LWJGL version: {0}")]
    UnsupportedLwjglVersion(String),

    // ── Tables ──────────────────────────────────────────
    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    // ── JSON ────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type NativesResult<T> = Result<T, NativesError>;

impl NativesError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        NativesError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
