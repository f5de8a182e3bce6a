use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use futures_util::StreamExt;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_ENCODING};
use reqwest::Client;
use sha1::{Digest, Sha1};
use tokio::io::AsyncWriteExt;
use tokio::sync::OwnedMutexGuard;
use tracing::{debug, info, warn};

use crate::core::checksum::{parse_sha1, sha1_file};
use crate::core::error::{NativesError, NativesResult};
use crate::core::maven::MavenRepo;

const USER_AGENT: &str = concat!("natives-redirect/", env!("CARGO_PKG_VERSION"));

/// Size and verified SHA-1 of a cached artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedArtifact {
    pub size: u64,
    pub sha1: String,
}

/// Downloads artifacts into a local cache, verifying each one against the
/// repository's `.sha1` sidecar.
///
/// A cache entry is reused only when its content hashes to the expected
/// digest; anything else is downloaded again.
pub struct ArtifactFetcher {
    client: Client,
    cache_dir: PathBuf,
    /// One async lock per relative path so concurrent callers never write the
    /// same cache file at once.
    path_locks: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl ArtifactFetcher {
    /// Fetcher with its own client. Repositories are asked for unencoded
    /// bodies, so digests and sizes describe the bytes the launcher will get.
    pub fn new(cache_dir: impl Into<PathBuf>) -> NativesResult<Self> {
        let headers = HeaderMap::from_iter([(
            ACCEPT_ENCODING,
            HeaderValue::from_static("identity"),
        )]);
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;
        Ok(Self::with_client(client, cache_dir))
    }

    pub fn with_client(client: Client, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            cache_dir: cache_dir.into(),
            path_locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Local file backing the remote `path`. Always inside the cache root:
    /// empty, `.` and `..` segments are dropped.
    pub fn cache_path(&self, path: &str) -> PathBuf {
        path.split(['/', '\\'])
            .filter(|segment| !matches!(*segment, "" | "." | ".."))
            .fold(self.cache_dir.clone(), |acc, segment| acc.join(segment))
    }

    async fn lock_path(&self, path: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self
                .path_locks
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            Arc::clone(locks.entry(path.to_string()).or_default())
        };
        lock.lock_owned().await
    }

    // ── Checksum sidecar ────────────────────────────────

    /// Return the SHA-1 stored in the sidecar at `path` (e.g. `….jar.sha1`).
    ///
    /// A cached sidecar that is well formed is returned as-is without touching
    /// the network; it is never re-validated against the remote.
    pub async fn fetch_checksum(&self, repo: &MavenRepo, path: &str) -> NativesResult<String> {
        let _guard = self.lock_path(path).await;
        let target = self.cache_path(path);

        if let Ok(cached) = tokio::fs::read_to_string(&target).await {
            if let Some(sha1) = parse_sha1(&cached) {
                return Ok(sha1);
            }
            warn!("Ignoring malformed cached checksum at {:?}", target);
        }

        let url = repo.transfer_url(path);
        debug!("Fetching checksum {}", url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NativesError::DownloadFailed {
                url,
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        let content = String::from_utf8_lossy(&bytes);
        let Some(sha1) = parse_sha1(&content) else {
            return Err(NativesError::InvalidChecksum {
                url,
                content: content.into_owned(),
            });
        };

        create_parent_dir(&target).await?;
        tokio::fs::write(&target, &sha1)
            .await
            .map_err(|e| NativesError::io(&target, e))?;

        Ok(sha1)
    }

    // ── Artifact ────────────────────────────────────────

    /// Ensure the artifact at `path` is cached and matches its sidecar.
    ///
    /// Fails with [`NativesError::Sha1Mismatch`] if the downloaded bytes do
    /// not hash to the expected digest; the bad file is removed.
    pub async fn fetch_artifact(
        &self,
        repo: &MavenRepo,
        path: &str,
    ) -> NativesResult<FetchedArtifact> {
        let _guard = self.lock_path(path).await;

        let expected = self.fetch_checksum(repo, &format!("{path}.sha1")).await?;
        let target = self.cache_path(path);

        let cached = tokio::fs::metadata(&target)
            .await
            .ok()
            .filter(|meta| meta.is_file());
        if let Some(meta) = cached {
            match sha1_file(&target).await {
                Ok(actual) if actual == expected => {
                    let size = meta.len();
                    debug!("Cache hit: {}", path);
                    return Ok(FetchedArtifact {
                        size,
                        sha1: expected,
                    });
                }
                Ok(actual) => warn!(
                    "Cached {} is stale (sha1 {} != {}), downloading again",
                    path, actual, expected
                ),
                Err(e) => warn!("Cannot hash cached {}: {}", path, e),
            }
        }

        let url = repo.transfer_url(path);
        info!("Downloading {}", url);

        let (size, actual) = self.download_hashed(&url, &target).await?;
        if actual != expected {
            if let Err(e) = tokio::fs::remove_file(&target).await {
                warn!("Failed to remove corrupt download {:?}: {}", target, e);
            }
            return Err(NativesError::Sha1Mismatch {
                path: path.to_string(),
                expected,
                actual,
            });
        }

        Ok(FetchedArtifact { size, sha1: actual })
    }

    /// Stream `url` into `dest`, hashing every chunk as it is written.
    /// Returns the byte count and the hex digest.
    async fn download_hashed(&self, url: &str, dest: &Path) -> NativesResult<(u64, String)> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NativesError::DownloadFailed {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        create_parent_dir(dest).await?;

        let mut hasher = Sha1::new();
        let mut size: u64 = 0;

        // Scoped so the handle is closed before the caller inspects the file.
        {
            let mut file = tokio::fs::File::create(dest)
                .await
                .map_err(|e| NativesError::io(dest, e))?;

            let mut stream = response.bytes_stream();
            while let Some(chunk) = stream.next().await {
                let chunk = chunk?;
                file.write_all(&chunk)
                    .await
                    .map_err(|e| NativesError::io(dest, e))?;
                hasher.update(&chunk);
                size += chunk.len() as u64;
            }

            file.flush().await.map_err(|e| NativesError::io(dest, e))?;
        }

        Ok((size, hex::encode(hasher.finalize())))
    }
}

async fn create_parent_dir(path: &Path) -> NativesResult<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| NativesError::io(parent, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_path_mirrors_remote_layout() {
        let fetcher = ArtifactFetcher::with_client(Client::new(), "/cache");
        assert_eq!(
            fetcher.cache_path("org/lwjgl/lwjgl/3.3.2/lwjgl-3.3.2.jar.sha1"),
            PathBuf::from("/cache/org/lwjgl/lwjgl/3.3.2/lwjgl-3.3.2.jar.sha1")
        );
    }

    #[test]
    fn cache_path_never_leaves_the_root() {
        let fetcher = ArtifactFetcher::with_client(Client::new(), "/cache");
        assert_eq!(
            fetcher.cache_path("../../etc/./passwd"),
            PathBuf::from("/cache/etc/passwd")
        );
        assert_eq!(
            fetcher.cache_path("/a/..\\b/c.jar"),
            PathBuf::from("/cache/a/b/c.jar")
        );
    }

    #[tokio::test]
    async fn cached_checksum_is_used_without_network() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = ArtifactFetcher::with_client(Client::new(), dir.path());
        let sidecar = fetcher.cache_path("a/b/1/b-1.jar.sha1");
        tokio::fs::create_dir_all(sidecar.parent().unwrap())
            .await
            .unwrap();
        tokio::fs::write(&sidecar, "DA39A3EE5E6B4B0D3255BFEF95601890AFD80709\n")
            .await
            .unwrap();

        // Port 9 (discard) is never listened on in tests; any request would fail.
        let repo = MavenRepo::new("offline", "http://127.0.0.1:9");
        let sha1 = fetcher
            .fetch_checksum(&repo, "a/b/1/b-1.jar.sha1")
            .await
            .unwrap();
        assert_eq!(sha1, "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[tokio::test]
    async fn cached_artifact_is_used_without_network() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = ArtifactFetcher::with_client(Client::new(), dir.path());
        let jar = fetcher.cache_path("a/b/1/b-1.jar");
        tokio::fs::create_dir_all(jar.parent().unwrap()).await.unwrap();
        tokio::fs::write(&jar, b"hello\n").await.unwrap();
        tokio::fs::write(
            fetcher.cache_path("a/b/1/b-1.jar.sha1"),
            "f572d396fae9206628714fb2ce00f72e94f2258f",
        )
        .await
        .unwrap();

        let repo = MavenRepo::new("offline", "http://127.0.0.1:9");
        let fetched = fetcher.fetch_artifact(&repo, "a/b/1/b-1.jar").await.unwrap();
        assert_eq!(
            fetched,
            FetchedArtifact {
                size: 6,
                sha1: "f572d396fae9206628714fb2ce00f72e94f2258f".into(),
            }
        );
    }
}
