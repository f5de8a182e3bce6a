//! Integration tests: the verified fetcher against a local stub repository.

mod common;

use common::stub_server::{sha1_hex, StubServer};
use natives_redirect::core::downloader::{ArtifactFetcher, FetchedArtifact};
use natives_redirect::core::error::NativesError;
use natives_redirect::core::maven::MavenRepo;
use tempfile::tempdir;

const JAR: &str = "org/lwjgl/lwjgl/3.3.2/lwjgl-3.3.2-natives-linux-arm64.jar";

fn jar_body() -> Vec<u8> {
    (0u8..=250).cycle().take(200 * 1024).collect()
}

fn repo_for(server: &StubServer) -> MavenRepo {
    MavenRepo::new("stub", "https://repo1.maven.org/maven2").with_mirror(server.base_url())
}

#[tokio::test]
async fn second_fetch_is_served_from_cache() {
    let server = StubServer::start();
    let body = jar_body();
    server.serve_artifact(JAR, &body, &sha1_hex(&body));

    let cache = tempdir().unwrap();
    let fetcher = ArtifactFetcher::new(cache.path()).unwrap();
    let repo = repo_for(&server);

    let first = fetcher.fetch_artifact(&repo, JAR).await.unwrap();
    assert_eq!(server.hits(JAR), 1);
    assert_eq!(server.hits(&format!("{JAR}.sha1")), 1);

    let hits_before = server.total_hits();
    let second = fetcher.fetch_artifact(&repo, JAR).await.unwrap();
    assert_eq!(second, first);
    assert_eq!(server.total_hits(), hits_before);
}

#[tokio::test]
async fn reported_size_matches_body_and_cached_file() {
    let server = StubServer::start();
    let body = jar_body();
    server.serve_artifact(JAR, &body, &sha1_hex(&body));

    let cache = tempdir().unwrap();
    let fetcher = ArtifactFetcher::new(cache.path()).unwrap();
    let repo = repo_for(&server);

    let fetched = fetcher.fetch_artifact(&repo, JAR).await.unwrap();
    assert_eq!(
        fetched,
        FetchedArtifact {
            size: body.len() as u64,
            sha1: sha1_hex(&body),
        }
    );

    let cached = fetcher.cache_path(JAR);
    assert_eq!(std::fs::metadata(&cached).unwrap().len(), body.len() as u64);
    assert_eq!(std::fs::read(&cached).unwrap(), body);
    assert_eq!(
        std::fs::read_to_string(fetcher.cache_path(&format!("{JAR}.sha1"))).unwrap(),
        sha1_hex(&body)
    );

    let again = fetcher.fetch_artifact(&repo, JAR).await.unwrap();
    assert_eq!(again.size, body.len() as u64);
}

#[tokio::test]
async fn corrupted_cache_is_downloaded_again() {
    let server = StubServer::start();
    let body = jar_body();
    server.serve_artifact(JAR, &body, &sha1_hex(&body));

    let cache = tempdir().unwrap();
    let fetcher = ArtifactFetcher::new(cache.path()).unwrap();
    let repo = repo_for(&server);
    fetcher.fetch_artifact(&repo, JAR).await.unwrap();

    // Truncate.
    let cached = fetcher.cache_path(JAR);
    std::fs::write(&cached, &body[..1024]).unwrap();
    let healed = fetcher.fetch_artifact(&repo, JAR).await.unwrap();
    assert_eq!(healed.sha1, sha1_hex(&body));
    assert_eq!(healed.size, body.len() as u64);
    assert_eq!(server.hits(JAR), 2);

    // Flip one byte, same length.
    let mut altered = body.clone();
    altered[4096] ^= 0xff;
    std::fs::write(&cached, &altered).unwrap();
    let healed = fetcher.fetch_artifact(&repo, JAR).await.unwrap();
    assert_eq!(healed.sha1, sha1_hex(&body));
    assert_eq!(std::fs::read(&cached).unwrap(), body);
    assert_eq!(server.hits(JAR), 3);

    // The sidecar was cached once and never fetched again.
    assert_eq!(server.hits(&format!("{JAR}.sha1")), 1);
}

#[tokio::test]
async fn malformed_sidecar_is_rejected_without_cache_write() {
    let server = StubServer::start();
    let cache = tempdir().unwrap();
    let fetcher = ArtifactFetcher::new(cache.path()).unwrap();
    let repo = repo_for(&server);

    let cases = [
        ("short", "a".repeat(39)),
        ("long", "a".repeat(41)),
        ("nonhex", format!("{}zz", "a".repeat(38))),
    ];

    for (name, content) in cases {
        let path = format!("org/example/{name}/1.0/{name}-1.0.jar.sha1");
        server.serve(&path, format!("{content}\n"));

        let err = fetcher.fetch_checksum(&repo, &path).await.unwrap_err();
        assert!(
            matches!(err, NativesError::InvalidChecksum { .. }),
            "{name}: unexpected error {err:?}"
        );
        assert!(!fetcher.cache_path(&path).exists(), "{name}: cache written");
    }
}

#[tokio::test]
async fn sidecar_whitespace_is_trimmed() {
    let server = StubServer::start();
    let body = b"tiny jar".to_vec();
    server.serve(JAR, body.clone());
    server.serve(
        &format!("{JAR}.sha1"),
        format!("\r\n  {}  \r\n", sha1_hex(&body)),
    );

    let cache = tempdir().unwrap();
    let fetcher = ArtifactFetcher::new(cache.path()).unwrap();
    let fetched = fetcher.fetch_artifact(&repo_for(&server), JAR).await.unwrap();
    assert_eq!(fetched.sha1, sha1_hex(&body));
    assert_eq!(fetched.size, body.len() as u64);
}

#[tokio::test]
async fn digest_mismatch_fails_and_leaves_no_cache_entry() {
    let server = StubServer::start();
    let body = jar_body();
    server.serve_artifact(JAR, &body, &sha1_hex(b"something else"));

    let cache = tempdir().unwrap();
    let fetcher = ArtifactFetcher::new(cache.path()).unwrap();
    let repo = repo_for(&server);

    let err = fetcher.fetch_artifact(&repo, JAR).await.unwrap_err();
    match err {
        NativesError::Sha1Mismatch {
            path,
            expected,
            actual,
        } => {
            assert_eq!(path, JAR);
            assert_eq!(expected, sha1_hex(b"something else"));
            assert_eq!(actual, sha1_hex(&body));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!fetcher.cache_path(JAR).exists());

    // A later call downloads and fails again rather than trusting anything on disk.
    let err = fetcher.fetch_artifact(&repo, JAR).await.unwrap_err();
    assert!(matches!(err, NativesError::Sha1Mismatch { .. }));
    assert_eq!(server.hits(JAR), 2);
}

#[tokio::test]
async fn missing_sidecar_reports_http_status() {
    let server = StubServer::start();
    server.serve(JAR, b"no sidecar".to_vec());

    let cache = tempdir().unwrap();
    let fetcher = ArtifactFetcher::new(cache.path()).unwrap();

    let err = fetcher
        .fetch_artifact(&repo_for(&server), JAR)
        .await
        .unwrap_err();
    match err {
        NativesError::DownloadFailed { url, status } => {
            assert_eq!(status, 404);
            assert!(url.starts_with(server.base_url()));
            assert!(url.ends_with(".jar.sha1"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(server.hits(JAR), 0);
}

#[tokio::test]
async fn malformed_cached_sidecar_is_fetched_again() {
    let server = StubServer::start();
    let body = jar_body();
    server.serve_artifact(JAR, &body, &sha1_hex(&body));

    let cache = tempdir().unwrap();
    let fetcher = ArtifactFetcher::new(cache.path()).unwrap();
    let sidecar = fetcher.cache_path(&format!("{JAR}.sha1"));
    std::fs::create_dir_all(sidecar.parent().unwrap()).unwrap();
    std::fs::write(&sidecar, "<html>gateway timeout</html>").unwrap();

    let fetched = fetcher.fetch_artifact(&repo_for(&server), JAR).await.unwrap();
    assert_eq!(fetched.sha1, sha1_hex(&body));
    assert_eq!(std::fs::read_to_string(&sidecar).unwrap(), sha1_hex(&body));
    assert_eq!(server.hits(&format!("{JAR}.sha1")), 1);
}

#[tokio::test]
async fn concurrent_fetches_of_one_path_download_once() {
    let server = StubServer::start();
    let body = jar_body();
    server.serve_artifact(JAR, &body, &sha1_hex(&body));

    let cache = tempdir().unwrap();
    let fetcher = ArtifactFetcher::new(cache.path()).unwrap();
    let repo = repo_for(&server);

    let (a, b) = tokio::join!(
        fetcher.fetch_artifact(&repo, JAR),
        fetcher.fetch_artifact(&repo, JAR)
    );
    assert_eq!(a.unwrap(), b.unwrap());
    assert_eq!(server.hits(JAR), 1);
}

#[tokio::test]
async fn requests_identity_encoding_and_names_the_tool() {
    let server = StubServer::start();
    let body = jar_body();
    server.serve_artifact(JAR, &body, &sha1_hex(&body));

    let cache = tempdir().unwrap();
    let fetcher = ArtifactFetcher::new(cache.path()).unwrap();
    fetcher.fetch_artifact(&repo_for(&server), JAR).await.unwrap();

    let head = server.last_request(JAR).unwrap().to_ascii_lowercase();
    assert!(head.contains("accept-encoding: identity"), "{head}");
    assert!(
        head.contains(&format!("user-agent: natives-redirect/{}", env!("CARGO_PKG_VERSION"))),
        "{head}"
    );
}
