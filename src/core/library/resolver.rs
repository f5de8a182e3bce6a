use tracing::debug;

use super::model::{Artifact, Library};
use crate::core::downloader::ArtifactFetcher;
use crate::core::error::{NativesError, NativesResult};
use crate::core::maven::{MavenArtifact, Repositories, Repository};

/// Group under which the launcher publishes its own rebuilt natives.
const HMCL_GROUP: &str = "org.glavo.hmcl";

/// Turns Maven coordinates into verified [`Library`] descriptors.
pub struct LibraryResolver<'a> {
    fetcher: &'a ArtifactFetcher,
    repositories: &'a Repositories,
}

impl<'a> LibraryResolver<'a> {
    pub fn new(fetcher: &'a ArtifactFetcher, repositories: &'a Repositories) -> Self {
        Self {
            fetcher,
            repositories,
        }
    }

    /// Fetch `artifact` from `repo` and describe it.
    pub async fn resolve_artifact(
        &self,
        artifact: &MavenArtifact,
        repo: Repository,
    ) -> NativesResult<Artifact> {
        let repo = self.repositories.get(repo);
        let path = artifact.relative_path();
        let fetched = self.fetcher.fetch_artifact(repo, &path).await?;
        debug!("Resolved {} ({} bytes)", artifact, fetched.size);

        Ok(Artifact {
            url: repo.artifact_url(&path),
            path,
            sha1: fetched.sha1,
            size: fetched.size,
        })
    }

    /// `{"name": coord, "downloads": {"artifact": …}}` for a released artifact.
    pub async fn maven_library(&self, coord: &str, repo: Repository) -> NativesResult<Library> {
        let artifact = MavenArtifact::parse(coord)?;
        let resolved = self.resolve_artifact(&artifact, repo).await?;
        Ok(Library::with_artifact(coord, resolved))
    }

    /// Same as [`Self::maven_library`] for a timestamped snapshot build.
    pub async fn maven_snapshot_library(
        &self,
        coord: &str,
        snapshot: &str,
        repo: Repository,
    ) -> NativesResult<Library> {
        let artifact = MavenArtifact::parse(coord)?.with_snapshot(snapshot);
        let resolved = self.resolve_artifact(&artifact, repo).await?;
        Ok(Library::with_artifact(coord, resolved))
    }

    /// Bundled LWJGL natives for one platform.
    ///
    /// The jar is published as `org.glavo.hmcl:lwjgl{2,3}-natives:{version}-{os}-{arch}`
    /// but the launcher stores it under the classifier layout
    /// `…/{version}/lwjgl{2,3}-natives-{version}-{os}-{arch}.jar`.
    pub async fn lwjgl_natives(&self, os: &str, arch: &str, version: &str) -> NativesResult<Library> {
        let artifact_id = match version.chars().next() {
            Some('2') => "lwjgl2-natives",
            Some('3') => "lwjgl3-natives",
            _ => return Err(NativesError::UnsupportedLwjglVersion(version.to_string())),
        };

        let classifier = format!("{os}-{arch}");
        let published =
            MavenArtifact::parse(&format!("{HMCL_GROUP}:{artifact_id}:{version}-{classifier}"))?;
        let resolved = self
            .resolve_artifact(&published, Repository::MavenCentral)
            .await?;

        let local = MavenArtifact::parse(&format!(
            "{HMCL_GROUP}:{artifact_id}:{version}:{classifier}"
        ))?;
        let artifact = Artifact {
            path: local.relative_path(),
            ..resolved
        };

        Ok(Library::natives(
            format!("{HMCL_GROUP}:{artifact_id}:{version}"),
            os,
            &classifier,
            artifact,
        ))
    }
}
