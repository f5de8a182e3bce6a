use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::config::Settings;
use crate::core::error::NativesError;

/// Well-known Maven repositories the redirect tables pull from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Repository {
    MavenCentral,
    Mojang,
    SonatypePublic,
    SonatypeSnapshots,
}

impl Repository {
    pub const ALL: [Repository; 4] = [
        Repository::MavenCentral,
        Repository::Mojang,
        Repository::SonatypePublic,
        Repository::SonatypeSnapshots,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Repository::MavenCentral => "maven-central",
            Repository::Mojang => "mojang",
            Repository::SonatypePublic => "sonatype-public",
            Repository::SonatypeSnapshots => "sonatype-snapshots",
        }
    }

    /// Canonical URL, written into generated descriptors.
    pub fn url(self) -> &'static str {
        match self {
            Repository::MavenCentral => "https://repo1.maven.org/maven2",
            Repository::Mojang => "https://libraries.minecraft.net",
            Repository::SonatypePublic => "https://oss.sonatype.org/content/groups/public",
            Repository::SonatypeSnapshots => {
                "https://oss.sonatype.org/content/repositories/snapshots"
            }
        }
    }

    pub fn default_mirror(self) -> Option<&'static str> {
        match self {
            Repository::MavenCentral => Some("https://maven.aliyun.com/repository/central"),
            _ => None,
        }
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Repository {
    type Err = NativesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Repository::ALL
            .into_iter()
            .find(|r| r.id() == s)
            .ok_or_else(|| NativesError::UnknownRepository(s.to_string()))
    }
}

/// A named remote source. Transfers go through `mirror_url` when set while
/// `url` is what ends up in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MavenRepo {
    pub name: String,
    pub url: String,
    pub mirror_url: Option<String>,
}

impl MavenRepo {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            mirror_url: None,
        }
    }

    pub fn with_mirror(mut self, mirror_url: impl Into<String>) -> Self {
        self.mirror_url = Some(mirror_url.into());
        self
    }

    /// URL recorded in descriptors for `path`.
    pub fn artifact_url(&self, path: &str) -> String {
        join_url(&self.url, path)
    }

    /// URL actually fetched for `path`.
    pub fn transfer_url(&self, path: &str) -> String {
        join_url(self.mirror_url.as_deref().unwrap_or(&self.url), path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Resolved descriptors for every [`Repository`].
#[derive(Debug, Clone)]
pub struct Repositories {
    maven_central: MavenRepo,
    mojang: MavenRepo,
    sonatype_public: MavenRepo,
    sonatype_snapshots: MavenRepo,
}

impl Repositories {
    pub fn from_settings(settings: &Settings) -> Self {
        let resolve = |repo: Repository| {
            let descriptor = MavenRepo::new(repo.id(), repo.url());
            let mirror = settings
                .mirrors
                .get(&repo)
                .map(String::as_str)
                .or_else(|| repo.default_mirror());
            match mirror {
                Some(mirror) if settings.use_mirrors => descriptor.with_mirror(mirror),
                _ => descriptor,
            }
        };

        Self {
            maven_central: resolve(Repository::MavenCentral),
            mojang: resolve(Repository::Mojang),
            sonatype_public: resolve(Repository::SonatypePublic),
            sonatype_snapshots: resolve(Repository::SonatypeSnapshots),
        }
    }

    pub fn get(&self, repo: Repository) -> &MavenRepo {
        match repo {
            Repository::MavenCentral => &self.maven_central,
            Repository::Mojang => &self.mojang,
            Repository::SonatypePublic => &self.sonatype_public,
            Repository::SonatypeSnapshots => &self.sonatype_snapshots,
        }
    }
}

impl Default for Repositories {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
