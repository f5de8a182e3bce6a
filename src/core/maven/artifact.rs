use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::{NativesError, NativesResult};

/// Represents a fully parsed Maven coordinate.
///
/// Supported formats:
///   `groupId:artifactId:version`
///   `groupId:artifactId:version:classifier`
///   `groupId:artifactId:version:classifier@extension`
///   `groupId:artifactId:version@extension`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MavenArtifact {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub classifier: Option<String>,
    /// File extension. Defaults to `"jar"`.
    pub extension: String,
    /// Timestamped snapshot version used in the file name instead of `version`.
    pub snapshot: Option<String>,
}

impl MavenArtifact {
    /// Parse a Maven coordinate string.
    ///
    /// # Examples
    /// ```
    /// use natives_redirect::core::maven::MavenArtifact;
    ///
    /// let a = MavenArtifact::parse("org.lwjgl:lwjgl:3.3.2").unwrap();
    /// assert_eq!(a.relative_path(), "org/lwjgl/lwjgl/3.3.2/lwjgl-3.3.2.jar");
    /// ```
    pub fn parse(coord: &str) -> NativesResult<Self> {
        let invalid = || NativesError::InvalidMavenCoordinate(coord.to_string());

        let (coord_part, extension) = match coord.rsplit_once('@') {
            Some((head, ext)) if !ext.is_empty() => (head, ext),
            Some(_) => return Err(invalid()),
            None => (coord, "jar"),
        };

        let parts: Vec<&str> = coord_part.split(':').collect();
        if parts.iter().any(|p| !is_path_safe(p)) {
            return Err(invalid());
        }

        let (group_id, artifact_id, version, classifier) = match parts.as_slice() {
            [g, a, v] => (*g, *a, *v, None),
            [g, a, v, c] => (*g, *a, *v, Some(c.to_string())),
            _ => return Err(invalid()),
        };

        Ok(Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
            classifier,
            extension: extension.to_string(),
            snapshot: None,
        })
    }

    /// Return a copy whose file name uses the given snapshot timestamp.
    pub fn with_snapshot(&self, snapshot: &str) -> Self {
        let mut clone = self.clone();
        clone.snapshot = Some(snapshot.to_string());
        clone
    }

    /// Construct the group path portion (`org/lwjgl`).
    pub fn group_path(&self) -> String {
        self.group_id.replace('.', "/")
    }

    /// Build the artifact filename.
    ///
    /// `artifactId-version[-classifier].extension`
    pub fn filename(&self) -> String {
        let version = self.snapshot.as_deref().unwrap_or(&self.version);
        match &self.classifier {
            Some(c) => format!("{}-{}-{}.{}", self.artifact_id, version, c, self.extension),
            None => format!("{}-{}.{}", self.artifact_id, version, self.extension),
        }
    }

    /// Path relative to a repository root.
    ///
    /// Mirrors Maven's repository layout:
    /// `<group_path>/<artifact_id>/<version>/<filename>`
    pub fn relative_path(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.group_path(),
            self.artifact_id,
            self.version,
            self.filename()
        )
    }
}

/// A coordinate part must map to plain path segments: no separators and no
/// empty dot-separated segment (which also rules out `.` and `..`).
fn is_path_safe(part: &str) -> bool {
    !part.contains(['/', '\\']) && part.split('.').all(|segment| !segment.is_empty())
}

impl fmt::Display for MavenArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)?;
        if let Some(c) = &self.classifier {
            write!(f, ":{}", c)?;
        }
        if self.extension != "jar" {
            write!(f, "@{}", self.extension)?;
        }
        Ok(())
    }
}
