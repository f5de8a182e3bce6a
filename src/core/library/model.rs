use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A downloadable file as the launcher sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub path: String,
    pub url: String,
    pub sha1: String,
    pub size: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryDownloads {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact: Option<Artifact>,
    /// Platform classifier → native jar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifiers: Option<BTreeMap<String, Artifact>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractRules {
    /// Path prefixes skipped when unpacking natives.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// A replacement library entry in the launcher's version-JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downloads: Option<LibraryDownloads>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extract: Option<ExtractRules>,
    /// OS name → classifier key in `downloads.classifiers`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub natives: Option<BTreeMap<String, String>>,
}

impl Library {
    /// A library with a name and nothing to download.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            downloads: None,
            extract: None,
            natives: None,
        }
    }

    /// A plain library whose only download is `artifact`.
    pub fn with_artifact(name: impl Into<String>, artifact: Artifact) -> Self {
        Self {
            downloads: Some(LibraryDownloads {
                artifact: Some(artifact),
                classifiers: None,
            }),
            ..Self::empty(name)
        }
    }

    /// A natives-only library: one classifier, extracted without `META-INF/`,
    /// bound to `os`.
    pub fn natives(
        name: impl Into<String>,
        os: &str,
        classifier: &str,
        artifact: Artifact,
    ) -> Self {
        Self {
            downloads: Some(LibraryDownloads {
                artifact: None,
                classifiers: Some(BTreeMap::from([(classifier.to_string(), artifact)])),
            }),
            extract: Some(ExtractRules {
                exclude: vec!["META-INF/".to_string()],
            }),
            natives: Some(BTreeMap::from([(os.to_string(), classifier.to_string())])),
            ..Self::empty(name)
        }
    }
}
