//! Rule shapes shared by several platform tables.

use crate::core::error::NativesResult;
use crate::core::library::{Library, LibraryResolver};
use crate::core::maven::Repository;
use crate::core::redirect::{Lwjgl, RedirectMapBuilder};

/// LWJGL 2 natives artifact used by Minecraft 1.6 ~ 1.12.
pub const LWJGL2_PLATFORM: &str = "org.lwjgl.lwjgl:lwjgl-platform";

/// LWJGL 2 versions shipped to Linux and Windows.
pub const LWJGL2_VERSIONS: [&str; 3] = ["2.9.0", "2.9.1", "2.9.4-nightly-20150209"];

pub const JINPUT_NATIVES: &str = "net.java.jinput:jinput-platform:2.0.5:natives";

pub const LINUX_TEXT2SPEECH: [&str; 4] = [
    "com.mojang:text2speech:1.10.3:natives",
    "com.mojang:text2speech:1.11.3:natives",
    "com.mojang:text2speech:1.12.4:natives",
    "com.mojang:text2speech:1.13.9:natives-linux",
];

/// Replacement LWJGL 3 release and where to get it.
#[derive(Debug, Clone, Copy)]
pub struct Target<'a> {
    pub version: &'a str,
    /// Classifier of the replacement natives jar.
    pub classifier: &'a str,
    pub jar_repo: Repository,
    pub natives_repo: Repository,
}

impl<'a> Target<'a> {
    pub fn new(version: &'a str, classifier: &'a str) -> Self {
        Self {
            version,
            classifier,
            jar_repo: Repository::MavenCentral,
            natives_repo: Repository::MavenCentral,
        }
    }

    pub fn jars_from(mut self, repo: Repository) -> Self {
        self.jar_repo = repo;
        self
    }

    pub fn natives_from(mut self, repo: Repository) -> Self {
        self.natives_repo = repo;
        self
    }
}

/// For every module redirect `{lib}:{from}` and `{lib}:{from}:{from_natives}`
/// to the target's jar and natives.
pub async fn redirect_lwjgl(
    map: &mut RedirectMapBuilder,
    r: &LibraryResolver<'_>,
    modules: &[Lwjgl],
    from: &str,
    from_natives: &str,
    to: Target<'_>,
) -> NativesResult<()> {
    for lib in modules {
        let jar = r
            .maven_library(&lib.coordinate(to.version), to.jar_repo)
            .await?;
        map.redirect(lib.coordinate(from), jar);

        let natives = r
            .maven_library(&lib.classified(to.version, to.classifier), to.natives_repo)
            .await?;
        map.redirect(lib.classified(from, from_natives), natives);
    }
    Ok(())
}

/// Like [`redirect_lwjgl`] but leaves the Java jars alone.
pub async fn redirect_lwjgl_natives(
    map: &mut RedirectMapBuilder,
    r: &LibraryResolver<'_>,
    modules: &[Lwjgl],
    from: &str,
    from_natives: &str,
    to: Target<'_>,
) -> NativesResult<()> {
    for lib in modules {
        let natives = r
            .maven_library(&lib.classified(to.version, to.classifier), to.natives_repo)
            .await?;
        map.redirect(lib.classified(from, from_natives), natives);
    }
    Ok(())
}

/// For platforms with one bundled natives jar: the base module's natives
/// point at `bundled`, every other module's natives are dropped. When
/// `jar_version` is set the Java jars are moved to that version too.
pub async fn redirect_bundled(
    map: &mut RedirectMapBuilder,
    r: &LibraryResolver<'_>,
    modules: &[Lwjgl],
    from: &str,
    from_natives: &str,
    jar_version: Option<&str>,
    bundled: &Library,
) -> NativesResult<()> {
    for lib in modules {
        if let Some(version) = jar_version {
            let jar = r
                .maven_library(&lib.coordinate(version), Repository::MavenCentral)
                .await?;
            map.redirect(lib.coordinate(from), jar);
        }

        let key = lib.classified(from, from_natives);
        if *lib == Lwjgl::Base {
            map.redirect(key, bundled.clone());
        } else {
            map.redirect_to_empty(key);
        }
    }
    Ok(())
}

/// Point every listed LWJGL 2 `lwjgl-platform` natives version at `natives`.
pub fn redirect_lwjgl2(map: &mut RedirectMapBuilder, versions: &[&str], natives: &Library) {
    for version in versions {
        map.redirect(
            format!("{LWJGL2_PLATFORM}:{version}:natives"),
            natives.clone(),
        );
    }
}

/// Redirect each listed JNA version to the given `jna` / `jna-platform` pair.
pub fn redirect_jna(
    map: &mut RedirectMapBuilder,
    versions: &[&str],
    jna: &Library,
    jna_platform: &Library,
) {
    for version in versions {
        map.redirect(format!("net.java.dev.jna:jna:{version}"), jna.clone());
        map.redirect(
            format!("net.java.dev.jna:jna-platform:{version}"),
            jna_platform.clone(),
        );
    }
}
