use super::rules::{redirect_lwjgl2, JINPUT_NATIVES};
use crate::core::error::NativesResult;
use crate::core::library::LibraryResolver;
use crate::core::maven::Repository;
use crate::core::redirect::{Lwjgl, RedirectMap, RedirectMapBuilder};

const LWJGL2_VERSIONS: [&str; 3] = [
    "2.9.1-nightly-20130708-debug3",
    "2.9.1",
    "2.9.2-nightly-20140822",
];

/// GLFW build patched to run on Apple Silicon with old LWJGL callers.
const MMACHINA_GLFW: &str = "org.glavo.hmcl.mmachina:lwjgl-glfw:3.3.1-mmachina.1";

pub async fn arm64(r: &LibraryResolver<'_>) -> NativesResult<RedirectMap> {
    let mut map = RedirectMapBuilder::new();

    // Minecraft 1.6 ~ 1.12
    let lwjgl2 = r.lwjgl_natives("osx", "arm64", "2.9.3-rc1").await?;
    redirect_lwjgl2(&mut map, &LWJGL2_VERSIONS, &lwjgl2);

    // Minecraft 1.13 (3.1.6) and 1.14 ~ 1.18 (3.2.1)
    for from in ["3.1.6", "3.2.1"] {
        for lib in Lwjgl::BASE0 {
            let jar = if lib == Lwjgl::Glfw {
                r.maven_library(MMACHINA_GLFW, Repository::MavenCentral)
                    .await?
            } else {
                r.maven_library(&lib.coordinate("3.3.1"), Repository::MavenCentral)
                    .await?
            };
            map.redirect(lib.coordinate(from), jar);

            let natives = r
                .maven_library(
                    &lib.classified("3.3.1", "natives-macos-arm64"),
                    Repository::Mojang,
                )
                .await?;
            map.redirect(lib.classified(from, "natives"), natives);
        }
    }

    let objc_bridge = r
        .maven_library(
            "org.glavo.hmcl.mmachina:java-objc-bridge:1.1.0-mmachina.1",
            Repository::MavenCentral,
        )
        .await?;
    map.redirect("ca.weblite:java-objc-bridge:1.0.0", objc_bridge)
        .redirect_to_empty("ca.weblite:java-objc-bridge:1.0.0:natives");

    let text2speech = r
        .maven_library("com.mojang:text2speech:1.11.3", Repository::Mojang)
        .await?;
    map.redirect("com.mojang:text2speech:1.10.3", text2speech);

    map.redirect_all_to_empty([
        JINPUT_NATIVES,
        "com.mojang:text2speech:1.10.3:natives",
        "com.mojang:text2speech:1.11.3:natives",
        "com.mojang:text2speech:1.12.4:natives",
    ]);

    Ok(map.build())
}
