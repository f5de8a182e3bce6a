use super::rules::{redirect_lwjgl, redirect_lwjgl2, Target, JINPUT_NATIVES, LWJGL2_VERSIONS};
use crate::core::error::NativesResult;
use crate::core::library::LibraryResolver;
use crate::core::maven::Repository;
use crate::core::redirect::{Lwjgl, RedirectMap, RedirectMapBuilder};

/// Launcher-side keys for the software OpenGL renderers.
const MESA_LOADER: &str = "mesa-loader";
const SOFTWARE_RENDERER_LOADER: &str = "software-renderer-loader";

fn mesa_loader(arch: &str) -> String {
    format!("org.glavo:mesa-loader-windows:25.0.3:{arch}")
}

pub async fn x86_64(r: &LibraryResolver<'_>) -> NativesResult<RedirectMap> {
    let mut map = RedirectMapBuilder::new();

    let mesa = r
        .maven_library(&mesa_loader("x64"), Repository::MavenCentral)
        .await?;
    map.redirect(MESA_LOADER, mesa);

    let llvmpipe = r
        .maven_library("org.glavo:llvmpipe-loader:1.0", Repository::MavenCentral)
        .await?;
    map.redirect(SOFTWARE_RENDERER_LOADER, llvmpipe);

    Ok(map.build())
}

pub async fn x86(r: &LibraryResolver<'_>) -> NativesResult<RedirectMap> {
    let mut map = RedirectMapBuilder::new();

    let mesa = r
        .maven_library(&mesa_loader("x86"), Repository::MavenCentral)
        .await?;
    map.redirect(MESA_LOADER, mesa);

    Ok(map.build())
}

pub async fn arm64(r: &LibraryResolver<'_>) -> NativesResult<RedirectMap> {
    let mut map = RedirectMapBuilder::new();

    // Minecraft 1.6 ~ 1.12
    let lwjgl2 = r.lwjgl_natives("windows", "arm64", "2.9.3-rc1").await?;
    redirect_lwjgl2(&mut map, &LWJGL2_VERSIONS, &lwjgl2);

    let lwjgl_3_3_2 = Target::new("3.3.2", "natives-windows-arm64")
        .jars_from(Repository::Mojang)
        .natives_from(Repository::Mojang);

    // Minecraft 1.13
    redirect_lwjgl(&mut map, r, &Lwjgl::BASE0, "3.1.6", "natives", lwjgl_3_3_2).await?;
    // Minecraft 1.14 ~ 1.18
    redirect_lwjgl(&mut map, r, &Lwjgl::BASE0, "3.2.2", "natives", lwjgl_3_3_2).await?;

    map.redirect_all_to_empty([
        JINPUT_NATIVES,
        "com.mojang:text2speech:1.10.3:natives",
        "com.mojang:text2speech:1.11.3:natives",
        "com.mojang:text2speech:1.12.4:natives",
        "com.mojang:text2speech:1.13.9:natives-windows",
    ]);

    let mesa = r
        .maven_library(&mesa_loader("arm64"), Repository::MavenCentral)
        .await?;
    map.redirect(MESA_LOADER, mesa);

    Ok(map.build())
}
