use super::rules::{
    redirect_bundled, redirect_jna, redirect_lwjgl, redirect_lwjgl2, redirect_lwjgl_natives,
    Target, JINPUT_NATIVES, LINUX_TEXT2SPEECH, LWJGL2_VERSIONS,
};
use crate::core::error::NativesResult;
use crate::core::library::LibraryResolver;
use crate::core::maven::Repository;
use crate::core::redirect::{Lwjgl, RedirectMap, RedirectMapBuilder};

const JNA_VERSIONS: [&str; 3] = ["5.8.0", "5.10.0", "5.12.1"];

pub async fn arm64(r: &LibraryResolver<'_>) -> NativesResult<RedirectMap> {
    let mut map = RedirectMapBuilder::new();
    let lwjgl_3_3_2 = Target::new("3.3.2", "natives-linux-arm64").jars_from(Repository::Mojang);

    // Minecraft 1.13
    redirect_lwjgl(&mut map, r, &Lwjgl::BASE0, "3.1.6", "natives", lwjgl_3_3_2).await?;
    // Minecraft 1.14 ~ 1.14.2
    redirect_lwjgl(&mut map, r, &Lwjgl::BASE0, "3.2.1", "natives", lwjgl_3_3_2).await?;
    // Minecraft 1.14.3 ~ 1.18
    redirect_lwjgl(&mut map, r, &Lwjgl::BASE0, "3.2.2", "natives", lwjgl_3_3_2).await?;
    // Minecraft 1.19 ~ 1.20.1
    redirect_lwjgl(&mut map, r, &Lwjgl::BASE0, "3.3.1", "natives-linux", lwjgl_3_3_2).await?;
    // Minecraft 1.20.2+
    redirect_lwjgl_natives(&mut map, r, &Lwjgl::BASE0, "3.3.2", "natives-linux", lwjgl_3_3_2)
        .await?;
    // Minecraft 1.20.5 ~ 26.1-snapshot-7
    redirect_lwjgl_natives(
        &mut map,
        r,
        &Lwjgl::BASE1,
        "3.3.3",
        "natives-linux",
        Target::new("3.3.3", "natives-linux-arm64"),
    )
    .await?;
    // Minecraft 26.1-snapshot-8+
    redirect_lwjgl(
        &mut map,
        r,
        &Lwjgl::BASE1,
        "3.4.1",
        "natives-linux",
        Target::new("3.4.1", "natives-linux-arm64"),
    )
    .await?;

    // Minecraft 1.6 ~ 1.12
    let lwjgl2 = r.lwjgl_natives("linux", "arm64", "2.9.3").await?;
    redirect_lwjgl2(&mut map, &LWJGL2_VERSIONS, &lwjgl2);

    map.redirect_to_empty(JINPUT_NATIVES)
        .redirect_all_to_empty(LINUX_TEXT2SPEECH);
    Ok(map.build())
}

pub async fn arm32(r: &LibraryResolver<'_>) -> NativesResult<RedirectMap> {
    let mut map = RedirectMapBuilder::new();
    let lwjgl_3_2_3 = Target::new("3.2.3", "natives-linux-arm32");

    // Minecraft 1.13
    redirect_lwjgl(&mut map, r, &Lwjgl::BASE0, "3.1.6", "natives", lwjgl_3_2_3).await?;
    // Minecraft 1.14 ~ 1.14.2
    redirect_lwjgl(&mut map, r, &Lwjgl::BASE0, "3.2.1", "natives", lwjgl_3_2_3).await?;
    // Minecraft 1.14.3 ~ 1.18
    redirect_lwjgl(&mut map, r, &Lwjgl::BASE0, "3.2.2", "natives", lwjgl_3_2_3).await?;
    // Minecraft 1.19+
    redirect_lwjgl_natives(
        &mut map,
        r,
        &Lwjgl::BASE0,
        "3.3.1",
        "natives-linux",
        Target::new("3.3.1", "natives-linux-arm32"),
    )
    .await?;

    // Minecraft 1.6 ~ 1.12
    let lwjgl2 = r.lwjgl_natives("linux", "arm32", "2.9.3").await?;
    redirect_lwjgl2(&mut map, &LWJGL2_VERSIONS, &lwjgl2);

    map.redirect_to_empty(JINPUT_NATIVES)
        .redirect_all_to_empty(LINUX_TEXT2SPEECH);
    Ok(map.build())
}

pub async fn mips64el(r: &LibraryResolver<'_>) -> NativesResult<RedirectMap> {
    let mut map = RedirectMapBuilder::new();

    // Minecraft 1.6 ~ 1.12
    let lwjgl2 = r.lwjgl_natives("linux", "mips64el", "2.9.3-rc2").await?;
    redirect_lwjgl2(&mut map, &LWJGL2_VERSIONS, &lwjgl2);

    // Minecraft 1.13 ~ 1.19+
    let lwjgl3 = r.lwjgl_natives("linux", "mips64el", "3.3.1-rc2").await?;
    let jars = Some("3.3.1");

    // Minecraft 1.13
    redirect_bundled(&mut map, r, &Lwjgl::BASE0, "3.1.6", "natives", jars, &lwjgl3).await?;
    // Minecraft 1.14 ~ 1.14.2
    redirect_bundled(&mut map, r, &Lwjgl::BASE0, "3.2.1", "natives", jars, &lwjgl3).await?;
    // Minecraft 1.14.3 ~ 1.18
    redirect_bundled(&mut map, r, &Lwjgl::BASE0, "3.2.2", "natives", jars, &lwjgl3).await?;
    // Minecraft 1.19+
    redirect_bundled(&mut map, r, &Lwjgl::BASE0, "3.3.1", "natives-linux", None, &lwjgl3).await?;

    map.redirect_to_empty(JINPUT_NATIVES)
        .redirect_all_to_empty(LINUX_TEXT2SPEECH);
    Ok(map.build())
}

pub async fn loongarch64(r: &LibraryResolver<'_>) -> NativesResult<RedirectMap> {
    let mut map = RedirectMapBuilder::new();

    // Minecraft 1.6 ~ 1.12
    let lwjgl2 = r.lwjgl_natives("linux", "loongarch64", "2.9.3-rc2").await?;
    redirect_lwjgl2(&mut map, &LWJGL2_VERSIONS, &lwjgl2);

    // Minecraft 1.13 ~ 1.20.1
    let lwjgl_3_3_1 = r.lwjgl_natives("linux", "loongarch64", "3.3.1-rc1").await?;
    let jars = Some("3.3.1");

    // Minecraft 1.13
    redirect_bundled(&mut map, r, &Lwjgl::BASE0, "3.1.6", "natives", jars, &lwjgl_3_3_1).await?;
    // Minecraft 1.14 ~ 1.14.2
    redirect_bundled(&mut map, r, &Lwjgl::BASE0, "3.2.1", "natives", jars, &lwjgl_3_3_1).await?;
    // Minecraft 1.14.3 ~ 1.18
    redirect_bundled(&mut map, r, &Lwjgl::BASE0, "3.2.2", "natives", jars, &lwjgl_3_3_1).await?;
    // Minecraft 1.19 ~ 1.20.1
    redirect_bundled(
        &mut map,
        r,
        &Lwjgl::BASE0,
        "3.3.1",
        "natives-linux",
        None,
        &lwjgl_3_3_1,
    )
    .await?;

    let lwjgl_3_3_4 = r.lwjgl_natives("linux", "loongarch64", "3.3.4-rc2").await?;
    let jars = Some("3.3.4");

    // Minecraft 1.20.2 ~ 1.20.4
    redirect_bundled(
        &mut map,
        r,
        &Lwjgl::BASE0,
        "3.3.2",
        "natives-linux",
        jars,
        &lwjgl_3_3_4,
    )
    .await?;
    // Minecraft 1.20.5+
    redirect_bundled(
        &mut map,
        r,
        &Lwjgl::BASE1,
        "3.3.3",
        "natives-linux",
        jars,
        &lwjgl_3_3_4,
    )
    .await?;

    let jna = r
        .maven_library("net.java.dev.jna:jna:5.13.0", Repository::MavenCentral)
        .await?;
    let jna_platform = r
        .maven_library("net.java.dev.jna:jna-platform:5.13.0", Repository::MavenCentral)
        .await?;
    redirect_jna(&mut map, &JNA_VERSIONS, &jna, &jna_platform);

    map.redirect_to_empty(JINPUT_NATIVES)
        .redirect_all_to_empty(LINUX_TEXT2SPEECH);
    Ok(map.build())
}

/// LoongArch64 old-world ABI.
pub async fn loongarch64_ow(r: &LibraryResolver<'_>) -> NativesResult<RedirectMap> {
    let mut map = RedirectMapBuilder::new();

    // Minecraft 1.6 ~ 1.12
    let lwjgl2 = r.lwjgl_natives("linux", "loongarch64", "2.9.3-rc1").await?;
    redirect_lwjgl2(&mut map, &LWJGL2_VERSIONS, &lwjgl2);

    // Minecraft 1.13 ~ 1.19+
    let lwjgl3 = r.lwjgl_natives("linux", "loongarch64_ow", "3.3.1-rc1").await?;
    let jars = Some("3.3.1");

    // Minecraft 1.13
    redirect_bundled(&mut map, r, &Lwjgl::BASE0, "3.1.6", "natives", jars, &lwjgl3).await?;
    // Minecraft 1.14 ~ 1.14.2
    redirect_bundled(&mut map, r, &Lwjgl::BASE0, "3.2.1", "natives", jars, &lwjgl3).await?;
    // Minecraft 1.14.3 ~ 1.18
    redirect_bundled(&mut map, r, &Lwjgl::BASE0, "3.2.2", "natives", jars, &lwjgl3).await?;
    // Minecraft 1.19+
    redirect_bundled(&mut map, r, &Lwjgl::BASE0, "3.3.1", "natives-linux", None, &lwjgl3).await?;

    let jna = r
        .maven_library(
            "org.glavo.hmcl:jna:5.13.0-rc1-linux-loongarch64_ow",
            Repository::MavenCentral,
        )
        .await?;
    let jna_platform = r
        .maven_library("net.java.dev.jna:jna-platform:5.13.0", Repository::MavenCentral)
        .await?;
    redirect_jna(&mut map, &JNA_VERSIONS, &jna, &jna_platform);

    map.redirect_to_empty(JINPUT_NATIVES)
        .redirect_all_to_empty(LINUX_TEXT2SPEECH);
    Ok(map.build())
}

pub async fn riscv64(r: &LibraryResolver<'_>) -> NativesResult<RedirectMap> {
    let mut map = RedirectMapBuilder::new();
    let lwjgl_3_3_4 = Target::new("3.3.4", "natives-linux-riscv64");

    // Minecraft 1.13
    redirect_lwjgl(&mut map, r, &Lwjgl::BASE0, "3.1.6", "natives", lwjgl_3_3_4).await?;
    // Minecraft 1.14 ~ 1.14.2
    redirect_lwjgl(&mut map, r, &Lwjgl::BASE0, "3.2.1", "natives", lwjgl_3_3_4).await?;
    // Minecraft 1.14.3 ~ 1.18
    redirect_lwjgl(&mut map, r, &Lwjgl::BASE0, "3.2.2", "natives", lwjgl_3_3_4).await?;
    // Minecraft 1.19 ~ 1.20.1
    redirect_lwjgl(&mut map, r, &Lwjgl::BASE0, "3.3.1", "natives-linux", lwjgl_3_3_4).await?;
    // Minecraft 1.20.2 ~ 1.20.4
    redirect_lwjgl(&mut map, r, &Lwjgl::BASE0, "3.3.2", "natives-linux", lwjgl_3_3_4).await?;
    // Minecraft 1.20.5 ~ 26.1-snapshot-7
    redirect_lwjgl(&mut map, r, &Lwjgl::BASE1, "3.3.3", "natives-linux", lwjgl_3_3_4).await?;
    // Minecraft 26.1-snapshot-8+
    redirect_lwjgl(
        &mut map,
        r,
        &Lwjgl::BASE1,
        "3.4.1",
        "natives-linux",
        Target::new("3.4.1", "natives-linux-riscv64"),
    )
    .await?;

    let oshi = r
        .maven_library("com.github.oshi:oshi-core:6.8.0", Repository::MavenCentral)
        .await?;
    map.redirect("com.github.oshi:oshi-core:6.6.5", oshi);

    map.redirect_to_empty(JINPUT_NATIVES)
        .redirect_all_to_empty(LINUX_TEXT2SPEECH);
    Ok(map.build())
}
