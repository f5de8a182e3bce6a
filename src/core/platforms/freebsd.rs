use super::rules::{redirect_lwjgl, Target, JINPUT_NATIVES, LINUX_TEXT2SPEECH};
use crate::core::error::NativesResult;
use crate::core::library::LibraryResolver;
use crate::core::redirect::{Lwjgl, RedirectMap, RedirectMapBuilder};

pub async fn x86_64(r: &LibraryResolver<'_>) -> NativesResult<RedirectMap> {
    let mut map = RedirectMapBuilder::new();
    let lwjgl3 = Target::new("3.3.4", "natives-freebsd");

    // Minecraft 1.13
    redirect_lwjgl(&mut map, r, &Lwjgl::BASE0, "3.1.6", "natives", lwjgl3).await?;
    // Minecraft 1.14 ~ 1.14.2
    redirect_lwjgl(&mut map, r, &Lwjgl::BASE0, "3.2.1", "natives", lwjgl3).await?;
    // Minecraft 1.14.3 ~ 1.18
    redirect_lwjgl(&mut map, r, &Lwjgl::BASE0, "3.2.2", "natives", lwjgl3).await?;
    // Minecraft 1.19 ~ 1.20.1
    redirect_lwjgl(&mut map, r, &Lwjgl::BASE0, "3.3.1", "natives-linux", lwjgl3).await?;
    // Minecraft 1.20.2 ~ 1.20.4
    redirect_lwjgl(&mut map, r, &Lwjgl::BASE0, "3.3.2", "natives-linux", lwjgl3).await?;
    // Minecraft 1.20.5 ~ 26.1-snapshot-7
    redirect_lwjgl(&mut map, r, &Lwjgl::BASE1, "3.3.3", "natives-linux", lwjgl3).await?;
    // Minecraft 26.1-snapshot-8+
    redirect_lwjgl(
        &mut map,
        r,
        &Lwjgl::BASE1,
        "3.4.1",
        "natives-linux",
        Target::new("3.4.1", "natives-freebsd"),
    )
    .await?;

    map.redirect_to_empty(JINPUT_NATIVES)
        .redirect_all_to_empty(LINUX_TEXT2SPEECH);
    Ok(map.build())
}
