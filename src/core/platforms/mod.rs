// ─── Platform Tables ───
// One redirect map per platform that Mojang ships no (or broken) natives for.

mod freebsd;
mod linux;
mod macos;
mod rules;
mod windows;

use std::fmt;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::info;

use crate::core::error::{NativesError, NativesResult};
use crate::core::library::LibraryResolver;
use crate::core::redirect::RedirectMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    LinuxArm64,
    LinuxArm32,
    LinuxMips64el,
    LinuxLoongArch64,
    /// LoongArch64 old-world ABI.
    LinuxLoongArch64Ow,
    LinuxRiscv64,
    WindowsX86_64,
    WindowsX86,
    WindowsArm64,
    MacosArm64,
    FreebsdX86_64,
}

impl Platform {
    /// Every platform, in output order.
    pub const ALL: [Platform; 11] = [
        Platform::LinuxArm64,
        Platform::LinuxArm32,
        Platform::LinuxMips64el,
        Platform::LinuxLoongArch64,
        Platform::LinuxLoongArch64Ow,
        Platform::LinuxRiscv64,
        Platform::WindowsX86_64,
        Platform::WindowsX86,
        Platform::WindowsArm64,
        Platform::MacosArm64,
        Platform::FreebsdX86_64,
    ];

    /// Key used in the generated JSON.
    pub fn name(self) -> &'static str {
        match self {
            Platform::LinuxArm64 => "linux-arm64",
            Platform::LinuxArm32 => "linux-arm32",
            Platform::LinuxMips64el => "linux-mips64el",
            Platform::LinuxLoongArch64 => "linux-loongarch64",
            Platform::LinuxLoongArch64Ow => "linux-loongarch64_ow",
            Platform::LinuxRiscv64 => "linux-riscv64",
            Platform::WindowsX86_64 => "windows-x86_64",
            Platform::WindowsX86 => "windows-x86",
            Platform::WindowsArm64 => "windows-arm64",
            Platform::MacosArm64 => "macos-arm64",
            Platform::FreebsdX86_64 => "freebsd-x86_64",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = NativesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| NativesError::UnknownPlatform(s.to_string()))
    }
}

/// The full descriptor: platform name → redirect map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NativesTable {
    platforms: Vec<(Platform, RedirectMap)>,
}

impl NativesTable {
    pub fn get(&self, platform: Platform) -> Option<&RedirectMap> {
        self.platforms
            .iter()
            .find(|(p, _)| *p == platform)
            .map(|(_, map)| map)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Platform, &RedirectMap)> {
        self.platforms.iter().map(|(p, map)| (*p, map))
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    /// Pretty-printed JSON with removed dependencies kept as `null`.
    pub fn to_json_pretty(&self) -> NativesResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for NativesTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.platforms.len()))?;
        for (platform, redirects) in &self.platforms {
            map.serialize_entry(platform.name(), redirects)?;
        }
        map.end()
    }
}

/// Build the redirect map for a single platform.
pub async fn generate_platform(
    resolver: &LibraryResolver<'_>,
    platform: Platform,
) -> NativesResult<RedirectMap> {
    match platform {
        Platform::LinuxArm64 => linux::arm64(resolver).await,
        Platform::LinuxArm32 => linux::arm32(resolver).await,
        Platform::LinuxMips64el => linux::mips64el(resolver).await,
        Platform::LinuxLoongArch64 => linux::loongarch64(resolver).await,
        Platform::LinuxLoongArch64Ow => linux::loongarch64_ow(resolver).await,
        Platform::LinuxRiscv64 => linux::riscv64(resolver).await,
        Platform::WindowsX86_64 => windows::x86_64(resolver).await,
        Platform::WindowsX86 => windows::x86(resolver).await,
        Platform::WindowsArm64 => windows::arm64(resolver).await,
        Platform::MacosArm64 => macos::arm64(resolver).await,
        Platform::FreebsdX86_64 => freebsd::x86_64(resolver).await,
    }
}

/// Build the tables for `platforms` one after another, in output order.
///
/// The first failing fetch aborts the whole run.
pub async fn generate(
    resolver: &LibraryResolver<'_>,
    platforms: &[Platform],
) -> NativesResult<NativesTable> {
    let mut table = NativesTable::default();

    for platform in Platform::ALL.into_iter().filter(|p| platforms.contains(p)) {
        info!("Generating redirect table for {}", platform);
        let map = generate_platform(resolver, platform).await?;
        info!("{}: {} redirect rules", platform, map.len());
        table.platforms.push((platform, map));
    }

    Ok(table)
}
