// ─── natives-redirect Core ───
// Builds the per-platform native library redirect tables consumed by the launcher.
//
// Architecture:
//   core/
//     maven/      — Coordinate parser + repository descriptors (primary/mirror URLs)
//     downloader/ — Cached, SHA-1 verified artifact fetcher
//     library/    — Launcher library descriptors + coordinate resolver
//     redirect/   — Ordered redirect maps + LWJGL module list
//     platforms/  — The redirect rules of every supported platform
//     config.rs   — Settings file (cache dir, output, mirrors)

pub mod checksum;
pub mod config;
pub mod downloader;
pub mod error;
pub mod library;
pub mod maven;
pub mod platforms;
pub mod redirect;
