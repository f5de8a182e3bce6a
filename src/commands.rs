use std::path::Path;

use tracing::info;

use crate::core::config::Settings;
use crate::core::downloader::ArtifactFetcher;
use crate::core::error::{NativesError, NativesResult};
use crate::core::library::{Library, LibraryResolver};
use crate::core::maven::{Repositories, Repository};
use crate::core::platforms::{self, NativesTable, Platform};

/// Resolve the redirect tables for `platforms` and write them to `output`.
///
/// An empty `platforms` slice means every platform.
pub async fn generate(
    settings: &Settings,
    output: &Path,
    platforms: &[Platform],
) -> NativesResult<NativesTable> {
    let fetcher = ArtifactFetcher::new(&settings.cache_dir)?;
    let repositories = Repositories::from_settings(settings);
    let resolver = LibraryResolver::new(&fetcher, &repositories);

    let selected = if platforms.is_empty() {
        &Platform::ALL[..]
    } else {
        platforms
    };
    let table = platforms::generate(&resolver, selected).await?;

    if let Some(parent) = output.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| NativesError::io(parent, e))?;
    }
    tokio::fs::write(output, table.to_json_pretty()?)
        .await
        .map_err(|e| NativesError::io(output, e))?;

    info!(
        "Wrote {} platform tables to {}",
        table.len(),
        output.display()
    );
    Ok(table)
}

/// Resolve a single coordinate into its library descriptor.
pub async fn fetch_library(
    settings: &Settings,
    coord: &str,
    repo: Repository,
) -> NativesResult<Library> {
    let fetcher = ArtifactFetcher::new(&settings.cache_dir)?;
    let repositories = Repositories::from_settings(settings);
    LibraryResolver::new(&fetcher, &repositories)
        .maven_library(coord, repo)
        .await
}
