mod client;

pub use client::{ArtifactFetcher, FetchedArtifact};
