mod model;
mod resolver;

pub use model::{Artifact, ExtractRules, Library, LibraryDownloads};
pub use resolver::LibraryResolver;
