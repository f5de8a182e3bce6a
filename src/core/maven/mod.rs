mod artifact;
mod repository;

pub use artifact::MavenArtifact;
pub use repository::{MavenRepo, Repositories, Repository};
