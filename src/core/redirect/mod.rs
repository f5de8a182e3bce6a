mod lwjgl;
mod map;

pub use lwjgl::Lwjgl;
pub use map::{RedirectMap, RedirectMapBuilder};
