use std::fmt;

/// LWJGL 3 modules that Minecraft pulls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lwjgl {
    Base,
    Jemalloc,
    Openal,
    Opengl,
    Glfw,
    Stb,
    Tinyfd,
    Freetype,
}

impl Lwjgl {
    /// Modules used from Minecraft 1.13 up to 1.20.4.
    pub const BASE0: [Lwjgl; 7] = [
        Lwjgl::Base,
        Lwjgl::Jemalloc,
        Lwjgl::Openal,
        Lwjgl::Opengl,
        Lwjgl::Glfw,
        Lwjgl::Stb,
        Lwjgl::Tinyfd,
    ];

    /// `BASE0` plus FreeType, used since Minecraft 1.20.5.
    pub const BASE1: [Lwjgl; 8] = [
        Lwjgl::Base,
        Lwjgl::Jemalloc,
        Lwjgl::Openal,
        Lwjgl::Opengl,
        Lwjgl::Glfw,
        Lwjgl::Stb,
        Lwjgl::Tinyfd,
        Lwjgl::Freetype,
    ];

    pub fn artifact_id(self) -> &'static str {
        match self {
            Lwjgl::Base => "lwjgl",
            Lwjgl::Jemalloc => "lwjgl-jemalloc",
            Lwjgl::Openal => "lwjgl-openal",
            Lwjgl::Opengl => "lwjgl-opengl",
            Lwjgl::Glfw => "lwjgl-glfw",
            Lwjgl::Stb => "lwjgl-stb",
            Lwjgl::Tinyfd => "lwjgl-tinyfd",
            Lwjgl::Freetype => "lwjgl-freetype",
        }
    }

    /// `org.lwjgl:<artifact>:<version>`
    pub fn coordinate(self, version: &str) -> String {
        format!("{self}:{version}")
    }

    /// `org.lwjgl:<artifact>:<version>:<classifier>`
    pub fn classified(self, version: &str, classifier: &str) -> String {
        format!("{self}:{version}:{classifier}")
    }
}

impl fmt::Display for Lwjgl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "org.lwjgl:{}", self.artifact_id())
    }
}
