use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::core::library::Library;

/// Ordered `dependency → replacement` rules for one platform.
///
/// `None` means the dependency is dropped on that platform and serializes as
/// `null`. Keys keep the order in which they were first redirected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectMap {
    entries: Vec<(String, Option<Library>)>,
}

impl RedirectMap {
    /// `None` if `key` is not redirected, `Some(None)` if it is removed.
    pub fn get(&self, key: &str) -> Option<Option<&Library>> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, lib)| lib.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Library>)> {
        self.entries.iter().map(|(k, lib)| (k.as_str(), lib.as_ref()))
    }

    fn insert(&mut self, key: String, library: Option<Library>) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = library,
            None => self.entries.push((key, library)),
        }
    }
}

impl Serialize for RedirectMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, library) in &self.entries {
            map.serialize_entry(key, library)?;
        }
        map.end()
    }
}

/// Collects redirect rules in declaration order.
#[derive(Debug, Default)]
pub struct RedirectMapBuilder {
    map: RedirectMap,
}

impl RedirectMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace `lib` with `library`.
    pub fn redirect(&mut self, lib: impl Into<String>, library: Library) -> &mut Self {
        self.map.insert(lib.into(), Some(library));
        self
    }

    /// Drop `lib` entirely.
    pub fn redirect_to_empty(&mut self, lib: impl Into<String>) -> &mut Self {
        self.map.insert(lib.into(), None);
        self
    }

    pub fn redirect_all_to_empty<I, S>(&mut self, libs: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for lib in libs {
            self.redirect_to_empty(lib);
        }
        self
    }

    pub fn build(self) -> RedirectMap {
        self.map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_declaration_order_and_nulls() {
        let mut builder = RedirectMapBuilder::new();
        builder
            .redirect("org.lwjgl:lwjgl:3.2.2", Library::empty("org.lwjgl:lwjgl:3.3.4"))
            .redirect_to_empty("net.java.jinput:jinput-platform:2.0.5:natives")
            .redirect("mesa-loader", Library::empty("org.glavo:mesa-loader-windows:25.0.3:x64"));
        let map = builder.build();

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(
            json,
            r#"{"org.lwjgl:lwjgl:3.2.2":{"name":"org.lwjgl:lwjgl:3.3.4"},"net.java.jinput:jinput-platform:2.0.5:natives":null,"mesa-loader":{"name":"org.glavo:mesa-loader-windows:25.0.3:x64"}}"#
        );
    }

    #[test]
    fn redirecting_again_replaces_in_place() {
        let mut builder = RedirectMapBuilder::new();
        builder
            .redirect("a", Library::empty("first"))
            .redirect_to_empty("b")
            .redirect_to_empty("a");
        let map = builder.build();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(None));
        assert_eq!(map.iter().map(|(k, _)| k).collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(map.get("c"), None);
    }

    #[test]
    fn redirect_all_to_empty_marks_every_key() {
        let mut builder = RedirectMapBuilder::new();
        builder.redirect_all_to_empty([
            "com.mojang:text2speech:1.10.3:natives",
            "com.mojang:text2speech:1.11.3:natives",
        ]);
        let map = builder.build();
        assert!(map.iter().all(|(_, lib)| lib.is_none()));
        assert_eq!(map.len(), 2);
    }
}
