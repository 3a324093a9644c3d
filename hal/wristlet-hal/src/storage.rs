//! Resource storage abstractions
//!
//! Some screens draw with fonts or images that live in external flash and
//! may be missing on a given device. The core only ever asks whether a
//! resource is present; reading and writing resources is the job of the
//! filesystem that implements this trait.

/// Well-known resource paths on the external filesystem
pub mod paths {
    /// Dot-matrix font used by the Casio-style face
    pub const FONT_DOTS_40: &str = "/fonts/lv_font_dots_40.bin";
    /// Small seven-segment font used by the Casio-style face
    pub const FONT_7SEGMENT_40: &str = "/fonts/7segments_40.bin";
    /// Large seven-segment font used by the Casio-style face
    pub const FONT_7SEGMENT_115: &str = "/fonts/7segments_115.bin";
    /// Condensed font used by the Infineat face
    pub const FONT_TEKO: &str = "/fonts/teko.bin";
    /// Display font used by the Infineat face
    pub const FONT_BEBAS: &str = "/fonts/bebas.bin";
    /// Icon font for weather conditions
    pub const FONT_WEATHER_ICONS: &str = "/fonts/fontawesome_weathericons.bin";
}

/// Read-only resource presence query
///
/// Implementations must not have side effects: the answer is used to decide
/// whether a screen may be constructed at all.
pub trait ResourceStore {
    /// Check if a resource exists
    fn contains(&self, path: &str) -> bool;

    /// Check if every resource in a list exists
    fn contains_all(&self, paths: &[&str]) -> bool {
        paths.iter().all(|path| self.contains(path))
    }
}

impl<T: ResourceStore + ?Sized> ResourceStore for &T {
    fn contains(&self, path: &str) -> bool {
        (**self).contains(path)
    }
}

/// Resource store backed by a fixed manifest of present paths
///
/// Used when the set of installed resources is known up front, e.g. read
/// once from the filesystem at boot.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceList<'a> {
    paths: &'a [&'a str],
}

impl<'a> ResourceList<'a> {
    /// Create a store from a manifest
    pub const fn new(paths: &'a [&'a str]) -> Self {
        Self { paths }
    }

    /// Create a store with no resources installed
    pub const fn empty() -> Self {
        Self { paths: &[] }
    }

    /// Number of resources in the manifest
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check if the manifest is empty
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl ResourceStore for ResourceList<'_> {
    fn contains(&self, path: &str) -> bool {
        self.paths.iter().any(|p| *p == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = ResourceList::empty();
        assert!(!store.contains(paths::FONT_TEKO));
        assert!(store.contains_all(&[]));
    }

    #[test]
    fn test_contains_all() {
        let store = ResourceList::new(&[paths::FONT_TEKO, paths::FONT_BEBAS]);
        assert!(store.contains_all(&[paths::FONT_TEKO, paths::FONT_BEBAS]));
        assert!(!store.contains_all(&[paths::FONT_TEKO, paths::FONT_DOTS_40]));
    }

    #[test]
    fn test_reference_forwarding() {
        fn has_icons<S: ResourceStore>(store: S) -> bool {
            store.contains(paths::FONT_WEATHER_ICONS)
        }

        let store = ResourceList::new(&[paths::FONT_WEATHER_ICONS]);
        assert!(has_icons(&store));
        assert!(!has_icons(&ResourceList::empty()));
    }
}
