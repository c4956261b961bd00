//! Read-only lookup tables keyed by symbolic type name.

use ol_types::RegistryError;
use std::collections::HashMap;

/// An immutable table from type name to descriptor.
#[derive(Debug)]
pub struct Registry<D> {
    name: &'static str,
    entries: HashMap<&'static str, D>,
}

impl<D> Registry<D> {
    pub fn new(name: &'static str, entries: impl IntoIterator<Item = (&'static str, D)>) -> Self {
        Self {
            name,
            entries: entries.into_iter().collect(),
        }
    }

    /// Registry name used in diagnostics (e.g. "domain").
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self, key: &str) -> Result<&D, RegistryError> {
        self.entries.get(key).ok_or_else(|| {
            tracing::debug!(
                registry = self.name,
                key,
                known = ?self.type_names(),
                "unknown type requested"
            );
            RegistryError::UnknownType {
                key: key.to_string(),
                registry: self.name.to_string(),
            }
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Registered keys, sorted.
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> Registry<u32> {
        Registry::new("color", [("red", 0xff0000), ("green", 0x00ff00)])
    }

    #[test]
    fn test_get_known_key() {
        let registry = colors();
        assert_eq!(registry.get("green"), Ok(&0x00ff00));
        assert!(registry.contains("red"));
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_unknown_key_names_registry() {
        let err = colors().get("blue").unwrap_err();
        assert_eq!(
            err,
            RegistryError::UnknownType {
                key: "blue".to_string(),
                registry: "color".to_string()
            }
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(colors().get("Red").is_err());
    }

    #[test]
    fn test_type_names_sorted() {
        assert_eq!(colors().type_names(), vec!["green", "red"]);
        assert_eq!(colors().name(), "color");
    }
}
