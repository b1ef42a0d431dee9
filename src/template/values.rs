//! Values bound to placeholder tokens

use std::collections::BTreeMap;

/// Placeholder name to replacement text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateValues(BTreeMap<String, String>);

impl TemplateValues {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Number of bound names
    pub fn count(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TemplateValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_and_get() {
        let values: TemplateValues = [("text-input-1", "A"), ("text-input-2", "")]
            .into_iter()
            .collect();
        assert_eq!(values.count(), 2);
        assert_eq!(values.get("text-input-1"), Some("A"));
        assert_eq!(values.get("text-input-2"), Some(""));
        assert_eq!(values.get("text-input-3"), None);
    }

    #[test]
    fn test_later_duplicate_wins() {
        let values: TemplateValues = [("a", "1"), ("a", "2")].into_iter().collect();
        assert_eq!(values.count(), 1);
        assert_eq!(values.get("a"), Some("2"));
    }
}
