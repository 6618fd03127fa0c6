//! Known expense categories
//!
//! Categories are plain labels. The set starts from a seed list and grows
//! whenever an expense introduces a label it has not seen. Order is the order
//! labels were first registered, which is how the front end lists them.

/// Seed labels used when settings don't override them
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Food", "Transport", "Entertainment", "Other"];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategorySet {
    names: Vec<String>,
}

impl CategorySet {
    /// An empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in seed list
    pub fn with_defaults() -> Self {
        Self::from_names(DEFAULT_CATEGORIES)
    }

    /// Build a set from labels, skipping blanks and repeats
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for name in names {
            set.register(name.as_ref());
        }
        set
    }

    /// Add a label if it is new. Returns true if it was added.
    pub fn register(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let set = CategorySet::with_defaults();
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec!["Food", "Transport", "Entertainment", "Other"]
        );
    }

    #[test]
    fn test_register_keeps_first_seen_order() {
        let mut set = CategorySet::with_defaults();

        assert!(set.register("Health"));
        assert!(!set.register("Food"));
        assert!(!set.register("  Health  "));
        assert!(!set.register("   "));

        assert_eq!(set.len(), 5);
        assert_eq!(set.as_slice().last().map(String::as_str), Some("Health"));
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        let mut set = CategorySet::from_names(["Food"]);
        assert!(set.register("food"));
        assert!(set.contains("food"));
        assert!(set.contains("Food"));
    }

    #[test]
    fn test_from_names_skips_duplicates() {
        let set = CategorySet::from_names(vec!["Rent", "", "Rent", "Fun"]);
        assert_eq!(set.as_slice(), &["Rent".to_string(), "Fun".to_string()]);
    }
}
