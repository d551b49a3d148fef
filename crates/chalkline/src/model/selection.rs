//! Ordered selection of unique value keys.

use std::collections::HashSet;

/// An ordered sequence of unique value keys.
///
/// Iteration order is insertion order, and a value occurs at most once.
/// The vector carries order; the set makes membership checks O(1). Both
/// mutators report whether they changed anything so callers can decide
/// what to notify.
///
/// # Example
///
/// ```
/// use chalkline::model::Selection;
///
/// let mut selection = Selection::new();
/// assert!(selection.insert("a"));
/// assert!(selection.insert("b"));
/// assert!(!selection.insert("a")); // already present
/// assert_eq!(selection.values(), ["a", "b"]);
///
/// assert!(selection.remove("a"));
/// assert_eq!(selection.values(), ["b"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Selection {
    ordered: Vec<String>,
    members: HashSet<String>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value if it is not already present.
    ///
    /// Returns `true` if the selection changed.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.members.contains(&value) {
            return false;
        }
        self.members.insert(value.clone());
        self.ordered.push(value);
        true
    }

    /// Remove a value if present, preserving the order of the rest.
    ///
    /// Returns `true` if the selection changed.
    pub fn remove(&mut self, value: &str) -> bool {
        if !self.members.remove(value) {
            return false;
        }
        self.ordered.retain(|existing| existing != value);
        true
    }

    /// Rebuild the selection from an iterator.
    ///
    /// Duplicates are dropped with the first occurrence winning, so the
    /// caller's order is preserved.
    pub fn replace_with<I, V>(&mut self, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.ordered.clear();
        self.members.clear();
        for value in values {
            self.insert(value);
        }
    }

    /// Remove every value.
    pub fn clear(&mut self) {
        self.ordered.clear();
        self.members.clear();
    }

    /// Values in insertion order.
    pub fn values(&self) -> &[String] {
        &self.ordered
    }

    /// Iterate over values in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.ordered.iter()
    }

    /// Whether the value is currently selected.
    pub fn contains(&self, value: &str) -> bool {
        self.members.contains(value)
    }

    /// Number of selected values.
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Ensure Selection is Send + Sync
static_assertions::assert_impl_all!(Selection: Send, Sync);
