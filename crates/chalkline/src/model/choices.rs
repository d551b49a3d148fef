//! Choice models: the options a selection control offers.
//!
//! A [`Choice`] pairs a stable value key with display text. Models expose an
//! ordered collection of choices behind the [`ChoiceModel`] trait so several
//! controls can share one model via `Arc<dyn ChoiceModel>`.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Case handling for label filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    /// Query and label must match exactly.
    CaseSensitive,
    /// Query and label are lowercased before comparison.
    #[default]
    CaseInsensitive,
}

/// One selectable option: a unique value key plus its display label.
///
/// The value is what the application stores and compares; the label is what
/// the user reads. Two choices with the same label but different values are
/// distinct options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Unique key identifying this choice.
    pub value: String,
    /// Text shown to the user.
    pub label: String,
}

impl Choice {
    /// Create a choice from a value key and a display label.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Trait for providing choices to selection controls.
///
/// Implementations must be `Send + Sync` so models can be shared across
/// controls as `Arc<dyn ChoiceModel>`. The stock implementation is
/// [`ChoiceList`]; implement this trait directly for virtual or computed
/// option sets.
pub trait ChoiceModel: Send + Sync {
    /// Number of choices in the model.
    fn len(&self) -> usize;

    /// Whether the model holds no choices.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The choice at `index`, or `None` out of bounds.
    fn choice(&self, index: usize) -> Option<Choice>;

    /// Display label for a value key, or `None` if the model does not know
    /// the value.
    fn label_of(&self, value: &str) -> Option<String> {
        (0..self.len())
            .filter_map(|index| self.choice(index))
            .find(|choice| choice.value == value)
            .map(|choice| choice.label)
    }

    /// Whether the model contains the given value key.
    fn contains(&self, value: &str) -> bool {
        self.label_of(value).is_some()
    }

    /// Indices of choices whose label contains `query` as a substring.
    ///
    /// An empty query matches every choice. Returned indices are in model
    /// order.
    fn filter(&self, query: &str, case: CaseSensitivity) -> Vec<usize> {
        if query.is_empty() {
            return (0..self.len()).collect();
        }
        let needle = match case {
            CaseSensitivity::CaseSensitive => query.to_string(),
            CaseSensitivity::CaseInsensitive => query.to_lowercase(),
        };
        (0..self.len())
            .filter(|&index| {
                self.choice(index).is_some_and(|choice| match case {
                    CaseSensitivity::CaseSensitive => choice.label.contains(&needle),
                    CaseSensitivity::CaseInsensitive => {
                        choice.label.to_lowercase().contains(&needle)
                    }
                })
            })
            .collect()
    }
}

/// The stock [`ChoiceModel`]: an ordered list of choices with O(1) value
/// lookup.
///
/// # Example
///
/// ```
/// use chalkline::model::{ChoiceList, ChoiceModel};
///
/// let list = ChoiceList::from([("s1", "Class 1A"), ("s2", "Class 1B")]);
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.label_of("s2"), Some("Class 1B".to_string()));
/// assert!(!list.contains("s3"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChoiceList {
    choices: Vec<Choice>,
    by_value: HashMap<String, usize>,
}

impl ChoiceList {
    /// Create a list from choices, deduplicating by value.
    ///
    /// A repeated value keeps its first position and takes its last label.
    pub fn new(choices: impl IntoIterator<Item = Choice>) -> Self {
        let mut list = Self::default();
        for choice in choices {
            list.insert(choice);
        }
        list
    }

    /// Create a list from `(value, label)` pairs, deduplicating by value.
    ///
    /// A repeated value keeps its first position and takes its last label.
    pub fn from_pairs<V, L>(pairs: impl IntoIterator<Item = (V, L)>) -> Self
    where
        V: Into<String>,
        L: Into<String>,
    {
        Self::new(pairs.into_iter().map(|(value, label)| Choice::new(value, label)))
    }

    /// Create a list from `(value, label)` pairs, rejecting duplicate values.
    ///
    /// Callers that treat a repeated key as a data bug use this instead of
    /// the last-wins [`from_pairs`](Self::from_pairs).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateValue`] naming the first repeated value.
    pub fn try_from_pairs<V, L>(pairs: impl IntoIterator<Item = (V, L)>) -> Result<Self>
    where
        V: Into<String>,
        L: Into<String>,
    {
        let mut list = Self::default();
        for (value, label) in pairs {
            let choice = Choice::new(value, label);
            if list.by_value.contains_key(&choice.value) {
                return Err(Error::duplicate_value(choice.value));
            }
            list.insert(choice);
        }
        Ok(list)
    }

    /// Append a choice; a choice with an already-present value replaces that
    /// entry in place instead.
    pub fn insert(&mut self, choice: Choice) {
        match self.by_value.get(&choice.value) {
            Some(&index) => self.choices[index] = choice,
            None => {
                self.by_value
                    .insert(choice.value.clone(), self.choices.len());
                self.choices.push(choice);
            }
        }
    }

    /// All choices in model order.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }
}

impl ChoiceModel for ChoiceList {
    fn len(&self) -> usize {
        self.choices.len()
    }

    fn choice(&self, index: usize) -> Option<Choice> {
        self.choices.get(index).cloned()
    }

    fn label_of(&self, value: &str) -> Option<String> {
        self.by_value
            .get(value)
            .map(|&index| self.choices[index].label.clone())
    }

    fn contains(&self, value: &str) -> bool {
        self.by_value.contains_key(value)
    }
}

impl From<Vec<Choice>> for ChoiceList {
    fn from(choices: Vec<Choice>) -> Self {
        Self::new(choices)
    }
}

impl From<Vec<(String, String)>> for ChoiceList {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::from_pairs(pairs)
    }
}

impl From<Vec<(&str, &str)>> for ChoiceList {
    fn from(pairs: Vec<(&str, &str)>) -> Self {
        Self::from_pairs(pairs)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for ChoiceList {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self::from_pairs(pairs)
    }
}

// Ensure ChoiceList is Send + Sync
static_assertions::assert_impl_all!(ChoiceList: Send, Sync);
