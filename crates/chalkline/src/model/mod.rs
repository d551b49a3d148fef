//! Choice and selection models for Chalkline controls.
//!
//! This module separates *what can be picked* from *what is picked*:
//!
//! - [`Choice`]: one selectable option, a `{value, label}` pair where
//!   `value` is the unique key and `label` is the display text
//! - [`ChoiceModel`]: the trait controls query for choices, shared as
//!   `Arc<dyn ChoiceModel>`
//! - [`ChoiceList`]: the stock model, an ordered list with O(1) value lookup
//! - [`CaseSensitivity`]: case handling for label filtering
//! - [`Selection`]: an ordered sequence of unique value keys
//!
//! # Example
//!
//! ```
//! use chalkline::model::{ChoiceList, ChoiceModel, Selection};
//!
//! let options = ChoiceList::from([("alg", "Algebra"), ("geo", "Geometry")]);
//! assert_eq!(options.filter("geo", Default::default()), vec![1]);
//!
//! let mut picked = Selection::new();
//! assert!(picked.insert("alg"));
//! assert!(!picked.insert("alg")); // already present
//! assert_eq!(picked.values(), ["alg"]);
//! ```

mod choices;
mod selection;

pub use choices::{CaseSensitivity, Choice, ChoiceList, ChoiceModel};
pub use selection::Selection;
