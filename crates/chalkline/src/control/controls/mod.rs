//! Standard controls for Chalkline.
//!
//! This module provides the stock controls:
//!
//! - [`MultiSelect`]: pick several options from a dropdown, shown as
//!   removable chips, with type-ahead filtering and a selection limit

mod multi_select;

pub use multi_select::MultiSelect;
