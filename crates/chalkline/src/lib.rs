//! Chalkline - a headless multi-select control built on synchronous signals.
//!
//! This crate provides the control itself plus the choice models, events,
//! and view-state types it is made of. The control renders nothing: it owns
//! interaction state, emits signals via [`Signal`], and projects plain data
//! snapshots for the host application's paint layer.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use chalkline::control::controls::MultiSelect;
//! use chalkline::model::ChoiceList;
//!
//! let options = ChoiceList::from([("math", "Mathematics"), ("phy", "Physics")]);
//! let mut picker = MultiSelect::new()
//!     .with_options(Arc::new(options))
//!     .with_max_count(Some(1));
//!
//! picker.selection_changed.connect(|values| {
//!     println!("selection is now {values:?}");
//! });
//!
//! assert!(picker.select("math"));
//! assert!(!picker.select("phy")); // at capacity, silent no-op
//! assert_eq!(picker.selected_values(), ["math"]);
//! ```

pub use chalkline_core::*;

pub mod control;
pub mod error;
pub mod model;
pub mod prelude;
