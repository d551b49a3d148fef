//! Control system for Chalkline.
//!
//! This module provides the foundational control architecture:
//!
//! - [`Control`] trait: the base trait for all controls
//! - [`ControlBase`]: common state and signals every control shares
//! - [`ControlEvent`] and its inner event types for input handling
//! - View-state types ([`ChipView`], [`PopupView`], ...) that the host's
//!   paint layer consumes
//!
//! # Overview
//!
//! Chalkline controls are headless. The host application owns geometry,
//! painting, and focus: it performs hit testing, translates platform input
//! into [`ControlEvent`]s, and feeds them to [`Control::event`]. The control
//! reacts by mutating its state, emitting signals, and serving fresh
//! view-state snapshots for the next paint.
//!
//! # Creating a Control
//!
//! 1. Define a struct with a [`ControlBase`] field
//! 2. Implement the [`Control`] trait
//! 3. Override [`Control::event`] for input, ignoring events while disabled
//!
//! See the [`Control`] trait documentation for a worked example, and
//! [`controls::MultiSelect`] for the stock control built this way.

mod base;
mod events;
mod traits;
mod view;

pub mod controls;

pub use base::ControlBase;
pub use events::{
    ClickEvent, ControlEvent, EventBase, FocusGainedEvent, FocusLostEvent, FocusReason, Key,
    KeyPressEvent, KeyboardModifiers, MouseButton, MultiSelectPart,
};
pub use traits::{AsControl, Control};
pub use view::{ChipView, FilterFieldView, OptionRowView, PopupView};
