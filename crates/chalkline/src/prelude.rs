//! Prelude module for Chalkline.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use chalkline::prelude::*;
//! ```
//!
//! This provides access to:
//! - Signal/slot system (`Signal`, `ConnectionId`, `ConnectionGuard`)
//! - Control foundation (`Control`, `ControlBase`, `ControlEvent`)
//! - Option and selection models (`ChoiceList`, `ChoiceModel`, `Selection`)
//! - Controls (`MultiSelect`)
//! - View state snapshots (`ChipView`, `PopupView`, etc.)

// ============================================================================
// Signal/Slot System
// ============================================================================

pub use crate::signal::{ConnectionGuard, ConnectionId, Signal};

// ============================================================================
// Control Foundation
// ============================================================================

pub use crate::control::{AsControl, Control, ControlBase};

// Events
pub use crate::control::{
    ClickEvent, ControlEvent, EventBase, FocusGainedEvent, FocusLostEvent, FocusReason, Key,
    KeyPressEvent, KeyboardModifiers, MouseButton, MultiSelectPart,
};

// ============================================================================
// Models
// ============================================================================

pub use crate::model::{CaseSensitivity, Choice, ChoiceList, ChoiceModel, Selection};

// ============================================================================
// Controls
// ============================================================================

pub use crate::control::controls::MultiSelect;

// ============================================================================
// View State
// ============================================================================

pub use crate::control::{ChipView, FilterFieldView, OptionRowView, PopupView};
