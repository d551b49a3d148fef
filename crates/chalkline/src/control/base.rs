//! Control base implementation.
//!
//! `ControlBase` holds the state every control shares: the enabled and
//! focused flags and their change signals. Controls embed it as a field and
//! delegate through the [`Control`](super::Control) trait.

use chalkline_core::Signal;

/// The base implementation for all controls.
///
/// Domain state (selection, filter text, and so on) lives in the control
/// itself; this struct only carries what is common to every control.
pub struct ControlBase {
    /// Whether the control accepts input events.
    enabled: bool,

    /// Whether the control currently has keyboard focus.
    focused: bool,

    /// Signal emitted when the enabled state changes.
    pub enabled_changed: Signal<bool>,

    /// Signal emitted when the focused state changes.
    pub focused_changed: Signal<bool>,
}

impl ControlBase {
    /// Create a new control base, enabled and unfocused.
    pub fn new() -> Self {
        Self {
            enabled: true,
            focused: false,
            enabled_changed: Signal::new(),
            focused_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Enabled State
    // =========================================================================

    /// Check if the control is enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set whether the control is enabled.
    ///
    /// This will emit `enabled_changed` if the state actually changed.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.enabled_changed.emit(enabled);
        }
    }

    /// Enable the control.
    pub fn enable(&mut self) {
        self.set_enabled(true);
    }

    /// Disable the control.
    pub fn disable(&mut self) {
        self.set_enabled(false);
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Check if the control currently has keyboard focus.
    #[inline]
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Set the focused state.
    ///
    /// This will emit `focused_changed` if the state actually changed.
    pub fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.focused_changed.emit(focused);
        }
    }
}

impl Default for ControlBase {
    fn default() -> Self {
        Self::new()
    }
}

// Ensure ControlBase is Send + Sync
static_assertions::assert_impl_all!(ControlBase: Send, Sync);
