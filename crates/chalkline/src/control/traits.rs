//! Core control traits.

use super::base::ControlBase;
use super::events::ControlEvent;

/// The base trait for all controls.
///
/// A control embeds a [`ControlBase`] and exposes it through the two
/// required methods; the shared enabled/focused plumbing comes as default
/// implementations. Controls override [`event`](Self::event) to react to
/// input.
///
/// # Example
///
/// ```
/// use chalkline::control::{Control, ControlBase, ControlEvent};
///
/// struct Toggle {
///     base: ControlBase,
///     on: bool,
/// }
///
/// impl Control for Toggle {
///     fn control_base(&self) -> &ControlBase {
///         &self.base
///     }
///
///     fn control_base_mut(&mut self) -> &mut ControlBase {
///         &mut self.base
///     }
///
///     fn event(&mut self, event: &mut ControlEvent) -> bool {
///         if !self.is_enabled() {
///             return false;
///         }
///         if let ControlEvent::Click(_) = event {
///             self.on = !self.on;
///             event.accept();
///             return true;
///         }
///         false
///     }
/// }
///
/// # let mut toggle = Toggle { base: ControlBase::new(), on: false };
/// # use chalkline::control::{ClickEvent, MultiSelectPart};
/// # let mut click = ControlEvent::Click(ClickEvent::left(MultiSelectPart::Outside));
/// # assert!(toggle.event(&mut click));
/// # assert!(toggle.on);
/// ```
pub trait Control: Send + Sync {
    /// Get a reference to the control's base.
    fn control_base(&self) -> &ControlBase;

    /// Get a mutable reference to the control's base.
    fn control_base_mut(&mut self) -> &mut ControlBase;

    /// Check if the control is enabled.
    fn is_enabled(&self) -> bool {
        self.control_base().is_enabled()
    }

    /// Set whether the control is enabled.
    fn set_enabled(&mut self, enabled: bool) {
        self.control_base_mut().set_enabled(enabled);
    }

    /// Check if the control currently has keyboard focus.
    fn has_focus(&self) -> bool {
        self.control_base().has_focus()
    }

    /// Handle a control event.
    ///
    /// The default implementation returns `false` to indicate the event was
    /// not handled. Implementations must ignore every event while disabled.
    ///
    /// Return `true` if the event was handled and should not propagate
    /// further.
    fn event(&mut self, _event: &mut ControlEvent) -> bool {
        false
    }
}

/// Conversion to trait objects for heterogeneous control collections.
pub trait AsControl {
    /// Get a reference to self as a control.
    fn as_control(&self) -> &dyn Control;
    /// Get a mutable reference to self as a control.
    fn as_control_mut(&mut self) -> &mut dyn Control;
}

impl<T: Control> AsControl for T {
    fn as_control(&self) -> &dyn Control {
        self
    }

    fn as_control_mut(&mut self) -> &mut dyn Control {
        self
    }
}
