//! Control-specific event types.
//!
//! Chalkline controls are headless: they never see screen coordinates. The
//! host application performs hit testing in whatever geometry it renders and
//! reports the result as a logical [`MultiSelectPart`], so a click event
//! carries *what* was hit rather than *where*. Keyboard input arrives as
//! [`KeyPressEvent`]s whose `text` holds the characters the platform decoded
//! for the keystroke.

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        meta: false,
    };

    /// Alt modifier only.
    pub const ALT: Self = Self {
        shift: false,
        control: false,
        alt: true,
        meta: false,
    };

    /// Meta modifier only.
    pub const META: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: true,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Check if no modifiers are pressed.
    pub fn none(&self) -> bool {
        !self.any()
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left = 0,
    /// Secondary button (usually right).
    Right = 1,
    /// Middle button (scroll wheel click).
    Middle = 2,
}

/// Common data for all control events.
#[derive(Debug, Clone, Copy)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl Default for EventBase {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Reason for a focus change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusReason {
    /// Focus changed due to a mouse click.
    Mouse,
    /// Focus changed due to the Tab key.
    Tab,
    /// Focus changed due to Shift+Tab (backtab).
    Backtab,
    /// Focus changed programmatically.
    #[default]
    Other,
}

/// The logical keys a selection control reacts to.
///
/// Printable input is delivered as [`Key::Char`] with the decoded text in
/// [`KeyPressEvent::text`]; everything the control does not handle can be
/// reported as `Char` or simply not forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character key. The typed text is in the event's `text`.
    Char(char),
    /// The Enter/Return key.
    Enter,
    /// The Escape key.
    Escape,
    /// The Backspace key.
    Backspace,
    /// The Delete key.
    Delete,
    /// The Tab key.
    Tab,
    /// The up arrow key.
    ArrowUp,
    /// The down arrow key.
    ArrowDown,
    /// The Home key.
    Home,
    /// The End key.
    End,
}

/// Focus gained event, sent when the control receives keyboard focus.
#[derive(Debug, Clone, Copy)]
pub struct FocusGainedEvent {
    /// Base event data.
    pub base: EventBase,
    /// The reason focus was gained.
    pub reason: FocusReason,
}

impl FocusGainedEvent {
    /// Create a new focus gained event.
    pub fn new(reason: FocusReason) -> Self {
        Self {
            base: EventBase::new(),
            reason,
        }
    }
}

/// Focus lost event, sent when the control loses keyboard focus.
#[derive(Debug, Clone, Copy)]
pub struct FocusLostEvent {
    /// Base event data.
    pub base: EventBase,
    /// The reason focus was lost.
    pub reason: FocusReason,
}

impl FocusLostEvent {
    /// Create a new focus lost event.
    pub fn new(reason: FocusReason) -> Self {
        Self {
            base: EventBase::new(),
            reason,
        }
    }
}

/// Key press event, sent when a key is pressed while the control has focus.
#[derive(Debug, Clone)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// The text input from this key press (if any).
    ///
    /// For printable keys, this contains the characters that would be typed.
    /// For non-printable keys it is empty.
    pub text: String,
    /// Whether this is a key repeat event (key held down).
    pub is_repeat: bool,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(
        key: Key,
        modifiers: KeyboardModifiers,
        text: impl Into<String>,
        is_repeat: bool,
    ) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
            text: text.into(),
            is_repeat,
        }
    }

    /// Create a key press event for a printable character with no modifiers.
    pub fn character(ch: char) -> Self {
        Self::new(Key::Char(ch), KeyboardModifiers::NONE, ch.to_string(), false)
    }
}

/// A logical region of a multi-select control, as determined by the host
/// application's hit testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultiSelectPart {
    /// The filter text field.
    FilterField,
    /// The remove affordance on the chip for this value.
    ChipRemove(String),
    /// The popup row for this value.
    OptionRow(String),
    /// Anywhere outside the control.
    Outside,
}

/// Click event, sent when a mouse button is pressed on (or outside) the
/// control.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: MouseButton,
    /// The logical part that was hit.
    pub target: MultiSelectPart,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl ClickEvent {
    /// Create a new click event.
    pub fn new(button: MouseButton, target: MultiSelectPart, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            button,
            target,
            modifiers,
        }
    }

    /// Create a primary-button click with no modifiers.
    pub fn left(target: MultiSelectPart) -> Self {
        Self::new(MouseButton::Left, target, KeyboardModifiers::NONE)
    }
}

/// Unified event type wrapping all control events.
///
/// This allows passing events through a single dispatch interface while
/// preserving type information for handlers.
#[derive(Debug)]
pub enum ControlEvent {
    /// Focus gained event.
    FocusGained(FocusGainedEvent),
    /// Focus lost event.
    FocusLost(FocusLostEvent),
    /// Key press event.
    KeyPress(KeyPressEvent),
    /// Click event.
    Click(ClickEvent),
}

impl ControlEvent {
    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        match self {
            Self::FocusGained(e) => e.base.is_accepted(),
            Self::FocusLost(e) => e.base.is_accepted(),
            Self::KeyPress(e) => e.base.is_accepted(),
            Self::Click(e) => e.base.is_accepted(),
        }
    }

    /// Accept the event.
    pub fn accept(&mut self) {
        match self {
            Self::FocusGained(e) => e.base.accept(),
            Self::FocusLost(e) => e.base.accept(),
            Self::KeyPress(e) => e.base.accept(),
            Self::Click(e) => e.base.accept(),
        }
    }

    /// Ignore the event.
    pub fn ignore(&mut self) {
        match self {
            Self::FocusGained(e) => e.base.ignore(),
            Self::FocusLost(e) => e.base.ignore(),
            Self::KeyPress(e) => e.base.ignore(),
            Self::Click(e) => e.base.ignore(),
        }
    }
}
