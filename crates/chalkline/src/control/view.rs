//! View-state snapshots produced by controls.
//!
//! Controls render nothing. Instead they project their state into the plain
//! data types here, and the host application's paint layer draws whatever
//! they describe. Each snapshot is complete for its surface: a renderer can
//! draw the chip strip from `Vec<ChipView>` alone, without consulting the
//! control again.

/// One rendered chip: a selected value and its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipView {
    /// The selected value key.
    pub value: String,
    /// The model's label for the value, or empty when the model does not
    /// know the value.
    pub label: String,
}

/// The filter text field's visible state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterFieldView {
    /// The current filter query, verbatim.
    pub query: String,
    /// Placeholder text to show while the query is empty. Empty when the
    /// placeholder is suppressed by a non-empty selection.
    pub placeholder: String,
}

/// One visible popup row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRowView {
    /// The row's value key.
    pub value: String,
    /// The row's display label.
    pub label: String,
    /// Whether the value is currently selected.
    pub selected: bool,
    /// Whether the row refuses clicks because the selection is full.
    pub disabled: bool,
    /// Whether the row carries the keyboard highlight.
    pub highlighted: bool,
}

/// The popup's visible state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupView {
    /// Whether the popup is open.
    pub open: bool,
    /// The listed rows, truncated to the control's row limit.
    pub rows: Vec<OptionRowView>,
    /// Number of rows matching the query before truncation.
    pub total_matches: usize,
}
