//! Multi-select control for picking several options from a dropdown.
//!
//! Features:
//! - Selected values rendered as removable chips, in selection order
//! - Type-ahead filtering of popup rows by label substring
//! - Optional maximum selection count; full selections disable the
//!   remaining rows instead of hiding them
//! - Owner-driven: every change is reported synchronously through
//!   `selection_changed` with the complete new sequence, and the owner
//!   writes its authoritative sequence back with `set_selected`
//! - Headless: no painting, no geometry; the host consumes `chips()`,
//!   `filter_field()`, and `popup()` snapshots
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use chalkline::control::controls::MultiSelect;
//! use chalkline::model::ChoiceList;
//!
//! let subjects = ChoiceList::from([
//!     ("math", "Mathematics"),
//!     ("phy", "Physics"),
//!     ("chem", "Chemistry"),
//! ]);
//! let mut picker = MultiSelect::new()
//!     .with_options(Arc::new(subjects))
//!     .with_placeholder("Add subjects...");
//!
//! picker.set_filter_query("ph");
//! assert_eq!(picker.popup().total_matches, 1);
//!
//! assert!(picker.select("phy"));
//! assert_eq!(picker.filter_query(), ""); // successful select clears the query
//! assert_eq!(picker.chips()[0].label, "Physics");
//! ```

use std::sync::Arc;

use chalkline_core::logging::targets;
use chalkline_core::Signal;
use unicode_segmentation::UnicodeSegmentation;

use crate::control::events::{
    ClickEvent, ControlEvent, Key, KeyPressEvent, MouseButton, MultiSelectPart,
};
use crate::control::view::{ChipView, FilterFieldView, OptionRowView, PopupView};
use crate::control::{Control, ControlBase};
use crate::model::{CaseSensitivity, ChoiceList, ChoiceModel, Selection};

/// A control for selecting multiple options from a dropdown.
///
/// The control mirrors the owner's selection sequence. User actions mutate
/// the mirror and report the complete new sequence through
/// [`selection_changed`](Self::selection_changed) before the mutating call
/// returns; the owner stays authoritative by writing back through
/// [`set_selected`](Self::set_selected). Invalid operations (selecting a
/// duplicate, selecting past the limit, unselecting an absent value) are
/// silent no-ops.
pub struct MultiSelect {
    /// Common control state.
    base: ControlBase,

    /// The options offered in the popup.
    options: Arc<dyn ChoiceModel>,

    /// Mirror of the owner's selection sequence.
    selection: Selection,

    /// Current filter query, verbatim as typed.
    filter_query: String,

    /// Whether the popup is open.
    open: bool,

    /// Index of the highlighted row among the visible (filtered) rows,
    /// -1 for none. Always -1 while the popup is closed.
    highlighted: i32,

    /// Maximum number of selected values, `None` for unlimited.
    max_count: Option<usize>,

    /// Placeholder text shown while the selection is empty.
    placeholder: String,

    /// Case handling for the label filter.
    case_sensitivity: CaseSensitivity,

    /// Maximum number of rows listed in a popup snapshot.
    max_visible_rows: usize,

    /// Signal emitted with the complete new sequence after every selection
    /// change.
    pub selection_changed: Signal<Vec<String>>,

    /// Signal emitted when a value is added to the selection.
    pub value_selected: Signal<String>,

    /// Signal emitted when a value is removed from the selection.
    pub value_unselected: Signal<String>,

    /// Signal emitted when the filter query changes.
    pub filter_changed: Signal<String>,

    /// Signal emitted when the popup opens or closes.
    pub open_changed: Signal<bool>,
}

impl MultiSelect {
    /// Create a new multi-select with an empty option model.
    pub fn new() -> Self {
        Self {
            base: ControlBase::new(),
            options: Arc::new(ChoiceList::default()),
            selection: Selection::new(),
            filter_query: String::new(),
            open: false,
            highlighted: -1,
            max_count: None,
            placeholder: String::new(),
            case_sensitivity: CaseSensitivity::default(),
            max_visible_rows: 8,
            selection_changed: Signal::new(),
            value_selected: Signal::new(),
            value_unselected: Signal::new(),
            filter_changed: Signal::new(),
            open_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Options Model
    // =========================================================================

    /// Get the options model.
    pub fn options(&self) -> &dyn ChoiceModel {
        self.options.as_ref()
    }

    /// Set the options model.
    ///
    /// Selected values missing from the new model are kept; they render as
    /// chips with an empty label until the owner removes them.
    pub fn set_options(&mut self, options: Arc<dyn ChoiceModel>) {
        self.options = options;
        self.reset_highlight();
    }

    /// Set the options model using the builder pattern.
    pub fn with_options(mut self, options: Arc<dyn ChoiceModel>) -> Self {
        self.set_options(options);
        self
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Selected values in selection order.
    pub fn selected_values(&self) -> &[String] {
        self.selection.values()
    }

    /// Whether the value is currently selected.
    pub fn is_selected(&self, value: &str) -> bool {
        self.selection.contains(value)
    }

    /// Select a value.
    ///
    /// Appends the value to the selection, clears the filter query, and
    /// emits [`value_selected`](Self::value_selected), then
    /// [`filter_changed`](Self::filter_changed) (if the query was non-empty),
    /// then [`selection_changed`](Self::selection_changed) with the complete
    /// new sequence.
    ///
    /// Returns `false` without emitting anything when the value is already
    /// selected, the selection is at its limit, or the model does not
    /// contain the value. A rejected select leaves the filter query alone.
    pub fn select(&mut self, value: &str) -> bool {
        if self.selection.contains(value)
            || self.at_capacity()
            || !self.options.contains(value)
        {
            return false;
        }

        self.selection.insert(value);
        tracing::debug!(target: targets::CONTROL, value, "choice selected");

        self.value_selected.emit(value.to_string());
        self.apply_filter_query(String::new());
        self.selection_changed.emit(self.selection.values().to_vec());
        true
    }

    /// Unselect a value.
    ///
    /// Removes the value, preserving the order of the rest, and emits
    /// [`value_unselected`](Self::value_unselected) then
    /// [`selection_changed`](Self::selection_changed). The filter query is
    /// left untouched.
    ///
    /// Returns `false` without emitting anything when the value is not
    /// selected.
    pub fn unselect(&mut self, value: &str) -> bool {
        if !self.selection.remove(value) {
            return false;
        }
        tracing::debug!(target: targets::CONTROL, value, "choice unselected");

        self.value_unselected.emit(value.to_string());
        self.selection_changed.emit(self.selection.values().to_vec());
        true
    }

    /// Replace the mirror with the owner's authoritative sequence.
    ///
    /// Duplicates are dropped with the first occurrence winning. Values the
    /// model does not know are kept (they render as chips with an empty
    /// label), and the sequence is not truncated to the selection limit.
    /// Emits nothing: the owner is not echoed its own write.
    pub fn set_selected<I, V>(&mut self, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.selection.replace_with(values);
        tracing::trace!(
            target: targets::CONTROL,
            count = self.selection.len(),
            "selection written by owner"
        );
    }

    /// The selection limit, `None` for unlimited.
    pub fn max_count(&self) -> Option<usize> {
        self.max_count
    }

    /// Set the selection limit.
    ///
    /// A limit below the current selection length does not truncate; it
    /// only blocks further selects until the owner shrinks the selection.
    pub fn set_max_count(&mut self, max_count: Option<usize>) {
        self.max_count = max_count;
    }

    /// Set the selection limit using the builder pattern.
    pub fn with_max_count(mut self, max_count: Option<usize>) -> Self {
        self.max_count = max_count;
        self
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// The current filter query.
    pub fn filter_query(&self) -> &str {
        &self.filter_query
    }

    /// Set the filter query, verbatim (no trimming).
    ///
    /// Emits [`filter_changed`](Self::filter_changed) if the query actually
    /// changed, and moves the highlight to the first matching row.
    pub fn set_filter_query(&mut self, query: impl Into<String>) {
        self.apply_filter_query(query.into());
    }

    /// Case handling for the label filter.
    pub fn case_sensitivity(&self) -> CaseSensitivity {
        self.case_sensitivity
    }

    /// Set case handling for the label filter.
    pub fn set_case_sensitivity(&mut self, case: CaseSensitivity) {
        self.case_sensitivity = case;
        self.reset_highlight();
    }

    /// Set case handling using the builder pattern.
    pub fn with_case_sensitivity(mut self, case: CaseSensitivity) -> Self {
        self.set_case_sensitivity(case);
        self
    }

    // =========================================================================
    // Popup
    // =========================================================================

    /// Whether the popup is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open or close the popup. Idempotent.
    ///
    /// Emits [`open_changed`](Self::open_changed) on an actual change.
    /// Closing also resets the filter query, so a reopened popup starts
    /// unfiltered.
    pub fn set_open(&mut self, open: bool) {
        if self.open == open {
            return;
        }
        self.open = open;
        if open {
            self.reset_highlight();
        } else {
            self.highlighted = -1;
        }
        tracing::debug!(target: targets::CONTROL, open, "popup toggled");

        self.open_changed.emit(open);
        if !open {
            self.apply_filter_query(String::new());
        }
    }

    /// Index of the highlighted row among the visible rows, -1 for none.
    pub fn highlighted_row(&self) -> i32 {
        self.highlighted
    }

    /// Maximum number of rows listed in a popup snapshot.
    pub fn max_visible_rows(&self) -> usize {
        self.max_visible_rows
    }

    /// Set the maximum number of listed rows.
    pub fn set_max_visible_rows(&mut self, count: usize) {
        self.max_visible_rows = count.max(1);
    }

    /// Set the maximum number of listed rows using the builder pattern.
    pub fn with_max_visible_rows(mut self, count: usize) -> Self {
        self.set_max_visible_rows(count);
        self
    }

    // =========================================================================
    // Placeholder
    // =========================================================================

    /// Placeholder text shown while the selection is empty.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Set the placeholder text.
    pub fn set_placeholder(&mut self, text: impl Into<String>) {
        self.placeholder = text.into();
    }

    /// Set the placeholder text using the builder pattern.
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    // =========================================================================
    // View State
    // =========================================================================

    /// One chip per selected value, in selection order.
    ///
    /// A value the model does not know gets an empty label.
    pub fn chips(&self) -> Vec<ChipView> {
        self.selection
            .iter()
            .map(|value| ChipView {
                value: value.clone(),
                label: self.options.label_of(value).unwrap_or_default(),
            })
            .collect()
    }

    /// The filter field's visible state.
    ///
    /// The placeholder is present only while the selection is empty; chips
    /// already tell the user what is picked.
    pub fn filter_field(&self) -> FilterFieldView {
        FilterFieldView {
            query: self.filter_query.clone(),
            placeholder: if self.selection.is_empty() {
                self.placeholder.clone()
            } else {
                String::new()
            },
        }
    }

    /// The popup's visible state.
    ///
    /// Rows are the model's choices whose labels match the current query, in
    /// model order, truncated to [`max_visible_rows`](Self::max_visible_rows);
    /// `total_matches` carries the pre-truncation count. When the selection
    /// is at its limit, rows that are not themselves selected are disabled
    /// so they can still be seen but not picked.
    pub fn popup(&self) -> PopupView {
        let visible = self.visible_indices();
        let total_matches = visible.len();
        let at_capacity = self.at_capacity();

        let rows = visible
            .into_iter()
            .take(self.max_visible_rows)
            .enumerate()
            .filter_map(|(row, index)| {
                self.options.choice(index).map(|choice| {
                    let selected = self.selection.contains(&choice.value);
                    OptionRowView {
                        value: choice.value,
                        label: choice.label,
                        selected,
                        disabled: at_capacity && !selected,
                        highlighted: row as i32 == self.highlighted,
                    }
                })
            })
            .collect();

        PopupView {
            open: self.open,
            rows,
            total_matches,
        }
    }

    // =========================================================================
    // Internal State
    // =========================================================================

    /// Indices of model choices matching the current query.
    fn visible_indices(&self) -> Vec<usize> {
        self.options.filter(&self.filter_query, self.case_sensitivity)
    }

    /// Whether the selection has reached its limit.
    fn at_capacity(&self) -> bool {
        self.max_count
            .is_some_and(|limit| self.selection.len() >= limit)
    }

    /// Move the highlight to the first visible row; -1 while the popup is
    /// closed or nothing matches.
    fn reset_highlight(&mut self) {
        self.highlighted = if self.open && !self.visible_indices().is_empty() {
            0
        } else {
            -1
        };
    }

    /// Store a new query, keep the highlight consistent, and notify.
    ///
    /// Does nothing when the query is unchanged.
    fn apply_filter_query(&mut self, query: String) {
        if self.filter_query == query {
            return;
        }
        self.filter_query = query;
        self.reset_highlight();
        self.filter_changed.emit(self.filter_query.clone());
    }

    /// Value of the highlighted visible row, if any.
    fn highlighted_value(&self) -> Option<String> {
        if self.highlighted < 0 {
            return None;
        }
        self.visible_indices()
            .get(self.highlighted as usize)
            .and_then(|&index| self.options.choice(index))
            .map(|choice| choice.value)
    }

    /// Select the value if unselected, unselect it otherwise.
    fn toggle_value(&mut self, value: &str) {
        if self.selection.contains(value) {
            self.unselect(value);
        } else {
            self.select(value);
        }
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    fn handle_focus_gained(&mut self) -> bool {
        self.base.set_focused(true);
        self.set_open(true);
        false
    }

    fn handle_focus_lost(&mut self) -> bool {
        self.base.set_focused(false);
        self.set_open(false);
        false
    }

    fn handle_key_press(&mut self, event: &KeyPressEvent) -> bool {
        match event.key {
            Key::Escape => {
                if self.open {
                    self.set_open(false);
                    return true;
                }
            }
            Key::Enter => {
                if self.open && self.highlighted >= 0 {
                    if let Some(value) = self.highlighted_value() {
                        self.toggle_value(&value);
                    }
                    return true;
                }
            }
            Key::ArrowDown => {
                if !self.open {
                    self.set_open(true);
                } else {
                    let count = self.visible_indices().len() as i32;
                    if self.highlighted < count - 1 {
                        self.highlighted += 1;
                    }
                }
                return true;
            }
            Key::ArrowUp => {
                if !self.open {
                    self.set_open(true);
                } else if self.highlighted > 0 {
                    self.highlighted -= 1;
                }
                return true;
            }
            Key::Home => {
                if self.open && !self.visible_indices().is_empty() {
                    self.highlighted = 0;
                    return true;
                }
            }
            Key::End => {
                let count = self.visible_indices().len() as i32;
                if self.open && count > 0 {
                    self.highlighted = count - 1;
                    return true;
                }
            }
            Key::Backspace => {
                if !self.filter_query.is_empty() {
                    // Drop the last grapheme cluster, not the last byte.
                    let mut graphemes: Vec<&str> = self.filter_query.graphemes(true).collect();
                    graphemes.pop();
                    let shortened = graphemes.concat();
                    self.apply_filter_query(shortened);
                    return true;
                }
                if let Some(last) = self.selection.values().last().cloned() {
                    self.unselect(&last);
                    return true;
                }
            }
            _ => {}
        }

        // Printable input appends to the filter query.
        if !event.text.is_empty() {
            let mut query = self.filter_query.clone();
            query.extend(event.text.chars().filter(|ch| !ch.is_control()));
            if query != self.filter_query {
                self.apply_filter_query(query);
                return true;
            }
        }

        false
    }

    fn handle_click(&mut self, event: &ClickEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }

        match &event.target {
            MultiSelectPart::FilterField => {
                self.set_open(true);
                true
            }
            MultiSelectPart::ChipRemove(value) => {
                self.unselect(value);
                true
            }
            MultiSelectPart::OptionRow(value) => {
                // select() itself rejects rows disabled by the limit.
                self.toggle_value(value);
                true
            }
            MultiSelectPart::Outside => {
                if self.open {
                    self.set_open(false);
                    true
                } else {
                    false
                }
            }
        }
    }
}

impl Control for MultiSelect {
    fn control_base(&self) -> &ControlBase {
        &self.base
    }

    fn control_base_mut(&mut self) -> &mut ControlBase {
        &mut self.base
    }

    fn event(&mut self, event: &mut ControlEvent) -> bool {
        if !self.base.is_enabled() {
            return false;
        }
        match event {
            ControlEvent::FocusGained(_) => self.handle_focus_gained(),
            ControlEvent::FocusLost(_) => self.handle_focus_lost(),
            ControlEvent::KeyPress(e) => self.handle_key_press(e),
            ControlEvent::Click(e) => self.handle_click(e),
        }
    }
}

impl Default for MultiSelect {
    fn default() -> Self {
        Self::new()
    }
}

// Ensure MultiSelect is Send + Sync
static_assertions::assert_impl_all!(MultiSelect: Send, Sync);

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::events::{FocusGainedEvent, FocusLostEvent, FocusReason, KeyboardModifiers};
    use parking_lot::Mutex;
    use std::collections::HashSet;

    fn subjects() -> Arc<dyn ChoiceModel> {
        Arc::new(ChoiceList::from([
            ("alg", "Algebra"),
            ("bio", "Biology"),
            ("chem", "Chemistry"),
        ]))
    }

    fn picker() -> MultiSelect {
        MultiSelect::new().with_options(subjects())
    }

    /// Record every emission of a signal for later inspection.
    fn capture<T: Clone + Send + 'static>(signal: &Signal<T>) -> Arc<Mutex<Vec<T>>> {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        signal.connect(move |value: &T| sink.lock().push(value.clone()));
        log
    }

    fn key(key: Key) -> KeyPressEvent {
        KeyPressEvent::new(key, KeyboardModifiers::NONE, "", false)
    }

    #[test]
    fn test_multi_select_creation() {
        let picker = MultiSelect::new();
        assert!(picker.selected_values().is_empty());
        assert_eq!(picker.filter_query(), "");
        assert!(!picker.is_open());
        assert_eq!(picker.highlighted_row(), -1);
        assert_eq!(picker.max_count(), None);
        assert_eq!(picker.placeholder(), "");
        assert_eq!(picker.max_visible_rows(), 8);
        assert!(picker.options().is_empty());
        assert!(picker.is_enabled());
    }

    #[test]
    fn test_multi_select_builder_pattern() {
        let picker = MultiSelect::new()
            .with_options(subjects())
            .with_max_count(Some(2))
            .with_placeholder("Add subjects...")
            .with_case_sensitivity(CaseSensitivity::CaseSensitive)
            .with_max_visible_rows(4);

        assert_eq!(picker.options().len(), 3);
        assert_eq!(picker.max_count(), Some(2));
        assert_eq!(picker.placeholder(), "Add subjects...");
        assert_eq!(picker.case_sensitivity(), CaseSensitivity::CaseSensitive);
        assert_eq!(picker.max_visible_rows(), 4);
    }

    #[test]
    fn test_select_appends_in_order() {
        let mut picker = picker();
        let changes = capture(&picker.selection_changed);

        assert!(picker.select("bio"));
        assert!(picker.select("alg"));

        assert_eq!(picker.selected_values(), ["bio", "alg"]);
        assert!(picker.is_selected("bio"));
        assert_eq!(
            *changes.lock(),
            vec![vec!["bio".to_string()], vec!["bio".to_string(), "alg".to_string()]]
        );
    }

    #[test]
    fn test_select_duplicate_is_silent() {
        let mut picker = picker();
        picker.select("alg");

        let changes = capture(&picker.selection_changed);
        let selects = capture(&picker.value_selected);

        assert!(!picker.select("alg"));
        assert_eq!(picker.selected_values(), ["alg"]);
        assert!(changes.lock().is_empty());
        assert!(selects.lock().is_empty());
    }

    #[test]
    fn test_select_unknown_value_is_silent() {
        let mut picker = picker();
        let changes = capture(&picker.selection_changed);

        assert!(!picker.select("nope"));
        assert!(picker.selected_values().is_empty());
        assert!(changes.lock().is_empty());
    }

    #[test]
    fn test_select_beyond_max_count_is_silent() {
        let mut picker = picker().with_max_count(Some(2));
        picker.select("alg");
        picker.select("bio");

        let changes = capture(&picker.selection_changed);
        assert!(!picker.select("chem"));
        assert_eq!(picker.selected_values(), ["alg", "bio"]);
        assert!(changes.lock().is_empty());
    }

    #[test]
    fn test_unselect_preserves_order_of_rest() {
        let mut picker = picker();
        picker.select("alg");
        picker.select("bio");
        picker.select("chem");

        let unselects = capture(&picker.value_unselected);
        assert!(picker.unselect("bio"));

        assert_eq!(picker.selected_values(), ["alg", "chem"]);
        assert_eq!(*unselects.lock(), vec!["bio".to_string()]);
    }

    #[test]
    fn test_unselect_absent_is_silent() {
        let mut picker = picker();
        picker.select("alg");

        let changes = capture(&picker.selection_changed);
        assert!(!picker.unselect("bio"));
        assert!(!picker.unselect("nope"));
        assert_eq!(picker.selected_values(), ["alg"]);
        assert!(changes.lock().is_empty());
    }

    #[test]
    fn test_select_then_unselect_restores_prior_sequence() {
        let mut picker = picker();
        picker.select("alg");
        picker.select("bio");
        let before = picker.selected_values().to_vec();

        picker.select("chem");
        picker.unselect("chem");

        assert_eq!(picker.selected_values(), before);
    }

    #[test]
    fn test_capacity_walk_with_max_two() {
        let mut picker = picker().with_max_count(Some(2));

        assert!(picker.select("alg"));
        assert!(picker.select("bio"));
        assert!(!picker.select("chem")); // full

        assert!(picker.unselect("alg"));
        assert!(picker.select("chem")); // slot freed

        assert_eq!(picker.selected_values(), ["bio", "chem"]);
    }

    #[test]
    fn test_no_duplicates_after_operation_storm() {
        let mut picker = picker();
        picker.select("alg");
        picker.set_selected(["bio", "alg", "bio", "ghost"]);
        picker.select("chem");
        picker.unselect("bio");
        picker.select("bio");
        picker.set_filter_query("alg");
        picker.select("alg");

        let values = picker.selected_values();
        let unique: HashSet<&String> = values.iter().collect();
        assert_eq!(unique.len(), values.len());
    }

    #[test]
    fn test_select_clears_filter_query() {
        let mut picker = picker();
        picker.set_filter_query("alg");

        let filters = capture(&picker.filter_changed);
        assert!(picker.select("alg"));

        assert_eq!(picker.filter_query(), "");
        assert_eq!(*filters.lock(), vec![String::new()]);
    }

    #[test]
    fn test_select_signal_order() {
        let mut picker = picker();
        picker.set_filter_query("alg");

        let log = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&log);
        picker.value_selected.connect(move |value| {
            sink.lock().push(format!("value_selected:{value}"));
        });
        let sink = Arc::clone(&log);
        picker.filter_changed.connect(move |query| {
            sink.lock().push(format!("filter_changed:{query}"));
        });
        let sink = Arc::clone(&log);
        picker.selection_changed.connect(move |values| {
            sink.lock().push(format!("selection_changed:{}", values.join(",")));
        });

        picker.select("alg");

        assert_eq!(
            *log.lock(),
            vec![
                "value_selected:alg".to_string(),
                "filter_changed:".to_string(),
                "selection_changed:alg".to_string(),
            ]
        );
    }

    #[test]
    fn rejected_select_keeps_filter_query() {
        let mut picker = picker().with_max_count(Some(1));
        picker.select("alg");
        picker.set_filter_query("che");

        let filters = capture(&picker.filter_changed);

        assert!(!picker.select("chem")); // over the limit
        assert!(!picker.select("alg")); // duplicate
        assert!(!picker.select("nope")); // unknown

        assert_eq!(picker.filter_query(), "che");
        assert!(filters.lock().is_empty());
    }

    #[test]
    fn test_unselect_keeps_filter_query() {
        let mut picker = picker();
        picker.select("alg");
        picker.set_filter_query("bio");

        picker.unselect("alg");
        assert_eq!(picker.filter_query(), "bio");
    }

    #[test]
    fn test_set_filter_query_emits_only_on_change() {
        let mut picker = picker();
        let filters = capture(&picker.filter_changed);

        picker.set_filter_query("  Al "); // stored verbatim
        picker.set_filter_query("  Al ");

        assert_eq!(picker.filter_query(), "  Al ");
        assert_eq!(*filters.lock(), vec!["  Al ".to_string()]);
    }

    #[test]
    fn test_filter_narrows_popup_rows() {
        let mut picker = picker();
        picker.set_open(true);

        assert_eq!(picker.popup().total_matches, 3);

        picker.set_filter_query("bio");
        let popup = picker.popup();
        assert_eq!(popup.total_matches, 1);
        assert_eq!(popup.rows.len(), 1);
        assert_eq!(popup.rows[0].value, "bio");
        assert_eq!(popup.rows[0].label, "Biology");

        picker.set_filter_query("zzz");
        assert_eq!(picker.popup().total_matches, 0);
        assert_eq!(picker.highlighted_row(), -1);
    }

    #[test]
    fn test_filter_case_sensitivity() {
        let mut picker = picker().with_case_sensitivity(CaseSensitivity::CaseSensitive);
        picker.set_filter_query("algebra");
        assert_eq!(picker.popup().total_matches, 0);

        picker.set_case_sensitivity(CaseSensitivity::CaseInsensitive);
        assert_eq!(picker.popup().total_matches, 1);
    }

    #[test]
    fn test_popup_capacity_disables_unselected_rows() {
        let mut picker = picker().with_max_count(Some(1));
        picker.select("bio");
        picker.set_open(true);

        let popup = picker.popup();
        assert_eq!(popup.rows.len(), 3);

        let alg = &popup.rows[0];
        assert!(!alg.selected);
        assert!(alg.disabled);

        // The selected row stays enabled so it can be toggled off.
        let bio = &popup.rows[1];
        assert!(bio.selected);
        assert!(!bio.disabled);
    }

    #[test]
    fn test_popup_truncates_rows() {
        let options: Vec<(String, String)> = (0..10)
            .map(|i| (format!("v{i}"), format!("Option {i}")))
            .collect();
        let mut picker = MultiSelect::new()
            .with_options(Arc::new(ChoiceList::from(options)))
            .with_max_visible_rows(3);
        picker.set_open(true);

        let popup = picker.popup();
        assert_eq!(popup.rows.len(), 3);
        assert_eq!(popup.total_matches, 10);
        assert_eq!(popup.rows[0].value, "v0");
    }

    #[test]
    fn test_chips_in_selection_order_with_labels() {
        let mut picker = picker();
        picker.select("chem");
        picker.select("alg");

        let chips = picker.chips();
        assert_eq!(chips.len(), 2);
        assert_eq!(chips[0].value, "chem");
        assert_eq!(chips[0].label, "Chemistry");
        assert_eq!(chips[1].value, "alg");
        assert_eq!(chips[1].label, "Algebra");
    }

    #[test]
    fn test_chip_for_unknown_value_has_empty_label() {
        let mut picker = picker();
        picker.set_selected(["ghost", "alg"]);

        let chips = picker.chips();
        assert_eq!(chips[0].value, "ghost");
        assert_eq!(chips[0].label, "");
        assert_eq!(chips[1].label, "Algebra");
    }

    #[test]
    fn test_placeholder_only_while_selection_empty() {
        let mut picker = picker().with_placeholder("Add subjects...");

        assert_eq!(picker.filter_field().placeholder, "Add subjects...");

        picker.select("alg");
        let field = picker.filter_field();
        assert_eq!(field.query, "");
        assert_eq!(field.placeholder, "");

        picker.unselect("alg");
        assert_eq!(picker.filter_field().placeholder, "Add subjects...");
    }

    #[test]
    fn test_set_selected_replaces_without_echo() {
        let mut picker = picker();
        picker.select("alg");

        let changes = capture(&picker.selection_changed);
        let selects = capture(&picker.value_selected);

        picker.set_selected(["chem", "bio", "chem"]);

        assert_eq!(picker.selected_values(), ["chem", "bio"]);
        assert!(changes.lock().is_empty());
        assert!(selects.lock().is_empty());
    }

    #[test]
    fn test_set_selected_may_exceed_max_count() {
        let mut picker = picker().with_max_count(Some(2));
        picker.set_selected(["alg", "bio", "chem"]);

        // The owner is authoritative; the mirror holds what it was given.
        assert_eq!(picker.selected_values(), ["alg", "bio", "chem"]);

        // But user-driven selects stay blocked while over the limit.
        picker.unselect("chem");
        picker.unselect("bio");
        assert!(picker.select("bio"));
        assert!(!picker.select("chem"));
    }

    #[test]
    fn test_set_open_is_idempotent() {
        let mut picker = picker();
        let opens = capture(&picker.open_changed);

        picker.set_open(true);
        picker.set_open(true);
        assert!(picker.is_open());
        assert_eq!(*opens.lock(), vec![true]);

        picker.set_open(false);
        assert_eq!(*opens.lock(), vec![true, false]);
    }

    #[test]
    fn test_close_resets_filter_query() {
        let mut picker = picker();
        picker.set_open(true);
        picker.set_filter_query("bio");

        let filters = capture(&picker.filter_changed);
        picker.set_open(false);

        assert_eq!(picker.filter_query(), "");
        assert_eq!(*filters.lock(), vec![String::new()]);

        // A reopened popup starts unfiltered.
        picker.set_open(true);
        assert_eq!(picker.popup().total_matches, 3);
    }

    #[test]
    fn test_open_sets_highlight_to_first_row() {
        let mut picker = picker();
        assert_eq!(picker.highlighted_row(), -1);

        picker.set_open(true);
        assert_eq!(picker.highlighted_row(), 0);

        picker.set_open(false);
        assert_eq!(picker.highlighted_row(), -1);

        // No rows, no highlight.
        let mut empty = MultiSelect::new();
        empty.set_open(true);
        assert_eq!(empty.highlighted_row(), -1);
    }

    #[test]
    fn test_focus_events_drive_popup() {
        let mut picker = picker();

        let mut gained = ControlEvent::FocusGained(FocusGainedEvent::new(FocusReason::Tab));
        picker.event(&mut gained);
        assert!(picker.is_open());
        assert!(picker.has_focus());

        let mut lost = ControlEvent::FocusLost(FocusLostEvent::new(FocusReason::Mouse));
        picker.event(&mut lost);
        assert!(!picker.is_open());
        assert!(!picker.has_focus());
    }

    #[test]
    fn test_focus_lost_clears_filter_query() {
        let mut picker = picker();
        picker.event(&mut ControlEvent::FocusGained(FocusGainedEvent::new(
            FocusReason::Mouse,
        )));
        picker.set_filter_query("al");

        picker.event(&mut ControlEvent::FocusLost(FocusLostEvent::new(
            FocusReason::Other,
        )));
        assert_eq!(picker.filter_query(), "");
    }

    #[test]
    fn test_click_chip_remove_unselects() {
        let mut picker = picker();
        picker.select("alg");
        picker.select("bio");

        let mut click = ControlEvent::Click(ClickEvent::left(MultiSelectPart::ChipRemove(
            "alg".to_string(),
        )));
        assert!(picker.event(&mut click));
        assert_eq!(picker.selected_values(), ["bio"]);
    }

    #[test]
    fn test_click_option_row_toggles() {
        let mut picker = picker();

        let mut click = ControlEvent::Click(ClickEvent::left(MultiSelectPart::OptionRow(
            "bio".to_string(),
        )));
        assert!(picker.event(&mut click));
        assert_eq!(picker.selected_values(), ["bio"]);

        let mut again = ControlEvent::Click(ClickEvent::left(MultiSelectPart::OptionRow(
            "bio".to_string(),
        )));
        assert!(picker.event(&mut again));
        assert!(picker.selected_values().is_empty());
    }

    #[test]
    fn test_click_disabled_row_is_ignored() {
        let mut picker = picker().with_max_count(Some(1));
        picker.select("alg");

        let mut click = ControlEvent::Click(ClickEvent::left(MultiSelectPart::OptionRow(
            "bio".to_string(),
        )));
        picker.event(&mut click);
        assert_eq!(picker.selected_values(), ["alg"]);
    }

    #[test]
    fn test_click_filter_field_opens_popup() {
        let mut picker = picker();
        let mut click = ControlEvent::Click(ClickEvent::left(MultiSelectPart::FilterField));
        assert!(picker.event(&mut click));
        assert!(picker.is_open());
    }

    #[test]
    fn test_click_outside_closes_popup() {
        let mut picker = picker();
        picker.set_open(true);

        let mut click = ControlEvent::Click(ClickEvent::left(MultiSelectPart::Outside));
        assert!(picker.event(&mut click));
        assert!(!picker.is_open());

        // Nothing to close: the click is not consumed.
        let mut again = ControlEvent::Click(ClickEvent::left(MultiSelectPart::Outside));
        assert!(!picker.event(&mut again));
    }

    #[test]
    fn test_non_primary_clicks_are_ignored() {
        let mut picker = picker();
        let mut click = ControlEvent::Click(ClickEvent::new(
            MouseButton::Right,
            MultiSelectPart::OptionRow("alg".to_string()),
            KeyboardModifiers::NONE,
        ));
        assert!(!picker.event(&mut click));
        assert!(picker.selected_values().is_empty());
    }

    #[test]
    fn test_typing_appends_to_filter_query() {
        let mut picker = picker();

        let mut a = ControlEvent::KeyPress(KeyPressEvent::character('a'));
        assert!(picker.event(&mut a));
        let mut l = ControlEvent::KeyPress(KeyPressEvent::character('l'));
        assert!(picker.event(&mut l));

        assert_eq!(picker.filter_query(), "al");
        assert_eq!(picker.popup().total_matches, 1);
    }

    #[test]
    fn test_control_characters_are_not_inserted() {
        let mut picker = picker();
        let mut tab = ControlEvent::KeyPress(KeyPressEvent::new(
            Key::Tab,
            KeyboardModifiers::NONE,
            "\t",
            false,
        ));
        assert!(!picker.event(&mut tab));
        assert_eq!(picker.filter_query(), "");
    }

    #[test]
    fn test_backspace_removes_last_grapheme() {
        let mut picker = picker();
        // "e" followed by a combining acute accent is one grapheme cluster.
        picker.set_filter_query("ale\u{301}");

        let mut backspace = ControlEvent::KeyPress(key(Key::Backspace));
        assert!(picker.event(&mut backspace));
        assert_eq!(picker.filter_query(), "al");
    }

    #[test]
    fn test_backspace_with_empty_query_removes_last_chip() {
        let mut picker = picker();
        picker.select("alg");
        picker.select("bio");

        let mut backspace = ControlEvent::KeyPress(key(Key::Backspace));
        assert!(picker.event(&mut backspace));
        assert_eq!(picker.selected_values(), ["alg"]);

        // Nothing left to delete once query and selection are both empty.
        picker.unselect("alg");
        let mut last = ControlEvent::KeyPress(key(Key::Backspace));
        assert!(!picker.event(&mut last));
    }

    #[test]
    fn test_arrow_keys_move_highlight() {
        let mut picker = picker();

        // ArrowDown on a closed control opens the popup first.
        let mut down = ControlEvent::KeyPress(key(Key::ArrowDown));
        assert!(picker.event(&mut down));
        assert!(picker.is_open());
        assert_eq!(picker.highlighted_row(), 0);

        picker.event(&mut ControlEvent::KeyPress(key(Key::ArrowDown)));
        assert_eq!(picker.highlighted_row(), 1);

        // Clamped at the last row.
        picker.event(&mut ControlEvent::KeyPress(key(Key::ArrowDown)));
        picker.event(&mut ControlEvent::KeyPress(key(Key::ArrowDown)));
        assert_eq!(picker.highlighted_row(), 2);

        picker.event(&mut ControlEvent::KeyPress(key(Key::ArrowUp)));
        assert_eq!(picker.highlighted_row(), 1);

        picker.event(&mut ControlEvent::KeyPress(key(Key::Home)));
        assert_eq!(picker.highlighted_row(), 0);

        picker.event(&mut ControlEvent::KeyPress(key(Key::End)));
        assert_eq!(picker.highlighted_row(), 2);
    }

    #[test]
    fn test_enter_toggles_highlighted_row() {
        let mut picker = picker();
        picker.set_open(true);

        picker.event(&mut ControlEvent::KeyPress(key(Key::ArrowDown)));
        assert_eq!(picker.highlighted_row(), 1);

        let mut enter = ControlEvent::KeyPress(key(Key::Enter));
        assert!(picker.event(&mut enter));
        assert_eq!(picker.selected_values(), ["bio"]);
        assert!(picker.is_open()); // multi-select keeps the popup open

        // The query was already empty, so the highlight did not move.
        assert_eq!(picker.highlighted_row(), 1);

        let mut again = ControlEvent::KeyPress(key(Key::Enter));
        assert!(picker.event(&mut again));
        assert!(picker.selected_values().is_empty());
    }

    #[test]
    fn test_escape_closes_popup() {
        let mut picker = picker();
        picker.set_open(true);

        let mut escape = ControlEvent::KeyPress(key(Key::Escape));
        assert!(picker.event(&mut escape));
        assert!(!picker.is_open());

        // Already closed: not consumed.
        let mut again = ControlEvent::KeyPress(key(Key::Escape));
        assert!(!picker.event(&mut again));
    }

    #[test]
    fn test_highlight_resets_on_filter_change() {
        let mut picker = picker();
        picker.set_open(true);
        picker.event(&mut ControlEvent::KeyPress(key(Key::End)));
        assert_eq!(picker.highlighted_row(), 2);

        picker.set_filter_query("b");
        assert_eq!(picker.highlighted_row(), 0);

        picker.set_filter_query("zzz");
        assert_eq!(picker.highlighted_row(), -1);
    }

    #[test]
    fn test_disabled_control_ignores_events() {
        let mut picker = picker();
        picker.set_enabled(false);

        let mut gained = ControlEvent::FocusGained(FocusGainedEvent::new(FocusReason::Mouse));
        assert!(!picker.event(&mut gained));
        assert!(!picker.is_open());

        let mut click = ControlEvent::Click(ClickEvent::left(MultiSelectPart::OptionRow(
            "alg".to_string(),
        )));
        assert!(!picker.event(&mut click));
        assert!(picker.selected_values().is_empty());

        // Direct API calls still work; only events are gated.
        assert!(picker.select("alg"));
    }

    #[test]
    fn test_set_options_keeps_selection() {
        let mut picker = picker();
        picker.select("alg");

        picker.set_options(Arc::new(ChoiceList::from([("bio", "Biology")])));

        assert_eq!(picker.selected_values(), ["alg"]);
        let chips = picker.chips();
        assert_eq!(chips[0].value, "alg");
        assert_eq!(chips[0].label, ""); // the new model does not know it
    }

    #[test]
    fn test_popup_rows_marked_highlighted() {
        let mut picker = picker();
        picker.set_open(true);
        picker.event(&mut ControlEvent::KeyPress(key(Key::ArrowDown)));

        let popup = picker.popup();
        assert!(popup.open);
        assert!(!popup.rows[0].highlighted);
        assert!(popup.rows[1].highlighted);
        assert!(!popup.rows[2].highlighted);
    }
}
