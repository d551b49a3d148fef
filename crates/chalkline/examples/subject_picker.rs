//! Chalkline Subject Picker Example
//!
//! Drives a `MultiSelect` through a scripted interaction, the way a host
//! application would: it feeds focus, key, and click events to the control
//! and renders the resulting view snapshots as text after each step.
//!
//! Run with: cargo run -p chalkline --example subject_picker

use std::sync::Arc;

use chalkline::control::controls::MultiSelect;
use chalkline::control::{
    ClickEvent, Control, ControlEvent, FocusGainedEvent, FocusLostEvent, FocusReason, Key,
    KeyPressEvent, KeyboardModifiers, MultiSelectPart,
};
use chalkline::model::ChoiceList;

/// Render the control's view snapshots as a few lines of text.
///
/// A real host would paint chips, the field, and the popup; this example is
/// the text-mode equivalent of that paint layer.
fn render(picker: &MultiSelect) {
    let field = picker.filter_field();
    let chips: Vec<String> = picker
        .chips()
        .into_iter()
        .map(|chip| format!("[{} x]", chip.label))
        .collect();

    if field.placeholder.is_empty() {
        println!("  field: {} {}", chips.join(" "), field.query);
    } else {
        println!("  field: <{}>", field.placeholder);
    }

    let popup = picker.popup();
    if !popup.open {
        println!("  popup: (closed)");
        return;
    }
    println!("  popup: {} match(es)", popup.total_matches);
    for row in &popup.rows {
        let marker = if row.selected { "x" } else { " " };
        let cursor = if row.highlighted { ">" } else { " " };
        let note = if row.disabled { " (disabled)" } else { "" };
        println!("  {cursor} [{marker}] {}{note}", row.label);
    }
}

fn press(picker: &mut MultiSelect, key: Key) {
    picker.event(&mut ControlEvent::KeyPress(KeyPressEvent::new(
        key,
        KeyboardModifiers::NONE,
        "",
        false,
    )));
}

fn type_text(picker: &mut MultiSelect, text: &str) {
    for ch in text.chars() {
        picker.event(&mut ControlEvent::KeyPress(KeyPressEvent::character(ch)));
    }
}

fn click(picker: &mut MultiSelect, target: MultiSelectPart) {
    picker.event(&mut ControlEvent::Click(ClickEvent::left(target)));
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let subjects = ChoiceList::from([
        ("math", "Mathematics"),
        ("phy", "Physics"),
        ("chem", "Chemistry"),
        ("bio", "Biology"),
        ("hist", "History"),
        ("geo", "Geography"),
    ]);

    let mut picker = MultiSelect::new()
        .with_options(Arc::new(subjects))
        .with_max_count(Some(3))
        .with_placeholder("Assign subjects...");

    picker.selection_changed.connect(|values| {
        println!("  -> selection_changed: {values:?}");
    });

    println!("=== Initial state ===");
    render(&picker);

    println!("\n=== Focus the control ===");
    picker.event(&mut ControlEvent::FocusGained(FocusGainedEvent::new(
        FocusReason::Tab,
    )));
    render(&picker);

    println!("\n=== Type \"ma\" to filter ===");
    type_text(&mut picker, "ma");
    render(&picker);

    println!("\n=== Enter selects the highlighted row (and clears the filter) ===");
    press(&mut picker, Key::Enter);
    render(&picker);

    println!("\n=== Click two more rows ===");
    click(&mut picker, MultiSelectPart::OptionRow("phy".to_string()));
    click(&mut picker, MultiSelectPart::OptionRow("chem".to_string()));
    render(&picker);

    println!("\n=== At the limit of 3, the rest is disabled ===");
    click(&mut picker, MultiSelectPart::OptionRow("bio".to_string()));
    render(&picker);

    println!("\n=== Remove a chip to free a slot ===");
    click(&mut picker, MultiSelectPart::ChipRemove("phy".to_string()));
    render(&picker);

    println!("\n=== Backspace on an empty query removes the last chip ===");
    press(&mut picker, Key::Backspace);
    render(&picker);

    println!("\n=== Blur closes the popup ===");
    picker.event(&mut ControlEvent::FocusLost(FocusLostEvent::new(
        FocusReason::Mouse,
    )));
    render(&picker);

    println!("\nFinal selection: {:?}", picker.selected_values());
}
