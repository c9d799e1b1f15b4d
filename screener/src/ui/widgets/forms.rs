//! # Form Components
//!
//! Labelled inputs for the filter panel.

use crate::ui::theme::Theme;

/// Render a form heading
pub fn render_form_heading(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    let heading = egui::RichText::new(text)
        .size(20.0)
        .strong()
        .color(theme.normal);
    ui.label(heading);
    ui.add_space(8.0);
}

/// Render an error message
pub fn render_error(ui: &mut egui::Ui, error: &str, theme: &Theme) {
    ui.label(egui::RichText::new(error).color(theme.error));
    ui.add_space(6.0);
}

/// Render a help/hint text
pub fn render_hint(ui: &mut egui::Ui, hint: &str, theme: &Theme) {
    ui.label(egui::RichText::new(hint).small().color(theme.dim));
}

/// Labelled numeric input inside a two-column grid. Returns true on edit.
pub fn render_number_row<N: egui::emath::Numeric>(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut N,
    range: std::ops::RangeInclusive<N>,
    speed: f64,
    suffix: &str,
) -> bool {
    ui.label(label);
    let changed = ui
        .add(
            egui::DragValue::new(value)
                .range(range)
                .speed(speed)
                .suffix(suffix),
        )
        .changed();
    ui.end_row();
    changed
}

/// Labelled combo box inside a two-column grid. Returns true on selection.
pub fn render_choice_row<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    value: &mut T,
    options: &[T],
    text: impl Fn(T) -> &'static str,
) -> bool {
    ui.label(label);
    let mut changed = false;
    egui::ComboBox::from_id_salt(id)
        .selected_text(text(*value))
        .show_ui(ui, |ui| {
            for option in options {
                changed |= ui.selectable_value(value, *option, text(*option)).changed();
            }
        });
    ui.end_row();
    changed
}
