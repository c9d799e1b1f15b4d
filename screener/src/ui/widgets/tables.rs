//! # Table Components
//!
//! Grid helpers shared by the result table.

use crate::app::{SortDirection, SortField};
use crate::ui::theme::Theme;

/// Configuration for table styling
pub struct TableConfig {
    pub num_columns: usize,
    pub spacing: [f32; 2],
    pub striped: bool,
    pub scrollable: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            num_columns: 5,
            spacing: [24.0, 6.0],
            striped: true,
            scrollable: false,
        }
    }
}

/// Render a grid; `render_rows` draws the header row and the body
pub fn render_table<F>(ui: &mut egui::Ui, id: &str, config: TableConfig, render_rows: F)
where
    F: FnOnce(&mut egui::Ui),
{
    let table_render = |ui: &mut egui::Ui| {
        egui::Grid::new(id)
            .num_columns(config.num_columns)
            .spacing(config.spacing)
            .striped(config.striped)
            .show(ui, render_rows);
    };

    if config.scrollable {
        egui::ScrollArea::vertical().show(ui, table_render);
    } else {
        table_render(ui);
    }
}

/// Header text with the direction arrow when `field` is the active sort
pub fn header_label(
    field: SortField,
    active: Option<SortField>,
    direction: SortDirection,
) -> String {
    if active == Some(field) {
        format!("{} {}", field.title(), direction.indicator())
    } else {
        field.title().to_string()
    }
}

/// Clickable column header. Returns true when clicked.
pub fn render_sort_header(
    ui: &mut egui::Ui,
    field: SortField,
    active: Option<SortField>,
    direction: SortDirection,
    theme: &Theme,
) -> bool {
    let text = egui::RichText::new(header_label(field, active, direction)).strong();
    let button = if active == Some(field) {
        egui::Button::new(text.color(theme.selected)).frame(false)
    } else {
        egui::Button::new(text).frame(false)
    };
    ui.add(button).clicked()
}

/// Render an empty state message
pub fn render_empty_state(
    ui: &mut egui::Ui,
    primary_text: &str,
    secondary_text: Option<&str>,
    theme: &Theme,
) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.colored_label(theme.dim, primary_text);
        if let Some(secondary) = secondary_text {
            ui.add_space(10.0);
            ui.colored_label(theme.dim, secondary);
        }
    });
}
