//! # Screener Screen
//!
//! Filter form, search button, result table and pagination.

use shared::dto::screener::{FilterCriteria, SmaMode, Trend};
use shared::utils::{format_price, format_ratio, format_update_date, format_volume};

use crate::app::{App, AppState, PageDirection, SortField};
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, tables};

/// Shown when a finished search has no visible rows
pub const EMPTY_STATE_MESSAGE: &str = "No results found. Adjust your filters and try again.";

/// Render the screener screen from a state snapshot
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    forms::render_form_heading(ui, "Stock Screener", &theme);

    render_filters(ui, state, app);
    ui.add_space(10.0);

    ui.horizontal(|ui| {
        let search = ui.add_enabled(
            !state.view.loading,
            egui::Button::new(egui::RichText::new("Search").strong()).fill(theme.selected),
        );
        if search.clicked() {
            app.submit_filters();
        }
        if state.view.loading {
            ui.spinner();
            ui.colored_label(theme.dim, "Loading...");
        }
    });
    ui.add_space(10.0);

    if let Some(error) = &state.view.error {
        forms::render_error(ui, error, &theme);
    }

    ui.separator();

    if state.rows.is_empty() {
        if !state.view.loading && state.view.error.is_none() {
            tables::render_empty_state(ui, EMPTY_STATE_MESSAGE, None, &theme);
        }
        return;
    }

    render_results(ui, state, app, &theme);
    ui.add_space(8.0);
    render_pagination(ui, state, app);
}

fn render_filters(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();
    let mut filters = state.filters.clone();
    let mut price_range = state.price_range;

    ui.horizontal_top(|ui| {
        ui.group(|ui| {
            ui.vertical(|ui| {
                ui.strong("Basic filters");
                egui::Grid::new("basic_filters")
                    .num_columns(2)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        forms::render_number_row(ui, "Min. volume", &mut filters.volume, 0..=u64::MAX, 10_000.0, "");
                        forms::render_number_row(ui, "Max. ATR", &mut filters.max_ratr, 0.0..=999.0, 0.1, " %");
                        forms::render_number_row(ui, "Min. price", &mut price_range.min, 0.0..=999_999.0, 1.0, " $");
                        forms::render_number_row(ui, "Max. price", &mut price_range.max, 0.0..=999_999.0, 1.0, " $");
                    });
            });
        });

        ui.group(|ui| {
            ui.vertical(|ui| {
                ui.strong("SMA filters");
                egui::Grid::new("sma_filters")
                    .num_columns(2)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        forms::render_choice_row(ui, "trend", "Trend", &mut filters.trend, Trend::all(), |t| t.label());
                        forms::render_choice_row(ui, "mode", "SMA mode", &mut filters.mode, SmaMode::all(), |m| m.label());
                        render_thresholds(ui, &mut filters);
                    });
                forms::render_hint(ui, "Minimum % of days on the trend side of the SMA", &theme);
            });
        });
    });

    if filters != state.filters {
        app.set_filters(filters);
    }
    if price_range != state.price_range {
        app.set_price_range(price_range);
    }
}

/// Only the thresholds the selected mode uses are shown
fn render_thresholds(ui: &mut egui::Ui, filters: &mut FilterCriteria) {
    match filters.mode {
        SmaMode::TwoHalves => {
            forms::render_number_row(ui, "First half", &mut filters.sma_pct_first, 0.0..=100.0, 1.0, " %");
            forms::render_number_row(ui, "Second half", &mut filters.sma_pct_second, 0.0..=100.0, 1.0, " %");
        }
        SmaMode::EntireYear => {
            forms::render_number_row(ui, "Entire year", &mut filters.sma_pct_entire, 0.0..=100.0, 1.0, " %");
        }
    }
}

fn render_results(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let config = tables::TableConfig {
        num_columns: SortField::all().len(),
        scrollable: true,
        ..Default::default()
    };

    let mut clicked = None;
    tables::render_table(ui, "screener_results", config, |ui| {
        for field in SortField::all() {
            if tables::render_sort_header(ui, *field, state.view.sort_field, state.view.sort_direction, theme) {
                clicked = Some(*field);
            }
        }
        ui.end_row();

        for row in state.page_rows() {
            ui.label(egui::RichText::new(&row.symbol).strong());
            ui.label(format_volume(row.avg_1yr_volume));
            ui.label(format_ratio(row.atr_ratio));
            ui.label(format_price(row.last_price));
            ui.colored_label(theme.dim, format_update_date(row));
            ui.end_row();
        }
    });

    if let Some(field) = clicked {
        app.sort_by(field);
    }
}

fn render_pagination(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    ui.horizontal(|ui| {
        if ui
            .add_enabled(state.has_previous_page(), egui::Button::new("Previous"))
            .clicked()
        {
            app.change_page(PageDirection::Previous);
        }

        ui.label(format!(
            "Page {} of {}",
            state.view.current_page,
            state.total_pages()
        ));

        if ui
            .add_enabled(state.has_next_page(), egui::Button::new("Next"))
            .clicked()
        {
            app.change_page(PageDirection::Next);
        }
    });
}

