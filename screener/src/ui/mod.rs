//! # GUI Rendering
//!
//! Immediate-mode rendering with egui. Each frame renders from a cloned
//! state snapshot so no lock is held while widgets are laid out; user input
//! goes back through [`App`] action methods.

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::{ApiStatus, App, AppState};
use crate::ui::theme::Theme;

/// Main render function - called every frame by eframe
pub fn render(ctx: &egui::Context, app: &mut App) {
    let state = match app.state.try_read() {
        Some(state_guard) => state_guard.clone(),
        // Lock is held by another task, skip this frame
        None => return,
    };

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        render_status_bar(ui, &state);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                screens::screener::render(ui, &state, app);
            });
    });
}

/// API URL, connectivity and result counts
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.colored_label(theme.dim, format!("API: {}", state.api_url()));

        ui.separator();

        match state.api_status {
            ApiStatus::Online => ui.colored_label(theme.success, "● Connected"),
            ApiStatus::Offline => ui.colored_label(theme.error, "● Disconnected"),
            ApiStatus::Unknown => ui.colored_label(theme.warning, "○ Checking..."),
        };

        if !state.results.is_empty() {
            ui.separator();
            ui.colored_label(
                theme.dim,
                format!("{} of {} results shown", state.rows.len(), state.results.len()),
            );
        }

        if let Some(updated) = state.last_updated {
            ui.separator();
            ui.colored_label(theme.dim, format!("Updated {}", updated.format("%H:%M:%S")));
        }
    });
}
