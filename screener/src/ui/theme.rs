//! # GUI Theme
//!
//! Dark palette for the screener window.

use egui::{Color32, Context, Stroke, Visuals};
use egui::Theme as EguiTheme;

/// Application theme colors
pub struct Theme {
    /// Normal text color
    pub normal: Color32,
    /// Selected/highlighted items (active sort header, primary button)
    pub selected: Color32,
    /// Border color
    pub border: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub background: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            normal: Color32::from_rgb(230, 230, 230),
            selected: Color32::from_rgb(40, 110, 200),
            border: Color32::from_rgb(60, 60, 60),
            dim: Color32::from_rgb(150, 150, 150),
            success: Color32::from_rgb(60, 200, 90),
            error: Color32::from_rgb(235, 70, 70),
            warning: Color32::from_rgb(255, 170, 0),
            background: Color32::from_rgb(18, 18, 18),
        }
    }
}

impl Theme {
    /// Build egui visuals from this palette
    pub fn visuals(&self) -> Visuals {
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(self.normal);
        visuals.panel_fill = self.background;
        visuals.window_fill = self.background;
        visuals.window_stroke = Stroke::new(1.0, self.border);

        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.selected);
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, self.selected);

        visuals.selection.bg_fill = self.selected.linear_multiply(0.4);
        visuals.selection.stroke = Stroke::new(1.0, self.selected);

        visuals
    }

    /// Apply the theme to an egui context
    pub fn apply(ctx: &Context) {
        let visuals = Theme::default().visuals();

        // style_mut_of rather than set_visuals so both egui themes match
        for egui_theme in [EguiTheme::Dark, EguiTheme::Light] {
            ctx.style_mut_of(egui_theme, |style| {
                style.visuals = visuals.clone();
                style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
                style.spacing.button_padding = egui::Vec2::new(8.0, 4.0);
            });
        }

        tracing::debug!("Applied screener theme");
    }
}
