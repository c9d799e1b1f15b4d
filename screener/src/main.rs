use screener::app::App;
use screener::config::ScreenerConfig;
use screener::ui::{self, theme::Theme};
use screener::utils::runtime::TOKIO_RT;
use std::time::Duration;

const WINDOW_TITLE: &str = "Stock Screener";

/// eframe adapter around the application orchestrator
struct ScreenerApp {
    app: App,
}

impl ScreenerApp {
    fn new(cc: &eframe::CreationContext<'_>, app: App) -> Self {
        Theme::apply(&cc.egui_ctx);
        Self { app }
    }
}

impl eframe::App for ScreenerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();
        ui::render(ctx, &mut self.app);

        // Task results arrive without input events; keep polling while a
        // request is in flight
        let waiting = self
            .app
            .state
            .try_read()
            .map(|state| state.view.loading || state.view_dirty)
            .unwrap_or(true);
        if waiting {
            ctx.request_repaint_after(Duration::from_millis(100));
        } else {
            ctx.request_repaint_after(Duration::from_secs(1));
        }
    }
}

fn main() -> eframe::Result<()> {
    screener::debug::init();

    let config = match ScreenerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        api_url = %config.api_url,
        timeout_secs = config.request_timeout.as_secs(),
        "Starting screener"
    );

    // Tasks spawned from the GUI thread need a runtime context
    let _guard = TOKIO_RT.enter();

    let app = match App::new(&config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create API client");
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(ScreenerApp::new(cc, app)))),
    );

    if let Err(e) = &result {
        tracing::error!(error = %e, "Window closed with error");
    }
    tracing::info!("Screener shut down");
    result
}
