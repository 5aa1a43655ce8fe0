// Agent Query Console - Main Entry Point
// Native Rust GUI for sending queries to the agent backend

use agent_query_console::api::HttpQueryBackend;
use agent_query_console::config::Config;
use agent_query_console::controller::QueryController;
use agent_query_console::state::ConsoleAnimations;
use agent_query_console::ui::render_app_layout;
use anyhow::Context as _;
use eframe::egui;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Hint text cycled by the placeholder animation
const INPUT_HINT: &str = "Ask about weather, math, quotes, jokes or facts...";

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agent_query_console=info".into()),
        )
        .init();

    // Load configuration
    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);

    // Requests run on a background runtime; the UI thread only polls for results
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let backend = HttpQueryBackend::from_config(&config)?;
    info!(url = %backend.url(), "Query endpoint configured");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Agent Query Console")
            .with_inner_size([900.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Agent Query Console",
        options,
        Box::new(move |cc| {
            let ctx = cc.egui_ctx.clone();
            let controller = QueryController::new(
                Arc::new(backend),
                runtime.handle().clone(),
                config.badge_highlight(),
            )
            .with_waker(move || ctx.request_repaint());

            Box::new(QueryConsoleApp {
                controller,
                animations: ConsoleAnimations::new(
                    INPUT_HINT,
                    config.ui.animations_enabled,
                    Instant::now(),
                ),
                _runtime: runtime,
            })
        }),
    )
    .map_err(|e| anyhow::anyhow!("Window error: {}", e))?;

    info!("Console closed");
    Ok(())
}

/// Main application struct
struct QueryConsoleApp {
    controller: QueryController,
    animations: ConsoleAnimations,
    /// Keeps in-flight requests alive for as long as the window is open
    _runtime: tokio::runtime::Runtime,
}

impl eframe::App for QueryConsoleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.controller.poll(now);
        self.animations.tick(now);

        render_app_layout(ctx, &mut self.controller, &self.animations, now);

        // Wake up again for the next badge expiry or animation step
        let next = [
            self.controller.next_deadline(),
            self.animations.next_deadline(now),
        ]
        .into_iter()
        .flatten()
        .min();
        if let Some(deadline) = next {
            ctx.request_repaint_after(deadline.saturating_duration_since(Instant::now()));
        }
    }
}
