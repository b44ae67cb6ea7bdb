//! Negative News Screening - Main Entry Point
//!
//! Serves the Dioxus application together with the mock screening API.
//! Uses dioxus::serve() pattern for dx serve compatibility.

use negative_news_screening::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    use negative_news_screening::config::ServiceConfig;
    use negative_news_screening::handlers::{api_router, ScreeningHandlerState};

    std::panic::set_hook(Box::new(|panic_info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        eprintln!("\n=== PANIC CAUGHT ===");
        eprintln!("Panic info: {}", panic_info);
        eprintln!("Backtrace:\n{}", backtrace);
        eprintln!("=== END PANIC ===\n");
    }));

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Negative News Screening...");

    dioxus::serve(|| async move {
        let config = ServiceConfig::from_env()?;
        tracing::info!(
            "Screening stages take {:?} in total, answers are delayed by {:?}",
            config.schedule.total(),
            config.answer_delay
        );

        // NOTE: Axum 0.8 uses {param} syntax instead of :param
        let router = dioxus::server::router(App)
            .merge(api_router(ScreeningHandlerState::new(&config)))
            .layer(tower_http::trace::TraceLayer::new_for_http());

        Ok(router)
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] Negative News Screening - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
