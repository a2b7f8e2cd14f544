use salary_predictor::application::bootstrap::ServicesBootstrap;
use salary_predictor::application::client::SalaryClient;
use salary_predictor::config::Config;
use salary_predictor::interfaces::ui::{SalaryApp, StartupErrorApp};

use tracing::{Level, error, info};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    // 0. Load Env (before starting anything)
    dotenvy::dotenv().ok();

    // 1. Setup Logging
    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Salary Predictor {} starting...", env!("CARGO_PKG_VERSION"));

    // 2. Runtime for rate lookups; lives until the window closes
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;

    // 3. Config + services. A broken model bundle leaves only the error screen.
    let config = Config::from_env()?;
    let app: Box<dyn eframe::App> = match ServicesBootstrap::init(&config) {
        Ok(service) => {
            info!("Model ready. Launching UI.");
            Box::new(SalaryApp::new(SalaryClient::new(
                service,
                runtime.handle().clone(),
            )))
        }
        Err(e) => {
            error!("Failed to load model bundle: {}", e);
            Box::new(StartupErrorApp::new(e.to_string()))
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Employee Salary Prediction")
            .with_inner_size([1100.0, 780.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Employee Salary Prediction",
        options,
        Box::new(move |_cc| Ok(app)),
    )
    .map_err(|e| anyhow::anyhow!("UI error: {}", e))?;

    info!("Window closed. Exiting.");
    runtime.shutdown_background();
    Ok(())
}
