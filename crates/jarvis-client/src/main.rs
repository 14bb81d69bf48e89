use anyhow::Result;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jarvis_client::{ClientConfig, ui::JarvisApp};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jarvis_client=debug,jarvis=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting JaRvis client...");

    let config = ClientConfig::load()?;
    tracing::info!("Using server {}", config.server_url);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 560.0])
            .with_min_inner_size([360.0, 420.0])
            .with_title("JaRvis"),
        ..Default::default()
    };

    eframe::run_native(
        "JaRvis",
        options,
        Box::new(|cc| Ok(Box::new(JarvisApp::new(cc, config)?))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run eframe: {}", e))?;

    Ok(())
}
