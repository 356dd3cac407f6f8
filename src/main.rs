use dotenv::dotenv;
use tracing::{error, info, warn};

use autoloc_backend::app::app::App;
use autoloc_backend::util::logger::Logger;

#[tokio::main]
async fn main() {
    let _logger = match Logger::new() {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            std::process::exit(1);
        }
    };

    info!("🚗 Starting Autoloc Backend Application");

    // Load environment variables from .env file
    match dotenv() {
        Ok(_) => info!("✅ Successfully loaded .env file"),
        Err(e) => warn!("⚠️ Failed to load .env file: {} (using system env vars)", e),
    }

    let app = match App::new().await {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = app.start().await {
        error!("Server stopped with error: {}", e);
        std::process::exit(1);
    }
}
