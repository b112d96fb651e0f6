use std::sync::Arc;

use promgreet::config::load_config;
use promgreet::startup;
use promgreet::utils::logger::init_logging;
use tracing::error;

#[tokio::main]
async fn main() {
    let config = Arc::new(load_config());
    init_logging(&config.logging);

    if let Err(e) = startup::run(config).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
