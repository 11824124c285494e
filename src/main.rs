use clap::Parser;
use log::LevelFilter;
use std::path::Path;

use passpass::cli::{self, Args};
use passpass::core::config::Config;
use passpass::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(endpoint) = &args.endpoint {
        config.strength_endpoint = endpoint.clone();
    }
    if args.verbose {
        config.log_level = LevelFilter::Debug;
    }

    logging::init(&config)?;
    log::debug!("Loaded config: {:?}", config);

    cli::run(args, config).await.map_err(|e| {
        log::error!("{}", e);
        e
    })
}
