use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use kasif_api::config::ApiConfig;
use kasif_db::{blob::FileBlobStore, Database};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Initialize tracing before the store logs its seeding
    kasif_api::init_tracing(config.log_level)?;

    // Open the slot directory, seeding any collection that was never written
    let store = Arc::new(FileBlobStore::open(&config.data_dir).await?);
    let db = Database::open(store, &config.storage_version).await?;

    // Start API server
    kasif_api::start_server(config, db).await?;

    Ok(())
}
