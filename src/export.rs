//! Writes the student and instructor CSV exports from the slot directory.
//!
//! Usage: `kasif-export [OUTPUT_DIR]` (defaults to the current directory).

use std::{fs::File, io::BufWriter, path::PathBuf, sync::Arc};

use color_eyre::eyre::{Result, WrapErr};
use dotenv::dotenv;
use kasif_api::config::ApiConfig;
use kasif_db::{
    blob::FileBlobStore,
    export,
    repositories::{instructor, student},
    Database,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let config = ApiConfig::from_env()?;
    kasif_api::init_tracing(config.log_level)?;

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)
        .wrap_err_with(|| format!("Failed to create {}", out_dir.display()))?;

    let store = Arc::new(FileBlobStore::open(&config.data_dir).await?);
    let db = Database::open(store, &config.storage_version).await?;

    let students = student::list_all(&db).await;
    let path = out_dir.join(export::STUDENTS_FILE_NAME);
    export::write_students(&students, BufWriter::new(File::create(&path)?))?;
    info!("Exported {} students to {}", students.len(), path.display());

    let instructors = instructor::list(&db, None).await;
    let path = out_dir.join(export::INSTRUCTORS_FILE_NAME);
    export::write_instructors(&instructors, BufWriter::new(File::create(&path)?))?;
    info!("Exported {} instructors to {}", instructors.len(), path.display());

    Ok(())
}
