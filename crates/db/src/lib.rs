pub mod blob;
pub mod export;
pub mod repositories;
pub mod schema;

pub mod mock;

use std::sync::Arc;

use eyre::Result;
use kasif_core::{errors::KasifResult, models::state::AppState};
use tokio::sync::{RwLock, RwLockReadGuard};

use crate::{blob::BlobStore, schema::Collection};

/// Storage version suffix used by the current release.
pub const DEFAULT_STORAGE_VERSION: &str = "v3.1";

/// In-memory application state backed by one JSON blob per collection.
///
/// Reads share the lock. Mutations run against a copy of the state and only replace it
/// after every touched collection has been written back.
pub struct Database {
    store: Arc<dyn BlobStore>,
    version: String,
    state: RwLock<AppState>,
}

impl Database {
    /// Loads every collection, seeding the ones that have never been written.
    pub async fn open(store: Arc<dyn BlobStore>, version: &str) -> Result<Self> {
        let state = schema::initialize_store(store.as_ref(), version).await?;
        Ok(Self::from_state(store, version, state))
    }

    /// Wraps an already loaded state without touching the store.
    pub fn from_state(store: Arc<dyn BlobStore>, version: &str, state: AppState) -> Self {
        Self {
            store,
            version: version.to_string(),
            state: RwLock::new(state),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, AppState> {
        self.state.read().await
    }

    /// Applies `f` and persists `touched` if the state changed.
    ///
    /// If `f` fails or a write fails, the in-memory state is left as it was.
    pub async fn mutate<T, F>(&self, touched: &[Collection], f: F) -> KasifResult<T>
    where
        F: FnOnce(&mut AppState) -> KasifResult<T>,
    {
        let mut guard = self.state.write().await;
        let mut next = guard.clone();
        let value = f(&mut next)?;

        if next != *guard {
            for collection in touched {
                let json = collection.encode(&next)?;
                self.store.write(&collection.key(&self.version), &json).await?;
            }
            *guard = next;
        }

        Ok(value)
    }
}
