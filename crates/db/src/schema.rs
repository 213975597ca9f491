use eyre::{Result, WrapErr};
use kasif_core::{models::state::AppState, seed};
use serde::{de::DeserializeOwned, Serialize};
use tracing::info;

use crate::{blob::BlobStore, repositories::credentials};

/// The six persisted slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Students,
    Instructors,
    MarketItems,
    Tasks,
    Announcements,
    Badges,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Students,
        Collection::Instructors,
        Collection::MarketItems,
        Collection::Tasks,
        Collection::Announcements,
        Collection::Badges,
    ];

    fn slot(self) -> &'static str {
        match self {
            Collection::Students => "students",
            Collection::Instructors => "instructors",
            Collection::MarketItems => "market",
            Collection::Tasks => "tasks",
            Collection::Announcements => "announcements",
            Collection::Badges => "badges",
        }
    }

    /// Slot key, e.g. `kasif_students_v3.1`. An empty version gives the unsuffixed name.
    pub fn key(self, version: &str) -> String {
        if version.is_empty() {
            format!("kasif_{}", self.slot())
        } else {
            format!("kasif_{}_{}", self.slot(), version)
        }
    }

    pub fn encode(self, state: &AppState) -> Result<String> {
        let json = match self {
            Collection::Students => serde_json::to_string(&state.students),
            Collection::Instructors => serde_json::to_string(&state.instructors),
            Collection::MarketItems => serde_json::to_string(&state.market_items),
            Collection::Tasks => serde_json::to_string(&state.tasks),
            Collection::Announcements => serde_json::to_string(&state.announcements),
            Collection::Badges => serde_json::to_string(&state.badges),
        };
        json.wrap_err_with(|| format!("Failed to encode {}", self.slot()))
    }
}

async fn load_or_seed<T, F>(
    store: &dyn BlobStore,
    key: &str,
    seed: F,
) -> Result<Vec<T>>
where
    T: DeserializeOwned + Serialize,
    F: FnOnce() -> Vec<T>,
{
    match store.read(key).await? {
        Some(json) => serde_json::from_str(&json)
            .wrap_err_with(|| format!("Slot {} does not hold valid data", key)),
        None => {
            let records = seed();
            store.write(key, &serde_json::to_string(&records)?).await?;
            info!("Seeded slot {} with {} records", key, records.len());
            Ok(records)
        }
    }
}

/// Loads all collections for `version`. Slots that do not exist yet get default records.
///
/// Versions do not migrate into each other: switching the suffix starts from seed data.
pub async fn initialize_store(store: &dyn BlobStore, version: &str) -> Result<AppState> {
    info!("Loading store (version suffix {:?})...", version);

    let students_key = Collection::Students.key(version);
    let instructors_key = Collection::Instructors.key(version);

    // Seed credentials are only hashed when an account slot is about to be seeded.
    let needs_seed_hash = store.read(&students_key).await?.is_none()
        || store.read(&instructors_key).await?.is_none();
    let seed_hash = if needs_seed_hash {
        credentials::hash_password(seed::SEED_PASSWORD)?
    } else {
        String::new()
    };

    let state = AppState {
        students: load_or_seed(store, &students_key, || seed::students(&seed_hash)).await?,
        instructors: load_or_seed(store, &instructors_key, || seed::instructors(&seed_hash))
            .await?,
        market_items: load_or_seed(store, &Collection::MarketItems.key(version), seed::market_items)
            .await?,
        tasks: load_or_seed(store, &Collection::Tasks.key(version), seed::tasks).await?,
        announcements: load_or_seed(
            store,
            &Collection::Announcements.key(version),
            seed::announcements,
        )
        .await?,
        badges: load_or_seed(store, &Collection::Badges.key(version), seed::badges).await?,
    };

    info!(
        "Store loaded: {} students, {} instructors",
        state.students.len(),
        state.instructors.len()
    );
    Ok(state)
}
