use std::path::PathBuf;

use dodger_game::{DataGenerator, GameDataStore, RestoreSummary};

use crate::persistence::JsonFilePersistence;

/// Everything a menu handler needs, built once in `main`.
#[derive(Debug)]
pub struct AppContext {
    pub store: GameDataStore,
    pub persistence: JsonFilePersistence,
    pub generator: DataGenerator,
}

impl AppContext {
    pub fn new(data_dir: impl Into<PathBuf>, seed: Option<u64>) -> Self {
        Self {
            store: GameDataStore::new(),
            persistence: JsonFilePersistence::new(data_dir),
            generator: DataGenerator::new(seed),
        }
    }

    /// Save every collection; failures are logged and reported as `false`.
    pub async fn save(&self) -> bool {
        match self.persistence.save_all(&self.store).await {
            Ok(_) => true,
            Err(err) => {
                log::error!("save failed: {err:#}");
                false
            }
        }
    }

    /// Load saved collections into the store.
    ///
    /// `None` when nothing was loaded, either because no data exists or
    /// because reading failed (logged).
    pub async fn load(&mut self) -> Option<RestoreSummary> {
        match self.persistence.load_all(&mut self.store).await {
            Ok(summary) => summary,
            Err(err) => {
                log::error!("load failed: {err:#}");
                None
            }
        }
    }

    /// Write the combined export; `None` on failure (logged).
    pub async fn export(&self, file_name: &str) -> Option<PathBuf> {
        match self.persistence.export(&self.store, file_name).await {
            Ok(path) => Some(path),
            Err(err) => {
                log::error!("export failed: {err:#}");
                None
            }
        }
    }
}
