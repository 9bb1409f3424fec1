//! JSON file persistence: one indented array per entity kind plus an
//! optional combined export document.
use chrono::Utc;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use dodger_game::analytics::{StoreTotals, store_totals};
use dodger_game::snapshot::{
    DataSnapshot, ExportDocument, Record, RestoreSummary, SnapshotError, decode_records,
    encode_records, restore_into,
};
use dodger_game::{GameDataStore, GameSession, Obstacle, Player, PowerUp};

pub const PLAYERS_FILE: &str = "players.json";
pub const SESSIONS_FILE: &str = "sessions.json";
pub const OBSTACLES_FILE: &str = "obstacles.json";
pub const POWER_UPS_FILE: &str = "powerups.json";
pub const DEFAULT_EXPORT_FILE: &str = "game_data_export.json";

pub const DATA_FILES: [&str; 4] = [PLAYERS_FILE, SESSIONS_FILE, OBSTACLES_FILE, POWER_UPS_FILE];

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to create data directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode {path}")]
    Encode {
        path: PathBuf,
        #[source]
        source: SnapshotError,
    },
    #[error("invalid data in {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: SnapshotError,
    },
}

/// Reads and writes the store under a single data directory.
#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
    data_dir: PathBuf,
}

impl JsonFilePersistence {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn file_path(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }

    async fn ensure_data_dir(&self) -> Result<(), PersistenceError> {
        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|source| PersistenceError::CreateDir {
                path: self.data_dir.clone(),
                source,
            })
    }

    async fn write_file(&self, path: PathBuf, contents: String) -> Result<(), PersistenceError> {
        tokio::fs::write(&path, contents)
            .await
            .map_err(|source| PersistenceError::Write { path, source })
    }

    async fn write_collection<T: Record>(
        &self,
        file_name: &str,
        records: &[T],
    ) -> Result<(), PersistenceError> {
        let path = self.file_path(file_name);
        let json = encode_records(records).map_err(|source| PersistenceError::Encode {
            path: path.clone(),
            source,
        })?;
        self.write_file(path, json).await?;
        log::debug!("saved {} {}", records.len(), T::KIND);
        Ok(())
    }

    /// `Ok(None)` when the file does not exist.
    async fn read_collection<T: Record>(
        &self,
        file_name: &str,
    ) -> Result<Option<Vec<T>>, PersistenceError> {
        let path = self.file_path(file_name);
        let json = match tokio::fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(PersistenceError::Read { path, source }),
        };
        decode_records(&json)
            .map(Some)
            .map_err(|source| PersistenceError::Decode { path, source })
    }

    /// Write all four collection files, creating the data directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or any file cannot be written.
    pub async fn save_all(&self, store: &GameDataStore) -> Result<StoreTotals, PersistenceError> {
        self.ensure_data_dir().await?;
        self.write_collection(PLAYERS_FILE, store.players()).await?;
        self.write_collection(SESSIONS_FILE, store.sessions()).await?;
        self.write_collection(OBSTACLES_FILE, store.obstacles()).await?;
        self.write_collection(POWER_UPS_FILE, store.power_ups()).await?;
        let totals = store_totals(store);
        log::info!(
            "saved {} players, {} sessions, {} obstacles, {} power-ups to {}",
            totals.players,
            totals.sessions,
            totals.obstacles,
            totals.power_ups,
            self.data_dir.display()
        );
        Ok(totals)
    }

    /// Read every existing collection file and append its records to `store`.
    ///
    /// Files are decoded before the store is touched, so a bad file leaves the
    /// store unchanged. Returns `Ok(None)` when no data file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or holds invalid records.
    pub async fn load_all(
        &self,
        store: &mut GameDataStore,
    ) -> Result<Option<RestoreSummary>, PersistenceError> {
        let players = self.read_collection::<Player>(PLAYERS_FILE).await?;
        let sessions = self.read_collection::<GameSession>(SESSIONS_FILE).await?;
        let obstacles = self.read_collection::<Obstacle>(OBSTACLES_FILE).await?;
        let power_ups = self.read_collection::<PowerUp>(POWER_UPS_FILE).await?;

        if players.is_none() && sessions.is_none() && obstacles.is_none() && power_ups.is_none() {
            log::info!("no saved data in {}", self.data_dir.display());
            return Ok(None);
        }

        let snapshot = DataSnapshot {
            players: players.unwrap_or_default(),
            sessions: sessions.unwrap_or_default(),
            obstacles: obstacles.unwrap_or_default(),
            power_ups: power_ups.unwrap_or_default(),
        };
        let summary = restore_into(store, &snapshot);
        if summary.skipped_sessions > 0 {
            log::warn!(
                "skipped {} sessions referencing unknown players",
                summary.skipped_sessions
            );
        }
        log::info!("loaded {summary:?} from {}", self.data_dir.display());
        Ok(Some(summary))
    }

    /// Write the combined export document and return its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be encoded or written.
    pub async fn export(
        &self,
        store: &GameDataStore,
        file_name: &str,
    ) -> Result<PathBuf, PersistenceError> {
        self.ensure_data_dir().await?;
        let path = self.file_path(file_name);
        let document = ExportDocument::new(store.snapshot(), Utc::now());
        let json = document.to_json().map_err(|source| PersistenceError::Encode {
            path: path.clone(),
            source,
        })?;
        self.write_file(path.clone(), json).await?;
        log::info!("exported data to {}", path.display());
        Ok(path)
    }

    /// Whether any collection file exists.
    pub async fn has_saved_data(&self) -> bool {
        for file_name in DATA_FILES {
            if tokio::fs::try_exists(self.file_path(file_name))
                .await
                .unwrap_or(false)
            {
                return true;
            }
        }
        false
    }
}
