use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::Path;

use log::{info, warn};
use serde::Serialize;
use thiserror::Error;

use crate::core::{ScoreSnapshot, Session};

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Could not access score history: {0}")]
    Io(#[from] io::Error),
    #[error("Could not encode score history: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, HistoryError>;

/// Ordered list of past sessions, stored as a JSON array of score records.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreHistory {
    records: Vec<ScoreSnapshot>,
}

impl ScoreHistory {
    /// Reads the history at `path`. A missing file, or one that does not hold
    /// a list of score records, reads as an empty history.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str(&text) {
            Ok(records) => Ok(ScoreHistory { records }),
            Err(err) => {
                warn!(
                    "Ignoring unreadable score history {}: {}",
                    path.display(),
                    err
                );
                Ok(Self::default())
            }
        }
    }

    pub fn records(&self) -> &[ScoreSnapshot] {
        &self.records
    }

    pub fn push(&mut self, snapshot: ScoreSnapshot) {
        self.records.push(snapshot);
    }

    /// Writes the history to a temporary file beside `path`, then renames it
    /// over `path`, so an interrupted save keeps the previous file intact.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.records.serialize(&mut serializer)?;

        let dir = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        file.write_all(&buf)?;
        file.as_file().sync_all()?;
        file.persist(path).map_err(io::Error::from)?;
        Ok(())
    }

    /// Appends `snapshot` to the history stored at `path`, creating the file
    /// if needed. Returns the updated history.
    pub fn append_to_file(path: impl AsRef<Path>, snapshot: ScoreSnapshot) -> Result<Self> {
        let path = path.as_ref();
        let mut history = Self::load(path)?;
        info!("Saving score to {}: {}", path.display(), snapshot);
        history.push(snapshot);
        history.save(path)?;
        Ok(history)
    }

    /// Appends the session's score to `path` when the session is won,
    /// returning the updated history. Does nothing otherwise.
    pub fn record_if_won(path: impl AsRef<Path>, session: &Session) -> Result<Option<Self>> {
        if !session.is_won() {
            return Ok(None);
        }
        Self::append_to_file(path, session.snapshot()).map(Some)
    }
}
