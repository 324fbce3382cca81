use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use missing_persons::{
    consts::consts::RecordId,
    model::{record::MissingPersonRecord, status::RecordStatus},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Unable to read records file: {0}")]
    UnableToRead(io::Error),

    #[error("Unable to write records file: {0}")]
    UnableToWrite(io::Error),

    #[error("Unable to serialize records: {0}")]
    UnableToSerialize(serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Records kept as a pretty-printed JSON array in a single file.
///
/// Every read goes to disk so edits made to the file by hand show up on the next request.
pub struct RecordStore {
    path: PathBuf,
    // Serialises read-modify-write cycles across HTTP workers
    write_lock: Mutex<()>,
}

impl RecordStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty collection, so is a file that does not hold a JSON array of
    /// records
    pub fn load(&self) -> StoreResult<Vec<MissingPersonRecord>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => match err.kind() {
                io::ErrorKind::NotFound => return Ok(vec![]),
                _ => return Err(StoreError::UnableToRead(err)),
            },
        };

        match serde_json::from_str::<Vec<MissingPersonRecord>>(&contents) {
            Ok(records) => Ok(records),
            Err(err) => {
                log::warn!(
                    "Ignoring malformed records file {}: {}",
                    self.path.display(),
                    err
                );
                Ok(vec![])
            }
        }
    }

    fn save(&self, records: &[MissingPersonRecord]) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(records).map_err(StoreError::UnableToSerialize)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(StoreError::UnableToWrite)?;
            }
        }

        fs::write(&self.path, json).map_err(StoreError::UnableToWrite)
    }

    /// Stores a new record under the next sequential id (`001`, `002`, ...) and returns it
    pub fn register(&self, mut record: MissingPersonRecord) -> StoreResult<MissingPersonRecord> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut records = self.load()?;

        record.id = RecordId(format!("{:03}", records.len() + 1));
        records.push(record.clone());

        self.save(&records)?;

        Ok(record)
    }

    /// Sets the record's status to found and persists it. `None` when no record has this id.
    pub fn mark_found(&self, id: &RecordId) -> StoreResult<Option<MissingPersonRecord>> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut records = self.load()?;

        let updated = match records.iter_mut().find(|record| &record.id == id) {
            Some(record) => {
                record.status = RecordStatus::Found.to_string();
                record.clone()
            }
            None => return Ok(None),
        };

        self.save(&records)?;

        Ok(Some(updated))
    }
}
