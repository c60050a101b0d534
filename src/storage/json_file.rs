//! A [BlobStore] backed by a single JSON file on disk.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use serde_json::Value;
use time::Date;

use crate::{
    Error,
    storage::BlobStore,
    transaction::{Transaction, TransactionKind},
};

/// Stores the transaction collection as a JSON array in a file.
///
/// Saves write a sibling temporary file and rename it over the target so a
/// crash mid-write never leaves a truncated blob.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`. The file need not exist
    /// yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// A transaction record as found in the blob, before migration.
///
/// Blobs written by older versions of the application may have numeric ids
/// and no `type` field.
#[derive(Deserialize)]
struct StoredRecord {
    id: Value,
    name: String,
    amount: f64,
    category: String,
    #[serde(with = "iso_date")]
    date: Date,
    #[serde(rename = "type", default)]
    kind: TransactionKind,
}

impl StoredRecord {
    /// Migrate a stored record into a [Transaction].
    ///
    /// Numeric ids are coerced to their decimal string. Records with ids that
    /// are neither strings nor numbers are dropped.
    fn migrate(self) -> Option<Transaction> {
        let id = match self.id {
            Value::String(id) => id,
            Value::Number(id) => id.to_string(),
            other => {
                tracing::warn!("Dropping transaction record with malformed id: {other:?}");
                return None;
            }
        };

        Some(Transaction {
            id,
            name: self.name,
            amount: self.amount,
            category: self.category,
            date: self.date,
            kind: self.kind,
        })
    }
}

impl BlobStore for JsonFileStore {
    fn load(&self) -> Vec<Transaction> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(error) => {
                tracing::info!(
                    "Could not read {} ({error}), starting with an empty collection.",
                    self.path.display()
                );
                return Vec::new();
            }
        };

        let records: Vec<StoredRecord> = match serde_json::from_str(&text) {
            Ok(records) => records,
            Err(error) => {
                tracing::warn!(
                    "Could not parse {} ({error}), starting with an empty collection.",
                    self.path.display()
                );
                return Vec::new();
            }
        };

        records
            .into_iter()
            .filter_map(StoredRecord::migrate)
            .collect()
    }

    fn save(&mut self, transactions: &[Transaction]) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(transactions)
            .map_err(|error| Error::SaveFailed(error.to_string()))?;

        let tmp = tmp_path(&self.path);
        write_file(&tmp, &json).map_err(|error| Error::SaveFailed(error.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|error| Error::SaveFailed(error.to_string()))?;

        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.tmp"),
        None => "tmp".to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
