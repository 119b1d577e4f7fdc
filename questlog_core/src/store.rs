//! Read-only access to the log snapshot.
//!
//! The store keeps one JSON Lines file per collection. Another process may be
//! appending to these files. Reads take a shared lock, which only excludes
//! writers that lock exclusively; a torn or half-written line from any other
//! writer fails to parse and is skipped like any malformed entry.

use crate::{LogBook, Result, Timestamped};
use fs2::FileExt;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const WEIGHT_FILE: &str = "weight_logs.jsonl";
pub const CARDIO_FILE: &str = "cardio_logs.jsonl";
pub const STRENGTH_FILE: &str = "workouts.jsonl";
pub const BODYWEIGHT_FILE: &str = "bodyweight_logs.jsonl";
pub const NUTRITION_FILE: &str = "food_logs.jsonl";

/// Source of immutable log snapshots
pub trait LogSource {
    fn snapshot(&self) -> Result<LogBook>;
}

/// Directory of JSONL collections
pub struct JsonlSource {
    dir: PathBuf,
}

impl JsonlSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl LogSource for JsonlSource {
    fn snapshot(&self) -> Result<LogBook> {
        let book = LogBook {
            weight: read_collection(&self.dir.join(WEIGHT_FILE))?,
            cardio: read_collection(&self.dir.join(CARDIO_FILE))?,
            strength: read_collection(&self.dir.join(STRENGTH_FILE))?,
            bodyweight: read_collection(&self.dir.join(BODYWEIGHT_FILE))?,
            nutrition: read_collection(&self.dir.join(NUTRITION_FILE))?,
        };

        tracing::info!("Loaded {} logs from {:?}", book.len(), self.dir);
        Ok(book)
    }
}

/// Read one collection, newest first.
///
/// A missing file is an empty collection. Lines that fail to parse are
/// logged and skipped.
pub fn read_collection<T>(path: &Path) -> Result<Vec<T>>
where
    T: DeserializeOwned + Timestamped,
{
    if !path.exists() {
        tracing::debug!("No collection file at {:?}", path);
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    file.lock_shared()?;

    let reader = BufReader::new(&file);
    let mut logs = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<T>(&line) {
            Ok(log) => logs.push(log),
            Err(e) => {
                tracing::warn!(
                    "Skipping malformed entry at {:?} line {}: {}",
                    path,
                    line_num + 1,
                    e
                );
            }
        }
    }

    file.unlock()?;

    logs.sort_by_key(|l| std::cmp::Reverse(l.date()));
    tracing::debug!("Read {} entries from {:?}", logs.len(), path);
    Ok(logs)
}
