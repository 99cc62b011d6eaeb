//! The table store: load/save of one typed record vector to/from a flat CSV file.
//!
//! Each table is a header row of column names followed by one line per record, UTF-8 text. A
//! missing file reads as an empty table; a present file whose header does not match the expected
//! schema is a fatal error. Saving always rewrites the whole file. There is no locking, so two
//! processes writing the same table at once can lose rows.

use crate::model::{Expense, Project, EXPENSE_COLUMNS, PROJECT_COLUMNS};
use crate::{utils, Result};
use anyhow::{bail, Context};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A record type that lives in one flat CSV table.
pub trait TableRecord: Serialize + DeserializeOwned {
    /// The exact header row of the backing file, in column order.
    const COLUMNS: &'static [&'static str];

    /// The table name used in diagnostics, e.g. "projects".
    const TABLE_NAME: &'static str;
}

impl TableRecord for Project {
    const COLUMNS: &'static [&'static str] = PROJECT_COLUMNS;
    const TABLE_NAME: &'static str = "projects";
}

impl TableRecord for Expense {
    const COLUMNS: &'static [&'static str] = EXPENSE_COLUMNS;
    const TABLE_NAME: &'static str = "expenses";
}

/// Loads and saves one CSV table of `T` records.
#[derive(Debug, Clone)]
pub struct TableStore<T> {
    path: PathBuf,
    _record: PhantomData<T>,
}

impl<T: TableRecord> TableStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all records in file order.
    ///
    /// # Errors
    ///
    /// - Returns an error if the file exists but its header row does not match
    ///   [`TableRecord::COLUMNS`] exactly.
    /// - Returns an error if a row cannot be parsed into `T`.
    ///
    /// A nonexistent file is not an error; it reads as an empty table.
    pub async fn load(&self) -> Result<Vec<T>> {
        if !self.path.is_file() {
            debug!(
                "No {} table at {}, starting empty",
                T::TABLE_NAME,
                self.path.display()
            );
            return Ok(Vec::new());
        }
        let content = utils::read(&self.path).await?;

        let mut reader = csv::Reader::from_reader(content.as_bytes());
        let headers = reader
            .headers()
            .with_context(|| format!("Unable to read the header row of {}", self.path.display()))?;
        let found: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        if found != T::COLUMNS {
            bail!(
                "Malformed {} table at {}: expected columns [{}], found [{}]",
                T::TABLE_NAME,
                self.path.display(),
                T::COLUMNS.join(", "),
                found.join(", ")
            );
        }

        let mut rows = Vec::new();
        for (ix, result) in reader.deserialize().enumerate() {
            let record: T = result.with_context(|| {
                // Row 1 is the header.
                format!(
                    "Unable to parse row {} of the {} table at {}",
                    ix + 2,
                    T::TABLE_NAME,
                    self.path.display()
                )
            })?;
            rows.push(record);
        }
        Ok(rows)
    }

    /// Rewrites the whole table file: header row plus one line per record.
    ///
    /// The new contents are written to a temp file beside the table and renamed into place, so a
    /// crash mid-write leaves the old file intact. Concurrent writers still race.
    pub async fn save(&self, rows: &[T]) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer
            .write_record(T::COLUMNS)
            .with_context(|| format!("Unable to serialize the {} table header", T::TABLE_NAME))?;
        for row in rows {
            writer
                .serialize(row)
                .with_context(|| format!("Unable to serialize a {} table row", T::TABLE_NAME))?;
        }
        let data = writer
            .into_inner()
            .with_context(|| format!("Unable to serialize the {} table", T::TABLE_NAME))?;

        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| T::TABLE_NAME.to_string());
        let temp_path = self.path.with_file_name(format!(".{file_name}.tmp"));
        utils::write(&temp_path, &data).await?;
        utils::rename(&temp_path, &self.path).await?;
        debug!(
            "Wrote {} rows to the {} table at {}",
            rows.len(),
            T::TABLE_NAME,
            self.path.display()
        );
        Ok(())
    }
}
