//! Savings ledger
//!
//! Tokens saved per UTC day, kept as a JSON object of `"YYYY-MM-DD": tokens`.
//! Every write goes to a sibling temp file that is renamed over the ledger, so a
//! crash never leaves a half-written file behind.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use tracing::debug;

use crate::{Result, StorageError};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Debug, Clone)]
pub struct SavingsLedger {
    path: PathBuf,
    days: BTreeMap<Date, u64>,
}

impl SavingsLedger {
    /// Open the ledger at `path`. A missing file is an empty ledger.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let days = match fs::read_to_string(&path) {
            Ok(content) => parse_days(&path, &content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        debug!(path = %path.display(), days = days.len(), "opened savings ledger");
        Ok(Self { path, days })
    }

    /// Open the ledger in the platform data directory
    pub fn open_default() -> Result<Self> {
        Self::open(Self::default_path()?)
    }

    pub fn default_path() -> Result<PathBuf> {
        directories::ProjectDirs::from("com", "tflow", "tflow")
            .map(|dirs| dirs.data_dir().join("savings.json"))
            .ok_or(StorageError::NoDataDir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add `tokens` to `date` and persist
    pub fn record(&mut self, date: Date, tokens: u64) -> Result<()> {
        let entry = self.days.entry(date).or_insert(0);
        *entry = entry.saturating_add(tokens);
        self.save()
    }

    /// Add `tokens` to the current UTC day and persist
    pub fn record_today(&mut self, tokens: u64) -> Result<()> {
        self.record(OffsetDateTime::now_utc().date(), tokens)
    }

    pub fn get(&self, date: Date) -> u64 {
        self.days.get(&date).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.days.values().fold(0u64, |acc, n| acc.saturating_add(*n))
    }

    /// Days in ascending order
    pub fn entries(&self) -> impl Iterator<Item = (Date, u64)> + '_ {
        self.days.iter().map(|(date, tokens)| (*date, *tokens))
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut raw = BTreeMap::new();
        for (date, tokens) in &self.days {
            raw.insert(format_date(*date)?, *tokens);
        }
        let content = serde_json::to_string_pretty(&raw)?;

        let tmp = self.path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn parse_days(path: &Path, content: &str) -> Result<BTreeMap<Date, u64>> {
    if content.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    let raw: BTreeMap<String, u64> =
        serde_json::from_str(content).map_err(|source| StorageError::Corrupt {
            path: path.display().to_string(),
            source,
        })?;

    raw.into_iter()
        .map(|(key, tokens)| {
            Date::parse(&key, DATE_FORMAT)
                .map(|date| (date, tokens))
                .map_err(|_| StorageError::InvalidDate(key))
        })
        .collect()
}

fn format_date(date: Date) -> Result<String> {
    date.format(DATE_FORMAT)
        .map_err(|_| StorageError::InvalidDate(date.to_string()))
}
