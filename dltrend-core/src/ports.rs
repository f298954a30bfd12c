//! Port traits abstracting all I/O away from the pipeline.

use camino::Utf8Path;
use chrono::NaiveDate;

/// Source of "today", read once per run.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// File-system write operations.
pub trait WritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()>;
    fn create_dir_all(&self, path: &Utf8Path) -> anyhow::Result<()>;
}
