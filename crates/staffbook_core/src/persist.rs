//! Whole-file persistence gateway for the roster file.
//!
//! # Responsibility
//! - Read the backing file into decoded rows at startup.
//! - Flush encoded rows back over the backing file on demand.
//!
//! # Invariants
//! - Load reads the entire file or fails; there is no empty-store fallback
//!   for a missing file.
//! - Save rewrites the entire file in place; no handle is held between
//!   operations, so concurrent processes sharing one file race destructively.

use crate::codec::{self, CodecError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type PersistResult<T> = Result<T, PersistError>;

#[derive(Debug)]
pub enum PersistError {
    Read { path: PathBuf, source: io::Error },
    Write { path: PathBuf, source: io::Error },
    Codec(CodecError),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read roster file `{}`: {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "failed to write roster file `{}`: {source}", path.display())
            }
            Self::Codec(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => Some(source),
            Self::Codec(err) => Some(err),
        }
    }
}

impl From<CodecError> for PersistError {
    fn from(value: CodecError) -> Self {
        Self::Codec(value)
    }
}

/// Reads the whole backing file and decodes it into rows.
///
/// # Side effects
/// - Emits `file_load` events with duration and row count.
pub fn load_rows(path: impl AsRef<Path>) -> PersistResult<Vec<Vec<String>>> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!(
        "event=file_load module=persist status=start path={}",
        path.display()
    );

    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            error!(
                "event=file_load module=persist status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(PersistError::Read {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };

    let rows = codec::decode(&text);
    info!(
        "event=file_load module=persist status=ok duration_ms={} rows={}",
        started_at.elapsed().as_millis(),
        rows.len()
    );
    Ok(rows)
}

/// Encodes rows and overwrites the whole backing file.
///
/// The write is a plain truncate-and-rewrite; a crash mid-write can leave a
/// partial file.
///
/// # Side effects
/// - Emits `file_save` events with duration and row count.
pub fn save_rows(path: impl AsRef<Path>, rows: &[Vec<String>]) -> PersistResult<()> {
    let path = path.as_ref();
    let started_at = Instant::now();
    let text = codec::encode(rows)?;

    match std::fs::write(path, text) {
        Ok(()) => {
            info!(
                "event=file_save module=persist status=ok duration_ms={} rows={}",
                started_at.elapsed().as_millis(),
                rows.len()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=file_save module=persist status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(PersistError::Write {
                path: path.to_path_buf(),
                source: err,
            })
        }
    }
}
