//! Flat-file memo store.
//!
//! One record per line, `YYYY-MM-DD|content`, with newlines inside the
//! content written as the two characters `\` `n`. The whole file is
//! rewritten on every save; there is no append path.

use log::{debug, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const STORE_FILE_NAME: &str = "data.txt";
const FIELD_SEPARATOR: char = '|';
const ESCAPED_NEWLINE: &str = "\\n";

/// Failure reading or writing the store file.
#[derive(Debug)]
pub enum StoreError {
    /// The file exists but could not be read.
    Load { path: PathBuf, source: io::Error },
    /// The file could not be written; memory is ahead of disk.
    Save { path: PathBuf, source: io::Error },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load { path, source } => {
                write!(f, "failed to read memos from {}: {source}", path.display())
            }
            Self::Save { path, source } => {
                write!(f, "failed to save memos to {}: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Load { source, .. } | Self::Save { source, .. } => Some(source),
        }
    }
}

/// Date key to memo text. Keys iterate in ascending order, which keeps
/// the written file stable between saves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoStore {
    memos: BTreeMap<String, String>,
}

impl MemoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the store at `path`. A missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("event=store_load status=missing path={}", path.display());
                return Ok(Self::new());
            }
            Err(source) => {
                return Err(StoreError::Load { path: path.to_path_buf(), source });
            }
        };

        let (store, skipped) = Self::parse(&raw);
        if !skipped.is_empty() {
            warn!(
                "event=store_load status=partial path={} skipped={} lines={:?}",
                path.display(),
                skipped.len(),
                skipped
            );
        }
        debug!(
            "event=store_load status=ok path={} entries={}",
            path.display(),
            store.len()
        );
        Ok(store)
    }

    /// Parse file content, returning the store and the 1-based numbers
    /// of lines that had no separator.
    pub fn parse(raw: &str) -> (Self, Vec<usize>) {
        let mut store = Self::new();
        let mut skipped = Vec::new();
        for (idx, line) in raw.lines().enumerate() {
            match line.split_once(FIELD_SEPARATOR) {
                Some((key, content)) => {
                    store.memos.insert(key.to_string(), unescape(content));
                }
                None if line.is_empty() => {}
                None => skipped.push(idx + 1),
            }
        }
        (store, skipped)
    }

    /// Serialize every entry as `key|escaped` lines.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for (key, text) in &self.memos {
            out.push_str(key);
            out.push(FIELD_SEPARATOR);
            out.push_str(&escape(text));
            out.push('\n');
        }
        out
    }

    /// Rewrite the file at `path` with the current entries. The content
    /// lands in a sibling temp file first and is renamed into place.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let wrap = |source: io::Error| StoreError::Save {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(wrap)?;
            }
        }
        atomic_write(path, &self.serialize()).map_err(wrap)?;
        debug!(
            "event=store_save status=ok path={} entries={}",
            path.display(),
            self.len()
        );
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.memos.get(key).map(String::as_str)
    }

    /// Store `text` under `key`, or drop the key when `text` is blank.
    pub fn set(&mut self, key: &str, text: &str) {
        if text.trim().is_empty() {
            self.remove(key);
        } else {
            self.memos.insert(key.to_string(), text.to_string());
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.memos.remove(key)
    }

    pub fn len(&self) -> usize {
        self.memos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memos.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.memos.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

pub fn escape(text: &str) -> String {
    text.replace('\n', ESCAPED_NEWLINE)
}

/// Inverse of [`escape`]. A memo that already held a literal `\n` comes
/// back as a real newline; the format cannot tell the two apart.
pub fn unescape(content: &str) -> String {
    content.replace(ESCAPED_NEWLINE, "\n")
}

fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let tmp_path = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp_path, content)?;
    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }
    Ok(())
}
