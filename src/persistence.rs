// File: src/persistence.rs
use crate::core::types::UserJudgment;
use crate::error::StoreError;
use std::collections::{BTreeMap, HashMap};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Durable word -> correction map.
///
/// Corrections are keyed by the exact word text and are global: a saved
/// correction applies to every later occurrence of that word. Saving replaces
/// any previous record for the word wholesale; concurrent writers to the same
/// key are resolved by last write wins.
pub trait CorrectionStore {
    /// `None` when the word has no correction or the store is unavailable.
    fn find_correction(&self, word: &str) -> Option<UserJudgment>;

    fn save_correction(&mut self, word: &str, judgment: &UserJudgment) -> Result<(), StoreError>;

    fn is_available(&self) -> bool;
}

/// In-process store. Can be switched offline to exercise degraded behaviour.
#[derive(Debug, Clone)]
pub struct MemoryCorrectionStore {
    corrections: HashMap<String, UserJudgment>,
    available: bool,
}

impl Default for MemoryCorrectionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCorrectionStore {
    pub fn new() -> Self {
        Self {
            corrections: HashMap::new(),
            available: true,
        }
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    pub fn len(&self) -> usize {
        self.corrections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corrections.is_empty()
    }
}

impl CorrectionStore for MemoryCorrectionStore {
    fn find_correction(&self, word: &str) -> Option<UserJudgment> {
        if !self.available {
            return None;
        }
        self.corrections.get(word).cloned()
    }

    fn save_correction(&mut self, word: &str, judgment: &UserJudgment) -> Result<(), StoreError> {
        if !self.available {
            return Err(StoreError::Unavailable);
        }
        self.corrections.insert(word.to_string(), judgment.clone());
        Ok(())
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

const SNAPSHOT_VERSION: u32 = 1;

/// The on-disk form of the store.
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct Snapshot {
    version: u32,
    corrections: BTreeMap<String, UserJudgment>,
}

/// Store kept in memory and written through to a bincode file on every save.
#[derive(Debug)]
pub struct FileCorrectionStore {
    path: PathBuf,
    corrections: BTreeMap<String, UserJudgment>,
    available: bool,
}

impl FileCorrectionStore {
    /// Opens the store at `path`. A missing file starts an empty store.
    /// If the parent directory cannot be created, or the file cannot be read or
    /// decoded, the store opens unavailable and the file is left untouched.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let opened = fs::create_dir_all(parent_dir(&path))
            .map_err(StoreError::from)
            .and_then(|()| load_from_disk(&path));
        match opened {
            Ok(corrections) => {
                log::info!("Loaded {} corrections from {:?}", corrections.len(), path);
                Self {
                    path,
                    corrections,
                    available: true,
                }
            }
            Err(e) => {
                log::warn!("Correction store {:?} is unavailable: {}", path, e);
                Self {
                    path,
                    corrections: BTreeMap::new(),
                    available: false,
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.corrections.is_empty()
    }
}

impl CorrectionStore for FileCorrectionStore {
    fn find_correction(&self, word: &str) -> Option<UserJudgment> {
        if !self.available {
            return None;
        }
        self.corrections.get(word).cloned()
    }

    fn save_correction(&mut self, word: &str, judgment: &UserJudgment) -> Result<(), StoreError> {
        if !self.available {
            return Err(StoreError::Unavailable);
        }
        let previous = self
            .corrections
            .insert(word.to_string(), judgment.clone());

        if let Err(e) = save_to_disk(&self.corrections, &self.path) {
            log::error!("Could not write correction for {:?}: {}", word, e);
            match previous {
                Some(previous) => self.corrections.insert(word.to_string(), previous),
                None => self.corrections.remove(word),
            };
            return Err(e);
        }
        Ok(())
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn save_to_disk(corrections: &BTreeMap<String, UserJudgment>, path: &Path) -> Result<(), StoreError> {
    let parent_dir = parent_dir(path);
    fs::create_dir_all(parent_dir)?;

    let snapshot = Snapshot {
        version: SNAPSHOT_VERSION,
        corrections: corrections.clone(),
    };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let mut writer = BufWriter::new(&temp_file);
    bincode::serialize_into(&mut writer, &snapshot)?;
    writer.flush()?;
    drop(writer);

    temp_file.persist(path).map_err(|e| StoreError::Io(e.error))?;
    Ok(())
}

fn load_from_disk(path: &Path) -> Result<BTreeMap<String, UserJudgment>, StoreError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(e) => return Err(e.into()),
    };
    let reader = BufReader::new(file);
    let snapshot: Snapshot = bincode::deserialize_from(reader)?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(StoreError::Io(std::io::Error::new(
            ErrorKind::InvalidData,
            format!("unsupported store version {}", snapshot.version),
        )));
    }
    Ok(snapshot.corrections)
}
