//! Labeled dataset and its CSV persistence.
//!
//! The file has a header row and four columns in fixed order:
//! `word,phonemes,sylables,labeling_time`. Every save rewrites the whole
//! file through a temporary file in the same directory.

use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use syllabel_core::{format_phonemes, format_syllables, Phoneme, SyllableGroup};
use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{LabelerError, Result};

const HEADER: [&str; 4] = ["word", "phonemes", "sylables", "labeling_time"];

/// One accepted label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledRecord {
    pub word: String,
    /// Printable phoneme sequence, e.g. `['K', 'AH0']`.
    pub phonemes: String,
    /// Printable syllable groups, e.g. `[['K', 'AH0'], ['N']]`.
    #[serde(rename = "sylables")]
    pub syllables: String,
    /// Seconds between showing the word and accepting its label.
    pub labeling_time: f64,
}

impl LabeledRecord {
    pub fn new(
        word: impl Into<String>,
        phonemes: &[Phoneme],
        groups: &[SyllableGroup],
        labeling_time: f64,
    ) -> Self {
        Self {
            word: word.into(),
            phonemes: format_phonemes(phonemes),
            syllables: format_syllables(groups),
            labeling_time,
        }
    }
}

/// Ordered, append-only collection of labeled records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<LabeledRecord>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: LabeledRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[LabeledRecord] {
        &self.records
    }
}

impl FromIterator<LabeledRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = LabeledRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// Reads and writes the dataset at a fixed primary path.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    path: PathBuf,
}

impl DatasetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every row of the primary file.
    ///
    /// # Errors
    ///
    /// `LabelerError::Configuration` when the file cannot be opened and
    /// `LabelerError::MalformedDataset` when the header or any row does not
    /// fit the schema.
    pub fn load(&self) -> Result<Dataset> {
        let mut reader = csv::Reader::from_path(&self.path).map_err(|e| {
            LabelerError::Configuration(format!(
                "cannot open dataset {}: {e}",
                self.path.display()
            ))
        })?;

        let malformed = |source| LabelerError::MalformedDataset {
            path: self.path.clone(),
            source,
        };

        let headers = reader.headers().map_err(malformed)?;
        if headers.iter().ne(HEADER) {
            let found = headers.iter().collect::<Vec<_>>().join(",");
            return Err(malformed(csv::Error::from(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("header is {found:?}, expected {:?}", HEADER.join(",")),
            ))));
        }

        let dataset = reader
            .deserialize::<LabeledRecord>()
            .collect::<std::result::Result<Dataset, csv::Error>>()
            .map_err(malformed)?;

        info!(rows = dataset.len(), path = %self.path.display(), "loaded dataset");
        Ok(dataset)
    }

    /// Overwrites the primary file with the full dataset.
    pub fn save(&self, dataset: &Dataset) -> Result<()> {
        write_csv(&self.path, dataset)
    }

    /// Writes an unmodified copy of `dataset` next to the primary file,
    /// named after the current UTC time, and returns its path.
    pub fn checkpoint(&self, dataset: &Dataset) -> Result<PathBuf> {
        self.checkpoint_at(dataset, SystemTime::now())
    }

    /// Never replaces an existing file: a name that is already taken moves
    /// on to the next counter.
    fn checkpoint_at(&self, dataset: &Dataset, now: SystemTime) -> Result<PathBuf> {
        let mut temp = write_temp(&self.path, dataset)?;
        let mut attempt = 0;
        loop {
            let candidate = self.checkpoint_path(now, attempt);
            match temp.persist_noclobber(&candidate) {
                Ok(_) => return Ok(candidate),
                Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => {
                    temp = e.file;
                    attempt += 1;
                }
                Err(e) => return Err(LabelerError::io(candidate, e.error)),
            }
        }
    }

    /// `<stem>_checkpoint_<timestamp>.csv`, or `..._<attempt>.csv` after the
    /// first attempt.
    fn checkpoint_path(&self, now: SystemTime, attempt: usize) -> PathBuf {
        let stem = self
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "dataset".to_string());
        let timestamp = humantime::format_rfc3339_micros(now)
            .to_string()
            .replace(':', "-");

        let name = match attempt {
            0 => format!("{stem}_checkpoint_{timestamp}.csv"),
            n => format!("{stem}_checkpoint_{timestamp}_{n}.csv"),
        };
        self.path.with_file_name(name)
    }
}

fn write_csv(path: &Path, dataset: &Dataset) -> Result<()> {
    write_temp(path, dataset)?
        .persist(path)
        .map_err(|e| LabelerError::io(path, e.error))?;
    Ok(())
}

/// Serializes `dataset` into a temporary file beside `path`.
fn write_temp(path: &Path, dataset: &Dataset) -> Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let temp = NamedTempFile::new_in(dir).map_err(|e| LabelerError::io(dir, e))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(temp);
    writer.write_record(HEADER)?;
    for record in dataset.records() {
        writer.serialize(record)?;
    }

    writer
        .into_inner()
        .map_err(|e| LabelerError::io(path, e.into_error()))
}
