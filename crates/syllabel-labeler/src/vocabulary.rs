//! Word source: the fixed list of candidate words to label.

use std::path::Path;

use oorandom::Rand64;
use tracing::info;

use crate::error::{LabelerError, Result};

/// Words available for labeling, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Reads one word per line. Lines are trimmed and blank lines dropped,
    /// including the empty entry after a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns `LabelerError::Configuration` if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LabelerError::Configuration(format!(
                "cannot read vocabulary {}: {e}",
                path.display()
            ))
        })?;

        let words: Vec<String> = content
            .split('\n')
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();

        info!(count = words.len(), path = %path.display(), "loaded vocabulary");
        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Draws `n` distinct entries uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns `LabelerError::Configuration` when `n` is larger than the
    /// vocabulary, which covers an empty vocabulary with `n > 0`.
    pub fn sample(&self, n: usize, rng: &mut Rand64) -> Result<Vec<String>> {
        if n > self.words.len() {
            return Err(LabelerError::Configuration(if self.words.is_empty() {
                "vocabulary is empty".to_string()
            } else {
                format!(
                    "batch size {n} exceeds vocabulary of {} words",
                    self.words.len()
                )
            }));
        }

        // Partial Fisher-Yates: the first n slots end up a uniform sample
        let mut indices: Vec<usize> = (0..self.words.len()).collect();
        for i in 0..n {
            let j = i + rng.rand_range(0..(indices.len() - i) as u64) as usize;
            indices.swap(i, j);
        }

        Ok(indices[..n]
            .iter()
            .map(|&idx| self.words[idx].clone())
            .collect())
    }
}
