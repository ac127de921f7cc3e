use std::path::PathBuf;

use crate::error::{LabelerError, Result};

const ENV_VOCABULARY: &str = "SYLLABEL_VOCABULARY";
const ENV_PRONUNCIATIONS: &str = "SYLLABEL_PRONUNCIATIONS";
const ENV_DATASET: &str = "SYLLABEL_DATASET";
const ENV_SAVE_LABELS: &str = "SYLLABEL_SAVE_LABELS";
const ENV_SEED: &str = "SYLLABEL_SEED";

/// Settings for one labeling session.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelerConfig {
    /// Word list, one word per line.
    pub vocabulary_path: PathBuf,
    /// CMU-dict style pronouncing dictionary.
    pub pronunciations_path: PathBuf,
    /// Primary labeled dataset (CSV).
    pub dataset_path: PathBuf,
    /// How many words to sample for this session.
    pub batch_size: usize,
    /// Whether to checkpoint and save the dataset at all.
    pub save_labels: bool,
    /// Sampling seed; drawn from the clock when unset.
    pub seed: Option<u64>,
}

impl Default for LabelerConfig {
    fn default() -> Self {
        Self {
            vocabulary_path: PathBuf::from("data/dictionary/popular.txt"),
            pronunciations_path: PathBuf::from("data/dictionary/cmudict.dict"),
            dataset_path: PathBuf::from("data/sylables/sylables.csv"),
            batch_size: 25,
            save_labels: true,
            seed: None,
        }
    }
}

impl LabelerConfig {
    /// Create a configuration with default paths.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `SYLLABEL_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `LabelerError::Configuration` if `SYLLABEL_SAVE_LABELS` or
    /// `SYLLABEL_SEED` cannot be parsed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_VOCABULARY) {
            config.vocabulary_path = path.into();
        }
        if let Some(path) = lookup(ENV_PRONUNCIATIONS) {
            config.pronunciations_path = path.into();
        }
        if let Some(path) = lookup(ENV_DATASET) {
            config.dataset_path = path.into();
        }
        if let Some(value) = lookup(ENV_SAVE_LABELS) {
            config.save_labels = parse_flag(&value).ok_or_else(|| {
                LabelerError::Configuration(format!("{ENV_SAVE_LABELS}={value:?} is not a boolean"))
            })?;
        }
        if let Some(value) = lookup(ENV_SEED) {
            let seed = value.trim().parse().map_err(|_| {
                LabelerError::Configuration(format!("{ENV_SEED}={value:?} is not an integer"))
            })?;
            config.seed = Some(seed);
        }

        Ok(config)
    }

    pub fn with_vocabulary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.vocabulary_path = path.into();
        self
    }

    pub fn with_pronunciations_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.pronunciations_path = path.into();
        self
    }

    pub fn with_dataset_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dataset_path = path.into();
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Disable to run a dry session that never touches the dataset file.
    pub fn with_save_labels(mut self, save_labels: bool) -> Self {
        self.save_labels = save_labels;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_follow_data_layout() {
        let config = LabelerConfig::default();
        assert_eq!(config.batch_size, 25);
        assert!(config.save_labels);
        assert_eq!(config.dataset_path, PathBuf::from("data/sylables/sylables.csv"));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn env_overrides_apply() {
        let config = LabelerConfig::from_lookup(lookup(&[
            (ENV_DATASET, "/tmp/labels.csv"),
            (ENV_SAVE_LABELS, "no"),
            (ENV_SEED, "42"),
        ]))
        .unwrap();

        assert_eq!(config.dataset_path, PathBuf::from("/tmp/labels.csv"));
        assert!(!config.save_labels);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.vocabulary_path, LabelerConfig::default().vocabulary_path);
    }

    #[test]
    fn bad_env_values_are_configuration_errors() {
        let err = LabelerConfig::from_lookup(lookup(&[(ENV_SEED, "soon")])).unwrap_err();
        assert!(matches!(err, LabelerError::Configuration(_)));

        let err = LabelerConfig::from_lookup(lookup(&[(ENV_SAVE_LABELS, "maybe")])).unwrap_err();
        assert!(matches!(err, LabelerError::Configuration(_)));
    }

    #[test]
    fn builder_setters() {
        let config = LabelerConfig::new()
            .with_batch_size(3)
            .with_seed(7)
            .with_save_labels(false)
            .with_vocabulary_path("words.txt");
        assert_eq!(config.batch_size, 3);
        assert_eq!(config.seed, Some(7));
        assert!(!config.save_labels);
        assert_eq!(config.vocabulary_path, PathBuf::from("words.txt"));
    }
}
