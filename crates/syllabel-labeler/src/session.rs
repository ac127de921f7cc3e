//! The interactive labeling loop.
//!
//! For every sampled word the session shows the phonemes, reads labels
//! until one passes both checks (letters match, one vowel per syllable)
//! and then records it. `skip` moves on without recording, `exit`/`quit`
//! saves and ends the session.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use oorandom::Rand64;
use syllabel_core::{all_groups_single_vowel, format_phonemes, Label, SyllableBuilder};
use tracing::{debug, info, warn};

use crate::config::LabelerConfig;
use crate::dataset::{Dataset, DatasetStore, LabeledRecord};
use crate::error::{LabelerError, Result};
use crate::pronounce::{PhonemeGenerator, PronouncingDictionary};
use crate::vocabulary::Vocabulary;

/// How a single word left the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordOutcome {
    /// A valid label was recorded.
    Accepted,
    /// The annotator typed `skip`.
    Skipped,
    /// No phonemes could be generated for the word.
    Unavailable,
    /// The annotator typed `exit`/`quit` or input ended.
    Terminated,
}

/// Tally of one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub accepted: usize,
    pub skipped: usize,
    pub unavailable: usize,
    /// Whether the session ended before the batch was exhausted.
    pub terminated: bool,
}

/// Owns the in-memory dataset for the length of a session.
///
/// Without a store the session is a dry run: labels are collected in memory
/// and nothing is written.
pub struct LabelingSession<G, R, W> {
    generator: G,
    input: R,
    output: W,
    dataset: Dataset,
    store: Option<DatasetStore>,
    builder: SyllableBuilder,
}

impl<G, R, W> LabelingSession<G, R, W>
where
    G: PhonemeGenerator,
    R: BufRead,
    W: Write,
{
    pub fn new(generator: G, input: R, output: W, dataset: Dataset) -> Self {
        Self {
            generator,
            input,
            output,
            dataset,
            store: None,
            builder: SyllableBuilder::new(),
        }
    }

    /// Persist the dataset through `store` after every accepted label and
    /// on exit.
    pub fn with_store(mut self, store: DatasetStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_builder(mut self, builder: SyllableBuilder) -> Self {
        self.builder = builder;
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn into_dataset(self) -> Dataset {
        self.dataset
    }

    /// Labels each word in order until the batch runs out or the annotator
    /// exits.
    pub fn run(&mut self, words: &[String]) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        for word in words {
            match self.label_word(word)? {
                WordOutcome::Accepted => summary.accepted += 1,
                WordOutcome::Skipped => summary.skipped += 1,
                WordOutcome::Unavailable => summary.unavailable += 1,
                WordOutcome::Terminated => {
                    summary.terminated = true;
                    break;
                }
            }
        }

        info!(
            accepted = summary.accepted,
            skipped = summary.skipped,
            unavailable = summary.unavailable,
            terminated = summary.terminated,
            "labeling session finished"
        );
        Ok(summary)
    }

    /// Runs the prompt/validate/retry cycle for one word.
    pub fn label_word(&mut self, word: &str) -> Result<WordOutcome> {
        let phonemes = match self.generator.phonemes(word) {
            Ok(phonemes) if !phonemes.is_empty() => phonemes,
            Ok(_) | Err(LabelerError::UnknownWord(_)) => {
                warn!(word, "no phonemes for word, moving on");
                say(&mut self.output, format_args!("warning: no phonemes for {word}, skipping"))?;
                return Ok(WordOutcome::Unavailable);
            }
            Err(e) => return Err(e),
        };

        let started = Instant::now();
        say(&mut self.output, format_args!("Data: {word} | {}", format_phonemes(&phonemes)))?;

        loop {
            let Some(label) = self.read_label()? else {
                debug!(word, "input closed");
                self.terminate()?;
                return Ok(WordOutcome::Terminated);
            };

            if !label.matches(&phonemes) {
                say(&mut self.output, format_args!(
                    "warning: invalid label does not match word phonemes, try again"
                ))?;
                continue;
            }

            let Some(groups) = self.builder.build(&phonemes, &label) else {
                if label == Label::Skip {
                    debug!(word, "skipped");
                    say(&mut self.output, format_args!("skipping {word}"))?;
                    return Ok(WordOutcome::Skipped);
                }
                self.terminate()?;
                return Ok(WordOutcome::Terminated);
            };

            if !all_groups_single_vowel(&groups) {
                say(&mut self.output, format_args!(
                    "warning: invalid label, syllable has the wrong number of vowels, try again"
                ))?;
                continue;
            }

            let elapsed = started.elapsed().as_secs_f64();
            say(&mut self.output, format_args!("info: labeled in {elapsed:.2} seconds"))?;
            self.dataset
                .push(LabeledRecord::new(word, &phonemes, &groups, elapsed));
            debug!(word, syllables = groups.len(), "accepted");

            if let Some(store) = &self.store {
                store.save(&self.dataset)?;
                let path = store.path().display().to_string();
                say(&mut self.output, format_args!("info: labels saved [{path}]"))?;
            }
            return Ok(WordOutcome::Accepted);
        }
    }

    /// `None` once the input is exhausted.
    fn read_label(&mut self) -> Result<Option<Label>> {
        write!(self.output, "> ").map_err(LabelerError::Console)?;
        self.output.flush().map_err(LabelerError::Console)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(LabelerError::Console)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(Label::parse(&line)))
    }

    fn terminate(&mut self) -> Result<()> {
        if let Some(store) = &self.store {
            let path = store.path().display().to_string();
            say(&mut self.output, format_args!("info: saving labels and then exiting [{path}]"))?;
            store.save(&self.dataset)?;
            info!(rows = self.dataset.len(), path = %path, "saved labels on exit");
        }
        Ok(())
    }
}

fn say<W: Write>(output: &mut W, message: fmt::Arguments<'_>) -> Result<()> {
    writeln!(output, "{message}").map_err(LabelerError::Console)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Loads every input named by `config`, checkpoints the existing dataset
/// and runs a session on stdin/stdout.
pub fn run_labeling(config: &LabelerConfig) -> Result<SessionSummary> {
    let vocabulary = Vocabulary::load(&config.vocabulary_path)?;
    let dictionary = PronouncingDictionary::load(&config.pronunciations_path)?;
    let store = DatasetStore::new(&config.dataset_path);
    let dataset = store.load()?;

    let mut output = io::stdout().lock();

    if config.save_labels && !dataset.is_empty() {
        let checkpoint = store.checkpoint(&dataset)?;
        info!(path = %checkpoint.display(), rows = dataset.len(), "wrote checkpoint");
        writeln!(output, "info: writing checkpoint file [{}]", checkpoint.display())
            .map_err(LabelerError::Console)?;
    }

    let seed = config.seed.unwrap_or_else(clock_seed);
    debug!(seed, "sampling batch");
    let batch = vocabulary.sample(config.batch_size, &mut Rand64::new(u128::from(seed)))?;
    writeln!(output, "loading a batch of {} words for labeling", batch.len())
        .map_err(LabelerError::Console)?;

    let mut session = LabelingSession::new(dictionary, io::stdin().lock(), output, dataset);
    if config.save_labels {
        session = session.with_store(store);
    }
    session.run(&batch)
}
