use std::collections::HashSet;

use snafu::ensure;

pub use crate::config::*;
use crate::config::DuplicateKeySnafu;

/// A builder for assembling a dataset record by record.
///
/// Word counts are checked for duplicate (party, year) keys as they are added.
///
/// ```
/// use ai_salience::builder::Builder;
/// # use ai_salience::SalienceError;
///
/// let mut builder = Builder::new();
/// builder.add_sentence("VVD", 2023, "AI must be regulated.", "Policy / Regulation", "Neutral");
/// builder.add_word_count("VVD", 2023, 10000)?;
///
/// let dataset = builder.build();
/// assert_eq!(dataset.sentences.len(), 1);
///
/// # Ok::<(), SalienceError>(())
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    _sentences: Vec<SentenceRecord>,
    _word_counts: Vec<WordCountRecord>,
    _word_count_keys: HashSet<(String, Year)>,
    _dimension_summary: Option<Vec<DimensionSummaryRow>>,
}

impl Builder {
    pub fn new() -> Builder {
        Builder::default()
    }

    /// Adds a sentence. The dimension is the comma-joined list of tags.
    pub fn add_sentence(
        &mut self,
        party: &str,
        year: Year,
        sentence: &str,
        dimension: &str,
        sentiment: &str,
    ) {
        self.add_sentence_record(SentenceRecord {
            party: party.to_string(),
            year,
            sentence: sentence.to_string(),
            dimension: dimension.to_string(),
            sentiment: sentiment.to_string(),
        })
    }

    pub fn add_sentence_record(&mut self, record: SentenceRecord) {
        self._sentences.push(record);
    }

    pub fn add_word_count(
        &mut self,
        party: &str,
        year: Year,
        total_words: u64,
    ) -> Result<(), SalienceError> {
        self.add_word_count_record(WordCountRecord {
            party: party.to_string(),
            year,
            total_words,
        })
    }

    pub fn add_word_count_record(&mut self, record: WordCountRecord) -> Result<(), SalienceError> {
        let inserted = self
            ._word_count_keys
            .insert((record.party.clone(), record.year));
        ensure!(
            inserted,
            DuplicateKeySnafu {
                party: record.party,
                year: record.year
            }
        );
        self._word_counts.push(record);
        Ok(())
    }

    pub fn dimension_summary(self, rows: Vec<DimensionSummaryRow>) -> Builder {
        Builder {
            _dimension_summary: Some(rows),
            ..self
        }
    }

    pub fn build(self) -> Dataset {
        Dataset {
            sentences: self._sentences,
            word_counts: self._word_counts,
            dimension_summary: self._dimension_summary,
        }
    }
}
