// ********* Input data structures ***********

use std::collections::BTreeSet;

use snafu::Snafu;

pub type Year = i32;

/// One annotated sentence extracted from a party program.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct SentenceRecord {
    pub party: String,
    pub year: Year,
    /// The sentence, translated to English.
    pub sentence: String,
    /// The dimension tags of the sentence, joined by commas (`Ethical,Security`).
    /// A sentence may carry several tags. Empty if the sentence was not labeled.
    pub dimension: String,
    pub sentiment: String,
}

/// The total number of words in the program of a party for a given year.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct WordCountRecord {
    pub party: String,
    pub year: Year,
    pub total_words: u64,
}

/// A row of the dimension summary spreadsheet: one count per dimension column.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct DimensionSummaryRow {
    pub party: String,
    pub year: Year,
    pub values: Vec<(String, u64)>,
}

/// All the tables the report works from. Loaded once, then only borrowed.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct Dataset {
    pub sentences: Vec<SentenceRecord>,
    pub word_counts: Vec<WordCountRecord>,
    pub dimension_summary: Option<Vec<DimensionSummaryRow>>,
}

// ******** Output data structures *********

#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub enum Status {
    Governing,
    Opposition,
}

/// Why the rate of an aggregate row could not be computed.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum UndefinedRate {
    /// No word count was found for this party and year.
    MissingWordCount,
    /// The word count of the program is zero.
    ZeroWordCount,
}

/// Statistics for one party in one year.
#[derive(PartialEq, Debug, Clone)]
pub struct AggregateRow {
    pub party: String,
    pub year: Year,
    pub ai_sentences: u64,
    /// None if the word count table has no entry for this party and year.
    pub total_words: Option<u64>,
    /// AI sentences per 10,000 words. None when the word count is missing or zero.
    pub rate: Option<f64>,
    pub status: Status,
}

impl AggregateRow {
    pub fn undefined_rate(&self) -> Option<UndefinedRate> {
        match (self.rate, self.total_words) {
            (Some(_), _) => None,
            (None, None) => Some(UndefinedRate::MissingWordCount),
            (None, Some(_)) => Some(UndefinedRate::ZeroWordCount),
        }
    }
}

#[derive(PartialEq, Debug, Clone)]
pub struct ChangeRow {
    pub party: String,
    pub rate_a: f64,
    pub rate_b: f64,
    pub delta: f64,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum ChangeWarning {
    /// Some of the compared years do not occur in the data. All the deltas are zero.
    MissingYear { years: Vec<Year> },
}

/// The change of the rate of each party between two years.
#[derive(PartialEq, Debug, Clone)]
pub struct ChangeTable {
    pub year_a: Year,
    pub year_b: Year,
    /// Sorted by decreasing delta, then by party name.
    pub rows: Vec<ChangeRow>,
    pub warning: Option<ChangeWarning>,
    /// The (party, year) pairs whose rate was undefined and counted as zero.
    pub undefined_rates: Vec<(String, Year)>,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct DimensionCount {
    pub party: String,
    pub year: Year,
    pub dimension: String,
    pub count: u64,
}

/// The values offered by the example browser.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct SelectionOptions {
    pub parties: Vec<String>,
    pub years: Vec<Year>,
    pub dimensions: Vec<String>,
}

/// Errors that prevent the aggregation from completing.
#[derive(Eq, PartialEq, Debug, Clone, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SalienceError {
    #[snafu(display("Duplicate word count for party {party} in {year}"))]
    DuplicateKey { party: String, year: Year },
}

// ********* Configuration **********

/// The parties of the cabinet in the reference deployment.
pub const REFERENCE_GOVERNING_PARTIES: [&str; 4] = ["PVV", "VVD", "NSC", "BBB"];

/// The dimension vocabulary used to annotate the sentences.
pub const DEFAULT_DIMENSIONS: [&str; 7] = [
    "Ethical",
    "Societal",
    "Policy / Regulation",
    "Security",
    "Labour",
    "Economic",
    "Uncategorized",
];

pub const DEFAULT_EXAMPLES_LIMIT: usize = 5;

/// Decides the status of a party from a fixed membership list.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct StatusRules {
    governing: BTreeSet<String>,
}

impl StatusRules {
    pub fn new(governing: &[String]) -> StatusRules {
        StatusRules {
            governing: governing.iter().cloned().collect(),
        }
    }

    pub fn reference() -> StatusRules {
        StatusRules {
            governing: REFERENCE_GOVERNING_PARTIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    pub fn status_of(&self, party: &str) -> Status {
        if self.governing.contains(party) {
            Status::Governing
        } else {
            Status::Opposition
        }
    }
}
