/*!

Salience of artificial intelligence in party manifestos.

Starting from sentences that mention AI and the word counts of the programs,
this crate computes how often each party discusses AI (per 10,000 words), how
that changed between two elections, and which sentences illustrate a given
framing. Everything here works on plain records: reading the spreadsheets and
rendering the results is left to the caller.

See the [manual] for the layout of the input tables.
*/

pub mod builder;
mod config;
pub mod manual;

use log::{debug, info, warn};
use snafu::ensure;

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

pub use crate::config::*;
use crate::config::DuplicateKeySnafu;

/// The number of words the rates are normalized to.
pub const RATE_BASIS: f64 = 10000.0;

/// Computes the number of AI sentences per party and year, and their rate per 10,000 words.
///
/// Arguments:
/// * `sentences` the annotated sentences
/// * `word_counts` the size of each program. There must be at most one entry per party and year.
/// * `rules` decides which parties are governing
///
/// There is exactly one row per (party, year) found in the sentences, sorted by party then year.
/// Rows without a matching word count (or with zero words) have no rate.
pub fn compute_aggregates(
    sentences: &[SentenceRecord],
    word_counts: &[WordCountRecord],
    rules: &StatusRules,
) -> Result<Vec<AggregateRow>, SalienceError> {
    info!(
        "compute_aggregates: {:?} sentences, {:?} word counts",
        sentences.len(),
        word_counts.len()
    );
    let totals = index_word_counts(word_counts)?;

    let mut groups: BTreeMap<(&str, Year), u64> = BTreeMap::new();
    for s in sentences.iter() {
        *groups.entry((s.party.as_str(), s.year)).or_insert(0) += 1;
    }

    let mut res: Vec<AggregateRow> = Vec::with_capacity(groups.len());
    for ((party, year), ai_sentences) in groups {
        let total_words = totals.get(&(party, year)).cloned();
        let rate = normalized_rate(ai_sentences, total_words);
        let row = AggregateRow {
            party: party.to_string(),
            year,
            ai_sentences,
            total_words,
            rate,
            status: rules.status_of(party),
        };
        if let Some(reason) = row.undefined_rate() {
            warn!(
                "compute_aggregates: no rate for {} in {}: {:?}",
                party, year, reason
            );
        }
        debug!("compute_aggregates: {:?}", row);
        res.push(row);
    }
    Ok(res)
}

/// The number of sentences per 10,000 words, if the word count is known and not zero.
pub fn normalized_rate(ai_sentences: u64, total_words: Option<u64>) -> Option<f64> {
    match total_words {
        Some(t) if t > 0 => Some((ai_sentences as f64) * RATE_BASIS / (t as f64)),
        _ => None,
    }
}

fn index_word_counts(
    word_counts: &[WordCountRecord],
) -> Result<HashMap<(&str, Year), u64>, SalienceError> {
    let mut res: HashMap<(&str, Year), u64> = HashMap::with_capacity(word_counts.len());
    for wc in word_counts.iter() {
        let previous = res.insert((wc.party.as_str(), wc.year), wc.total_words);
        ensure!(
            previous.is_none(),
            DuplicateKeySnafu {
                party: wc.party.clone(),
                year: wc.year
            }
        );
    }
    Ok(res)
}

/// Builds the change of rate between `year_a` and `year_b` for every party.
///
/// A party without a row (or without a rate) for one of the years counts as zero for that year.
/// If one of the years does not appear in the data at all, the table carries a
/// [ChangeWarning::MissingYear] and all the deltas are zero.
pub fn compute_change_table(aggregates: &[AggregateRow], year_a: Year, year_b: Year) -> ChangeTable {
    let observed: BTreeSet<Year> = aggregates.iter().map(|r| r.year).collect();
    let mut missing: Vec<Year> = vec![year_a, year_b]
        .into_iter()
        .filter(|y| !observed.contains(y))
        .collect();
    missing.dedup();

    // Party -> (rate in year_a, rate in year_b)
    let mut rates: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    let mut undefined_rates: Vec<(String, Year)> = Vec::new();
    for row in aggregates.iter() {
        let entry = rates.entry(row.party.as_str()).or_insert((0.0, 0.0));
        if row.year != year_a && row.year != year_b {
            continue;
        }
        let rate = match row.rate {
            Some(r) => r,
            None => {
                undefined_rates.push((row.party.clone(), row.year));
                0.0
            }
        };
        if row.year == year_a {
            entry.0 = rate;
        }
        if row.year == year_b {
            entry.1 = rate;
        }
    }

    let warning = if missing.is_empty() {
        None
    } else {
        warn!(
            "compute_change_table: missing data for year(s) {:?}, the change between {} and {} cannot be computed",
            missing, year_a, year_b
        );
        Some(ChangeWarning::MissingYear { years: missing })
    };

    let mut rows: Vec<ChangeRow> = rates
        .into_iter()
        .map(|(party, (rate_a, rate_b))| ChangeRow {
            party: party.to_string(),
            rate_a,
            rate_b,
            delta: if warning.is_some() {
                0.0
            } else {
                rate_b - rate_a
            },
        })
        .collect();
    rows.sort_by(|r1, r2| {
        r2.delta
            .total_cmp(&r1.delta)
            .then_with(|| r1.party.cmp(&r2.party))
    });
    debug!("compute_change_table: {:?}", rows);

    ChangeTable {
        year_a,
        year_b,
        rows,
        warning,
        undefined_rates,
    }
}

/// Finds at most `limit` sentences of a party in a given year whose dimension contains
/// `dimension` (case insensitive). The sentences are returned in their original order.
///
/// Sentences without any dimension never match.
pub fn find_examples<'a>(
    sentences: &'a [SentenceRecord],
    party: &str,
    year: Year,
    dimension: &str,
    limit: usize,
) -> Vec<&'a SentenceRecord> {
    let needle = dimension.to_lowercase();
    let res: Vec<&SentenceRecord> = sentences
        .iter()
        .filter(|s| s.party == party && s.year == year)
        .filter(|s| !s.dimension.is_empty() && s.dimension.to_lowercase().contains(&needle))
        .take(limit)
        .collect();
    debug!(
        "find_examples: party: {:?} year: {:?} dimension: {:?} -> {:?} matches",
        party,
        year,
        dimension,
        res.len()
    );
    res
}

/// The individual tags of a comma-joined dimension field.
pub fn dimension_tags(dimension: &str) -> impl Iterator<Item = &str> {
    dimension.split(',').map(|t| t.trim()).filter(|t| !t.is_empty())
}

/// Counts the sentences of each party and year per dimension tag.
///
/// A sentence with several tags counts once for each of them. The counts follow the
/// order of `vocabulary` (including the zero counts), then the tags outside of the
/// vocabulary in alphabetical order.
pub fn dimension_counts(sentences: &[SentenceRecord], vocabulary: &[String]) -> Vec<DimensionCount> {
    let mut counts: BTreeMap<(&str, Year), HashMap<&str, u64>> = BTreeMap::new();
    for s in sentences.iter() {
        let tally = counts.entry((s.party.as_str(), s.year)).or_default();
        let tags: HashSet<&str> = dimension_tags(&s.dimension).collect();
        for tag in tags {
            *tally.entry(tag).or_insert(0) += 1;
        }
    }

    let mut res: Vec<DimensionCount> = Vec::new();
    for ((party, year), tally) in counts {
        for dim in vocabulary.iter() {
            res.push(DimensionCount {
                party: party.to_string(),
                year,
                dimension: dim.clone(),
                count: tally.get(dim.as_str()).cloned().unwrap_or(0),
            });
        }
        let mut extra: Vec<(&str, u64)> = tally
            .into_iter()
            .filter(|(tag, _)| !vocabulary.iter().any(|v| v == tag))
            .collect();
        extra.sort();
        for (tag, count) in extra {
            debug!(
                "dimension_counts: tag {:?} of {} in {} is not in the vocabulary",
                tag, party, year
            );
            res.push(DimensionCount {
                party: party.to_string(),
                year,
                dimension: tag.to_string(),
                count,
            });
        }
    }
    res
}

/// Turns the rows of the dimension summary table into one count per party, year and dimension.
///
/// Only the dimensions of the vocabulary are kept, in its order. The rows are sorted by party
/// and year.
pub fn melt_dimension_summary(
    rows: &[DimensionSummaryRow],
    vocabulary: &[String],
) -> Vec<DimensionCount> {
    let mut sorted: Vec<&DimensionSummaryRow> = rows.iter().collect();
    sorted.sort_by(|r1, r2| (r1.party.as_str(), r1.year).cmp(&(r2.party.as_str(), r2.year)));

    let mut res: Vec<DimensionCount> = Vec::with_capacity(rows.len() * vocabulary.len());
    for row in sorted {
        for dim in vocabulary.iter() {
            let count = match row.values.iter().find(|(name, _)| name == dim) {
                Some((_, c)) => *c,
                None => {
                    debug!(
                        "melt_dimension_summary: no value for {:?} ({} {}), using 0",
                        dim, row.party, row.year
                    );
                    0
                }
            };
            res.push(DimensionCount {
                party: row.party.clone(),
                year: row.year,
                dimension: dim.clone(),
                count,
            });
        }
    }
    res
}

/// The sorted, distinct parties, years and individual dimension tags of the sentences.
pub fn selection_options(sentences: &[SentenceRecord]) -> SelectionOptions {
    let parties: BTreeSet<&str> = sentences.iter().map(|s| s.party.as_str()).collect();
    let years: BTreeSet<Year> = sentences.iter().map(|s| s.year).collect();
    let dimensions: BTreeSet<&str> = sentences
        .iter()
        .flat_map(|s| dimension_tags(&s.dimension))
        .collect();
    SelectionOptions {
        parties: parties.into_iter().map(|s| s.to_string()).collect(),
        years: years.into_iter().collect(),
        dimensions: dimensions.into_iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::builder::Builder;
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn sentence(party: &str, year: Year, dimension: &str) -> SentenceRecord {
        SentenceRecord {
            party: party.to_string(),
            year,
            sentence: format!("{} {} {}", party, year, dimension),
            dimension: dimension.to_string(),
            sentiment: "Neutral".to_string(),
        }
    }

    fn word_count(party: &str, year: Year, total_words: u64) -> WordCountRecord {
        WordCountRecord {
            party: party.to_string(),
            year,
            total_words,
        }
    }

    fn vocabulary() -> Vec<String> {
        DEFAULT_DIMENSIONS.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn vvd_scenario() {
        init();
        let sentences = vec![
            sentence("VVD", 2023, "Ethical"),
            sentence("VVD", 2023, "Security"),
            sentence("VVD", 2025, "Economic"),
        ];
        let wcs = vec![word_count("VVD", 2023, 10000), word_count("VVD", 2025, 20000)];
        let aggs = compute_aggregates(&sentences, &wcs, &StatusRules::reference()).unwrap();
        assert_eq!(
            aggs,
            vec![
                AggregateRow {
                    party: "VVD".to_string(),
                    year: 2023,
                    ai_sentences: 2,
                    total_words: Some(10000),
                    rate: Some(2.0),
                    status: Status::Governing,
                },
                AggregateRow {
                    party: "VVD".to_string(),
                    year: 2025,
                    ai_sentences: 1,
                    total_words: Some(20000),
                    rate: Some(0.5),
                    status: Status::Governing,
                },
            ]
        );

        let table = compute_change_table(&aggs, 2023, 2025);
        assert_eq!(table.warning, None);
        assert_eq!(
            table.rows,
            vec![ChangeRow {
                party: "VVD".to_string(),
                rate_a: 2.0,
                rate_b: 0.5,
                delta: -1.5,
            }]
        );
    }

    #[test]
    fn one_row_per_party_and_year() {
        init();
        let sentences = vec![
            sentence("SP", 2025, "Labour"),
            sentence("D66", 2023, "Ethical"),
            sentence("SP", 2023, "Labour"),
            sentence("D66", 2023, "Economic"),
            sentence("SP", 2025, "Societal"),
        ];
        let aggs = compute_aggregates(&sentences, &[], &StatusRules::reference()).unwrap();
        let keys: Vec<(&str, Year, u64)> = aggs
            .iter()
            .map(|r| (r.party.as_str(), r.year, r.ai_sentences))
            .collect();
        assert_eq!(keys, vec![("D66", 2023, 2), ("SP", 2023, 1), ("SP", 2025, 2)]);
        let total: u64 = aggs.iter().map(|r| r.ai_sentences).sum();
        assert_eq!(total, sentences.len() as u64);
    }

    #[test]
    fn missing_word_count_has_no_rate() {
        init();
        let sentences = vec![sentence("PartyX", 2023, "Ethical"), sentence("VVD", 2023, "")];
        let wcs = vec![word_count("VVD", 2023, 5000)];
        let aggs = compute_aggregates(&sentences, &wcs, &StatusRules::reference()).unwrap();
        let party_x = &aggs[0];
        assert_eq!(party_x.party, "PartyX");
        assert_eq!(party_x.total_words, None);
        assert_eq!(party_x.rate, None);
        assert_eq!(party_x.undefined_rate(), Some(UndefinedRate::MissingWordCount));
        assert_eq!(party_x.status, Status::Opposition);
        assert_eq!(aggs[1].rate, Some(2.0));
    }

    #[test]
    fn zero_word_count_has_no_rate() {
        assert_eq!(normalized_rate(3, Some(0)), None);
        assert_eq!(normalized_rate(3, None), None);
        assert_eq!(normalized_rate(0, Some(100)), Some(0.0));

        let sentences = vec![sentence("BBB", 2025, "Economic")];
        let wcs = vec![word_count("BBB", 2025, 0)];
        let aggs = compute_aggregates(&sentences, &wcs, &StatusRules::reference()).unwrap();
        assert_eq!(aggs[0].rate, None);
        assert_eq!(aggs[0].undefined_rate(), Some(UndefinedRate::ZeroWordCount));
    }

    #[test]
    fn duplicate_word_counts_are_rejected() {
        let sentences = vec![sentence("NSC", 2023, "Ethical")];
        let wcs = vec![
            word_count("NSC", 2023, 1000),
            word_count("NSC", 2025, 1000),
            word_count("NSC", 2023, 2000),
        ];
        let res = compute_aggregates(&sentences, &wcs, &StatusRules::reference());
        assert_eq!(
            res,
            Err(SalienceError::DuplicateKey {
                party: "NSC".to_string(),
                year: 2023
            })
        );
    }

    #[test]
    fn status_follows_the_configured_parties() {
        let rules = StatusRules::new(&["GL-PvdA".to_string()]);
        let sentences = vec![sentence("GL-PvdA", 2025, "Ethical"), sentence("PVV", 2025, "Ethical")];
        let aggs = compute_aggregates(&sentences, &[], &rules).unwrap();
        assert_eq!(aggs[0].status, Status::Governing);
        assert_eq!(aggs[1].status, Status::Opposition);
    }

    #[test]
    fn change_table_defaults_absent_rates_to_zero() {
        init();
        let sentences = vec![
            sentence("CDA", 2023, "Ethical"),
            sentence("CDA", 2025, "Ethical"),
            sentence("JA21", 2025, "Security"),
            sentence("SGP", 2023, "Societal"),
            sentence("PvdD", 2025, "Ethical"),
        ];
        let wcs = vec![
            word_count("CDA", 2023, 10000),
            word_count("CDA", 2025, 10000),
            word_count("JA21", 2025, 4000),
            word_count("SGP", 2023, 5000),
        ];
        let aggs = compute_aggregates(&sentences, &wcs, &StatusRules::reference()).unwrap();
        let table = compute_change_table(&aggs, 2023, 2025);
        assert_eq!(table.warning, None);
        assert_eq!(table.undefined_rates, vec![("PvdD".to_string(), 2025)]);

        let got: Vec<(&str, f64, f64, f64)> = table
            .rows
            .iter()
            .map(|r| (r.party.as_str(), r.rate_a, r.rate_b, r.delta))
            .collect();
        assert_eq!(
            got,
            vec![
                ("JA21", 0.0, 2.5, 2.5),
                // Ties are sorted by party name.
                ("CDA", 1.0, 1.0, 0.0),
                ("PvdD", 0.0, 0.0, 0.0),
                ("SGP", 2.0, 0.0, -2.0),
            ]
        );
        for r in table.rows.iter() {
            assert_eq!(r.delta, r.rate_b - r.rate_a);
        }
    }

    #[test]
    fn change_table_sort_order() {
        let sentences: Vec<SentenceRecord> = ["A", "B", "C", "D", "E"]
            .iter()
            .enumerate()
            .flat_map(|(idx, p)| {
                let mut v = vec![sentence(p, 2023, "Ethical")];
                for _ in 0..(idx % 3) {
                    v.push(sentence(p, 2025, "Ethical"));
                }
                v
            })
            .collect();
        let wcs: Vec<WordCountRecord> = ["A", "B", "C", "D", "E"]
            .iter()
            .flat_map(|p| vec![word_count(p, 2023, 10000), word_count(p, 2025, 10000)])
            .collect();
        let aggs = compute_aggregates(&sentences, &wcs, &StatusRules::reference()).unwrap();
        let table = compute_change_table(&aggs, 2023, 2025);
        for pair in table.rows.windows(2) {
            assert!(pair[0].delta >= pair[1].delta);
            if pair[0].delta == pair[1].delta {
                assert!(pair[0].party < pair[1].party);
            }
        }
        let parties: Vec<&str> = table.rows.iter().map(|r| r.party.as_str()).collect();
        assert_eq!(parties, vec!["C", "B", "E", "A", "D"]);
    }

    #[test]
    fn change_table_with_missing_year() {
        init();
        let sentences = vec![sentence("VVD", 2023, "Ethical"), sentence("PVV", 2023, "Security")];
        let wcs = vec![word_count("VVD", 2023, 10000), word_count("PVV", 2023, 20000)];
        let aggs = compute_aggregates(&sentences, &wcs, &StatusRules::reference()).unwrap();
        let table = compute_change_table(&aggs, 2023, 2025);
        assert_eq!(
            table.warning,
            Some(ChangeWarning::MissingYear { years: vec![2025] })
        );
        let got: Vec<(&str, f64, f64)> = table
            .rows
            .iter()
            .map(|r| (r.party.as_str(), r.rate_a, r.delta))
            .collect();
        assert_eq!(got, vec![("PVV", 0.5, 0.0), ("VVD", 1.0, 0.0)]);
    }

    #[test]
    fn change_table_keeps_parties_of_other_years() {
        let sentences = vec![
            sentence("VVD", 2021, "Ethical"),
            sentence("VVD", 2023, "Ethical"),
            sentence("DENK", 2021, "Ethical"),
            sentence("SP", 2025, "Ethical"),
        ];
        let aggs = compute_aggregates(&sentences, &[], &StatusRules::reference()).unwrap();
        let table = compute_change_table(&aggs, 2023, 2025);
        let parties: Vec<&str> = table.rows.iter().map(|r| r.party.as_str()).collect();
        assert_eq!(parties, vec!["DENK", "SP", "VVD"]);
    }

    #[test]
    fn pipeline_is_deterministic() {
        let sentences = vec![
            sentence("VVD", 2025, "Ethical"),
            sentence("PVV", 2023, "Ethical"),
            sentence("BBB", 2025, "Labour"),
            sentence("PVV", 2025, "Security"),
            sentence("VVD", 2023, "Economic"),
        ];
        let wcs = vec![
            word_count("VVD", 2023, 30000),
            word_count("VVD", 2025, 31000),
            word_count("PVV", 2023, 12000),
            word_count("PVV", 2025, 9000),
            word_count("BBB", 2025, 20000),
        ];
        let rules = StatusRules::reference();
        let aggs1 = compute_aggregates(&sentences, &wcs, &rules).unwrap();
        let aggs2 = compute_aggregates(&sentences, &wcs, &rules).unwrap();
        assert_eq!(format!("{:?}", aggs1), format!("{:?}", aggs2));
        let t1 = compute_change_table(&aggs1, 2023, 2025);
        let t2 = compute_change_table(&aggs2, 2023, 2025);
        assert_eq!(format!("{:?}", t1), format!("{:?}", t2));
    }

    #[test]
    fn find_examples_substring_match() {
        init();
        let sentences = vec![
            sentence("D66", 2025, "Economic"),
            sentence("D66", 2025, "Security"),
            sentence("D66", 2025, "Socio-economic"),
            sentence("D66", 2023, "Economic"),
            sentence("VVD", 2025, "Economic"),
            sentence("D66", 2025, "Ethical,Economic"),
        ];
        let found = find_examples(&sentences, "D66", 2025, "eco", 5);
        let dims: Vec<&str> = found.iter().map(|s| s.dimension.as_str()).collect();
        assert_eq!(dims, vec!["Economic", "Socio-economic", "Ethical,Economic"]);
        for s in found {
            assert!(s.dimension.to_lowercase().contains("eco"));
        }

        let secur = find_examples(&sentences, "D66", 2025, "SECUR", 5);
        assert_eq!(secur.len(), 1);
        assert_eq!(secur[0].dimension, "Security");
    }

    #[test]
    fn find_examples_respects_limit() {
        let sentences: Vec<SentenceRecord> = (0..12)
            .map(|i| SentenceRecord {
                sentence: format!("sentence {}", i),
                ..sentence("GL-PvdA", 2023, "Ethical,Security")
            })
            .collect();
        let found = find_examples(&sentences, "GL-PvdA", 2023, "ethical", DEFAULT_EXAMPLES_LIMIT);
        assert_eq!(found.len(), 5);
        let texts: Vec<&str> = found.iter().map(|s| s.sentence.as_str()).collect();
        assert_eq!(
            texts,
            vec!["sentence 0", "sentence 1", "sentence 2", "sentence 3", "sentence 4"]
        );
        assert!(find_examples(&sentences, "GL-PvdA", 2023, "ethical", 0).is_empty());
    }

    #[test]
    fn find_examples_empty_results() {
        let sentences = vec![sentence("CU", 2023, ""), sentence("CU", 2023, "Labour")];
        assert!(find_examples(&sentences, "CU", 2025, "Labour", 5).is_empty());
        assert!(find_examples(&sentences, "SGP", 2023, "Labour", 5).is_empty());
        // The empty query matches every labeled sentence.
        assert_eq!(find_examples(&sentences, "CU", 2023, "", 5).len(), 1);
    }

    #[test]
    fn dimension_counts_multi_label() {
        let sentences = vec![
            sentence("PVV", 2023, "Ethical,Security"),
            sentence("PVV", 2023, "Security"),
            sentence("PVV", 2023, "Security, Security"),
            sentence("PVV", 2023, "Tech"),
            sentence("PVV", 2023, ""),
        ];
        let counts = dimension_counts(&sentences, &vocabulary());
        let got: Vec<(&str, u64)> = counts
            .iter()
            .map(|c| (c.dimension.as_str(), c.count))
            .collect();
        assert_eq!(
            got,
            vec![
                ("Ethical", 1),
                ("Societal", 0),
                ("Policy / Regulation", 0),
                ("Security", 3),
                ("Labour", 0),
                ("Economic", 0),
                ("Uncategorized", 0),
                ("Tech", 1),
            ]
        );
    }

    #[test]
    fn melt_follows_the_vocabulary() {
        let rows = vec![
            DimensionSummaryRow {
                party: "SP".to_string(),
                year: 2025,
                values: vec![("Labour".to_string(), 4), ("Ethical".to_string(), 1)],
            },
            DimensionSummaryRow {
                party: "CDA".to_string(),
                year: 2023,
                values: vec![("Ethical".to_string(), 2)],
            },
        ];
        let vocab = vec!["Ethical".to_string(), "Labour".to_string()];
        let counts = melt_dimension_summary(&rows, &vocab);
        let got: Vec<(&str, Year, &str, u64)> = counts
            .iter()
            .map(|c| (c.party.as_str(), c.year, c.dimension.as_str(), c.count))
            .collect();
        assert_eq!(
            got,
            vec![
                ("CDA", 2023, "Ethical", 2),
                ("CDA", 2023, "Labour", 0),
                ("SP", 2025, "Ethical", 1),
                ("SP", 2025, "Labour", 4),
            ]
        );
    }

    #[test]
    fn selection_options_are_sorted_tags() {
        let mut builder = Builder::new();
        builder.add_sentence("VVD", 2025, "s1", "Security,Ethical", "Positive");
        builder.add_sentence("D66", 2023, "s2", "Economic", "Neutral");
        builder.add_sentence("VVD", 2023, "s3", "", "Neutral");
        let dataset = builder.build();
        let options = selection_options(&dataset.sentences);
        assert_eq!(options.parties, vec!["D66", "VVD"]);
        assert_eq!(options.years, vec![2023, 2025]);
        assert_eq!(options.dimensions, vec!["Economic", "Ethical", "Security"]);
    }
}
