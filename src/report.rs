use log::{debug, info, warn};

use ai_salience::builder::Builder;
use ai_salience::*;
use snafu::{prelude::*, Snafu};

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::report::config_reader::*;
use crate::report::io_common::*;

pub mod config_reader;
mod io_common;
mod io_csv;
mod io_xlsx;
mod render;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ReportError {
    #[snafu(display("Error opening file {path}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("The spreadsheet {path} has no content"))]
    EmptyExcel { path: String },
    #[snafu(display("Cannot find worksheet {name} in {path}"))]
    MissingWorksheet { name: String, path: String },
    #[snafu(display("Error opening file {path}"))]
    OpeningCsv { source: csv::Error, path: String },
    #[snafu(display("Error reading line {lineno} of {path}"))]
    CsvLineParse {
        source: csv::Error,
        path: String,
        lineno: usize,
    },
    #[snafu(display("Missing column {column} in {path}"))]
    MissingColumn { column: String, path: String },
    #[snafu(display("Cannot read column {column} at line {lineno} of {path}: {content}"))]
    WrongCellType {
        path: String,
        lineno: usize,
        column: String,
        content: String,
    },
    #[snafu(display("Unknown input type {input_type:?} for {path} (expected xlsx or csv)"))]
    UnknownInputType { input_type: String, path: String },
    #[snafu(display("Error opening file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing JSON"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Cannot find the directory of {path}"))]
    MissingParentDir { path: String },
    #[snafu(display("No {what} file was provided, neither with the command line nor with the configuration"))]
    MissingInput { what: String },
    #[snafu(display("Cannot aggregate the data"))]
    Salience { source: SalienceError },
    #[snafu(display("Error writing {path}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Difference detected between the report and the reference summary {path}"))]
    ReferenceMismatch { path: String },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type ReportResult<T> = Result<T, ReportError>;

/// Where the counts of the dimension chart come from.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum DimensionSource {
    Summary,
    Sentences,
}

/// The resolved choice of the example browser.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Selection {
    pub party: String,
    pub year: Year,
    pub dimension: String,
}

/// Everything the renderers need.
#[derive(PartialEq, Debug, Clone)]
pub struct Report {
    pub title: String,
    pub status_labels: StatusLabels,
    pub governing: Vec<String>,
    pub sources: Vec<(String, String)>,
    pub aggregates: Vec<AggregateRow>,
    pub change_table: ChangeTable,
    pub dimensions: Vec<String>,
    pub dimension_counts: Vec<DimensionCount>,
    pub dimension_source: DimensionSource,
    pub options: SelectionOptions,
    pub selection: Option<Selection>,
    pub examples_limit: usize,
    pub examples: Vec<SentenceRecord>,
}

fn read_table(source: &InputSource) -> ReportResult<Table> {
    info!(
        "Attempting to read {:?} ({:?})",
        source.path, source.input_type
    );
    match source.input_type {
        InputType::Xlsx => io_xlsx::read_xlsx_table(&source.path, source.worksheet.as_deref()),
        InputType::Csv => io_csv::read_csv_table(&source.path),
    }
}

/// Reads all the input tables.
pub fn load_dataset(settings: &ReportSettings) -> ReportResult<Dataset> {
    let sentences = sentences_from_table(&read_table(&settings.sentences)?)?;
    let word_counts = word_counts_from_table(&read_table(&settings.word_counts)?)?;

    let mut builder = Builder::new();
    for s in sentences {
        builder.add_sentence_record(s);
    }
    for wc in word_counts {
        builder.add_word_count_record(wc).context(SalienceSnafu {})?;
    }
    if let Some(source) = &settings.dimension_summary {
        let rows = dimension_summary_from_table(&read_table(source)?, &settings.dimensions)?;
        builder = builder.dimension_summary(rows);
    }
    Ok(builder.build())
}

fn resolve_selection(requested: &ExampleSelection, options: &SelectionOptions) -> Option<Selection> {
    let party = requested
        .party
        .clone()
        .or_else(|| options.parties.first().cloned())?;
    let year = requested.year.or_else(|| options.years.first().cloned())?;
    let dimension = requested
        .dimension
        .clone()
        .or_else(|| options.dimensions.first().cloned())?;
    if !options.parties.contains(&party) {
        warn!("resolve_selection: party {:?} has no sentences", party);
    }
    if !options.years.contains(&year) {
        warn!("resolve_selection: year {:?} has no sentences", year);
    }
    Some(Selection {
        party,
        year,
        dimension,
    })
}

/// Runs all the computations of the report on a loaded dataset.
pub fn build_report(settings: &ReportSettings, dataset: &Dataset) -> ReportResult<Report> {
    if dataset.sentences.is_empty() {
        warn!("build_report: no sentences in {:?}", settings.sentences.path);
    }
    let rules = StatusRules::new(&settings.governing);
    let aggregates = compute_aggregates(&dataset.sentences, &dataset.word_counts, &rules)
        .context(SalienceSnafu {})?;
    let change_table = compute_change_table(&aggregates, settings.year_a, settings.year_b);

    let (dimension_counts, dimension_source) = match &dataset.dimension_summary {
        Some(rows) => (
            melt_dimension_summary(rows, &settings.dimensions),
            DimensionSource::Summary,
        ),
        None => (
            dimension_counts(&dataset.sentences, &settings.dimensions),
            DimensionSource::Sentences,
        ),
    };

    let options = selection_options(&dataset.sentences);
    let selection = resolve_selection(&settings.selection, &options);
    let examples: Vec<SentenceRecord> = match &selection {
        Some(sel) => find_examples(
            &dataset.sentences,
            &sel.party,
            sel.year,
            &sel.dimension,
            settings.examples_limit,
        )
        .into_iter()
        .cloned()
        .collect(),
        None => vec![],
    };
    debug!("build_report: selection: {:?} examples: {:?}", selection, examples);

    let mut sources: Vec<(String, String)> = vec![
        (
            "sentences".to_string(),
            simplify_file_name(&settings.sentences.path),
        ),
        (
            "wordCounts".to_string(),
            simplify_file_name(&settings.word_counts.path),
        ),
    ];
    if let Some(ds) = &settings.dimension_summary {
        sources.push(("dimensionSummary".to_string(), simplify_file_name(&ds.path)));
    }

    Ok(Report {
        title: settings.title.clone(),
        status_labels: settings.status_labels.clone(),
        governing: settings.governing.clone(),
        sources,
        aggregates,
        change_table,
        dimensions: settings.dimensions.clone(),
        dimension_counts,
        dimension_source,
        options,
        selection,
        examples_limit: settings.examples_limit,
        examples,
    })
}

fn write_file(path: &str, contents: &str) -> ReportResult<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context(WritingOutputSnafu { path })?;
        }
    }
    fs::write(path, contents).context(WritingOutputSnafu { path })?;
    info!("Written {:?}", path);
    Ok(())
}

pub fn read_summary(path: &str) -> ReportResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    Ok(js)
}

/// Compares the summary with a reference summary. Both are compared in their pretty-printed form.
pub fn check_reference(reference_path: &str, pretty_js_summary: &str) -> ReportResult<()> {
    let summary_ref = read_summary(reference_path)?;
    debug!("reference summary: {:?}", summary_ref);
    let pretty_js_summary_ref =
        serde_json::to_string_pretty(&summary_ref).context(ParsingJsonSnafu {})?;
    if pretty_js_summary_ref != pretty_js_summary {
        warn!("Found differences with the reference summary");
        print_diff(
            pretty_js_summary_ref.as_str(),
            pretty_js_summary,
            "\n",
        );
        return ReferenceMismatchSnafu {
            path: reference_path,
        }
        .fail();
    }
    info!("The summary matches the reference {:?}", reference_path);
    Ok(())
}

pub fn run_report(settings: &ReportSettings) -> ReportResult<()> {
    info!("settings: {:?}", settings);
    let dataset = load_dataset(settings)?;
    let report = build_report(settings, &dataset)?;

    let summary_js = render::summary_json(&report);
    let pretty_js_summary = serde_json::to_string_pretty(&summary_js).context(ParsingJsonSnafu {})?;

    match settings.out.as_deref() {
        Some("stdout") => println!("{}", pretty_js_summary),
        Some(path) => {
            write_file(path, &pretty_js_summary)?;
            print!("{}", render::render_text(&report));
        }
        None => print!("{}", render::render_text(&report)),
    }

    if let Some(html_path) = &settings.html {
        write_file(html_path, &render::render_html(&report))?;
    }

    // The reference summary, if provided for comparison
    if let Some(reference_path) = &settings.reference {
        check_reference(reference_path, &pretty_js_summary)?;
    }

    Ok(())
}
