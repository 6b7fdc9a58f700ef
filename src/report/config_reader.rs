use crate::args::Args;
use crate::report::*;

use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "AI Politicization Dashboard (Netherlands 2023–2025)";
pub const DEFAULT_YEARS: [Year; 2] = [2023, 2025];

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputSettings {
    pub title: Option<String>,
    #[serde(rename = "outputDirectory")]
    pub output_directory: Option<String>,
    #[serde(rename = "summaryFile")]
    pub summary_file: Option<String>,
    #[serde(rename = "htmlReport")]
    pub html_report: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct FileSource {
    #[serde(rename = "filePath")]
    pub file_path: String,
    /// xlsx or csv. Guessed from the extension when missing.
    pub provider: Option<String>,
    #[serde(rename = "excelWorksheetName")]
    pub excel_worksheet_name: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Sources {
    pub sentences: Option<FileSource>,
    #[serde(rename = "wordCounts")]
    pub word_counts: Option<FileSource>,
    #[serde(rename = "dimensionSummary")]
    pub dimension_summary: Option<FileSource>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct StatusLabels {
    pub governing: String,
    pub opposition: String,
}

impl StatusLabels {
    pub fn label(&self, status: Status) -> &str {
        match status {
            Status::Governing => self.governing.as_str(),
            Status::Opposition => self.opposition.as_str(),
        }
    }
}

impl Default for StatusLabels {
    fn default() -> Self {
        StatusLabels {
            governing: "governing".to_string(),
            opposition: "opposition".to_string(),
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReportConfig {
    #[serde(rename = "outputSettings")]
    pub output_settings: Option<OutputSettings>,
    #[serde(default)]
    pub sources: Sources,
    #[serde(rename = "governingParties")]
    pub governing_parties: Option<Vec<String>>,
    #[serde(rename = "statusLabels")]
    pub status_labels: Option<StatusLabels>,
    pub years: Option<Vec<Year>>,
    pub dimensions: Option<Vec<String>>,
    #[serde(rename = "examplesLimit")]
    pub examples_limit: Option<usize>,
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum InputType {
    Xlsx,
    Csv,
}

impl InputType {
    pub fn parse(input_type: &str, path: &str) -> ReportResult<InputType> {
        match input_type.to_lowercase().as_str() {
            "xlsx" | "excel" => Ok(InputType::Xlsx),
            "csv" => Ok(InputType::Csv),
            _ => UnknownInputTypeSnafu {
                input_type,
                path,
            }
            .fail(),
        }
    }

    pub fn from_path(path: &str) -> ReportResult<InputType> {
        let ext = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        InputType::parse(ext, path)
    }
}

/// A resolved input file.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct InputSource {
    pub path: String,
    pub input_type: InputType,
    pub worksheet: Option<String>,
}

/// The choice of the example browser. Missing values default to the first option.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct ExampleSelection {
    pub party: Option<String>,
    pub year: Option<Year>,
    pub dimension: Option<String>,
}

/// All the settings of a run, once the configuration file and the command line are merged.
#[derive(PartialEq, Debug, Clone)]
pub struct ReportSettings {
    pub title: String,
    pub sentences: InputSource,
    pub word_counts: InputSource,
    pub dimension_summary: Option<InputSource>,
    pub governing: Vec<String>,
    pub status_labels: StatusLabels,
    pub year_a: Year,
    pub year_b: Year,
    pub dimensions: Vec<String>,
    pub examples_limit: usize,
    pub selection: ExampleSelection,
    pub out: Option<String>,
    pub html: Option<String>,
    pub reference: Option<String>,
}

pub fn read_config(path: &str) -> ReportResult<ReportConfig> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let config: ReportConfig =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    debug!("read_config: {:?}", config);
    Ok(config)
}

/// Merges the command line with the configuration file (if any). The command line wins.
pub fn resolve_settings(args: &Args) -> ReportResult<ReportSettings> {
    let (config, root): (ReportConfig, PathBuf) = match args.config.as_deref() {
        Some(config_path) => {
            let config = read_config(config_path)?;
            let root = Path::new(config_path)
                .parent()
                .context(MissingParentDirSnafu { path: config_path })?;
            (config, root.to_path_buf())
        }
        None => (ReportConfig::default(), PathBuf::new()),
    };
    info!("config: {:?}", config);

    let resolve = |cli: &Option<String>, file_source: &Option<FileSource>| -> ReportResult<Option<InputSource>> {
        let (path, provider, worksheet) = match (cli, file_source) {
            (Some(p), _) => (p.clone(), None, None),
            (None, Some(f)) => (
                join_path(&root, &f.file_path),
                f.provider.clone(),
                f.excel_worksheet_name.clone(),
            ),
            (None, None) => return Ok(None),
        };
        let input_type = match args.input_type.as_ref().or(provider.as_ref()) {
            Some(it) => InputType::parse(it, &path)?,
            None => InputType::from_path(&path)?,
        };
        Ok(Some(InputSource {
            path,
            input_type,
            worksheet: args.excel_worksheet_name.clone().or(worksheet),
        }))
    };

    let sentences = resolve(&args.sentences, &config.sources.sentences)?
        .context(MissingInputSnafu { what: "sentences" })?;
    let word_counts = resolve(&args.word_counts, &config.sources.word_counts)?
        .context(MissingInputSnafu {
            what: "word-counts",
        })?;
    let dimension_summary = resolve(&args.dimension_summary, &config.sources.dimension_summary)?;

    let (year_a, year_b) = match config.years.as_deref() {
        None => (DEFAULT_YEARS[0], DEFAULT_YEARS[1]),
        Some([a, b]) => (*a, *b),
        Some(x) => whatever!("Exactly two years must be compared, got {:?}", x),
    };

    let output_settings = config.output_settings.clone().unwrap_or_default();
    let output_dir = join_path(
        &root,
        output_settings.output_directory.as_deref().unwrap_or(""),
    );
    let in_output_dir =
        |file: &Option<String>| file.as_ref().map(|f| join_path(Path::new(&output_dir), f));

    Ok(ReportSettings {
        title: output_settings
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        sentences,
        word_counts,
        dimension_summary,
        governing: args
            .governing
            .clone()
            .or(config.governing_parties)
            .unwrap_or_else(|| {
                REFERENCE_GOVERNING_PARTIES
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            }),
        status_labels: config.status_labels.unwrap_or_default(),
        year_a,
        year_b,
        dimensions: config
            .dimensions
            .unwrap_or_else(|| DEFAULT_DIMENSIONS.iter().map(|s| s.to_string()).collect()),
        examples_limit: args
            .limit
            .or(config.examples_limit)
            .unwrap_or(DEFAULT_EXAMPLES_LIMIT),
        selection: ExampleSelection {
            party: args.party.clone(),
            year: args.year,
            dimension: args.dimension.clone(),
        },
        out: args
            .out
            .clone()
            .or_else(|| in_output_dir(&output_settings.summary_file)),
        html: args
            .html
            .clone()
            .or_else(|| in_output_dir(&output_settings.html_report)),
        reference: args.reference.clone(),
    })
}

fn join_path(root: &Path, file: &str) -> String {
    let p: PathBuf = [root, Path::new(file)].iter().collect();
    p.as_path().display().to_string()
}
