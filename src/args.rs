use clap::Parser;

/// Reports how often Dutch political parties discuss artificial intelligence in their programs.
#[derive(Parser, Debug, Clone, Default)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON file describing the inputs and the settings of the report.
    /// Relative paths inside this file are resolved from the directory of the file.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path) The annotated sentences (xlsx or csv). Overrides the configuration file.
    #[clap(long, value_parser)]
    pub sentences: Option<String>,

    /// (file path) The word counts of the programs (xlsx or csv). Overrides the configuration file.
    #[clap(long, value_parser)]
    pub word_counts: Option<String>,

    /// (file path, optional) The number of sentences per dimension, one column per dimension.
    /// When missing, the counts are computed from the sentences.
    #[clap(long, value_parser)]
    pub dimension_summary: Option<String>,

    /// (xlsx or csv) The type of all the inputs. By default, it is guessed from the file extension.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// When using Excel files, the name of the worksheet to read. By default, the first worksheet.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    /// (repeated) A party of the governing coalition. Replaces the list of the configuration file.
    #[clap(long, value_parser)]
    pub governing: Option<Vec<String>>,

    /// The party of the example statements. By default, the first party in alphabetical order.
    #[clap(long, value_parser)]
    pub party: Option<String>,

    /// The year of the example statements. By default, the first year.
    #[clap(long, value_parser)]
    pub year: Option<i32>,

    /// (text) The example statements must have a dimension containing this text (case insensitive).
    #[clap(long, value_parser)]
    pub dimension: Option<String>,

    /// The maximum number of example statements (default 5).
    #[clap(long, value_parser)]
    pub limit: Option<usize>,

    /// (file path, 'stdout' or empty) If specified, the summary of the report will be written in JSON format to the given
    /// location. Setting this option overrides the path that may be specified with the --config option.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path or empty) If specified, a standalone HTML page with the report is written to this location.
    #[clap(long, value_parser)]
    pub html: Option<String>,

    /// (file path) A reference summary in JSON format. If provided, the program will
    /// check that the summary matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
