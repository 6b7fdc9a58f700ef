// Primitives for reading CSV files.

use crate::report::{
    io_common::{Cell, Table},
    *,
};

/// Reads a CSV file with a header row. All the values are read as text.
pub fn read_csv_table(path: &str) -> ReportResult<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .context(OpeningCsvSnafu { path })?;

    let header: Vec<Option<String>> = rdr
        .headers()
        .context(CsvLineParseSnafu { path, lineno: 1_usize })?
        .iter()
        .map(|s| Some(s.trim().to_string()))
        .collect();
    debug!("read_csv_table: {}: header: {:?}", path, header);

    let mut table = Table {
        path: path.to_string(),
        header,
        rows: Vec::new(),
    };
    for (idx, line_r) in rdr.into_records().enumerate() {
        // The header is the first line.
        let lineno = idx + 2;
        let line = line_r.context(CsvLineParseSnafu { path, lineno })?;
        let cells: Vec<Cell> = line
            .iter()
            .map(|s| {
                if s.trim().is_empty() {
                    Cell::Empty
                } else {
                    Cell::Text(s.to_string())
                }
            })
            .collect();
        table.push_row(lineno, cells);
    }
    debug!("read_csv_table: {}: {} rows", path, table.rows.len());
    Ok(table)
}
