// Primitives shared by the spreadsheet and CSV readers.

use std::collections::HashMap;

use crate::report::*;

pub const SENTENCE_COLUMNS: [&str; 5] = [
    "Party",
    "Year",
    "Translated_Sentence",
    "Dimension",
    "Sentiment",
];
pub const WORD_COUNT_COLUMNS: [&str; 3] = ["Party", "Year", "Total_Words"];

/// The content of a cell, whatever the format of the file.
#[derive(PartialEq, Debug, Clone)]
pub enum Cell {
    Empty,
    Int(i64),
    Float(f64),
    Text(String),
    /// Cells that cannot hold data for the report (errors, dates).
    Other(String),
}

/// A table read from a file: the header row and the rows with their line number (starting at 1).
#[derive(PartialEq, Debug, Clone)]
pub struct Table {
    pub path: String,
    pub header: Vec<Option<String>>,
    pub rows: Vec<(usize, Vec<Cell>)>,
}

impl Table {
    /// Adds a row, unless all its cells are empty.
    pub fn push_row(&mut self, lineno: usize, cells: Vec<Cell>) {
        if cells.iter().all(|c| *c == Cell::Empty) {
            debug!("push_row: {}: skipping empty line {}", self.path, lineno);
            return;
        }
        self.rows.push((lineno, cells));
    }
}

pub fn simplify_file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
        .to_string()
}

/// Given the header of a file (names of each of the columns), and the names of the required
/// columns, finds the position of each of them.
pub fn get_col_index_mapping(
    req_col_names: &[&str],
    header: &[Option<String>],
    path: &str,
) -> ReportResult<Vec<usize>> {
    let col_names: HashMap<&str, usize> = header
        .iter()
        .enumerate()
        .filter_map(|(idx, x)| x.as_ref().map(|s| (s.as_str(), idx)))
        .collect();

    debug!("get_col_index_mapping: {}: col_names: {:?}", path, col_names);

    let mut col_indexes: Vec<usize> = Vec::new();
    for cname in req_col_names {
        let idx = col_names
            .get(cname)
            .context(MissingColumnSnafu {
                column: *cname,
                path,
            })?;
        col_indexes.push(*idx);
    }
    Ok(col_indexes)
}

pub fn cell_to_year(cell: &Cell) -> Option<Year> {
    match cell {
        Cell::Int(i) => Year::try_from(*i).ok(),
        Cell::Float(f) if f.fract() == 0.0 => Year::try_from(*f as i64).ok(),
        Cell::Text(s) => {
            let s = s.trim();
            s.parse::<Year>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.fract() == 0.0)
                    .and_then(|f| Year::try_from(f as i64).ok())
            })
        }
        _ => None,
    }
}

pub fn cell_to_count(cell: &Cell) -> Option<u64> {
    match cell {
        Cell::Int(i) => u64::try_from(*i).ok(),
        Cell::Float(f) if f.fract() == 0.0 && *f >= 0.0 => Some(*f as u64),
        Cell::Text(s) => {
            let s = s.trim();
            s.parse::<u64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                    .map(|f| f as u64)
            })
        }
        _ => None,
    }
}

pub fn cell_to_text(cell: &Cell) -> Option<String> {
    match cell {
        Cell::Empty => Some("".to_string()),
        Cell::Text(s) => Some(s.trim().to_string()),
        Cell::Int(i) => Some(i.to_string()),
        Cell::Float(f) if f.fract() == 0.0 => Some((*f as i64).to_string()),
        Cell::Float(f) => Some(f.to_string()),
        Cell::Other(_) => None,
    }
}

/// Reads the cells of a row, in the order of the required columns.
struct RowReader<'a> {
    table: &'a Table,
    lineno: usize,
    cells: &'a [Cell],
}

impl<'a> RowReader<'a> {
    fn get(&self, col_idx: usize) -> &'a Cell {
        self.cells.get(col_idx).unwrap_or(&Cell::Empty)
    }

    fn wrong_cell(&self, col_idx: usize, column: &str) -> ReportError {
        WrongCellTypeSnafu {
            path: self.table.path.clone(),
            lineno: self.lineno,
            column,
            content: format!("{:?}", self.get(col_idx)),
        }
        .build()
    }

    fn read<T>(
        &self,
        col_idx: usize,
        column: &str,
        f: impl Fn(&Cell) -> Option<T>,
    ) -> ReportResult<T> {
        f(self.get(col_idx)).ok_or_else(|| self.wrong_cell(col_idx, column))
    }

    fn party(&self, col_idx: usize) -> ReportResult<String> {
        let party = self.read(col_idx, "Party", cell_to_text)?;
        if party.is_empty() {
            return Err(self.wrong_cell(col_idx, "Party"));
        }
        Ok(party)
    }
}

fn rows_of<'a>(table: &'a Table) -> impl Iterator<Item = RowReader<'a>> {
    table.rows.iter().map(move |(lineno, cells)| RowReader {
        table,
        lineno: *lineno,
        cells: cells.as_slice(),
    })
}

pub fn sentences_from_table(table: &Table) -> ReportResult<Vec<SentenceRecord>> {
    let idx = get_col_index_mapping(&SENTENCE_COLUMNS, &table.header, &table.path)?;
    let mut res: Vec<SentenceRecord> = Vec::with_capacity(table.rows.len());
    for row in rows_of(table) {
        res.push(SentenceRecord {
            party: row.party(idx[0])?,
            year: row.read(idx[1], "Year", cell_to_year)?,
            sentence: row.read(idx[2], "Translated_Sentence", cell_to_text)?,
            dimension: row.read(idx[3], "Dimension", cell_to_text)?,
            sentiment: row.read(idx[4], "Sentiment", cell_to_text)?,
        });
    }
    info!(
        "sentences_from_table: {} sentences read from {}",
        res.len(),
        simplify_file_name(&table.path)
    );
    Ok(res)
}

pub fn word_counts_from_table(table: &Table) -> ReportResult<Vec<WordCountRecord>> {
    let idx = get_col_index_mapping(&WORD_COUNT_COLUMNS, &table.header, &table.path)?;
    let mut res: Vec<WordCountRecord> = Vec::with_capacity(table.rows.len());
    for row in rows_of(table) {
        res.push(WordCountRecord {
            party: row.party(idx[0])?,
            year: row.read(idx[1], "Year", cell_to_year)?,
            total_words: row.read(idx[2], "Total_Words", cell_to_count)?,
        });
    }
    info!(
        "word_counts_from_table: {} word counts read from {}",
        res.len(),
        simplify_file_name(&table.path)
    );
    Ok(res)
}

/// Reads the dimension summary. Every dimension of the vocabulary must have a column.
pub fn dimension_summary_from_table(
    table: &Table,
    dimensions: &[String],
) -> ReportResult<Vec<DimensionSummaryRow>> {
    let mut req: Vec<&str> = vec!["Party", "Year"];
    req.extend(dimensions.iter().map(|s| s.as_str()));
    let idx = get_col_index_mapping(&req, &table.header, &table.path)?;
    let mut res: Vec<DimensionSummaryRow> = Vec::with_capacity(table.rows.len());
    for row in rows_of(table) {
        let mut values: Vec<(String, u64)> = Vec::with_capacity(dimensions.len());
        for (pos, dim) in dimensions.iter().enumerate() {
            // Empty cells are zero counts.
            let count = match row.get(idx[pos + 2]) {
                Cell::Empty => 0,
                _ => row.read(idx[pos + 2], dim, cell_to_count)?,
            };
            values.push((dim.clone(), count));
        }
        res.push(DimensionSummaryRow {
            party: row.party(idx[0])?,
            year: row.read(idx[1], "Year", cell_to_year)?,
            values,
        });
    }
    info!(
        "dimension_summary_from_table: {} rows read from {}",
        res.len(),
        simplify_file_name(&table.path)
    );
    Ok(res)
}
