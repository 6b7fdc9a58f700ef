use calamine::{open_workbook, DataType, Reader, Xlsx};

use crate::report::{
    io_common::{Cell, Table},
    *,
};

/// Reads a worksheet of an Excel file. The first row is the header.
pub fn read_xlsx_table(path: &str, worksheet_name: Option<&str>) -> ReportResult<Table> {
    let wrange = get_range(path, worksheet_name)?;
    // The range starts at the first non-empty row of the worksheet.
    let first_row = wrange.start().map(|(row, _)| row as usize).unwrap_or(0);

    let mut iter = wrange.rows();
    let header: Vec<Option<String>> = iter
        .next()
        .context(EmptyExcelSnafu { path })?
        .iter()
        .map(|dt| match dt {
            DataType::String(s) => Some(s.trim().to_string()),
            _ => None,
        })
        .collect();
    debug!("read_xlsx_table: header: {:?}", header);

    let mut table = Table {
        path: path.to_string(),
        header,
        rows: Vec::new(),
    };
    for (idx, row) in iter.enumerate() {
        let lineno = first_row + idx + 2;
        let cells: Vec<Cell> = row.iter().map(to_cell).collect();
        table.push_row(lineno, cells);
    }
    debug!("read_xlsx_table: {}: {} rows", path, table.rows.len());
    Ok(table)
}

fn to_cell(dt: &DataType) -> Cell {
    match dt {
        DataType::Empty => Cell::Empty,
        DataType::String(s) if s.trim().is_empty() => Cell::Empty,
        DataType::String(s) => Cell::Text(s.clone()),
        DataType::Int(i) => Cell::Int(*i),
        DataType::Float(f) => Cell::Float(*f),
        DataType::Bool(b) => Cell::Text(b.to_string()),
        x => Cell::Other(format!("{:?}", x)),
    }
}

fn get_range(path: &str, worksheet_name: Option<&str>) -> ReportResult<calamine::Range<DataType>> {
    debug!("get_range: path: {:?} worksheet: {:?}", path, worksheet_name);
    let mut workbook: Xlsx<_> = open_workbook(path).context(OpeningExcelSnafu { path })?;

    // A worksheet name was provided, use it.
    if let Some(name) = worksheet_name {
        let wrange = workbook
            .worksheet_range(name)
            .context(MissingWorksheetSnafu { name, path })?
            .context(OpeningExcelSnafu { path })?;
        Ok(wrange)
    } else {
        let wrange = workbook
            .worksheet_range_at(0)
            .context(EmptyExcelSnafu { path })?
            .context(OpeningExcelSnafu { path })?;
        Ok(wrange)
    }
}
