use anyhow::{bail, Context, Result};
use calamine::{open_workbook_auto, Data, Reader};
use std::io::Read;
use std::path::Path;

/// A table as read from disk: one header row plus data rows, all cells as text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Input formats, detected from the file extension
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SourceFormat {
    Delimited(u8),
    Spreadsheet,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(SourceFormat::Delimited(b',')),
            "tsv" | "txt" => Ok(SourceFormat::Delimited(b'\t')),
            "xls" | "xlsx" | "xlsm" | "xlsb" | "ods" => Ok(SourceFormat::Spreadsheet),
            _ => bail!("Unsupported input format: {:?}", path),
        }
    }
}

/// Read the checklist from a CSV/TSV file or the first (or named) sheet of a workbook
pub fn read_source(path: &Path, sheet: Option<&str>) -> Result<RawTable> {
    match SourceFormat::from_path(path)? {
        SourceFormat::Delimited(delimiter) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("Failed to open: {:?}", path))?;
            read_delimited(file, delimiter)
                .with_context(|| format!("Failed to read: {:?}", path))
        }
        SourceFormat::Spreadsheet => read_spreadsheet(path, sheet),
    }
}

/// Read delimited text; short rows are allowed and every cell is trimmed.
/// Double quotes follow spreadsheet export rules for CSV and TSV alike.
pub fn read_delimited<R: Read>(reader: R, delimiter: u8) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .context("Failed to read header row")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Failed to read row {}", idx + 2))?;
        rows.push(record.iter().map(|c| c.to_string()).collect());
    }

    Ok(RawTable { headers, rows })
}

fn read_spreadsheet(path: &Path, sheet: Option<&str>) -> Result<RawTable> {
    // calamine auto-detects xls, xlsx, xlsb and ods
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook: {:?}", path))?;

    let sheet_name = match sheet {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .with_context(|| format!("Workbook has no sheets: {:?}", path))?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read sheet '{}'", sheet_name))?;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect::<Vec<_>>());

    let headers = rows
        .next()
        .with_context(|| format!("Sheet '{}' has no header row", sheet_name))?;

    Ok(RawTable {
        headers,
        rows: rows.collect(),
    })
}

/// Render a spreadsheet cell as trimmed text; whole numbers lose their `.0`
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        other => other.to_string().trim().to_string(),
    }
}
