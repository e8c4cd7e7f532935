//! Tabular pump curve parsing.
//!
//! Uploads arrive as raw bytes plus the declared filename; the extension
//! picks the reader. Both readers share the same contract: a header row
//! naming `discharge`, `head` and `efficiency` (case-insensitive, extra
//! columns ignored), numeric rows below it. Rows that fail to parse or fall
//! outside the physical ranges are dropped rather than aborting the upload;
//! the surviving rows are sorted by discharge with duplicate discharges
//! removed (first wins) and must still number at least [`MIN_ROWS`].

use std::io::Cursor;
use std::path::Path;

use calamine::{DataType, Reader, open_workbook_auto_from_rs};
use pf_curve::SamplePoint;

use crate::error::{DatasetError, DatasetResult};

/// Columns every dataset must declare in its header row.
pub const REQUIRED_COLUMNS: [&str; 3] = ["discharge", "head", "efficiency"];

/// Minimum valid rows after hygiene, matching the cubic fit requirement.
pub const MIN_ROWS: usize = pf_curve::MIN_SAMPLES;

/// Supported tabular container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Workbook,
}

impl TableFormat {
    /// Dispatch on the declared filename, mirroring the upload widget.
    pub fn from_filename(filename: &str) -> DatasetResult<Self> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("csv") => Ok(TableFormat::Csv),
            Some("xls") | Some("xlsx") | Some("xlsm") => Ok(TableFormat::Workbook),
            _ => Err(DatasetError::UnsupportedFormat {
                filename: filename.to_string(),
            }),
        }
    }
}

/// Parse an uploaded dataset into fit-ready samples.
pub fn parse_dataset(bytes: &[u8], filename: &str) -> DatasetResult<Vec<SamplePoint>> {
    let rows = match TableFormat::from_filename(filename)? {
        TableFormat::Csv => parse_csv(bytes)?,
        TableFormat::Workbook => parse_workbook(bytes)?,
    };
    finalize_rows(rows)
}

/// Locate the required columns in a lowercased header, in declaration order.
fn required_column_indices(columns: &[String]) -> DatasetResult<[usize; 3]> {
    let mut indices = [0usize; 3];
    for (slot, name) in REQUIRED_COLUMNS.into_iter().enumerate() {
        indices[slot] = columns
            .iter()
            .position(|column| column == name)
            .ok_or(DatasetError::MissingColumn { column: name })?;
    }
    Ok(indices)
}

fn parse_csv(bytes: &[u8]) -> DatasetResult<Vec<SamplePoint>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(bytes);

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| DatasetError::Unreadable {
            message: e.to_string(),
        })?
        .iter()
        .map(|header| header.trim().to_ascii_lowercase())
        .collect();
    let indices = required_column_indices(&columns)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        // A record that fails to read (stray quotes, encoding junk) is
        // dropped like any other invalid row.
        let Ok(record) = record else { continue };
        let field = |slot: usize| record.get(indices[slot]).and_then(|v| v.parse::<f64>().ok());
        if let (Some(discharge), Some(head), Some(efficiency)) = (field(0), field(1), field(2)) {
            rows.push(SamplePoint::new(discharge, head, efficiency));
        }
    }
    Ok(rows)
}

fn parse_workbook(bytes: &[u8]) -> DatasetResult<Vec<SamplePoint>> {
    let mut workbook =
        open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|e| DatasetError::Unreadable {
            message: e.to_string(),
        })?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| DatasetError::Unreadable {
            message: "workbook has no sheets".to_string(),
        })?
        .map_err(|e| DatasetError::Unreadable {
            message: e.to_string(),
        })?;

    let mut sheet_rows = range.rows();
    let Some(header) = sheet_rows.next() else {
        return Err(DatasetError::MissingColumn {
            column: REQUIRED_COLUMNS[0],
        });
    };
    let columns: Vec<String> = header
        .iter()
        .map(|cell| {
            cell.as_string()
                .unwrap_or_default()
                .trim()
                .to_ascii_lowercase()
        })
        .collect();
    let indices = required_column_indices(&columns)?;

    let mut rows = Vec::new();
    for sheet_row in sheet_rows {
        let cell = |slot: usize| sheet_row.get(indices[slot]).and_then(|c| c.as_f64());
        if let (Some(discharge), Some(head), Some(efficiency)) = (cell(0), cell(1), cell(2)) {
            rows.push(SamplePoint::new(discharge, head, efficiency));
        }
    }
    Ok(rows)
}

/// Row hygiene shared by both readers: drop invalid rows, order by
/// discharge, collapse duplicate discharges, enforce the minimum count.
fn finalize_rows(mut rows: Vec<SamplePoint>) -> DatasetResult<Vec<SamplePoint>> {
    rows.retain(SamplePoint::is_valid);
    rows.sort_by(|a, b| a.discharge.total_cmp(&b.discharge));
    rows.dedup_by(|current, previous| current.discharge == previous.discharge);

    if rows.len() < MIN_ROWS {
        return Err(DatasetError::TooFewRows {
            rows: rows.len(),
            min: MIN_ROWS,
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_CSV: &str = "discharge,head,efficiency\n\
                            0,50,0.5\n\
                            100,48,0.7\n\
                            200,40,0.8\n\
                            300,25,0.6\n";

    #[test]
    fn parses_well_formed_csv() {
        let samples = parse_dataset(GOOD_CSV.as_bytes(), "pump_curve.csv").unwrap();
        assert_eq!(samples.len(), 4);
        assert_eq!(samples[2], SamplePoint::new(200.0, 40.0, 0.8));
    }

    #[test]
    fn header_matching_is_case_insensitive_with_extra_columns() {
        let csv = "Serial, Head , DISCHARGE ,efficiency\n\
                   a,50,0,0.5\n\
                   b,48,100,0.7\n\
                   c,40,200,0.8\n\
                   d,25,300,0.6\n";
        let samples = parse_dataset(csv.as_bytes(), "curve.CSV").unwrap();
        assert_eq!(samples.len(), 4);
        assert_eq!(samples[0], SamplePoint::new(0.0, 50.0, 0.5));
    }

    #[test]
    fn missing_column_is_named() {
        let csv = "discharge,head\n0,50\n100,48\n200,40\n300,25\n";
        assert_eq!(
            parse_dataset(csv.as_bytes(), "curve.csv").unwrap_err(),
            DatasetError::MissingColumn {
                column: "efficiency"
            }
        );
    }

    #[test]
    fn junk_rows_are_dropped_not_fatal() {
        let csv = "discharge,head,efficiency\n\
                   0,50,0.5\n\
                   oops,48,0.7\n\
                   100,48,0.7\n\
                   200,,0.8\n\
                   200,40,0.8\n\
                   250,-3,0.8\n\
                   300,25,1.7\n\
                   300,25,0.6\n";
        let samples = parse_dataset(csv.as_bytes(), "curve.csv").unwrap();
        assert_eq!(samples.len(), 4);
    }

    #[test]
    fn too_few_valid_rows_rejected() {
        let csv = "discharge,head,efficiency\n0,50,0.5\n100,48,0.7\nbad,40,0.8\n";
        assert_eq!(
            parse_dataset(csv.as_bytes(), "curve.csv").unwrap_err(),
            DatasetError::TooFewRows { rows: 2, min: 4 }
        );
    }

    #[test]
    fn rows_are_sorted_and_deduplicated() {
        let csv = "discharge,head,efficiency\n\
                   300,25,0.6\n\
                   0,50,0.5\n\
                   200,40,0.8\n\
                   200,41,0.81\n\
                   100,48,0.7\n";
        let samples = parse_dataset(csv.as_bytes(), "curve.csv").unwrap();
        let discharges: Vec<f64> = samples.iter().map(|s| s.discharge).collect();
        assert_eq!(discharges, vec![0.0, 100.0, 200.0, 300.0]);
        // first occurrence of the duplicated discharge wins (input order,
        // stable sort)
        assert_eq!(samples[2].head, 40.0);
    }

    #[test]
    fn unsupported_extension_rejected() {
        assert!(matches!(
            parse_dataset(GOOD_CSV.as_bytes(), "pump_curve.json").unwrap_err(),
            DatasetError::UnsupportedFormat { .. }
        ));
        assert!(matches!(
            parse_dataset(GOOD_CSV.as_bytes(), "no_extension").unwrap_err(),
            DatasetError::UnsupportedFormat { .. }
        ));
    }

    #[test]
    fn garbage_workbook_bytes_are_unreadable() {
        assert!(matches!(
            parse_dataset(b"definitely not a spreadsheet", "curve.xlsx").unwrap_err(),
            DatasetError::Unreadable { .. }
        ));
    }

    #[test]
    fn format_dispatch() {
        assert_eq!(
            TableFormat::from_filename("a.csv").unwrap(),
            TableFormat::Csv
        );
        assert_eq!(
            TableFormat::from_filename("b.XLSX").unwrap(),
            TableFormat::Workbook
        );
        assert_eq!(
            TableFormat::from_filename("c.xls").unwrap(),
            TableFormat::Workbook
        );
    }
}
