//! Spreadsheet input and report export.

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use rust_xlsxwriter::{Format as CellFormat, Workbook};
use sbox_core::SBox;
use sbox_metrics::Report;

use crate::input::parse_int;

/// Worksheet name used for exported reports.
pub const RESULTS_SHEET: &str = "S-Box Results";

/// Extensions routed to the spreadsheet reader instead of the text parser.
const SPREADSHEET_EXTENSIONS: [&str; 4] = ["xlsx", "xlsm", "xls", "ods"];

/// Returns true if `path` names a workbook by extension.
pub fn is_spreadsheet(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SPREADSHEET_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Reads the first worksheet of a workbook as an S-box. There is no header
/// row; cells are taken row by row and empty cells are skipped.
pub fn read_sbox(path: &Path) -> Result<SBox> {
    let mut workbook =
        open_workbook_auto(path).with_context(|| format!("open {}", path.display()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| anyhow!("{} has no worksheets", path.display()))?
        .with_context(|| format!("read first worksheet of {}", path.display()))?;
    sbox_from_range(&range)
}

/// Flattens `range` row by row and validates the result.
pub fn sbox_from_range(range: &Range<Data>) -> Result<SBox> {
    let mut values = Vec::with_capacity(sbox_core::SIZE);
    for (row_idx, row) in range.rows().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            let value = match cell {
                Data::Empty => continue,
                Data::Int(v) => *v,
                Data::Float(v) if v.fract() == 0.0 => *v as i64,
                Data::String(s) => parse_int(s.trim())
                    .with_context(|| format!("cell at row {row_idx}, column {col_idx}"))?,
                other => {
                    bail!("cell at row {row_idx}, column {col_idx} is not an integer: {other:?}")
                }
            };
            values.push(value);
        }
    }
    if values.is_empty() {
        bail!("S-box input must not be empty");
    }
    Ok(SBox::from_values(&values)?)
}

/// Renders `report` as an `.xlsx` workbook with `Metric` and `Value` columns.
pub fn report_to_xlsx(report: &Report) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let bold = CellFormat::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name(RESULTS_SHEET)?;
    sheet.write_string_with_format(0, 0, "Metric", &bold)?;
    sheet.write_string_with_format(0, 1, "Value", &bold)?;
    for (row, result) in (1u32..).zip(report.results.iter()) {
        sheet.write_string(row, 0, result.metric.label())?;
        sheet.write_number(row, 1, result.value)?;
    }
    sheet.set_column_width(0, 45)?;
    let bytes = workbook.save_to_buffer().context("serialize workbook")?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use calamine::{open_workbook_from_rs, Xlsx};
    use sbox_metrics::{MetricKind, MetricResult};

    fn grid_workbook(sbox: &SBox) -> Vec<u8> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (idx, &value) in sbox.table().iter().enumerate() {
            let (row, col) = ((idx / 16) as u32, (idx % 16) as u16);
            sheet.write_number(row, col, f64::from(value)).expect("write cell");
        }
        workbook.save_to_buffer().expect("serialize")
    }

    fn first_range(bytes: Vec<u8>) -> Range<Data> {
        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes)).expect("open");
        workbook
            .worksheet_range_at(0)
            .expect("one sheet")
            .expect("readable sheet")
    }

    #[test]
    fn grid_workbook_reads_back_row_by_row() {
        let aes = sbox_core::aes_sbox();
        let range = first_range(grid_workbook(&aes));
        assert_eq!(sbox_from_range(&range).expect("valid"), aes);
    }

    #[test]
    fn workbook_file_is_read_by_extension() {
        let aes = sbox_core::aes_sbox();
        let path = std::env::temp_dir().join(format!("sbox-input-{}.xlsx", std::process::id()));
        std::fs::write(&path, grid_workbook(&aes)).expect("write workbook");
        assert!(is_spreadsheet(&path));
        let read = read_sbox(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(read.expect("valid"), aes);
    }

    #[test]
    fn short_sheet_is_rejected() {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for col in 0..10u16 {
            sheet.write_number(0, col, f64::from(col)).expect("write cell");
        }
        let range = first_range(workbook.save_to_buffer().expect("serialize"));
        let err = sbox_from_range(&range).expect_err("too short");
        assert!(err.to_string().contains("found 10"));
    }

    #[test]
    fn report_workbook_has_results_sheet() {
        let report = Report {
            bijective: true,
            results: vec![
                MetricResult {
                    metric: MetricKind::Nl,
                    value: 112.0,
                },
                MetricResult {
                    metric: MetricKind::Dap,
                    value: 0.015625,
                },
            ],
        };
        let bytes = report_to_xlsx(&report).expect("export");
        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes)).expect("open");
        assert_eq!(workbook.sheet_names(), vec![RESULTS_SHEET.to_string()]);
        let range = workbook.worksheet_range(RESULTS_SHEET).expect("sheet");
        let rows: Vec<&[Data]> = range.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], Data::String("Metric".into()));
        assert_eq!(rows[0][1], Data::String("Value".into()));
        assert_eq!(rows[1][0], Data::String(MetricKind::Nl.label().into()));
        assert_eq!(rows[1][1], Data::Float(112.0));
        assert_eq!(rows[2][1], Data::Float(0.015625));
    }

    #[test]
    fn extension_check_ignores_text_files() {
        assert!(!is_spreadsheet(Path::new("sbox.txt")));
        assert!(!is_spreadsheet(Path::new("sbox")));
        assert!(is_spreadsheet(Path::new("SBOX.XLSX")));
    }
}
