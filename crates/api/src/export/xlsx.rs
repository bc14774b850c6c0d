use enrollment_core::report::{export_rows, TrackReport, EXPORT_HEADERS};
use rust_xlsxwriter::{Format, Workbook};

use super::ExportError;

const SHEET_NAME: &str = "Equipes";
const COLUMN_WIDTHS: [f64; 7] = [28.0, 28.0, 32.0, 32.0, 24.0, 12.0, 10.0];

/// One worksheet: a bold header row followed by one row per student.
pub fn render_xlsx(report: &[TrackReport]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, (title, width)) in EXPORT_HEADERS.iter().zip(COLUMN_WIDTHS).enumerate() {
        let col = col as u16;
        sheet.write_string_with_format(0, col, *title, &header_format)?;
        sheet.set_column_width(col, width)?;
    }

    for (idx, row) in export_rows(report).iter().enumerate() {
        let row_num = idx as u32 + 1;
        for (col, cell) in row.cells().iter().enumerate() {
            sheet.write_string(row_num, col as u16, *cell)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}
