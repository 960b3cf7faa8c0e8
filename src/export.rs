use std::io::Write;
use std::path::Path;

use rust_xlsxwriter::{
    ColNum, Format, FormatAlign, RowNum, Table, TableColumn, Workbook, XlsxError,
};
use thiserror::Error;
use tracing::{info, warn};

use crate::lead::LeadRecord;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] XlsxError),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Excel's per-cell string limit, in characters.
const MAX_CELL_CHARS: usize = 32_767;

/// Cut a value to the cell limit on a char boundary.
fn fit_cell(value: &str) -> &str {
    match value.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => &value[..end],
        None => value,
    }
}

/// Write the leads as a right-to-left worksheet with a formatted table over the data.
pub fn write_xlsx(leads: &[LeadRecord], path: &Path) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_right_to_left(true);

    for (row, lead) in leads.iter().enumerate() {
        for (col, value) in lead.to_row().into_iter().enumerate() {
            let cell = fit_cell(value);
            if cell.len() < value.len() {
                warn!(
                    row = row + 1,
                    col,
                    chars = value.chars().count(),
                    "cell exceeds {} characters; truncated",
                    MAX_CELL_CHARS
                );
            }
            worksheet.write_string(row as RowNum + 1, col as ColNum, cell)?;
        }
    }

    for (col, width) in LeadRecord::COLUMN_WIDTHS.into_iter().enumerate() {
        worksheet.set_column_width(col as ColNum, width)?;
    }

    let last_col = (LeadRecord::HEADERS.len() - 1) as ColNum;
    // A table needs at least one row under its header.
    if !leads.is_empty() {
        let columns: Vec<TableColumn> = LeadRecord::HEADERS
            .iter()
            .map(|header| TableColumn::new().set_header(*header))
            .collect();
        let table = Table::new().set_columns(&columns);
        worksheet.add_table(0, 0, leads.len() as RowNum, last_col, &table)?;
    }

    // Written after the table so the table doesn't reset the header cells.
    let header_format = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    for (col, header) in LeadRecord::HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as ColNum, *header, &header_format)?;
    }

    workbook.save(path)?;
    info!(path = %path.display(), records = leads.len(), "wrote spreadsheet");
    Ok(())
}

/// One JSON object per line, fields in column order.
pub fn write_json_lines<W: Write>(leads: &[LeadRecord], mut out: W) -> Result<(), ExportError> {
    for lead in leads {
        serde_json::to_writer(&mut out, lead)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
