use std::io::Cursor;

use async_trait::async_trait;
use calamine::{Data, Reader, Xlsx};

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{DocumentFormat, UploadedFile};

use super::blocking::run_parser;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Excel workbooks: every sheet, row by row, cells separated by single spaces.
pub struct XlsxAdapter;

impl XlsxAdapter {
    fn extract_workbook(data: Vec<u8>) -> Result<String, String> {
        let mut workbook: Xlsx<_> =
            Xlsx::new(Cursor::new(data)).map_err(|e| format!("failed to open workbook: {e}"))?;

        let mut text = String::new();
        for sheet_name in workbook.sheet_names() {
            let range = workbook
                .worksheet_range(&sheet_name)
                .map_err(|e| format!("failed to read sheet '{sheet_name}': {e}"))?;

            let (Some((first_row, first_col)), Some((_, last_col))) = (range.start(), range.end())
            else {
                continue;
            };

            // Rows and columns are laid out from A1, so leading blanks are kept.
            let padding = vec![String::new(); first_col as usize];
            let width = last_col as usize + 1;
            for _ in 0..first_row {
                text.push_str(&vec![""; width].join(" "));
                text.push('\n');
            }
            for row in range.rows() {
                let cells: Vec<String> = padding
                    .iter()
                    .cloned()
                    .chain(row.iter().map(render_cell))
                    .collect();
                text.push_str(&cells.join(" "));
                text.push('\n');
            }
        }

        Ok(text)
    }
}

fn render_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(true) => "True".to_string(),
        Data::Bool(false) => "False".to_string(),
        Data::Error(e) => format!("#ERR:{e:?}"),
        // Falls back to the raw serial when the value is outside the calendar range.
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|datetime| datetime.format(DATETIME_FORMAT).to_string())
            .unwrap_or_else(|| dt.to_string()),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

#[async_trait]
impl FileLoader for XlsxAdapter {
    #[tracing::instrument(skip(self, file), fields(filename = %file.filename))]
    async fn extract_text(&self, file: &UploadedFile) -> Result<String, FileLoaderError> {
        if file.format() != DocumentFormat::Xlsx {
            return Err(FileLoaderError::UnsupportedFormat(file.filename.clone()));
        }

        let data = file.content.clone();
        let text = run_parser(&file.filename, move || Self::extract_workbook(data)).await?;

        tracing::info!(chars = text.chars().count(), "Extracted text from XLSX");
        Ok(text)
    }
}
