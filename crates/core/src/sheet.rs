use std::path::Path;

use umya_spreadsheet::{Spreadsheet, Worksheet};

use crate::error::{FillError, Result};

/// Rows scanned from the top of the sheet when looking for headers.
pub const HEADER_SCAN_ROWS: u32 = 20;
/// Rows above this one are never written.
pub const FIRST_WRITABLE_ROW: u32 = 5;

pub const TITLE_LABELS: &[&str] = &["наименование", "название"];
pub const DESCRIPTION_LABELS: &[&str] = &["описание", "description"];

/// 1-based cell grid the locator and the fill loop work against.
pub trait SheetGrid {
    fn cell_text(&self, row: u32, column: u32) -> Option<String>;
    fn max_row(&self) -> u32;
    fn max_column(&self) -> u32;
    fn set_text(&mut self, row: u32, column: u32, value: &str);
}

impl SheetGrid for Worksheet {
    fn cell_text(&self, row: u32, column: u32) -> Option<String> {
        self.get_cell((column, row))
            .map(|cell| cell.get_value().to_string())
            .filter(|value| !value.is_empty())
    }

    fn max_row(&self) -> u32 {
        self.get_highest_row()
    }

    fn max_column(&self) -> u32 {
        self.get_highest_column()
    }

    fn set_text(&mut self, row: u32, column: u32, value: &str) {
        self.get_cell_mut((column, row)).set_value(value.to_string());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderCell {
    pub column: u32,
    pub row: u32,
}

/// Resolved write area for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetTarget {
    pub title_column: u32,
    pub description_column: u32,
    pub header_row: u32,
    pub first_row: u32,
    pub last_row: u32,
}

impl SheetTarget {
    pub fn total_rows(&self) -> usize {
        (self.last_row + 1).saturating_sub(self.first_row) as usize
    }

    pub fn rows(&self) -> std::ops::RangeInclusive<u32> {
        self.first_row..=self.last_row
    }
}

/// First cell, row-major within the scanned rows, whose trimmed lowercase
/// text is one of `labels`.
pub fn find_header<G: SheetGrid + ?Sized>(
    grid: &G,
    labels: &[&str],
    scan_rows: u32,
) -> Option<HeaderCell> {
    let last_row = scan_rows.min(grid.max_row());
    let last_column = grid.max_column();
    for row in 1..=last_row {
        for column in 1..=last_column {
            let Some(text) = grid.cell_text(row, column) else {
                continue;
            };
            let value = text.trim().to_lowercase();
            if labels.contains(&value.as_str()) {
                return Some(HeaderCell { column, row });
            }
        }
    }
    None
}

/// Finds both target columns and the data rows below the header. The header
/// row is the title header's row.
pub fn locate_target<G: SheetGrid + ?Sized>(grid: &G) -> Result<SheetTarget> {
    let title = find_header(grid, TITLE_LABELS, HEADER_SCAN_ROWS);
    let description = find_header(grid, DESCRIPTION_LABELS, HEADER_SCAN_ROWS);
    let (Some(title), Some(description)) = (title, description) else {
        return Err(FillError::MissingColumns {
            scanned: HEADER_SCAN_ROWS,
        });
    };
    let header_row = title.row;
    let first_row = (header_row + 1).max(FIRST_WRITABLE_ROW);
    let last_row = grid.max_row();
    if last_row < first_row {
        return Err(FillError::NoDataRows {
            first_row,
            last_row,
        });
    }
    Ok(SheetTarget {
        title_column: title.column,
        description_column: description.column,
        header_row,
        first_row,
        last_row,
    })
}

pub fn open_workbook(path: &Path) -> Result<Spreadsheet> {
    umya_spreadsheet::reader::xlsx::read(path).map_err(|err| FillError::Workbook {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

pub fn save_workbook(book: &Spreadsheet, path: &Path) -> Result<()> {
    umya_spreadsheet::writer::xlsx::write(book, path).map_err(|err| FillError::Workbook {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}
