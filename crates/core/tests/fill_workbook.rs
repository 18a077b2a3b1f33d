use std::path::Path;

use sunseo_core::{
    fill_workbook, output_path, FillError, GenerationRequest, RngSource, SheetGrid,
    DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS,
};
use umya_spreadsheet::Spreadsheet;

fn write_template(path: &Path, header_row: u32, last_row: u32) {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_active_sheet_mut();
    sheet.set_text(1, 1, "Шаблон для загрузки карточек");
    sheet.set_text(header_row, 1, "Артикул");
    sheet.set_text(header_row, 2, "Наименование");
    sheet.set_text(header_row, 3, "Описание");
    for row in header_row + 1..=last_row {
        sheet.set_text(row, 1, &format!("SKU-{row}"));
    }
    umya_spreadsheet::writer::xlsx::write(&book, path).expect("write template");
}

fn read_back(path: &Path) -> Spreadsheet {
    umya_spreadsheet::reader::xlsx::read(path).expect("read filled copy")
}

fn request() -> GenerationRequest {
    GenerationRequest::builder("Gucci")
        .shape("авиаторы")
        .lens("UV400")
        .collection("Весна–Лето 2026")
        .build()
}

#[test]
fn fills_ten_rows_and_writes_ready_copy() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("wb.xlsx");
    write_template(&input, 4, 14);

    let mut rng = RngSource::seeded(42);
    let mut progress = Vec::new();
    let outcome = fill_workbook(&request(), &input, &mut rng, |p| progress.push(p)).unwrap();

    assert_eq!(outcome.rows, 10);
    assert_eq!(outcome.output_path, dir.path().join("wb_ready.xlsx"));
    assert_eq!(progress.len(), 10);
    assert_eq!(progress.last().copied(), Some(100.0));

    let book = read_back(&outcome.output_path);
    let sheet = book.get_active_sheet();
    for row in 5..=14 {
        let title = sheet.cell_text(row, 2).expect("title written");
        let description = sheet.cell_text(row, 3).expect("description written");
        assert!(title.chars().count() <= TITLE_MAX_CHARS);
        assert!(description.chars().count() <= DESCRIPTION_MAX_CHARS);
        assert_eq!(sheet.cell_text(row, 1), Some(format!("SKU-{row}")));
    }
    assert_eq!(sheet.cell_text(4, 2).as_deref(), Some("Наименование"));
    assert_eq!(
        sheet.cell_text(1, 1).as_deref(),
        Some("Шаблон для загрузки карточек")
    );

    let original = read_back(&input);
    assert_eq!(original.get_active_sheet().cell_text(5, 2), None);
}

#[test]
fn unfiltered_run_fills_ten_rows() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("raw.xlsx");
    write_template(&input, 4, 14);

    let request = GenerationRequest::builder("Gucci")
        .shape("авиаторы")
        .lens("UV400")
        .collection("Весна–Лето 2026")
        .safe_mode(false)
        .strict_mode(false)
        .build();
    let mut rng = RngSource::seeded(5);
    let mut progress = Vec::new();
    let outcome = fill_workbook(&request, &input, &mut rng, |p| progress.push(p)).unwrap();

    assert_eq!(outcome.rows, 10);
    assert_eq!(outcome.output_path, dir.path().join("raw_ready.xlsx"));
    assert_eq!(progress.last().copied(), Some(100.0));
    let book = read_back(&outcome.output_path);
    let sheet = book.get_active_sheet();
    for row in 5..=14 {
        let title = sheet.cell_text(row, 2).expect("title written");
        let description = sheet.cell_text(row, 3).expect("description written");
        assert!(title.chars().count() <= TITLE_MAX_CHARS);
        assert!(description.chars().count() <= DESCRIPTION_MAX_CHARS);
    }
}

#[test]
fn header_on_third_row_leaves_fourth_row_alone() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("template.xlsx");
    write_template(&input, 3, 8);

    let mut rng = RngSource::seeded(7);
    let outcome = fill_workbook(&request(), &input, &mut rng, |_| {}).unwrap();
    assert_eq!(outcome.rows, 4);

    let book = read_back(&outcome.output_path);
    let sheet = book.get_active_sheet();
    assert_eq!(sheet.cell_text(4, 2), None);
    assert_eq!(sheet.cell_text(4, 3), None);
    assert!(sheet.cell_text(5, 2).is_some());
    assert!(sheet.cell_text(8, 3).is_some());
}

#[test]
fn header_only_template_is_rejected_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.xlsx");
    write_template(&input, 1, 1);

    let mut rng = RngSource::seeded(1);
    let err = fill_workbook(&request(), &input, &mut rng, |_| {}).unwrap_err();
    assert!(matches!(err, FillError::NoDataRows { .. }));
    assert!(!output_path(&input).exists());
}

#[test]
fn template_without_description_column_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("prices.xlsx");
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_active_sheet_mut();
    sheet.set_text(1, 1, "Наименование");
    sheet.set_text(1, 2, "Цена");
    sheet.set_text(9, 1, "x");
    umya_spreadsheet::writer::xlsx::write(&book, &input).unwrap();

    let mut rng = RngSource::seeded(1);
    let err = fill_workbook(&request(), &input, &mut rng, |_| {}).unwrap_err();
    assert!(matches!(err, FillError::MissingColumns { scanned: 20 }));
    assert!(!output_path(&input).exists());
}
