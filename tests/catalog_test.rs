//! Catalog loading integration tests
//!
//! Fabricates vendor-style spreadsheets (header buried mid-sheet, wrapped
//! column titles, placeholder columns) and checks what the loader makes of
//! them.

use equip_quote::catalog::{self, CellValue};
use equip_quote::config::Config;
use equip_quote::error::EquipQuoteError;
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tempfile::tempdir;

/// Vendor-style fixture: banner at the top, headers at row 15 (1-based),
/// one unnamed placeholder column, wrapped header text.
fn write_vendor_catalog(path: &Path) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet
        .write_string(0, 0, "Switchgear price list, rev. 2024-03")
        .unwrap();

    worksheet.write_string(14, 0, " Name ").unwrap();
    worksheet.write_string(14, 1, " Price \n").unwrap();
    worksheet.write_string(14, 2, "Unnamed: 2").unwrap();
    worksheet.write_string(14, 3, "Stock\nCode").unwrap();

    worksheet.write_string(15, 0, "Vacuum Breaker VB-12").unwrap();
    worksheet.write_number(15, 1, 4200.0).unwrap();
    worksheet.write_string(15, 2, "leftover note").unwrap();
    worksheet.write_string(15, 3, "VB12").unwrap();

    worksheet.write_string(16, 0, "Protection Relay RP-3").unwrap();
    worksheet.write_string(16, 3, "RP3").unwrap();

    // Row with values only in the dropped placeholder column
    worksheet.write_string(17, 2, "more leftovers").unwrap();

    workbook.save(path).unwrap();
}

#[test]
fn test_load_normalizes_and_filters_columns() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("catalog.xlsx");
    write_vendor_catalog(&path);

    let config = Config::default();
    let catalog = catalog::load_catalog(&path, &config).expect("load failed");

    assert_eq!(catalog.columns, vec!["Name", "Price", "Stock Code"]);
    assert_eq!(catalog.rows.len(), 2, "placeholder-only row must be skipped");

    assert_eq!(
        catalog.item_name(&catalog.rows[0]).as_deref(),
        Some("Vacuum Breaker VB-12")
    );
    assert_eq!(catalog.price_of(&catalog.rows[0]), Some(4200.0));

    assert_eq!(
        catalog.item_name(&catalog.rows[1]).as_deref(),
        Some("Protection Relay RP-3")
    );
    assert_eq!(catalog.price_of(&catalog.rows[1]), None);
    assert_eq!(
        catalog.cell(&catalog.rows[1], "Stock Code"),
        Some(&CellValue::Text("RP3".into()))
    );
}

#[test]
fn test_header_row_past_end_of_sheet() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("short.xlsx");

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "Name").unwrap();
    worksheet.write_string(1, 0, "Lonely Item").unwrap();
    workbook.save(&path).unwrap();

    let config = Config {
        header_row: 50,
        ..Default::default()
    };
    let result = catalog::load_catalog(&path, &config);
    assert!(matches!(
        result,
        Err(EquipQuoteError::HeaderOutOfRange { header_row: 50, .. })
    ));
}

#[test]
fn test_header_row_at_top() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("top.xlsx");

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "Name").unwrap();
    worksheet.write_string(0, 1, "Price").unwrap();
    worksheet.write_string(1, 0, "Busbar Support").unwrap();
    worksheet.write_number(1, 1, 55.0).unwrap();
    workbook.save(&path).unwrap();

    let config = Config {
        header_row: 1,
        ..Default::default()
    };
    let catalog = catalog::load_catalog(&path, &config).expect("load failed");
    assert_eq!(catalog.rows.len(), 1);
    assert_eq!(catalog.price_of(&catalog.rows[0]), Some(55.0));
}

#[test]
fn test_missing_catalog_file() {
    let config = Config::default();
    let result = catalog::load_catalog(Path::new("/nonexistent/catalog.xlsx"), &config);
    assert!(matches!(result, Err(EquipQuoteError::CatalogNotFound(_))));
}

#[test]
fn test_missing_name_column_is_fatal() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("unnamed.xlsx");

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "Description").unwrap();
    worksheet.write_string(0, 1, "Price").unwrap();
    worksheet.write_string(1, 0, "Something").unwrap();
    workbook.save(&path).unwrap();

    let config = Config {
        header_row: 1,
        ..Default::default()
    };
    let result = catalog::load_catalog(&path, &config);
    assert!(matches!(result, Err(EquipQuoteError::MissingColumn(_))));
}
