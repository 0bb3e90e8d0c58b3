//! Catalog loading
//!
//! Reads the vendor catalog spreadsheet into an in-memory table. The header
//! row sits at a fixed 1-based offset (config `header_row`); column names are
//! normalized and placeholder columns are dropped. Loading happens once per
//! process, the table is read-only afterwards.

pub mod normalize;

use crate::config::Config;
use crate::error::{EquipQuoteError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use self::normalize::normalize_header;
use std::path::Path;

/// One loaded cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            CellValue::Empty => Ok(()),
        }
    }
}

/// One catalog entry; cells aligned with `Catalog::columns`
#[derive(Debug, Clone)]
pub struct CatalogRow {
    pub cells: Vec<CellValue>,
}

/// The loaded catalog table
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Normalized column names, source order preserved
    pub columns: Vec<String>,
    pub rows: Vec<CatalogRow>,
    name_idx: usize,
    price_idx: Option<usize>,
}

impl Catalog {
    /// Build a catalog from already-normalized parts. The name column must be
    /// present; the price column is optional.
    pub fn new(
        columns: Vec<String>,
        rows: Vec<CatalogRow>,
        name_column: &str,
        price_column: &str,
    ) -> Result<Self> {
        let name_idx = columns
            .iter()
            .position(|c| c == name_column)
            .ok_or_else(|| EquipQuoteError::MissingColumn(name_column.to_string()))?;
        let price_idx = columns.iter().position(|c| c == price_column);

        Ok(Self {
            columns,
            rows,
            name_idx,
            price_idx,
        })
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    pub fn cell<'a>(&self, row: &'a CatalogRow, column: &str) -> Option<&'a CellValue> {
        self.column_index(column).and_then(|i| row.cells.get(i))
    }

    /// Display name of a row, or None if the name cell is blank
    pub fn item_name(&self, row: &CatalogRow) -> Option<String> {
        match row.cells.get(self.name_idx) {
            Some(cell) if !cell.is_empty() => Some(cell.to_string()),
            _ => None,
        }
    }

    /// Numeric price of a row, if the catalog has a price column and the
    /// cell holds a number
    pub fn price_of(&self, row: &CatalogRow) -> Option<f64> {
        let idx = self.price_idx?;
        row.cells.get(idx).and_then(|c| c.as_number())
    }

    pub fn find_by_name(&self, name: &str) -> Option<&CatalogRow> {
        self.rows
            .iter()
            .find(|row| self.item_name(row).as_deref() == Some(name))
    }
}

/// Load the catalog spreadsheet. Missing file, unreadable workbook or a
/// header row past the end of the sheet are all fatal.
pub fn load_catalog(path: &Path, config: &Config) -> Result<Catalog> {
    if !path.exists() {
        return Err(EquipQuoteError::CatalogNotFound(path.display().to_string()));
    }

    let mut workbook =
        open_workbook_auto(path).map_err(|e| EquipQuoteError::CatalogRead(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| EquipQuoteError::CatalogRead("workbook has no sheets".into()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| EquipQuoteError::CatalogRead(e.to_string()))?;

    if config.header_row == 0 {
        return Err(EquipQuoteError::Config("header_row is 1-based".into()));
    }

    // The range is trimmed to used cells; row indices below are absolute.
    let start_row = range.start().map(|(r, _)| r).unwrap_or(0);
    let last_row = start_row + range.height() as u32;
    let header_abs = config.header_row - 1;

    if header_abs >= last_row {
        return Err(EquipQuoteError::HeaderOutOfRange {
            header_row: config.header_row,
            last_row,
        });
    }

    let header_cells: &[Data] = if header_abs >= start_row {
        range
            .rows()
            .nth((header_abs - start_row) as usize)
            .unwrap_or(&[])
    } else {
        // Header row exists but holds no used cells
        &[]
    };

    // Keep columns with a usable normalized name, preserving source order
    let mut columns = Vec::new();
    let mut src_indices = Vec::new();
    for (i, cell) in header_cells.iter().enumerate() {
        let name = normalize_header(&data_display(cell));
        if name.is_empty() || name.starts_with(&config.placeholder_marker) {
            continue;
        }
        columns.push(name);
        src_indices.push(i);
    }

    let data_skip = if header_abs >= start_row {
        (header_abs - start_row + 1) as usize
    } else {
        0
    };

    let mut rows = Vec::new();
    for src_row in range.rows().skip(data_skip) {
        let cells: Vec<CellValue> = src_indices
            .iter()
            .map(|&i| src_row.get(i).map(cell_value).unwrap_or(CellValue::Empty))
            .collect();
        if cells.iter().all(|c| c.is_empty()) {
            continue;
        }
        rows.push(CatalogRow { cells });
    }

    Catalog::new(columns, rows, &config.name_column, &config.price_column)
}

fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => {
            if s.trim().is_empty() {
                CellValue::Empty
            } else {
                CellValue::Text(s.clone())
            }
        }
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Empty,
    }
}

fn data_display(data: &Data) -> String {
    cell_value(data).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::new(
            vec!["Name".into(), "Price".into(), "Stock Code".into()],
            vec![
                CatalogRow {
                    cells: vec![
                        CellValue::Text("Breaker A".into()),
                        CellValue::Number(1250.0),
                        CellValue::Text("BR-A1".into()),
                    ],
                },
                CatalogRow {
                    cells: vec![
                        CellValue::Text("Relay B".into()),
                        CellValue::Empty,
                        CellValue::Text("RL-B2".into()),
                    ],
                },
                CatalogRow {
                    cells: vec![
                        CellValue::Empty,
                        CellValue::Number(99.5),
                        CellValue::Text("??".into()),
                    ],
                },
            ],
            "Name",
            "Price",
        )
        .unwrap()
    }

    #[test]
    fn test_missing_name_column() {
        let result = Catalog::new(vec!["Price".into()], vec![], "Name", "Price");
        assert!(matches!(result, Err(EquipQuoteError::MissingColumn(_))));
    }

    #[test]
    fn test_item_name_and_price() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.item_name(&catalog.rows[0]).as_deref(),
            Some("Breaker A")
        );
        assert_eq!(catalog.price_of(&catalog.rows[0]), Some(1250.0));
        assert_eq!(catalog.price_of(&catalog.rows[1]), None);
        assert_eq!(catalog.item_name(&catalog.rows[2]), None);
    }

    #[test]
    fn test_find_by_name() {
        let catalog = sample_catalog();
        assert!(catalog.find_by_name("Relay B").is_some());
        assert!(catalog.find_by_name("relay b").is_none());
        assert!(catalog.find_by_name("Missing").is_none());
    }

    #[test]
    fn test_cell_by_column() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.cell(&catalog.rows[0], "Stock Code"),
            Some(&CellValue::Text("BR-A1".into()))
        );
        assert_eq!(catalog.cell(&catalog.rows[0], "Weight"), None);
    }

    #[test]
    fn test_cell_value_display() {
        assert_eq!(CellValue::Number(42.0).to_string(), "42");
        assert_eq!(CellValue::Number(12.5).to_string(), "12.5");
        assert_eq!(CellValue::Text("x".into()).to_string(), "x");
        assert_eq!(CellValue::Empty.to_string(), "");
    }
}
