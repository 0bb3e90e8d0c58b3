//! Substring search over the loaded catalog
//!
//! An empty or whitespace-only query returns nothing rather than the whole
//! table; the operator must type something before rows appear.

use crate::catalog::{Catalog, CatalogRow};

/// Rows where any cell contains the query as a case-insensitive substring,
/// in catalog order.
pub fn filter_rows<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a CatalogRow> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    catalog
        .rows
        .iter()
        .filter(|row| row_matches(row, &needle))
        .collect()
}

fn row_matches(row: &CatalogRow, needle: &str) -> bool {
    row.cells
        .iter()
        .any(|cell| !cell.is_empty() && cell.to_string().to_lowercase().contains(needle))
}
