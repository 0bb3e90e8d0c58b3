//! Quote spreadsheet generation
//!
//! Each non-empty category becomes one block: a title row, a fixed header
//! row, one row per item, then a blank separator row before the next block.
//! Blocks are laid out with a single running row counter, no padding.

use crate::error::{EquipQuoteError, Result};
use crate::session::SelectionSet;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, XlsxError};
use std::collections::HashSet;
use std::path::Path;

/// Column labels of every block's header row
pub const EXPORT_HEADERS: [&str; 3] = ["Name", "Price", "Quantity"];

/// Write the grouped quote. Categories without items are omitted; an
/// existing file at `output_path` is overwritten.
pub fn write_quote(selections: &SelectionSet, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let title_format = Format::new().set_bold();
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xAAAAAA));

    let worksheet = workbook.add_worksheet();

    let mut row: u32 = 0;
    let mut first_block = true;

    for group in selections.non_empty() {
        // Blank separator row between blocks, none before the first or
        // after the last
        if !first_block {
            row += 1;
        }
        first_block = false;

        worksheet
            .write_string_with_format(row, 0, &group.category, &title_format)
            .map_err(excel_err)?;
        row += 1;

        for (col, label) in EXPORT_HEADERS.iter().enumerate() {
            worksheet
                .write_string_with_format(row, col as u16, *label, &header_format)
                .map_err(excel_err)?;
        }
        row += 1;

        // The selection invariant already keeps names unique per category;
        // hand-edited selections files get the same treatment here
        let mut written: HashSet<&str> = HashSet::new();
        for item in &group.items {
            if !written.insert(item.name.as_str()) {
                continue;
            }

            worksheet
                .write_string(row, 0, &item.name)
                .map_err(excel_err)?;
            if let Some(price) = item.price {
                worksheet.write_number(row, 1, price).map_err(excel_err)?;
            }
            if let Some(quantity) = item.quantity {
                worksheet
                    .write_number(row, 2, quantity)
                    .map_err(excel_err)?;
            }
            row += 1;
        }
    }

    workbook.save(output_path).map_err(excel_err)?;
    Ok(())
}

fn excel_err(e: XlsxError) -> EquipQuoteError {
    EquipQuoteError::ExcelWrite(e.to_string())
}
