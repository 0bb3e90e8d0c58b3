//! Header-name normalization
//!
//! Vendor catalogs wrap column titles over multiple lines and pad them with
//! stray whitespace; everything downstream keys on the cleaned-up name.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CONTROL_CHARS: Regex = Regex::new(r"[\n\r\t]").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Normalize a raw header cell: control characters become spaces, whitespace
/// runs collapse to one space, ends are trimmed. Idempotent.
pub fn normalize_header(raw: &str) -> String {
    let replaced = CONTROL_CHARS.replace_all(raw, " ");
    let collapsed = WHITESPACE_RUN.replace_all(&replaced, " ");
    collapsed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_collapses() {
        assert_eq!(normalize_header(" Price \n"), "Price");
        assert_eq!(normalize_header("Tariff with\nVAT,\trub"), "Tariff with VAT, rub");
        assert_eq!(normalize_header("  Stock   Code  "), "Stock Code");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize_header(" Breaker\r\n Rating ");
        assert_eq!(normalize_header(&once), once);
        assert_eq!(normalize_header("Name"), "Name");
    }

    #[test]
    fn test_whitespace_only_becomes_empty() {
        assert_eq!(normalize_header(" \n\t "), "");
        assert_eq!(normalize_header(""), "");
    }
}
