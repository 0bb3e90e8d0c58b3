use thiserror::Error;

#[derive(Error, Debug)]
pub enum EquipQuoteError {
    #[error("config error: {0}")]
    Config(String),

    #[error("catalog file not found: {0}")]
    CatalogNotFound(String),

    #[error("failed to read catalog: {0}")]
    CatalogRead(String),

    #[error("header row {header_row} is past the end of the sheet (last used row: {last_row})")]
    HeaderOutOfRange { header_row: u32, last_row: u32 },

    #[error("required column not found in catalog: {0}")]
    MissingColumn(String),

    #[error("selections file not found: {0}")]
    SelectionsNotFound(String),

    #[error("invalid selections file: {0}")]
    InvalidSelections(String),

    #[error("failed to write quote spreadsheet: {0}")]
    ExcelWrite(String),

    #[error("prompt error: {0}")]
    Prompt(String),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EquipQuoteError>;
