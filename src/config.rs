use crate::error::{EquipQuoteError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Selection widget variant for the interactive picker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionWidget {
    /// Check items off a multi-select list
    #[default]
    Checkbox,
    /// Type row numbers, optionally with a quantity (e.g. "3x2")
    Grid,
}

impl std::str::FromStr for SelectionWidget {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "checkbox" | "check" => Ok(SelectionWidget::Checkbox),
            "grid" => Ok(SelectionWidget::Grid),
            _ => Err(format!("Unknown widget: {}. Use checkbox or grid", s)),
        }
    }
}

impl std::fmt::Display for SelectionWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionWidget::Checkbox => write!(f, "checkbox"),
            SelectionWidget::Grid => write!(f, "grid"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the vendor catalog spreadsheet
    pub catalog_path: PathBuf,

    /// 1-based row holding the column headers (vendor sheets bury it mid-page)
    pub header_row: u32,

    /// Column holding the item name
    pub name_column: String,

    /// Column holding the item price, if the catalog has one
    pub price_column: String,

    /// Columns whose normalized name starts with this marker are dropped
    pub placeholder_marker: String,

    /// Categories selections are filed under, in display order
    pub categories: Vec<String>,

    /// Default quote output file
    pub output_filename: PathBuf,

    /// Default selections session file
    pub selections_filename: PathBuf,

    /// Keep selections after a successful export (false = reset variant)
    pub persist_on_switch: bool,

    /// Unchecking an item retracts it from the committed list
    pub remove_on_uncheck: bool,

    /// Picker widget variant
    pub selection_widget: SelectionWidget,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| EquipQuoteError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("equip-quote").join("config.json"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(EquipQuoteError::Config(
                "at least one category is required".into(),
            ));
        }
        if self.header_row == 0 {
            return Err(EquipQuoteError::Config("header_row is 1-based".into()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("catalog.xlsx"),
            header_row: 15, // matches the vendor catalog layout
            name_column: "Name".into(),
            price_column: "Price".into(),
            placeholder_marker: "Unnamed".into(),
            categories: vec![
                "Enclosure".into(),
                "Breaker Bay".into(),
                "Relay Bay".into(),
                "Other".into(),
            ],
            output_filename: PathBuf::from("quote.xlsx"),
            selections_filename: PathBuf::from("selections.json"),
            persist_on_switch: true,
            remove_on_uncheck: true,
            selection_widget: SelectionWidget::Checkbox,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_empty_categories_rejected() {
        let config = Config {
            categories: vec![],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_widget_from_str() {
        assert_eq!(
            "checkbox".parse::<SelectionWidget>().unwrap(),
            SelectionWidget::Checkbox
        );
        assert_eq!(
            "GRID".parse::<SelectionWidget>().unwrap(),
            SelectionWidget::Grid
        );
        assert!("table".parse::<SelectionWidget>().is_err());
    }
}
