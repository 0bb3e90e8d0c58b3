//! Selection state
//!
//! One interactive session owns a `Session`: the read-only catalog, the
//! active category, the current query, committed selections per category and
//! the pending picks for the active category. Pending picks are folded into
//! the committed list whenever the category is switched, so switching never
//! loses in-progress work. The committed set can be handed off to `export`
//! directly or written to a selections file for a later `export` run.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{EquipQuoteError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// One line of the exported quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRecord {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
}

impl ExportRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: None,
            quantity: None,
        }
    }
}

/// Selections filed under one category, in pick order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: String,
    pub items: Vec<ExportRecord>,
}

/// Insertion-ordered mapping category -> picked items. A name appears at
/// most once per category; the same name under two categories is allowed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionSet {
    groups: Vec<CategoryGroup>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to a category unless the name is already there.
    /// Returns whether the record was added.
    pub fn insert(&mut self, category: &str, record: ExportRecord) -> bool {
        let group = match self.groups.iter_mut().find(|g| g.category == category) {
            Some(g) => g,
            None => {
                self.groups.push(CategoryGroup {
                    category: category.to_string(),
                    items: Vec::new(),
                });
                self.groups.last_mut().unwrap()
            }
        };

        if group.items.iter().any(|item| item.name == record.name) {
            return false;
        }
        group.items.push(record);
        true
    }

    /// Retract a name from a category. Returns whether anything was removed.
    pub fn remove(&mut self, category: &str, name: &str) -> bool {
        if let Some(group) = self.groups.iter_mut().find(|g| g.category == category) {
            let before = group.items.len();
            group.items.retain(|item| item.name != name);
            return group.items.len() != before;
        }
        false
    }

    pub fn contains(&self, category: &str, name: &str) -> bool {
        self.groups
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.items.iter().any(|item| item.name == name))
            .unwrap_or(false)
    }

    pub fn items(&self, category: &str) -> &[ExportRecord] {
        self.groups
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.items.as_slice())
            .unwrap_or(&[])
    }

    /// Categories holding at least one item, in insertion order
    pub fn non_empty(&self) -> impl Iterator<Item = &CategoryGroup> {
        self.groups.iter().filter(|g| !g.items.is_empty())
    }

    pub fn total_items(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_items() == 0
    }

    pub fn clear(&mut self) {
        self.groups.clear();
    }
}

const SELECTIONS_VERSION: u32 = 1;

/// On-disk envelope for a SelectionSet
#[derive(Debug, Serialize, Deserialize)]
pub struct SelectionsFile {
    version: u32,
    selections: SelectionSet,
}

impl SelectionsFile {
    /// Load a selections file. Duplicate names within a category are
    /// collapsed on the way in, first occurrence wins.
    pub fn load(path: &Path) -> Result<SelectionSet> {
        if !path.exists() {
            return Err(EquipQuoteError::SelectionsNotFound(
                path.display().to_string(),
            ));
        }

        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let parsed: SelectionsFile = serde_json::from_reader(reader)
            .map_err(|e| EquipQuoteError::InvalidSelections(e.to_string()))?;

        if parsed.version != SELECTIONS_VERSION {
            return Err(EquipQuoteError::InvalidSelections(format!(
                "unsupported version {}",
                parsed.version
            )));
        }

        let mut deduped = SelectionSet::new();
        for group in &parsed.selections.groups {
            for item in &group.items {
                deduped.insert(&group.category, item.clone());
            }
        }
        Ok(deduped)
    }

    pub fn save(selections: &SelectionSet, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        let envelope = SelectionsFile {
            version: SELECTIONS_VERSION,
            selections: selections.clone(),
        };
        serde_json::to_writer_pretty(writer, &envelope)?;
        Ok(())
    }
}

/// One interactive session
pub struct Session<'a> {
    catalog: &'a Catalog,
    config: &'a Config,
    pub active_category: String,
    pub query: String,
    pub selections: SelectionSet,
    pending: Vec<ExportRecord>,
}

impl<'a> Session<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            catalog,
            config,
            active_category: config.categories[0].clone(),
            query: String::new(),
            selections: SelectionSet::new(),
            pending: Vec::new(),
        })
    }

    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    /// Mark an item picked in the active category. Idempotent: a name
    /// already pending or committed is not picked twice. Price comes from
    /// the catalog when the item is found there.
    pub fn toggle_on(&mut self, name: &str, quantity: Option<f64>) -> bool {
        if self.pending.iter().any(|r| r.name == name)
            || self.selections.contains(&self.active_category, name)
        {
            return false;
        }

        let price = self
            .catalog
            .find_by_name(name)
            .and_then(|row| self.catalog.price_of(row));

        self.pending.push(ExportRecord {
            name: name.to_string(),
            price,
            quantity,
        });
        true
    }

    /// Unmark an item. Always drops a pending pick; retracting a committed
    /// entry is the `remove_on_uncheck` variant.
    pub fn toggle_off(&mut self, name: &str) {
        self.pending.retain(|r| r.name != name);
        if self.config.remove_on_uncheck {
            self.selections.remove(&self.active_category, name);
        }
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.pending.iter().any(|r| r.name == name)
            || self.selections.contains(&self.active_category, name)
    }

    /// Fold pending picks into the active category's committed list
    pub fn commit_pending(&mut self) {
        let category = self.active_category.clone();
        for record in self.pending.drain(..) {
            self.selections.insert(&category, record);
        }
    }

    /// Switch the active category. In-progress picks for the category being
    /// left are committed first, then the query is reset.
    pub fn switch_category(&mut self, category: &str) {
        if category == self.active_category {
            return;
        }
        self.commit_pending();
        self.query.clear();
        self.active_category = category.to_string();
    }

    /// Called after a successful export; the reset variant starts the next
    /// quote from scratch.
    pub fn after_export(&mut self) {
        if !self.config.persist_on_switch {
            self.selections.clear();
            self.pending.clear();
        }
    }
}
