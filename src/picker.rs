//! Interactive picking session
//!
//! Prompt loop over the loaded catalog: free text searches, single-letter
//! commands switch category, show the summary, write the selections file or
//! export the quote. Two widget variants pick items out of the hit list:
//! a multi-select checkbox list, or a "grid" where row numbers are typed
//! with an optional quantity (e.g. "1, 3x2").

use crate::catalog::Catalog;
use crate::config::{Config, SelectionWidget};
use crate::error::{EquipQuoteError, Result};
use crate::export;
use crate::session::{SelectionsFile, Session};
use dialoguer::{Input, MultiSelect, Select};
use std::path::Path;

pub fn run_picker(
    catalog: &Catalog,
    config: &Config,
    selections_path: &Path,
    output_path: &Path,
) -> Result<()> {
    let mut session = Session::new(catalog, config)?;

    println!("---");
    println!("Commands: [text]search [c]category [v]summary [w]write selections [e]export [q]quit");
    println!("---\n");

    loop {
        println!(
            "Category: {} ({} picked overall)",
            session.active_category,
            session.selections.total_items()
        );

        let input: String = Input::new()
            .with_prompt("Search")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| EquipQuoteError::Prompt(e.to_string()))?;

        match input.trim() {
            "" => continue,
            "q" | "Q" => {
                session.commit_pending();
                if !session.selections.is_empty() {
                    println!(
                        "\nLeaving {} picked item(s) behind; use w or e next time to keep them",
                        session.selections.total_items()
                    );
                }
                break;
            }
            "c" => {
                let choice = Select::new()
                    .with_prompt("Category")
                    .items(&config.categories)
                    .default(0)
                    .interact()
                    .map_err(|e| EquipQuoteError::Prompt(e.to_string()))?;
                session.switch_category(&config.categories[choice]);
                println!();
            }
            "v" => print_summary(&session, config),
            "w" => {
                session.commit_pending();
                SelectionsFile::save(&session.selections, selections_path)?;
                println!("✔ selections written: {}\n", selections_path.display());
            }
            "e" => {
                session.commit_pending();
                if session.selections.is_empty() {
                    println!("Nothing picked yet\n");
                    continue;
                }
                export::write_quote(&session.selections, output_path)?;
                println!("✔ quote saved: {}\n", output_path.display());
                session.after_export();
            }
            query => {
                session.query = query.to_string();
                pick_from_matches(&mut session, config)?;
            }
        }
    }

    Ok(())
}

/// Run one search + pick round over the current query
fn pick_from_matches(session: &mut Session<'_>, config: &Config) -> Result<()> {
    let names: Vec<String> = {
        let catalog = session.catalog();
        crate::search::filter_rows(catalog, &session.query)
            .into_iter()
            .filter_map(|row| catalog.item_name(row))
            .collect()
    };

    if names.is_empty() {
        println!("No matches for \"{}\"\n", session.query);
        return Ok(());
    }

    let labels: Vec<String> = {
        let catalog = session.catalog();
        names
            .iter()
            .map(|name| match catalog.find_by_name(name).and_then(|r| catalog.price_of(r)) {
                Some(price) => format!("{} — {}", name, price),
                None => format!("{} — no price", name),
            })
            .collect()
    };

    match config.selection_widget {
        SelectionWidget::Checkbox => {
            let defaults: Vec<bool> = names.iter().map(|n| session.is_selected(n)).collect();
            let chosen = MultiSelect::new()
                .with_prompt(format!("{} match(es), space toggles", names.len()))
                .items(&labels)
                .defaults(&defaults)
                .interact()
                .map_err(|e| EquipQuoteError::Prompt(e.to_string()))?;

            for (i, name) in names.iter().enumerate() {
                if chosen.contains(&i) {
                    session.toggle_on(name, None);
                } else if defaults[i] {
                    session.toggle_off(name);
                }
            }
        }
        SelectionWidget::Grid => {
            for (i, label) in labels.iter().enumerate() {
                let mark = if session.is_selected(&names[i]) { "*" } else { " " };
                println!("  [{:>2}]{} {}", i + 1, mark, label);
            }
            let input: String = Input::new()
                .with_prompt("Rows (e.g. 1, 3x2; empty skips)")
                .allow_empty(true)
                .interact_text()
                .map_err(|e| EquipQuoteError::Prompt(e.to_string()))?;

            let (picks, invalid) = parse_grid_tokens(&input, names.len());
            for token in &invalid {
                println!("  ignored: {}", token);
            }
            for (index, quantity) in picks {
                session.toggle_on(&names[index - 1], quantity);
            }
        }
    }

    println!();
    Ok(())
}

fn print_summary(session: &Session<'_>, config: &Config) {
    println!("\nCurrent selections:");
    for category in &config.categories {
        let names: Vec<&str> = session
            .selections
            .items(category)
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        let listing = if names.is_empty() {
            "-".to_string()
        } else {
            names.join(", ")
        };
        println!("  {}: {}", category, listing);
    }
    println!();
}

/// Parse grid picks: comma/space separated, each a 1-based row number with
/// an optional "xQTY" suffix. Out-of-range and malformed tokens are
/// reported back, not applied.
fn parse_grid_tokens(input: &str, max: usize) -> (Vec<(usize, Option<f64>)>, Vec<String>) {
    let mut picks = Vec::new();
    let mut invalid = Vec::new();

    for token in input.split([',', ' ']).filter(|t| !t.trim().is_empty()) {
        let token = token.trim();
        let (index_part, quantity) = match token.split_once(['x', 'X']) {
            Some((idx, qty)) => match qty.parse::<f64>() {
                Ok(q) if q > 0.0 => (idx, Some(q)),
                _ => {
                    invalid.push(token.to_string());
                    continue;
                }
            },
            None => (token, None),
        };

        match index_part.parse::<usize>() {
            Ok(index) if (1..=max).contains(&index) => picks.push((index, quantity)),
            _ => invalid.push(token.to_string()),
        }
    }

    (picks, invalid)
}
