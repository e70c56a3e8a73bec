// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Transaction;
use crate::state::AppState;
use crate::store::TransactionStore;
use anyhow::{Result, bail};
use std::path::Path;

pub fn handle(state: &mut AppState, store: &dyn TransactionStore, m: &clap::ArgMatches) -> Result<()> {
    super::refresh_or_notice(state, store);
    state.set_filters(super::filters_from(m)?);
    export_transactions(&state.filtered(), m)
}

pub fn export_transactions(rows: &[Transaction], sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = Path::new(sub.get_one::<String>("out").unwrap().trim());

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "ID", "Status", "Name", "Date", "Amount", "Method", "Category", "Note",
            ])?;
            for t in rows {
                let date = t.date.map(|d| d.to_string()).unwrap_or_default();
                let amount = t.amount.to_string();
                wtr.write_record([
                    t.id.as_str(),
                    t.status.as_str(),
                    t.name.as_str(),
                    date.as_str(),
                    amount.as_str(),
                    t.method.as_str(),
                    t.category.as_str(),
                    t.note.as_deref().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(rows)?)?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!("Exported {} transactions to {}", rows.len(), out.display());
    Ok(())
}
