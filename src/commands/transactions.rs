// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Category, Method, Status, Transaction, TransactionDraft};
use crate::state::AppState;
use crate::store::TransactionStore;
use crate::utils::{maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::{Context, Result, anyhow};
use serde::Serialize;

pub fn handle(state: &mut AppState, store: &dyn TransactionStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(state, store, sub)?,
        Some(("add", sub)) => add(state, store, sub)?,
        Some(("edit", sub)) => edit(state, store, sub)?,
        Some(("rm", sub)) => remove(state, store, sub)?,
        _ => {}
    }
    Ok(())
}

fn list(state: &mut AppState, store: &dyn TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    super::refresh_or_notice(state, store);
    let data = query_rows(state, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        if data.is_empty() {
            println!("No transactions match your filters.");
            return Ok(());
        }
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.status.clone(),
                    r.name.clone(),
                    r.date.clone(),
                    r.amount.clone(),
                    r.method.clone(),
                    r.category.clone(),
                    r.note.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Status", "Name", "Date", "Amount", "Method", "Category", "Note"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub status: String,
    pub name: String,
    pub date: String,
    pub amount: String,
    pub method: String,
    pub category: String,
    pub note: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(t: &Transaction) -> Self {
        Self {
            id: t.id.clone(),
            status: t.status.to_string(),
            name: t.name.clone(),
            date: t.date.map(|d| d.to_string()).unwrap_or_default(),
            amount: format!("{:.2}", t.amount),
            method: t.method.to_string(),
            category: t.category.to_string(),
            note: t.note.clone().unwrap_or_default(),
        }
    }
}

/// Applies the filter flags to the loaded transactions and renders the rows.
pub fn query_rows(state: &mut AppState, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    state.set_filters(super::filters_from(sub)?);
    Ok(state.filtered().iter().map(TransactionRow::from).collect())
}

fn add(state: &mut AppState, store: &dyn TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let draft = draft_from_args(sub)?;
    let created = store.create(&draft).context("Failed to save transaction")?;
    println!(
        "Transaction added: {} {} on {}",
        created.name, created.amount, draft.date
    );
    super::refresh_or_notice(state, store);
    Ok(())
}

fn edit(state: &mut AppState, store: &dyn TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().trim();
    super::refresh_or_notice(state, store);
    let existing = state
        .find(id)
        .with_context(|| format!("Transaction '{}' not found", id))?;
    let mut draft = match TransactionDraft::from_existing(existing) {
        Some(d) => d,
        None => {
            let date = sub
                .get_one::<String>("date")
                .ok_or_else(|| anyhow!("Transaction '{}' has no usable date; pass --date", id))?;
            TransactionDraft {
                method: existing.method.clone(),
                category: existing.category.clone(),
                status: existing.status.clone(),
                note: existing.note.clone().unwrap_or_default(),
                ..TransactionDraft::new(existing.name.clone(), existing.amount, parse_date(date)?)
            }
        }
    };
    apply_overrides(&mut draft, sub)?;
    store
        .update(id, &draft)
        .context("Failed to save transaction")?;
    println!("Transaction updated: {}", id);
    super::refresh_or_notice(state, store);
    Ok(())
}

fn remove(state: &mut AppState, store: &dyn TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().trim();
    store.delete(id).context("Failed to delete transaction")?;
    println!("Transaction deleted: {}", id);
    super::refresh_or_notice(state, store);
    Ok(())
}

/// Builds a new draft from `add` flags; unset optional flags keep the form
/// defaults (UPI, Food, Success).
pub fn draft_from_args(sub: &clap::ArgMatches) -> Result<TransactionDraft> {
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let mut draft = TransactionDraft::new(name, amount, date);
    apply_overrides(&mut draft, sub)?;
    draft.validate()?;
    Ok(draft)
}

pub fn apply_overrides(draft: &mut TransactionDraft, sub: &clap::ArgMatches) -> Result<()> {
    let arg = |name: &str| sub.get_one::<String>(name).map(|s| s.trim());
    if let Some(name) = arg("name") {
        draft.name = name.to_string();
    }
    if let Some(amount) = arg("amount") {
        draft.amount = parse_decimal(amount)?;
    }
    if let Some(date) = arg("date") {
        draft.date = parse_date(date)?;
    }
    if let Some(method) = arg("method") {
        draft.method = method.parse::<Method>()?;
    }
    if let Some(category) = arg("category") {
        draft.category = category.parse::<Category>()?;
    }
    if let Some(status) = arg("status") {
        draft.status = status.parse::<Status>()?;
    }
    if let Some(note) = arg("note") {
        draft.note = note.to_string();
    }
    Ok(())
}
