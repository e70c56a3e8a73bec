// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::state::AppState;
use crate::store::TransactionStore;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use chrono::Local;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(state: &mut AppState, store: &dyn TransactionStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(state, store, sub)?,
        Some(("set", sub)) => set(state, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
struct BudgetReport {
    goal: Decimal,
    spent: Decimal,
    remaining: Decimal,
    progress_percent: u8,
}

fn show(state: &mut AppState, store: &dyn TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    super::refresh_or_notice(state, store);
    // Home tracks the current month; the dashboard tracks everything loaded.
    let spent = match sub.get_one::<String>("view").map(String::as_str) {
        Some("dashboard") => state.dashboard().total_spent,
        _ => state.home(Local::now().date_naive()).spent_this_month,
    };
    let tracker = state.budget();
    let report = BudgetReport {
        goal: tracker.goal().amount(),
        spent,
        remaining: tracker.remaining(spent),
        progress_percent: tracker.progress_percent(spent),
    };
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &report)? {
        let rows = vec![
            vec!["Goal".into(), fmt_money(&report.goal)],
            vec!["Spent".into(), fmt_money(&report.spent)],
            vec!["Remaining".into(), fmt_money(&report.remaining)],
            vec!["Progress".into(), format!("{}%", report.progress_percent)],
        ];
        println!("{}", pretty_table(&["Budget", "Value"], rows));
    }
    Ok(())
}

fn set(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let raw = sub.get_one::<String>("amount").unwrap();
    state.begin_goal_edit();
    let goal = state.commit_goal_edit(raw)?;
    println!("Budget updated: {}", fmt_money(&goal.amount()));
    Ok(())
}
