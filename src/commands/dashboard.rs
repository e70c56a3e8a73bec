// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::state::AppState;
use crate::store::TransactionStore;
use crate::summary::LIST_PREVIEW;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(state: &mut AppState, store: &dyn TransactionStore, m: &clap::ArgMatches) -> Result<()> {
    let criteria = super::filters_from(m)?;
    super::refresh_or_notice(state, store);
    state.set_filters(criteria);
    let summary = state.dashboard();
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &summary)? {
        return Ok(());
    }

    let or_na = |v: Option<String>| v.unwrap_or_else(|| "N/A".into());
    let cards = vec![
        vec!["Total Spent".into(), fmt_money(&summary.total_spent)],
        vec![
            "Top Category".into(),
            or_na(summary.top_category.as_ref().map(ToString::to_string)),
        ],
        vec![
            "Most Used Method".into(),
            or_na(summary.most_used_method.as_ref().map(ToString::to_string)),
        ],
        vec!["Transactions".into(), summary.transaction_count.to_string()],
        vec!["Savings Goal".into(), fmt_money(&summary.goal.amount())],
        vec![
            "Goal Completion".into(),
            format!("{}%", summary.progress_percent),
        ],
    ];
    println!("{}", pretty_table(&["Metric", "Value"], cards));

    let by_category = summary
        .by_category
        .iter()
        .map(|(c, v)| vec![c.to_string(), fmt_money(v)])
        .collect();
    println!("{}", pretty_table(&["Category", "Spent"], by_category));

    let by_month = summary
        .by_month
        .iter()
        .map(|(m, v)| vec![m.to_string(), fmt_money(v)])
        .collect();
    println!("{}", pretty_table(&["Month", "Spent"], by_month));

    if !summary.recurring.is_empty() {
        println!("Recurring Transactions");
        for t in summary.recurring.iter().take(LIST_PREVIEW) {
            println!("  - {} - {}", t.name, fmt_money(&t.amount));
        }
    }
    Ok(())
}
