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

pub fn handle(state: &mut AppState, store: &dyn TransactionStore, m: &clap::ArgMatches) -> Result<()> {
    super::refresh_or_notice(state, store);
    let summary = state.home(Local::now().date_naive());
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &summary)? {
        return Ok(());
    }

    if summary.transaction_count == 0 {
        println!("No transactions found yet. Start by adding one!");
    }
    let cards = vec![
        vec!["Monthly Budget".into(), fmt_money(&summary.budget.amount())],
        vec!["Spent This Month".into(), fmt_money(&summary.spent_this_month)],
        vec!["Remaining Budget".into(), fmt_money(&summary.remaining)],
        vec![
            "Usage %".into(),
            format!("{}% ({:?})", summary.usage_percent, summary.usage_level),
        ],
        vec!["Transactions".into(), summary.transaction_count.to_string()],
        vec![
            "Top Category".into(),
            summary
                .top_category
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| "N/A".into()),
        ],
        vec![
            "Average Transaction".into(),
            fmt_money(&summary.average_transaction),
        ],
        vec![
            "Success / Failed".into(),
            format!("{} / {}", summary.status.success, summary.status.failed),
        ],
    ];
    println!("{}", pretty_table(&["Metric", "Value"], cards));

    if !summary.recent.is_empty() {
        let rows = summary
            .recent
            .iter()
            .map(|t| {
                vec![
                    t.name.clone(),
                    t.category.to_string(),
                    fmt_money(&t.amount),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Recent", "Category", "Amount"], rows));
    }
    Ok(())
}
