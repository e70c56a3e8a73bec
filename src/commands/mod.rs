// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod home;
pub mod dashboard;
pub mod transactions;
pub mod budgets;
pub mod theme;
pub mod exporter;

use anyhow::Result;

use crate::budget::View;
use crate::filters::FilterCriteria;
use crate::state::AppState;
use crate::store::TransactionStore;

/// Fetches fresh transactions. A failure is shown as a notice and the
/// command carries on with whatever was loaded before.
pub fn refresh_or_notice(state: &mut AppState, store: &dyn TransactionStore) {
    match state.refresh(store) {
        Ok(count) => tracing::debug!(count, "transactions refreshed"),
        Err(e) => eprintln!("⚠ {}", e),
    }
}

pub fn filters_from(sub: &clap::ArgMatches) -> Result<FilterCriteria> {
    let arg = |name: &str| sub.get_one::<String>(name).map(String::as_str).unwrap_or("");
    let criteria = FilterCriteria::default()
        .with_month(arg("month"))?
        .with_year(arg("year"))?
        .with_search(arg("search"))
        .with_status(arg("status"))?
        .with_category(arg("category"))?
        .with_method(arg("method"))?;
    Ok(criteria)
}

/// Which screen's default goal applies when nothing is stored yet.
pub fn view_for(matches: &clap::ArgMatches) -> View {
    match matches.subcommand() {
        Some(("dashboard", _)) => View::Dashboard,
        Some(("budget", sub)) => match sub.subcommand() {
            Some(("show", show))
                if show.get_one::<String>("view").map(String::as_str) == Some("dashboard") =>
            {
                View::Dashboard
            }
            _ => View::Home,
        },
        _ => View::Home,
    }
}
