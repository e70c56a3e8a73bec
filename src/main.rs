// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use std::path::PathBuf;

use smartspend::config::AppConfig;
use smartspend::settings::SqliteSettings;
use smartspend::state::AppState;
use smartspend::store::HttpTransactionStore;
use smartspend::{cli, commands, db, logging, utils};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let config_file = match matches.get_one::<String>("config") {
        Some(p) => PathBuf::from(p),
        None => db::config_path()?,
    };
    let config =
        AppConfig::load(Some(config_file.as_path())).context("Failed to load configuration")?;
    logging::init(&config.log.filter);

    let settings = SqliteSettings::new(db::open_or_init()?)?;
    let mut state = AppState::load(
        Box::new(settings),
        commands::view_for(&matches),
        config.budget.blur_policy,
    )?;
    let store = HttpTransactionStore::new(
        utils::http_client(config.api.timeout_secs)?,
        &config.api.base_url,
        config.api.token.clone(),
    );
    tracing::debug!(base_url = %config.api.base_url, "transaction store configured");

    match matches.subcommand() {
        Some(("home", sub)) => commands::home::handle(&mut state, &store, sub)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&mut state, &store, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&mut state, &store, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&mut state, &store, sub)?,
        Some(("theme", sub)) => commands::theme::handle(&mut state, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&mut state, &store, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
