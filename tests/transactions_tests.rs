// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{FakeStore, txn};
use rust_decimal_macros::dec;
use smartspend::budget::{BlurPolicy, View};
use smartspend::models::{Category, Method, Status};
use smartspend::settings::MemorySettings;
use smartspend::state::AppState;
use smartspend::{cli, commands::transactions};

fn loaded_state() -> AppState {
    let mut state = AppState::load(
        Box::new(MemorySettings::default()),
        View::Home,
        BlurPolicy::OnChange,
    )
    .unwrap();
    let store = FakeStore::with(vec![
        txn("1", "Lunch", "100", Category::Food, "2025-01-05"),
        txn("2", "Dinner", "50", Category::Food, "2025-02-05"),
        txn("3", "Train", "30", Category::Travel, "2025-01-10"),
    ]);
    state.refresh(&store).unwrap();
    state
}

fn tx_sub(argv: &[&str]) -> clap::ArgMatches {
    let mut full = vec!["smartspend", "tx"];
    full.extend_from_slice(argv);
    let matches = cli::build_cli().get_matches_from(full);
    match matches.subcommand() {
        Some(("tx", tx_m)) => match tx_m.subcommand() {
            Some((_, sub)) => sub.clone(),
            None => panic!("no tx action"),
        },
        _ => panic!("no tx subcommand"),
    }
}

#[test]
fn list_applies_month_filter() {
    let mut state = loaded_state();
    let sub = tx_sub(&["list", "--month", "Jan"]);
    let rows = transactions::query_rows(&mut state, &sub).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, "1");
    assert_eq!(rows[0].amount, "100.00");
    assert_eq!(rows[1].date, "2025-01-10");
}

#[test]
fn list_rejects_bad_month() {
    let mut state = loaded_state();
    let sub = tx_sub(&["list", "--month", "January"]);
    assert!(transactions::query_rows(&mut state, &sub).is_err());
}

#[test]
fn add_draft_uses_form_defaults() {
    let sub = tx_sub(&["add", "--name", " Coffee ", "--amount", "3.20", "--date", "2025-03-01"]);
    let draft = transactions::draft_from_args(&sub).unwrap();
    assert_eq!(draft.name, "Coffee");
    assert_eq!(draft.amount, dec!(3.20));
    assert_eq!(draft.method, Method::Upi);
    assert_eq!(draft.category, Category::Food);
    assert_eq!(draft.status, Status::Success);
    assert_eq!(draft.note, "");
}

#[test]
fn add_draft_takes_overrides() {
    let sub = tx_sub(&[
        "add", "--name", "Flight", "--amount", "420", "--date", "2025-03-01", "--method",
        "credit card", "--category", "Travel", "--status", "failed", "--note", "work trip",
    ]);
    let draft = transactions::draft_from_args(&sub).unwrap();
    assert_eq!(draft.method, Method::CreditCard);
    assert_eq!(draft.category, Category::Travel);
    assert_eq!(draft.status, Status::Failed);
    assert_eq!(draft.note, "work trip");
}

#[test]
fn add_draft_rejects_negative_amount() {
    let sub = tx_sub(&["add", "--name", "Refund", "--amount=-5", "--date", "2025-03-01"]);
    assert!(transactions::draft_from_args(&sub).is_err());
}

#[test]
fn add_then_refresh_shows_created_row_first() {
    let mut state = loaded_state();
    let store = FakeStore::with(state.transactions().to_vec());
    // handle dispatches on the action, so pass the `tx` matches
    let matches = cli::build_cli().get_matches_from([
        "smartspend", "tx", "add", "--name", "Coffee", "--amount", "3", "--date", "2025-03-01",
    ]);
    let (_, tx_m) = matches.subcommand().unwrap();
    transactions::handle(&mut state, &store, tx_m).unwrap();
    assert_eq!(state.transactions().len(), 4);
    assert_eq!(state.transactions()[0].name, "Coffee");
}

#[test]
fn edit_keeps_untouched_fields() {
    let mut state = loaded_state();
    let store = FakeStore::with(state.transactions().to_vec());
    let matches = cli::build_cli().get_matches_from([
        "smartspend", "tx", "edit", "--id", "3", "--amount", "35",
    ]);
    let (_, tx_m) = matches.subcommand().unwrap();
    transactions::handle(&mut state, &store, tx_m).unwrap();
    let edited = state.find("3").unwrap();
    assert_eq!(edited.amount, dec!(35));
    assert_eq!(edited.name, "Train");
    assert_eq!(edited.category, Category::Travel);
}

#[test]
fn rm_drops_the_row() {
    let mut state = loaded_state();
    let store = FakeStore::with(state.transactions().to_vec());
    let matches = cli::build_cli().get_matches_from(["smartspend", "tx", "rm", "--id", "2"]);
    let (_, tx_m) = matches.subcommand().unwrap();
    transactions::handle(&mut state, &store, tx_m).unwrap();
    assert!(state.find("2").is_none());
    assert_eq!(state.transactions().len(), 2);
}
