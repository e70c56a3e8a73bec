// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::txn;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use smartspend::analytics::{
    available_years, average_transaction, category_totals, monthly_totals, most_used_method,
    period_spend, recurring, status_counts, top_category, total_spent,
};
use smartspend::models::{Category, Method, Status};

fn scenario() -> Vec<smartspend::models::Transaction> {
    vec![
        txn("1", "Lunch", "100", Category::Food, "2024-01-05"),
        txn("2", "Dinner", "50", Category::Food, "2024-02-05"),
        txn("3", "Train", "30", Category::Travel, "2024-01-10"),
    ]
}

#[test]
fn scenario_totals() {
    let txns = scenario();

    let by_cat = category_totals(&txns);
    let keys: Vec<_> = by_cat.keys().cloned().collect();
    assert_eq!(keys, vec![Category::Food, Category::Travel]);
    assert_eq!(by_cat.get(&Category::Food), Some(dec!(150)));
    assert_eq!(by_cat.get(&Category::Travel), Some(dec!(30)));

    let by_month = monthly_totals(&txns);
    let months: Vec<_> = by_month.keys().copied().collect();
    assert_eq!(months, vec!["Jan", "Feb"]);
    assert_eq!(by_month.get(&"Jan"), Some(dec!(130)));
    assert_eq!(by_month.get(&"Feb"), Some(dec!(50)));

    assert_eq!(total_spent(&txns), dec!(180));
    assert_eq!(top_category(&txns), Some(Category::Food));
    assert_eq!(average_transaction(&txns), dec!(60));
}

#[test]
fn empty_input_is_safe() {
    assert_eq!(total_spent(&[]), Decimal::ZERO);
    assert_eq!(average_transaction(&[]), Decimal::ZERO);
    assert_eq!(top_category(&[]), None);
    assert_eq!(most_used_method(&[]), None);
    assert!(category_totals(&[]).is_empty());
    assert!(monthly_totals(&[]).is_empty());
    assert!(recurring(&[]).is_empty());
}

#[test]
fn top_category_tie_goes_to_first_seen() {
    let txns = vec![
        txn("1", "Bus", "40", Category::Travel, "2024-03-01"),
        txn("2", "Pizza", "40", Category::Food, "2024-03-02"),
    ];
    assert_eq!(top_category(&txns), Some(Category::Travel));
}

#[test]
fn top_category_picks_largest_not_first() {
    let txns = vec![
        txn("1", "Bus", "10", Category::Travel, "2024-03-01"),
        txn("2", "Rent", "900", Category::Rent, "2024-03-02"),
    ];
    assert_eq!(top_category(&txns), Some(Category::Rent));
}

#[test]
fn recurring_keeps_every_name_match() {
    let txns = vec![
        txn("1", "A", "5", Category::Food, "2024-01-01"),
        txn("2", "A", "6", Category::Food, "2024-01-02"),
        txn("3", "B", "7", Category::Food, "2024-01-03"),
    ];
    let ids: Vec<_> = recurring(&txns).into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec!["1", "2"]);

    let three_way = vec![
        txn("1", "Netflix", "9", Category::Bills, "2024-01-01"),
        txn("2", "Netflix", "9", Category::Bills, "2024-02-01"),
        txn("3", "Netflix", "9", Category::Bills, "2024-03-01"),
    ];
    assert_eq!(recurring(&three_way).len(), 3);
}

#[test]
fn recurring_ignores_same_id_duplicates() {
    let txns = vec![
        txn("1", "A", "5", Category::Food, "2024-01-01"),
        txn("1", "A", "5", Category::Food, "2024-01-01"),
        txn("2", "B", "7", Category::Food, "2024-01-03"),
    ];
    assert!(recurring(&txns).is_empty());
}

#[test]
fn status_counts_are_exact() {
    let mut txns = scenario();
    txns[1].status = Status::Failed;
    txns[2].status = Status::Other("success".into());
    let counts = status_counts(&txns);
    assert_eq!(counts.success, 1);
    assert_eq!(counts.failed, 1);
}

#[test]
fn monthly_totals_merge_years_and_skip_undated() {
    let mut txns = vec![
        txn("1", "A", "10", Category::Food, "2023-01-05"),
        txn("2", "B", "20", Category::Food, "2024-01-05"),
        txn("3", "C", "5", Category::Food, "2024-02-05"),
    ];
    txns[2].date = None;
    let by_month = monthly_totals(&txns);
    assert_eq!(by_month.len(), 1);
    assert_eq!(by_month.get(&"Jan"), Some(dec!(30)));
}

#[test]
fn most_used_method_counts_transactions() {
    let mut txns = scenario();
    txns[0].method = Method::Cash;
    txns[1].method = Method::CreditCard;
    txns[2].method = Method::CreditCard;
    assert_eq!(most_used_method(&txns), Some(Method::CreditCard));
}

#[test]
fn years_and_period_spend() {
    let txns = vec![
        txn("1", "A", "10", Category::Food, "2024-01-05"),
        txn("2", "B", "20", Category::Food, "2023-01-05"),
        txn("3", "C", "5", Category::Food, "2024-01-20"),
        txn("4", "D", "7", Category::Food, "2024-02-01"),
    ];
    assert_eq!(available_years(&txns), vec![2024, 2023]);
    assert_eq!(period_spend(&txns, 2024, 1), dec!(15));
    assert_eq!(period_spend(&txns, 2022, 1), Decimal::ZERO);
}

#[test]
fn totals_serialize_in_first_seen_order() {
    let json = serde_json::to_string(&category_totals(&scenario())).unwrap();
    assert_eq!(json, r#"{"Food":"150","Travel":"30"}"#);
}

#[test]
fn oversized_amounts_cap_instead_of_overflowing() {
    let huge = "50000000000000000000000000000";
    let txns = vec![
        txn("1", "A", huge, Category::Food, "2024-01-05"),
        txn("2", "B", huge, Category::Food, "2024-01-06"),
    ];
    assert_eq!(total_spent(&txns), Decimal::MAX);
    assert_eq!(category_totals(&txns).get(&Category::Food), Some(Decimal::MAX));
    assert_eq!(monthly_totals(&txns).sum(), Decimal::MAX);
    assert_eq!(period_spend(&txns, 2024, 1), Decimal::MAX);
    assert!(average_transaction(&txns) > Decimal::ZERO);
}

fn arb_category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Food),
        Just(Category::Rent),
        Just(Category::Travel),
        Just(Category::Shopping),
        Just(Category::Bills),
        Just(Category::Others),
        "[a-z]{1,6}".prop_map(Category::Custom),
    ]
}

proptest! {
    #[test]
    fn category_totals_conserve_total(
        items in prop::collection::vec((0u32..100_000, arb_category(), 1u32..=28), 1..40)
    ) {
        let txns: Vec<_> = items
            .into_iter()
            .enumerate()
            .map(|(i, (cents, cat, day))| {
                let mut t = txn(&i.to_string(), "x", "0", cat, &format!("2024-05-{:02}", day));
                t.amount = Decimal::new(cents as i64, 2);
                t
            })
            .collect();
        prop_assert_eq!(category_totals(&txns).sum(), total_spent(&txns));
        prop_assert_eq!(monthly_totals(&txns).sum(), total_spent(&txns));
    }
}
