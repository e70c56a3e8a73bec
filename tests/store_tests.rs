// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use reqwest::StatusCode;
use rstest::rstest;
use rust_decimal_macros::dec;
use smartspend::error::SmartSpendError;
use smartspend::models::TransactionDraft;
use smartspend::store::{HttpTransactionStore, TransactionStore, classify};
use smartspend::utils::http_client;

// Nothing listens here; every assertion below must fail before a request goes out.
const DEAD_URL: &str = "http://127.0.0.1:9/";

fn store(token: Option<&str>) -> HttpTransactionStore {
    HttpTransactionStore::new(http_client(1).unwrap(), DEAD_URL, token.map(String::from))
}

fn draft(name: &str) -> TransactionDraft {
    TransactionDraft::new(name, dec!(10), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
}

#[test]
fn missing_token_is_unauthenticated() {
    let s = store(None);
    assert!(matches!(s.fetch_all(), Err(SmartSpendError::Unauthenticated)));
    assert!(matches!(s.create(&draft("Tea")), Err(SmartSpendError::Unauthenticated)));
    assert!(matches!(s.delete("1"), Err(SmartSpendError::Unauthenticated)));
}

#[test]
fn blank_token_counts_as_missing() {
    let s = store(Some("   "));
    assert!(matches!(
        s.update("1", &draft("Tea")),
        Err(SmartSpendError::Unauthenticated)
    ));
}

#[test]
fn invalid_draft_is_rejected_locally() {
    let s = store(Some("token"));
    assert!(matches!(s.create(&draft(" ")), Err(SmartSpendError::Validation(_))));
}

#[test]
fn unauthenticated_message_asks_for_login() {
    assert_eq!(
        SmartSpendError::Unauthenticated.to_string(),
        "User not authenticated. Please login again."
    );
}

#[rstest]
#[case(StatusCode::OK)]
#[case(StatusCode::CREATED)]
#[case(StatusCode::NO_CONTENT)]
fn success_statuses_pass(#[case] status: StatusCode) {
    assert!(classify(status, "fetch").is_ok());
}

#[rstest]
#[case(StatusCode::UNAUTHORIZED)]
#[case(StatusCode::FORBIDDEN)]
fn refused_credentials_are_unauthenticated(#[case] status: StatusCode) {
    assert!(matches!(
        classify(status, "fetch"),
        Err(SmartSpendError::Unauthenticated)
    ));
}

#[rstest]
#[case(StatusCode::INTERNAL_SERVER_ERROR, "fetch", 500)]
#[case(StatusCode::NOT_FOUND, "update", 404)]
#[case(StatusCode::BAD_REQUEST, "add", 400)]
fn other_failures_are_rejected(
    #[case] status: StatusCode,
    #[case] action: &'static str,
    #[case] code: u16,
) {
    match classify(status, action) {
        Err(SmartSpendError::Rejected { action: a, status: s }) => {
            assert_eq!(a, action);
            assert_eq!(s, code);
        }
        other => panic!("expected Rejected, got {:?}", other),
    }
}
