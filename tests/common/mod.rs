// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use std::cell::RefCell;

use rust_decimal::Decimal;
use smartspend::error::{Result, SmartSpendError};
use smartspend::models::{Category, Method, Status, Transaction, TransactionDraft};
use smartspend::store::TransactionStore;

pub fn txn(id: &str, name: &str, amount: &str, category: Category, date: &str) -> Transaction {
    Transaction {
        id: id.into(),
        name: name.into(),
        amount: amount.parse::<Decimal>().unwrap(),
        date: Some(chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap()),
        method: Method::Upi,
        category,
        status: Status::Success,
        note: None,
    }
}

/// In-memory stand-in for the REST store.
#[derive(Default)]
pub struct FakeStore {
    pub rows: RefCell<Vec<Transaction>>,
    pub fail: RefCell<bool>,
    pub next_id: RefCell<u32>,
}

impl FakeStore {
    pub fn with(rows: Vec<Transaction>) -> Self {
        Self {
            rows: RefCell::new(rows),
            ..Default::default()
        }
    }

    pub fn set_failing(&self, fail: bool) {
        *self.fail.borrow_mut() = fail;
    }

    fn guard(&self) -> Result<()> {
        if *self.fail.borrow() {
            Err(SmartSpendError::Rejected {
                action: "fetch",
                status: 500,
            })
        } else {
            Ok(())
        }
    }

    fn record(id: String, d: &TransactionDraft) -> Transaction {
        Transaction {
            id,
            name: d.name.clone(),
            amount: d.amount,
            date: Some(d.date),
            method: d.method.clone(),
            category: d.category.clone(),
            status: d.status.clone(),
            note: (!d.note.is_empty()).then(|| d.note.clone()),
        }
    }
}

impl TransactionStore for FakeStore {
    fn fetch_all(&self) -> Result<Vec<Transaction>> {
        self.guard()?;
        Ok(self.rows.borrow().clone())
    }

    fn create(&self, draft: &TransactionDraft) -> Result<Transaction> {
        self.guard()?;
        draft.validate()?;
        let mut next = self.next_id.borrow_mut();
        *next += 1;
        let created = Self::record(format!("new-{}", *next), draft);
        self.rows.borrow_mut().insert(0, created.clone());
        Ok(created)
    }

    fn update(&self, id: &str, draft: &TransactionDraft) -> Result<Transaction> {
        self.guard()?;
        let updated = Self::record(id.to_string(), draft);
        let mut rows = self.rows.borrow_mut();
        let slot = rows
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(SmartSpendError::Rejected {
                action: "update",
                status: 404,
            })?;
        *slot = updated.clone();
        Ok(updated)
    }

    fn delete(&self, id: &str) -> Result<()> {
        self.guard()?;
        self.rows.borrow_mut().retain(|t| t.id != id);
        Ok(())
    }
}
