// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregations over an already filtered transaction slice.
//!
//! Nothing here mutates its input or performs I/O; every function is total
//! for any slice, including an empty one.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::models::{Category, Method, Status, Transaction};

/// Summed amounts keyed in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Totals<K> {
    entries: Vec<(K, Decimal)>,
}

pub type CategoryStats = Totals<Category>;
pub type MonthlyStats = Totals<&'static str>;

impl<K> Default for Totals<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: PartialEq> Totals<K> {
    pub fn add(&mut self, key: K, amount: Decimal) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, total)) => *total = total.saturating_add(amount),
            None => self.entries.push((key, amount)),
        }
    }

    pub fn get(&self, key: &K) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &Decimal)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = Decimal> + '_ {
        self.entries.iter().map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sum(&self) -> Decimal {
        saturating_sum(self.values())
    }

    /// Key with the largest total. Only a strictly larger total displaces the
    /// current leader, so ties go to the first-seen key.
    pub fn top(&self) -> Option<&K> {
        let mut best: Option<&(K, Decimal)> = None;
        for entry in &self.entries {
            if best.is_none_or(|b| entry.1 > b.1) {
                best = Some(entry);
            }
        }
        best.map(|(k, _)| k)
    }
}

impl<K: Serialize> Serialize for Totals<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct StatusCounts {
    pub success: usize,
    pub failed: usize,
}

pub fn category_totals(txns: &[Transaction]) -> CategoryStats {
    let mut totals = CategoryStats::default();
    for t in txns {
        totals.add(t.category.clone(), t.amount);
    }
    totals
}

/// Buckets by short month label only, so the same month of different years
/// lands in one bucket. Undated records are skipped.
pub fn monthly_totals(txns: &[Transaction]) -> MonthlyStats {
    let mut totals = MonthlyStats::default();
    for t in txns {
        if let Some(month) = t.month_label() {
            totals.add(month, t.amount);
        }
    }
    totals
}

/// Sums that pin at `Decimal::MAX` instead of overflowing.
fn saturating_sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    let mut total = Decimal::ZERO;
    for amount in amounts {
        match total.checked_add(amount) {
            Some(next) => total = next,
            None => {
                tracing::warn!(%amount, "spend total overflowed, capping it");
                return Decimal::MAX;
            }
        }
    }
    total
}

pub fn total_spent(txns: &[Transaction]) -> Decimal {
    saturating_sum(txns.iter().map(|t| t.amount))
}

pub fn average_transaction(txns: &[Transaction]) -> Decimal {
    if txns.is_empty() {
        return Decimal::ZERO;
    }
    total_spent(txns) / Decimal::from(txns.len())
}

pub fn top_category(txns: &[Transaction]) -> Option<Category> {
    category_totals(txns).top().cloned()
}

/// Method used by the most transactions; ties go to the first-seen method.
pub fn most_used_method(txns: &[Transaction]) -> Option<Method> {
    let mut counts: Totals<&Method> = Totals::default();
    for t in txns {
        counts.add(&t.method, Decimal::ONE);
    }
    counts.top().map(|m| (*m).clone())
}

pub fn status_counts(txns: &[Transaction]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for t in txns {
        match t.status {
            Status::Success => counts.success += 1,
            Status::Failed => counts.failed += 1,
            Status::Other(_) => {}
        }
    }
    counts
}

/// Every transaction that shares its name with another transaction carrying
/// a different id. Input order is kept and groups are not collapsed.
pub fn recurring(txns: &[Transaction]) -> Vec<Transaction> {
    txns.iter()
        .filter(|t| txns.iter().any(|o| o.name == t.name && o.id != t.id))
        .cloned()
        .collect()
}

/// Distinct calendar years in first-seen order.
pub fn available_years(txns: &[Transaction]) -> Vec<i32> {
    let mut years = Vec::new();
    for y in txns.iter().filter_map(Transaction::year) {
        if !years.contains(&y) {
            years.push(y);
        }
    }
    years
}

/// Spend inside one calendar month of one year.
pub fn period_spend(txns: &[Transaction], year: i32, month: u32) -> Decimal {
    let amounts = txns
        .iter()
        .filter(|t| t.date.is_some_and(|d| d.year() == year && d.month() == month))
        .map(|t| t.amount);
    saturating_sum(amounts)
}
