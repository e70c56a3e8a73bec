// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SmartSpendError;
use crate::utils::short_month;

/// Payment method. Wire values are matched exactly; anything else is kept
/// verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Method {
    Upi,
    Cash,
    CreditCard,
    DebitCard,
    Other(String),
}

impl Method {
    pub const KNOWN: [Method; 4] = [
        Method::Upi,
        Method::Cash,
        Method::CreditCard,
        Method::DebitCard,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Method::Upi => "UPI",
            Method::Cash => "Cash",
            Method::CreditCard => "Credit Card",
            Method::DebitCard => "Debit Card",
            Method::Other(s) => s,
        }
    }

    pub fn matches(&self, other: &Method) -> bool {
        self.as_str().eq_ignore_ascii_case(other.as_str())
    }
}

/// A record with no method on the wire keeps an empty label.
impl Default for Method {
    fn default() -> Self {
        Method::Other(String::new())
    }
}

impl From<String> for Method {
    fn from(s: String) -> Self {
        Method::KNOWN
            .into_iter()
            .find(|m| m.as_str() == s)
            .unwrap_or(Method::Other(s))
    }
}

impl From<Method> for String {
    fn from(m: Method) -> Self {
        m.as_str().to_string()
    }
}

impl FromStr for Method {
    type Err = SmartSpendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Method::KNOWN
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                SmartSpendError::validation(format!(
                    "Unknown payment method '{}' (use UPI, Cash, Credit Card, Debit Card)",
                    s
                ))
            })
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Spending category. The list is open ended: unknown labels become `Custom`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Food,
    Rent,
    Travel,
    Shopping,
    Bills,
    #[default]
    Others,
    Custom(String),
}

impl Category {
    pub const KNOWN: [Category; 6] = [
        Category::Food,
        Category::Rent,
        Category::Travel,
        Category::Shopping,
        Category::Bills,
        Category::Others,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Category::Food => "Food",
            Category::Rent => "Rent",
            Category::Travel => "Travel",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Others => "Others",
            Category::Custom(s) => s,
        }
    }

    pub fn matches(&self, other: &Category) -> bool {
        self.as_str().eq_ignore_ascii_case(other.as_str())
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Category::KNOWN
            .into_iter()
            .find(|c| c.as_str() == s)
            .unwrap_or(Category::Custom(s))
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.as_str().to_string()
    }
}

impl FromStr for Category {
    type Err = SmartSpendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SmartSpendError::validation("Category cannot be empty"));
        }
        Ok(Category::KNOWN
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .unwrap_or_else(|| Category::Custom(s.to_string())))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a transaction as recorded by the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Success,
    Failed,
    Other(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::Success => "Success",
            Status::Failed => "Failed",
            Status::Other(s) => s,
        }
    }

    pub fn matches(&self, other: &Status) -> bool {
        self.as_str().eq_ignore_ascii_case(other.as_str())
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Other(String::new())
    }
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Success" => Status::Success,
            "Failed" => Status::Failed,
            _ => Status::Other(s),
        }
    }
}

impl From<Status> for String {
    fn from(s: Status) -> Self {
        s.as_str().to_string()
    }
}

impl FromStr for Status {
    type Err = SmartSpendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("success") {
            Ok(Status::Success)
        } else if s.eq_ignore_ascii_case("failed") {
            Ok(Status::Failed)
        } else {
            Err(SmartSpendError::validation(format!(
                "Unknown status '{}' (use Success or Failed)",
                s
            )))
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A spend record as returned by the transaction store. Never mutated after
/// decode; edits go back through the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub amount: Decimal,
    #[serde(default, deserialize_with = "lenient::date")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub method: Method,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub note: Option<String>,
}

impl Transaction {
    pub fn month_label(&self) -> Option<&'static str> {
        self.date.map(short_month)
    }

    pub fn year(&self) -> Option<i32> {
        self.date.map(|d| d.year())
    }
}

/// Decodes a fetched list one record at a time. Records that still cannot be
/// read (no id, wrong shape) are dropped with a warning instead of failing the
/// whole list.
pub fn decode_transactions(values: Vec<serde_json::Value>) -> Vec<Transaction> {
    let total = values.len();
    let txns: Vec<Transaction> = values
        .into_iter()
        .enumerate()
        .filter_map(|(i, v)| match serde_json::from_value(v) {
            Ok(t) => Some(t),
            Err(e) => {
                tracing::warn!(index = i, error = %e, "skipping unreadable transaction");
                None
            }
        })
        .collect();
    if txns.len() < total {
        tracing::warn!(kept = txns.len(), total, "some transactions were skipped");
    }
    txns
}

/// Payload for creating or replacing a transaction in the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionDraft {
    pub name: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub method: Method,
    pub category: Category,
    pub status: Status,
    pub note: String,
}

impl TransactionDraft {
    /// Draft with the defaults the add form starts from.
    pub fn new(name: impl Into<String>, amount: Decimal, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            amount,
            date,
            method: Method::Upi,
            category: Category::Food,
            status: Status::Success,
            note: String::new(),
        }
    }

    /// Starts an edit from an existing record. Records without a usable date
    /// cannot be turned back into a draft.
    pub fn from_existing(t: &Transaction) -> Option<Self> {
        Some(Self {
            name: t.name.clone(),
            amount: t.amount,
            date: t.date?,
            method: t.method.clone(),
            category: t.category.clone(),
            status: t.status.clone(),
            note: t.note.clone().unwrap_or_default(),
        })
    }

    pub fn validate(&self) -> Result<(), SmartSpendError> {
        if self.name.trim().is_empty() {
            return Err(SmartSpendError::validation("Name cannot be empty"));
        }
        if self.amount.is_sign_negative() {
            return Err(SmartSpendError::validation(format!(
                "Amount cannot be negative: {}",
                self.amount
            )));
        }
        Ok(())
    }
}

/// Decoders that never fail on a bad field. A malformed amount becomes zero
/// and a malformed date becomes `None`, so one bad record cannot sink the
/// whole list.
mod lenient {
    use super::*;
    use serde::Deserializer;
    use serde_json::Value;

    pub fn amount<'de, D>(d: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(d)?;
        let parsed = match &raw {
            Value::Number(n) => {
                let s = n.to_string();
                Decimal::from_str(&s)
                    .or_else(|_| Decimal::from_scientific(&s))
                    .ok()
            }
            Value::String(s) => Decimal::from_str(s.trim()).ok(),
            _ => None,
        };
        match parsed {
            Some(v) if !v.is_sign_negative() => Ok(v),
            _ => {
                tracing::warn!(amount = %raw, "unusable transaction amount, counting it as 0");
                Ok(Decimal::ZERO)
            }
        }
    }

    pub fn date<'de, D>(d: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(d)?;
        let parsed = match &raw {
            Some(Value::String(s)) => crate::utils::parse_wire_date(s),
            _ => None,
        };
        if parsed.is_none() {
            tracing::warn!(date = ?raw, "unusable transaction date, ignoring it");
        }
        Ok(parsed)
    }
}
