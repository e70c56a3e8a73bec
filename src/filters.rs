// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Result, SmartSpendError};
use crate::models::{Category, Method, Status, Transaction};
use crate::utils::{is_year_label, parse_month_label};

/// Active view filters. Every `None` is "All"; the default filters nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub month: Option<String>,
    pub year: Option<String>,
    pub search: Option<String>,
    pub status: Option<Status>,
    pub category: Option<Category>,
    pub method: Option<Method>,
}

impl FilterCriteria {
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    pub fn with_month(mut self, raw: &str) -> Result<Self> {
        self.month = match raw.trim() {
            "" => None,
            s if s.eq_ignore_ascii_case("all") => None,
            s => Some(
                parse_month_label(s)
                    .ok_or_else(|| {
                        SmartSpendError::validation(format!(
                            "Invalid month '{}', expected Jan..Dec",
                            s
                        ))
                    })?
                    .to_string(),
            ),
        };
        Ok(self)
    }

    pub fn with_year(mut self, raw: &str) -> Result<Self> {
        self.year = match raw.trim() {
            "" => None,
            s if s.eq_ignore_ascii_case("all") => None,
            s if is_year_label(s) => Some(s.to_string()),
            s => {
                return Err(SmartSpendError::validation(format!(
                    "Invalid year '{}', expected four digits",
                    s
                )));
            }
        };
        Ok(self)
    }

    pub fn with_search(mut self, raw: &str) -> Self {
        let term = raw.trim();
        self.search = (!term.is_empty()).then(|| term.to_string());
        self
    }

    pub fn with_status(mut self, raw: &str) -> Result<Self> {
        self.status = parse_selection(raw)?;
        Ok(self)
    }

    pub fn with_category(mut self, raw: &str) -> Result<Self> {
        self.category = parse_selection(raw)?;
        Ok(self)
    }

    pub fn with_method(mut self, raw: &str) -> Result<Self> {
        self.method = parse_selection(raw)?;
        Ok(self)
    }

    pub fn matches(&self, t: &Transaction) -> bool {
        if let Some(month) = &self.month {
            if t.month_label() != Some(month.as_str()) {
                return false;
            }
        }
        if let Some(year) = &self.year {
            if t.year().map(|y| y.to_string()).as_deref() != Some(year.as_str()) {
                return false;
            }
        }
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let in_name = t.name.to_lowercase().contains(&term);
            let in_note = t
                .note
                .as_ref()
                .is_some_and(|n| n.to_lowercase().contains(&term));
            if !in_name && !in_note {
                return false;
            }
        }
        if let Some(status) = &self.status {
            if !t.status.matches(status) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if !t.category.matches(category) {
                return false;
            }
        }
        if let Some(method) = &self.method {
            if !t.method.matches(method) {
                return false;
            }
        }
        true
    }
}

/// `All` or an empty value clears the dimension.
fn parse_selection<T>(raw: &str) -> Result<Option<T>>
where
    T: FromStr<Err = SmartSpendError>,
{
    let s = raw.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    s.parse().map(Some)
}

/// Stable filter: the result keeps the input order.
pub fn apply_filters(transactions: &[Transaction], criteria: &FilterCriteria) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| criteria.matches(t))
        .cloned()
        .collect()
}
