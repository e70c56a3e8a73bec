// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Snapshots handed to the presentation layer. Each one is a pure function of
//! the transactions, the filters and the goal, rebuilt on demand.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::analytics::{self, CategoryStats, MonthlyStats, StatusCounts};
use crate::budget::{self, BudgetGoal, UsageLevel};
use crate::filters::{FilterCriteria, apply_filters};
use crate::models::{Category, Method, Transaction};

/// How many recent or recurring entries the views list.
pub const LIST_PREVIEW: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_spent: Decimal,
    pub top_category: Option<Category>,
    pub most_used_method: Option<Method>,
    pub transaction_count: usize,
    pub average_transaction: Decimal,
    pub status: StatusCounts,
    pub goal: BudgetGoal,
    pub progress_percent: u8,
    pub remaining: Decimal,
    pub by_category: CategoryStats,
    pub by_month: MonthlyStats,
    pub recurring: Vec<Transaction>,
    pub years: Vec<i32>,
}

impl DashboardSummary {
    pub fn compute(all: &[Transaction], criteria: &FilterCriteria, goal: BudgetGoal) -> Self {
        let filtered = apply_filters(all, criteria);
        let total = analytics::total_spent(&filtered);
        let by_category = analytics::category_totals(&filtered);
        Self {
            total_spent: total,
            top_category: by_category.top().cloned(),
            most_used_method: analytics::most_used_method(&filtered),
            transaction_count: filtered.len(),
            average_transaction: analytics::average_transaction(&filtered),
            status: analytics::status_counts(&filtered),
            goal,
            progress_percent: budget::progress_percent(total, goal.amount()),
            remaining: budget::remaining(total, goal.amount()),
            by_category,
            by_month: analytics::monthly_totals(&filtered),
            recurring: analytics::recurring(&filtered),
            years: analytics::available_years(all),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeSummary {
    pub budget: BudgetGoal,
    pub spent_this_month: Decimal,
    pub remaining: Decimal,
    pub usage_percent: Decimal,
    pub usage_level: UsageLevel,
    pub transaction_count: usize,
    pub top_category: Option<Category>,
    pub average_transaction: Decimal,
    pub status: StatusCounts,
    pub by_category: CategoryStats,
    pub recent: Vec<Transaction>,
}

impl HomeSummary {
    /// The monthly figures cover the calendar month containing `today`; the
    /// rest covers the whole collection.
    pub fn compute(all: &[Transaction], today: NaiveDate, goal: BudgetGoal) -> Self {
        let spent = analytics::period_spend(all, today.year(), today.month());
        let usage = budget::usage_percent(spent, goal.amount());
        let by_category = analytics::category_totals(all);
        Self {
            budget: goal,
            spent_this_month: spent,
            remaining: budget::remaining(spent, goal.amount()),
            usage_percent: usage,
            usage_level: UsageLevel::from_percent(usage),
            transaction_count: all.len(),
            top_category: by_category.top().cloned(),
            average_transaction: analytics::average_transaction(all),
            status: analytics::status_counts(all),
            by_category,
            recent: all.iter().take(LIST_PREVIEW).cloned().collect(),
        }
    }
}
