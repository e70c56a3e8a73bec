// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;

use crate::budget::{BlurPolicy, BudgetGoal, BudgetTracker, View};
use crate::error::Result;
use crate::filters::{FilterCriteria, apply_filters};
use crate::models::Transaction;
use crate::settings::{self, SettingsStore, Theme};
use crate::store::TransactionStore;
use crate::summary::{DashboardSummary, HomeSummary};

/// Everything a session works with: the last fetched transactions, the active
/// filters, the budget goal and the settings it is persisted to.
///
/// Built once at startup and passed to whatever needs it.
pub struct AppState {
    settings: Box<dyn SettingsStore>,
    transactions: Vec<Transaction>,
    filters: FilterCriteria,
    budget: BudgetTracker,
    theme: Theme,
}

impl AppState {
    /// Reads the stored goal and theme; a missing goal starts from the
    /// view's default.
    pub fn load(settings: Box<dyn SettingsStore>, view: View, policy: BlurPolicy) -> Result<Self> {
        let goal = settings::load_budget_goal(settings.as_ref())?
            .unwrap_or_else(|| view.default_goal());
        let theme = settings::load_theme(settings.as_ref())?;
        tracing::debug!(%goal, %theme, "loaded settings");
        Ok(Self {
            settings,
            transactions: Vec::new(),
            filters: FilterCriteria::default(),
            budget: BudgetTracker::new(goal, policy),
            theme,
        })
    }

    /// Replaces the collection with a fresh fetch. On failure the previous
    /// collection stays untouched and the error is returned once.
    pub fn refresh(&mut self, store: &dyn TransactionStore) -> Result<usize> {
        match store.fetch_all() {
            Ok(txns) => {
                self.transactions = txns;
                Ok(self.transactions.len())
            }
            Err(e) => {
                tracing::warn!(error = %e, kept = self.transactions.len(), "refresh failed");
                Err(e)
            }
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn find(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn set_filters(&mut self, criteria: FilterCriteria) {
        self.filters = criteria;
    }

    pub fn filtered(&self) -> Vec<Transaction> {
        apply_filters(&self.transactions, &self.filters)
    }

    pub fn dashboard(&self) -> DashboardSummary {
        DashboardSummary::compute(&self.transactions, &self.filters, self.budget.goal())
    }

    pub fn home(&self, today: NaiveDate) -> HomeSummary {
        HomeSummary::compute(&self.transactions, today, self.budget.goal())
    }

    pub fn budget(&self) -> &BudgetTracker {
        &self.budget
    }

    pub fn begin_goal_edit(&mut self) {
        self.budget.begin_edit();
    }

    pub fn update_goal_draft(&mut self, value: &str) {
        self.budget.update_draft(value);
    }

    /// Explicit save from the editor.
    pub fn commit_goal_edit(&mut self, value: &str) -> Result<BudgetGoal> {
        let goal = self.budget.commit_edit(value)?;
        settings::save_budget_goal(self.settings.as_mut(), goal)?;
        tracing::info!(%goal, "budget goal saved");
        Ok(goal)
    }

    /// Editor lost focus; persists according to the blur policy.
    pub fn blur_goal_edit(&mut self) -> Result<Option<BudgetGoal>> {
        let to_save = self.budget.blur()?;
        if let Some(goal) = to_save {
            settings::save_budget_goal(self.settings.as_mut(), goal)?;
            tracing::info!(%goal, "budget goal saved on blur");
        }
        Ok(to_save)
    }

    /// Persists first so a failed write leaves the held goal unchanged.
    pub fn set_goal(&mut self, goal: BudgetGoal) -> Result<()> {
        settings::save_budget_goal(self.settings.as_mut(), goal)?;
        self.budget.set_goal(goal);
        Ok(())
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        settings::save_theme(self.settings.as_mut(), theme)?;
        self.theme = theme;
        Ok(())
    }

    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let next = self.theme.toggled();
        self.set_theme(next)?;
        Ok(next)
    }
}
