// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, SmartSpendError};

/// User-set spending ceiling. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct BudgetGoal(Decimal);

impl BudgetGoal {
    pub fn new(amount: Decimal) -> Result<Self> {
        if amount <= Decimal::ZERO {
            return Err(SmartSpendError::validation(format!(
                "Budget goal must be a positive number, got {}",
                amount
            )));
        }
        Ok(Self(amount.normalize()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let amount = raw.trim().parse::<Decimal>().map_err(|_| {
            SmartSpendError::validation(format!(
                "Budget goal must be a positive number, got '{}'",
                raw.trim()
            ))
        })?;
        Self::new(amount)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for BudgetGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Screen a goal is shown on; each starts from its own default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Dashboard,
}

impl View {
    pub fn default_goal(self) -> BudgetGoal {
        match self {
            View::Home => BudgetGoal(Decimal::from(2000)),
            View::Dashboard => BudgetGoal(Decimal::from(1000)),
        }
    }
}

/// Whether leaving the goal editor without an explicit save persists the
/// current value even when it did not change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlurPolicy {
    #[default]
    OnChange,
    Always,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageLevel {
    Healthy,
    Elevated,
    Critical,
}

impl UsageLevel {
    pub fn from_percent(percent: Decimal) -> Self {
        if percent > Decimal::from(90) {
            UsageLevel::Critical
        } else if percent > Decimal::from(70) {
            UsageLevel::Elevated
        } else {
            UsageLevel::Healthy
        }
    }
}

fn ratio_percent(spent: Decimal, goal: Decimal) -> Option<Decimal> {
    if goal <= Decimal::ZERO {
        return None;
    }
    // A ratio too large for Decimal is far past the goal.
    let pct = spent
        .checked_div(goal)
        .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(if spent > Decimal::ZERO {
            Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        });
    Some(pct.min(Decimal::ONE_HUNDRED).max(Decimal::ZERO))
}

/// Whole-number share of the goal already spent, clamped to 0..=100.
/// A goal of zero or less reports 0.
pub fn progress_percent(spent: Decimal, goal: Decimal) -> u8 {
    ratio_percent(spent, goal)
        .map(|p| p.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|p| p.to_u8())
        .unwrap_or(0)
}

/// Same share with one decimal place, as the home view shows it.
pub fn usage_percent(spent: Decimal, goal: Decimal) -> Decimal {
    ratio_percent(spent, goal)
        .map(|p| p.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
        .unwrap_or(Decimal::ZERO)
}

/// What is left of the goal. Negative once overspent.
pub fn remaining(spent: Decimal, goal: Decimal) -> Decimal {
    goal.saturating_sub(spent)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState {
    Viewing,
    Editing { draft: String },
}

/// Holds the goal and drives the edit interaction around it.
///
/// The tracker never touches storage: operations that change the goal hand
/// back the value the caller should persist.
#[derive(Debug, Clone)]
pub struct BudgetTracker {
    goal: BudgetGoal,
    state: EditState,
    policy: BlurPolicy,
}

impl BudgetTracker {
    pub fn new(goal: BudgetGoal, policy: BlurPolicy) -> Self {
        Self {
            goal,
            state: EditState::Viewing,
            policy,
        }
    }

    pub fn goal(&self) -> BudgetGoal {
        self.goal
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing { .. })
    }

    pub fn set_goal(&mut self, goal: BudgetGoal) {
        self.goal = goal;
    }

    pub fn progress_percent(&self, spent: Decimal) -> u8 {
        progress_percent(spent, self.goal.amount())
    }

    pub fn remaining(&self, spent: Decimal) -> Decimal {
        remaining(spent, self.goal.amount())
    }

    pub fn begin_edit(&mut self) {
        if let EditState::Viewing = self.state {
            self.state = EditState::Editing {
                draft: self.goal.to_string(),
            };
        }
    }

    pub fn update_draft(&mut self, value: &str) {
        if let EditState::Editing { draft } = &mut self.state {
            *draft = value.to_string();
        }
    }

    /// Explicit save. An invalid value keeps the editor open and the goal
    /// untouched.
    pub fn commit_edit(&mut self, value: &str) -> Result<BudgetGoal> {
        if !self.is_editing() {
            return Err(SmartSpendError::validation("Budget goal is not being edited"));
        }
        let goal = match BudgetGoal::parse(value) {
            Ok(g) => g,
            Err(e) => {
                self.update_draft(value);
                return Err(e);
            }
        };
        self.goal = goal;
        self.state = EditState::Viewing;
        Ok(goal)
    }

    /// Leaving the editor without saving. Returns the goal to persist, if any.
    /// An unparseable draft is dropped and reported; the goal stays as it was.
    pub fn blur(&mut self) -> Result<Option<BudgetGoal>> {
        let draft = match std::mem::replace(&mut self.state, EditState::Viewing) {
            EditState::Viewing => return Ok(None),
            EditState::Editing { draft } => draft,
        };
        let goal = BudgetGoal::parse(&draft)?;
        if goal != self.goal {
            self.goal = goal;
            return Ok(Some(goal));
        }
        match self.policy {
            BlurPolicy::Always => Ok(Some(goal)),
            BlurPolicy::OnChange => Ok(None),
        }
    }
}
