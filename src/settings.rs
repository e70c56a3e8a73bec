// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Durable key-value settings: the budget goal and the theme preference.

use rusqlite::{Connection, OptionalExtension, params};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::budget::BudgetGoal;
use crate::error::{Result, SmartSpendError};

pub const BUDGET_GOAL_KEY: &str = "budget_goal";
pub const THEME_KEY: &str = "theme";

pub trait SettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Settings kept in the `settings` table of the local SQLite database.
pub struct SqliteSettings {
    conn: Connection,
}

impl SqliteSettings {
    pub fn new(conn: Connection) -> Result<Self> {
        crate::db::init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn in_memory() -> Result<Self> {
        Self::new(Connection::open_in_memory()?)
    }
}

impl SettingsStore for SqliteSettings {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let v: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key=?1",
                params![key],
                |r| r.get(0),
            )
            .optional()?;
        Ok(v)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO settings(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemorySettings {
    values: HashMap<String, String>,
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = SmartSpendError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(SmartSpendError::validation(format!(
                "Unknown theme '{}' (use light or dark)",
                other
            ))),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored value that no longer parses is ignored so startup falls back to
/// the view default.
pub fn load_budget_goal(store: &dyn SettingsStore) -> Result<Option<BudgetGoal>> {
    let Some(raw) = store.get(BUDGET_GOAL_KEY)? else {
        return Ok(None);
    };
    match BudgetGoal::parse(&raw) {
        Ok(goal) => Ok(Some(goal)),
        Err(e) => {
            tracing::warn!(value = %raw, error = %e, "ignoring stored budget goal");
            Ok(None)
        }
    }
}

pub fn save_budget_goal(store: &mut dyn SettingsStore, goal: BudgetGoal) -> Result<()> {
    store.set(BUDGET_GOAL_KEY, &goal.to_string())
}

pub fn load_theme(store: &dyn SettingsStore) -> Result<Theme> {
    let raw = store.get(THEME_KEY)?;
    Ok(raw
        .and_then(|s| s.parse::<Theme>().ok())
        .unwrap_or_default())
}

pub fn save_theme(store: &mut dyn SettingsStore, theme: Theme) -> Result<()> {
    store.set(THEME_KEY, theme.as_str())
}
