// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SmartSpendError>;

/// Failures surfaced by the library layer.
///
/// None of these are fatal: a failed fetch leaves the previously loaded
/// transactions in place, a rejected goal or filter leaves the prior value in
/// place. Command handlers turn them into notices.
#[derive(Debug, Error)]
pub enum SmartSpendError {
    #[error("User not authenticated. Please login again.")]
    Unauthenticated,

    #[error("Failed to reach transaction store: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Transaction store rejected {action} with HTTP {status}")]
    Rejected { action: &'static str, status: u16 },

    #[error("{0}")]
    Validation(String),

    #[error("Settings store error: {0}")]
    Settings(#[from] rusqlite::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl SmartSpendError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
