// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Deserialize;
use std::path::Path;

use crate::budget::BlurPolicy;
use crate::error::Result;

pub const ENV_PREFIX: &str = "SMARTSPEND";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub budget: BudgetConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token issued by the auth service.
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BudgetConfig {
    #[serde(default)]
    pub blur_policy: BlurPolicy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_log_filter() -> String {
    "smartspend=info".to_string()
}

impl AppConfig {
    /// Defaults, then the optional file, then `SMARTSPEND__SECTION__KEY`
    /// environment variables.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("api.base_url", default_base_url())?
            .set_default("api.timeout_secs", default_timeout_secs())?;
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(false));
        }
        let cfg = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;
        Ok(cfg.try_deserialize()?)
    }
}
