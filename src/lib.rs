// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod analytics;
pub mod budget;
pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod logging;
pub mod models;
pub mod settings;
pub mod state;
pub mod store;
pub mod summary;
pub mod utils;
