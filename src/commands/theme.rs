// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::settings::Theme;
use crate::state::AppState;
use anyhow::Result;

pub fn handle(state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("get", _)) => println!("{}", state.theme()),
        Some(("set", sub)) => {
            let theme = sub.get_one::<String>("theme").unwrap().parse::<Theme>()?;
            state.set_theme(theme)?;
            println!("Theme set to {}", theme);
        }
        Some(("toggle", _)) => {
            let theme = state.toggle_theme()?;
            println!("Theme set to {}", theme);
        }
        _ => {}
    }
    Ok(())
}
