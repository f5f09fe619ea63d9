// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", sub)) = m.subcommand() {
        let registry = categories::all();
        if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &registry)? {
            let data = registry
                .iter()
                .map(|c| vec![c.key.clone(), c.name.clone(), c.icon.clone(), c.color.clone()])
                .collect();
            println!("{}", pretty_table(&["Key", "Name", "Icon", "Color"], data));
        }
    }
    Ok(())
}
