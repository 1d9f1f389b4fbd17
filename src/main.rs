// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod convert;
mod error;
mod model;
mod parse;
mod paths;
mod ui;
mod workbook;

use error::PluginError;
use std::path::Path;

fn main() {
    env_logger::init();

    let args = cli::CliArgs::parse_args();

    match &args.build_dir {
        // Build-integration mode: a missing report is a hard failure
        Some(dir) => {
            if let Err(e) = convert::convert_build_dir(dir) {
                ui::print_error(&e.to_string());
                let code = match e {
                    PluginError::ReportNotFound { .. } => 1,
                    PluginError::Conversion(_) => 2,
                };
                std::process::exit(code);
            }
            ui::status(&format!("{} converted to {}", convert::REPORT_FILE, convert::WORKBOOK_FILE));
        }

        // Standalone mode: convert pmd.xml in place, no-op when absent
        None => {
            let report = Path::new(convert::REPORT_FILE);
            if let Err(e) = convert::convert(report, report) {
                ui::print_error(&e.to_string());
                std::process::exit(2);
            }
        }
    }
}
