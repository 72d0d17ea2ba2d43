// Copyright 2026 the Quadsolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! quadsolve: solve a·x² + b·x + c = 0 from the command line.
//!
//! ## Usage
//!
//! ```bash
//! quadsolve -u 1 -3 2        # Solve x^2 - 3x + 2 = 0
//! quadsolve -o report.txt    # Read a, b, c from stdin, write the report to a file
//! quadsolve --test           # Check the solver against the built-in catalog
//! ```

use std::process::ExitCode;

use clap::Parser;
use quadsolve::cli::{self, Cli};

fn main() -> ExitCode {
    let args = Cli::parse();
    let config = match cli::build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            cli::report_error(&e, args.color.into());
            return ExitCode::FAILURE;
        }
    };
    cli::init_tracing(config.verbosity);

    match cli::run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "exiting with failure");
            cli::report_error(&e, config.color);
            ExitCode::FAILURE
        }
    }
}
