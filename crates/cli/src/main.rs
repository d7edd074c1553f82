//! UI Atlas CLI: search and recommend UI components across JSON catalogs.
//!
//! Every `--catalog` file becomes one provider named after its file stem:
//! `uiatlas -c shadcn.json -c hyperui.json search navbar --sort relevance`.
//! Logging goes to stderr and is controlled by `RUST_LOG`.

mod commands;
mod format;
mod parse;
mod state;

use std::path::{Path, PathBuf};
use std::process;

use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_error, format_output, OutputMode};
use parse::matches_to_action;
use state::SessionState;

fn main() {
    init_tracing();

    let matches = build_cli().get_matches();

    // Determine output mode
    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else if matches.get_flag("raw") {
        OutputMode::Raw
    } else {
        OutputMode::Human
    };

    let catalogs: Vec<PathBuf> = matches
        .get_many::<String>("catalog")
        .map(|v| v.map(PathBuf::from).collect())
        .unwrap_or_default();
    let config_path = matches.get_one::<String>("config").map(Path::new);

    // Load catalogs
    let state = match SessionState::open(&catalogs, config_path) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{}", format_error(&e, output_mode));
            process::exit(1);
        }
    };

    let action = match matches_to_action(&matches, state.default_limit()) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("(error) {}", e);
            process::exit(2);
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("(error) Failed to start runtime: {}", e);
            process::exit(1);
        }
    };

    let exit_code = match runtime.block_on(state.execute(action)) {
        Ok(output) => {
            let formatted = format_output(&output, output_mode);
            if !formatted.is_empty() {
                println!("{}", formatted);
            }
            0
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, output_mode));
            1
        }
    };
    process::exit(exit_code);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
