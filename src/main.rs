// Faceted paper browser entry point
mod cli;
mod errors;
mod handlers;
mod operations;
mod state;
mod ui;

use clap::Parser;
use std::io::IsTerminal;
use std::process;
use tracing::debug;

use cli::{Cli, OutputFormat};
use errors::{map_export_error, map_file_load_error};
use handlers::apply_cli_filters;
use operations::FileOperations;
use state::AppState;
use ui::{render_json, render_markdown, set_status, show_error, StatusLevel, ViewOptions};

fn main() {
    let cli = Cli::parse();

    let no_color = std::env::var_os("NO_COLOR").is_some() || !std::io::stdout().is_terminal();
    if no_color {
        colored::control::set_override(false);
    }
    init_tracing(default_level(&cli), no_color);

    let mut state = AppState::new();
    if let Err(err) = state.load_from_file(cli.file.clone()) {
        let (title, message, details) = map_file_load_error(&err, &cli.file);
        show_error(title, message, details);
        process::exit(1);
    }
    state.set_visible_columns(&cli.columns);

    let Some(mut browser) = state.browser.take() else {
        process::exit(1);
    };
    apply_cli_filters(&mut browser, &cli);
    debug!(filters = ?browser.filters(), "Filters applied");

    let view = ViewOptions {
        show_counts: cli.counts,
        show_chart: cli.chart,
    };

    match cli.format {
        OutputFormat::Markdown => print!("{}", render_markdown(&state, &browser, &view)),
        OutputFormat::Json => match render_json(&state, &browser, &view) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                show_error("Error Rendering Report", "Failed to serialize the report.", format!("{:#}", err));
                process::exit(1);
            }
        },
    }

    let exports = FileOperations::new(&browser);
    let mut failed = false;

    if (cli.export_csv.is_some() || cli.export_bib.is_some()) && browser.result_set().is_empty() {
        set_status("No papers match the filters; exports contain no records", StatusLevel::Warning);
    }

    if let Some(ref target) = cli.export_csv {
        match exports.export_csv(target) {
            Ok(path) => set_status(format!("Exported CSV to {}", path.display()), StatusLevel::Success),
            Err(err) => {
                let (title, message, details) = map_export_error(&err, target);
                show_error(title, message, details);
                failed = true;
            }
        }
    }

    if let Some(ref target) = cli.export_bib {
        match exports.export_bib(target) {
            Ok(path) => set_status(format!("Exported BibTeX to {}", path.display()), StatusLevel::Success),
            Err(err) => {
                let (title, message, details) = map_export_error(&err, target);
                show_error(title, message, details);
                failed = true;
            }
        }
    }

    if failed {
        process::exit(1);
    }
}

/// Log level implied by -v / -q when RUST_LOG is unset
fn default_level(cli: &Cli) -> &'static str {
    if cli.quiet {
        return "error";
    }
    match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

fn init_tracing(default_level: &str, no_color: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_env_filter(filter)
        .try_init();
}
