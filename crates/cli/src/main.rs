//! Stockroom CLI: one command per invocation against an inventory directory.

mod commands;
mod format;
mod parse;

use std::process;

use stockroom::{BackendKind, Inventory};
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_error, format_merge_banner, format_output, Output, OutputMode};
use parse::{matches_to_command, CliCommand};

fn main() {
    let cli = build_cli();
    let matches = cli.get_matches();

    init_logging(matches.get_count("verbose"));

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let command = match matches_to_command(&matches) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("(error) {}", e);
            process::exit(1);
        }
    };

    let mut inventory = match open_inventory(&matches) {
        Ok(inventory) => inventory,
        Err(e) => {
            eprintln!("{}", format_error(&e, output_mode));
            process::exit(1);
        }
    };

    if output_mode == OutputMode::Human {
        if let Some(banner) = format_merge_banner(inventory.merged_on_open()) {
            eprintln!("{}", banner);
        }
    }

    let exit_code = match execute(&mut inventory, command) {
        Ok(output) => {
            let formatted = format_output(&output, output_mode);
            if !formatted.is_empty() {
                println!("{}", formatted);
            }
            output.exit_code()
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, output_mode));
            1
        }
    };

    if inventory.is_dirty() {
        eprintln!("(warning) changes could not be written to storage");
    }
    process::exit(exit_code);
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn open_inventory(matches: &clap::ArgMatches) -> stockroom::Result<Inventory> {
    let mut builder = Inventory::builder();

    if matches.get_flag("ephemeral") {
        builder = builder.ephemeral();
    } else if let Some(dir) = matches.get_one::<String>("data-dir") {
        builder = builder.path(dir);
    }
    if let Some(config) = matches.get_one::<String>("config") {
        builder = builder.config_file(config);
    }
    if let Some(backend) = matches.get_one::<String>("backend") {
        let backend = backend
            .parse::<BackendKind>()
            .map_err(stockroom::Error::Config)?;
        builder = builder.backend(backend);
    }

    builder.open()
}

fn execute(inventory: &mut Inventory, command: CliCommand) -> stockroom::Result<Output> {
    let output = match command {
        CliCommand::List { filter } => Output::Items(inventory.filter(&filter)),
        CliCommand::Search { term } => Output::Items(inventory.search(&term)),
        CliCommand::Add { draft } => Output::Added(inventory.add_item(&draft)?),
        CliCommand::Delete { id } => {
            let existed = inventory.delete_item(&id);
            Output::Deleted { id, existed }
        }
        CliCommand::Show { id } => match inventory.get(&id) {
            Some(item) => Output::Item(item.clone()),
            None => Output::NotFound(id),
        },
        CliCommand::Kpis => Output::Kpis(inventory.kpis()),
        CliCommand::Recent { limit } => Output::Items(match limit {
            Some(limit) => inventory.recent_n(limit),
            None => inventory.recent(),
        }),
        CliCommand::Chart => Output::Chart(inventory.chart()),
        CliCommand::Dashboard => Output::Dashboard(inventory.dashboard()),
        CliCommand::Reconcile => Output::Merged(inventory.reconcile()),
    };
    Ok(output)
}
