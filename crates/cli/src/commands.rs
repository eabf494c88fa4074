//! Clap command tree.

use clap::{Arg, ArgAction, Command};

/// Build the full `stockroom` command.
pub fn build_cli() -> Command {
    Command::new("stockroom")
        .about("Inventory store with sequential item codes and dashboard views")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .short('d')
                .global(true)
                .default_value(".stockroom")
                .help("Directory holding the inventory"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML config file (default: stockroom.toml in the data directory)"),
        )
        .arg(
            Arg::new("backend")
                .long("backend")
                .global(true)
                .value_parser(["json", "sqlite"])
                .help("Where the item collection is stored"),
        )
        .arg(
            Arg::new("ephemeral")
                .long("ephemeral")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Keep everything in memory for this invocation"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print JSON instead of tables"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Log more (-v info, -vv debug)"),
        )
        .subcommand(list_cmd())
        .subcommand(
            Command::new("search")
                .about("Dashboard search: name contains or id starts with TERM")
                .arg(Arg::new("term").required(true)),
        )
        .subcommand(add_cmd())
        .subcommand(
            Command::new("delete")
                .about("Delete an item by id")
                .arg(Arg::new("id").required(true)),
        )
        .subcommand(
            Command::new("show")
                .about("Show one item")
                .arg(Arg::new("id").required(true)),
        )
        .subcommand(Command::new("kpis").about("Headline counters"))
        .subcommand(
            Command::new("recent")
                .about("Most recently added items")
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .short('n')
                        .value_parser(clap::value_parser!(usize))
                        .help("Rows to show (default from config)"),
                ),
        )
        .subcommand(Command::new("chart").about("Quantity per item with stock tiers"))
        .subcommand(Command::new("dashboard").about("KPIs, recent activity and chart together"))
        .subcommand(Command::new("reconcile").about("Merge items whose names differ only by case"))
}

fn list_cmd() -> Command {
    Command::new("list")
        .about("Inventory table, newest first")
        .arg(
            Arg::new("search")
                .long("search")
                .short('s')
                .help("Name contains or id starts with"),
        )
        .arg(Arg::new("category").long("category").help("Exact category"))
        .arg(
            Arg::new("status")
                .long("status")
                .help("In Stock, Low Stock or Out of Stock"),
        )
}

fn add_cmd() -> Command {
    Command::new("add")
        .about("Add an item")
        .arg(Arg::new("name").long("name").default_value(""))
        .arg(Arg::new("category").long("category").default_value(""))
        .arg(
            Arg::new("quantity")
                .long("quantity")
                .default_value("")
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new("unit-price")
                .long("unit-price")
                .default_value("")
                .allow_hyphen_values(true),
        )
        .arg(Arg::new("status").long("status").default_value("In Stock"))
}
