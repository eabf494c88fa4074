//! ArgMatches → CliCommand conversion.

use clap::ArgMatches;
use stockroom::{ItemDraft, ItemFilter, ItemStatus};

/// One parsed invocation.
#[derive(Debug, PartialEq)]
pub enum CliCommand {
    List { filter: ItemFilter },
    Search { term: String },
    Add { draft: ItemDraft },
    Delete { id: String },
    Show { id: String },
    Kpis,
    Recent { limit: Option<usize> },
    Chart,
    Dashboard,
    Reconcile,
}

/// Convert clap ArgMatches into a CliCommand.
pub fn matches_to_command(matches: &ArgMatches) -> Result<CliCommand, String> {
    let (sub_name, m) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "list" => parse_list(m),
        "search" => Ok(CliCommand::Search {
            term: required(m, "term")?,
        }),
        "add" => Ok(CliCommand::Add {
            draft: ItemDraft {
                name: optional(m, "name"),
                category: optional(m, "category"),
                quantity: optional(m, "quantity"),
                unit_price: optional(m, "unit-price"),
                status: optional(m, "status"),
            },
        }),
        "delete" => Ok(CliCommand::Delete {
            id: required(m, "id")?,
        }),
        "show" => Ok(CliCommand::Show {
            id: required(m, "id")?,
        }),
        "kpis" => Ok(CliCommand::Kpis),
        "recent" => Ok(CliCommand::Recent {
            limit: m.get_one::<usize>("limit").copied(),
        }),
        "chart" => Ok(CliCommand::Chart),
        "dashboard" => Ok(CliCommand::Dashboard),
        "reconcile" => Ok(CliCommand::Reconcile),
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn parse_list(m: &ArgMatches) -> Result<CliCommand, String> {
    let mut filter = ItemFilter::new();
    if let Some(term) = m.get_one::<String>("search") {
        filter = filter.search(term.as_str());
    }
    if let Some(category) = m.get_one::<String>("category") {
        filter = filter.category(category.as_str());
    }
    if let Some(status) = m.get_one::<String>("status") {
        let status = status
            .parse::<ItemStatus>()
            .map_err(|e| format!("Invalid status: {}", e))?;
        filter = filter.status(status);
    }
    Ok(CliCommand::List { filter })
}

fn required(m: &ArgMatches, name: &str) -> Result<String, String> {
    m.get_one::<String>(name)
        .cloned()
        .ok_or_else(|| format!("Missing argument: {}", name))
}

fn optional(m: &ArgMatches, name: &str) -> String {
    m.get_one::<String>(name).cloned().unwrap_or_default()
}
