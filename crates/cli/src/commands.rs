//! Clap command tree definition.

use clap::{Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("uiatlas")
        .about("Search, rank and recommend UI components across catalogs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .short('c')
                .value_name("PATH")
                .help("JSON catalog file; the file stem is the source id (repeatable)")
                .action(ArgAction::Append)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Configuration file (default: built-in tables)")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .conflicts_with("raw")
                .global(true),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .help("Raw output mode (bare ids and keywords)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(build_search())
        .subcommand(build_get())
        .subcommand(build_suggest())
        .subcommand(build_similar())
        .subcommand(build_recommend())
        .subcommand(build_intent())
        .subcommand(build_essentials())
        .subcommand(Command::new("sources").about("List loaded catalogs"))
        .subcommand(Command::new("config").about("Print the effective configuration"))
}

// =========================================================================
// Search
// =========================================================================

fn build_search() -> Command {
    Command::new("search")
        .about("Search every catalog")
        .arg(Arg::new("query").help("Free-text query (omit to list everything)"))
        .arg(
            Arg::new("source")
                .long("source")
                .help("Only this catalog"),
        )
        .arg(
            Arg::new("category")
                .long("category")
                .help("Category, e.g. navigation, forms, marketing"),
        )
        .arg(
            Arg::new("tag")
                .long("tag")
                .help("Match any of these tags (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("framework")
                .long("framework")
                .help("Framework that must be supported, e.g. react, vue"),
        )
        .arg(
            Arg::new("styling")
                .long("styling")
                .help("Styling-system version: v3, v4"),
        )
        .arg(
            Arg::new("free-only")
                .long("free-only")
                .help("Exclude components that need pro access")
                .action(ArgAction::SetTrue),
        )
        .arg(Arg::new("limit").long("limit").help("Page size"))
        .arg(Arg::new("offset").long("offset").help("Results to skip (default: 0)"))
        .arg(
            Arg::new("sort")
                .long("sort")
                .help("Ordering: popularity, relevance (default: popularity)"),
        )
}

// =========================================================================
// Lookups
// =========================================================================

fn build_get() -> Command {
    Command::new("get")
        .about("Show one component")
        .arg(Arg::new("source").required(true).help("Catalog id"))
        .arg(Arg::new("id").required(true).help("Component id"))
}

fn build_suggest() -> Command {
    Command::new("suggest")
        .about("Complete a partial query")
        .arg(Arg::new("partial").required(true).help("Partial query text"))
        .arg(Arg::new("limit").long("limit").help("Number of suggestions (default: 10)"))
}

fn build_similar() -> Command {
    Command::new("similar")
        .about("Components similar to one component")
        .arg(Arg::new("source").required(true).help("Catalog id"))
        .arg(Arg::new("id").required(true).help("Component id"))
        .arg(Arg::new("limit").long("limit").help("Number of results (default: 10)"))
}

// =========================================================================
// Recommendations
// =========================================================================

fn build_recommend() -> Command {
    Command::new("recommend")
        .about("Components that complement a selection")
        .arg(
            Arg::new("selected")
                .required(true)
                .num_args(1..)
                .value_name("KEYWORD")
                .help("Selected component keywords, e.g. input button"),
        )
        .arg(Arg::new("limit").long("limit").help("Number of results (default: 8)"))
}

fn build_intent() -> Command {
    Command::new("intent")
        .about("Analyze what a query is building and suggest components")
        .arg(Arg::new("query").required(true).help("Query text"))
        .arg(Arg::new("limit").long("limit").help("Number of suggestions (default: 10)"))
}

fn build_essentials() -> Command {
    Command::new("essentials")
        .about("Components to start with on one catalog")
        .arg(Arg::new("framework").required(true).help("Catalog id, e.g. shadcn"))
        .arg(
            Arg::new("use-case")
                .long("use-case")
                .help("Use case: form, navigation, data, feedback"),
        )
        .arg(Arg::new("limit").long("limit").help("Number of results (default: 12)"))
}
