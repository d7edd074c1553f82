//! ArgMatches → CliAction conversion.
//!
//! Translates clap's parsed arguments into typed requests. Numeric flags and
//! the sort order are validated here; enum-valued filters (category,
//! framework, styling) are passed through as strings so an unknown value
//! yields an empty result instead of an error.

use std::str::FromStr;

use clap::ArgMatches;
use uiatlas_core::{FilterSpec, SearchRequest, SortOrder};
use uiatlas_recommend::{DEFAULT_COMPLEMENT_LIMIT, DEFAULT_FRAMEWORK_LIMIT, DEFAULT_QUERY_LIMIT};
use uiatlas_search::DEFAULT_SUGGESTION_LIMIT;

/// The result of parsing a command line.
#[derive(Debug, Clone, PartialEq)]
pub enum CliAction {
    /// Aggregated search
    Search(SearchRequest),
    /// Single component lookup
    Get { source: String, id: String },
    /// Query completion
    Suggest { partial: String, limit: usize },
    /// Components similar to one component
    Similar {
        source: String,
        id: String,
        limit: usize,
    },
    /// Complements for a selection
    Recommend { selected: Vec<String>, limit: usize },
    /// Query intent plus suggestions
    Intent { query: String, limit: usize },
    /// Essentials for one catalog
    Essentials {
        framework: String,
        use_case: Option<String>,
        limit: usize,
    },
    /// Loaded catalog ids
    Sources,
    /// Effective configuration
    Config,
}

/// Convert clap ArgMatches into a CliAction.
///
/// `default_limit` is the configured search page size.
pub fn matches_to_action(matches: &ArgMatches, default_limit: usize) -> Result<CliAction, String> {
    let (sub_name, m) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "search" => parse_search(m, default_limit),
        "get" => Ok(CliAction::Get {
            source: required(m, "source")?,
            id: required(m, "id")?,
        }),
        "suggest" => Ok(CliAction::Suggest {
            partial: required(m, "partial")?,
            limit: parse_number(m, "limit")?.unwrap_or(DEFAULT_SUGGESTION_LIMIT),
        }),
        "similar" => Ok(CliAction::Similar {
            source: required(m, "source")?,
            id: required(m, "id")?,
            limit: parse_number(m, "limit")?.unwrap_or(DEFAULT_SUGGESTION_LIMIT),
        }),
        "recommend" => Ok(CliAction::Recommend {
            selected: m
                .get_many::<String>("selected")
                .map(|v| v.cloned().collect())
                .unwrap_or_default(),
            limit: parse_number(m, "limit")?.unwrap_or(DEFAULT_COMPLEMENT_LIMIT),
        }),
        "intent" => Ok(CliAction::Intent {
            query: required(m, "query")?,
            limit: parse_number(m, "limit")?.unwrap_or(DEFAULT_QUERY_LIMIT),
        }),
        "essentials" => Ok(CliAction::Essentials {
            framework: required(m, "framework")?,
            use_case: m.get_one::<String>("use-case").cloned(),
            limit: parse_number(m, "limit")?.unwrap_or(DEFAULT_FRAMEWORK_LIMIT),
        }),
        "sources" => Ok(CliAction::Sources),
        "config" => Ok(CliAction::Config),
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn parse_search(m: &ArgMatches, default_limit: usize) -> Result<CliAction, String> {
    let mut filters = FilterSpec::new();
    filters.query = m.get_one::<String>("query").cloned();
    filters.source = m.get_one::<String>("source").cloned();
    filters.category = m.get_one::<String>("category").cloned();
    filters.framework = m.get_one::<String>("framework").cloned();
    filters.styling_version = m.get_one::<String>("styling").cloned();
    filters.free_only = m.get_flag("free-only");
    filters.tags = m
        .get_many::<String>("tag")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();

    let sort = match m.get_one::<String>("sort").map(|s| s.to_lowercase()) {
        None => SortOrder::Popularity,
        Some(s) if s == "popularity" => SortOrder::Popularity,
        Some(s) if s == "relevance" => SortOrder::Relevance,
        Some(s) => return Err(format!("Invalid sort '{}': expected popularity or relevance", s)),
    };

    Ok(CliAction::Search(
        SearchRequest::with_filters(filters)
            .with_limit(parse_number(m, "limit")?.unwrap_or(default_limit))
            .with_offset(parse_number(m, "offset")?.unwrap_or(0))
            .with_sort(sort),
    ))
}

fn required(m: &ArgMatches, name: &str) -> Result<String, String> {
    m.get_one::<String>(name)
        .cloned()
        .ok_or_else(|| format!("Missing argument: {}", name))
}

fn parse_number<T: FromStr>(m: &ArgMatches, name: &str) -> Result<Option<T>, String>
where
    T::Err: std::fmt::Display,
{
    m.get_one::<String>(name)
        .map(|s| s.parse::<T>())
        .transpose()
        .map_err(|e| format!("Invalid {}: {}", name, e))
}
