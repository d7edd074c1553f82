//! Output → human/json/raw string formatting.
//!
//! Three modes:
//! - **Human** (default): numbered lists, e.g. `1) Button [shadcn/button] (score: 100.000, exact)`
//! - **JSON** (`--json`): `serde_json::to_string_pretty`
//! - **Raw** (`--raw`): bare keys or keywords, one per line

use uiatlas_core::{ComponentRecord, Error, Framework, MatchKind, ScoredResult, SearchResponse};
use uiatlas_recommend::{QueryIntent, RecommendationReason, RecommendedKeyword};

use crate::state::Output;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Raw,
}

/// Format a successful output.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(output)
            .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e)),
        OutputMode::Raw => format_raw(output),
        OutputMode::Human => format_human(output),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": format!("{}", err)
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Raw => format!("{}", err),
        OutputMode::Human => format!("(error) {}", err),
    }
}

// =========================================================================
// Raw
// =========================================================================

fn format_raw(output: &Output) -> String {
    match output {
        Output::Page(page) => result_keys(&page.results),
        Output::Similar(results) => result_keys(results),
        Output::Component(c) => c.key().to_string(),
        Output::Suggestions(items) | Output::Sources(items) => items.join("\n"),
        Output::Recommendations(recs) | Output::Intent {
            recommendations: recs,
            ..
        } => recs
            .iter()
            .map(|r| r.keyword.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
        Output::Config(config) => toml::to_string_pretty(&**config).unwrap_or_default(),
    }
}

fn result_keys(results: &[ScoredResult]) -> String {
    results
        .iter()
        .map(|r| r.component.key().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

// =========================================================================
// Human
// =========================================================================

fn format_human(output: &Output) -> String {
    match output {
        Output::Page(page) => format_page(page),
        Output::Similar(results) => format_results(results, 0),
        Output::Component(c) => format_component(c),
        Output::Suggestions(items) | Output::Sources(items) => format_string_list(items),
        Output::Recommendations(recs) => format_recommendations(recs),
        Output::Intent {
            intent,
            recommendations,
        } => {
            let mut out = format_intent(intent);
            out.push('\n');
            out.push_str(&format_recommendations(recommendations));
            out
        }
        Output::Config(config) => toml::to_string_pretty(&**config)
            .unwrap_or_else(|e| format!("(error) {}", e)),
    }
}

fn format_page(page: &SearchResponse) -> String {
    let mut lines = vec![format_results(&page.results, page.offset)];
    if !page.is_empty() {
        lines.push(format!(
            "(showing {}-{} of {})",
            page.offset + 1,
            page.offset + page.len(),
            page.total
        ));
    } else if page.total > 0 {
        lines.push(format!("(offset {} is past {} results)", page.offset, page.total));
    }
    if page.is_degraded() {
        lines.push(format!("(unavailable) {}", page.failed_sources.join(", ")));
    }
    lines.join("\n")
}

fn format_results(results: &[ScoredResult], offset: usize) -> String {
    if results.is_empty() {
        return "(empty list)".to_string();
    }
    results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let mut line = format!(
                "{}) {} [{}]",
                offset + i + 1,
                r.component.name,
                r.component.key()
            );
            if r.kind != MatchKind::None {
                line.push_str(&format!(" (score: {:.3}, {})", r.score, kind_label(r.kind)));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn kind_label(kind: MatchKind) -> &'static str {
    match kind {
        MatchKind::Exact => "exact",
        MatchKind::Strong => "strong",
        MatchKind::Good => "good",
        MatchKind::Partial => "partial",
        MatchKind::None => "none",
    }
}

fn format_component(c: &ComponentRecord) -> String {
    let mut lines = vec![
        format!("key: {}", c.key()),
        format!("name: \"{}\"", c.name),
    ];
    if let Some(title) = &c.title {
        lines.push(format!("title: \"{}\"", title));
    }
    if let Some(desc) = &c.description {
        lines.push(format!("description: \"{}\"", desc));
    }
    lines.push(format!("category: {}", c.category));
    if !c.tags.is_empty() {
        let tags: Vec<&str> = c.tags.iter().map(String::as_str).collect();
        lines.push(format!("tags: {}", tags.join(", ")));
    }
    let frameworks: Vec<&str> = Framework::ALL
        .iter()
        .filter(|f| c.frameworks.supports(**f))
        .map(|f| f.as_str())
        .collect();
    if !frameworks.is_empty() {
        lines.push(format!("frameworks: {}", frameworks.join(", ")));
    }
    lines.push(format!("pro: {}", c.requires_pro_access));
    lines.push(format!("popularity: {}", c.popularity_score));
    lines.join("\n")
}

fn format_recommendations(recs: &[RecommendedKeyword]) -> String {
    if recs.is_empty() {
        return "(empty list)".to_string();
    }
    recs.iter()
        .enumerate()
        .map(|(i, r)| {
            format!(
                "{}) {} ({:.2}) {}",
                i + 1,
                r.keyword,
                r.confidence,
                reason_text(&r.reason)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn reason_text(reason: &RecommendationReason) -> String {
    match reason {
        RecommendationReason::Complements { selected } => {
            format!("complements {}", selected.join(", "))
        }
        RecommendationReason::PagePattern { page, section } => {
            format!("{} page, {} section", page, section)
        }
        RecommendationReason::Category { category } => format!("{} group", category),
        RecommendationReason::FrameworkEssential { framework } => {
            format!("essential {} component", framework)
        }
        RecommendationReason::UseCase { use_case } => format!("needed for {}", use_case),
    }
}

fn format_intent(intent: &QueryIntent) -> String {
    let page = intent.page_type.as_deref().unwrap_or("(none)");
    let types = if intent.component_types.is_empty() {
        "(none)".to_string()
    } else {
        intent.component_types.join(", ")
    };
    format!("page: {}\ncomponents: {}", page, types)
}

fn format_string_list(items: &[String]) -> String {
    if items.is_empty() {
        "(empty list)".to_string()
    } else {
        items
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}) \"{}\"", i + 1, s))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn page() -> SearchResponse {
        let button = Arc::new(ComponentRecord::new("shadcn", "button", "Button"));
        let card = Arc::new(ComponentRecord::new("hyperui", "card", "Card"));
        SearchResponse {
            results: vec![
                ScoredResult {
                    component: button,
                    score: 100.0,
                    kind: MatchKind::Exact,
                    matched_fields: vec![],
                },
                ScoredResult::unscored(card),
            ],
            total: 5,
            limit: 2,
            offset: 0,
            failed_sources: vec!["broken".into()],
        }
    }

    #[test]
    fn test_format_page_human() {
        let out = format_output(&Output::Page(page()), OutputMode::Human);
        assert_eq!(
            out,
            "1) Button [shadcn/button] (score: 100.000, exact)\n\
             2) Card [hyperui/card]\n\
             (showing 1-2 of 5)\n\
             (unavailable) broken"
        );
    }

    #[test]
    fn test_format_page_raw() {
        let out = format_output(&Output::Page(page()), OutputMode::Raw);
        assert_eq!(out, "shadcn/button\nhyperui/card");
    }

    #[test]
    fn test_format_page_json() {
        let out = format_output(&Output::Page(page()), OutputMode::Json);
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["total"], 5);
        assert_eq!(v["results"][0]["kind"], "exact");
        assert_eq!(v["failed_sources"][0], "broken");
    }

    #[test]
    fn test_format_empty_lists() {
        assert_eq!(
            format_output(&Output::Suggestions(vec![]), OutputMode::Human),
            "(empty list)"
        );
        assert_eq!(
            format_output(&Output::Recommendations(vec![]), OutputMode::Human),
            "(empty list)"
        );
    }

    #[test]
    fn test_format_recommendations() {
        let recs = vec![RecommendedKeyword {
            keyword: "form".into(),
            confidence: 0.8,
            reason: RecommendationReason::Complements {
                selected: vec!["button".into(), "input".into()],
            },
        }];
        assert_eq!(
            format_output(&Output::Recommendations(recs.clone()), OutputMode::Human),
            "1) form (0.80) complements button, input"
        );
        assert_eq!(format_output(&Output::Recommendations(recs), OutputMode::Raw), "form");

        let recs = vec![RecommendedKeyword {
            keyword: "box".into(),
            confidence: 0.8,
            reason: RecommendationReason::FrameworkEssential {
                framework: "chakra".into(),
            },
        }];
        assert_eq!(
            format_output(&Output::Recommendations(recs), OutputMode::Human),
            "1) box (0.80) essential chakra component"
        );
    }

    #[test]
    fn test_format_error() {
        let err = Error::ProviderNotFound("nope".into());
        assert_eq!(
            format_error(&err, OutputMode::Human),
            "(error) Provider not found: nope"
        );
        assert!(format_error(&err, OutputMode::Json).contains("\"error\""));
    }
}
