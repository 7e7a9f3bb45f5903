//! Plain-text rendering of dashboard views.
//!
//! Every renderer returns a `String` so output can be asserted in tests;
//! `main` only prints.

use std::fmt::Write as _;

use autosent_analytics::drilldown::SUMMARY_WORD_LIMIT;
use autosent_analytics::{
    truncate_words, DimensionOptions, ModelCategoryRow, ModelFeatureRanking, MovingAveragePoint,
    Page, SentimentBreakdown,
};
use autosent_core::{FeedbackRecord, RawFeedbackRecord, Route};

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

/// Shown when no subcommand is given: the dashboard's navigation entries.
pub(crate) fn render_navigation() -> String {
    let mut out = String::from("autosent-cli ready; run with --help to list views\n");
    for route in Route::navigation() {
        let _ = writeln!(out, "  {route}");
    }
    out
}

pub(crate) fn render_model_category(rows: &[ModelCategoryRow]) -> String {
    if rows.is_empty() {
        return "no feedback matches the current filters\n".to_string();
    }
    let mut out = format!(
        "{:<24}{:<14}{:>8}{:>8}{:>8}{:>8}{:>8}{:>8}\n",
        "MODEL", "CATEGORY", "V.POS", "POS", "NEU", "NEG", "V.NEG", "TOTAL"
    );
    for row in rows {
        let c = &row.counts;
        let _ = writeln!(
            out,
            "{:<24}{:<14}{:>8}{:>8}{:>8}{:>8}{:>8}{:>8}",
            row.model,
            row.category,
            c.very_positive,
            c.positive,
            c.neutral,
            c.negative,
            c.very_negative,
            row.total
        );
    }
    out
}

pub(crate) fn render_trend(points: &[MovingAveragePoint], window: usize) -> String {
    if points.is_empty() {
        return "no dated feedback matches the current filters\n".to_string();
    }
    let mut out = format!("moving average, window = {window}\n");
    let _ = writeln!(
        out,
        "{:<12}{:<14}{:>8}{:>8}{:>8}{:>8}{:>8}",
        "DATE", "CATEGORY", "V.POS", "POS", "NEU", "NEG", "V.NEG"
    );
    for point in points {
        let a = &point.averages;
        let _ = writeln!(
            out,
            "{:<12}{:<14}{:>8.2}{:>8.2}{:>8.2}{:>8.2}{:>8.2}",
            point.date.format("%d-%m-%Y"),
            point.category,
            a.very_positive,
            a.positive,
            a.neutral,
            a.negative,
            a.very_negative
        );
    }
    out
}

pub(crate) fn render_breakdown(breakdown: &SentimentBreakdown) -> String {
    let mut out = format!("{:<16}{:>8}{:>10}\n", "SENTIMENT", "COUNT", "SHARE");
    for share in &breakdown.shares {
        let _ = writeln!(
            out,
            "{:<16}{:>8}{:>9.1}%",
            share.category.label(),
            share.count,
            share.percentage
        );
    }
    let _ = writeln!(out, "{:<16}{:>8}", "TOTAL", breakdown.total);
    out
}

pub(crate) fn render_features(models: &[ModelFeatureRanking]) -> String {
    if models.is_empty() {
        return "no ranked feedback matches the current filters\n".to_string();
    }
    let mut out = String::new();
    for model in models {
        let _ = writeln!(out, "## {}", model.model);
        for (label, features) in [
            ("positive", &model.positive_features),
            ("negative", &model.negative_features),
        ] {
            if features.is_empty() {
                continue;
            }
            let _ = writeln!(out, "  {label}:");
            for f in features {
                let _ = writeln!(
                    out,
                    "    {:<24}{:>+8.3}  ({} mentions)",
                    f.feature, f.average_ranking, f.count
                );
            }
        }
    }
    out
}

pub(crate) fn render_options(options: &DimensionOptions) -> String {
    let mut out = String::new();
    for (label, values) in [
        ("brands", &options.brands),
        ("models", &options.models),
        ("features", &options.features),
        ("sentiments", &options.sentiments),
        ("sources", &options.sources),
        ("categories", &options.categories),
        ("countries", &options.countries),
    ] {
        let _ = writeln!(out, "{label:<12}{}", values.join(", "));
    }
    out
}

pub(crate) fn render_feedback_page(page: &Page<&FeedbackRecord>) -> String {
    let mut out = String::new();
    for record in &page.items {
        let date = record
            .date
            .map(|d| d.format("%d-%m-%Y").to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "#{:<6}{:<12}{:<16}{:<14}{}",
            record.index,
            date,
            or_dash(record.feature.as_deref()),
            record.sentiment.label(),
            or_dash(record.feedback_text.as_deref())
        );
        if let (Some(model), Some(date)) = (record.model.clone(), record.date) {
            let route = Route::FeedbackDetails {
                model,
                index: record.index,
                date,
            };
            let _ = writeln!(out, "       details: {route}");
        }
    }
    let _ = writeln!(
        out,
        "page {} of {} ({} records)",
        page.page, page.total_pages, page.total_items
    );
    out
}

/// Summary rows from the data API, shortened for a terminal.
pub(crate) fn render_summary(records: &[RawFeedbackRecord]) -> String {
    if records.is_empty() {
        return "no summary records returned\n".to_string();
    }
    let dataset = autosent_analytics::Dataset::from_raw(records);
    let mut out = String::new();
    for record in dataset.records() {
        let summary = record
            .summary_text
            .as_deref()
            .or(record.feedback_text.as_deref())
            .map(|text| truncate_words(text, SUMMARY_WORD_LIMIT))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:<16}{:<16}{:<14}{}",
            or_dash(record.model.as_deref()),
            or_dash(record.feature.as_deref()),
            record.sentiment.label(),
            summary
        );
    }
    out
}
