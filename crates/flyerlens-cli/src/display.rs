//! Vertical card display for extractions and zone recommendations.
//!
//! Rendering is split from printing so the layouts can be checked without a
//! terminal.

use flyerlens_core::recommendation::{format_distance, format_score};
use flyerlens_core::{EventExtraction, ZoneRecommendation};

const LABEL_WIDTH: usize = 16;
const MAX_SIGNALS: usize = 5;

// ── Extraction ──

pub fn print_extraction(extraction: &EventExtraction) {
    print!("{}", render_extraction(extraction));
}

pub fn render_extraction(e: &EventExtraction) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {} ===\n", or_dash(&e.event_name)));
    push_row(&mut out, "date", or_dash(&e.event_date));
    push_row(&mut out, "time", or_dash(&e.event_time));
    push_row(&mut out, "venue", or_dash(&e.venue));
    if !e.target_audience.is_empty() {
        push_row(&mut out, "audience", &e.target_audience.join(", "));
    }
    push_row(&mut out, "confidence", e.confidence.as_str());
    if !e.extraction_notes.trim().is_empty() {
        push_row(&mut out, "notes", e.extraction_notes.trim());
    }
    out
}

// ── Recommendations ──

pub fn print_recommendations(recs: &[ZoneRecommendation]) {
    if recs.is_empty() {
        println!("No recommendations.");
        return;
    }
    for (i, rec) in recs.iter().enumerate() {
        print!("{}", render_recommendation(i + 1, rec));
        println!();
    }
}

/// One card; `rank` starts at 1.
pub fn render_recommendation(rank: usize, rec: &ZoneRecommendation) -> String {
    let mut out = String::new();
    out.push_str(&format!("#{rank} {}\n", rec.zone_name));
    push_row(
        &mut out,
        "audience match",
        &format!("{}%", rec.audience_match_percent()),
    );
    push_row(&mut out, "distance", &format_distance(rec.distance_miles));
    push_row(&mut out, "best time", &rec.primary_window());
    push_row(&mut out, "cost", rec.cost_label());
    push_row(&mut out, "score", &format_score(rec.total_score));

    if !rec.matched_signals.is_empty() {
        let shown: Vec<&str> = rec
            .matched_signals
            .iter()
            .take(MAX_SIGNALS)
            .map(String::as_str)
            .collect();
        let mut line = shown.join(", ");
        if rec.matched_signals.len() > MAX_SIGNALS {
            line.push_str(&format!(" (+{} more)", rec.matched_signals.len() - MAX_SIGNALS));
        }
        push_row(&mut out, "signals", &line);
    }
    if !rec.reasoning.is_empty() {
        push_row(&mut out, "why", &rec.reasoning);
    }
    out
}

// ── Helpers ──

fn push_row(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("  {:<width$} {}\n", label, value, width = LABEL_WIDTH));
}

fn or_dash(s: &str) -> &str {
    if s.trim().is_empty() { "-" } else { s }
}
