//! Ranked zone recommendations and the formatting used to show them as cards.
//!
//! Records arrive pre-computed from the recommendations backend; nothing here
//! scores or ranks. Audience match is scored out of 40 and the total out of 100.

use serde::{Deserialize, Serialize};

/// Maximum audience-match points a zone can earn.
pub const AUDIENCE_MATCH_MAX: f64 = 40.0;

/// An optimal posting window, already humanised by the backend (e.g. "Mon-Fri", "5-7pm").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingWindow {
    pub days: String,
    pub hours: String,
    #[serde(default)]
    pub reasoning: String,
}

/// One ranked zone from the recommendations endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneRecommendation {
    pub zone_id: String,
    pub zone_name: String,
    /// 0-100
    pub total_score: f64,
    /// 0-40
    pub audience_match_score: f64,
    #[serde(default)]
    pub temporal_score: f64,
    #[serde(default)]
    pub distance_score: f64,
    #[serde(default)]
    pub dwell_time_score: f64,
    pub distance_miles: f64,
    #[serde(default)]
    pub timing_windows: Vec<TimingWindow>,
    #[serde(default)]
    pub dwell_time_seconds: u32,
    #[serde(default)]
    pub cost_tier: String,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub matched_signals: Vec<String>,
}

impl ZoneRecommendation {
    pub fn audience_match_percent(&self) -> u8 {
        audience_match_percent(self.audience_match_score)
    }

    /// First timing window as "days, hours", or "Any time" if none.
    pub fn primary_window(&self) -> String {
        match self.timing_windows.first() {
            Some(w) => format!("{}, {}", w.days, w.hours),
            None => "Any time".to_string(),
        }
    }

    pub fn cost_label(&self) -> &str {
        let tier = self.cost_tier.trim();
        if tier.is_empty() { "Unknown" } else { tier }
    }
}

/// Convert a 0-40 audience-match score into a whole percentage.
pub fn audience_match_percent(score: f64) -> u8 {
    if !score.is_finite() {
        return 0;
    }
    let pct = (score / AUDIENCE_MATCH_MAX * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

pub fn format_distance(miles: f64) -> String {
    format!("{miles:.1} mi")
}

pub fn format_score(total: f64) -> String {
    format!("{}/100", total.round().clamp(0.0, 100.0) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ZoneRecommendation {
        serde_json::from_str(
            r#"{
                "zone_id": "z-ballston",
                "zone_name": "Ballston Metro",
                "total_score": 78.4,
                "audience_match_score": 34.0,
                "temporal_score": 22.5,
                "distance_score": 15.0,
                "dwell_time_score": 6.9,
                "distance_miles": 0.82,
                "timing_windows": [
                    {"days": "Mon-Fri", "hours": "5-7pm", "reasoning": "evening commute"},
                    {"days": "Sat-Sun", "hours": "11-2pm", "reasoning": "brunch"}
                ],
                "dwell_time_seconds": 240,
                "cost_tier": "free",
                "reasoning": "Strong audience match; very close to venue (0.8 mi)",
                "matched_signals": ["young-professionals"],
                "latitude": 38.882,
                "longitude": -77.111
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn decodes_backend_record_ignoring_extra_keys() {
        let rec = sample();
        assert_eq!(rec.zone_name, "Ballston Metro");
        assert_eq!(rec.timing_windows.len(), 2);
        assert_eq!(rec.matched_signals, vec!["young-professionals"]);
    }

    #[test]
    fn optional_fields_default() {
        let rec: ZoneRecommendation = serde_json::from_str(
            r#"{"zone_id": "z1", "zone_name": "Main St", "total_score": 50,
                "audience_match_score": 20, "distance_miles": 2}"#,
        )
        .unwrap();
        assert!(rec.timing_windows.is_empty());
        assert_eq!(rec.primary_window(), "Any time");
        assert_eq!(rec.cost_label(), "Unknown");
    }

    #[test]
    fn percent_from_forty_point_scale() {
        assert_eq!(audience_match_percent(34.0), 85);
        assert_eq!(audience_match_percent(40.0), 100);
        assert_eq!(audience_match_percent(0.0), 0);
        assert_eq!(audience_match_percent(24.0), 60);
        // 33.3 / 40 = 83.25%
        assert_eq!(audience_match_percent(33.3), 83);
    }

    #[test]
    fn percent_is_clamped() {
        assert_eq!(audience_match_percent(55.0), 100);
        assert_eq!(audience_match_percent(-3.0), 0);
        assert_eq!(audience_match_percent(f64::NAN), 0);
    }

    #[test]
    fn distance_and_score_formatting() {
        assert_eq!(format_distance(0.82), "0.8 mi");
        assert_eq!(format_distance(12.0), "12.0 mi");
        assert_eq!(format_score(78.4), "78/100");
        assert_eq!(format_score(99.6), "100/100");
    }

    #[test]
    fn primary_window_uses_first_entry() {
        let rec = sample();
        assert_eq!(rec.primary_window(), "Mon-Fri, 5-7pm");
        assert_eq!(rec.audience_match_percent(), 85);
        assert_eq!(rec.cost_label(), "free");
    }
}
