//! Event details extracted from a flyer by the analysis backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend's self-reported certainty in an extraction.
///
/// Ordered `Low < Medium < High`. Only these three strings decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "Low",
            Confidence::Medium => "Medium",
            Confidence::High => "High",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// AI-extracted fields from an event flyer image or PDF.
///
/// Only ever built by decoding a successful `/api/analyze` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventExtraction {
    pub event_name: String,
    /// Free-form date text; not validated here.
    pub event_date: String,
    pub event_time: String,
    pub venue: String,
    pub target_audience: Vec<String>,
    pub confidence: Confidence,
    /// May be empty.
    pub extraction_notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_payload() {
        let json = r#"{
            "event_name": "Spring Jazz Night",
            "event_date": "2026-04-12",
            "event_time": "7:00 PM",
            "venue": "Clarendon Ballroom",
            "target_audience": ["young-professionals", "music-lovers"],
            "confidence": "High",
            "extraction_notes": ""
        }"#;
        let parsed: EventExtraction = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.event_name, "Spring Jazz Night");
        assert_eq!(parsed.target_audience, vec!["young-professionals", "music-lovers"]);
        assert_eq!(parsed.confidence, Confidence::High);
        assert!(parsed.extraction_notes.is_empty());
    }

    #[test]
    fn confidence_accepts_exactly_three_levels() {
        for (raw, level) in [
            ("\"High\"", Confidence::High),
            ("\"Medium\"", Confidence::Medium),
            ("\"Low\"", Confidence::Low),
        ] {
            let parsed: Confidence = serde_json::from_str(raw).unwrap();
            assert_eq!(parsed, level);
        }
        assert!(serde_json::from_str::<Confidence>("\"high\"").is_err());
        assert!(serde_json::from_str::<Confidence>("\"Certain\"").is_err());
        assert!(serde_json::from_str::<Confidence>("0.9").is_err());
    }

    #[test]
    fn confidence_is_ordered() {
        assert!(Confidence::Low < Confidence::Medium);
        assert!(Confidence::Medium < Confidence::High);
        let mut levels = vec![Confidence::High, Confidence::Low, Confidence::Medium];
        levels.sort();
        assert_eq!(levels, vec![Confidence::Low, Confidence::Medium, Confidence::High]);
    }

    #[test]
    fn confidence_serializes_as_wire_string() {
        assert_eq!(serde_json::to_string(&Confidence::Medium).unwrap(), "\"Medium\"");
        assert_eq!(Confidence::Low.to_string(), "Low");
    }

    #[test]
    fn missing_field_is_rejected() {
        let json = r#"{"event_name": "x", "confidence": "Low"}"#;
        assert!(serde_json::from_str::<EventExtraction>(json).is_err());
    }
}
