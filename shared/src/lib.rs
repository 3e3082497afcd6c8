use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

pub mod history;

pub use history::{HISTORY_CAP, ScanRecord, format_accuracy, push_scan, remove_scan};

/// Display languages the client can render content in.
///
/// The wire/storage form is the lowercase code (`en`, `si`, `ta`).
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Si,
    Ta,
}

/// Canonical disease categories the UI knows how to describe, distinct from
/// the free-text label the classifier returns.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
pub enum DiseaseLabel {
    Blight,
    #[strum(serialize = "Common Rust")]
    CommonRust,
    #[strum(serialize = "Gray Leaf Spot")]
    GrayLeafSpot,
    Healthy,
}

/// Wire shape of the classifier reply. Extra fields are ignored.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PredictResponse {
    pub class: String,
    pub confidence: f32,
}

/// One classification, after label normalization. Transient UI state only.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassificationResult {
    pub raw_label: String,
    pub label: DiseaseLabel,
    pub confidence: f32,
}

impl ClassificationResult {
    pub fn from_response(response: PredictResponse) -> Self {
        let label = normalize(&response.class);
        Self {
            raw_label: response.class,
            label,
            confidence: response.confidence,
        }
    }

    pub fn band(&self) -> ConfidenceBand {
        ConfidenceBand::from_confidence(self.confidence)
    }
}

/// Maps a free-text classifier label onto the canonical category set.
///
/// Substring match in fixed priority order, first match wins. A label that
/// matches no keyword falls back to `Healthy`; callers that care log the raw
/// label before discarding it.
pub fn normalize(raw_label: &str) -> DiseaseLabel {
    if raw_label.contains("Blight") {
        DiseaseLabel::Blight
    } else if raw_label.contains("Rust") {
        DiseaseLabel::CommonRust
    } else if raw_label.contains("Gray") {
        DiseaseLabel::GrayLeafSpot
    } else {
        DiseaseLabel::Healthy
    }
}

/// Discrete display tier derived from a continuous confidence score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfidenceBand {
    High,
    Reliable,
    Low,
}

impl ConfidenceBand {
    pub const HIGH_THRESHOLD: f32 = 0.90;
    pub const RELIABLE_THRESHOLD: f32 = 0.70;

    /// Lower bounds are inclusive: 0.90 is High, 0.70 is Reliable.
    pub fn from_confidence(confidence: f32) -> Self {
        if confidence >= Self::HIGH_THRESHOLD {
            ConfidenceBand::High
        } else if confidence >= Self::RELIABLE_THRESHOLD {
            ConfidenceBand::Reliable
        } else {
            ConfidenceBand::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_normalize_blight_takes_priority() {
        assert_eq!(normalize("Northern Corn Leaf Blight"), DiseaseLabel::Blight);
        assert_eq!(normalize("Blight"), DiseaseLabel::Blight);
        // "Blight" wins even when another keyword is also present.
        assert_eq!(normalize("Gray Blight Rust"), DiseaseLabel::Blight);
    }

    #[test]
    fn test_normalize_remaining_keywords() {
        assert_eq!(normalize("Common Rust"), DiseaseLabel::CommonRust);
        assert_eq!(normalize("Southern Rust"), DiseaseLabel::CommonRust);
        assert_eq!(normalize("Gray Leaf Spot"), DiseaseLabel::GrayLeafSpot);
        assert_eq!(normalize("Gray Spot"), DiseaseLabel::GrayLeafSpot);
    }

    #[test]
    fn test_normalize_unmatched_falls_back_to_healthy() {
        // Intentional fallback: labels outside the keyword set render as Healthy.
        assert_eq!(normalize("Healthy"), DiseaseLabel::Healthy);
        assert_eq!(normalize("Tar Spot"), DiseaseLabel::Healthy);
        assert_eq!(normalize(""), DiseaseLabel::Healthy);
    }

    #[test]
    fn test_confidence_bands() {
        assert_eq!(ConfidenceBand::from_confidence(0.95), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::from_confidence(0.80), ConfidenceBand::Reliable);
        assert_eq!(ConfidenceBand::from_confidence(0.50), ConfidenceBand::Low);
    }

    #[test]
    fn test_confidence_band_boundaries_are_inclusive() {
        assert_eq!(ConfidenceBand::from_confidence(0.90), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::from_confidence(0.70), ConfidenceBand::Reliable);
    }

    #[test]
    fn test_language_round_trip() {
        for language in Language::iter() {
            let code = language.to_string();
            assert_eq!(Language::from_str(&code).unwrap(), language);
        }

        // Simulated restart: the persisted code string reloads as the same language.
        let json = serde_json::to_string(&Language::Si).unwrap();
        assert_eq!(json, "\"si\"");
        assert_eq!(serde_json::from_str::<Language>(&json).unwrap(), Language::Si);
    }

    #[test]
    fn test_disease_label_display_names() {
        assert_eq!(DiseaseLabel::Blight.to_string(), "Blight");
        assert_eq!(DiseaseLabel::CommonRust.to_string(), "Common Rust");
        assert_eq!(DiseaseLabel::GrayLeafSpot.to_string(), "Gray Leaf Spot");
        assert_eq!(DiseaseLabel::Healthy.to_string(), "Healthy");
    }

    #[test]
    fn test_from_response_normalizes_and_keeps_raw_label() {
        let result = ClassificationResult::from_response(PredictResponse {
            class: "Northern Corn Leaf Blight".to_string(),
            confidence: 0.82,
        });

        assert_eq!(result.label, DiseaseLabel::Blight);
        assert_eq!(result.raw_label, "Northern Corn Leaf Blight");
        assert_eq!(result.band(), ConfidenceBand::Reliable);
    }
}
