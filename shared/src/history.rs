use serde::{Deserialize, Serialize};

/// Upper bound on persisted history entries. Enforced on every insert so the
/// stored sequence cannot grow without limit; the oldest entries drop first.
pub const HISTORY_CAP: usize = 50;

/// One past classification event, as persisted under the `scanHistory` key.
///
/// Records are never mutated after creation and are removed only by explicit
/// user deletion. The field names are the stored JSON field names.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ScanRecord {
    pub id: String,
    pub disease: String,
    pub accuracy: String,
    pub date: String,
}

/// Prepends a record (most recent first) and truncates to `HISTORY_CAP`.
pub fn push_scan(records: &mut Vec<ScanRecord>, record: ScanRecord) {
    records.insert(0, record);
    records.truncate(HISTORY_CAP);
}

/// Removes the record with the matching id, keeping the rest in order.
/// Removing an unknown id is a no-op.
pub fn remove_scan(records: &mut Vec<ScanRecord>, id: &str) {
    records.retain(|record| record.id != id);
}

/// Formats a 0..=1 confidence as a percentage with one decimal place.
pub fn format_accuracy(confidence: f32) -> String {
    format!("{:.1}%", confidence * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, disease: &str) -> ScanRecord {
        ScanRecord {
            id: id.to_string(),
            disease: disease.to_string(),
            accuracy: "82.0%".to_string(),
            date: "2026/01/21".to_string(),
        }
    }

    #[test]
    fn test_push_scan_prepends() {
        let mut records = vec![record("1", "Healthy")];
        push_scan(&mut records, record("2", "Blight"));

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "2");
        assert_eq!(records[0].disease, "Blight");
        assert_eq!(records[1].id, "1");
    }

    #[test]
    fn test_push_scan_enforces_cap() {
        let mut records = Vec::new();
        for i in 0..HISTORY_CAP + 5 {
            push_scan(&mut records, record(&i.to_string(), "Healthy"));
        }

        assert_eq!(records.len(), HISTORY_CAP);
        // Most recent survives, oldest entries were dropped.
        assert_eq!(records[0].id, (HISTORY_CAP + 4).to_string());
        assert_eq!(records.last().unwrap().id, "5");
    }

    #[test]
    fn test_remove_scan_keeps_relative_order() {
        let mut records = vec![
            record("3", "Blight"),
            record("2", "Common Rust"),
            record("1", "Healthy"),
        ];
        remove_scan(&mut records, "2");

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn test_remove_scan_unknown_id_is_noop() {
        let mut records = vec![record("1", "Healthy"), record("2", "Blight")];
        remove_scan(&mut records, "missing");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "1");
        assert_eq!(records[1].id, "2");
    }

    #[test]
    fn test_format_accuracy_one_decimal() {
        assert_eq!(format_accuracy(0.715), "71.5%");
        assert_eq!(format_accuracy(0.82), "82.0%");
        assert_eq!(format_accuracy(0.978), "97.8%");
        assert_eq!(format_accuracy(1.0), "100.0%");
    }

    #[test]
    fn test_scan_record_stored_field_names() {
        let json = serde_json::to_string(&record("1737412345678000", "Common Rust")).unwrap();

        assert!(json.contains("\"id\":\"1737412345678000\""));
        assert!(json.contains("\"disease\":\"Common Rust\""));
        assert!(json.contains("\"accuracy\":\"82.0%\""));
        assert!(json.contains("\"date\":\"2026/01/21\""));

        let back: ScanRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record("1737412345678000", "Common Rust"));
    }

    // Full pipeline for one successful classification: the server label is
    // normalized, banded, formatted, and lands at the head of the history.
    #[test]
    fn test_record_pipeline_end_to_end() {
        use crate::{ClassificationResult, ConfidenceBand, DiseaseLabel, PredictResponse};

        let result = ClassificationResult::from_response(PredictResponse {
            class: "Northern Corn Leaf Blight".to_string(),
            confidence: 0.82,
        });
        assert_eq!(result.label, DiseaseLabel::Blight);
        assert_eq!(result.band(), ConfidenceBand::Reliable);

        let mut records = vec![record("1", "Healthy")];
        push_scan(
            &mut records,
            ScanRecord {
                id: "2".to_string(),
                disease: result.label.to_string(),
                accuracy: format_accuracy(result.confidence),
                date: "2026/01/21".to_string(),
            },
        );

        assert_eq!(records[0].disease, "Blight");
        assert_eq!(records[0].accuracy, "82.0%");
        assert_eq!(records[1].disease, "Healthy");
    }
}
