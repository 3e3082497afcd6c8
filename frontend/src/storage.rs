use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use js_sys::Date;
use shared::{DiseaseLabel, Language, ScanRecord, format_accuracy, push_scan, remove_scan};
use std::sync::atomic::{AtomicU64, Ordering};
use wasm_bindgen::JsValue;

const LANGUAGE_KEY: &str = "userLanguage";
const HISTORY_KEY: &str = "scanHistory";

/// A failed read falls back to the default language; the store is never
/// authoritative over a running session.
pub fn load_language() -> Language {
    match LocalStorage::get(LANGUAGE_KEY) {
        Ok(language) => language,
        Err(StorageError::KeyNotFound(_)) => Language::default(),
        Err(e) => {
            log::warn!("failed to read language preference: {e}");
            Language::default()
        }
    }
}

pub fn save_language(language: Language) {
    if let Err(e) = LocalStorage::set(LANGUAGE_KEY, language) {
        log::warn!("failed to persist language preference: {e}");
    }
}

pub fn load_history() -> Vec<ScanRecord> {
    match LocalStorage::get(HISTORY_KEY) {
        Ok(records) => records,
        Err(StorageError::KeyNotFound(_)) => Vec::new(),
        Err(e) => {
            log::warn!("failed to read scan history: {e}");
            Vec::new()
        }
    }
}

/// Builds and prepends the record for a successful classification, then
/// persists the whole sequence.
pub fn record_scan(
    records: &mut Vec<ScanRecord>,
    label: DiseaseLabel,
    confidence: f32,
) -> ScanRecord {
    let record = ScanRecord {
        id: generate_scan_id(),
        disease: label.to_string(),
        accuracy: format_accuracy(confidence),
        date: locale_date(),
    };
    push_scan(records, record.clone());
    persist_history(records);
    record
}

/// Removes a record by id and persists; unknown ids are a no-op.
pub fn delete_scan(records: &mut Vec<ScanRecord>, id: &str) {
    remove_scan(records, id);
    persist_history(records);
}

fn persist_history(records: &[ScanRecord]) {
    // Best-effort: on failure the in-memory sequence stays authoritative.
    if let Err(e) = LocalStorage::set(HISTORY_KEY, records) {
        log::warn!("failed to persist scan history: {e}");
    }
}

/// Timestamp-derived id, unique within a session even when two scans land
/// in the same millisecond.
fn generate_scan_id() -> String {
    static ID_COUNTER: AtomicU64 = AtomicU64::new(0);
    let now = Date::now() as u64;
    let count = ID_COUNTER.fetch_add(1, Ordering::SeqCst);
    (now * 1000 + (count % 1000)).to_string()
}

fn locale_date() -> String {
    Date::new_0()
        .to_locale_date_string("default", &JsValue::UNDEFINED)
        .into()
}
