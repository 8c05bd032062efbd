use mood_notebook_types::Value;

use super::{ClassificationResult, SOURCE_INFERENCE, Sentiment};

/// Pulls the raw label out of a hosted inference response.
///
/// The service answers with either an array whose first element carries a
/// `label` field, or a single object with a `label` field. Anything else is
/// best-effort JSON with no guaranteed shape, so the serialized value itself
/// becomes the raw label and later remapping falls through to Neutral.
pub fn extract_raw_label(value: &Value) -> String {
    if let Some(first) = value.as_array().and_then(|entries| entries.first()) {
        if let Some(label) = first.get("label").and_then(|label| label.as_str()) {
            return label.to_string();
        }
    } else if let Some(label) = value.get("label").and_then(|label| label.as_str()) {
        return label.to_string();
    }
    value.to_string()
}

/// Maps a raw upstream label onto the local three-way enum.
///
/// Case-insensitive substring match: "POS" anywhere wins over "NEG", and
/// everything unrecognized is Neutral. Pure, no network involvement.
pub fn remap_label(raw: &str) -> Sentiment {
    let upper = raw.to_uppercase();
    if upper.contains("POS") {
        Sentiment::Happy
    } else if upper.contains("NEG") {
        Sentiment::Sad
    } else {
        Sentiment::Neutral
    }
}

/// Extraction and remapping composed into a full result.
pub fn classification_from_response(value: &Value) -> ClassificationResult {
    let raw = extract_raw_label(value);
    ClassificationResult {
        label: remap_label(&raw),
        reason: format!("AI says: {}", raw),
        source: SOURCE_INFERENCE.to_string(),
    }
}
