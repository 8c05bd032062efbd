use mood_notebook_types::json::{Deserialize, Serialize};

pub mod heuristic;
pub mod label;

pub use heuristic::classify;
pub use label::{classification_from_response, extract_raw_label, remap_label};

/// Source tag for results produced by the local marker heuristic.
pub const SOURCE_HEURISTIC: &str = "heuristic";
/// Source tag for results derived from the hosted inference service.
pub const SOURCE_INFERENCE: &str = "inference";

/// Three-way affect label used across the whole service.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Sentiment {
    Happy,
    Sad,
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Sentiment::Happy => "Happy",
            Sentiment::Sad => "Sad",
            Sentiment::Neutral => "Neutral",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of a single classification attempt. Produced fresh on every
/// attempt and never mutated afterwards.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ClassificationResult {
    pub label: Sentiment,
    pub reason: String,
    pub source: String,
}
