use super::{ClassificationResult, SOURCE_HEURISTIC, Sentiment};

/// Marker words that push the score towards Happy.
const POSITIVE_MARKERS: [&str; 12] = [
    "happy", "love", "great", "awesome", "fun", "nice", "good", "yay", "excited", "best", "like",
    "amazing",
];

/// Marker words that push the score towards Sad. The list is matched
/// entry-by-entry, so the repeated "hate" weighs double and the contraction
/// fragments ("don't", "dont") are ordinary substrings like everything else.
const NEGATIVE_MARKERS: [&str; 13] = [
    "sad", "hate", "bad", "angry", "terrible", "lonely", "upset", "cry", "crying", "mad", "don't",
    "dont", "hate",
];

/// Rule-based sentiment over a single sentence.
///
/// Each marker contributes at most once per list entry, based on substring
/// containment in the lower-cased input. Markers embedded in longer words
/// still count ("madrid" contains "mad"); that is the documented behavior of
/// this classifier, not an accident to correct. Total over every input,
/// including empty and whitespace-only text.
pub fn classify(text: &str) -> ClassificationResult {
    if text.trim().is_empty() {
        return ClassificationResult {
            label: Sentiment::Neutral,
            reason: "No words detected".to_string(),
            source: SOURCE_HEURISTIC.to_string(),
        };
    }

    let lowered = text.to_lowercase();
    let mut score: i32 = 0;
    for marker in POSITIVE_MARKERS {
        if lowered.contains(marker) {
            score += 1;
        }
    }
    for marker in NEGATIVE_MARKERS {
        if lowered.contains(marker) {
            score -= 1;
        }
    }

    let (label, reason) = match score {
        s if s > 0 => (Sentiment::Happy, format!("Found {} happy hint(s)", s)),
        s if s < 0 => (Sentiment::Sad, format!("Found {} sad hint(s)", -s)),
        _ => (Sentiment::Neutral, "No strong words found".to_string()),
    };

    ClassificationResult {
        label,
        reason,
        source: SOURCE_HEURISTIC.to_string(),
    }
}
