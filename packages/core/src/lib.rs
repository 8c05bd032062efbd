pub mod quiz;
pub mod samples;
pub mod sentiment;

pub use sentiment::{ClassificationResult, Sentiment};
