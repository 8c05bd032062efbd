pub mod huggingface;
pub mod provider;

pub use huggingface::InferenceClient;
pub use provider::InferenceConfig;
