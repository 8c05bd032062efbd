//! Shared result, error and JSON plumbing for every Mood Notebook crate.
//!
//! Downstream crates pull `Result`, `Value` and the `json` module from here
//! instead of depending on `anyhow`/`serde_json` directly, so the whole
//! workspace agrees on one error type and one JSON stack.

pub use anyhow::{Error, Result, anyhow, bail};
pub use serde_json::Value;

pub use reqwest;
pub use tokio;

pub mod json {
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::*;
}
