//! # mrisafe-core
//!
//! Core pipeline for the MRI implant safety search:
//!
//! 1. build a search-grounded prompt for an implant name ([`prompt`])
//! 2. call the generative AI service ([`gemini`])
//! 3. extract the structured finding from the model's free text ([`extract`])
//! 4. keep only citable grounding chunks ([`sources`])
//!
//! The pipeline is assembled by [`service::SafetyService`], behind the
//! [`service::SafetySearch`] trait so callers (the REST proxy, the CLI, and
//! tests) can substitute their own lookup.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod extract;
pub mod gemini;
pub mod prompt;
pub mod service;
pub mod sources;

pub use error::SearchError;
pub use extract::{extract_safety_info, ExtractError};
pub use gemini::{GeminiClient, GeminiConfig};
pub use prompt::build_safety_prompt;
pub use service::{SafetySearch, SafetyService};
pub use sources::filter_citable;
