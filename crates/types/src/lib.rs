//! # mrisafe-types
//!
//! Shared data model for the MRI implant safety search system.
//!
//! Contains:
//! - validated input newtypes (`ImplantName`)
//! - the structured safety finding returned per implant
//! - citation (grounding chunk) wire shapes
//! - the top-level request/response contract for the search API
//!
//! All wire types use camelCase field names to match the JSON contract
//! shared with the AI proxy and its clients.

#![warn(rust_2018_idioms)]

mod implant;
mod safety;
mod search;
mod sources;

pub use implant::{ImplantName, ImplantNameError};
pub use safety::{ConditionalGuidelines, SafetyClassification, StructuredSafetyInfo};
pub use search::{SearchRequest, SearchResult};
pub use sources::{GroundingChunk, WebSource};
