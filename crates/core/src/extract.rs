//! Recovery of the structured safety finding from the model's raw text.
//!
//! The prompt demands a single raw JSON object, but models still wrap
//! answers in markdown fences or surround them with prose. Extraction
//! therefore strips an optional fence, tries a direct parse, and finally
//! falls back to the greedy first-`{`-to-last-`}` block before giving up.

use std::sync::OnceLock;

use regex::Regex;

use mrisafe_types::StructuredSafetyInfo;

/// Errors raised when no safety finding can be recovered from response text.
///
/// Both variants carry the offending text so the proxy can log it for
/// diagnosis; the text is never shown to end users.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The response contained no `{...}` block at all
    #[error("response contained no JSON object")]
    NoJsonObject { raw: String },

    /// A candidate block was found but did not parse as the expected schema
    #[error("failed to parse JSON from response: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
        raw: String,
    },
}

/// Parses the AI service's response text into a [`StructuredSafetyInfo`].
///
/// No schema validation happens beyond JSON well-formedness; unexpected
/// classification strings degrade to `Unknown` during deserialisation.
///
/// Known limitation: the fallback assumes the text holds exactly one JSON
/// object spanning from the first `{` to the last `}`, so unrelated braces
/// in surrounding prose defeat it.
///
/// # Errors
///
/// Returns an [`ExtractError`] when neither the direct parse nor the
/// fallback block yields valid JSON.
pub fn extract_safety_info(raw: &str) -> Result<StructuredSafetyInfo, ExtractError> {
    let candidate = strip_code_fence(raw);
    match serde_json::from_str(candidate) {
        Ok(info) => Ok(info),
        Err(direct_err) => {
            tracing::debug!(error = %direct_err, "direct JSON parse failed, trying block fallback");
            let Some(block) = json_block(candidate) else {
                return Err(ExtractError::NoJsonObject {
                    raw: raw.to_owned(),
                });
            };
            serde_json::from_str(block).map_err(|source| ExtractError::Parse {
                source,
                raw: raw.to_owned(),
            })
        }
    }
}

/// Strips a surrounding markdown code fence (with or without a `json` info
/// string) from the trimmed text, returning the inner body.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = match rest.split_once('\n') {
        Some((_info, body)) => body,
        None => rest,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Greedy `{...}` block: first `{` to last `}`.
fn json_block(text: &str) -> Option<&str> {
    static JSON_BLOCK: OnceLock<Regex> = OnceLock::new();
    let re = JSON_BLOCK.get_or_init(|| Regex::new(r"(?s)\{.*\}").expect("static pattern"));
    re.find(text).map(|m| m.as_str())
}
