//! Prompt construction for the search-grounded safety query.

use mrisafe_types::ImplantName;

/// Builds the instruction sent to the AI service for one implant.
///
/// The prompt pins down the output contract: web search on, one raw JSON
/// object with no markdown, the `StructuredSafetyInfo` field schema, and a
/// similar-device-class substitution (flagged in the disclaimer) when the
/// exact device cannot be found.
pub fn build_safety_prompt(name: &ImplantName) -> String {
    format!(
        r#"You are an expert assistant for MRI safety. Based on the medical implant "{name}", use web search to find its MRI safety information.

Your response MUST be a single, raw JSON object and nothing else. Do not use markdown backticks or any other formatting.

The JSON object must conform to the following structure:
{{
  "deviceName": "string",
  "manufacturer": "string",
  "safetyClassification": "MR Safe | MR Conditional | MR Unsafe | Unknown",
  "summary": "string",
  "conditionalGuidelines": {{
    "staticMagneticField": "string or null",
    "spatialGradientField": "string or null",
    "sarLimit": "string or null",
    "notes": "string or null"
  }},
  "risksAndArtifacts": "string or null",
  "waitingPeriod": "string or null",
  "disclaimer": "string or null"
}}

Set "conditionalGuidelines" to null unless the classification is "MR Conditional". If you cannot find information about the exact device, answer for the closest similar device class instead and explain the substitution in "disclaimer"."#
    )
}
