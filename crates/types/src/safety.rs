use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Standardised MRI safety classification for an implant.
///
/// Deserialisation is lenient: any wire value outside the three recognised
/// classifications lands on `Unknown`, so an off-script answer from the AI
/// service degrades to the "information not found" presentation instead of a
/// parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SafetyClassification {
    #[serde(rename = "MR Safe")]
    MrSafe,
    #[serde(rename = "MR Conditional")]
    MrConditional,
    #[serde(rename = "MR Unsafe")]
    MrUnsafe,
    #[serde(other, rename = "Unknown")]
    Unknown,
}

impl Default for SafetyClassification {
    fn default() -> Self {
        SafetyClassification::Unknown
    }
}

/// Field-strength limits attached to an MR Conditional finding.
///
/// All fields are free text as reported by the source material; no numeric
/// parsing is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalGuidelines {
    #[serde(default)]
    pub static_magnetic_field: Option<String>,
    #[serde(default)]
    pub spatial_gradient_field: Option<String>,
    #[serde(default)]
    pub sar_limit: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// One implant's structured safety finding.
///
/// `conditional_guidelines` is only populated when the classification is
/// `MrConditional`; this holds by construction of the upstream prompt and is
/// not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StructuredSafetyInfo {
    #[serde(default, deserialize_with = "null_to_empty")]
    pub device_name: String,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub manufacturer: String,
    #[serde(default)]
    pub safety_classification: SafetyClassification,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub summary: String,
    #[serde(default)]
    pub conditional_guidelines: Option<ConditionalGuidelines>,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub risks_and_artifacts: String,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub waiting_period: String,
    #[serde(default)]
    pub disclaimer: Option<String>,
}

// The AI service is told each text field is "string or null"; fold explicit
// nulls into empty strings so the presenter's one emptiness rule applies.
fn null_to_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_round_trips_wire_strings() {
        for (variant, wire) in [
            (SafetyClassification::MrSafe, "\"MR Safe\""),
            (SafetyClassification::MrConditional, "\"MR Conditional\""),
            (SafetyClassification::MrUnsafe, "\"MR Unsafe\""),
            (SafetyClassification::Unknown, "\"Unknown\""),
        ] {
            assert_eq!(serde_json::to_string(&variant).expect("serialize"), wire);
            let back: SafetyClassification = serde_json::from_str(wire).expect("deserialize");
            assert_eq!(back, variant);
        }
    }

    #[test]
    fn test_unrecognised_classification_becomes_unknown() {
        let parsed: SafetyClassification =
            serde_json::from_str("\"MR Mostly Safe\"").expect("deserialize");
        assert_eq!(parsed, SafetyClassification::Unknown);
    }

    #[test]
    fn test_safety_info_tolerates_null_text_fields() {
        let json = r#"{
            "deviceName": "Example Stent",
            "manufacturer": null,
            "safetyClassification": "MR Safe",
            "summary": "Fine at 3T.",
            "conditionalGuidelines": null,
            "risksAndArtifacts": null,
            "waitingPeriod": null,
            "disclaimer": null
        }"#;
        let info: StructuredSafetyInfo = serde_json::from_str(json).expect("deserialize");
        assert_eq!(info.device_name, "Example Stent");
        assert_eq!(info.manufacturer, "");
        assert_eq!(info.risks_and_artifacts, "");
        assert!(info.conditional_guidelines.is_none());
        assert!(info.disclaimer.is_none());
    }

    #[test]
    fn test_missing_classification_defaults_to_unknown() {
        let info: StructuredSafetyInfo =
            serde_json::from_str(r#"{"deviceName": "Mystery Device"}"#).expect("deserialize");
        assert_eq!(info.safety_classification, SafetyClassification::Unknown);
    }

    #[test]
    fn test_safety_info_uses_camel_case_on_the_wire() {
        let info = StructuredSafetyInfo {
            device_name: "Clip".into(),
            manufacturer: "Acme".into(),
            safety_classification: SafetyClassification::MrUnsafe,
            summary: "Do not scan.".into(),
            conditional_guidelines: None,
            risks_and_artifacts: "Severe torque.".into(),
            waiting_period: "".into(),
            disclaimer: None,
        };
        let json = serde_json::to_value(&info).expect("serialize");
        assert_eq!(json["deviceName"], "Clip");
        assert_eq!(json["safetyClassification"], "MR Unsafe");
        assert_eq!(json["risksAndArtifacts"], "Severe torque.");
    }
}
