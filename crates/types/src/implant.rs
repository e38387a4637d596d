/// Errors that can occur when creating a validated implant name.
#[derive(Debug, thiserror::Error)]
pub enum ImplantNameError {
    /// The input was empty or contained only whitespace
    #[error("Implant name cannot be empty")]
    Empty,
}

/// A medical implant name guaranteed to be non-empty.
///
/// Wraps a `String` and ensures it contains at least one non-whitespace
/// character. The input is trimmed of leading and trailing whitespace during
/// construction, so the wrapped value is exactly what gets embedded into the
/// search prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplantName(String);

impl ImplantName {
    /// Creates a new `ImplantName` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the
    /// trimmed result is empty, an error is returned.
    ///
    /// # Errors
    ///
    /// Returns `ImplantNameError::Empty` if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, ImplantNameError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ImplantNameError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImplantName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ImplantName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for ImplantName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for ImplantName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ImplantName::new(&s).map_err(serde::de::Error::custom)
    }
}
