use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical course identifier used as the sole key for matching.
///
/// Normalization is deliberately minimal: surrounding whitespace is trimmed
/// and letters are uppercased. Inner spacing is preserved, so `"CSCI 111"`
/// and `"CSCI111"` are distinct codes.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, JsonSchema,
)]
#[serde(transparent)]
pub struct CourseCode(String);

impl CourseCode {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }
}

// Deserialization goes through `new` so codes read back from reports stay canonical.
impl<'de> Deserialize<'de> for CourseCode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(CourseCode::new(raw))
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CourseCode {
    fn from(value: &str) -> Self {
        CourseCode::new(value)
    }
}

impl From<String> for CourseCode {
    fn from(value: String) -> Self {
        CourseCode::new(value)
    }
}
