use serde::{Deserialize, Serialize};

/// Preferences supplied with an acquisition request.
///
/// Every axis is optional; an absent value means no constraint on that axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcquisitionPreferences {
    /// Dietary tags, e.g. "Vegetarian"
    #[serde(default)]
    pub dietary: Vec<String>,
    /// Maximum cooking time as entered by the user, e.g. "30" or "30 minutes"
    #[serde(default)]
    pub cooking_time: Option<String>,
    /// Difficulty label, matched exactly against recipe difficulty
    #[serde(default)]
    pub difficulty: Option<String>,
}

impl AcquisitionPreferences {
    /// Maximum cooking time in minutes, if one was given and is numeric
    pub fn max_cooking_minutes(&self) -> Option<u32> {
        self.cooking_time.as_deref().and_then(parse_minutes)
    }
}

/// Parses the leading integer of a time string.
///
/// "45" and "45 minutes" both yield 45; strings without a leading number
/// yield `None`.
pub fn parse_minutes(raw: &str) -> Option<u32> {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    digits.parse().ok()
}
