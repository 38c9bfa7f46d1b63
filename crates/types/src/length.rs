//! A CSS length used where the layout model allows either pixels or a percentage.

use serde::de::{self, IgnoredAny};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(u32),
    Percent(f32),
}

impl Default for Length {
    fn default() -> Self {
        Length::Percent(100.0)
    }
}

impl Length {
    pub fn is_positive(&self) -> bool {
        match *self {
            Length::Px(v) => v > 0,
            Length::Percent(v) => v.is_finite() && v > 0.0,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{}px", v),
            Length::Percent(v) => write!(f, "{}%", v),
        }
    }
}

impl FromStr for Length {
    type Err = String;

    /// Parses `"100%"`, `"640px"` or a bare pixel count such as `"640"`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if let Some(val) = input.strip_suffix('%') {
            return val
                .trim()
                .parse::<f32>()
                .map(Length::Percent)
                .map_err(|e| format!("Invalid percentage '{}': {}", input, e));
        }
        let val = input.strip_suffix("px").unwrap_or(input);
        val.trim()
            .parse::<u32>()
            .map(Length::Px)
            .map_err(|e| format!("Invalid length '{}': {}", input, e))
    }
}

impl Serialize for Length {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A length as written in a config file, before it is checked.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawLength {
    Str(String),
    Num(f64),
    Other(IgnoredAny),
}

impl RawLength {
    pub fn parse(&self) -> Result<Length, String> {
        match self {
            RawLength::Str(s) => s.parse(),
            RawLength::Num(n) if n.fract() == 0.0 && *n >= 0.0 && *n <= u32::MAX as f64 => {
                Ok(Length::Px(*n as u32))
            }
            RawLength::Num(n) => Err(format!("Invalid pixel count {}", n)),
            RawLength::Other(_) => Err("expected a length string or pixel count".to_string()),
        }
    }
}

impl From<Length> for RawLength {
    fn from(length: Length) -> Self {
        RawLength::Str(length.to_string())
    }
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawLength::deserialize(deserializer)?
            .parse()
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_length() {
        assert_eq!("100%".parse::<Length>().unwrap(), Length::Percent(100.0));
        assert_eq!("640px".parse::<Length>().unwrap(), Length::Px(640));
        assert_eq!(" 320 ".parse::<Length>().unwrap(), Length::Px(320));
        assert!("wide".parse::<Length>().is_err());
        assert!("-5px".parse::<Length>().is_err());
    }

    #[test]
    fn test_display_matches_css() {
        assert_eq!(Length::Percent(100.0).to_string(), "100%");
        assert_eq!(Length::Percent(62.5).to_string(), "62.5%");
        assert_eq!(Length::Px(480).to_string(), "480px");
    }

    #[test]
    fn test_serde_accepts_strings_and_numbers() {
        let from_str: Length = serde_json::from_str("\"75%\"").unwrap();
        assert_eq!(from_str, Length::Percent(75.0));
        let from_num: Length = serde_json::from_str("600").unwrap();
        assert_eq!(from_num, Length::Px(600));
        assert_eq!(serde_json::to_string(&Length::Px(600)).unwrap(), "\"600px\"");
    }

    #[test]
    fn test_raw_length_reports_bad_input() {
        let raw: RawLength = serde_json::from_str("\"wide\"").unwrap();
        assert!(raw.parse().unwrap_err().contains("'wide'"));
        let raw: RawLength = serde_json::from_str("12.5").unwrap();
        assert!(raw.parse().is_err());
        let raw: RawLength = serde_json::from_str("true").unwrap();
        assert!(raw.parse().is_err());
        assert_eq!(RawLength::from(Length::Px(80)).parse(), Ok(Length::Px(80)));
    }
}
