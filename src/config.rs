//! Converter settings.
//!
//! Host applications can embed [`Config`] in their own settings file; every
//! field has a default, so an empty table is a valid configuration.
//!
//! ```
//! use nongli::config::{Config, LeapPolicy};
//!
//! let config: Config = serde_json::from_str(r#"{"leap_policy": "lenient"}"#).unwrap();
//! assert_eq!(LeapPolicy::Lenient, config.leap_policy);
//! ```

use serde::{Deserialize, Serialize};

/// What to do when a lunar date claims to be in a leap month the year does
/// not have.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeapPolicy {
    /// Reject with [`Error::InconsistentLeapRequest`](crate::Error::InconsistentLeapRequest).
    #[default]
    Strict,
    /// Drop the leap flag and use the ordinary month of the same number.
    Lenient,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Config {
    pub leap_policy: LeapPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(Config::default(), config);
        assert_eq!(LeapPolicy::Strict, config.leap_policy);
    }

    #[test]
    fn parse() {
        let config: Config = serde_json::from_str(r#"{"leap_policy": "strict"}"#).unwrap();
        assert_eq!(LeapPolicy::Strict, config.leap_policy);
        assert!(serde_json::from_str::<Config>(r#"{"leap_policy": "sometimes"}"#).is_err());
    }

    #[test]
    fn serialize() {
        let config = Config {
            leap_policy: LeapPolicy::Lenient,
        };
        assert_eq!(
            r#"{"leap_policy":"lenient"}"#,
            serde_json::to_string(&config).unwrap()
        );
    }
}
