use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Client-wide settings, fixed once a [`RequestClient`](crate::RequestClient) is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Kept for compatibility. Certificate verification is always skipped,
    /// whatever this is set to.
    #[serde(default = "default_insecure_skip_verify")]
    pub insecure_skip_verify: bool,
}

const fn default_timeout_seconds() -> u64 {
    Configuration::DEFAULT.timeout_seconds
}

const fn default_insecure_skip_verify() -> bool {
    Configuration::DEFAULT.insecure_skip_verify
}

impl Configuration {
    pub const DEFAULT: Configuration = Configuration {
        timeout_seconds: 60,
        insecure_skip_verify: true,
    };

    /// Total time allowed per request. Zero means no limit.
    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_seconds {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = Configuration::default();
        assert_eq!(config.timeout_seconds, 60);
        assert!(config.insecure_skip_verify);
        assert_eq!(config.timeout(), Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: Configuration = serde_json::from_str(r#"{"timeout_seconds": 5}"#).unwrap();
        assert_eq!(
            config,
            Configuration {
                timeout_seconds: 5,
                insecure_skip_verify: true,
            }
        );

        let config: Configuration = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Configuration::DEFAULT);
    }

    #[test]
    fn test_zero_timeout_is_unlimited() {
        let config = Configuration {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert_eq!(config.timeout(), None);
    }
}
