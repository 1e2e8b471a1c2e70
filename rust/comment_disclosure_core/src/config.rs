//! Widget configuration shared by every thread on a page.

use serde::{Deserialize, Serialize};
use crate::dom_id::IdScheme;
use crate::error::{Error, Result};

/// Number of comments a thread shows before older ones start collapsing.
pub const DEFAULT_VISIBLE_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisclosureConfig {
    /// Pre-arrival comment count at which the oldest visible comment is hidden.
    pub visible_count: usize,
    /// How compound element ids are split into thread keys.
    pub id_scheme: IdScheme,
}

impl Default for DisclosureConfig {
    fn default() -> Self {
        Self { visible_count: DEFAULT_VISIBLE_COUNT, id_scheme: IdScheme::default() }
    }
}

impl DisclosureConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: DisclosureConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.visible_count == 0 {
            return Err(Error::InvalidConfig("visible_count must be at least 1".into()));
        }
        if self.id_scheme.delimiter.is_whitespace() {
            return Err(Error::InvalidConfig("id_scheme.delimiter must not be whitespace".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let c = DisclosureConfig::from_json("{}").unwrap();
        assert_eq!(c, DisclosureConfig::default());
        assert_eq!(c.visible_count, 5);
        assert_eq!(c.id_scheme.delimiter, '-');
    }

    #[test]
    fn partial_override() {
        let c = DisclosureConfig::from_json(r#"{"visible_count":3,"id_scheme":{"delimiter":"_"}}"#).unwrap();
        assert_eq!(c.visible_count, 3);
        assert_eq!(c.id_scheme, IdScheme::LEADERBOARD);
    }

    #[test]
    fn zero_threshold_rejected() {
        let err = DisclosureConfig::from_json(r#"{"visible_count":0}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn bad_json_is_json_error() {
        assert!(matches!(DisclosureConfig::from_json("{"), Err(Error::Json(_))));
    }
}
