//! Ranking configuration
//!
//! Plain data handed to the ranker by the embedding service. Every field
//! has a default so partial JSON documents deserialize.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Maximum number of results returned
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Candidates scoring below this are dropped
    #[serde(default)]
    pub min_score: f32,

    /// Attach a match reason to every result
    #[serde(default = "default_explain")]
    pub explain: bool,
}

fn default_top_k() -> usize {
    10
}

fn default_explain() -> bool {
    true
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            min_score: 0.0,
            explain: default_explain(),
        }
    }
}

impl RankingConfig {
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_min_score(mut self, min_score: f32) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn with_explain(mut self, explain: bool) -> Self {
        self.explain = explain;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(Error::InvalidConfig("top_k must be at least 1".to_string()));
        }
        if !(0.0..=1.0).contains(&self.min_score) {
            return Err(Error::InvalidConfig(format!(
                "min_score must be within [0, 1], got {}",
                self.min_score
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let config: RankingConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RankingConfig::default());
        assert_eq!(config.top_k, 10);
        assert!(config.explain);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config: RankingConfig = serde_json::from_str(r#"{"top_k": 3}"#).unwrap();
        assert_eq!(config.top_k, 3);
        assert_eq!(config.min_score, 0.0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(matches!(
            RankingConfig::default().with_top_k(0).validate(),
            Err(Error::InvalidConfig(_))
        ));
        assert!(RankingConfig::default().with_min_score(1.5).validate().is_err());
        assert!(RankingConfig::default().with_min_score(f32::NAN).validate().is_err());
    }
}
