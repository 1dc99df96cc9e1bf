use serde::{Deserialize, Serialize};

use crate::drill_engine::error::{EngineError, Result};

/// What an expired whack round counts as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeoutPolicy {
    /// Recorded as a wrong answer on the session.
    #[default]
    PenalizeAsMiss,
    /// Not recorded at all.
    Ignore,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairMatchConfig {
    pub pairs: usize,
    pub hide_delay_ms: u64,
}

impl Default for PairMatchConfig {
    fn default() -> Self {
        PairMatchConfig { pairs: 4, hide_delay_ms: 1500 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhackConfig {
    pub hole_count: usize,
    pub moles_per_round: usize,
    pub max_rounds: u32,
    pub points_per_hit: u32,
    /// Time the player gets before the round expires.
    pub round_budget_ms: u64,
    /// Pause between a resolved round and the next spawn.
    pub advance_delay_ms: u64,
    pub timeout_policy: TimeoutPolicy,
}

impl Default for WhackConfig {
    fn default() -> Self {
        WhackConfig {
            hole_count: 9,
            moles_per_round: 3,
            max_rounds: 10,
            points_per_hit: 10,
            round_budget_ms: 2000,
            advance_delay_ms: 1500,
            timeout_policy: TimeoutPolicy::PenalizeAsMiss,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    pub pairs: usize,
    pub hide_delay_ms: u64,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        MemoryConfig { pairs: 6, hide_delay_ms: 1000 }
    }
}

/// Tunables for every engine. Missing JSON fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub points_per_correct: u32,
    pub option_count: usize,
    pub questions_per_session: u32,
    pub pair_match: PairMatchConfig,
    pub whack: WhackConfig,
    pub memory: MemoryConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            points_per_correct: 10,
            option_count: 4,
            questions_per_session: 10,
            pair_match: PairMatchConfig::default(),
            whack: WhackConfig::default(),
            memory: MemoryConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| -> Result<()> { Err(EngineError::InvalidConfig(msg.to_string())) };
        if self.option_count == 0 {
            return invalid("option_count must be at least 1");
        }
        if self.questions_per_session == 0 {
            return invalid("questions_per_session must be at least 1");
        }
        if self.pair_match.pairs == 0 || self.memory.pairs == 0 {
            return invalid("pairs must be at least 1");
        }
        let w = &self.whack;
        if w.hole_count == 0 {
            return invalid("whack.hole_count must be at least 1");
        }
        if w.moles_per_round == 0 || w.moles_per_round > w.hole_count {
            return invalid("whack.moles_per_round must be between 1 and hole_count");
        }
        if w.max_rounds == 0 {
            return invalid("whack.max_rounds must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let c = EngineConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.whack.hole_count, 9);
        assert_eq!(c.whack.max_rounds, 10);
        assert_eq!(c.whack.timeout_policy, TimeoutPolicy::PenalizeAsMiss);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c = EngineConfig::from_json_str(
            r#"{ "option_count": 3, "whack": { "max_rounds": 5, "timeout_policy": "ignore" } }"#,
        )
        .unwrap();
        assert_eq!(c.option_count, 3);
        assert_eq!(c.whack.max_rounds, 5);
        assert_eq!(c.whack.hole_count, 9);
        assert_eq!(c.whack.timeout_policy, TimeoutPolicy::Ignore);
        assert_eq!(c.memory, MemoryConfig::default());
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = EngineConfig::from_json_str(r#"{ "whack": { "hole_count": 2 } }"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
        let err = EngineConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }
}
