use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of recursive plies the evaluator considers. 0 means immediate
    /// capture count only.
    pub lookahead_depth: u8,
    /// Pause before the computer replies. Presentation knob only; the engine
    /// itself never sleeps.
    pub move_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            lookahead_depth: 1,
            move_delay_ms: 500,
        }
    }
}

impl EngineConfig {
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_default() {
        let config = EngineConfig::load_from_json("{}").unwrap();
        assert_eq!(config.lookahead_depth, 1);
        assert_eq!(config.move_delay_ms, 500);
    }

    #[test]
    fn test_load_config_partial() {
        let json = r#"{ "lookahead_depth": 3 }"#;
        let config = EngineConfig::load_from_json(json).unwrap();
        assert_eq!(config.lookahead_depth, 3);
        // Untouched field keeps its default.
        assert_eq!(config.move_delay_ms, 500);
    }

    #[test]
    fn test_load_config_full() {
        let json = r#"{ "lookahead_depth": 0, "move_delay_ms": 0 }"#;
        let config = EngineConfig::load_from_json(json).unwrap();
        assert_eq!(config.lookahead_depth, 0);
        assert_eq!(config.move_delay_ms, 0);
    }

    #[test]
    fn test_load_config_invalid_json() {
        assert!(EngineConfig::load_from_json("{ invalid json }").is_err());
    }
}
