use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_MAX_ROUNDS: u32 = 1000;

/// Knobs for a single battle.
///
/// `max_rounds` caps the turn loop. Two creatures that both deal zero damage
/// would otherwise trade blows forever; `None` restores that unbounded loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    pub max_rounds: Option<u32>,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            max_rounds: Some(DEFAULT_MAX_ROUNDS),
        }
    }
}

impl BattleConfig {
    pub fn unbounded() -> Self {
        Self { max_rounds: None }
    }

    pub fn with_max_rounds(max_rounds: u32) -> Self {
        Self {
            max_rounds: Some(max_rounds),
        }
    }

    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&text)
    }
}
