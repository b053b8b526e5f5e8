//! Engine tunables and the fixed stage table.
//!
//! `EngineConfig` can be loaded from JSON; the stage table cannot.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Stage table ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Standard,
    Diamond,
    Wave,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageConfig {
    pub rows: usize,
    pub cols: usize,
    pub layout: Layout,
}

/// Stage `n` uses `STAGES[n - 1]`; anything out of range uses `STAGES[0]`.
pub const STAGES: [StageConfig; 4] = [
    StageConfig { rows: 5, cols: 10, layout: Layout::Standard },
    StageConfig { rows: 7, cols: 11, layout: Layout::Diamond },
    StageConfig { rows: 4, cols: 16, layout: Layout::Wave },
    StageConfig { rows: 6, cols: 11, layout: Layout::Standard },
];

pub fn stage_config(stage: u32) -> &'static StageConfig {
    (stage as usize)
        .checked_sub(1)
        .and_then(|i| STAGES.get(i))
        .unwrap_or(&STAGES[0])
}

// ── Formation geometry ────────────────────────────────────────────────────────

pub const INVADER_WIDTH: f32 = 40.0;
pub const INVADER_HEIGHT: f32 = 30.0;
pub const CELL_SPACING: f32 = 50.0;
pub const FORMATION_ORIGIN_X: f32 = 50.0;
pub const FORMATION_ORIGIN_Y: f32 = 50.0;
pub const WAVE_AMPLITUDE: f32 = 20.0;
pub const WAVE_FREQUENCY: f32 = 0.5;

// ── Errors ────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ── Engine tunables ───────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub width: f32,
    pub height: f32,

    pub player_width: f32,
    pub player_height: f32,
    /// Distance from the bottom of the play area to the player's top edge.
    pub player_bottom_margin: f32,
    pub player_speed: f32,

    pub projectile_width: f32,
    pub projectile_height: f32,
    pub player_projectile_speed: f32,
    pub max_player_projectiles: usize,

    pub starting_hp: u32,
    pub starting_lives: u32,

    pub enemy_speed: f32,
    pub descent_step: f32,
    /// Added to enemy speed on every wall reversal.
    pub reversal_speed_increment: f32,
    /// Added to enemy speed on every stage clear.
    pub stage_speed_increment: f32,
    pub fire_probability: f64,
    pub stage_fire_probability_increment: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            player_width: 50.0,
            player_height: 30.0,
            player_bottom_margin: 50.0,
            player_speed: 5.0,
            projectile_width: 4.0,
            projectile_height: 10.0,
            player_projectile_speed: 7.0,
            max_player_projectiles: 3,
            starting_hp: 5,
            starting_lives: 3,
            enemy_speed: 1.0,
            descent_step: 20.0,
            reversal_speed_increment: 0.1,
            stage_speed_increment: 0.5,
            fire_probability: 0.001,
            stage_fire_probability_increment: 0.0005,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&raw)?;
        log::info!("loaded engine config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("player_speed", self.player_speed),
            ("projectile_width", self.projectile_width),
            ("projectile_height", self.projectile_height),
            ("player_projectile_speed", self.player_projectile_speed),
            ("enemy_speed", self.enemy_speed),
        ];
        if let Some((name, value)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
        }
        if self.player_width > self.width {
            return Err(ConfigError::Invalid("player is wider than the play area".into()));
        }
        if self.player_bottom_margin < self.player_height || self.player_bottom_margin > self.height {
            return Err(ConfigError::Invalid(format!(
                "player_bottom_margin must be within {}..={}",
                self.player_height, self.height
            )));
        }
        if self.max_player_projectiles == 0 {
            return Err(ConfigError::Invalid("max_player_projectiles must be at least 1".into()));
        }
        if self.starting_hp == 0 || self.starting_lives == 0 {
            return Err(ConfigError::Invalid("starting_hp and starting_lives must be at least 1".into()));
        }
        let non_negative = [
            ("descent_step", self.descent_step as f64),
            ("reversal_speed_increment", self.reversal_speed_increment as f64),
            ("stage_speed_increment", self.stage_speed_increment as f64),
            ("stage_fire_probability_increment", self.stage_fire_probability_increment),
        ];
        if let Some((name, value)) = non_negative.iter().find(|(_, v)| *v < 0.0) {
            return Err(ConfigError::Invalid(format!("{name} must not be negative, got {value}")));
        }
        if !(0.0..=1.0).contains(&self.fire_probability) {
            return Err(ConfigError::Invalid(format!(
                "fire_probability must be within 0..=1, got {}",
                self.fire_probability
            )));
        }
        Ok(())
    }
}
