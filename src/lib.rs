//! Space Invaders simulation engine.
//!
//! Core modules:
//! - `entities`: pure data (rectangles, player, projectiles, invaders, run state)
//! - `config`: engine tunables and the fixed stage table
//! - `formation`: builds a stage's invader formation
//! - `compute`: per-tick movement, firing, and the `tick` pipeline
//! - `collision`: AABB tests and hit resolution
//! - `damage`: hit-point loss, scoring, damaged colours
//! - `progression`: life loss, stage clear, run end
//! - `engine`: owned state + injected RNG facade
//! - `presentation`: read-only draw list and HUD readouts

pub mod collision;
pub mod compute;
pub mod config;
pub mod damage;
pub mod engine;
pub mod entities;
pub mod formation;
pub mod presentation;
pub mod progression;

pub use config::{ConfigError, EngineConfig, Layout, StageConfig, STAGES};
pub use engine::Engine;
pub use entities::{GameEvent, GameState, GameStatus, InputSnapshot, Invader, InvaderKind};
pub use presentation::{DrawRect, Frame, Hud};
