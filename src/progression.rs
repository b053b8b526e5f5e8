//! Run lifecycle: initial state, life loss, stage clear and run end.

use std::collections::BTreeSet;

use crate::config::{EngineConfig, STAGES};
use crate::entities::{GameEvent, GameState, GameStatus, Player, Rect, PLAYER_COLOR};
use crate::formation;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Fresh run: stage 1, full lives and HP, zero score.
pub fn init_state(config: &EngineConfig) -> GameState {
    let player = Player {
        rect: Rect::new(
            config.width / 2.0 - config.player_width / 2.0,
            config.height - config.player_bottom_margin,
            config.player_width,
            config.player_height,
        ),
        speed: config.player_speed,
        color: PLAYER_COLOR,
    };
    GameState {
        player,
        player_projectiles: Vec::new(),
        enemy_projectiles: Vec::new(),
        invaders: formation::generate(1, config),
        score: 0,
        stage: 1,
        hp: config.starting_hp,
        lives: config.starting_lives,
        status: GameStatus::Playing,
        direction: 1.0,
        descent_step: config.descent_step,
        enemy_speed: config.enemy_speed,
        fire_probability: config.fire_probability,
        destroyed: BTreeSet::new(),
        final_score: None,
        frame: 0,
        events: Vec::new(),
    }
}

/// Discard the whole run and start over.
pub fn restart(state: &mut GameState, config: &EngineConfig) {
    log::info!("restarting run (previous score {})", state.score);
    *state = init_state(config);
}

/// Stage that follows `stage`, wrapping to 1 after the last configured one.
pub fn next_stage(stage: u32) -> u32 {
    if stage as usize >= STAGES.len() {
        1
    } else {
        stage + 1
    }
}

// ── Per-tick checks ──────────────────────────────────────────────────────────

/// Life loss first, then stage clear. Skipped once the run is over.
pub fn check(state: &mut GameState, config: &EngineConfig) {
    if !state.is_running() {
        return;
    }
    if state.hp == 0 {
        lose_life(state, config);
    }
    if state.is_running() && state.invaders.is_empty() {
        clear_stage(state, config);
    }
}

/// Terminal transition: the run stops and the score is frozen.
pub fn end_run(state: &mut GameState) {
    if !state.is_running() {
        return;
    }
    state.status = GameStatus::GameOver;
    state.final_score = Some(state.score);
    state.events.push(GameEvent::GameOver {
        final_score: state.score,
    });
    log::info!("game over on stage {} with score {}", state.stage, state.score);
}

fn lose_life(state: &mut GameState, config: &EngineConfig) {
    state.lives = state.lives.saturating_sub(1);
    state.events.push(GameEvent::LifeLost { lives: state.lives });
    log::info!("life lost, {} remaining", state.lives);

    if state.lives == 0 {
        end_run(state);
        return;
    }
    state.hp = config.starting_hp;
    reset_formation(state, config);
}

/// Rebuild the current stage after a life loss, minus every invader already
/// destroyed since the last stage clear. Score, stage and lives are untouched.
pub fn reset_formation(state: &mut GameState, config: &EngineConfig) {
    state.player_projectiles.clear();
    state.enemy_projectiles.clear();

    let mut invaders = formation::generate(state.stage, config);
    invaders.retain(|inv| !state.destroyed.contains(&inv.original_index));
    log::debug!(
        "formation reset: {} invaders restored, {} already destroyed",
        invaders.len(),
        state.destroyed.len()
    );
    state.invaders = invaders;
}

fn clear_stage(state: &mut GameState, config: &EngineConfig) {
    let cleared = state.stage;
    state.stage = next_stage(cleared);
    state.hp = config.starting_hp;
    state.destroyed.clear();
    state.invaders = formation::generate(state.stage, config);
    state.enemy_speed += config.stage_speed_increment;
    state.fire_probability += config.stage_fire_probability_increment;

    state.events.push(GameEvent::StageCleared {
        next_stage: state.stage,
    });
    log::info!(
        "stage {} cleared, entering stage {} (speed {:.2}, fire chance {:.4})",
        cleared,
        state.stage,
        state.enemy_speed,
        state.fire_probability
    );
}
