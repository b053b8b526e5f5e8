/// Per-tick movement, firing, and the tick pipeline.
///
/// Every phase takes the run state by `&mut` and, where needed, an injected
/// RNG handle, so callers control determinism (tests use a seeded RNG).

use rand::Rng;

use crate::collision;
use crate::config::EngineConfig;
use crate::entities::{
    GameEvent, GameState, InputSnapshot, Invader, Projectile, Rect, ENEMY_PROJECTILE_COLOR,
    PLAYER_PROJECTILE_COLOR,
};
use crate::progression;

// ── Tick pipeline ────────────────────────────────────────────────────────────

/// Advance the simulation by one fixed step.
///
/// Movement & firing, then collision (which applies damage), then
/// progression. Does nothing once the run is over.
pub fn tick(
    state: &mut GameState,
    input: &InputSnapshot,
    config: &EngineConfig,
    rng: &mut impl Rng,
) {
    if !state.is_running() {
        return;
    }
    state.events.clear();
    state.frame += 1;

    update_player(state, input, config);
    update_player_projectiles(state);
    update_invaders(state, config, rng);
    update_enemy_projectiles(state, config);

    collision::resolve(state);
    progression::check(state, config);
}

// ── Player ───────────────────────────────────────────────────────────────────

/// Move the player for held direction keys and handle a fire request.
pub fn update_player(state: &mut GameState, input: &InputSnapshot, config: &EngineConfig) {
    let player = &mut state.player;
    if input.left {
        player.rect.x -= player.speed;
    }
    if input.right {
        player.rect.x += player.speed;
    }
    player.rect.x = player.rect.x.clamp(0.0, config.width - player.rect.w);

    if input.fire {
        player_shoot(state, config);
    }
}

/// Fire a projectile from the player's centre, capped at
/// `max_player_projectiles` in flight. Returns whether a shot was spawned.
pub fn player_shoot(state: &mut GameState, config: &EngineConfig) -> bool {
    if state.player_projectiles.len() >= config.max_player_projectiles {
        return false;
    }
    let p = &state.player.rect;
    let rect = Rect::new(
        p.center_x() - config.projectile_width / 2.0,
        p.y - config.projectile_height,
        config.projectile_width,
        config.projectile_height,
    );
    state.player_projectiles.push(Projectile {
        rect,
        speed: -config.player_projectile_speed,
        color: PLAYER_PROJECTILE_COLOR,
        power: 1,
    });
    true
}

// ── Projectiles ──────────────────────────────────────────────────────────────

/// Move player shots up; drop those that crossed above the top edge.
pub fn update_player_projectiles(state: &mut GameState) {
    state.player_projectiles.retain_mut(|shot| {
        shot.rect.y += shot.speed;
        shot.rect.y > 0.0
    });
}

/// Move enemy shots down; drop those that crossed below the play height.
pub fn update_enemy_projectiles(state: &mut GameState, config: &EngineConfig) {
    state.enemy_projectiles.retain_mut(|shot| {
        shot.rect.y += shot.speed;
        shot.rect.y < config.height
    });
}

// ── Invaders ─────────────────────────────────────────────────────────────────

/// March every invader sideways and roll each one's fire trial.
///
/// A wall contact by any invader flips the wave once, after the whole pass:
/// direction reverses, everyone descends one step, and the march speeds up.
pub fn update_invaders(state: &mut GameState, config: &EngineConfig, rng: &mut impl Rng) {
    let dx = state.enemy_speed * state.direction;
    let mut reverse = false;

    for invader in state.invaders.iter_mut() {
        invader.rect.x += dx;
        if invader.rect.x <= 0.0 || invader.rect.x >= config.width - invader.rect.w {
            reverse = true;
        }
        if let Some(shot) = invader_fire(invader, state.fire_probability, config, rng) {
            log::debug!("invader {} fired (power {})", invader.original_index, shot.power);
            state.enemy_projectiles.push(shot);
        }
    }

    if reverse {
        state.direction = -state.direction;
        for invader in state.invaders.iter_mut() {
            invader.rect.y += state.descent_step;
        }
        state.enemy_speed += config.reversal_speed_increment;
        log::debug!(
            "wave reversed: direction {} speed {:.2}",
            state.direction,
            state.enemy_speed
        );
        state.events.push(GameEvent::WaveReversed {
            direction: state.direction,
        });
    }
}

/// One Bernoulli trial for `invader`; on success returns a projectile spawned
/// just below it, sized by its bullet power and moving at its bullet speed.
pub fn invader_fire(
    invader: &Invader,
    fallback_probability: f64,
    config: &EngineConfig,
    rng: &mut impl Rng,
) -> Option<Projectile> {
    let chance = invader
        .shoot_probability
        .unwrap_or(fallback_probability)
        .clamp(0.0, 1.0);
    if !rng.gen_bool(chance) {
        return None;
    }
    let power = invader.bullet_power.max(1);
    let extra = (power - 1) as f32;
    let w = config.projectile_width + 2.0 * extra;
    let h = config.projectile_height + 5.0 * extra;
    Some(Projectile {
        rect: Rect::new(invader.rect.center_x() - w / 2.0, invader.rect.bottom(), w, h),
        speed: invader.bullet_speed,
        color: ENEMY_PROJECTILE_COLOR,
        power,
    })
}
