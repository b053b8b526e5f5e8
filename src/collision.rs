//! Collision resolution between projectiles, invaders and the player.
//!
//! Collections are walked newest-first so removal during the walk never
//! skips an element.

use crate::damage;
use crate::entities::{GameState, Rect};
use crate::progression;

/// Strict AABB overlap; edge contact alone is not a collision.
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.intersects(b)
}

/// Resolve all collisions for the current tick, in order:
/// player shots vs invaders, enemy shots vs player, invaders vs player row.
pub fn resolve(state: &mut GameState) {
    player_shots_vs_invaders(state);
    enemy_shots_vs_player(state);
    invaders_vs_ground(state);
}

/// Each player shot hits at most one invader and is consumed by the hit.
pub fn player_shots_vs_invaders(state: &mut GameState) {
    let mut i = state.player_projectiles.len();
    while i > 0 {
        i -= 1;
        let shot = state.player_projectiles[i].rect;
        let target = (0..state.invaders.len())
            .rev()
            .find(|&j| intersects(&shot, &state.invaders[j].rect));
        if let Some(j) = target {
            state.player_projectiles.remove(i);
            damage::apply_hit(state, j);
        }
    }
}

/// At most one enemy shot lands on the player per tick.
pub fn enemy_shots_vs_player(state: &mut GameState) {
    let player = state.player.rect;
    let hit = (0..state.enemy_projectiles.len())
        .rev()
        .find(|&i| intersects(&state.enemy_projectiles[i].rect, &player));
    if let Some(i) = hit {
        let shot = state.enemy_projectiles.remove(i);
        damage::damage_player(state, shot.power);
    }
}

/// An invader whose lower edge reaches the player's top ends the run.
pub fn invaders_vs_ground(state: &mut GameState) {
    let player_y = state.player.rect.y;
    let landed = state
        .invaders
        .iter()
        .find(|inv| inv.rect.bottom() >= player_y)
        .map(|inv| (inv.original_index, inv.rect.bottom()));
    if let Some((index, bottom)) = landed {
        log::info!("invader {index} reached the player's row at y={bottom:.1}");
        progression::end_run(state);
    }
}
