//! Hit-point loss and scoring.

use crate::entities::{damaged_color, GameEvent, GameState};

/// Apply one point of damage to the invader at `idx`.
///
/// A defeated invader is scored, recorded in the destroyed set and removed
/// in the same call; a surviving one darkens. Returns whether it was destroyed.
pub fn apply_hit(state: &mut GameState, idx: usize) -> bool {
    let invader = &mut state.invaders[idx];
    invader.hp = invader.hp.saturating_sub(1);
    log::trace!(
        "invader {} hit: hp {}/{}",
        invader.original_index,
        invader.hp,
        invader.max_hp
    );

    if invader.hp > 0 {
        invader.color = damaged_color(invader.kind, invader.hp, invader.max_hp);
        let event = GameEvent::InvaderHit {
            original_index: invader.original_index,
            hp: invader.hp,
        };
        state.events.push(event);
        return false;
    }

    let invader = state.invaders.remove(idx);
    state.score += invader.points;
    state.destroyed.insert(invader.original_index);
    state.events.push(GameEvent::InvaderDestroyed {
        original_index: invader.original_index,
        points: invader.points,
    });
    true
}

/// Remove `power` from the run's HP buffer (never below zero).
pub fn damage_player(state: &mut GameState, power: u32) {
    state.hp = state.hp.saturating_sub(power);
    state.events.push(GameEvent::PlayerHit {
        power,
        hp: state.hp,
    });
    log::debug!("player hit for {power}, hp now {}", state.hp);
}
