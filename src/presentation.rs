//! Read-only view of the run for renderers.

use serde::Serialize;

use crate::entities::{Color, GameState, Rect};

/// One filled rectangle to draw.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DrawRect {
    pub rect: Rect,
    pub color: Color,
}

/// Scalar readouts shown beside the play area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Hud {
    pub score: u32,
    pub stage: u32,
    pub hp: u32,
    pub lives: u32,
    pub running: bool,
    /// Set once the run has ended.
    pub final_score: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frame {
    /// Player, player shots, enemy shots, invaders — in draw order.
    pub rects: Vec<DrawRect>,
    pub hud: Hud,
}

impl Frame {
    pub fn from_state(state: &GameState) -> Self {
        let mut rects = Vec::with_capacity(
            1 + state.player_projectiles.len() + state.enemy_projectiles.len() + state.invaders.len(),
        );
        rects.push(DrawRect {
            rect: state.player.rect,
            color: state.player.color,
        });
        rects.extend(
            state
                .player_projectiles
                .iter()
                .chain(&state.enemy_projectiles)
                .map(|p| DrawRect {
                    rect: p.rect,
                    color: p.color,
                }),
        );
        rects.extend(state.invaders.iter().map(|inv| DrawRect {
            rect: inv.rect,
            color: inv.color,
        }));

        Self {
            rects,
            hud: Hud {
                score: state.score,
                stage: state.stage,
                hp: state.hp,
                lives: state.lives,
                running: state.is_running(),
                final_score: state.final_score,
            },
        }
    }
}
