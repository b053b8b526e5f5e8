//! Formation generator — builds a stage's invaders in generation order.
//!
//! `original_index` counts emitted invaders from 0, so a stage's indices are
//! always the contiguous range `0..invaders.len()` whatever cells were skipped.

use crate::config::{
    stage_config, EngineConfig, Layout, StageConfig, CELL_SPACING, FORMATION_ORIGIN_X,
    FORMATION_ORIGIN_Y, INVADER_HEIGHT, INVADER_WIDTH, WAVE_AMPLITUDE, WAVE_FREQUENCY,
};
use crate::entities::{Invader, InvaderKind, Rect};

/// Build the full formation for `stage`. Stages outside the table use the first entry.
pub fn generate(stage: u32, config: &EngineConfig) -> Vec<Invader> {
    let stage_cfg = stage_config(stage);
    let invaders = build(stage_cfg, config);
    log::info!(
        "stage {}: {:?} {}x{} -> {} invaders",
        stage,
        stage_cfg.layout,
        stage_cfg.rows,
        stage_cfg.cols,
        invaders.len()
    );
    invaders
}

/// Build a formation from an explicit stage entry.
pub fn build(stage: &StageConfig, config: &EngineConfig) -> Vec<Invader> {
    assert!(
        stage.rows > 0 && stage.cols > 0,
        "stage entry must have at least one row and one column: {stage:?}"
    );
    let mut out = Formation::new(config.width);
    match stage.layout {
        Layout::Standard => standard(stage, &mut out),
        Layout::Diamond => diamond(stage, &mut out),
        Layout::Wave => wave(stage, &mut out),
    }
    out.invaders
}

/// Three-tier row bands shared by the grid layouts.
fn row_band(row: usize, tiers: [InvaderKind; 3]) -> InvaderKind {
    match row {
        0 | 1 => tiers[0],
        2 | 3 => tiers[1],
        _ => tiers[2],
    }
}

// ── Layouts ───────────────────────────────────────────────────────────────────

fn standard(stage: &StageConfig, out: &mut Formation) {
    let tiers = [InvaderKind::Heavy, InvaderKind::Medium, InvaderKind::Light];
    for row in 0..stage.rows {
        for col in 0..stage.cols {
            let x = FORMATION_ORIGIN_X + col as f32 * CELL_SPACING;
            let y = FORMATION_ORIGIN_Y + row as f32 * CELL_SPACING;
            out.push(row_band(row, tiers), x, y);
        }
    }
}

fn diamond(stage: &StageConfig, out: &mut Formation) {
    let tiers = [InvaderKind::Elite, InvaderKind::Guard, InvaderKind::Scout];
    for row in 0..stage.rows {
        let width = (2 * (row + 1).min(stage.rows - row)).min(stage.cols);
        let span = (width - 1) as f32 * CELL_SPACING + INVADER_WIDTH;
        let start_x = (out.play_width - span) / 2.0;
        let y = FORMATION_ORIGIN_Y + row as f32 * CELL_SPACING;
        for i in 0..width {
            let x = start_x + i as f32 * CELL_SPACING;
            if out.fits(x) {
                out.push(row_band(row, tiers), x, y);
            }
        }
    }
}

fn wave(stage: &StageConfig, out: &mut Formation) {
    for row in 0..stage.rows {
        for col in 0..stage.cols {
            let x = FORMATION_ORIGIN_X + col as f32 * CELL_SPACING;
            if !out.fits(x) {
                continue;
            }
            let offset = WAVE_AMPLITUDE * (col as f32 * WAVE_FREQUENCY).sin();
            let y = FORMATION_ORIGIN_Y + row as f32 * CELL_SPACING + offset;
            let kind = match col % 3 {
                0 => InvaderKind::Bomber,
                1 => InvaderKind::Sniper,
                _ => InvaderKind::Rapid,
            };
            out.push(kind, x, y);
        }
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

struct Formation {
    play_width: f32,
    invaders: Vec<Invader>,
}

impl Formation {
    fn new(play_width: f32) -> Self {
        Self {
            play_width,
            invaders: Vec::new(),
        }
    }

    /// Whether an invader at `x` lies fully inside the play width.
    fn fits(&self, x: f32) -> bool {
        x >= 0.0 && x + INVADER_WIDTH <= self.play_width
    }

    fn push(&mut self, kind: InvaderKind, x: f32, y: f32) {
        let index = self.invaders.len();
        let rect = Rect::new(x, y, INVADER_WIDTH, INVADER_HEIGHT);
        self.invaders.push(Invader::new(kind, rect, index));
    }
}
