/// All game entity types — pure data, no simulation logic.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle, top-left origin, y grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        assert!(w > 0.0 && h > 0.0, "rect dimensions must be positive: {w}x{h}");
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    /// Strict AABB overlap. Rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

// ── Colour ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Every channel multiplied by `ratio` (clamped to 0..=1).
    pub fn scaled(self, ratio: f32) -> Self {
        let ratio = ratio.clamp(0.0, 1.0);
        let ch = |c: u8| (c as f32 * ratio).round() as u8;
        Self {
            r: ch(self.r),
            g: ch(self.g),
            b: ch(self.b),
        }
    }
}

pub const PLAYER_COLOR: Color = Color::from_hex(0x00ff00);
pub const PLAYER_PROJECTILE_COLOR: Color = Color::from_hex(0xffffff);
pub const ENEMY_PROJECTILE_COLOR: Color = Color::from_hex(0xff0000);

// ── Invader types ─────────────────────────────────────────────────────────────

/// Closed set of invader types. Each formation layout uses its own three.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InvaderKind {
    // Standard grid
    Heavy,
    Medium,
    Light,
    // Diamond
    Elite,
    Guard,
    Scout,
    // Wave
    Bomber,
    Sniper,
    Rapid,
}

/// Per-type stat profile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvaderStats {
    pub points: u32,
    pub bullet_power: u32,
    pub bullet_speed: f32,
    /// `None` means "use the run's current base fire probability".
    pub shoot_probability: Option<f64>,
    pub max_hp: u32,
}

impl InvaderKind {
    pub fn stats(self) -> InvaderStats {
        let (points, bullet_power, bullet_speed, shoot_probability, max_hp) = match self {
            InvaderKind::Heavy => (30, 2, 3.0, Some(0.002), 3),
            InvaderKind::Medium => (20, 1, 3.0, None, 2),
            InvaderKind::Light => (10, 1, 3.0, None, 1),
            InvaderKind::Elite => (40, 2, 4.0, Some(0.003), 4),
            InvaderKind::Guard => (25, 1, 3.5, None, 3),
            InvaderKind::Scout => (15, 1, 5.0, None, 1),
            InvaderKind::Bomber => (35, 3, 2.0, Some(0.002), 3),
            InvaderKind::Sniper => (25, 1, 6.0, Some(0.0025), 2),
            InvaderKind::Rapid => (15, 1, 4.0, Some(0.004), 1),
        };
        InvaderStats {
            points,
            bullet_power,
            bullet_speed,
            shoot_probability,
            max_hp,
        }
    }

    pub fn base_color(self) -> Color {
        match self {
            InvaderKind::Heavy => Color::from_hex(0xff0000),
            InvaderKind::Medium => Color::from_hex(0xffff00),
            InvaderKind::Light => Color::from_hex(0x00ffff),
            InvaderKind::Elite => Color::from_hex(0xff00ff),
            InvaderKind::Guard => Color::from_hex(0xff8800),
            InvaderKind::Scout => Color::from_hex(0x00ff88),
            InvaderKind::Bomber => Color::from_hex(0x9933ff),
            InvaderKind::Sniper => Color::from_hex(0x66ccff),
            InvaderKind::Rapid => Color::from_hex(0xffcc00),
        }
    }
}

/// Base colour darkened in proportion to the remaining hit-point ratio.
pub fn damaged_color(kind: InvaderKind, hp: u32, max_hp: u32) -> Color {
    if max_hp == 0 {
        return kind.base_color();
    }
    kind.base_color().scaled(hp as f32 / max_hp as f32)
}

// ── Player & projectiles ──────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    pub speed: f32,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub rect: Rect,
    /// Vertical velocity per tick; negative travels up.
    pub speed: f32,
    pub color: Color,
    /// Run HP removed when an enemy projectile hits the player.
    pub power: u32,
}

// ── Invaders ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Invader {
    pub rect: Rect,
    pub kind: InvaderKind,
    pub color: Color,
    pub points: u32,
    /// Generation-order index among emitted invaders; contiguous `0..n` per stage.
    pub original_index: usize,
    pub bullet_power: u32,
    pub bullet_speed: f32,
    pub shoot_probability: Option<f64>,
    pub max_hp: u32,
    pub hp: u32,
}

impl Invader {
    pub fn new(kind: InvaderKind, rect: Rect, original_index: usize) -> Self {
        let stats = kind.stats();
        Self {
            rect,
            kind,
            color: kind.base_color(),
            points: stats.points,
            original_index,
            bullet_power: stats.bullet_power,
            bullet_speed: stats.bullet_speed,
            shoot_probability: stats.shoot_probability,
            max_hp: stats.max_hp,
            hp: stats.max_hp,
        }
    }
}

// ── Input & events ────────────────────────────────────────────────────────────

/// Key state sampled once per tick by the driver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// Things that happened during the most recent tick.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum GameEvent {
    InvaderHit { original_index: usize, hp: u32 },
    InvaderDestroyed { original_index: usize, points: u32 },
    PlayerHit { power: u32, hp: u32 },
    WaveReversed { direction: f32 },
    LifeLost { lives: u32 },
    StageCleared { next_stage: u32 },
    GameOver { final_score: u32 },
}

// ── Run state ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// The entire run state, owned by the driver and passed by `&mut` to each phase.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub player_projectiles: Vec<Projectile>,
    pub enemy_projectiles: Vec<Projectile>,
    pub invaders: Vec<Invader>,
    pub score: u32,
    /// 1-based, wraps after the last configured stage.
    pub stage: u32,
    /// Run damage buffer, distinct from an invader's hp.
    pub hp: u32,
    pub lives: u32,
    pub status: GameStatus,
    /// +1.0 moving right, -1.0 moving left.
    pub direction: f32,
    pub descent_step: f32,
    pub enemy_speed: f32,
    /// Fallback per-tick fire probability for invaders without their own.
    pub fire_probability: f64,
    /// Original indices destroyed since the last stage clear.
    pub destroyed: BTreeSet<usize>,
    pub final_score: Option<u32>,
    pub frame: u64,
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Playing
    }
}
