/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable `Frame`. No game
/// logic is performed; this module only scales play-space rectangles onto the
/// terminal grid and translates them into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use space_invaders::entities::Color as Rgb;
use space_invaders::{DrawRect, EngineConfig, Frame, Hud};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_STAGE: Color = Color::Cyan;
const C_HUD_LIVES: Color = Color::Red;
const C_HUD_HP: Color = Color::Green;
const C_HINT: Color = Color::DarkGrey;

/// Terminal rows reserved above (HUD) and below (hint) the play area.
const HUD_ROWS: u16 = 1;
const HINT_ROWS: u16 = 1;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, frame: &Frame, config: &EngineConfig) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let view = Viewport::new(cols, rows, config);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_hud(out, &frame.hud, cols)?;
    draw_border(out, &view)?;
    for r in &frame.rects {
        draw_rect(out, &view, r)?;
    }
    draw_controls_hint(out, rows)?;

    if !frame.hud.running {
        draw_game_over(out, &frame.hud, cols, rows)?;
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Play-space → cell mapping ────────────────────────────────────────────────

struct Viewport {
    cols: u16,
    rows: u16,
    sx: f32,
    sy: f32,
}

impl Viewport {
    fn new(cols: u16, rows: u16, config: &EngineConfig) -> Self {
        let play_rows = rows.saturating_sub(HUD_ROWS + HINT_ROWS).max(1);
        Self {
            cols,
            rows: play_rows,
            sx: cols.saturating_sub(2).max(1) as f32 / config.width,
            sy: play_rows.saturating_sub(2).max(1) as f32 / config.height,
        }
    }

    /// Cell span `[start, end)` covering a play-space interval; never empty.
    fn span(lo: f32, hi: f32, scale: f32, limit: u16) -> (u16, u16) {
        let start = (lo * scale).floor().max(0.0) as u16;
        let end = ((hi * scale).ceil() as u16).max(start + 1);
        (start.min(limit), end.min(limit))
    }
}

fn draw_rect<W: Write>(out: &mut W, view: &Viewport, r: &DrawRect) -> std::io::Result<()> {
    let inner_w = view.cols.saturating_sub(2);
    let inner_h = view.rows.saturating_sub(2);
    let (x0, x1) = Viewport::span(r.rect.x, r.rect.x + r.rect.w, view.sx, inner_w);
    let (y0, y1) = Viewport::span(r.rect.y, r.rect.y + r.rect.h, view.sy, inner_h);
    if x0 >= x1 || y0 >= y1 {
        return Ok(());
    }

    out.queue(style::SetForegroundColor(to_term(r.color)))?;
    let fill = "█".repeat((x1 - x0) as usize);
    for row in y0..y1 {
        // +1 for the border column/row, +HUD_ROWS for the status line
        out.queue(cursor::MoveTo(x0 + 1, row + 1 + HUD_ROWS))?;
        out.queue(Print(&fill))?;
    }
    Ok(())
}

fn to_term(c: Rgb) -> Color {
    Color::Rgb { r: c.r, g: c.g, b: c.b }
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let w = view.cols as usize;
    let top = HUD_ROWS;
    let bottom = HUD_ROWS + view.rows.saturating_sub(1);

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, top))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, bottom))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in top + 1..bottom {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, hud: &Hud, cols: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>6}", hud.score)))?;

    let stage_str = format!("[ STAGE {} ]", hud.stage);
    let sx = (cols / 2).saturating_sub(stage_str.len() as u16 / 2);
    out.queue(cursor::MoveTo(sx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_STAGE))?;
    out.queue(Print(&stage_str))?;

    let hp_str = format!("HP:{:<2} ", hud.hp);
    let lives_str = format!("Lives:{}", "♥".repeat(hud.lives as usize));
    let width = (hp_str.chars().count() + lives_str.chars().count()) as u16;
    out.queue(cursor::MoveTo(cols.saturating_sub(width + 1), 0))?;
    out.queue(style::SetForegroundColor(C_HUD_HP))?;
    out.queue(Print(&hp_str))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_str))?;

    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, rows: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   R : Restart   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, hud: &Hud, cols: u16, rows: u16) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>6}", hud.final_score.unwrap_or(hud.score));
    let lines: [(&str, Color); 3] = [
        ("╔════════════════════╗", Color::Red),
        ("║    GAME  OVER      ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
    ];

    let cx = cols / 2;
    let total_rows = lines.len() as u16 + 2;
    let start_row = (rows / 2).saturating_sub(total_rows / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    let score_row = start_row + lines.len() as u16;
    out.queue(cursor::MoveTo(
        cx.saturating_sub(score_line.chars().count() as u16 / 2),
        score_row,
    ))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(&score_line))?;

    let hint = "R - Play Again  Q - Quit";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(hint.chars().count() as u16 / 2),
        score_row + 1,
    ))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;

    Ok(())
}
