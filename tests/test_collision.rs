use space_invaders::collision::*;
use space_invaders::config::EngineConfig;
use space_invaders::damage::{apply_hit, damage_player};
use space_invaders::entities::*;
use space_invaders::progression::init_state;

fn make_state() -> GameState {
    let mut s = init_state(&EngineConfig::default());
    s.invaders.clear();
    s
}

fn invader(kind: InvaderKind, x: f32, y: f32, index: usize) -> Invader {
    Invader::new(kind, Rect::new(x, y, 40.0, 30.0), index)
}

fn projectile(x: f32, y: f32, power: u32) -> Projectile {
    Projectile {
        rect: Rect::new(x, y, 4.0, 10.0),
        speed: 0.0,
        color: ENEMY_PROJECTILE_COLOR,
        power,
    }
}

// ── intersects ────────────────────────────────────────────────────────────────

#[test]
fn overlapping_rects_collide_both_ways() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5.0, 5.0, 10.0, 10.0);
    assert!(intersects(&a, &b));
    assert!(intersects(&b, &a));
}

#[test]
fn edge_touching_is_not_a_collision() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let right = Rect::new(10.0, 0.0, 10.0, 10.0);
    let below = Rect::new(0.0, 10.0, 10.0, 10.0);
    let corner = Rect::new(10.0, 10.0, 10.0, 10.0);
    for other in [right, below, corner] {
        assert!(!intersects(&a, &other));
        assert!(!intersects(&other, &a));
    }
}

#[test]
fn containment_collides() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    let inner = Rect::new(40.0, 40.0, 4.0, 10.0);
    assert!(intersects(&outer, &inner));
    assert!(intersects(&inner, &outer));
}

#[test]
fn separated_rects_do_not_collide() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(30.0, 0.0, 10.0, 10.0);
    assert!(!intersects(&a, &b));
}

// ── player shots vs invaders ──────────────────────────────────────────────────

#[test]
fn shot_destroys_one_hp_invader() {
    let mut s = make_state();
    s.invaders.push(invader(InvaderKind::Light, 100.0, 100.0, 4));
    s.player_projectiles.push(projectile(110.0, 110.0, 1));
    player_shots_vs_invaders(&mut s);

    assert!(s.invaders.is_empty());
    assert!(s.player_projectiles.is_empty());
    assert_eq!(s.score, 10);
    assert!(s.destroyed.contains(&4));
}

#[test]
fn shot_hits_at_most_one_invader() {
    let mut s = make_state();
    s.invaders.push(invader(InvaderKind::Light, 100.0, 100.0, 0));
    s.invaders.push(invader(InvaderKind::Light, 120.0, 100.0, 1));
    // overlaps both; scanned newest-first, so index 1 takes the hit
    s.player_projectiles.push(projectile(125.0, 105.0, 1));
    player_shots_vs_invaders(&mut s);

    assert_eq!(s.invaders.len(), 1);
    assert_eq!(s.invaders[0].original_index, 0);
    assert!(s.player_projectiles.is_empty());
    assert_eq!(s.score, 10);
}

#[test]
fn two_shots_finish_a_two_hp_invader() {
    let mut s = make_state();
    s.invaders.push(invader(InvaderKind::Medium, 100.0, 100.0, 0));
    s.player_projectiles.push(projectile(110.0, 110.0, 1));
    s.player_projectiles.push(projectile(120.0, 110.0, 1));
    player_shots_vs_invaders(&mut s);

    assert!(s.invaders.is_empty());
    assert!(s.player_projectiles.is_empty());
    assert_eq!(s.score, 20);
}

#[test]
fn missing_shot_is_kept() {
    let mut s = make_state();
    s.invaders.push(invader(InvaderKind::Light, 100.0, 100.0, 0));
    s.player_projectiles.push(projectile(300.0, 300.0, 1));
    player_shots_vs_invaders(&mut s);
    assert_eq!(s.invaders.len(), 1);
    assert_eq!(s.player_projectiles.len(), 1);
}

#[test]
fn damaged_invader_survives_and_darkens() {
    let mut s = make_state();
    s.invaders.push(invader(InvaderKind::Heavy, 100.0, 100.0, 0));
    s.player_projectiles.push(projectile(110.0, 110.0, 1));
    player_shots_vs_invaders(&mut s);

    let inv = &s.invaders[0];
    assert_eq!(inv.hp, 2);
    assert_eq!(inv.color, Color { r: 170, g: 0, b: 0 });
    assert_eq!(s.score, 0);
    assert!(s.destroyed.is_empty());
}

// ── enemy shots vs player ─────────────────────────────────────────────────────

#[test]
fn only_one_enemy_shot_lands_per_tick() {
    let mut s = make_state();
    let px = s.player.rect.x + 10.0;
    let py = s.player.rect.y + 5.0;
    s.enemy_projectiles.push(projectile(px, py, 1));
    s.enemy_projectiles.push(projectile(px + 10.0, py, 2));
    enemy_shots_vs_player(&mut s);

    // newest-first: the power-2 shot lands, the other stays in flight
    assert_eq!(s.hp, 3);
    assert_eq!(s.enemy_projectiles.len(), 1);
    assert_eq!(s.enemy_projectiles[0].power, 1);
}

#[test]
fn enemy_shot_touching_player_edge_misses() {
    let mut s = make_state();
    // bottom edge exactly on the player's top edge
    let y = s.player.rect.y - 10.0;
    s.enemy_projectiles.push(projectile(s.player.rect.x + 10.0, y, 5));
    enemy_shots_vs_player(&mut s);
    assert_eq!(s.hp, 5);
    assert_eq!(s.enemy_projectiles.len(), 1);
}

// ── invaders vs ground ────────────────────────────────────────────────────────

#[test]
fn invader_reaching_player_row_ends_run() {
    let mut s = make_state();
    s.score = 90;
    s.invaders.push(invader(InvaderKind::Light, 100.0, 520.0, 0)); // bottom = 550
    invaders_vs_ground(&mut s);
    assert_eq!(s.status, GameStatus::GameOver);
    assert_eq!(s.final_score, Some(90));
}

#[test]
fn invader_above_player_row_is_harmless() {
    let mut s = make_state();
    s.invaders.push(invader(InvaderKind::Light, 100.0, 519.0, 0)); // bottom = 549
    invaders_vs_ground(&mut s);
    assert!(s.is_running());
}

#[test]
fn resolve_runs_every_phase() {
    let mut s = make_state();
    s.invaders.push(invader(InvaderKind::Light, 100.0, 100.0, 0));
    s.invaders.push(invader(InvaderKind::Light, 600.0, 530.0, 1));
    s.player_projectiles.push(projectile(110.0, 110.0, 1));
    let px = s.player.rect.x + 10.0;
    s.enemy_projectiles.push(projectile(px, s.player.rect.y + 5.0, 1));
    resolve(&mut s);

    assert_eq!(s.score, 10);
    assert_eq!(s.hp, 4);
    assert_eq!(s.status, GameStatus::GameOver);
}

// ── damage ────────────────────────────────────────────────────────────────────

#[test]
fn apply_hit_reports_destruction() {
    let mut s = make_state();
    s.invaders.push(invader(InvaderKind::Medium, 100.0, 100.0, 3));
    assert!(!apply_hit(&mut s, 0));
    assert!(apply_hit(&mut s, 0));
    assert!(s.invaders.is_empty());
    assert_eq!(
        s.events,
        vec![
            GameEvent::InvaderHit { original_index: 3, hp: 1 },
            GameEvent::InvaderDestroyed { original_index: 3, points: 20 },
        ]
    );
}

#[test]
fn invader_hp_stays_positive_while_alive() {
    let mut s = make_state();
    s.invaders.push(invader(InvaderKind::Elite, 100.0, 100.0, 0));
    while !s.invaders.is_empty() {
        apply_hit(&mut s, 0);
        for inv in &s.invaders {
            assert!(inv.hp > 0 && inv.hp <= inv.max_hp);
        }
    }
    assert_eq!(s.score, InvaderKind::Elite.stats().points);
}

#[test]
fn player_damage_saturates_at_zero() {
    let mut s = make_state();
    s.hp = 2;
    damage_player(&mut s, 5);
    assert_eq!(s.hp, 0);
    assert_eq!(s.events, vec![GameEvent::PlayerHit { power: 5, hp: 0 }]);
}
