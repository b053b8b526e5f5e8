use space_invaders::entities::*;

const ALL_KINDS: [InvaderKind; 9] = [
    InvaderKind::Heavy,
    InvaderKind::Medium,
    InvaderKind::Light,
    InvaderKind::Elite,
    InvaderKind::Guard,
    InvaderKind::Scout,
    InvaderKind::Bomber,
    InvaderKind::Sniper,
    InvaderKind::Rapid,
];

// ── Rect ──────────────────────────────────────────────────────────────────────

#[test]
fn rect_edges() {
    let r = Rect::new(10.0, 20.0, 40.0, 30.0);
    assert_eq!(r.right(), 50.0);
    assert_eq!(r.bottom(), 50.0);
    assert_eq!(r.center_x(), 30.0);
}

#[test]
#[should_panic]
fn rect_rejects_zero_width() {
    let _ = Rect::new(0.0, 0.0, 0.0, 10.0);
}

#[test]
#[should_panic]
fn rect_rejects_negative_height() {
    let _ = Rect::new(0.0, 0.0, 10.0, -1.0);
}

// ── Colour ────────────────────────────────────────────────────────────────────

#[test]
fn color_from_hex_splits_channels() {
    let c = Color::from_hex(0x12ab34);
    assert_eq!(c, Color { r: 0x12, g: 0xab, b: 0x34 });
}

#[test]
fn color_scaled_darkens_each_channel() {
    let c = Color::from_hex(0xff8800).scaled(0.5);
    assert_eq!(c, Color { r: 128, g: 68, b: 0 });
}

#[test]
fn color_scaled_clamps_ratio() {
    let base = Color::from_hex(0x808080);
    assert_eq!(base.scaled(2.0), base);
    assert_eq!(base.scaled(-1.0), Color { r: 0, g: 0, b: 0 });
}

#[test]
fn damaged_color_tracks_hp_ratio() {
    assert_eq!(damaged_color(InvaderKind::Heavy, 3, 3), InvaderKind::Heavy.base_color());
    assert_eq!(damaged_color(InvaderKind::Heavy, 2, 3), Color { r: 170, g: 0, b: 0 });
    assert_eq!(damaged_color(InvaderKind::Heavy, 1, 3), Color { r: 85, g: 0, b: 0 });
}

// ── Invader types ─────────────────────────────────────────────────────────────

#[test]
fn every_kind_has_a_sane_profile() {
    for kind in ALL_KINDS {
        let s = kind.stats();
        assert!(s.max_hp > 0, "{kind:?}");
        assert!(s.points > 0, "{kind:?}");
        assert!(s.bullet_power > 0, "{kind:?}");
        assert!(s.bullet_speed > 0.0, "{kind:?}");
        if let Some(p) = s.shoot_probability {
            assert!((0.0..=1.0).contains(&p), "{kind:?}");
        }
    }
}

#[test]
fn higher_standard_bands_are_tougher() {
    let heavy = InvaderKind::Heavy.stats();
    let medium = InvaderKind::Medium.stats();
    let light = InvaderKind::Light.stats();
    assert!(heavy.points > medium.points && medium.points > light.points);
    assert!(heavy.bullet_power >= medium.bullet_power);
    assert!(heavy.max_hp > medium.max_hp && medium.max_hp > light.max_hp);
}

#[test]
fn layout_palettes_are_distinct() {
    let standard = [InvaderKind::Heavy, InvaderKind::Medium, InvaderKind::Light];
    let diamond = [InvaderKind::Elite, InvaderKind::Guard, InvaderKind::Scout];
    for s in standard {
        for d in diamond {
            assert_ne!(s.base_color(), d.base_color());
        }
    }
}

#[test]
fn invader_new_copies_stat_profile() {
    let rect = Rect::new(5.0, 5.0, 40.0, 30.0);
    let inv = Invader::new(InvaderKind::Elite, rect, 7);
    let stats = InvaderKind::Elite.stats();
    assert_eq!(inv.original_index, 7);
    assert_eq!(inv.points, stats.points);
    assert_eq!(inv.bullet_power, stats.bullet_power);
    assert_eq!(inv.shoot_probability, stats.shoot_probability);
    assert_eq!(inv.hp, stats.max_hp);
    assert_eq!(inv.max_hp, stats.max_hp);
    assert_eq!(inv.color, InvaderKind::Elite.base_color());
}

#[test]
fn input_snapshot_defaults_to_idle() {
    let input = InputSnapshot::default();
    assert!(!input.left && !input.right && !input.fire);
}
