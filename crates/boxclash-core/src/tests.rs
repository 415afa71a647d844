use crate::arena::{layout, Arena};
use crate::commands::MatchCommand;
use crate::components::Buffs;
use crate::constants::*;
use crate::enums::*;
use crate::geometry::{penetration, push_out, split_apart, Axis};
use crate::setup::{MatchSetup, SetupError, TeamConfig};
use crate::state::MatchSnapshot;
use crate::types::{Position, Rect, SideId, SimTime, TeamId, Velocity};

// ---- Geometry ----

#[test]
fn test_touching_rects_do_not_overlap() {
    let a = Rect::new(0.0, 0.0, 20.0, 20.0);
    let b = Rect::new(20.0, 0.0, 20.0, 20.0);
    assert!(!a.overlaps(&b));
    assert!(penetration(&a, &b).is_none());
}

#[test]
fn test_penetration_picks_smaller_axis() {
    let agent = Rect::new(95.0, 110.0, 20.0, 20.0);
    let wall = Rect::new(100.0, 100.0, 100.0, 100.0);

    // 15 px deep along X, 30 px along Y.
    let pen = penetration(&agent, &wall).unwrap();
    assert_eq!(pen.axis, Axis::X);
    assert!((pen.depth - 15.0).abs() < 1e-9);

    let pos = push_out(&agent, &wall, pen.axis);
    assert!((pos.x - 80.0).abs() < 1e-9, "pushed to left edge, got {}", pos.x);
    assert!((pos.y - 110.0).abs() < 1e-9);
    assert!(!Rect::square(pos, 20.0).overlaps(&wall));
}

#[test]
fn test_penetration_tie_resolves_vertically() {
    let a = Rect::new(0.0, 0.0, 20.0, 20.0);
    let b = Rect::new(10.0, 10.0, 20.0, 20.0);
    let pen = penetration(&a, &b).unwrap();
    assert_eq!(pen.axis, Axis::Y);
}

#[test]
fn test_push_out_from_below() {
    let agent = Rect::new(140.0, 195.0, 20.0, 20.0);
    let wall = Rect::new(100.0, 100.0, 100.0, 100.0);
    let pen = penetration(&agent, &wall).unwrap();
    assert_eq!(pen.axis, Axis::Y);
    let pos = push_out(&agent, &wall, pen.axis);
    assert!((pos.y - 200.0).abs() < 1e-9);
}

#[test]
fn test_split_apart_is_symmetric() {
    let a = Rect::new(0.0, 0.0, 20.0, 20.0);
    let b = Rect::new(12.0, 4.0, 20.0, 20.0);
    let pen = penetration(&a, &b).unwrap();
    assert_eq!(pen.axis, Axis::X);

    let (da, db) = split_apart(&a, &b, pen);
    assert!((da.x + 4.0).abs() < 1e-9);
    assert!((db.x - 4.0).abs() < 1e-9);

    let a2 = Rect::new(a.x + da.x, a.y + da.y, 20.0, 20.0);
    let b2 = Rect::new(b.x + db.x, b.y + db.y, 20.0, 20.0);
    assert!(!a2.overlaps(&b2));
}

#[test]
fn test_contains_point_is_strict() {
    let r = Rect::new(10.0, 10.0, 20.0, 20.0);
    assert!(r.contains_point(&Position::new(15.0, 15.0)));
    assert!(!r.contains_point(&Position::new(10.0, 15.0)));
    assert!(!r.contains_point(&Position::new(30.0, 15.0)));
}

#[test]
fn test_velocity_from_angle() {
    let v = Velocity::from_angle(std::f64::consts::FRAC_PI_2, 4.0);
    assert!(v.x.abs() < 1e-9);
    assert!((v.y - 4.0).abs() < 1e-9);
    assert!((v.speed() - 4.0).abs() < 1e-9);
    assert!((v.heading() - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
}

#[test]
fn test_sim_time_scaled_advance() {
    let mut t = SimTime::default();
    for _ in 0..TICK_RATE {
        t.advance(2.0);
    }
    assert_eq!(t.tick, TICK_RATE as u64);
    assert!((t.elapsed_secs - 2.0).abs() < 1e-9);
}

// ---- Arena catalog ----

#[test]
fn test_arena_catalog_counts() {
    assert!(layout(ArenaId::Empty).is_empty());
    assert_eq!(layout(ArenaId::CenterPillar).len(), 1);
    assert_eq!(layout(ArenaId::SimpleMaze).len(), 2);
    assert_eq!(layout(ArenaId::Fortress).len(), 4);
    assert_eq!(layout(ArenaId::TwoPillars).len(), 2);
    assert_eq!(layout(ArenaId::AsteroidField).len(), 9);
}

#[test]
fn test_arena_obstacles_inside_bounds() {
    for id in ArenaId::ALL {
        let arena = Arena::from_catalog(id);
        for obs in &arena.obstacles {
            assert!(obs.x >= 0.0 && obs.y >= 0.0, "{id:?}: {obs:?}");
            assert!(obs.right() <= arena.width && obs.bottom() <= arena.height);
        }
    }
}

#[test]
fn test_center_pillar_is_centered() {
    let pillar = layout(ArenaId::CenterPillar)[0];
    let c = pillar.center();
    assert!((c.x - ARENA_WIDTH / 2.0).abs() < 1e-9);
    assert!((c.y - ARENA_HEIGHT / 2.0).abs() < 1e-9);
}

#[test]
fn test_arena_names_parse() {
    for id in ArenaId::ALL {
        assert_eq!(id.name().parse::<ArenaId>().unwrap(), id);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.name()));
    }
    assert_eq!(
        "moon_base".parse::<ArenaId>(),
        Err(SetupError::UnknownArena("moon_base".into()))
    );
}

#[test]
fn test_power_up_names_parse() {
    for kind in PowerUpKind::ALL {
        assert_eq!(kind.name().parse::<PowerUpKind>().unwrap(), kind);
    }
    assert!("shield".parse::<PowerUpKind>().is_err());
    assert_eq!(PowerUpKind::Heal.buff(), None);
    assert_eq!(PowerUpKind::HomingShot.buff(), Some(BuffKind::Homing));
}

// ---- Setup validation ----

fn team(id: u32, side: u32, members: u32) -> TeamConfig {
    TeamConfig {
        id: TeamId(id),
        name: format!("Team {id}"),
        color: "#ffffff".into(),
        members,
        side: SideId(side),
    }
}

#[test]
fn test_two_team_setup_is_valid() {
    let setup = MatchSetup::two_teams(5, 5, ArenaId::Fortress);
    assert_eq!(setup.validate(), Ok(()));
    assert_eq!(setup.sides(), vec![SideId(0), SideId(1)]);
    assert_eq!(setup.total_agents(), 10);
    assert!(setup.enabled_power_ups().is_empty());
}

#[test]
fn test_allied_teams_share_side() {
    let setup = MatchSetup {
        teams: vec![team(0, 7, 2), team(1, 3, 2), team(2, 7, 1)],
        arena: ArenaId::Empty,
        power_ups: None,
    };
    assert_eq!(setup.validate(), Ok(()));
    assert_eq!(setup.sides(), vec![SideId(7), SideId(3)]);
    assert_eq!(setup.team_names(SideId(7)), vec!["Team 0", "Team 2"]);
}

#[test]
fn test_single_side_rejected() {
    let setup = MatchSetup {
        teams: vec![team(0, 1, 2), team(1, 1, 2)],
        arena: ArenaId::Empty,
        power_ups: None,
    };
    assert_eq!(
        setup.validate(),
        Err(SetupError::NotEnoughSides { found: 1 })
    );
}

#[test]
fn test_empty_team_rejected() {
    let setup = MatchSetup::two_teams(3, 0, ArenaId::Empty);
    assert!(matches!(
        setup.validate(),
        Err(SetupError::EmptyTeam { .. })
    ));
}

#[test]
fn test_duplicate_team_id_rejected() {
    let setup = MatchSetup {
        teams: vec![team(4, 0, 1), team(4, 1, 1)],
        arena: ArenaId::Empty,
        power_ups: None,
    };
    assert_eq!(setup.validate(), Err(SetupError::DuplicateTeamId(4)));
}

#[test]
fn test_empty_power_up_set_rejected() {
    let setup = MatchSetup::two_teams(1, 1, ArenaId::Empty).with_power_ups([]);
    assert_eq!(setup.validate(), Err(SetupError::NoPowerUpsEnabled));

    let setup = MatchSetup::two_teams(1, 1, ArenaId::Empty).with_power_ups([PowerUpKind::Heal]);
    assert_eq!(setup.validate(), Ok(()));
}

#[test]
fn test_with_power_ups_keeps_each_kind_once() {
    let setup = MatchSetup::two_teams(1, 1, ArenaId::Empty).with_power_ups([
        PowerUpKind::Heal,
        PowerUpKind::Heal,
        PowerUpKind::Damage,
        PowerUpKind::Heal,
    ]);
    assert_eq!(
        setup.enabled_power_ups(),
        &[PowerUpKind::Heal, PowerUpKind::Damage]
    );
}

#[test]
fn test_too_many_agents_rejected() {
    let setup = MatchSetup::two_teams(MAX_AGENTS, 1, ArenaId::Empty);
    assert!(matches!(
        setup.validate(),
        Err(SetupError::TooManyAgents { .. })
    ));
}

#[test]
fn test_setup_from_json_defaults() {
    let json = r##"{
        "teams": [
            {"id": 0, "name": "Cats", "color": "#ff0000", "members": 3, "side": 0},
            {"id": 1, "name": "Dogs", "color": "#0000ff", "members": 3, "side": 1}
        ]
    }"##;
    let setup: MatchSetup = serde_json::from_str(json).unwrap();
    assert_eq!(setup.arena, ArenaId::Empty);
    assert_eq!(setup.power_ups, None);
    assert_eq!(setup.validate(), Ok(()));

    let json = r##"{
        "teams": [],
        "arena": "asteroid_field",
        "power_ups": ["heal", "triple_shot"]
    }"##;
    let setup: MatchSetup = serde_json::from_str(json).unwrap();
    assert_eq!(setup.arena, ArenaId::AsteroidField);
    assert_eq!(
        setup.enabled_power_ups(),
        &[PowerUpKind::Heal, PowerUpKind::TripleShot]
    );
}

// ---- Serde shapes ----

#[test]
fn test_command_json_shape() {
    let json = serde_json::to_string(&MatchCommand::SetTimeScale { scale: 2.0 }).unwrap();
    assert_eq!(json, r#"{"type":"SetTimeScale","scale":2.0}"#);

    let back: MatchCommand = serde_json::from_str(r#"{"type":"Rematch"}"#).unwrap();
    assert_eq!(back, MatchCommand::Rematch);
}

#[test]
fn test_match_result_json_shape() {
    let draw = serde_json::to_string(&MatchResult::Draw).unwrap();
    assert_eq!(draw, r#"{"type":"Draw"}"#);

    let win = MatchResult::Victory {
        side: SideId(1),
        team_names: vec!["Red Team".into()],
    };
    let json = serde_json::to_string(&win).unwrap();
    let back: MatchResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, win);
}

#[test]
fn test_default_snapshot_serializes() {
    let snap = MatchSnapshot::default();
    let json = serde_json::to_string(&snap).unwrap();
    let back: MatchSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.phase, GamePhase::Setup);
    assert!(back.result.is_none());
}

// ---- Buff table ----

#[test]
fn test_buff_table_accessors() {
    let mut buffs = Buffs::default();
    for kind in BuffKind::ALL {
        assert!(!buffs.is_active(kind));
    }

    *buffs.remaining_mut(BuffKind::TripleShot) = BUFF_DURATION;
    assert!(buffs.is_active(BuffKind::TripleShot));
    assert!(!buffs.is_active(BuffKind::Damage));
    assert_eq!(buffs.remaining(BuffKind::TripleShot), BUFF_DURATION);
}
