//! Whole-match tests driving a [`FightSession`] the way a host does.

use stickbrawl::events::hit::Collider;
use stickbrawl::game::FightSession;
use stickbrawl::moves::bodypart::BodyPart;
use stickbrawl::moves::fightmove::Move;
use stickbrawl::moves::pose::Pose;
use stickbrawl::moves::recorder::Recorder;
use stickbrawl::resources::fightconfig::FightConfig;
use stickbrawl::resources::matchstate::MatchPhase;
use stickbrawl::resources::movelibrary::MoveLibrary;

const DT: f32 = 1.0 / 60.0;

fn library() -> MoveLibrary {
    let mut library = MoveLibrary::new();

    let stance = Pose::new().with(BodyPart::UpperRightArm, 300.0);
    let mut recorder = Recorder::new(Move::new(""), stance);
    for angle in [330.0, 0.0, 30.0, 60.0, 90.0] {
        recorder.record_pose(Pose::new().with(BodyPart::UpperRightArm, angle));
    }
    assert!(recorder.is_done());
    recorder.set_speed(100);
    recorder.set_strength(100);
    recorder.set_active_part(BodyPart::RightHand);
    recorder.save(&mut library, "Jab").unwrap();

    let mut guard = Move::new("Guard");
    guard.add_key_pose(Pose::new().with(BodyPart::UpperLeftArm, 200.0)).unwrap();
    guard.add_key_pose(Pose::new().with(BodyPart::UpperLeftArm, 90.0)).unwrap();
    guard.set_block_move(true);
    guard.set_active_part(BodyPart::LeftHand);
    library.add(&guard).unwrap();

    library
}

fn config(intro_freeze: f32, health: i32) -> FightConfig {
    FightConfig {
        intro_freeze,
        health,
        ..FightConfig::new()
    }
}

fn session(intro_freeze: f32, health: i32) -> FightSession {
    let mut session = FightSession::new(config(intro_freeze, health), library());
    assert_eq!(session.equip(1, "Jab").unwrap().as_deref(), Some("u"));
    assert_eq!(session.equip(1, "Guard").unwrap().as_deref(), Some("i"));
    assert_eq!(session.equip(2, "Jab").unwrap().as_deref(), Some("r"));
    assert_eq!(session.equip(2, "Guard").unwrap().as_deref(), Some("t"));
    session
}

#[test]
fn button_press_starts_bound_move() {
    let mut s = session(0.0, 600);

    s.press("u");
    assert_eq!(s.move_player(1).unwrap().current_move().unwrap().name(), "Jab");
    assert!(s.move_player(2).unwrap().current_move().is_none());

    s.press("t");
    assert_eq!(s.move_player(2).unwrap().current_move().unwrap().name(), "Guard");

    // unbound buttons do nothing
    s.press("o");
    s.press("z");
    assert_eq!(s.move_player(1).unwrap().current_move().unwrap().name(), "Jab");
}

#[test]
fn equip_rejects_unknown_and_duplicate_moves() {
    let mut s = session(0.0, 600);

    assert!(s.equip(1, "Roundhouse").is_err());
    assert_eq!(s.equip(1, "Jab").unwrap(), None);
    assert!(s.equip(3, "Jab").is_err());
    assert_eq!(s.fighter(1).unwrap().move_names(), vec!["Guard", "Jab"]);
}

#[test]
fn unequip_frees_the_button_for_that_fighter_only() {
    let mut s = session(0.0, 600);

    assert!(s.unequip(1, "Jab"));
    assert!(!s.unequip(1, "Jab"));
    assert_eq!(s.bindings().lookup("u"), None);
    assert_eq!(s.bindings().lookup("r"), Some((2, "Jab")));

    s.press("u");
    assert!(s.move_player(1).unwrap().current_move().is_none());
    assert_eq!(s.equip(1, "Jab").unwrap().as_deref(), Some("u"));
}

#[test]
fn equipped_move_survives_library_removal() {
    let mut s = session(0.0, 600);

    assert!(s.library_mut().remove("Jab").is_some());
    assert!(!s.library().contains_name("Jab"));

    s.press("u");
    assert!(s.move_player(1).unwrap().is_playing());
}

#[test]
fn jab_runs_its_dense_sequence_and_returns_to_rest() {
    let mut s = session(0.0, 600);

    s.press("u");
    let mut ticks = 0;
    while s.move_player(1).unwrap().is_playing() {
        s.tick(DT);
        ticks += 1;
        assert!(ticks < 100, "jab never finished");
    }

    // 12 key poses (6 out, mirrored back) at step 81:
    // 11 segments of [0, 81] plus the closing 100
    assert_eq!(ticks, 23);
    let skeleton = s.skeleton(1).unwrap();
    assert!((skeleton.rotation(BodyPart::UpperRightArm) - 300.0).abs() < 1e-3);
    assert!(!skeleton.is_highlighted(BodyPart::RightHand));
}

#[test]
fn intro_freeze_ignores_buttons() {
    let mut s = session(0.5, 600);
    assert_eq!(s.match_state().phase(), MatchPhase::Intro);

    s.press("u");
    assert!(s.move_player(1).unwrap().current_move().is_none());

    for _ in 0..40 {
        s.tick(DT);
    }
    assert!(s.match_state().is_fighting());

    s.press("u");
    assert!(s.move_player(1).unwrap().is_playing());
}

#[test]
fn clean_hits_drain_health_until_game_over() {
    let mut s = session(0.0, 200);

    s.press("u");
    s.hit(1, 2, Collider::Part(BodyPart::RightHand), Collider::Body);
    assert_eq!(s.fighter(2).unwrap().health(), 118);

    s.press("u");
    s.hit(1, 2, Collider::Part(BodyPart::RightHand), Collider::Body);
    assert_eq!(s.fighter(2).unwrap().health(), 36);
    assert!(!s.match_state().is_over());

    s.press("u");
    s.hit(1, 2, Collider::Part(BodyPart::RightHand), Collider::Body);
    assert!(s.fighter(2).unwrap().is_dead());
    assert_eq!(s.match_state().winner(), Some(1));

    let log = s.match_log();
    let healths: Vec<i32> = log.health_reports.iter().map(|r| r.health).collect();
    assert_eq!(healths, vec![118, 36, -46]);
    assert_eq!(log.last_percentage(2), Some(0.0));
    assert_eq!(log.game_over.map(|g| g.winner), Some(1));
}

#[test]
fn blocked_hit_never_kills() {
    let mut s = session(0.0, 6);

    s.press("t");
    s.press("u");
    s.hit(
        1,
        2,
        Collider::Part(BodyPart::RightHand),
        Collider::Shield(BodyPart::LeftHand),
    );

    // the 6 damage that got through the guard would be lethal, so none lands
    assert_eq!(s.fighter(2).unwrap().health(), 6);
    assert!(s.controls(1).unwrap().is_stunned());
    assert!(!s.match_state().is_over());
}

#[test]
fn shield_only_counts_when_it_is_touched() {
    let mut s = session(0.0, 600);

    s.press("t");
    s.press("u");
    s.hit(1, 2, Collider::Part(BodyPart::RightHand), Collider::Body);

    assert_eq!(s.fighter(2).unwrap().health(), 518);
    assert!(!s.controls(1).unwrap().is_stunned());
}

#[test]
fn pause_toggle_round_trip() {
    let mut s = session(0.0, 600);

    s.press("u");
    s.tick(DT);
    s.toggle_pause();
    assert_eq!(s.match_state().phase(), MatchPhase::Paused);
    assert!(s.rigidbody(1).unwrap().frozen);

    s.press("r");
    for _ in 0..10 {
        s.tick(DT);
    }
    assert!(s.move_player(1).unwrap().is_paused());
    assert!(s.move_player(2).unwrap().current_move().is_none());

    s.toggle_pause();
    assert!(s.match_state().is_fighting());
    assert!(s.move_player(1).unwrap().is_playing());
    assert!(!s.rigidbody(1).unwrap().frozen);
}

#[test]
fn reset_starts_a_fresh_match() {
    let mut s = session(0.25, 600);
    for _ in 0..20 {
        s.tick(DT);
    }
    s.press("u");
    s.hit(1, 2, Collider::Part(BodyPart::RightHand), Collider::Body);
    assert_eq!(s.fighter(2).unwrap().health(), 518);

    s.reset();

    assert_eq!(s.match_state().phase(), MatchPhase::Intro);
    for n in [1, 2] {
        let fighter = s.fighter(n).unwrap();
        assert_eq!(fighter.health(), 600);
        assert!(fighter.move_names().is_empty());
        assert!(!fighter.invulnerable);
        assert!(s.move_player(n).unwrap().current_move().is_none());
        assert!(!s.controls(n).unwrap().knocked_back);
    }
    assert_eq!(s.bindings().lookup("u"), None);
    assert!(s.match_log().health_reports.is_empty());
    assert!(s.library().contains_name("Jab"));

    assert_eq!(s.equip(2, "Guard").unwrap().as_deref(), Some("r"));
}
