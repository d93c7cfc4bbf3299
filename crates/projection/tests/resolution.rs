mod common;

use common::world;
use projection_core::{
    EquipFlags, Message, MonsterId, NamedEffect, OracleError, Origin, PcgRng, PlayerState,
    Position, ProjectionConfig, ProjectionEnv, ProjectionError, ProjectionEvent, ProjectionKind,
    ResistLevel, TimedEffect, project_player,
};
use projection_core::testing::TestMonsters;

const HERE: Position = Position::new(12, 8);
const HOUND: MonsterId = MonsterId(7);

fn adventurer() -> PlayerState {
    let mut player = PlayerState::new(HERE, 100);
    player.activity.resting = true;
    player
}

/// A visible fire hound breathes on a resting player.
///
/// 1. The hound is identified and learns the player's fire resistance
/// 2. Full damage lands (no resistance, fixed divisor, no rolls)
/// 3. The pack is exposed to fire
/// 4. The player stops resting
#[test]
fn monster_breath_hits_an_unresisting_player() {
    let mut world = world(HERE, &[]);
    world.monsters = TestMonsters::default()
        .with(HOUND, "The fire hound", true)
        .at(HOUND, Position::new(15, 8));
    let mut player = adventurer();

    let event = ProjectionEvent::new(Origin::Monster(HOUND), HERE, 50, ProjectionKind::Fire)
        .with_power(10)
        .with_distance(1);
    let noticed = project_player(&mut player, &mut world.env(), &event, false)
        .expect("projection should resolve");

    assert!(noticed);
    assert_eq!(player.hp.current, 50);
    assert_eq!(world.monsters.learnt, vec![(HOUND, ProjectionKind::Fire)]);
    assert_eq!(world.gear.damaged, vec![(ProjectionKind::Fire, 250)]);
    assert!(player.knowledge.knows_element(ProjectionKind::Fire));
    assert!(player.activity.is_idle());
    assert!(world.messages.is_empty());
    assert_eq!(world.rng.consumed(), 0);
}

/// Ice is resisted as cold, but its shards still cut and its weight still stuns.
#[test]
fn cold_immunity_does_not_stop_ice_shards() {
    let mut world = world(HERE, &[0, 1, 2, 3, 4, 9]);
    let mut player = adventurer().with_resist(ProjectionKind::Cold, ResistLevel::IMMUNE);

    let event = ProjectionEvent::new(Origin::None, HERE, 80, ProjectionKind::Ice);
    let noticed = project_player(&mut player, &mut world.env(), &event, false)
        .expect("projection should resolve");

    assert!(noticed);
    assert_eq!(player.hp.current, 100);
    assert!(world.gear.damaged.is_empty());
    assert_eq!(player.timed.get(TimedEffect::Cut), 15);
    assert_eq!(player.timed.get(TimedEffect::Stun), 10);
    assert!(player.knowledge.knows_element(ProjectionKind::Cold));
    assert_eq!(
        world.messages,
        vec![
            Message::StatusGained(TimedEffect::Cut),
            Message::StatusGained(TimedEffect::Stun)
        ]
    );
}

#[test]
fn nexus_pulls_the_player_to_the_caster() {
    // divisor roll, failed save, scramble 20 + 5, one_in(3)
    let mut world = world(HERE, &[0, 90, 5, 0]);
    world.monsters = TestMonsters::default()
        .with(HOUND, "The nexus hound", true)
        .at(HOUND, Position::new(3, 3));
    let mut player = adventurer();

    let event = ProjectionEvent::new(Origin::Monster(HOUND), HERE, 60, ProjectionKind::Nexus);
    project_player(&mut player, &mut world.env(), &event, false)
        .expect("projection should resolve");

    assert_eq!(player.hp.current, 40);
    assert_eq!(player.timed.get(TimedEffect::Scramble), 25);
    assert_eq!(
        world.effects.invoked,
        vec![NamedEffect::TeleportTo {
            grid: Position::new(3, 3)
        }]
    );
    assert_eq!(player.grid, Position::new(3, 3));
    assert_eq!(world.rng.consumed(), 4);
}

/// A caster the host cannot place on the map still gets the full effect; the
/// pull towards it becomes an ordinary teleport.
#[test]
fn casters_off_the_map_do_not_abort_resolution() {
    // divisor roll, failed save, scramble 20 + 5, one_in(3), one_in(4) misses
    let mut world = world(HERE, &[0, 90, 5, 0, 1]);
    world.monsters = TestMonsters::default().with(HOUND, "The nexus hound", true);
    let mut player = adventurer();

    let event = ProjectionEvent::new(Origin::Monster(HOUND), HERE, 30, ProjectionKind::Nexus);
    assert!(
        project_player(&mut player, &mut world.env(), &event, false)
            .expect("an unplaced caster is not an error")
    );
    assert_eq!(player.hp.current, 70);
    assert_eq!(player.timed.get(TimedEffect::Scramble), 25);
    assert_eq!(world.effects.invoked, vec![NamedEffect::Teleport { range: 200 }]);
    assert_eq!(player.grid, HERE);
    assert!(player.activity.is_idle());
}

#[test]
fn own_ball_hurts_a_tenth_as_much() {
    let mut world = world(HERE, &[]);
    let mut player = adventurer();
    let event = ProjectionEvent::new(Origin::Player, HERE, 100, ProjectionKind::Missile);

    assert!(
        !project_player(&mut player, &mut world.env(), &event, false)
            .expect("projection should resolve")
    );
    assert_eq!(player.hp.current, 100);
    assert!(player.activity.resting);

    assert!(
        project_player(&mut player, &mut world.env(), &event, true)
            .expect("projection should resolve")
    );
    assert_eq!(player.hp.current, 90);
    assert!(player.activity.is_idle());
}

#[test]
fn lethal_breath_records_the_killer() {
    let mut world = world(HERE, &[]);
    world.monsters = TestMonsters::default()
        .with(HOUND, "The fire hound", true)
        .at(HOUND, Position::new(15, 8));
    let mut player = adventurer();

    let event =
        ProjectionEvent::new(Origin::Monster(HOUND), HERE, 500, ProjectionKind::Fire).with_power(100);
    assert!(
        project_player(&mut player, &mut world.env(), &event, false)
            .expect("projection should resolve")
    );

    assert!(player.is_dead);
    assert_eq!(player.died_from.as_deref(), Some("The fire hound"));
    assert!(world.gear.damaged.is_empty());
    assert!(world.effects.invoked.is_empty());
    assert_eq!(world.rng.consumed(), 0);
}

#[test]
fn unseen_casters_are_felt() {
    let mut world = world(HERE, &[]);
    world.monsters = TestMonsters::default()
        .with(HOUND, "The dark elf", false)
        .at(HOUND, Position::new(12, 2));
    let mut player = adventurer();

    let event = ProjectionEvent::new(Origin::Monster(HOUND), HERE, 10, ProjectionKind::Arrow);
    project_player(&mut player, &mut world.env(), &event, false)
        .expect("projection should resolve");

    assert_eq!(world.messages, vec![Message::UnseenHit(ProjectionKind::Arrow)]);
    assert_eq!(
        Message::UnseenHit(ProjectionKind::Arrow).to_string(),
        format!("You are hit by {}!", ProjectionKind::Arrow.info().blind_desc)
    );
}

#[test]
fn decoys_draw_fire() {
    let mut world = world(Position::new(0, 0), &[]);
    world.cave.decoys.push(HERE);
    let mut player = adventurer();

    let event = ProjectionEvent::new(Origin::None, HERE, 30, ProjectionKind::Elec);
    assert!(
        !project_player(&mut player, &mut world.env(), &event, false)
            .expect("projection should resolve")
    );
    assert_eq!(world.cave.destroyed, vec![HERE]);
    assert!(world.cave.decoys.is_empty());
    assert_eq!(player.hp.current, 100);
}

#[test]
fn protections_are_learnt_when_they_matter() {
    // stun roll is never made; confusion is blocked by the worn flag
    let mut world = world(HERE, &[0]);
    world.config = ProjectionConfig::new().with_show_damage(true);
    let mut player = adventurer().with_equip_flags(EquipFlags::PROT_STUN | EquipFlags::PROT_CONF);

    let event = ProjectionEvent::new(Origin::None, HERE, 40, ProjectionKind::Plasma);
    project_player(&mut player, &mut world.env(), &event, false)
        .expect("projection should resolve");

    assert!(!player.timed.is_active(TimedEffect::Stun));
    assert!(player.knowledge.knows_flag(EquipFlags::PROT_STUN));
    assert!(!player.knowledge.knows_flag(EquipFlags::PROT_CONF));
    assert_eq!(world.messages, vec![Message::DamageTaken(40)]);
    assert_eq!(world.rng.consumed(), 0);
}

#[test]
fn same_seed_same_outcome() {
    let run = |nonce| {
        let mut world = world(HERE, &[]);
        let mut player = adventurer().with_exp(20_000);
        let event = ProjectionEvent::new(Origin::None, HERE, 50, ProjectionKind::Chaos);
        project_player(&mut player, &mut world.seeded_env(0xdead_beef, nonce), &event, false)
            .expect("projection should resolve");
        (player, world.messages)
    };

    let (first, first_messages) = run(3);
    let (second, second_messages) = run(3);
    assert_eq!(first, second);
    assert_eq!(first_messages, second_messages);
    assert!(first.timed.is_active(TimedEffect::Confused));
    assert!(first.timed.is_active(TimedEffect::Image));
    assert!(first.exp < 20_000);
}

#[test]
fn missing_randomness_is_reported() {
    let mut world = world(HERE, &[]);
    let mut player = adventurer();
    let mut env = ProjectionEnv::empty()
        .with_cave(&mut world.cave)
        .with_gear(&mut world.gear)
        .with_messages(&mut world.messages)
        .with_config(&world.config);

    let event = ProjectionEvent::new(Origin::None, HERE, 50, ProjectionKind::Light);
    let err = project_player(&mut player, &mut env, &event, false)
        .expect_err("light needs a random divisor");
    assert_eq!(err, ProjectionError::Oracle(OracleError::RngNotAvailable));
    assert_eq!(player.hp.current, 100);

    let mut env = env.with_rng(&PcgRng, 1, 1);
    assert!(
        project_player(&mut player, &mut env, &event, false)
            .expect("light resolves once randomness is available")
    );
}
