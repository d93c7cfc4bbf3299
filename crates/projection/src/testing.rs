//! In-memory collaborators for tests and host prototyping.
//!
//! Every oracle here records what the engine asked of it so tests can assert
//! on side effects. [`Fixture`] owns one of each and lends them out as a
//! [`ProjectionEnv`].

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::ProjectionConfig;
use crate::env::{
    CaveOracle, EffectOracle, GearOracle, Message, MonsterOracle, NamedEffect, ProjectionEnv,
    PcgRng, RngOracle,
};
use crate::error::ProjectionError;
use crate::handlers::{HandlerContext, handler};
use crate::origin::{ObjectHandle, Origin};
use crate::projection::ProjectionKind;
use crate::state::{MonsterId, PlayerState, Position};

/// Replays a fixed list of raw values; `randint0(m)` yields `value % m`.
/// Exhausted scripts yield 0.
#[derive(Debug, Default)]
pub struct ScriptedRng {
    script: Vec<u32>,
    cursor: AtomicUsize,
}

impl ScriptedRng {
    pub fn new(script: &[u32]) -> Self {
        Self {
            script: script.to_vec(),
            cursor: AtomicUsize::new(0),
        }
    }

    pub fn consumed(&self) -> usize {
        self.cursor.load(Ordering::SeqCst)
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        let at = self.cursor.fetch_add(1, Ordering::SeqCst);
        self.script.get(at).copied().unwrap_or(0)
    }
}

#[derive(Debug, Default)]
pub struct TestCave {
    pub player: Position,
    pub decoys: Vec<Position>,
    pub destroyed: Vec<Position>,
}

impl CaveOracle for TestCave {
    fn is_decoyed(&self, grid: Position) -> bool {
        self.decoys.contains(&grid)
    }

    fn destroy_decoy(&mut self, grid: Position) {
        self.decoys.retain(|d| *d != grid);
        self.destroyed.push(grid);
    }

    fn is_player(&self, grid: Position) -> bool {
        self.player == grid
    }
}

#[derive(Debug, Default)]
pub struct TestMonsters {
    pub known: HashMap<MonsterId, (String, bool, Option<Position>)>,
    pub learnt: Vec<(MonsterId, ProjectionKind)>,
}

impl TestMonsters {
    pub fn with(mut self, id: MonsterId, name: &str, visible: bool) -> Self {
        self.known.insert(id, (name.to_owned(), visible, None));
        self
    }

    pub fn at(mut self, id: MonsterId, grid: Position) -> Self {
        if let Some(entry) = self.known.get_mut(&id) {
            entry.2 = Some(grid);
        }
        self
    }
}

impl MonsterOracle for TestMonsters {
    fn describe(&self, id: MonsterId) -> Option<String> {
        self.known.get(&id).map(|(name, _, _)| name.clone())
    }

    fn is_visible(&self, id: MonsterId) -> bool {
        self.known.get(&id).is_some_and(|(_, visible, _)| *visible)
    }

    fn grid(&self, id: MonsterId) -> Option<Position> {
        self.known.get(&id).and_then(|(_, _, grid)| *grid)
    }

    fn learn_from_projection(&mut self, id: MonsterId, kind: ProjectionKind, _player: &PlayerState) {
        self.learnt.push((id, kind));
    }
}

#[derive(Debug, Default)]
pub struct TestGear {
    pub objects: HashMap<ObjectHandle, (String, Option<Position>)>,
    pub damaged: Vec<(ProjectionKind, i32)>,
    pub armour_absorbs: bool,
    pub acid_checks: u32,
}

impl TestGear {
    #[must_use]
    pub fn with_object(mut self, handle: ObjectHandle, name: &str, grid: Option<Position>) -> Self {
        self.objects.insert(handle, (name.to_owned(), grid));
        self
    }
}

impl GearOracle for TestGear {
    fn object_name(&self, handle: ObjectHandle) -> String {
        self.objects
            .get(&handle)
            .map(|(name, _)| name.clone())
            .unwrap_or_default()
    }

    fn object_grid(&self, handle: ObjectHandle) -> Option<Position> {
        self.objects.get(&handle).and_then(|(_, grid)| *grid)
    }

    fn damage_inventory(&mut self, kind: ProjectionKind, chance: i32) {
        self.damaged.push((kind, chance));
    }

    fn armour_absorbs_acid(&mut self) -> bool {
        self.acid_checks += 1;
        self.armour_absorbs
    }
}

#[derive(Debug)]
pub struct TestEffects {
    pub invoked: Vec<NamedEffect>,
    pub noticed: bool,
}

impl Default for TestEffects {
    fn default() -> Self {
        Self {
            invoked: Vec::new(),
            noticed: true,
        }
    }
}

/// Records named effects. Teleporting to a grid moves the player there; every
/// other effect is left to the assertions.
impl EffectOracle for TestEffects {
    fn invoke(&mut self, effect: NamedEffect, _origin: &Origin, player: &mut PlayerState) -> bool {
        self.invoked.push(effect);
        if let NamedEffect::TeleportTo { grid } = effect {
            player.grid = grid;
        }
        self.noticed
    }
}

/// Owns one of every collaborator and lends them out as an environment.
#[derive(Debug)]
pub struct Fixture {
    pub cave: TestCave,
    pub monsters: TestMonsters,
    pub gear: TestGear,
    pub effects: TestEffects,
    pub messages: Vec<Message>,
    pub config: ProjectionConfig,
    pub rng: ScriptedRng,
}

impl Fixture {
    pub fn new(player: Position, script: &[u32]) -> Self {
        Self {
            cave: TestCave {
                player,
                ..TestCave::default()
            },
            monsters: TestMonsters::default(),
            gear: TestGear::default(),
            effects: TestEffects::default(),
            messages: Vec::new(),
            config: ProjectionConfig::default(),
            rng: ScriptedRng::new(script),
        }
    }

    /// Lends every collaborator, drawing randomness from the script.
    pub fn env(&mut self) -> ProjectionEnv<'_> {
        ProjectionEnv::empty()
            .with_cave(&mut self.cave)
            .with_monsters(&mut self.monsters)
            .with_gear(&mut self.gear)
            .with_effects(&mut self.effects)
            .with_messages(&mut self.messages)
            .with_config(&self.config)
            .with_rng(&self.rng, 0, 0)
    }

    /// Lends every collaborator, drawing randomness from [`PcgRng`] instead of
    /// the script.
    pub fn seeded_env(&mut self, game_seed: u64, nonce: u64) -> ProjectionEnv<'_> {
        ProjectionEnv::empty()
            .with_cave(&mut self.cave)
            .with_monsters(&mut self.monsters)
            .with_gear(&mut self.gear)
            .with_effects(&mut self.effects)
            .with_messages(&mut self.messages)
            .with_config(&self.config)
            .with_rng(&PcgRng, game_seed, nonce)
    }

    /// Runs the handler for `kind` directly, returning extra damage and obviousness.
    pub fn run_handler(
        &mut self,
        player: &mut PlayerState,
        origin: &Origin,
        kind: ProjectionKind,
        dam: i32,
        power: i32,
    ) -> Result<(i32, bool), ProjectionError> {
        let grid = player.grid;
        let mut env = self.env();
        let mut ctx = HandlerContext {
            origin,
            distance: 0,
            grid,
            dam,
            kind,
            power,
            obvious: true,
            player,
            env: &mut env,
        };
        let extra = handler(kind)(&mut ctx)?;
        Ok((extra, ctx.obvious))
    }
}
