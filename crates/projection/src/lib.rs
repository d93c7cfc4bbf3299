//! Resolution of projections (bolts, beams, balls, breaths) that strike the player.
//!
//! `projection-core` owns the rules for what happens when an elemental or magical
//! projection reaches the player's grid: who caused it, how much of the raw damage
//! survives the player's resistances, how the damage is applied, and which
//! kind-specific side effects follow. Everything else (the dungeon grid, monster
//! lore, inventory, message display and randomness) is reached through the oracles
//! bundled in [`env::ProjectionEnv`].
//!
//! The entry point is [`resolve::project_player`].
//!
//! ```rust,ignore
//! use projection_core::{Origin, ProjectionEnv, ProjectionEvent, ProjectionKind, project_player};
//!
//! let mut env = ProjectionEnv::empty()
//!     .with_cave(&mut cave)
//!     .with_monsters(&mut monsters)
//!     .with_gear(&mut gear)
//!     .with_effects(&mut effects)
//!     .with_messages(&mut messages)
//!     .with_config(&config)
//!     .with_rng(&PcgRng, game_seed, nonce);
//!
//! let event = ProjectionEvent::new(Origin::Monster(id), player.grid, 120, ProjectionKind::Fire)
//!     .with_power(85);
//! let noticed = project_player(&mut player, &mut env, &event, false)?;
//! ```
pub mod adjust;
pub mod config;
pub mod env;
pub mod error;
pub mod handlers;
pub mod origin;
pub mod projection;
pub mod resolve;
pub mod state;

pub mod testing;

pub use adjust::{Defender, adjust_damage};
pub use config::ProjectionConfig;
pub use env::{
    CaveOracle, ConfigOracle, Dice, EffectOracle, GearOracle, Message, MessageSink,
    MonsterOracle, NamedEffect, OracleError, PcgRng, ProjectionEnv, RngOracle, compute_seed,
};
pub use error::{ErrorSeverity, GameError, ProjectionError};
pub use handlers::{Handler, HandlerContext, handler};
pub use origin::{ChestTrapRef, ObjectHandle, Origin, OriginIdentity, TrapRef, resolve_origin};
pub use projection::{
    ELEMENT_COUNT, ProjectionInfo, ProjectionKind, RandomValue, ResistLevel, ResistanceProfile,
    RoundingAspect,
};
pub use resolve::{ProjectionEvent, project_player};
pub use state::{
    Activity, DamageReduction, EquipFlags, HitOutcome, Knowledge, MonsterId, PlayerFlags,
    PlayerState, Pool, Position, Stat, StatBlock, TimedChange, TimedEffect, TimedEffects,
};
