//! Collaborators the engine talks to while resolving a projection.
//!
//! Oracles expose the dungeon grid, monsters, gear, named effects, message
//! output, configuration and randomness. The [`ProjectionEnv`] aggregate bundles
//! them for a single resolution so the engine stays decoupled from concrete
//! implementations.
mod cave;
mod config;
mod effects;
mod error;
mod gear;
mod messages;
mod monsters;
mod rng;

pub use cave::CaveOracle;
pub use config::ConfigOracle;
pub use effects::{EffectOracle, NamedEffect};
pub use error::OracleError;
pub use gear::GearOracle;
pub use messages::{Message, MessageSink};
pub use monsters::MonsterOracle;
pub use rng::{Dice, PROJECTION_STREAM, PcgRng, RngOracle, compute_seed};

/// Aggregates the collaborators borrowed for one resolution.
///
/// Every slot is optional so hosts and tests can supply only what a given
/// projection needs; accessing a missing slot yields an [`OracleError`].
pub struct ProjectionEnv<'a> {
    cave: Option<&'a mut dyn CaveOracle>,
    monsters: Option<&'a mut dyn MonsterOracle>,
    gear: Option<&'a mut dyn GearOracle>,
    effects: Option<&'a mut dyn EffectOracle>,
    messages: Option<&'a mut dyn MessageSink>,
    config: Option<&'a dyn ConfigOracle>,
    dice: Option<Dice<'a>>,
}

impl<'a> ProjectionEnv<'a> {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cave: None,
            monsters: None,
            gear: None,
            effects: None,
            messages: None,
            config: None,
            dice: None,
        }
    }

    #[must_use]
    pub fn with_cave(mut self, cave: &'a mut dyn CaveOracle) -> Self {
        self.cave = Some(cave);
        self
    }

    #[must_use]
    pub fn with_monsters(mut self, monsters: &'a mut dyn MonsterOracle) -> Self {
        self.monsters = Some(monsters);
        self
    }

    #[must_use]
    pub fn with_gear(mut self, gear: &'a mut dyn GearOracle) -> Self {
        self.gear = Some(gear);
        self
    }

    #[must_use]
    pub fn with_effects(mut self, effects: &'a mut dyn EffectOracle) -> Self {
        self.effects = Some(effects);
        self
    }

    #[must_use]
    pub fn with_messages(mut self, messages: &'a mut dyn MessageSink) -> Self {
        self.messages = Some(messages);
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: &'a dyn ConfigOracle) -> Self {
        self.config = Some(config);
        self
    }

    /// Seeds the dice stream for this resolution.
    #[must_use]
    pub fn with_rng(mut self, rng: &'a dyn RngOracle, game_seed: u64, nonce: u64) -> Self {
        self.dice = Some(Dice::new(rng, game_seed, nonce));
        self
    }

    /// Returns the CaveOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CaveNotAvailable` if no cave oracle was provided.
    pub fn cave(&mut self) -> Result<&mut (dyn CaveOracle + 'a), OracleError> {
        self.cave.as_deref_mut().ok_or(OracleError::CaveNotAvailable)
    }

    /// Returns the MonsterOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::MonstersNotAvailable` if no monster oracle was provided.
    pub fn monsters(&mut self) -> Result<&mut (dyn MonsterOracle + 'a), OracleError> {
        self.monsters
            .as_deref_mut()
            .ok_or(OracleError::MonstersNotAvailable)
    }

    /// Returns the GearOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::GearNotAvailable` if no gear oracle was provided.
    pub fn gear(&mut self) -> Result<&mut (dyn GearOracle + 'a), OracleError> {
        self.gear.as_deref_mut().ok_or(OracleError::GearNotAvailable)
    }

    /// Returns the EffectOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::EffectsNotAvailable` if no effect oracle was provided.
    pub fn effects(&mut self) -> Result<&mut (dyn EffectOracle + 'a), OracleError> {
        self.effects
            .as_deref_mut()
            .ok_or(OracleError::EffectsNotAvailable)
    }

    /// Returns the ConfigOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ConfigNotAvailable` if no config oracle was provided.
    pub fn config(&self) -> Result<&'a (dyn ConfigOracle + 'a), OracleError> {
        self.config.ok_or(OracleError::ConfigNotAvailable)
    }

    /// Returns the dice stream, or an error if no RNG was supplied.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RngNotAvailable` if [`Self::with_rng`] was never called.
    pub fn dice(&mut self) -> Result<&mut Dice<'a>, OracleError> {
        self.dice.as_mut().ok_or(OracleError::RngNotAvailable)
    }

    /// Sends a notification to the message sink.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::MessagesNotAvailable` if no sink was provided.
    pub fn notify(&mut self, message: Message) -> Result<(), OracleError> {
        tracing::trace!(%message, "notify");
        self.messages
            .as_deref_mut()
            .ok_or(OracleError::MessagesNotAvailable)?
            .push(message);
        Ok(())
    }

    /// Borrows gear and dice together, for damage adjustment.
    pub(crate) fn gear_and_dice(
        &mut self,
    ) -> Result<(&mut (dyn GearOracle + 'a), &mut Dice<'a>), OracleError> {
        let gear = self
            .gear
            .as_deref_mut()
            .ok_or(OracleError::GearNotAvailable)?;
        let dice = self.dice.as_mut().ok_or(OracleError::RngNotAvailable)?;
        Ok((gear, dice))
    }
}

impl Default for ProjectionEnv<'_> {
    fn default() -> Self {
        Self::empty()
    }
}
