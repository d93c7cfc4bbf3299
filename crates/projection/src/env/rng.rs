//! RNG oracle and the per-resolution dice stream.
//!
//! The oracle itself is stateless: it maps a seed to a 32-bit value. A
//! [`Dice`] stream layers the classic roguelike helpers (`randint0`,
//! `randint1`, `one_in`, `damroll`) on top of it, deriving a fresh seed for
//! every draw from the game seed, the turn nonce and a draw counter.
//!
//! # Determinism
//!
//! Given the same oracle, seed and nonce, a resolution consumes the same
//! values in the same order, so replays reproduce every side effect.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR variant: 32-bit output from 64-bit state.
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Compute a deterministic seed from game state components.
///
/// * `game_seed` - base seed set at game start
/// * `nonce` - turn sequence number
/// * `stream` - independent stream identifier (one per subsystem)
/// * `context` - position within the stream, so repeated rolls differ
pub fn compute_seed(game_seed: u64, nonce: u64, stream: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash style mixing
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (stream as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Stream identifier reserved for projection resolution.
pub const PROJECTION_STREAM: u32 = 0x5052_4f4a;

/// Sequential random stream for a single projection resolution.
///
/// Every call that actually consumes randomness advances the draw counter;
/// degenerate ranges (`randint0(0)`, `randint0(1)`) return 0 without drawing.
#[derive(Clone, Copy)]
pub struct Dice<'a> {
    oracle: &'a dyn RngOracle,
    game_seed: u64,
    nonce: u64,
    draws: u32,
}

impl<'a> Dice<'a> {
    pub fn new(oracle: &'a dyn RngOracle, game_seed: u64, nonce: u64) -> Self {
        Self {
            oracle,
            game_seed,
            nonce,
            draws: 0,
        }
    }

    /// Number of values consumed so far.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Uniform value in `0..m`, or 0 when `m <= 1`.
    pub fn randint0(&mut self, m: i32) -> i32 {
        if m <= 1 {
            return 0;
        }
        let seed = compute_seed(self.game_seed, self.nonce, PROJECTION_STREAM, self.draws);
        self.draws = self.draws.wrapping_add(1);
        (self.oracle.next_u32(seed) % m as u32) as i32
    }

    /// Uniform value in `1..=m` (1 when `m <= 1`).
    pub fn randint1(&mut self, m: i32) -> i32 {
        self.randint0(m) + 1
    }

    /// True with probability `1 / x`.
    pub fn one_in(&mut self, x: i32) -> bool {
        self.randint0(x) == 0
    }

    /// Sum of `num` rolls of a `sides`-sided die.
    pub fn damroll(&mut self, num: i32, sides: i32) -> i32 {
        if sides <= 0 {
            return 0;
        }
        (0..num).map(|_| self.randint1(sides)).sum()
    }
}

impl core::fmt::Debug for Dice<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dice")
            .field("game_seed", &self.game_seed)
            .field("nonce", &self.nonce)
            .field("draws", &self.draws)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
        assert_ne!(rng.next_u32(42), rng.next_u32(43));
    }

    #[test]
    fn degenerate_ranges_do_not_draw() {
        let mut dice = Dice::new(&PcgRng, 1, 1);
        assert_eq!(dice.randint0(0), 0);
        assert_eq!(dice.randint0(1), 0);
        assert_eq!(dice.randint0(-5), 0);
        assert_eq!(dice.randint1(1), 1);
        assert!(dice.one_in(1));
        assert_eq!(dice.draws(), 0);
    }

    #[test]
    fn rolls_stay_in_range() {
        let mut dice = Dice::new(&PcgRng, 0xdead_beef, 17);
        for _ in 0..500 {
            let a = dice.randint0(20);
            assert!((0..20).contains(&a));
            let b = dice.randint1(6);
            assert!((1..=6).contains(&b));
        }
        assert_eq!(dice.draws(), 1000);
    }

    #[test]
    fn damroll_sums_each_die() {
        let mut dice = Dice::new(&PcgRng, 9, 3);
        let total = dice.damroll(5, 8);
        assert!((5..=40).contains(&total));
        assert_eq!(dice.draws(), 5);
        assert_eq!(dice.damroll(3, 0), 0);
        assert_eq!(dice.draws(), 5);
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = Dice::new(&PcgRng, 77, 5);
        let mut b = Dice::new(&PcgRng, 77, 5);
        let left: Vec<i32> = (0..16).map(|_| a.randint0(1000)).collect();
        let right: Vec<i32> = (0..16).map(|_| b.randint0(1000)).collect();
        assert_eq!(left, right);
    }
}
