//! Random sources for damage rolls and the enemy skill trigger.
//!
//! The engine owns exactly one [`RngSource`] and draws from it in call order:
//! the player's weapon roll, then (on the enemy turn) the skill-trigger roll and
//! the enemy's weapon roll. Tests inject a [`ScriptedRng`] to pin exact values.

/// Source of random numbers for battle mechanics.
///
/// Only [`RngSource::next_u32`] must be implemented; the derived helpers each
/// consume exactly one draw.
pub trait RngSource {
    /// Produce the next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0.0, 1.0]` (both ends inclusive).
    fn unit_f32(&mut self) -> f32 {
        (self.next_u32() as f64 / u32::MAX as f64) as f32
    }

    /// Uniform value in `[min, max]`.
    ///
    /// Returns `min` when the range is empty or inverted (a draw is still consumed).
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        let t = self.unit_f32();
        if min >= max {
            return min;
        }
        min + (max - min) * t
    }

    /// Roll a d100 (1-100 inclusive).
    ///
    /// Common for percentage-based mechanics like the enemy skill chance.
    fn roll_d100(&mut self) -> u32 {
        (self.next_u32() % 100) + 1
    }
}

impl<R: RngSource + ?Sized> RngSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR variant: 32-bit output from 64-bit state.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces the same sequence
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator from a seed.
    pub fn new(seed: u64) -> Self {
        let mut rng = Self { state: 0 };
        rng.step();
        rng.state = rng.state.wrapping_add(seed);
        rng.step();
        rng
    }

    /// Advance the state by one LCG step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngSource for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.step();
        Self::output(old)
    }
}

/// Replays a fixed sequence of raw draws, cycling when exhausted.
///
/// Intended for tests that need exact damage values or a forced skill trigger.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    draws: Vec<u32>,
    cursor: usize,
}

impl ScriptedRng {
    /// A draw that makes [`RngSource::roll_d100`] return 1 (always under any chance > 0).
    pub const ROLL_LOW: u32 = 0;
    /// A draw that makes [`RngSource::roll_d100`] return 100 (never under a chance < 100).
    pub const ROLL_HIGH: u32 = 99;

    /// Creates a scripted source. An empty script behaves like a constant zero.
    pub fn new(draws: impl Into<Vec<u32>>) -> Self {
        Self {
            draws: draws.into(),
            cursor: 0,
        }
    }

    /// Scripted source that always returns the same raw value.
    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RngSource for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let value = if self.draws.is_empty() {
            0
        } else {
            self.draws[self.cursor % self.draws.len()]
        };
        self.cursor += 1;
        value
    }
}
