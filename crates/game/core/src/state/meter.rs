use crate::combat::round_tenths;

/// Fractional resource meter (health, stamina) tracked per unit.
///
/// `current` never rises above `maximum`. It may drop below zero: health is allowed
/// to go negative on a killing blow and is read as "defeated".
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ResourceMeter {
    current: f32,
    maximum: f32,
}

impl ResourceMeter {
    /// A full meter.
    pub fn full(maximum: f32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    pub fn new(current: f32, maximum: f32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn maximum(&self) -> f32 {
        self.maximum
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }

    /// Removes `amount` without a floor.
    pub fn drain(&mut self, amount: f32) {
        self.current -= amount;
    }

    /// Adds up to `amount`, stopping at the maximum. Returns the amount actually
    /// gained, rounded to one decimal.
    pub fn restore(&mut self, amount: f32) -> f32 {
        let before = self.current;
        self.current = (self.current + amount.max(0.0)).min(self.maximum);
        round_tenths((self.current - before).max(0.0))
    }
}
