//! Contains code for firmware debouncing of a sampled input level. A new level
//! is only accepted once it has disagreed with the current one for a number of
//! consecutive samples.

use crate::source::Level;

/// A debounced input that requires `threshold` consecutive samples at a new
/// level before accepting it.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub struct Debouncer {
    /// The last accepted level
    level: Level,
    /// Consecutive samples that disagreed with `level`
    counter: u8,
    threshold: u8,
}

/// Returned by the [Debouncer::debounce] function, to denote whether the
/// input has changed and what the accepted level is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub struct DebounceResult {
    /// Was a new level accepted by the most recent sample? Set for exactly one
    /// sample per accepted change.
    pub is_changed: bool,
    /// The accepted level after this sample
    pub level: Level,
}

impl Debouncer {
    /// Returns a new debouncer seeded with an already accepted level, so the
    /// first samples do not produce a spurious change.
    pub const fn new(level: Level, threshold: u8) -> Self {
        Self {
            level,
            counter: 0,
            threshold,
        }
    }

    /// Feeds one raw sample into the filter. Any sample that agrees with the
    /// accepted level resets the disagreement count.
    pub fn debounce(&mut self, raw: Level) -> DebounceResult {
        let mut is_changed = false;

        if raw == self.level {
            self.counter = 0;
        } else {
            // saturate so a long disagreement can never wrap back below the threshold
            self.counter = self.counter.saturating_add(1);

            if self.counter >= self.threshold {
                self.level = raw;
                self.counter = 0;
                is_changed = true;
            }
        }

        DebounceResult {
            is_changed,
            level: self.level,
        }
    }

    /// The last accepted level
    pub const fn level(&self) -> Level {
        self.level
    }

    /// The number of consecutive samples that have disagreed with [Debouncer::level]
    pub const fn counter(&self) -> u8 {
        self.counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_glitches_are_ignored() {
        let mut debouncer = Debouncer::new(Level::High, 3);

        for _ in 0..10 {
            assert!(!debouncer.debounce(Level::Low).is_changed);
            assert!(!debouncer.debounce(Level::Low).is_changed);
            assert!(!debouncer.debounce(Level::High).is_changed);
            assert_eq!(debouncer.counter(), 0);
        }

        assert_eq!(debouncer.level(), Level::High);
    }

    #[test]
    fn change_is_accepted_once_on_threshold() {
        let mut debouncer = Debouncer::new(Level::High, 3);

        assert_eq!(debouncer.debounce(Level::Low).level, Level::High);
        assert_eq!(debouncer.debounce(Level::Low).level, Level::High);
        assert_eq!(debouncer.counter(), 2);

        let result = debouncer.debounce(Level::Low);
        assert!(result.is_changed);
        assert_eq!(result.level, Level::Low);
        assert_eq!(debouncer.counter(), 0);

        // further samples at the same level are not new changes
        for _ in 0..20 {
            let result = debouncer.debounce(Level::Low);
            assert!(!result.is_changed);
            assert_eq!(result.level, Level::Low);
        }
    }

    #[test]
    fn single_outlier_after_agreement_is_ignored() {
        let mut debouncer = Debouncer::new(Level::Low, 3);

        for _ in 0..1000 {
            debouncer.debounce(Level::Low);
        }

        assert!(!debouncer.debounce(Level::High).is_changed);
        assert_eq!(debouncer.counter(), 1);
        assert!(!debouncer.debounce(Level::Low).is_changed);
        assert_eq!(debouncer.level(), Level::Low);
    }

    #[test]
    fn counter_saturates() {
        let mut debouncer = Debouncer::new(Level::Low, u8::MAX);

        for _ in 0..(u8::MAX - 1) {
            assert!(!debouncer.debounce(Level::High).is_changed);
        }
        assert_eq!(debouncer.counter(), u8::MAX - 1);

        assert!(debouncer.debounce(Level::High).is_changed);
        assert_eq!(debouncer.counter(), 0);
    }
}
