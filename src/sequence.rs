//! Encodes debounced press and release edges into a growing key value and
//! decides when that value is final.
//!
//! Every accepted edge appends a bit, `1` for a press and `0` for a release,
//! and restarts the tick count. A sequence becomes ready for matching once it
//! has been released and quiet for longer than the short threshold, or once a
//! press has been held for longer than the long threshold. Holding synthesizes
//! extra `1` bits at the long threshold cadence, first for the start of the
//! long press and then once more for the hold.

use crate::config::ButtonConfig;
use crate::key_value::{tail_matches, KeyValue};

/// The press/release history of one button since it was last finalized and released
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub struct KeySequence {
    /// The bits recorded so far, most recent edge in the least significant bit
    bits: KeyValue,
    /// Ticks since the last bit was appended
    ticks: u16,
    /// Set once a threshold has finalized the sequence, cleared with the bits
    ready: bool,
}

impl KeySequence {
    /// An empty sequence
    pub const fn new() -> Self {
        Self {
            bits: 0,
            ticks: 0,
            ready: false,
        }
    }

    /// Advances the sequence by one tick.
    ///
    /// `edge` is `Some(is_press)` on the tick the debounced level changed and
    /// `pressed` is whether the debounced level is currently the active one.
    /// Returns the bits to finalize if the sequence is ready.
    pub fn advance(
        &mut self,
        edge: Option<bool>,
        pressed: bool,
        config: &ButtonConfig,
    ) -> Option<KeyValue> {
        if self.bits != 0 {
            self.ticks = self.ticks.saturating_add(1);
        }

        if let Some(is_press) = edge {
            self.append(is_press);
        }

        if self.ticks > config.short_ticks() && !pressed {
            self.ready = true;
        }

        if self.ticks > config.long_ticks() && pressed {
            // 0b..01 is the start of a long press, 0b..011 is its first hold
            if tail_matches(self.bits, 0b01, 2) || tail_matches(self.bits, 0b011, 3) {
                self.append(true);
                self.ready = true;

                #[cfg(feature = "logging")]
                defmt::trace!("long press bit, sequence {:b}", self.bits);
            }
        }

        if self.bits != 0 && self.ready {
            Some(self.bits)
        } else {
            None
        }
    }

    /// Clears a finalized sequence once the button has been released. A held
    /// button keeps its bits so the next long press bit extends them.
    pub fn settle(&mut self, pressed: bool) {
        if !pressed {
            *self = Self::new();
        }
    }

    /// The bits recorded so far
    pub const fn bits(&self) -> KeyValue {
        self.bits
    }

    /// Ticks since the last bit was appended
    pub const fn ticks(&self) -> u16 {
        self.ticks
    }

    /// True once a threshold has finalized the sequence
    pub const fn is_ready(&self) -> bool {
        self.ready
    }

    fn append(&mut self, bit: bool) {
        self.bits = (self.bits << 1) | bit as KeyValue;
        self.ticks = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key_value::{DOUBLE_CLICK, LONG_PRESS_HOLD, LONG_PRESS_START, SINGLE_CLICK};

    fn config() -> ButtonConfig {
        ButtonConfig::new(3, 10, 20).unwrap()
    }

    /// Advances without edges, returning the first finalized value
    fn idle(sequence: &mut KeySequence, pressed: bool, ticks: u16) -> Option<KeyValue> {
        let mut first = None;
        for _ in 0..ticks {
            let finalized = sequence.advance(None, pressed, &config());
            first = first.or(finalized);
        }
        first
    }

    #[test]
    fn empty_sequence_never_finalizes() {
        let mut sequence = KeySequence::new();

        assert_eq!(idle(&mut sequence, false, 1000), None);
        assert_eq!(idle(&mut sequence, true, 1000), None);
        assert_eq!(sequence.ticks(), 0);
        assert!(!sequence.is_ready());
    }

    #[test]
    fn edges_append_bits_and_reset_ticks() {
        let mut sequence = KeySequence::new();

        assert_eq!(sequence.advance(Some(true), true, &config()), None);
        assert_eq!(sequence.bits(), 0b1);
        idle(&mut sequence, true, 5);
        assert_eq!(sequence.ticks(), 5);

        assert_eq!(sequence.advance(Some(false), false, &config()), None);
        assert_eq!(sequence.bits(), SINGLE_CLICK);
        assert_eq!(sequence.ticks(), 0);
    }

    #[test]
    fn release_finalizes_after_short_threshold() {
        let mut sequence = KeySequence::new();
        sequence.advance(Some(true), true, &config());
        sequence.advance(Some(false), false, &config());

        assert_eq!(idle(&mut sequence, false, 10), None);
        assert_eq!(sequence.advance(None, false, &config()), Some(SINGLE_CLICK));

        sequence.settle(false);
        assert_eq!(sequence, KeySequence::new());
    }

    #[test]
    fn clicks_within_short_threshold_accumulate() {
        let mut sequence = KeySequence::new();

        for _ in 0..2 {
            sequence.advance(Some(true), true, &config());
            idle(&mut sequence, true, 4);
            sequence.advance(Some(false), false, &config());
            assert_eq!(idle(&mut sequence, false, 8), None);
        }

        assert_eq!(sequence.bits(), DOUBLE_CLICK);
        assert_eq!(idle(&mut sequence, false, 10), Some(DOUBLE_CLICK));
    }

    #[test]
    fn held_press_synthesizes_long_press_bits() {
        let mut sequence = KeySequence::new();
        sequence.advance(Some(true), true, &config());

        assert_eq!(idle(&mut sequence, true, 20), None);
        assert_eq!(sequence.advance(None, true, &config()), Some(LONG_PRESS_START));
        sequence.settle(true);
        assert_eq!(sequence.ticks(), 0);

        // still ready, so the same value is reported until the next bit
        assert_eq!(sequence.advance(None, true, &config()), Some(LONG_PRESS_START));
        assert_eq!(idle(&mut sequence, true, 19), Some(LONG_PRESS_START));
        assert_eq!(sequence.advance(None, true, &config()), Some(LONG_PRESS_HOLD));

        // no further bits once the hold has been recorded
        idle(&mut sequence, true, 100);
        assert_eq!(sequence.bits(), LONG_PRESS_HOLD);
    }
}
