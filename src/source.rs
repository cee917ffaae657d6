//! Sources of raw button levels. A [LevelSource] is sampled once per button per
//! tick, so implementations must return immediately.

use embedded_hal::digital::v2::InputPin;

/// Identifies a physical input when asking a [LevelSource] for its level
pub type ButtonId = u8;

/// A logical input level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub enum Level {
    /// Logic 0
    Low,
    /// Logic 1
    High,
}

impl Level {
    /// Returns the level for a raw bit, where any non-zero value is [Level::High]
    pub const fn from_bit(bit: u8) -> Self {
        if bit == 0 {
            Level::Low
        } else {
            Level::High
        }
    }
}

impl From<bool> for Level {
    fn from(is_high: bool) -> Self {
        if is_high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Reads the current raw level of the input selected by a [ButtonId]. One
/// source can be shared between several buttons.
pub trait LevelSource {
    /// Samples the input belonging to `id`
    fn level(&mut self, id: ButtonId) -> Level;
}

impl<F> LevelSource for F
where
    F: FnMut(ButtonId) -> Level,
{
    fn level(&mut self, id: ButtonId) -> Level {
        self(id)
    }
}

/// A [LevelSource] over a fixed set of input pins, where a [ButtonId] is the
/// index of the pin in the bank.
///
/// A failed read repeats the last level successfully read from that pin, so a
/// flaky pin can never produce an edge. Pins that have not been read yet, and
/// unknown ids, read as the bank's idle level.
pub struct PinBank<P, const N: usize> {
    pins: [P; N],
    /// The last good reading of each pin
    last: [Level; N],
    idle: Level,
}

impl<P, const N: usize> PinBank<P, N>
where
    P: InputPin,
{
    /// Creates a new bank from the given pins. `idle` should be the released
    /// level of the buttons, i.e. high for pulled-up, active-low buttons.
    pub fn new(pins: [P; N], idle: Level) -> Self {
        Self {
            pins,
            last: [idle; N],
            idle,
        }
    }
}

impl<P, const N: usize> LevelSource for PinBank<P, N>
where
    P: InputPin,
{
    fn level(&mut self, id: ButtonId) -> Level {
        let index = id as usize;
        let Some(pin) = self.pins.get(index) else {
            return self.idle;
        };

        match pin.is_high() {
            Ok(is_high) => {
                self.last[index] = is_high.into();
            }
            Err(_) => {
                #[cfg(feature = "logging")]
                defmt::warn!("pin {} read failed, holding {}", id, self.last[index]);
            }
        }

        self.last[index]
    }
}
