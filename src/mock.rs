//! A scripted input pin for driving buttons from tests

use core::cell::Cell;

use embedded_hal::digital::v2::InputPin;

use crate::source::Level;

/// One run of a script: the sample returned, `None` for a failed read, and
/// how many reads it lasts
pub type Step = (Option<Level>, usize);

/// A pin that replays a script, one sample per read. Once the script runs out
/// the last sample repeats forever. Note that creating a button reads its pin
/// once to seed the debounced level.
pub struct ScriptedPin<'a> {
    script: &'a [Step],
    /// Index of the current step and reads already taken from it
    cursor: Cell<(usize, usize)>,
}

impl<'a> ScriptedPin<'a> {
    pub fn new(script: &'a [Step]) -> Self {
        ScriptedPin {
            script,
            cursor: Cell::new((0, 0)),
        }
    }

    /// Reads the next sample
    fn sample(&self) -> Option<Level> {
        let (mut step, mut taken) = self.cursor.get();

        while step < self.script.len() && taken >= self.script[step].1 {
            step += 1;
            taken = 0;
        }

        match self.script.get(step) {
            Some(&(sample, _)) => {
                self.cursor.set((step, taken + 1));
                sample
            }
            None => self.script.last().and_then(|&(sample, _)| sample),
        }
    }
}

type MockError = &'static str;

impl InputPin for ScriptedPin<'_> {
    type Error = MockError;

    fn is_high(&self) -> Result<bool, Self::Error> {
        self.sample()
            .map(|level| level == Level::High)
            .ok_or("scripted read failure")
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        self.is_high().map(|is_high| !is_high)
    }
}
