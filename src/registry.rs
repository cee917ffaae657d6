//! The set of buttons swept on every tick. The registry owns its buttons while
//! they are started and hands them back when they are stopped, so a button can
//! be started and stopped any number of times.

use core::fmt;

use heapless::Vec;

use crate::button::Button;
use crate::config::ButtonConfig;
use crate::key_value::KeyValue;
use crate::matcher::MatchRule;
use crate::source::{ButtonId, Level, LevelSource};

/// Reasons a button could not be started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub enum RegistryError {
    /// A button with the same id is already being swept
    AlreadyRegistered,
    /// The registry has no free slots
    Full,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::AlreadyRegistered => f.write_str("button already registered"),
            RegistryError::Full => f.write_str("button registry is full"),
        }
    }
}

/// Up to `N` started buttons sharing one [LevelSource]
pub struct ButtonRegistry<'a, S, const N: usize> {
    source: S,
    buttons: Vec<Button<'a>, N>,
}

impl<'a, S, const N: usize> ButtonRegistry<'a, S, N> {
    /// Creates an empty registry reading levels from `source`
    pub const fn new(source: S) -> Self {
        Self {
            source,
            buttons: Vec::new(),
        }
    }

    /// Adds a button to the sweep. Buttons are identified by id, so a second
    /// button with the same id is rejected. The rejected button is returned
    /// alongside the error.
    pub fn start(&mut self, button: Button<'a>) -> Result<(), (RegistryError, Button<'a>)> {
        if self.contains(button.id()) {
            #[cfg(feature = "logging")]
            defmt::warn!("button {} already registered", button.id());

            return Err((RegistryError::AlreadyRegistered, button));
        }

        self.buttons
            .push(button)
            .map_err(|button| (RegistryError::Full, button))
    }

    /// Removes a button from the sweep, returning it with its state intact.
    /// Does not preserve the sweep order of the remaining buttons.
    pub fn stop(&mut self, id: ButtonId) -> Option<Button<'a>> {
        let index = self.buttons.iter().position(|button| button.id() == id)?;
        Some(self.buttons.swap_remove(index))
    }

    /// True if a button with this id is being swept
    pub fn contains(&self, id: ButtonId) -> bool {
        self.get(id).is_some()
    }

    /// The started button with this id
    pub fn get(&self, id: ButtonId) -> Option<&Button<'a>> {
        self.buttons.iter().find(|button| button.id() == id)
    }

    /// The last finalized key value of the started button with this id
    pub fn key_value(&self, id: ButtonId) -> Option<KeyValue> {
        self.get(id).map(Button::key_value)
    }

    /// Iterates over the started buttons in sweep order
    pub fn iter(&self) -> impl Iterator<Item = &Button<'a>> {
        self.buttons.iter()
    }

    /// The number of started buttons
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    /// True if no buttons are started
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// The shared level source
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

impl<'a, S, const N: usize> ButtonRegistry<'a, S, N>
where
    S: LevelSource,
{
    /// Creates a button with default timing, seeded from this registry's
    /// source. The button still has to be started.
    pub fn create(&mut self, active_level: Level, id: ButtonId, rules: &'a [MatchRule]) -> Button<'a> {
        Button::new(&mut self.source, active_level, id, rules)
    }

    /// Creates a button with custom timing, seeded from this registry's source
    pub fn create_with_config(
        &mut self,
        active_level: Level,
        id: ButtonId,
        rules: &'a [MatchRule],
        config: ButtonConfig,
    ) -> Button<'a> {
        Button::with_config(&mut self.source, active_level, id, rules, config)
    }

    /// Runs one tick for every started button. Call this at the configured
    /// tick interval.
    pub fn ticks(&mut self) {
        for button in self.buttons.iter_mut() {
            button.poll(&mut self.source);
        }
    }
}
