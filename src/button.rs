//! A single debounced button that classifies its clicks.
//!
//! Each tick the raw level is debounced, accepted edges are encoded into the
//! button's [KeySequence], and a finalized sequence is published as the key
//! value and run through the button's match table.

use crate::config::ButtonConfig;
use crate::debounced::Debouncer;
use crate::key_value::{is_repeat_click, KeyValue, NONE_PRESS};
use crate::matcher::{dispatch, MatchRule};
use crate::sequence::KeySequence;
use crate::source::{ButtonId, Level, LevelSource};

/// A button sampled once per tick
pub struct Button<'a> {
    id: ButtonId,
    /// The level read while the button is pressed
    active_level: Level,
    config: ButtonConfig,
    debouncer: Debouncer,
    sequence: KeySequence,
    /// The last finalized sequence
    key_value: KeyValue,
    rules: &'a [MatchRule],
}

impl<'a> Button<'a> {
    /// Creates a button with the default timing. The input is sampled once
    /// straight away so the current level is not mistaken for an edge.
    pub fn new<S>(source: &mut S, active_level: Level, id: ButtonId, rules: &'a [MatchRule]) -> Self
    where
        S: LevelSource + ?Sized,
    {
        Self::with_config(source, active_level, id, rules, ButtonConfig::DEFAULT)
    }

    /// Creates a button with custom timing
    pub fn with_config<S>(
        source: &mut S,
        active_level: Level,
        id: ButtonId,
        rules: &'a [MatchRule],
        config: ButtonConfig,
    ) -> Self
    where
        S: LevelSource + ?Sized,
    {
        let level = source.level(id);

        Self {
            id,
            active_level,
            config,
            debouncer: Debouncer::new(level, config.debounce_ticks()),
            sequence: KeySequence::new(),
            key_value: NONE_PRESS,
            rules,
        }
    }

    /// Samples the button's input from `source` and runs one tick
    pub fn poll<S>(&mut self, source: &mut S) -> Option<KeyValue>
    where
        S: LevelSource + ?Sized,
    {
        let raw = source.level(self.id);
        self.update(raw)
    }

    /// Runs one tick with an already sampled raw level. Returns the key value
    /// if it was finalized (and dispatched) on this tick.
    pub fn update(&mut self, raw: Level) -> Option<KeyValue> {
        let debounced = self.debouncer.debounce(raw);
        let pressed = debounced.level == self.active_level;

        let edge = if debounced.is_changed {
            #[cfg(feature = "logging")]
            defmt::trace!("button {}: level {}", self.id, debounced.level);

            Some(pressed)
        } else {
            None
        };

        let key_value = self.sequence.advance(edge, pressed, &self.config)?;
        self.key_value = key_value;

        #[cfg(feature = "logging")]
        defmt::debug!("button {}: key value {:b}", self.id, key_value);

        let rules = self.rules;
        dispatch(rules, self);

        self.sequence.settle(pressed);
        Some(key_value)
    }

    /// Identifies this button to its [LevelSource]
    pub const fn id(&self) -> ButtonId {
        self.id
    }

    /// The level read while the button is pressed
    pub const fn active_level(&self) -> Level {
        self.active_level
    }

    /// The debounced level
    pub const fn level(&self) -> Level {
        self.debouncer.level()
    }

    /// True while the debounced level is the active level
    pub fn is_pressed(&self) -> bool {
        self.level() == self.active_level
    }

    /// The last finalized key value, or [NONE_PRESS] if nothing has been
    /// finalized yet. Kept until the next finalization.
    pub const fn key_value(&self) -> KeyValue {
        self.key_value
    }

    /// True if the last key value was an unbroken run of clicks
    pub const fn is_repeat_click(&self) -> bool {
        is_repeat_click(self.key_value)
    }

    /// The sequence recorded since the last finalized release
    pub const fn state_bits(&self) -> KeyValue {
        self.sequence.bits()
    }

    /// Ticks since the last bit was recorded
    pub const fn ticks(&self) -> u16 {
        self.sequence.ticks()
    }

    /// True once the current sequence has been finalized
    pub const fn is_event_ready(&self) -> bool {
        self.sequence.is_ready()
    }

    /// The timing used by this button
    pub const fn config(&self) -> &ButtonConfig {
        &self.config
    }

    /// The match table dispatched on finalization
    pub const fn rules(&self) -> &'a [MatchRule] {
        self.rules
    }
}
