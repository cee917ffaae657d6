#![deny(missing_docs)]
#![deny(warnings)]
#![deny(unsafe_code)]
#![no_std]

//! EMBEDDED BUTTON
//!
//! Debounces polled button inputs and classifies their click patterns. Each
//! button records its debounced press and release edges as bits in a growing
//! key value, so single clicks, double clicks, long presses and any mixture of
//! them become plain integers like `0b1010` that can be matched against a
//! table of rules.
//!
//! The crate does not own a timer. Call [ButtonRegistry::ticks] (or
//! [Button::poll] for a lone button) at a fixed interval, 5ms by default, and
//! express all thresholds in [ButtonConfig] in ticks of that interval.
//!
//! ```
//! use embedded_button::{key_value, Button, ButtonId, ButtonRegistry, Level, MatchRule};
//!
//! fn on_double_click(button: &Button<'_>) {
//!     assert_eq!(button.key_value(), key_value::DOUBLE_CLICK);
//! }
//!
//! static RULES: [MatchRule; 1] = [MatchRule::exact(key_value::DOUBLE_CLICK, on_double_click)];
//!
//! let read_pin = |_: ButtonId| Level::High;
//! let mut registry: ButtonRegistry<'_, _, 4> = ButtonRegistry::new(read_pin);
//! let button = registry.create(Level::Low, 0, &RULES);
//! registry.start(button).ok();
//!
//! // from the 5ms timer
//! registry.ticks();
//! ```
//!
//! Logging through [`defmt`] is available with the `logging` feature.
//!
//! [`defmt`]: https://docs.rs/defmt

pub mod button;
pub mod config;
pub mod debounced;
pub mod key_value;
pub mod matcher;
pub mod registry;
pub mod sequence;
pub mod shared;
pub mod source;

#[cfg(test)]
mod mock;

pub use button::Button;
pub use config::{ButtonConfig, ConfigError};
pub use debounced::{DebounceResult, Debouncer};
pub use key_value::{is_repeat_click, KeyValue};
pub use matcher::{KeyHandler, MatchOperator, MatchRule};
pub use registry::{ButtonRegistry, RegistryError};
pub use sequence::KeySequence;
pub use shared::SharedRegistry;
pub use source::{ButtonId, Level, LevelSource, PinBank};
