//! Timing configuration for buttons. Every threshold is counted in ticks, so
//! the values must be recalculated if the polling interval changes.

use core::fmt;

/// The default interval between two calls to the tick sweep
pub const TICKS_INTERVAL_MS: u16 = 5;

/// The default number of consecutive disagreeing samples before a new level is accepted
pub const DEBOUNCE_TICKS: u8 = 3;

/// The default quiet time after a release before a click sequence is finalized
pub const SHORT_PRESS_MS: u16 = 350;

/// The default time a button must be held to start (and continue) a long press
pub const LONG_PRESS_MS: u16 = 1000;

/// Errors raised when building a [ButtonConfig]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub enum ConfigError {
    /// The polling interval was zero
    ZeroTickInterval,
    /// The debounce threshold was zero, which would accept every sample
    ZeroDebounce,
    /// The short threshold was below the debounce threshold
    ShortBelowDebounce,
    /// The long threshold was below the debounce threshold
    LongBelowDebounce,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ConfigError::ZeroTickInterval => "tick interval must be non-zero",
            ConfigError::ZeroDebounce => "debounce threshold must be non-zero",
            ConfigError::ShortBelowDebounce => "short threshold is below the debounce threshold",
            ConfigError::LongBelowDebounce => "long threshold is below the debounce threshold",
        };

        f.write_str(msg)
    }
}

/// Tick thresholds used by a button's debounce filter and sequence encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub struct ButtonConfig {
    debounce_ticks: u8,
    short_ticks: u16,
    long_ticks: u16,
}

impl ButtonConfig {
    /// 3 tick debounce, 350ms short and 1000ms long thresholds at a 5ms tick.
    /// Checked at compile time.
    pub const DEFAULT: Self = match Self::from_millis(
        TICKS_INTERVAL_MS,
        DEBOUNCE_TICKS,
        SHORT_PRESS_MS,
        LONG_PRESS_MS,
    ) {
        Ok(config) => config,
        Err(_) => panic!("invalid default button timing"),
    };

    /// Creates a configuration from thresholds given directly in ticks
    pub const fn new(
        debounce_ticks: u8,
        short_ticks: u16,
        long_ticks: u16,
    ) -> Result<Self, ConfigError> {
        if debounce_ticks == 0 {
            return Err(ConfigError::ZeroDebounce);
        }

        if short_ticks < debounce_ticks as u16 {
            return Err(ConfigError::ShortBelowDebounce);
        }

        if long_ticks < debounce_ticks as u16 {
            return Err(ConfigError::LongBelowDebounce);
        }

        Ok(Self {
            debounce_ticks,
            short_ticks,
            long_ticks,
        })
    }

    /// Creates a configuration from a polling interval and thresholds in
    /// milliseconds. Thresholds are rounded down to whole ticks.
    pub const fn from_millis(
        tick_interval_ms: u16,
        debounce_ticks: u8,
        short_ms: u16,
        long_ms: u16,
    ) -> Result<Self, ConfigError> {
        if tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        Self::new(
            debounce_ticks,
            short_ms / tick_interval_ms,
            long_ms / tick_interval_ms,
        )
    }

    /// Consecutive disagreeing samples required to accept a new level
    pub const fn debounce_ticks(&self) -> u8 {
        self.debounce_ticks
    }

    /// Ticks of inactivity after which a released sequence is finalized
    pub const fn short_ticks(&self) -> u16 {
        self.short_ticks
    }

    /// Ticks of holding after which a long press bit is appended
    pub const fn long_ticks(&self) -> u16 {
        self.long_ticks
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
