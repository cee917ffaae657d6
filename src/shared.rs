//! A [ButtonRegistry] that can be swept from a timer interrupt while the
//! application starts, stops and queries buttons. Every access runs inside a
//! critical section.
//!
//! Handlers run inside the sweep's critical section, so they must not call
//! back into the same [SharedRegistry]. Doing so panics on the inner `RefCell`.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::button::Button;
use crate::key_value::KeyValue;
use crate::registry::{ButtonRegistry, RegistryError};
use crate::source::{ButtonId, LevelSource};

/// A registry guarded by a critical section, suitable for a `static`
pub struct SharedRegistry<'a, S, const N: usize> {
    inner: Mutex<RefCell<ButtonRegistry<'a, S, N>>>,
}

impl<'a, S, const N: usize> SharedRegistry<'a, S, N> {
    /// Wraps a registry
    pub const fn new(registry: ButtonRegistry<'a, S, N>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(registry)),
        }
    }

    /// Runs `f` with exclusive access to the registry
    pub fn lock<R>(&self, f: impl FnOnce(&mut ButtonRegistry<'a, S, N>) -> R) -> R {
        critical_section::with(|cs| f(&mut self.inner.borrow_ref_mut(cs)))
    }

    /// See [ButtonRegistry::start]
    pub fn start(&self, button: Button<'a>) -> Result<(), (RegistryError, Button<'a>)> {
        self.lock(|registry| registry.start(button))
    }

    /// See [ButtonRegistry::stop]
    pub fn stop(&self, id: ButtonId) -> Option<Button<'a>> {
        self.lock(|registry| registry.stop(id))
    }

    /// See [ButtonRegistry::key_value]
    pub fn key_value(&self, id: ButtonId) -> Option<KeyValue> {
        self.lock(|registry| registry.key_value(id))
    }
}

impl<'a, S, const N: usize> SharedRegistry<'a, S, N>
where
    S: LevelSource,
{
    /// Runs one tick for every started button, see [ButtonRegistry::ticks]
    pub fn ticks(&self) {
        self.lock(|registry| registry.ticks())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key_value::{NONE_PRESS, SINGLE_CLICK};
    use crate::source::Level;
    use core::sync::atomic::{AtomicU8, Ordering};

    type Source = fn(ButtonId) -> Level;

    #[test]
    fn static_registry_swept_like_an_interrupt() {
        static PIN: AtomicU8 = AtomicU8::new(1);

        fn read(_: ButtonId) -> Level {
            Level::from_bit(PIN.load(Ordering::Relaxed))
        }

        static BUTTONS: SharedRegistry<'static, Source, 2> =
            SharedRegistry::new(ButtonRegistry::new(read as Source));

        let button = BUTTONS.lock(|registry| registry.create(Level::Low, 0, &[]));
        assert!(BUTTONS.start(button).is_ok());

        let twin = BUTTONS.lock(|registry| registry.create(Level::Low, 0, &[]));
        assert!(matches!(
            BUTTONS.start(twin),
            Err((RegistryError::AlreadyRegistered, _))
        ));

        for level in [0, 1] {
            PIN.store(level, Ordering::Relaxed);
            for _ in 0..5 {
                BUTTONS.ticks();
            }
        }
        assert_eq!(BUTTONS.key_value(0), Some(NONE_PRESS));

        for _ in 0..80 {
            BUTTONS.ticks();
        }
        assert_eq!(BUTTONS.key_value(0), Some(SINGLE_CLICK));

        assert!(BUTTONS.stop(0).is_some());
        assert_eq!(BUTTONS.key_value(0), None);
    }
}
