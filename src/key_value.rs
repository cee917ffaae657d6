//! Key values are the press/release history of a button packed into an
//! integer, oldest transition in the most significant bit. A `1` is a press
//! (or a long press tick), a `0` is a release.

/// A finalized button code
pub type KeyValue = u32;

/// No event has been finalized yet
pub const NONE_PRESS: KeyValue = 0;

/// Press, release
pub const SINGLE_CLICK: KeyValue = 0b010;

/// Press, release, press, release
pub const DOUBLE_CLICK: KeyValue = 0b01010;

/// A click followed by a held press
pub const SINGLE_CLICK_THEN_LONG_PRESS: KeyValue = 0b01011;

/// Two clicks followed by a held press
pub const DOUBLE_CLICK_THEN_LONG_PRESS: KeyValue = 0b0101011;

/// A press held past the long threshold
pub const LONG_PRESS_START: KeyValue = 0b011;

/// A press held past twice the long threshold
pub const LONG_PRESS_HOLD: KeyValue = 0b0111;

/// Release after [LONG_PRESS_HOLD]
pub const LONG_PRESS_HOLD_END: KeyValue = 0b01110;

/// Returns true if the lowest `width` bits of `value` equal `pattern`. Widths
/// past the key value's size compare the whole value.
pub(crate) const fn tail_matches(value: KeyValue, pattern: KeyValue, width: u32) -> bool {
    let mask = match KeyValue::MAX.checked_shr(KeyValue::BITS.saturating_sub(width)) {
        Some(mask) => mask,
        None => 0,
    };
    value & mask == pattern
}

/// Returns true if `value` is an unbroken run of clicks, `0b1010...10`, of any
/// length. Long presses and pauses break the alternating pattern.
pub const fn is_repeat_click(value: KeyValue) -> bool {
    if !tail_matches(value, 0b10, 2) {
        return false;
    }

    // alternating bits xor'd with their neighbours give all ones
    let toggles = value ^ (value >> 1);
    toggles != 0 && toggles.wrapping_add(1) & toggles.wrapping_sub(1) == 0
}
