//! Match tables map finalized key values to handlers. Each rule combines its
//! operand with the key value using a [MatchOperator] and fires when the result
//! equals its target, so a single rule can cover a whole family of key values.

use crate::button::Button;
use crate::key_value::KeyValue;

/// Called with the button whose key value matched a rule. The button can be
/// read but not modified.
pub type KeyHandler = fn(&Button<'_>);

/// How a rule's operand is combined with the key value before comparing
/// against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
#[repr(u8)]
pub enum MatchOperator {
    /// Compare the key value directly, ignoring the operand
    Pass = 0,
    /// `operand & key_value`
    And = 1 << 0,
    /// `operand | key_value`
    Or = 1 << 1,
    /// `!key_value`, ignoring the operand
    Not = 1 << 2,
    /// `operand ^ key_value`
    Xor = 1 << 3,
}

impl MatchOperator {
    /// Combines the operand with a key value
    pub const fn apply(self, operand: KeyValue, key_value: KeyValue) -> KeyValue {
        match self {
            MatchOperator::Pass => key_value,
            MatchOperator::And => operand & key_value,
            MatchOperator::Or => operand | key_value,
            MatchOperator::Not => !key_value,
            MatchOperator::Xor => operand ^ key_value,
        }
    }
}

impl TryFrom<u8> for MatchOperator {
    /// The unrecognised tag
    type Error = u8;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(MatchOperator::Pass),
            1 => Ok(MatchOperator::And),
            2 => Ok(MatchOperator::Or),
            4 => Ok(MatchOperator::Not),
            8 => Ok(MatchOperator::Xor),
            other => Err(other),
        }
    }
}

/// One entry of a match table
#[derive(Clone, Copy)]
pub struct MatchRule {
    /// Combined with the key value by `operator`
    pub operand: KeyValue,
    /// How to combine `operand` and the key value
    pub operator: MatchOperator,
    /// The result that makes this rule fire
    pub target: KeyValue,
    /// Rules without a handler are skipped
    pub handler: Option<KeyHandler>,
}

impl MatchRule {
    /// A rule firing when `operator(operand, key_value) == target`
    pub const fn new(
        operand: KeyValue,
        operator: MatchOperator,
        target: KeyValue,
        handler: KeyHandler,
    ) -> Self {
        Self {
            operand,
            operator,
            target,
            handler: Some(handler),
        }
    }

    /// A rule firing when the key value equals `target`
    pub const fn exact(target: KeyValue, handler: KeyHandler) -> Self {
        Self {
            operand: 0,
            operator: MatchOperator::Pass,
            target,
            handler: Some(handler),
        }
    }

    /// A placeholder rule that never fires
    pub const fn disabled() -> Self {
        Self {
            operand: 0,
            operator: MatchOperator::Pass,
            target: 0,
            handler: None,
        }
    }

    /// Returns true if this rule's condition holds for `key_value`, whether or
    /// not it has a handler
    pub const fn matches(&self, key_value: KeyValue) -> bool {
        self.operator.apply(self.operand, key_value) == self.target
    }
}

/// Runs every rule in `rules` against the button's key value, in table order,
/// calling each matching handler. Returns the number of handlers called.
pub fn dispatch(rules: &[MatchRule], button: &Button<'_>) -> usize {
    let key_value = button.key_value();
    let mut fired = 0;

    for rule in rules {
        let Some(handler) = rule.handler else {
            continue;
        };

        if rule.matches(key_value) {
            handler(button);
            fired += 1;
        }
    }

    fired
}
