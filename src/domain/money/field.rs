//! Edit-time state of one persisted money field.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::codec::{self, KeyboardHint, MoneyParts};
use super::CostUnit;

/// A cost, bounty or wish amount as stored on the backend.
///
/// The stored string is the source of truth; amount and unit are derived on
/// every read so the two editor controls always agree with what is saved.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoneyField(String);

impl MoneyField {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn free() -> Self {
        Self(codec::FREE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn parts(&self) -> MoneyParts {
        codec::parse(&self.0)
    }

    pub fn amount(&self) -> String {
        self.parts().amount
    }

    pub fn unit(&self) -> String {
        self.parts().unit
    }

    /// Known dropdown unit, if the stored unit is one.
    pub fn cost_unit(&self) -> Option<CostUnit> {
        self.unit().parse().ok()
    }

    pub fn is_free(&self) -> bool {
        self.parts().is_free()
    }

    /// Amount for the input box, `$` prefixed.
    pub fn display_amount(&self) -> String {
        codec::format_amount_for_display(&self.amount())
    }

    pub fn keyboard_hint(&self) -> KeyboardHint {
        codec::select_keyboard_hint(&self.amount())
    }

    /// Handles a keystroke in the amount box. The `$` shown in the box is
    /// not part of the stored value.
    pub fn set_amount_input(&mut self, input: &str) {
        let amount = codec::strip_dollars(input);
        let unit = self.unit();
        self.0 = codec::combine(amount.trim(), &unit);
    }

    /// Handles a unit dropdown selection; `None` clears the unit.
    ///
    /// Returns `false` without touching the value while the amount is free.
    pub fn select_unit(&mut self, unit: Option<CostUnit>) -> bool {
        let parts = self.parts();
        if parts.is_free() {
            return false;
        }
        let unit = unit.map(|u| u.as_str()).unwrap_or("");
        self.0 = codec::combine(&parts.amount, unit);
        true
    }

    pub fn mark_free(&mut self) {
        self.0 = codec::FREE.to_string();
    }
}

impl fmt::Display for MoneyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for MoneyField {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for MoneyField {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}
