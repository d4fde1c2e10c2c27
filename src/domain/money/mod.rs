//! Money module - cost, bounty and wish amount strings.
//!
//! - `codec` - Pure parse/format/combine functions over the stored string
//! - `unit` - Dropdown units
//! - `field` - Per-field editor state used by the profile and business forms

pub mod codec;
mod field;
mod unit;

pub use codec::{
    combine, format_amount_for_display, parse, select_keyboard_hint, KeyboardHint, MoneyParts,
};
pub use field::MoneyField;
pub use unit::CostUnit;
