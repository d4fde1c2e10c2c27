//! Money-string codec.
//!
//! Cost, bounty and wish amounts are persisted as a single display string
//! (`"$25/hr"`, `"Free"`, `"100 total"`). The editors work on an amount and a
//! unit separately, so these functions convert between the two shapes.
//!
//! All functions are total: any input string produces a value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal stored for free offerings.
pub const FREE: &str = "Free";

/// Unit that is written with a space instead of a slash.
pub const TOTAL: &str = "total";

/// Editable view of a money string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoneyParts {
    pub amount: String,
    pub unit: String,
}

impl MoneyParts {
    pub fn new(amount: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            unit: unit.into(),
        }
    }

    pub fn is_free(&self) -> bool {
        is_free(&self.amount)
    }

    /// Recombines into the persisted form.
    pub fn combine(&self) -> String {
        combine(&self.amount, &self.unit)
    }
}

impl fmt::Display for MoneyParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.combine())
    }
}

/// On-screen keyboard to offer for an amount input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardHint {
    Numeric,
    Default,
}

/// Case-insensitive check for the `Free` literal.
pub fn is_free(amount: &str) -> bool {
    amount.trim().eq_ignore_ascii_case(FREE)
}

/// Splits a stored money string into amount and unit.
///
/// `$` signs are dropped before anything else is inspected, so `"$$30"` and
/// `"30"` parse identically. A trailing `total` (with or without a slash in
/// front of it) becomes the `total` unit; a bare `total` means a free total.
pub fn parse(raw: &str) -> MoneyParts {
    if raw.trim().is_empty() {
        return MoneyParts::default();
    }
    if is_free(raw) {
        return MoneyParts::new(FREE, "");
    }

    let stripped = strip_dollars(raw);
    let cleaned = stripped.trim();

    if let Some(rest) = strip_total_suffix(cleaned) {
        let amount = rest.trim_end().trim_end_matches('/').trim();
        let amount = if amount.is_empty() { FREE } else { amount };
        return MoneyParts::new(amount, TOTAL);
    }

    match cleaned.split_once('/') {
        Some((amount, unit)) => MoneyParts::new(amount.trim(), unit.trim()),
        None => MoneyParts::new(cleaned, ""),
    }
}

/// Amount as shown in the input box: `$` prefixed unless empty or free.
pub fn format_amount_for_display(amount: &str) -> String {
    if amount.is_empty() {
        String::new()
    } else if is_free(amount) {
        FREE.to_string()
    } else {
        format!("${}", amount)
    }
}

/// Joins an amount and unit into the persisted form.
///
/// A free amount always stores `"Free"` and discards the unit. The unit is
/// trimmed and `total` is matched case-insensitively, the same way `parse`
/// reads it back.
pub fn combine(amount: &str, unit: &str) -> String {
    if is_free(amount) {
        return FREE.to_string();
    }

    let unit = unit.trim();
    if unit.eq_ignore_ascii_case(TOTAL) {
        if amount.is_empty() {
            TOTAL.to_string()
        } else {
            format!("{} {}", amount, TOTAL)
        }
    } else if !unit.is_empty() {
        format!("{}/{}", amount, unit)
    } else {
        amount.to_string()
    }
}

/// Picks the keyboard for an amount. Purely cosmetic; storage accepts any text.
pub fn select_keyboard_hint(amount: &str) -> KeyboardHint {
    let trimmed = amount.trim();
    if trimmed.is_empty() || is_free(trimmed) {
        return KeyboardHint::Default;
    }
    match trimmed.chars().next() {
        Some(c) if c.is_ascii_digit() => KeyboardHint::Numeric,
        _ => KeyboardHint::Default,
    }
}

pub(crate) fn strip_dollars(input: &str) -> String {
    input.chars().filter(|c| *c != '$').collect()
}

fn strip_total_suffix(cleaned: &str) -> Option<&str> {
    let split = cleaned.len().checked_sub(TOTAL.len())?;
    if !cleaned.is_char_boundary(split) {
        return None;
    }
    let (rest, suffix) = cleaned.split_at(split);
    suffix.eq_ignore_ascii_case(TOTAL).then_some(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_and_blank_give_empty_parts() {
        assert_eq!(parse(""), MoneyParts::new("", ""));
        assert_eq!(parse("   "), MoneyParts::new("", ""));
    }

    #[test]
    fn parse_free_is_case_insensitive() {
        for raw in ["Free", "free", "FREE", "  fReE "] {
            assert_eq!(parse(raw), MoneyParts::new("Free", ""), "input {:?}", raw);
        }
    }

    #[test]
    fn parse_rate_with_dollar_sign() {
        assert_eq!(parse("$25/hr"), MoneyParts::new("25", "hr"));
    }

    #[test]
    fn parse_total_suffix() {
        assert_eq!(parse("100 total"), MoneyParts::new("100", "total"));
        assert_eq!(parse("100 TOTAL"), MoneyParts::new("100", "total"));
        assert_eq!(parse("$100total"), MoneyParts::new("100", "total"));
    }

    #[test]
    fn parse_total_with_slash() {
        assert_eq!(parse("25/total"), MoneyParts::new("25", "total"));
        assert_eq!(parse("$25 / Total"), MoneyParts::new("25", "total"));
    }

    #[test]
    fn parse_bare_total_is_free_total() {
        assert_eq!(parse("total"), MoneyParts::new("Free", "total"));
        assert_eq!(parse("/total"), MoneyParts::new("Free", "total"));
    }

    #[test]
    fn parse_keeps_multi_word_units() {
        assert_eq!(parse("40/2 weeks"), MoneyParts::new("40", "2 weeks"));
    }

    #[test]
    fn parse_splits_on_first_slash_only() {
        assert_eq!(parse("10/a/b"), MoneyParts::new("10", "a/b"));
    }

    #[test]
    fn parse_plain_amount_has_no_unit() {
        assert_eq!(parse("19.99"), MoneyParts::new("19.99", ""));
        assert_eq!(parse(" $ 7 "), MoneyParts::new("7", ""));
    }

    #[test]
    fn parse_strips_all_dollar_signs() {
        assert_eq!(parse("$$30"), parse("30"));
        assert_eq!(parse("$3$0/day"), MoneyParts::new("30", "day"));
    }

    #[test]
    fn parse_accepts_arbitrary_text() {
        assert_eq!(parse("negotiable"), MoneyParts::new("negotiable", ""));
        assert_eq!(parse("€5/hr"), MoneyParts::new("€5", "hr"));
    }

    #[test]
    fn parse_total_suffix_with_multibyte_text_does_not_panic() {
        assert_eq!(parse("日本語"), MoneyParts::new("日本語", ""));
        assert_eq!(parse("5 ätotal"), MoneyParts::new("5 ä", "total"));
    }

    #[test]
    fn display_amount_formats() {
        assert_eq!(format_amount_for_display(""), "");
        assert_eq!(format_amount_for_display("free"), "Free");
        assert_eq!(format_amount_for_display("Free"), "Free");
        assert_eq!(format_amount_for_display("25"), "$25");
    }

    #[test]
    fn combine_free_discards_unit() {
        assert_eq!(combine("Free", "hr"), "Free");
        assert_eq!(combine("FREE", "total"), "Free");
        assert_eq!(combine("free", ""), "Free");
    }

    #[test]
    fn combine_total_has_no_slash() {
        assert_eq!(combine("50", "total"), "50 total");
        assert_eq!(combine("", "total"), "total");
    }

    #[test]
    fn combine_normalizes_unit_spelling() {
        assert_eq!(combine("50", "Total"), "50 total");
        assert_eq!(combine("50", " TOTAL "), "50 total");
        assert_eq!(combine("10", " hr"), "10/hr");
        assert_eq!(parse(&combine("50", "Total")), MoneyParts::new("50", "total"));
    }

    #[test]
    fn combine_other_units_use_slash() {
        assert_eq!(combine("10", "hr"), "10/hr");
        assert_eq!(combine("40", "2 weeks"), "40/2 weeks");
        assert_eq!(combine("", "month"), "/month");
    }

    #[test]
    fn combine_without_unit_is_amount() {
        assert_eq!(combine("", ""), "");
        assert_eq!(combine("25", ""), "25");
    }

    #[test]
    fn parse_then_recombine_with_new_unit() {
        let parts = parse("");
        assert_eq!(combine("15", "month"), "15/month");
        assert_eq!(parts.unit, "");
    }

    #[test]
    fn keyboard_hint_rules() {
        assert_eq!(select_keyboard_hint("Free"), KeyboardHint::Default);
        assert_eq!(select_keyboard_hint(""), KeyboardHint::Default);
        assert_eq!(select_keyboard_hint("about 5"), KeyboardHint::Default);
        assert_eq!(select_keyboard_hint("25"), KeyboardHint::Numeric);
        assert_eq!(select_keyboard_hint(" 0.5"), KeyboardHint::Numeric);
    }

    #[test]
    fn money_parts_display_recombines() {
        assert_eq!(MoneyParts::new("25", "hr").to_string(), "25/hr");
        assert_eq!(MoneyParts::new("Free", "hr").to_string(), "Free");
    }
}
