//! # Currency Module
//!
//! Formatting and parsing primitives for masked currency text.
//!
//! ## Two Representations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CANONICAL                         DISPLAYED                            │
//! │                                                                         │
//! │  123456700 (i64 cents) ◄────────►  "$1,234,567.00"   (idle)             │
//! │                                    "1234567.00"      (editing)          │
//! │                                                                         │
//! │  sanitize_input ──► to_cents ──► clamp ──► format_for_display           │
//! │                                                                         │
//! │  The canonical side is ALWAYS integer minor units. Text is only ever    │
//! │  parsed with integer arithmetic, never through a float.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Sanitized Form
//! `sanitize_input` produces digits with at most one `.` and at most
//! `decimal_places` fractional digits, whatever separators the config uses.
//! That form is what `to_cents` consumes and what the input engine keeps
//! while a field is being edited.
//!
//! ## Usage
//! ```rust
//! use catalog_core::currency::{format_for_display, sanitize_input, to_cents, CurrencyConfig, DisplayMode};
//!
//! let config = CurrencyConfig::default();
//! let text = sanitize_input("$1,234.5", &config);
//! assert_eq!(text, "1234.5");
//!
//! let cents = to_cents(&text, &config);
//! assert_eq!(cents, 123450);
//! assert_eq!(format_for_display(cents, DisplayMode::Idle, &config), "$1,234.50");
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

/// Upper bound for `decimal_places`; 10^9 leaves headroom in `i64` cents.
pub const MAX_DECIMAL_PLACES: u32 = 9;

/// The point character used by sanitized text, independent of the config.
pub const SANITIZED_POINT: char = '.';

// =============================================================================
// Currency Config
// =============================================================================

/// Where the currency symbol sits relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    /// `$10.00`
    #[default]
    Before,
    /// `10,00€`
    After,
}

/// Immutable description of how a currency is displayed.
///
/// ## Default
/// US dollars: `$`, `.` decimal, `,` grouping, 2 places, symbol before.
///
/// Fields are public so the config can be deserialized from app
/// configuration; use [`CurrencyConfig::new`] or [`CurrencyConfig::validate`]
/// when the values come from outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyConfig {
    /// Currency glyph, e.g. `"$"`.
    pub symbol: String,

    /// Separates integer and fractional digits in display.
    pub decimal_separator: char,

    /// Grouping separator inserted every three integer digits.
    pub thousands_separator: char,

    /// Fixed fractional digit count.
    pub decimal_places: u32,

    /// Placement of the symbol.
    pub symbol_position: SymbolPosition,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        CurrencyConfig {
            symbol: "$".to_string(),
            decimal_separator: '.',
            thousands_separator: ',',
            decimal_places: 2,
            symbol_position: SymbolPosition::Before,
        }
    }
}

impl CurrencyConfig {
    /// Creates a validated currency configuration.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::currency::{CurrencyConfig, SymbolPosition};
    ///
    /// let euro = CurrencyConfig::new("€", ',', '.', 2, SymbolPosition::After).unwrap();
    /// assert_eq!(euro.decimal_separator, ',');
    ///
    /// assert!(CurrencyConfig::new("$", '.', '.', 2, SymbolPosition::Before).is_err());
    /// ```
    pub fn new(
        symbol: impl Into<String>,
        decimal_separator: char,
        thousands_separator: char,
        decimal_places: u32,
        symbol_position: SymbolPosition,
    ) -> CoreResult<Self> {
        let config = CurrencyConfig {
            symbol: symbol.into(),
            decimal_separator,
            thousands_separator,
            decimal_places,
            symbol_position,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that the config can format and parse unambiguously.
    pub fn validate(&self) -> CoreResult<()> {
        if self.decimal_separator == self.thousands_separator {
            return Err(CoreError::InvalidCurrencyConfig {
                reason: "decimal and thousands separators must differ".to_string(),
            });
        }

        if self.decimal_separator.is_ascii_digit() || self.thousands_separator.is_ascii_digit() {
            return Err(CoreError::InvalidCurrencyConfig {
                reason: "separators cannot be digits".to_string(),
            });
        }

        if self.symbol.chars().any(|c| c.is_ascii_digit()) {
            return Err(CoreError::InvalidCurrencyConfig {
                reason: "symbol cannot contain digits".to_string(),
            });
        }

        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(CoreError::InvalidCurrencyConfig {
                reason: format!("at most {} decimal places are supported", MAX_DECIMAL_PLACES),
            });
        }

        Ok(())
    }

    /// Decimal places actually used, capped at [`MAX_DECIMAL_PLACES`].
    #[inline]
    pub fn places(&self) -> u32 {
        self.decimal_places.min(MAX_DECIMAL_PLACES)
    }

    /// Minor units per major unit (`10^places`).
    #[inline]
    pub fn scale(&self) -> i64 {
        10_i64.pow(self.places())
    }

    /// Whether `c` acts as the decimal point in user text.
    ///
    /// The configured separator always does. A literal `.` does too unless
    /// the config uses it for grouping.
    #[inline]
    pub fn is_point(&self, c: char) -> bool {
        c == self.decimal_separator || (c == SANITIZED_POINT && self.thousands_separator != SANITIZED_POINT)
    }
}

// =============================================================================
// Sanitize / Parse
// =============================================================================

/// Cleans free-form text into the sanitized numeric form.
///
/// ## Rules
/// 1. Every occurrence of the currency symbol is removed
/// 2. Only digits and the decimal point survive
/// 3. Extra points collapse: the first is kept, later digit groups join
///    the fraction (`"1.2.3"` → `"1.23"`)
/// 4. Fractional digits past `decimal_places` are truncated, not rounded
/// 5. With zero decimal places the point is dropped entirely
///
/// ## Example
/// ```rust
/// use catalog_core::currency::{sanitize_input, CurrencyConfig};
///
/// let config = CurrencyConfig::default();
/// assert_eq!(sanitize_input("a1b2.3c4", &config), "12.34");
/// assert_eq!(sanitize_input("1.2.3", &config), "1.23");
/// assert_eq!(sanitize_input("abc", &config), "");
/// ```
pub fn sanitize_input(raw: &str, config: &CurrencyConfig) -> String {
    let places = config.places() as usize;
    let without_symbol = if config.symbol.is_empty() {
        raw.to_string()
    } else {
        raw.replace(config.symbol.as_str(), "")
    };

    let mut integer = String::new();
    let mut fraction = String::new();
    let mut seen_point = false;

    for c in without_symbol.chars() {
        if c.is_ascii_digit() {
            if seen_point {
                fraction.push(c);
            } else {
                integer.push(c);
            }
        } else if config.is_point(c) {
            seen_point = true;
        }
    }

    if places == 0 || !seen_point {
        return integer;
    }

    // ASCII digits only, so byte length equals char count
    fraction.truncate(places);
    format!("{}{}{}", integer, SANITIZED_POINT, fraction)
}

/// Converts sanitized text to canonical cents.
///
/// ## Rules
/// - `""`, `"."` and anything that is not `digits[.digits]` → 0
/// - A trailing point parses as its integer prefix (`"12."` → 1200)
/// - Extra fractional digits round half away from zero (`"1.005"` → 101)
/// - Saturates at `i64::MAX` instead of overflowing
///
/// ## Example
/// ```rust
/// use catalog_core::currency::{to_cents, CurrencyConfig};
///
/// let config = CurrencyConfig::default();
/// assert_eq!(to_cents("19.99", &config), 1999);
/// assert_eq!(to_cents("19.", &config), 1900);
/// assert_eq!(to_cents("", &config), 0);
/// ```
pub fn to_cents(sanitized: &str, config: &CurrencyConfig) -> i64 {
    let text = sanitized.trim();
    let (integer, fraction) = text.split_once(SANITIZED_POINT).unwrap_or((text, ""));

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(integer) || !all_digits(fraction) {
        return 0;
    }

    let places = config.places() as usize;
    let fraction = fraction.as_bytes();

    let mut cents: i64 = 0;
    for b in integer.bytes() {
        cents = push_digit(cents, b);
    }
    for i in 0..places {
        cents = push_digit(cents, fraction.get(i).copied().unwrap_or(b'0'));
    }

    // Half away from zero on the first dropped digit
    if fraction.get(places).is_some_and(|b| *b >= b'5') {
        cents = cents.saturating_add(1);
    }

    cents
}

#[inline]
fn push_digit(acc: i64, digit: u8) -> i64 {
    acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
}

/// Renders cents as the sanitized text a field is seeded with on focus.
///
/// No grouping, no symbol, exactly `decimal_places` fraction digits.
/// Zero seeds an empty field so the placeholder stays visible.
///
/// ## Example
/// ```rust
/// use catalog_core::currency::{cents_to_edit_text, CurrencyConfig};
///
/// let config = CurrencyConfig::default();
/// assert_eq!(cents_to_edit_text(1000, &config), "10.00");
/// assert_eq!(cents_to_edit_text(0, &config), "");
/// ```
pub fn cents_to_edit_text(cents: i64, config: &CurrencyConfig) -> String {
    if cents == 0 {
        return String::new();
    }

    let (whole, frac) = split_units(cents, config);
    let sign = if cents < 0 { "-" } else { "" };
    let places = config.places() as usize;

    if places == 0 {
        format!("{}{}", sign, whole)
    } else {
        format!("{}{}{}{:0width$}", sign, whole, SANITIZED_POINT, frac, width = places)
    }
}

// =============================================================================
// Display
// =============================================================================

/// Which rendering a field needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode<'a> {
    /// Not focused: full formatting, zero renders empty.
    Idle,
    /// Focused, carrying the sanitized text the user has typed so far.
    Editing(&'a str),
}

/// Produces the text a currency field shows.
///
/// ## Behavior
/// ```text
/// Idle,    cents == 0        → ""               (placeholder shows instead)
/// Idle,    cents != 0        → "$1,234,567.00"  (format_cents)
/// Editing, "10."             → "10."            (kept verbatim)
/// Editing, "1234.5"          → "1234.5"         (no grouping, no symbol)
/// ```
///
/// While editing the typed text is returned unchanged, except that the
/// point is shown with the configured decimal separator. Grouping or a
/// symbol mid-entry would move characters under the user's cursor.
pub fn format_for_display(cents: i64, mode: DisplayMode<'_>, config: &CurrencyConfig) -> String {
    match mode {
        DisplayMode::Editing(text) => localize_point(text, config),
        DisplayMode::Idle if cents == 0 => String::new(),
        DisplayMode::Idle => format_cents(cents, config),
    }
}

/// Fully formats cents: grouping, fixed fraction digits, symbol.
///
/// Unlike [`format_for_display`], zero renders as `$0.00`.
///
/// ## Example
/// ```rust
/// use catalog_core::currency::{format_cents, CurrencyConfig, SymbolPosition};
///
/// assert_eq!(format_cents(123456700, &CurrencyConfig::default()), "$1,234,567.00");
/// assert_eq!(format_cents(-550, &CurrencyConfig::default()), "-$5.50");
///
/// let euro = CurrencyConfig::new("€", ',', '.', 2, SymbolPosition::After).unwrap();
/// assert_eq!(format_cents(123456, &euro), "1.234,56€");
/// ```
pub fn format_cents(cents: i64, config: &CurrencyConfig) -> String {
    let (whole, frac) = split_units(cents, config);
    let places = config.places() as usize;

    let mut number = group_thousands(&whole.to_string(), config.thousands_separator);
    if places > 0 {
        number.push(config.decimal_separator);
        number.push_str(&format!("{:0width$}", frac, width = places));
    }

    let sign = if cents < 0 { "-" } else { "" };
    match config.symbol_position {
        SymbolPosition::Before => format!("{}{}{}", sign, config.symbol, number),
        SymbolPosition::After => format!("{}{}{}", sign, number, config.symbol),
    }
}

/// Splits the magnitude of `cents` into whole units and the remainder.
fn split_units(cents: i64, config: &CurrencyConfig) -> (u64, u64) {
    let magnitude = cents.unsigned_abs();
    let scale = config.scale() as u64;
    (magnitude / scale, magnitude % scale)
}

/// Inserts `separator` every three digits from the right.
fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }

    grouped
}

fn localize_point(text: &str, config: &CurrencyConfig) -> String {
    if config.decimal_separator == SANITIZED_POINT {
        text.to_string()
    } else {
        text.replace(SANITIZED_POINT, &config.decimal_separator.to_string())
    }
}

// =============================================================================
// Clamping
// =============================================================================

/// Forces a value into the allowed range.
///
/// ## Order
/// 1. Raise to `min` when given
/// 2. Lower to `max` when given
/// 3. Without `allow_negative`, a negative result becomes 0
///
/// `min == None` therefore means "floor at 0" unless negatives are allowed.
///
/// ## Example
/// ```rust
/// use catalog_core::currency::clamp;
///
/// assert_eq!(clamp(9999, None, Some(5000), false), 5000);
/// assert_eq!(clamp(-250, None, None, false), 0);
/// assert_eq!(clamp(-250, None, None, true), -250);
/// assert_eq!(clamp(100, Some(500), None, false), 500);
/// ```
pub fn clamp(cents: i64, min: Option<i64>, max: Option<i64>, allow_negative: bool) -> i64 {
    let mut value = cents;

    if let Some(min) = min {
        if value < min {
            value = min;
        }
    }

    if let Some(max) = max {
        if value > max {
            value = max;
        }
    }

    if !allow_negative && value < 0 {
        value = 0;
    }

    value
}

// =============================================================================
// Masked Text Helpers
// =============================================================================

/// Removes symbol and grouping and normalizes the decimal point to `.`.
///
/// ## Example
/// ```rust
/// use catalog_core::currency::{remove_currency_mask, CurrencyConfig};
///
/// assert_eq!(remove_currency_mask(" $1,234.56 ", &CurrencyConfig::default()), "1234.56");
/// ```
pub fn remove_currency_mask(text: &str, config: &CurrencyConfig) -> String {
    let mut clean = if config.symbol.is_empty() {
        text.to_string()
    } else {
        text.replace(config.symbol.as_str(), "")
    };

    clean.retain(|c| c != config.thousands_separator);
    let clean = clean.trim();

    if config.decimal_separator == SANITIZED_POINT {
        clean.to_string()
    } else {
        clean.replacen(config.decimal_separator, &SANITIZED_POINT.to_string(), 1)
    }
}

/// Parses fully formatted currency text (`"$1,234.56"`, `"-$5.50"`) to cents.
///
/// Reads the leading number after unmasking and ignores anything after it.
/// Extra fraction digits are rounded, not truncated. Empty or
/// unparseable text is 0.
///
/// ## Example
/// ```rust
/// use catalog_core::currency::{parse_currency_to_cents, CurrencyConfig};
///
/// let config = CurrencyConfig::default();
/// assert_eq!(parse_currency_to_cents("$1,234.56", &config), 123456);
/// assert_eq!(parse_currency_to_cents("-$5.50", &config), -550);
/// assert_eq!(parse_currency_to_cents("", &config), 0);
/// ```
pub fn parse_currency_to_cents(text: &str, config: &CurrencyConfig) -> i64 {
    let unmasked = remove_currency_mask(text, config);
    let (negative, body) = match unmasked.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, unmasked.as_str()),
    };

    let number = leading_number(body);
    if !number.bytes().any(|b| b.is_ascii_digit()) {
        return 0;
    }

    let cents = to_cents(number, config);
    if negative {
        -cents
    } else {
        cents
    }
}

/// Whether text is acceptable currency input.
///
/// Empty text is valid (the field is optional until a form says otherwise).
/// Otherwise the unmasked text must be a non-negative `digits[.digits]`
/// number with at least one digit.
pub fn is_valid_currency(text: &str, config: &CurrencyConfig) -> bool {
    if text.trim().is_empty() {
        return true;
    }

    let unmasked = remove_currency_mask(text, config);
    let (integer, fraction) = unmasked
        .split_once(SANITIZED_POINT)
        .unwrap_or((unmasked.as_str(), ""));

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    all_digits(integer) && all_digits(fraction) && !(integer.is_empty() && fraction.is_empty())
}

/// Longest prefix of the form `digits[.digits]`.
fn leading_number(text: &str) -> &str {
    let mut seen_point = false;
    let end = text
        .char_indices()
        .find(|&(_, c)| {
            if c == SANITIZED_POINT && !seen_point {
                seen_point = true;
                false
            } else {
                !c.is_ascii_digit()
            }
        })
        .map_or(text.len(), |(i, _)| i);

    &text[..end]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_places(places: u32) -> CurrencyConfig {
        CurrencyConfig {
            decimal_places: places,
            ..CurrencyConfig::default()
        }
    }

    fn euro() -> CurrencyConfig {
        CurrencyConfig::new("€", ',', '.', 2, SymbolPosition::After).unwrap()
    }

    #[test]
    fn test_sanitize_strips_invalid_characters() {
        let config = CurrencyConfig::default();
        assert_eq!(sanitize_input("a1b2.3c4", &config), "12.34");
        assert_eq!(sanitize_input("$1,234.56", &config), "1234.56");
        assert_eq!(sanitize_input("  42 ", &config), "42");
        assert_eq!(sanitize_input("abc", &config), "");
        assert_eq!(sanitize_input("", &config), "");
    }

    #[test]
    fn test_sanitize_collapses_multiple_points() {
        let config = CurrencyConfig::default();
        assert_eq!(sanitize_input("1.2.3", &config), "1.23");
        assert_eq!(sanitize_input("10..", &config), "10.");
        assert_eq!(sanitize_input("..5", &config), ".5");
    }

    #[test]
    fn test_sanitize_truncates_fraction() {
        let config = CurrencyConfig::default();
        assert_eq!(sanitize_input("1.999", &config), "1.99");
        assert_eq!(sanitize_input("1.2", &config), "1.2");
        assert_eq!(sanitize_input("7.", &config), "7.");

        let three = config_with_places(3);
        assert_eq!(sanitize_input("1.23456", &three), "1.234");
    }

    #[test]
    fn test_sanitize_zero_places_drops_point() {
        let config = config_with_places(0);
        assert_eq!(sanitize_input("12.50", &config), "12");
        assert_eq!(sanitize_input(".", &config), "");
    }

    #[test]
    fn test_sanitize_custom_separators() {
        let config = euro();
        assert_eq!(sanitize_input("1.234,56€", &config), "1234.56");
        assert_eq!(sanitize_input("10,", &config), "10.");
    }

    #[test]
    fn test_to_cents_basic() {
        let config = CurrencyConfig::default();
        assert_eq!(to_cents("19.99", &config), 1999);
        assert_eq!(to_cents("19.9", &config), 1990);
        assert_eq!(to_cents("19.", &config), 1900);
        assert_eq!(to_cents("1999", &config), 199900);
        assert_eq!(to_cents(".5", &config), 50);
        assert_eq!(to_cents(".", &config), 0);
        assert_eq!(to_cents("", &config), 0);
    }

    #[test]
    fn test_to_cents_unparseable_is_zero() {
        let config = CurrencyConfig::default();
        assert_eq!(to_cents("12a", &config), 0);
        assert_eq!(to_cents("1.2.3", &config), 0);
        assert_eq!(to_cents("-5", &config), 0);
    }

    #[test]
    fn test_to_cents_rounds_half_away_from_zero() {
        let config = CurrencyConfig::default();
        assert_eq!(to_cents("1.005", &config), 101);
        assert_eq!(to_cents("1.004", &config), 100);
        assert_eq!(to_cents("0.999", &config), 100);
    }

    #[test]
    fn test_to_cents_zero_places_is_identity() {
        let config = config_with_places(0);
        assert_eq!(to_cents("1234", &config), 1234);
        assert_eq!(to_cents("1234.6", &config), 1235);
    }

    #[test]
    fn test_to_cents_saturates() {
        let config = CurrencyConfig::default();
        assert_eq!(to_cents(&"9".repeat(40), &config), i64::MAX);
    }

    #[test]
    fn test_zero_renders_empty_when_idle() {
        let config = CurrencyConfig::default();
        assert_eq!(format_for_display(0, DisplayMode::Idle, &config), "");
    }

    #[test]
    fn test_thousands_grouping() {
        let config = CurrencyConfig::default();
        assert_eq!(
            format_for_display(123456700, DisplayMode::Idle, &config),
            "$1,234,567.00"
        );
        assert_eq!(format_for_display(99999, DisplayMode::Idle, &config), "$999.99");
        assert_eq!(format_for_display(100000, DisplayMode::Idle, &config), "$1,000.00");
        assert_eq!(format_for_display(1, DisplayMode::Idle, &config), "$0.01");
    }

    #[test]
    fn test_editing_display_is_verbatim() {
        let config = CurrencyConfig::default();
        assert_eq!(format_for_display(1000, DisplayMode::Editing("10."), &config), "10.");
        assert_eq!(format_for_display(1050, DisplayMode::Editing("10.5"), &config), "10.5");
        assert_eq!(format_for_display(123400, DisplayMode::Editing("1234"), &config), "1234");

        assert_eq!(format_for_display(1000, DisplayMode::Editing("10."), &euro()), "10,");
    }

    #[test]
    fn test_format_cents_symbol_after_and_zero_places() {
        assert_eq!(format_cents(123456, &euro()), "1.234,56€");

        let yen = CurrencyConfig::new("¥", '.', ',', 0, SymbolPosition::Before).unwrap();
        assert_eq!(format_cents(1234567, &yen), "¥1,234,567");
        assert_eq!(format_cents(0, &CurrencyConfig::default()), "$0.00");
    }

    #[test]
    fn test_round_trip_idempotence() {
        let samples: [i64; 12] = [
            1, 9, 10, 99, 100, 101, 999, 1000, 1999, 123456, 123456700, 9_007_199_254_740_993,
        ];

        for places in [0, 2, 3] {
            for config in [config_with_places(places), CurrencyConfig { decimal_places: places, ..euro() }] {
                for &cents in samples.iter().chain(&[0]) {
                    let shown = format_for_display(cents, DisplayMode::Idle, &config);
                    let back = to_cents(&sanitize_input(&shown, &config), &config);
                    assert_eq!(
                        format_for_display(back, DisplayMode::Idle, &config),
                        shown,
                        "round trip failed for {} with {:?}",
                        cents,
                        config
                    );
                }
            }
        }
    }

    #[test]
    fn test_clamp_is_bounded() {
        let bounds = [(None, None), (Some(0), Some(5000)), (Some(250), Some(250)), (Some(100), None)];

        for (min, max) in bounds {
            for cents in [i64::MIN, -10_000, -1, 0, 1, 249, 250, 251, 4999, 5000, 5001, i64::MAX] {
                let clamped = clamp(cents, min, max, false);
                assert!(clamped >= min.unwrap_or(0), "{} below floor", clamped);
                if let Some(max) = max {
                    assert!(clamped <= max, "{} above ceiling", clamped);
                }
            }
        }
    }

    #[test]
    fn test_clamp_is_monotonic() {
        let mut previous = i64::MIN;
        for cents in -3000..3000 {
            let clamped = clamp(cents * 7, Some(-1000), Some(5000), true);
            assert!(clamped >= previous);
            previous = clamped;
        }
    }

    #[test]
    fn test_cents_to_edit_text() {
        let config = CurrencyConfig::default();
        assert_eq!(cents_to_edit_text(1000, &config), "10.00");
        assert_eq!(cents_to_edit_text(5, &config), "0.05");
        assert_eq!(cents_to_edit_text(-550, &config), "-5.50");
        assert_eq!(cents_to_edit_text(0, &config), "");
        assert_eq!(cents_to_edit_text(42, &config_with_places(0)), "42");
    }

    #[test]
    fn test_parse_currency_to_cents() {
        let config = CurrencyConfig::default();
        assert_eq!(parse_currency_to_cents("$1,234.56", &config), 123456);
        assert_eq!(parse_currency_to_cents("10.995", &config), 1100);
        assert_eq!(parse_currency_to_cents("12abc", &config), 1200);
        assert_eq!(parse_currency_to_cents("abc", &config), 0);
        assert_eq!(parse_currency_to_cents("   ", &config), 0);
        assert_eq!(parse_currency_to_cents("1.234,56€", &euro()), 123456);
    }

    #[test]
    fn test_is_valid_currency() {
        let config = CurrencyConfig::default();
        assert!(is_valid_currency("", &config));
        assert!(is_valid_currency("$1,234.56", &config));
        assert!(is_valid_currency("12.", &config));
        assert!(!is_valid_currency("-5", &config));
        assert!(!is_valid_currency("abc", &config));
        assert!(!is_valid_currency(".", &config));
    }

    #[test]
    fn test_config_validation() {
        assert!(CurrencyConfig::default().validate().is_ok());
        assert!(CurrencyConfig::new("$", ',', ',', 2, SymbolPosition::Before).is_err());
        assert!(CurrencyConfig::new("$", '1', ',', 2, SymbolPosition::Before).is_err());
        assert!(CurrencyConfig::new("$", '.', ',', 12, SymbolPosition::Before).is_err());
        assert!(matches!(
            CurrencyConfig::new("US1", '.', ',', 2, SymbolPosition::Before),
            Err(CoreError::InvalidCurrencyConfig { .. })
        ));
    }

    #[test]
    fn test_config_serializes_camel_case() {
        let json = serde_json::to_value(CurrencyConfig::default()).unwrap();
        assert_eq!(json["decimalSeparator"], ".");
        assert_eq!(json["symbolPosition"], "before");
    }
}
