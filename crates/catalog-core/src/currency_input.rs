//! # Currency Input Engine
//!
//! The state machine behind a masked price field.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Currency Input State Machine                         │
//! │                                                                         │
//! │   ┌──────────┐   focus()    ┌──────────────────────────────┐            │
//! │   │   Idle   │ ───────────► │  Editing { text }            │            │
//! │   │          │              │                              │            │
//! │   │ "$10.00" │              │  press() / input() / paste() │            │
//! │   │          │ ◄─────────── │    sanitize → validate       │            │
//! │   └──────────┘   blur()     │    accept: emit on_change    │            │
//! │        ▲        clamp +     │    reject: keep old text     │            │
//! │        │        on_commit   └──────────────────────────────┘            │
//! │        │                                                                │
//! │   set_value() re-renders while idle                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Conventions
//! - A point separates units from sub-units; digits alone are whole units
//!   (`"1999"` commits to `$1,999.00`, `"19.99"` to `$19.99`)
//! - Live edits are rejected when they leave `[min, max]` or go negative
//!   without `allow_negative`; blur clamps whatever text the UI hands over
//! - Empty text always means 0, including at blur
//!
//! ## Example
//! ```rust
//! use catalog_core::currency::CurrencyConfig;
//! use catalog_core::currency_input::{CurrencyInput, EditOutcome};
//!
//! let mut input = CurrencyInput::new(0, CurrencyConfig::default());
//! input.focus();
//! for c in "19.99".chars() {
//!     input.press(c.into());
//! }
//! assert_eq!(input.display_text(), "19.99");
//!
//! assert_eq!(input.blur(), 1999);
//! assert_eq!(input.display_text(), "$19.99");
//! ```

use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};
use ts_rs::TS;

use crate::currency::{
    cents_to_edit_text, clamp, format_for_display, sanitize_input, to_cents, CurrencyConfig,
    DisplayMode, SANITIZED_POINT,
};
use crate::error::{CoreError, CoreResult};

type Callback = Box<dyn FnMut(i64)>;

// =============================================================================
// Bounds
// =============================================================================

/// Range constraints for a currency field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    min: Option<i64>,
    max: Option<i64>,
    allow_negative: bool,
}

impl Bounds {
    /// Creates bounds, rejecting a ceiling below the effective floor.
    ///
    /// The effective floor is `min`, or 0 when `min` is absent and negatives
    /// are not allowed.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::currency_input::Bounds;
    ///
    /// assert!(Bounds::new(None, Some(5000), false).is_ok());
    /// assert!(Bounds::new(Some(500), Some(100), false).is_err());
    /// assert!(Bounds::new(None, Some(-5), false).is_err());
    /// ```
    pub fn new(min: Option<i64>, max: Option<i64>, allow_negative: bool) -> CoreResult<Self> {
        let bounds = Bounds {
            min,
            max,
            allow_negative,
        };

        if let (Some(floor), Some(max)) = (bounds.floor(), max) {
            if max < floor {
                return Err(CoreError::InvalidBounds { min: floor, max });
            }
        }

        Ok(bounds)
    }

    pub fn min(&self) -> Option<i64> {
        self.min
    }

    pub fn max(&self) -> Option<i64> {
        self.max
    }

    pub fn allow_negative(&self) -> bool {
        self.allow_negative
    }

    /// The lowest value a commit can produce, if any.
    pub fn floor(&self) -> Option<i64> {
        match (self.min, self.allow_negative) {
            (Some(min), true) => Some(min),
            (Some(min), false) => Some(min.max(0)),
            (None, false) => Some(0),
            (None, true) => None,
        }
    }

    /// Commit-time clamping.
    pub fn clamp(&self, cents: i64) -> i64 {
        clamp(cents, self.min, self.max, self.allow_negative)
    }

    /// Whether a live edit may produce `cents`.
    fn admits_live(&self, cents: i64) -> bool {
        if self.max.is_some_and(|max| cents > max) {
            return false;
        }
        self.floor().map_or(true, |floor| cents >= floor)
    }
}

// =============================================================================
// Keys
// =============================================================================

/// A key as delivered by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Delete,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Tab,
    Escape,
    Enter,
    /// Any key the engine has no name for (F-keys, media keys, ...).
    Other,
}

/// A key press with the modifiers that matter for shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        KeyPress {
            key,
            ctrl: false,
            meta: false,
        }
    }

    /// The same key with Ctrl held.
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// The same key with Cmd/Meta held.
    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    fn is_shortcut(&self) -> bool {
        self.ctrl || self.meta
    }
}

impl From<char> for KeyPress {
    fn from(c: char) -> Self {
        KeyPress::new(Key::Char(c))
    }
}

impl From<Key> for KeyPress {
    fn from(key: Key) -> Self {
        KeyPress::new(key)
    }
}

/// Whether the UI should let a key through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFilter {
    Allow,
    /// Swallow the key: no character inserted, no state change.
    Suppress,
}

/// Result of an edit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Edit kept; the new canonical cents were emitted.
    Accepted(i64),
    /// Edit would produce an invalid value; previous text retained.
    Rejected,
    /// Key not permitted in a currency field.
    Suppressed,
    /// Permitted key that does not change the text (navigation, shortcuts).
    Unchanged,
}

/// Hint returned by [`CurrencyInput::focus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusEffect {
    /// The UI may select the seeded text so typing overwrites it.
    /// Fire-and-forget: dropping this has no effect on correctness.
    pub select_all: bool,
}

/// What the UI renders: a pure projection of the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InputSnapshot {
    pub cents: i64,
    pub display_text: String,
    pub is_editing: bool,
}

// =============================================================================
// Currency Input
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Session {
    Idle,
    /// Sanitized text, `.` as the point, optional leading `-`.
    Editing { text: String },
}

/// A masked currency field.
///
/// Owns its edit session; nothing is shared between instances.
pub struct CurrencyInput {
    config: CurrencyConfig,
    bounds: Bounds,
    cents: i64,
    session: Session,
    display: String,
    on_change: Option<Callback>,
    on_commit: Option<Callback>,
}

impl CurrencyInput {
    /// Creates an idle field showing `initial_cents`.
    pub fn new(initial_cents: i64, config: CurrencyConfig) -> Self {
        let display = format_for_display(initial_cents, DisplayMode::Idle, &config);
        CurrencyInput {
            config,
            bounds: Bounds::default(),
            cents: initial_cents,
            session: Session::Idle,
            display,
            on_change: None,
            on_commit: None,
        }
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Replaces the floor, keeping the other bounds.
    pub fn with_min(self, min: i64) -> CoreResult<Self> {
        let bounds = Bounds::new(Some(min), self.bounds.max, self.bounds.allow_negative)?;
        Ok(self.with_bounds(bounds))
    }

    /// Replaces the ceiling, keeping the other bounds.
    pub fn with_max(self, max: i64) -> CoreResult<Self> {
        let bounds = Bounds::new(self.bounds.min, Some(max), self.bounds.allow_negative)?;
        Ok(self.with_bounds(bounds))
    }

    /// Lets the field hold values below zero.
    ///
    /// Widening the floor can never invert the bounds, so this cannot fail.
    pub fn allow_negative(mut self) -> Self {
        self.bounds.allow_negative = true;
        self
    }

    /// Live-update callback: every accepted edit and every commit.
    pub fn on_change(mut self, callback: impl FnMut(i64) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Commit callback: once per blur, with the clamped value.
    pub fn on_commit(mut self, callback: impl FnMut(i64) + 'static) -> Self {
        self.on_commit = Some(Box::new(callback));
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn value(&self) -> i64 {
        self.cents
    }

    pub fn display_text(&self) -> &str {
        &self.display
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.session, Session::Editing { .. })
    }

    pub fn config(&self) -> &CurrencyConfig {
        &self.config
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            cents: self.cents,
            display_text: self.display.clone(),
            is_editing: self.is_editing(),
        }
    }

    /// The owner changed the value from outside.
    ///
    /// While editing, the user's text stays on screen; the new value shows
    /// after blur unless further edits replace it.
    pub fn set_value(&mut self, cents: i64) {
        self.cents = cents;
        if !self.is_editing() {
            self.display = format_for_display(cents, DisplayMode::Idle, &self.config);
        }
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Idle → Editing: seed the field with plain digits.
    pub fn focus(&mut self) -> FocusEffect {
        if self.is_editing() {
            return FocusEffect { select_all: false };
        }

        let text = cents_to_edit_text(self.cents, &self.config);
        self.display = format_for_display(self.cents, DisplayMode::Editing(&text), &self.config);
        self.session = Session::Editing { text };

        FocusEffect {
            select_all: !self.display.is_empty(),
        }
    }

    /// Keystroke filter, without applying anything.
    pub fn key_down(&self, press: &KeyPress) -> KeyFilter {
        match press.key {
            Key::Backspace
            | Key::Delete
            | Key::ArrowLeft
            | Key::ArrowRight
            | Key::ArrowUp
            | Key::ArrowDown
            | Key::Home
            | Key::End
            | Key::Tab
            | Key::Escape
            | Key::Enter => KeyFilter::Allow,
            Key::Char(c) if press.is_shortcut() => {
                if matches!(c.to_ascii_lowercase(), 'a' | 'c' | 'v' | 'x' | 'z') {
                    KeyFilter::Allow
                } else {
                    KeyFilter::Suppress
                }
            }
            Key::Char(c) if c.is_ascii_digit() => KeyFilter::Allow,
            Key::Char(c) if self.config.places() > 0 && self.config.is_point(c) => KeyFilter::Allow,
            Key::Char('-') if self.bounds.allow_negative => KeyFilter::Allow,
            Key::Char(_) | Key::Other => KeyFilter::Suppress,
        }
    }

    /// Filters a key and applies it at the end of the text.
    ///
    /// Characters append, Backspace drops the last character, `-` toggles
    /// the sign. Other permitted keys leave the text alone.
    pub fn press(&mut self, press: KeyPress) -> EditOutcome {
        if self.key_down(&press) == KeyFilter::Suppress {
            trace!(key = ?press.key, "currency input suppressed key");
            return EditOutcome::Suppressed;
        }

        if !self.is_editing() || press.is_shortcut() {
            return EditOutcome::Unchanged;
        }

        let candidate = match press.key {
            Key::Char('-') => match self.display.strip_prefix('-') {
                Some(rest) => rest.to_string(),
                None => format!("-{}", self.display),
            },
            Key::Char(c) => {
                let mut text = self.display.clone();
                text.push(c);
                text
            }
            Key::Backspace => {
                let mut text = self.display.clone();
                text.pop();
                text
            }
            _ => return EditOutcome::Unchanged,
        };

        self.apply_candidate(&candidate)
    }

    /// The UI reports the field's full text after a native edit.
    pub fn input(&mut self, text: &str) -> EditOutcome {
        if !self.is_editing() {
            return EditOutcome::Unchanged;
        }
        self.apply_candidate(text)
    }

    /// Pasted text replaces the whole field.
    ///
    /// Content without a single digit is rejected rather than clearing the
    /// field.
    pub fn paste(&mut self, text: &str) -> EditOutcome {
        if !self.is_editing() {
            return EditOutcome::Unchanged;
        }

        if !sanitize_input(text, &self.config)
            .bytes()
            .any(|b| b.is_ascii_digit())
        {
            debug!(len = text.len(), "currency input rejected paste without digits");
            return EditOutcome::Rejected;
        }

        self.apply_candidate(text)
    }

    /// Editing → Idle: commit the current text.
    pub fn blur(&mut self) -> i64 {
        match std::mem::replace(&mut self.session, Session::Idle) {
            Session::Editing { text } => self.commit(&text),
            Session::Idle => self.cents,
        }
    }

    /// Editing → Idle, committing the text the UI holds at blur time.
    ///
    /// Blur always clamps, so text that never passed live validation still
    /// commits to a value within bounds.
    pub fn blur_with(&mut self, text: &str) -> i64 {
        if !self.is_editing() {
            return self.cents;
        }
        self.session = Session::Idle;

        let (negative, sanitized) = self.split_sign(text);
        let text = signed_text(negative, sanitized);
        self.commit(&text)
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Sign is only honored when negatives are allowed.
    fn split_sign(&self, raw: &str) -> (bool, String) {
        let negative = self.bounds.allow_negative && raw.trim_start().starts_with('-');
        (negative, sanitize_input(raw, &self.config))
    }

    fn apply_candidate(&mut self, raw: &str) -> EditOutcome {
        if raw.trim().is_empty() {
            self.set_editing_text(String::new(), 0);
            self.emit_change(0);
            return EditOutcome::Accepted(0);
        }

        let (negative, mut sanitized) = self.split_sign(raw);
        if sanitized.is_empty() && !negative {
            debug!("currency input rejected non-numeric edit");
            return EditOutcome::Rejected;
        }

        // A lone point reads as "0."
        if sanitized.starts_with(SANITIZED_POINT) {
            sanitized.insert(0, '0');
        }

        let magnitude = to_cents(&sanitized, &self.config);
        let cents = if negative { -magnitude } else { magnitude };

        if !self.bounds.admits_live(cents) {
            debug!(
                cents,
                min = ?self.bounds.min,
                max = ?self.bounds.max,
                "currency input rejected out-of-range edit"
            );
            return EditOutcome::Rejected;
        }

        self.set_editing_text(signed_text(negative, sanitized), cents);
        self.emit_change(cents);
        EditOutcome::Accepted(cents)
    }

    fn set_editing_text(&mut self, text: String, cents: i64) {
        self.display = format_for_display(cents, DisplayMode::Editing(&text), &self.config);
        self.session = Session::Editing { text };
        self.cents = cents;
    }

    fn commit(&mut self, text: &str) -> i64 {
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let committed = if digits.is_empty() {
            0
        } else {
            let magnitude = to_cents(digits, &self.config);
            self.bounds.clamp(if negative { -magnitude } else { magnitude })
        };

        self.cents = committed;
        self.display = format_for_display(committed, DisplayMode::Idle, &self.config);
        debug!(cents = committed, "currency input committed");

        self.emit_change(committed);
        if let Some(callback) = self.on_commit.as_mut() {
            callback(committed);
        }

        committed
    }

    fn emit_change(&mut self, cents: i64) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(cents);
        }
    }
}

fn signed_text(negative: bool, sanitized: String) -> String {
    if negative {
        format!("-{}", sanitized)
    } else {
        sanitized
    }
}

impl fmt::Debug for CurrencyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurrencyInput")
            .field("config", &self.config)
            .field("bounds", &self.bounds)
            .field("cents", &self.cents)
            .field("session", &self.session)
            .field("display", &self.display)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
