//! # Price Commands
//!
//! Server-side commit of a price field, for forms that post raw text
//! instead of driving a [`CurrencyInput`] keystroke by keystroke.

use catalog_core::currency_input::{Bounds, CurrencyInput, InputSnapshot};
use tracing::debug;

use crate::error::ApiError;
use crate::state::ConfigState;

/// Commits `text` the way the price field does on blur.
///
/// ## Arguments
/// * `text` - Whatever the user typed or pasted, e.g. `"$1,999"`
/// * `max_cents` - Optional ceiling; the committed value is clamped to it
///
/// ## Returns
/// The committed cents and the masked display text.
///
/// ## Example
/// ```rust
/// use catalog_dashboard::commands::price::commit_price_text;
/// use catalog_dashboard::state::ConfigState;
///
/// let entry = commit_price_text(&ConfigState::default(), "1999", None).unwrap();
/// assert_eq!(entry.cents, 199900);
/// assert_eq!(entry.display_text, "$1,999.00");
/// ```
pub fn commit_price_text(
    config: &ConfigState,
    text: &str,
    max_cents: Option<i64>,
) -> Result<InputSnapshot, ApiError> {
    let bounds = Bounds::new(None, max_cents, false)?;
    debug!(len = text.len(), max = ?max_cents, "commit_price_text command");

    let mut field = CurrencyInput::new(0, config.currency.clone()).with_bounds(bounds);
    field.focus();
    field.blur_with(text);
    Ok(field.snapshot())
}
