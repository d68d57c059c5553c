//! Truncation policies: pixel-budget truncation for Google snippets and the
//! cruder character-count truncation used by social link cards.

use crate::measure::{FontSpec, MeasureError, TextMeasurer};

/// Marker appended to truncated text. The literal three-dot form, matching
/// what search engines render.
pub const ELLIPSIS: &str = "...";

/// Truncate `text` to fit within `max_width` pixels, appending [`ELLIPSIS`]
/// if anything was cut.
///
/// Only pixel width governs: text of any character length is returned
/// unchanged as long as it measures within budget. When the budget is
/// narrower than the ellipsis itself, the ellipsis alone is the floor
/// result. Truncation may split a word; that matches the engines being
/// modeled.
///
/// Binary-searches for the longest prefix whose width plus the ellipsis
/// stays within budget, so the measurer is consulted O(log n) times. This
/// relies on prefix width being non-decreasing in prefix length, which holds
/// for plain glyph advances; ligature substitution could in principle
/// violate it, an approximation we accept.
pub fn truncate_to_width<M: TextMeasurer + ?Sized>(
    measurer: &M,
    text: &str,
    font: &FontSpec,
    max_width: f32,
) -> Result<String, MeasureError> {
    if text.is_empty() {
        return Ok(String::new());
    }

    let full_width = measurer.measure(text, font)?;
    if full_width <= max_width {
        return Ok(text.to_string());
    }

    let ellipsis_width = measurer.measure(ELLIPSIS, font)?;
    let target_width = max_width - ellipsis_width;

    // offsets[k] = byte length of the k-character prefix.
    let mut offsets = vec![0usize];
    offsets.extend(text.char_indices().map(|(i, c)| i + c.len_utf8()));

    // Largest k with width(text[..k]) <= target_width. k = 0 survives even a
    // negative target, which yields the bare-ellipsis floor case.
    let mut low = 0usize;
    let mut high = offsets.len() - 1;
    while low < high {
        let mid = low + (high - low).div_ceil(2);
        let width = measurer.measure(&text[..offsets[mid]], font)?;
        if width <= target_width {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    Ok(format!("{}{ELLIPSIS}", &text[..offsets[low]]))
}

/// Character-count truncation for social cards (Facebook/Twitter budgets are
/// published in characters, not pixels). Keeps `max_chars - 3` characters
/// and appends [`ELLIPSIS`] when over.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let cut = text
        .char_indices()
        .nth(keep)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    format!("{}{ELLIPSIS}", &text[..cut])
}
