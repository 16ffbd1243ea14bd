//! Interpretation of the displayed rating text.
//!
//! A rated book shows its rating as `numerator/denominator` (e.g. `"4/5"`).
//! Anything without the separator, including the unrated marker, counts as
//! unrated rather than as an error.

use crate::models::BookRecord;

pub const RATING_SEPARATOR: char = '/';

/// Whether the book carries a `numerator/denominator` rating
pub fn is_rated(book: &BookRecord) -> bool {
    book.rating.as_str().contains(RATING_SEPARATOR)
}

/// Numerator of the book's rating.
///
/// An empty numerator (`"/5"`) reads as zero. Returns `None` for unrated
/// books and for a numerator that is not a finite number. Callers that need
/// to tell those two apart check [`is_rated`] first.
pub fn numeric_rating(book: &BookRecord) -> Option<f64> {
    let text = book.rating.as_str();
    let (numerator, _) = text.split_once(RATING_SEPARATOR)?;
    let numerator = numerator.trim();
    if numerator.is_empty() {
        return Some(0.0);
    }

    numerator.parse::<f64>().ok().filter(|value| value.is_finite())
}
