//! Per-column orderings used by the book list.
//!
//! Direction handling and the placement of unrated books are decided here
//! and nowhere else.

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::models::{BookRecord, SortColumn, SortDirective};
use crate::services::rating::{is_rated, numeric_rating};

/// Compare two books under a single sort directive
pub fn compare_books(a: &BookRecord, b: &BookRecord, directive: SortDirective) -> Ordering {
    match directive.column {
        SortColumn::Rating => compare_ratings(a, b, directive.ascending),
        column => {
            let ord = locale_compare(&text_key(a, column), &text_key(b, column));
            apply_direction(ord, directive.ascending)
        }
    }
}

/// Orders by rating value. Unrated books always go after rated ones, in
/// either direction; only the numeric comparison is flipped.
///
/// A rated book whose numerator has no value sits between the two groups:
/// after every valued rating and before every unrated book, again in either
/// direction.
pub fn compare_ratings(a: &BookRecord, b: &BookRecord, ascending: bool) -> Ordering {
    match (is_rated(a), is_rated(b)) {
        (false, false) => Ordering::Equal,
        (false, true) => Ordering::Greater,
        (true, false) => Ordering::Less,
        (true, true) => match (numeric_rating(a), numeric_rating(b)) {
            (Some(x), Some(y)) => apply_direction(x.total_cmp(&y), ascending),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

/// Case-insensitive comparison; on a tie lowercase sorts before uppercase,
/// matching the default collation browsers use.
///
/// Case folding is per code point, without accent folding: `"Émile"` sorts
/// after `"Zadie"` here, where a full collator would put it first.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    folded.then_with(|| b.cmp(a))
}

fn text_key(book: &BookRecord, column: SortColumn) -> Cow<'_, str> {
    match column {
        SortColumn::Author => Cow::Borrowed(book.author.full_name.as_str()),
        SortColumn::Shelf => Cow::Borrowed(book.predefined_shelf.shelf_name.as_str()),
        SortColumn::Genre => Cow::Owned(book.genre_label()),
        SortColumn::Title | SortColumn::Rating => Cow::Borrowed(book.title.as_str()),
    }
}

fn apply_direction(ord: Ordering, ascending: bool) -> Ordering {
    if ascending {
        ord
    } else {
        ord.reverse()
    }
}
