use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::models::{BookRecord, SortDirective};
use crate::services::comparators::compare_books;

/// Sorts records in place by the directives, first directive as the primary
/// key. Later directives only break ties left by earlier ones. The sort is
/// stable, so records equal under every directive keep their input order.
pub fn sort_records<B: Borrow<BookRecord>>(records: &mut [B], directives: &[SortDirective]) {
    if directives.is_empty() {
        return;
    }

    records.sort_by(|a, b| {
        let a: &BookRecord = Borrow::<BookRecord>::borrow(a);
        let b: &BookRecord = Borrow::<BookRecord>::borrow(b);
        directives
            .iter()
            .map(|directive| compare_books(a, b, *directive))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    });
}

/// Returns the books in display order without touching the input
pub fn sort_books<'a>(books: &'a [BookRecord], directives: &[SortDirective]) -> Vec<&'a BookRecord> {
    let mut ordered: Vec<&BookRecord> = books.iter().collect();
    sort_records(&mut ordered, directives);
    ordered
}
