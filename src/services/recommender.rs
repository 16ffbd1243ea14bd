use std::collections::{HashMap, HashSet};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{BookId, BookRecord};

/// How many of the most common genres a recommendation may come from
pub const TOP_GENRE_COUNT: usize = 2;
/// How many of the most common authors a recommendation may come from
pub const TOP_AUTHOR_COUNT: usize = 5;
/// Upper bound on recommendations returned per request
pub const MAX_RECOMMENDATIONS: usize = 2;

/// Books the reader has finished or is currently reading
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadingHistory {
    pub read: HashSet<BookId>,
    pub reading: HashSet<BookId>,
}

impl ReadingHistory {
    pub fn new(
        read: impl IntoIterator<Item = BookId>,
        reading: impl IntoIterator<Item = BookId>,
    ) -> Self {
        Self {
            read: read.into_iter().collect(),
            reading: reading.into_iter().collect(),
        }
    }

    /// Builds the history from the books' predefined shelves
    pub fn from_shelves(catalog: &[BookRecord], read_shelf: &str, reading_shelf: &str) -> Self {
        let on_shelf = |name: &str| -> HashSet<BookId> {
            catalog
                .iter()
                .filter(|book| book.predefined_shelf.shelf_name == name)
                .map(|book| book.id)
                .collect()
        };

        Self {
            read: on_shelf(read_shelf),
            reading: on_shelf(reading_shelf),
        }
    }

    pub fn contains(&self, id: &BookId) -> bool {
        self.read.contains(id) || self.reading.contains(id)
    }
}

/// Content-based recommender over a catalog.
///
/// Picks unseen books that carry one of the catalog's most frequent genres
/// and are written by one of its most frequent authors, then samples a few
/// of them at random. Results are not stable across calls.
pub struct Recommender<'a> {
    catalog: &'a [BookRecord],
    history: &'a ReadingHistory,
}

impl<'a> Recommender<'a> {
    pub fn new(catalog: &'a [BookRecord], history: &'a ReadingHistory) -> Self {
        Self { catalog, history }
    }

    /// Recommends using the thread-local random generator
    pub fn recommend(&self) -> Vec<&'a BookRecord> {
        self.recommend_with(&mut rand::rng())
    }

    pub fn recommend_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<&'a BookRecord> {
        let genres = top_genres(self.catalog, TOP_GENRE_COUNT);
        let authors = top_authors(self.catalog, TOP_AUTHOR_COUNT);

        let mut candidates: Vec<&'a BookRecord> = self
            .catalog
            .iter()
            .filter(|book| book.genres.iter().any(|g| genres.contains(&g.as_str())))
            .filter(|book| authors.contains(&book.author.full_name.as_str()))
            .filter(|book| !self.history.contains(&book.id))
            .collect();

        tracing::debug!(
            genres = ?genres,
            authors = authors.len(),
            candidates = candidates.len(),
            "Recommendation candidates selected"
        );

        candidates.shuffle(rng);
        candidates.truncate(MAX_RECOMMENDATIONS);
        candidates
    }
}

/// The `limit` most frequent genres, most frequent first. A book counts
/// towards every genre it carries.
pub fn top_genres(catalog: &[BookRecord], limit: usize) -> Vec<&str> {
    rank_by_frequency(catalog.iter().flat_map(|book| book.genres.iter().map(String::as_str)))
        .into_iter()
        .take(limit)
        .collect()
}

/// The `limit` most frequent author names, most frequent first
pub fn top_authors(catalog: &[BookRecord], limit: usize) -> Vec<&str> {
    rank_by_frequency(catalog.iter().map(|book| book.author.full_name.as_str()))
        .into_iter()
        .take(limit)
        .collect()
}

/// Distinct labels by descending count. Equal counts keep the order in
/// which the labels first appeared.
fn rank_by_frequency<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for label in labels {
        match positions.get(label) {
            Some(&index) => counts[index].1 += 1,
            None => {
                positions.insert(label, counts.len());
                counts.push((label, 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().map(|(label, _)| label).collect()
}
