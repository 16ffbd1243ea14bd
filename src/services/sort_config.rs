use std::collections::{BTreeMap, HashMap};

use crate::models::{SortColumn, SortDirective, SortIndicator};

/// Active sort keys of one book list, in priority order.
///
/// Each column cycles absent → ascending → descending → absent as it is
/// toggled. A column entering the list is appended as the lowest priority;
/// toggling a column already present keeps its position.
///
/// The column → direction lookup is recomputed from the directive list after
/// every change and is never edited on its own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortConfig {
    directives: Vec<SortDirective>,
    lookup: HashMap<SortColumn, bool>,
}

impl SortConfig {
    /// Creates a config with no active sort
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances `column` one step through its sort cycle
    pub fn toggle(&mut self, column: SortColumn) {
        let position = self.directives.iter().position(|d| d.column == column);

        match position {
            None => self.directives.push(SortDirective::ascending(column)),
            Some(index) if self.directives[index].ascending => {
                self.directives[index] = SortDirective::descending(column);
            }
            Some(index) => {
                self.directives.remove(index);
            }
        }

        self.lookup = derive_lookup(&self.directives);

        tracing::debug!(
            column = %column,
            direction = ?self.lookup.get(&column),
            active = self.directives.len(),
            "Sort column toggled"
        );
    }

    /// Directives in priority order, primary key first
    pub fn directives(&self) -> &[SortDirective] {
        &self.directives
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// `Some(true)` for ascending, `Some(false)` for descending, `None` when
    /// the column is not sorted
    pub fn direction(&self, column: SortColumn) -> Option<bool> {
        self.lookup.get(&column).copied()
    }

    pub fn indicator(&self, column: SortColumn) -> Option<SortIndicator> {
        self.direction(column).map(SortIndicator::from)
    }

    /// Header arrows for every sorted column
    pub fn indicators(&self) -> BTreeMap<SortColumn, SortIndicator> {
        self.lookup
            .iter()
            .map(|(column, ascending)| (*column, SortIndicator::from(*ascending)))
            .collect()
    }
}

fn derive_lookup(directives: &[SortDirective]) -> HashMap<SortColumn, bool> {
    directives
        .iter()
        .map(|directive| (directive.column, directive.ascending))
        .collect()
}
