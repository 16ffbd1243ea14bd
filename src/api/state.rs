use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::Config;
use crate::models::BookRecord;
use crate::services::BookList;

/// Settings the list endpoints need from configuration
#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub book_overview_path: String,
    pub read_shelf_name: String,
    pub reading_shelf_name: String,
    /// Open book lists kept at once; opening one more closes the oldest
    pub max_open_views: usize,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            book_overview_path: "/book-overview".to_string(),
            read_shelf_name: "Read".to_string(),
            reading_shelf_name: "Reading".to_string(),
            max_open_views: 1024,
        }
    }
}

impl From<&Config> for ViewSettings {
    fn from(config: &Config) -> Self {
        Self {
            book_overview_path: config.book_overview_path.clone(),
            read_shelf_name: config.read_shelf_name.clone(),
            reading_shelf_name: config.reading_shelf_name.clone(),
            max_open_views: config.max_open_views,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<RwLock<AppStateInner>>,
    pub settings: Arc<ViewSettings>,
}

/// Inner state that can be modified
pub struct AppStateInner {
    /// Catalog in insertion order
    pub books: Vec<BookRecord>,
    /// Open book lists. A list lives until the client closes it or until
    /// `max_open_views` newer lists have been opened after it.
    pub views: HashMap<Uuid, BookList>,
    /// View ids, oldest first
    pub view_order: VecDeque<Uuid>,
}

impl AppStateInner {
    /// Stores a new list, closing the oldest ones beyond `max_open_views`.
    /// Returns the ids that were closed.
    pub fn open_view(&mut self, id: Uuid, list: BookList, max_open_views: usize) -> Vec<Uuid> {
        let mut evicted = Vec::new();
        while self.views.len() >= max_open_views.max(1) {
            match self.view_order.pop_front() {
                Some(oldest) => {
                    self.views.remove(&oldest);
                    evicted.push(oldest);
                }
                None => break,
            }
        }

        self.views.insert(id, list);
        self.view_order.push_back(id);
        evicted
    }

    pub fn close_view(&mut self, id: &Uuid) -> Option<BookList> {
        let list = self.views.remove(id)?;
        self.view_order.retain(|open| open != id);
        Some(list)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates an empty state with default settings
    pub fn new() -> Self {
        Self::with_settings(ViewSettings::default())
    }

    pub fn with_settings(settings: ViewSettings) -> Self {
        Self {
            inner: Arc::new(RwLock::new(AppStateInner {
                books: Vec::new(),
                views: HashMap::new(),
                view_order: VecDeque::new(),
            })),
            settings: Arc::new(settings),
        }
    }
}
