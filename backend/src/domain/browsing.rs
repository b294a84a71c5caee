//! Catalogue browsing: filter, search and sort over a loaded item list.
//!
//! [`derive_visible_items`] is a pure function of the loaded items and the
//! current [`BrowsingFilterState`]. [`CatalogueBrowser`] owns the listing
//! lifecycle around it (loading, failure and user-initiated retry).

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{CatalogueService, Error, Item};

/// Category option meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Category filter applied before search and sort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every category.
    #[default]
    All,
    /// Items whose category equals this slug.
    Only(String),
}

impl CategoryFilter {
    fn admits(&self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => item.category() == category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(value.to_owned())
        }
    }
}

/// Error returned for an unrecognised sort key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);

/// Ordering applied to the visible items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Alphabetical by name.
    #[default]
    Name,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Most recently created first; undated items last.
    Newest,
}

impl SortKey {
    /// Wire and query-string key for the sort order.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Newest => "newest",
        }
    }

    fn compare(self, a: &Item, b: &Item) -> Ordering {
        match self {
            Self::Name => compare_names(a.name(), b.name()),
            Self::PriceAsc => a.price().total_cmp(&b.price()),
            Self::PriceDesc => b.price().total_cmp(&a.price()),
            Self::Newest => created_or_epoch(b).cmp(&created_or_epoch(a)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            "newest" => Ok(Self::Newest),
            other => Err(UnknownSortKey(other.to_owned())),
        }
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn created_or_epoch(item: &Item) -> DateTime<Utc> {
    item.created_at().unwrap_or(DateTime::UNIX_EPOCH)
}

/// Grid or list presentation. Does not affect which items are visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Card grid.
    #[default]
    Grid,
    /// Single-column rows.
    List,
}

/// Transient browsing controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowsingFilterState {
    /// Category restriction.
    pub category: CategoryFilter,
    /// Case-insensitive search text; blank matches everything.
    pub search: String,
    /// Ordering of the visible items.
    pub sort: SortKey,
    /// Presentation only.
    pub view: ViewMode,
}

fn matches_search(item: &Item, needle: &str) -> bool {
    [item.name(), item.description(), item.category()]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Compute the items to display for the given filter state.
///
/// Category filtering uses exact equality; search lower-cases the term and
/// matches it as a substring of name, description or category; the sort is
/// stable. The term is not trimmed.
///
/// # Examples
/// ```
/// use product_hub::domain::{derive_visible_items, BrowsingFilterState, Item, ItemDraft, SortKey};
///
/// let items: Vec<Item> = [("a", 10.0), ("b", 5.0), ("c", 20.0)]
///     .into_iter()
///     .map(|(id, price)| {
///         Item::new(ItemDraft {
///             id: id.into(),
///             name: id.into(),
///             price,
///             ..ItemDraft::default()
///         })
///         .unwrap()
///     })
///     .collect();
/// let state = BrowsingFilterState { sort: SortKey::PriceDesc, ..Default::default() };
/// let prices: Vec<f64> = derive_visible_items(&items, &state)
///     .iter()
///     .map(|item| item.price())
///     .collect();
/// assert_eq!(prices, vec![20.0, 10.0, 5.0]);
/// ```
pub fn derive_visible_items<'a>(items: &'a [Item], state: &BrowsingFilterState) -> Vec<&'a Item> {
    let needle = state.search.to_lowercase();
    let mut visible: Vec<&Item> = items
        .iter()
        .filter(|item| state.category.admits(item))
        .filter(|item| needle.is_empty() || matches_search(item, &needle))
        .collect();
    visible.sort_by(|a, b| state.sort.compare(a, b));
    visible
}

/// Category choices for the filter control: `all`, then each distinct
/// non-empty category in first-seen order.
pub fn category_options(items: &[Item]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut options = vec![ALL_CATEGORIES.to_owned()];
    for item in items {
        let category = item.category();
        if !category.is_empty() && seen.insert(category) {
            options.push(category.to_owned());
        }
    }
    options
}

/// Lifecycle of the catalogue listing.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingState {
    /// A read is outstanding.
    Loading,
    /// The catalogue as last read.
    Ready(Vec<Item>),
    /// The read failed with a user-facing message.
    Failed { message: String },
}

/// What the listing page should render.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayState<'a> {
    /// Show the loading indicator.
    Loading,
    /// Loaded but nothing matches; render "no items found".
    Empty,
    /// Items to render, already filtered and sorted.
    Items(Vec<&'a Item>),
    /// Render the message with a "Try Again" affordance.
    Failed { message: &'a str },
}

/// Client-side controller for the catalogue listing page.
#[derive(Debug, Clone)]
pub struct CatalogueBrowser {
    listing: ListingState,
    filters: BrowsingFilterState,
}

impl Default for CatalogueBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogueBrowser {
    /// Start in the loading state with default filters.
    pub fn new() -> Self {
        Self {
            listing: ListingState::Loading,
            filters: BrowsingFilterState::default(),
        }
    }

    /// Current lifecycle of the catalogue read.
    pub fn listing(&self) -> &ListingState {
        &self.listing
    }

    /// Active search, category, sort and view selections.
    pub fn filters(&self) -> &BrowsingFilterState {
        &self.filters
    }

    /// Select a category option; `all` clears the filter.
    pub fn set_category(&mut self, category: &str) {
        self.filters.category = CategoryFilter::from(category);
    }

    /// Replace the search term; matching is case-insensitive.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filters.search = term.into();
    }

    /// Change the sort order.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.filters.sort = sort;
    }

    /// Switch between grid and list layouts.
    pub fn set_view(&mut self, view: ViewMode) {
        self.filters.view = view;
    }

    /// Record the outcome of a catalogue read.
    pub fn apply(&mut self, outcome: Result<Vec<Item>, Error>) {
        self.listing = match outcome {
            Ok(items) => ListingState::Ready(items),
            Err(error) => ListingState::Failed {
                message: error.message().to_owned(),
            },
        };
    }

    /// Read the catalogue and record the outcome.
    pub async fn load(&mut self, service: &CatalogueService) {
        self.listing = ListingState::Loading;
        let outcome = service.list_items().await;
        if let Err(error) = &outcome {
            tracing::debug!(error = %error, "catalogue listing failed");
        }
        self.apply(outcome);
    }

    /// User-initiated retry: return to loading so the read can be reissued.
    pub fn retry(&mut self) {
        self.listing = ListingState::Loading;
    }

    /// Items visible under the current filters; empty unless loaded.
    pub fn visible(&self) -> Vec<&Item> {
        match &self.listing {
            ListingState::Ready(items) => derive_visible_items(items, &self.filters),
            ListingState::Loading | ListingState::Failed { .. } => Vec::new(),
        }
    }

    /// Category choices derived from the loaded items.
    pub fn category_options(&self) -> Vec<String> {
        match &self.listing {
            ListingState::Ready(items) => category_options(items),
            ListingState::Loading | ListingState::Failed { .. } => {
                vec![ALL_CATEGORIES.to_owned()]
            }
        }
    }

    /// What the listing page should render right now.
    pub fn display_state(&self) -> DisplayState<'_> {
        match &self.listing {
            ListingState::Loading => DisplayState::Loading,
            ListingState::Failed { message } => DisplayState::Failed {
                message: message.as_str(),
            },
            ListingState::Ready(items) => {
                let visible = derive_visible_items(items, &self.filters);
                if visible.is_empty() {
                    DisplayState::Empty
                } else {
                    DisplayState::Items(visible)
                }
            }
        }
    }
}
