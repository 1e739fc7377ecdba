//! # List Pipeline
//!
//! Search, filter and paginate over an already-fetched list.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Vec<T> (from a resource)                                              │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  search(term, fields)     case-insensitive substring on any field      │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  filter_by(predicates)    conjunction, order preserved                 │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  paginate(size, page)     page clamped to [1, max(total_pages, 1)]     │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  Page<T>                                                                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every stage is pure and returns fresh vectors. [`ListView`] holds the
//! page-level state (term, filter, current page) and runs the pipeline.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{
    FarmType, Farmer, FarmerStatus, HarvestQuality, HarvestRecord, HarvestStatus,
    InventoryCategory, InventoryItem, ListingQuality, ListingStatus, MarketListing, Selection,
};
use crate::validation::{validate_search_term, ValidationResult};

// =============================================================================
// Search
// =============================================================================

/// A record with named text fields that a search box can match against.
pub trait Searchable {
    /// Field selector, e.g. [`FarmerField`](crate::types::FarmerField).
    type Field: Copy;

    /// String form of one field. `None` (an absent optional) never matches.
    fn field_text(&self, field: Self::Field) -> Option<String>;
}

/// Keeps the records where any searched field contains `term`, ignoring case.
///
/// An empty term returns the input unchanged. Applying the same search
/// twice gives the same result as applying it once.
///
/// ## Example
/// ```rust
/// use agri_core::query::search;
/// use agri_core::types::FarmerField;
/// # fn farmers() -> Vec<agri_core::types::Farmer> { Vec::new() }
///
/// let hits = search(&farmers(), "priya", FarmerField::DEFAULT);
/// assert!(hits.len() <= farmers().len());
/// ```
pub fn search<T>(items: &[T], term: &str, fields: &[T::Field]) -> Vec<T>
where
    T: Searchable + Clone,
{
    if term.is_empty() {
        return items.to_vec();
    }

    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| {
            fields.iter().any(|&field| {
                item.field_text(field)
                    .map_or(false, |text| text.to_lowercase().contains(&needle))
            })
        })
        .cloned()
        .collect()
}

// =============================================================================
// Filter
// =============================================================================

/// A boolean test over one record.
///
/// Closures implement it directly, so ad-hoc predicates need no wrapper:
/// ```rust
/// use agri_core::query::Predicate;
///
/// let big = |size: &f64| *size > 20.0;
/// assert!(big.matches(&25.5));
/// ```
pub trait Predicate<T> {
    fn matches(&self, item: &T) -> bool;
}

impl<T, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn matches(&self, item: &T) -> bool {
        self(item)
    }
}

/// Keeps the records that pass every predicate, in their original order.
///
/// An empty predicate list keeps everything.
pub fn filter_by<T: Clone>(items: &[T], predicates: &[&dyn Predicate<T>]) -> Vec<T> {
    items
        .iter()
        .filter(|item| predicates.iter().all(|p| p.matches(item)))
        .cloned()
        .collect()
}

/// The dropdown filters of the farmer management page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FarmerFilter {
    pub status: Selection<FarmerStatus>,
    pub farm_type: Selection<FarmType>,
}

impl Predicate<Farmer> for FarmerFilter {
    fn matches(&self, farmer: &Farmer) -> bool {
        self.status.admits(&farmer.status) && self.farm_type.admits(&farmer.farm_type)
    }
}

labeled_enum! {
    /// Stock-level buckets offered by the inventory page.
    ///
    /// ```text
    /// critical   current <= min
    /// low        current / max <= 30%  and  current > min
    /// high       current / max >= 90%
    /// ```
    /// The buckets can overlap: an item is both critical and high
    /// when its minimum is set above 90% of its maximum.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum StockFilter("stock filter") {
        Critical => "critical",
        Low => "low",
        High => "high",
    }
}

impl StockFilter {
    /// Returns true if the item falls into this bucket.
    pub fn admits(&self, item: &InventoryItem) -> bool {
        match self {
            StockFilter::Critical => item.current_stock <= item.min_stock_level,
            StockFilter::Low => item.stock_percent().map_or(false, |pct| {
                pct <= 30.0 && item.current_stock > item.min_stock_level
            }),
            StockFilter::High => item.stock_percent().map_or(false, |pct| pct >= 90.0),
        }
    }
}

/// The dropdown filters of the inventory page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InventoryFilter {
    pub category: Selection<InventoryCategory>,
    pub stock: Selection<StockFilter>,
}

impl Predicate<InventoryItem> for InventoryFilter {
    fn matches(&self, item: &InventoryItem) -> bool {
        let stock_ok = match &self.stock {
            Selection::All => true,
            Selection::Only(bucket) => bucket.admits(item),
        };
        self.category.admits(&item.category) && stock_ok
    }
}

/// The dropdown filters of the harvest page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HarvestFilter {
    pub status: Selection<HarvestStatus>,
    pub quality: Selection<HarvestQuality>,
}

impl Predicate<HarvestRecord> for HarvestFilter {
    fn matches(&self, harvest: &HarvestRecord) -> bool {
        self.status.admits(&harvest.status) && self.quality.admits(&harvest.quality)
    }
}

labeled_enum! {
    /// Asking-price bands on the marketplace, in major units per unit.
    ///
    /// ```text
    /// low      price <  100
    /// medium   100 <= price < 500
    /// high     price >= 500
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum PriceBand("price band") {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

impl PriceBand {
    /// Band of a unit price.
    pub fn of(price: Money) -> PriceBand {
        match price.cents() {
            c if c < 10_000 => PriceBand::Low,
            c if c < 50_000 => PriceBand::Medium,
            _ => PriceBand::High,
        }
    }
}

/// The dropdown filters of the marketplace.
///
/// Unlike the other pages, the marketplace opens on active listings only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingFilter {
    pub status: Selection<ListingStatus>,
    pub quality: Selection<ListingQuality>,
    pub price: Selection<PriceBand>,
}

impl Default for ListingFilter {
    fn default() -> Self {
        ListingFilter {
            status: Selection::Only(ListingStatus::Active),
            quality: Selection::All,
            price: Selection::All,
        }
    }
}

impl Predicate<MarketListing> for ListingFilter {
    fn matches(&self, listing: &MarketListing) -> bool {
        self.status.admits(&listing.status)
            && self.quality.admits(&listing.quality)
            && self.price.admits(&PriceBand::of(listing.price_per_unit))
    }
}

// =============================================================================
// Paginate
// =============================================================================

/// One page of a list, plus the navigation facts a pager needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based, after clamping.
    pub current_page: usize,
    /// `ceil(total_items / page_size)`; zero for an empty list.
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl<T> Page<T> {
    /// 1-based `(first, last)` positions shown on this page, for
    /// "Showing 11 to 20 of 25". `None` when the page is empty.
    pub fn showing(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.current_page - 1) * self.page_size + 1;
        Some((first, first + self.items.len() - 1))
    }
}

/// Cuts one page out of `items`.
///
/// The requested page is clamped to `[1, max(total_pages, 1)]`, so page 0
/// and negative pages show page 1, and a page past the end shows the last
/// page. An empty list yields one empty page with `total_pages == 0`.
///
/// ## Example
/// ```rust
/// use std::num::NonZeroUsize;
/// use agri_core::query::paginate;
///
/// let items: Vec<u32> = (1..=25).collect();
/// let size = NonZeroUsize::new(10).unwrap();
///
/// let last = paginate(&items, size, 99);
/// assert_eq!(last.current_page, 3);
/// assert_eq!(last.items, vec![21, 22, 23, 24, 25]);
/// assert!(!last.has_next);
/// ```
pub fn paginate<T: Clone>(items: &[T], page_size: NonZeroUsize, page: i64) -> Page<T> {
    let size = page_size.get();
    let total_items = items.len();
    let total_pages = total_items.div_ceil(size);

    let last = total_pages.max(1) as i64;
    let current_page = page.clamp(1, last) as usize;

    let start = (current_page - 1).saturating_mul(size).min(total_items);
    let end = start.saturating_add(size).min(total_items);

    Page {
        items: items[start..end].to_vec(),
        current_page,
        total_pages,
        total_items,
        page_size: size,
        has_next: current_page < total_pages,
        has_prev: current_page > 1,
    }
}

// =============================================================================
// List View
// =============================================================================

/// The state of one management list: search box, filter dropdowns, pager.
///
/// ## State Rules
/// ```text
/// set_term / set_filter (changed) ──► page = 1
/// go_to / next / prev             ──► page clamped to [1, last known total]
/// view(items)                     ──► page re-clamped against the new list
/// ```
///
/// ## Example
/// ```rust
/// use std::num::NonZeroUsize;
/// use agri_core::query::{FarmerFilter, ListView};
/// use agri_core::types::{Farmer, FarmerField};
///
/// let mut view: ListView<Farmer, FarmerFilter> =
///     ListView::new(FarmerField::DEFAULT, NonZeroUsize::new(10).unwrap());
/// view.set_term("kandy").unwrap();
/// let page = view.view(&[]);
/// assert_eq!(page.total_items, 0);
/// ```
#[derive(Debug, Clone)]
pub struct ListView<T: Searchable, F> {
    term: String,
    fields: Vec<T::Field>,
    filter: F,
    page: usize,
    total_pages: usize,
    page_size: NonZeroUsize,
}

impl<T, F> ListView<T, F>
where
    T: Searchable + Clone,
    F: Predicate<T> + PartialEq + Default,
{
    /// A view on page 1 with an empty term and the filter's default.
    pub fn new(fields: &[T::Field], page_size: NonZeroUsize) -> Self {
        ListView {
            term: String::new(),
            fields: fields.to_vec(),
            filter: F::default(),
            page: 1,
            total_pages: 0,
            page_size,
        }
    }

    /// Replaces the search term. Over-long terms are rejected; the term is
    /// otherwise kept as typed, so the view matches what `search` would.
    pub fn set_term(&mut self, term: &str) -> ValidationResult<()> {
        let term = validate_search_term(term)?;
        if term != self.term {
            self.term = term;
            self.page = 1;
        }
        Ok(())
    }

    /// Replaces the filter.
    pub fn set_filter(&mut self, filter: F) {
        if filter != self.filter {
            self.filter = filter;
            self.page = 1;
        }
    }

    /// Jumps to `page`, clamped to the page count of the last view.
    pub fn go_to(&mut self, page: i64) {
        let last = self.total_pages.max(1) as i64;
        self.page = page.clamp(1, last) as usize;
    }

    pub fn next(&mut self) {
        self.go_to(self.page as i64 + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.page as i64 - 1);
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Runs search, filter and paginate over `items`.
    pub fn view(&mut self, items: &[T]) -> Page<T> {
        let found = search(items, &self.term, &self.fields);
        let kept = filter_by(&found, &[&self.filter]);
        let page = paginate(&kept, self.page_size, self.page as i64);

        self.page = page.current_page;
        self.total_pages = page.total_pages;
        page
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
