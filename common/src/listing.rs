//! State machine behind every paginated, searchable list in the dashboard.
//!
//! A view owns one [`ListResource`] and drives it from its update loop:
//! `begin_fetch` hands out a ticket, the async call finishes with either
//! `apply_page` or `fail_fetch`, and only the response carrying the latest
//! ticket is allowed to touch the list. Mutations (`insert_created`,
//! `replace`, `remove`, `patch`) are applied after the server confirmed them,
//! so a failed call never leaves the list half-updated.

use crate::model::page::{ListQuery, Page};

/// Page size of every server-backed list.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Anything addressable by the opaque server id.
pub trait Identified {
    fn id(&self) -> &str;
}

/// Identifies one fetch. Tickets only grow, so comparing with the latest one
/// tells whether a response is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

/// Number of pages needed for `count` items, rounding up.
pub fn total_pages(count: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = count.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Slice of `items` shown on 1-based `page`. Used for lists that live in
/// memory, such as the template catalog.
pub fn paginate<T>(items: &[T], page: u32, page_size: u32) -> &[T] {
    let page_size = page_size as usize;
    let start = (page.max(1) as usize - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListResource<T> {
    items: Vec<T>,
    current_page: u32,
    search: String,
    count: u64,
    total_pages: u32,
    page_size: u32,
    loading: bool,
    error: Option<String>,
    latest: u64,
}

impl<T> Default for ListResource<T> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl<T> ListResource<T> {
    pub fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            search: String::new(),
            count: 0,
            total_pages: 0,
            page_size: page_size.max(1),
            loading: false,
            error: None,
            latest: 0,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Query for the page the list currently points at.
    pub fn query(&self) -> ListQuery {
        ListQuery::new(self.current_page, self.search.clone())
    }

    /// Starts a fetch. Any ticket handed out earlier becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest += 1;
        self.loading = true;
        self.error = None;
        FetchTicket(self.latest)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Replaces the items with a fetched page. Returns `false` and leaves the
    /// list untouched when `ticket` has been superseded.
    pub fn apply_page(&mut self, ticket: FetchTicket, page: Page<T>) -> bool {
        if !self.is_current(ticket) {
            log::debug!("dropping stale page for ticket {}", ticket.0);
            return false;
        }
        self.items = page.results;
        self.count = page.count;
        self.total_pages = total_pages(page.count, self.page_size);
        self.loading = false;
        true
    }

    /// Records a failed fetch. The previous items stay visible.
    pub fn fail_fetch(&mut self, ticket: FetchTicket, message: impl Into<String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loading = false;
        self.error = Some(message.into());
        true
    }

    /// Applies a new search query. A changed query always goes back to page 1.
    /// Returns whether a refetch is needed.
    pub fn set_search(&mut self, search: impl Into<String>) -> bool {
        let search = search.into();
        if search == self.search {
            return false;
        }
        self.search = search;
        self.current_page = 1;
        true
    }

    /// Moves to `page`, clamped to the known range. Returns whether a refetch
    /// is needed.
    pub fn set_page(&mut self, page: u32) -> bool {
        let mut page = page.max(1);
        if self.total_pages > 0 {
            page = page.min(self.total_pages);
        }
        if page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    /// Back to page 1, e.g. after a filter outside the query changed.
    pub fn reset_page(&mut self) {
        self.current_page = 1;
    }

    /// Appends a freshly created item without refetching.
    pub fn insert_created(&mut self, item: T) {
        self.items.push(item);
        self.count += 1;
        self.total_pages = total_pages(self.count, self.page_size);
    }
}

impl<T: Identified> ListResource<T> {
    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Swaps in the server's copy of an edited item.
    pub fn replace(&mut self, item: T) -> bool {
        match self.items.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(existing) => {
                *existing = item;
                true
            }
            None => false,
        }
    }

    /// Modifies an item in place, e.g. to record a new status.
    pub fn patch(&mut self, id: &str, apply: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                apply(item);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<T> {
        let position = self.items.iter().position(|item| item.id() == id)?;
        self.count = self.count.saturating_sub(1);
        self.total_pages = total_pages(self.count, self.page_size);
        Some(self.items.remove(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        name: String,
    }

    impl Identified for Row {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn row(id: &str, name: &str) -> Row {
        Row {
            id: id.into(),
            name: name.into(),
        }
    }

    fn page_of(ids: std::ops::Range<u32>, count: u64) -> Page<Row> {
        Page::new(ids.map(|i| row(&i.to_string(), "x")).collect(), count)
    }

    #[test]
    fn journalists_search_counts_pages() {
        let mut list = ListResource::default();
        list.set_search("kenya");
        let ticket = list.begin_fetch();
        assert_eq!(list.query(), ListQuery::new(1, "kenya"));

        assert!(list.apply_page(ticket, page_of(0..10, 23)));
        assert_eq!(list.items().len(), 10);
        assert_eq!(list.total_pages(), 3);
        assert!(!list.is_loading());
        assert!(list.has_next());
    }

    #[test]
    fn new_query_resets_to_first_page() {
        let mut list: ListResource<Row> = ListResource::default();
        let ticket = list.begin_fetch();
        list.apply_page(ticket, page_of(0..10, 30));
        assert!(list.set_page(2));
        assert_eq!(list.current_page(), 2);

        assert!(list.set_search("nairobi"));
        assert_eq!(list.current_page(), 1);
        assert!(!list.set_search("nairobi"));
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut list = ListResource::default();
        let first = list.begin_fetch();
        let second = list.begin_fetch();

        assert!(list.apply_page(second, page_of(10..12, 12)));
        assert!(!list.apply_page(first, page_of(0..10, 12)));
        assert_eq!(list.items()[0].id, "10");
        assert!(!list.fail_fetch(first, "late failure"));
        assert_eq!(list.error(), None);
    }

    #[test]
    fn failed_fetch_keeps_items() {
        let mut list = ListResource::default();
        let ticket = list.begin_fetch();
        list.apply_page(ticket, page_of(0..3, 3));

        let ticket = list.begin_fetch();
        assert!(list.fail_fetch(ticket, "network down"));
        assert_eq!(list.items().len(), 3);
        assert_eq!(list.error(), Some("network down"));
    }

    #[test]
    fn page_is_clamped_to_known_range() {
        let mut list = ListResource::default();
        let ticket = list.begin_fetch();
        list.apply_page(ticket, page_of(0..10, 23));
        assert!(list.set_page(9));
        assert_eq!(list.current_page(), 3);
        assert!(list.set_page(0));
        assert_eq!(list.current_page(), 1);
    }

    #[test]
    fn local_mutations_by_id() {
        let mut list = ListResource::default();
        let ticket = list.begin_fetch();
        list.apply_page(ticket, Page::new(vec![row("abc", "a"), row("def", "d")], 2));

        let unchanged = list.get("abc").cloned().unwrap();
        assert!(list.replace(unchanged.clone()));
        assert_eq!(list.get("abc"), Some(&unchanged));

        assert!(list.patch("def", |r| r.name = "renamed".into()));
        assert_eq!(list.get("def").unwrap().name, "renamed");

        assert_eq!(list.remove("abc").map(|r| r.id), Some("abc".to_string()));
        assert!(!list.contains("abc"));
        assert_eq!(list.count(), 1);
        assert!(list.remove("missing").is_none());

        list.insert_created(row("new", "n"));
        assert_eq!(list.items().last().unwrap().id, "new");
        assert_eq!(list.count(), 2);
    }

    #[test]
    fn ceil_division_and_static_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(8, 6), 2);

        let items: Vec<u8> = (0..8).collect();
        assert_eq!(paginate(&items, 1, 6), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(paginate(&items, 2, 6), &[6, 7]);
        assert!(paginate(&items, 3, 6).is_empty());
    }
}
