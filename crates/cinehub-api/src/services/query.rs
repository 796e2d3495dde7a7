//! Query parameter builders shared by the catalog services.

use crate::routes::Id;

/// Sort direction, sent as `ascOrDesc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl SortOrder {
    /// Wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Filters for collection endpoints (`movies`, `series`, `actors`, ...).
///
/// Unset fields are omitted from the query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrowseQuery {
    /// Page number (1-based).
    pub page: Option<u32>,
    /// Page size.
    pub per_page: Option<u32>,
    /// Sort field.
    pub sort_by: Option<String>,
    /// Sort direction.
    pub order: Option<SortOrder>,
    /// Restrict to one genre.
    pub genre_id: Option<Id>,
    /// Restrict to a release year.
    pub year: Option<u32>,
    /// Minimum IMDb rating.
    pub min_rating: Option<f64>,
}

impl BrowseQuery {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page number.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Sets the sort field and direction.
    #[must_use]
    pub fn sort(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort_by = Some(field.into());
        self.order = Some(order);
        self
    }

    /// Restricts results to one genre.
    #[must_use]
    pub const fn genre_id(mut self, genre_id: Id) -> Self {
        self.genre_id = Some(genre_id);
        self
    }

    /// Restricts results to a release year.
    #[must_use]
    pub const fn year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets the minimum rating.
    #[must_use]
    pub const fn min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    /// Builds query pairs, skipping unset fields.
    pub(crate) fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "page", self.page);
        push_opt(&mut pairs, "perPage", self.per_page);
        push_opt(&mut pairs, "sortBy", self.sort_by.as_deref());
        push_opt(&mut pairs, "ascOrDesc", self.order.map(SortOrder::as_str));
        push_opt(&mut pairs, "genreId", self.genre_id);
        push_opt(&mut pairs, "year", self.year);
        push_opt(&mut pairs, "minRating", self.min_rating);
        pairs
    }
}

/// Free-text search with optional paging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Search term (matched against title or full name).
    pub term: String,
    /// Page number (1-based).
    pub page: Option<u32>,
    /// Page size.
    pub per_page: Option<u32>,
}

impl SearchQuery {
    /// Creates a search for `term`.
    #[must_use]
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            page: None,
            per_page: None,
        }
    }

    /// Sets the page number.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Builds query pairs, sending the term as `field`.
    pub(crate) fn to_pairs(&self, field: &str) -> Vec<(String, String)> {
        let mut pairs = vec![(String::from(field), self.term.clone())];
        push_opt(&mut pairs, "page", self.page);
        push_opt(&mut pairs, "perPage", self.per_page);
        pairs
    }
}

/// Plain paging for `related` endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-based).
    pub page: u32,
    /// Page size.
    pub per_page: u32,
}

impl Default for Pagination {
    /// First page of six, the size of a "related" strip.
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 6,
        }
    }
}

impl Pagination {
    pub(crate) fn to_pairs(self) -> Vec<(String, String)> {
        vec![
            (String::from("page"), self.page.to_string()),
            (String::from("perPage"), self.per_page.to_string()),
        ]
    }
}

/// Appends `name=value` when `value` is set.
pub(crate) fn push_opt<V: ToString>(
    pairs: &mut Vec<(String, String)>,
    name: &str,
    value: Option<V>,
) {
    if let Some(value) = value {
        pairs.push((String::from(name), value.to_string()));
    }
}
