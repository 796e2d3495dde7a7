//! Subcommand arguments and runners.

pub mod account;
pub mod auth;
pub mod catalog;
pub mod community;

use cinehub_api::services::{BrowseQuery, SearchQuery, SortOrder};
use cinehub_api::types::{ItemKind, Paginated};

/// Paging and filter flags shared by listing subcommands.
#[derive(clap::Args, Debug, Clone)]
pub struct BrowseArgs {
    /// Page number (1-based).
    #[arg(long)]
    page: Option<u32>,
    /// Page size.
    #[arg(long)]
    per_page: Option<u32>,
    /// Sort field (e.g. "dateAired", "ratingImdb").
    #[arg(long)]
    sort_by: Option<String>,
    /// Sort descending.
    #[arg(long, requires = "sort_by")]
    desc: bool,
    /// Restrict to one genre ID.
    #[arg(long)]
    genre: Option<u64>,
    /// Restrict to a release year.
    #[arg(long)]
    year: Option<u32>,
    /// Minimum IMDb rating.
    #[arg(long)]
    min_rating: Option<f64>,
}

impl BrowseArgs {
    fn to_query(&self) -> BrowseQuery {
        let mut query = BrowseQuery::new();
        query.page = self.page;
        query.per_page = self.per_page;
        if let Some(field) = &self.sort_by {
            let order = if self.desc {
                SortOrder::Desc
            } else {
                SortOrder::Asc
            };
            query = query.sort(field.as_str(), order);
        }
        query.genre_id = self.genre;
        query.year = self.year;
        query.min_rating = self.min_rating;
        query
    }
}

/// Free-text search flags.
#[derive(clap::Args, Debug, Clone)]
pub struct SearchArgs {
    /// Search term.
    term: String,
    /// Page number (1-based).
    #[arg(long)]
    page: Option<u32>,
}

impl SearchArgs {
    fn to_query(&self) -> SearchQuery {
        let mut query = SearchQuery::new(self.term.as_str());
        query.page = self.page;
        query
    }
}

/// Kind of catalog item, as accepted on the command line.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    /// Movie.
    Movie,
    /// Series.
    Serie,
    /// Season.
    Season,
    /// Episode.
    Episode,
    /// Actor.
    Actor,
    /// Crew member.
    Crew,
}

impl From<KindArg> for ItemKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Movie => Self::Movie,
            KindArg::Serie => Self::Serie,
            KindArg::Season => Self::Season,
            KindArg::Episode => Self::Episode,
            KindArg::Actor => Self::Actor,
            KindArg::Crew => Self::Crew,
        }
    }
}

/// Logs the page footer of a paginated listing.
fn log_page<T>(page: &Paginated<T>) {
    tracing::info!(
        "Page {}/{} ({} total)",
        page.meta.page,
        page.meta.total_pages,
        page.meta.total
    );
}

/// Renders an optional value as `-` when absent.
fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| String::from("-"), |v| v.to_string())
}
