//! Resource services.
//!
//! Each resource is an async trait implemented for `ApiClient`, mapping
//! domain operations onto one `Route` each.

mod actors;
mod auth;
mod crew;
mod episodes;
mod forum;
mod genres;
mod lists;
mod movies;
mod query;
mod reviews;
mod seasons;
mod series;
#[cfg(test)]
mod testing;
mod users;

pub use actors::{ActorApi, LocalActorApi};
#[allow(clippy::module_name_repetitions)]
pub use auth::{AuthApi, LocalAuthApi, SignInData, SignUpData};
pub use crew::{CrewApi, LocalCrewApi};
pub use episodes::{EpisodeApi, LocalEpisodeApi};
pub use forum::{ForumApi, LocalForumApi, NewThread, ThreadQuery, ThreadUpdate};
pub use genres::{GenreApi, LocalGenreApi};
pub use lists::{ListApi, ListFilter, ListUpdate, LocalListApi, NewList, NewListItem};
pub use movies::{LocalMovieApi, MovieApi};
pub use query::{BrowseQuery, Pagination, SearchQuery, SortOrder};
pub use reviews::{LocalReviewApi, NewReview, ReviewApi, ReviewFilter, ReviewUpdate};
pub use seasons::{LocalSeasonApi, SeasonApi};
pub use series::{LocalSerieApi, SerieApi};
pub use users::{
    FavoriteQuery, LocalUserApi, ProfileUpdate, ReviewInput, UserApi, UserReviewQuery,
};
