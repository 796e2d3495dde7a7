//! Symbolic operations and the paths they map to.
//!
//! Every endpoint the services call is a `Route` variant, so ids are
//! typed and a path can never be sent with an unfilled placeholder.

use std::fmt;

use reqwest::Method;

/// Resource id as used by the catalog API.
pub type Id = u64;

/// One API endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Route {
    // Auth
    SignIn,
    SignUp,
    Activate,
    ForgotPassword,
    ResetPassword,

    // Movies
    Movies,
    Movie { id: Id },
    LatestMovies,
    SearchMovies,
    RelatedMovies { id: Id },
    MovieCount,

    // Series
    Series,
    Serie { id: Id },
    LatestSeries,
    SearchSeries,
    RelatedSeries { id: Id },
    SerieSeasons { id: Id },

    // Seasons
    Seasons,
    Season { id: Id },
    SearchSeasons,
    SeasonEpisodes { id: Id },

    // Episodes
    Episodes,
    Episode { id: Id },
    SearchEpisodes,

    // People
    Actors,
    Actor { id: Id },
    SearchActors,
    Crews,
    Crew { id: Id },
    SearchCrew,

    // Genres
    Genres,
    Genre { id: Id },

    // Reviews
    Reviews,
    Review { id: Id },
    CreateReview,
    UpdateReview { id: Id },
    DeleteReview { id: Id },

    // Lists
    Lists,
    List { id: Id },
    CreateList,
    UpdateList { id: Id },
    DeleteList { id: Id },
    AddListItem { id: Id },
    RemoveListItem { id: Id, item_id: Id },

    // Forum
    Threads,
    Thread { id: Id },
    CreateThread,
    UpdateThread { id: Id },
    DeleteThread { id: Id },
    CreateReply { id: Id },

    // Users
    Profile { id: Id },
    UpdateProfile { id: Id },
    Favorites,
    AddFavorite,
    RemoveFavorite,
    MyReviews,
    AddUserReview,
    UpdateUserReview { item_id: Id },
    DeleteUserReview { item_id: Id },
    Watchlist { id: Id },
    AddToWatchlist { id: Id },
    RemoveFromWatchlist { id: Id, item_id: Id },
}

impl Route {
    /// HTTP method of the endpoint.
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Self::SignIn
            | Self::SignUp
            | Self::Activate
            | Self::ForgotPassword
            | Self::ResetPassword
            | Self::CreateReview
            | Self::CreateList
            | Self::AddListItem { .. }
            | Self::CreateThread
            | Self::CreateReply { .. }
            | Self::AddFavorite
            | Self::AddUserReview
            | Self::AddToWatchlist { .. } => Method::POST,

            Self::UpdateReview { .. }
            | Self::UpdateList { .. }
            | Self::UpdateThread { .. }
            | Self::UpdateProfile { .. }
            | Self::UpdateUserReview { .. } => Method::PUT,

            Self::DeleteReview { .. }
            | Self::DeleteList { .. }
            | Self::RemoveListItem { .. }
            | Self::DeleteThread { .. }
            | Self::RemoveFavorite
            | Self::DeleteUserReview { .. }
            | Self::RemoveFromWatchlist { .. } => Method::DELETE,

            _ => Method::GET,
        }
    }

    /// Path relative to the API base URL, without a leading `/`.
    #[must_use]
    pub fn path(&self) -> String {
        match *self {
            Self::SignIn => String::from("auth/signin"),
            Self::SignUp => String::from("auth/signup"),
            Self::Activate => String::from("auth/activate"),
            Self::ForgotPassword => String::from("auth/forgot-password"),
            Self::ResetPassword => String::from("auth/reset-password"),

            Self::Movies => String::from("movies"),
            Self::Movie { id } => format!("movies/{id}"),
            Self::LatestMovies => String::from("movies/latest"),
            Self::SearchMovies => String::from("movies/search"),
            Self::RelatedMovies { id } => format!("movies/{id}/related"),
            Self::MovieCount => String::from("movies/count"),

            Self::Series => String::from("series"),
            Self::Serie { id } => format!("series/{id}"),
            Self::LatestSeries => String::from("series/latest"),
            Self::SearchSeries => String::from("series/search"),
            Self::RelatedSeries { id } => format!("series/{id}/related"),
            Self::SerieSeasons { id } => format!("series/{id}/seasons"),

            Self::Seasons => String::from("seasons"),
            Self::Season { id } => format!("seasons/{id}"),
            Self::SearchSeasons => String::from("seasons/search"),
            Self::SeasonEpisodes { id } => format!("seasons/{id}/episodes"),

            Self::Episodes => String::from("episodes"),
            Self::Episode { id } => format!("episodes/{id}"),
            Self::SearchEpisodes => String::from("episodes/search"),

            Self::Actors => String::from("actors"),
            Self::Actor { id } => format!("actors/{id}"),
            Self::SearchActors => String::from("actors/search"),
            Self::Crews => String::from("crew"),
            Self::Crew { id } => format!("crew/{id}"),
            Self::SearchCrew => String::from("crew/search"),

            Self::Genres => String::from("genres"),
            Self::Genre { id } => format!("genres/{id}"),

            Self::Reviews | Self::CreateReview => String::from("reviews"),
            Self::Review { id } | Self::UpdateReview { id } | Self::DeleteReview { id } => {
                format!("reviews/{id}")
            }

            Self::Lists | Self::CreateList => String::from("lists"),
            Self::List { id } | Self::UpdateList { id } | Self::DeleteList { id } => {
                format!("lists/{id}")
            }
            Self::AddListItem { id } => format!("lists/{id}/items"),
            Self::RemoveListItem { id, item_id } => format!("lists/{id}/items/{item_id}"),

            Self::Threads | Self::CreateThread => String::from("forum/threads"),
            Self::Thread { id } | Self::UpdateThread { id } | Self::DeleteThread { id } => {
                format!("forum/threads/{id}")
            }
            Self::CreateReply { id } => format!("forum/threads/{id}/replies"),

            Self::Profile { id } | Self::UpdateProfile { id } => format!("users/{id}"),
            Self::Favorites | Self::AddFavorite | Self::RemoveFavorite => {
                String::from("users/favorites")
            }
            Self::MyReviews | Self::AddUserReview => String::from("users/reviews"),
            Self::UpdateUserReview { item_id } | Self::DeleteUserReview { item_id } => {
                format!("users/reviews/{item_id}")
            }
            Self::Watchlist { id } | Self::AddToWatchlist { id } => {
                format!("users/{id}/watchlist")
            }
            Self::RemoveFromWatchlist { id, item_id } => {
                format!("users/{id}/watchlist/{item_id}")
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} /{}", self.method(), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_routes_fill_ids() {
        // Arrange
        let cases = [
            (Route::Movie { id: 7 }, "movies/7"),
            (Route::RelatedMovies { id: 7 }, "movies/7/related"),
            (Route::SerieSeasons { id: 3 }, "series/3/seasons"),
            (Route::SeasonEpisodes { id: 12 }, "seasons/12/episodes"),
            (Route::Crew { id: 5 }, "crew/5"),
            (Route::RemoveListItem { id: 2, item_id: 40 }, "lists/2/items/40"),
            (Route::CreateReply { id: 9 }, "forum/threads/9/replies"),
            (Route::UpdateUserReview { item_id: 11 }, "users/reviews/11"),
            (
                Route::RemoveFromWatchlist { id: 1, item_id: 8 },
                "users/1/watchlist/8",
            ),
        ];

        // Act & Assert
        for (route, expected) in cases {
            assert_eq!(route.path(), expected, "{route:?}");
        }
    }

    #[test]
    fn test_static_routes() {
        // Arrange & Act & Assert
        assert_eq!(Route::SignIn.path(), "auth/signin");
        assert_eq!(Route::ForgotPassword.path(), "auth/forgot-password");
        assert_eq!(Route::LatestSeries.path(), "series/latest");
        assert_eq!(Route::MovieCount.path(), "movies/count");
        assert_eq!(Route::Crews.path(), "crew");
        assert_eq!(Route::Favorites.path(), "users/favorites");
    }

    #[test]
    fn test_methods() {
        // Arrange & Act & Assert
        assert_eq!(Route::SignIn.method(), Method::POST);
        assert_eq!(Route::Movies.method(), Method::GET);
        assert_eq!(Route::Favorites.method(), Method::GET);
        assert_eq!(Route::AddFavorite.method(), Method::POST);
        assert_eq!(Route::RemoveFavorite.method(), Method::DELETE);
        assert_eq!(Route::UpdateProfile { id: 1 }.method(), Method::PUT);
        assert_eq!(Route::Profile { id: 1 }.method(), Method::GET);
    }

    #[test]
    fn test_display_includes_method() {
        // Arrange & Act
        let rendered = Route::DeleteList { id: 4 }.to_string();

        // Assert
        assert_eq!(rendered, "DELETE /lists/4");
    }
}
