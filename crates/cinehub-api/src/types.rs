//! Wire records of the catalog API.
//!
//! Field names follow the API's camelCase JSON. Optional fields default
//! when absent so partial payloads (list views, embedded records) decode.

use serde::{Deserialize, Serialize};

use crate::routes::Id;

/// Authenticated user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User ID.
    pub id: Id,
    /// Email address.
    pub email: String,
    /// Unique handle.
    #[serde(alias = "userName")]
    pub username: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Free-form biography.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Whether the account has been activated.
    #[serde(default)]
    pub is_active: bool,
    /// Creation timestamp (ISO 8601).
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp (ISO 8601).
    #[serde(default)]
    pub updated_at: String,
}

/// Bearer credential pair returned by sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    /// Access token sent as `Authorization: Bearer`.
    pub access_token: String,
    /// Refresh token, if the server issued one. Never exchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// Response of `POST auth/signin`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignInResponse {
    /// Signed-in user.
    pub user: User,
    /// Issued credential.
    pub tokens: AuthTokens,
}

/// Generic `{ "message": ... }` acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    #[serde(default)]
    pub message: String,
}

/// `{ "count": n }` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Count {
    /// Number of records.
    pub count: u64,
}

/// Aggregated user ratings of an item.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingInfo {
    /// Mean rating.
    #[serde(default)]
    pub average_rating: f64,
    /// Number of reviews.
    #[serde(default)]
    pub total_reviews: u64,
}

/// Pagination metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Total number of records.
    pub total: u64,
    /// Current page (1-based).
    pub page: u32,
    /// Page size.
    pub per_page: u32,
    /// Number of pages.
    pub total_pages: u32,
    /// Whether another page follows.
    #[serde(default)]
    pub has_next_page: bool,
    /// Whether a page precedes.
    #[serde(default)]
    pub has_previous_page: bool,
}

/// Canonical paginated envelope: `{ "data": [...], "meta": {...} }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Paginated<T> {
    /// Records of the current page.
    pub data: Vec<T>,
    /// Pagination metadata.
    #[serde(default)]
    pub meta: PageMeta,
}

/// Kinds of catalog item a user can bookmark or review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Movie.
    Movie,
    /// Series.
    Serie,
    /// Season of a series.
    Season,
    /// Episode of a season.
    Episode,
    /// Actor.
    Actor,
    /// Crew member.
    Crew,
}

impl ItemKind {
    /// Wire name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Serie => "serie",
            Self::Season => "season",
            Self::Episode => "episode",
            Self::Actor => "actor",
            Self::Crew => "crew",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Genre.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Genre {
    /// Genre ID.
    pub id: Id,
    /// Display name.
    pub name: String,
    /// URL slug.
    #[serde(default)]
    pub slug: Option<String>,
}

/// Movie.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Movie ID.
    pub id: Id,
    /// Title.
    pub title: String,
    /// Synopsis.
    #[serde(default)]
    pub description: String,
    /// Poster path.
    #[serde(default)]
    pub photo_src: Option<String>,
    /// Production poster URL.
    #[serde(default)]
    pub photo_src_prod: Option<String>,
    /// Trailer URL.
    #[serde(default)]
    pub trailer_src: Option<String>,
    /// Runtime in minutes.
    #[serde(default)]
    pub duration: Option<u32>,
    /// IMDb rating.
    #[serde(default)]
    pub rating_imdb: Option<f64>,
    /// Release date.
    #[serde(default)]
    pub date_aired: Option<String>,
    /// User ratings.
    #[serde(default)]
    pub ratings: Option<RatingInfo>,
    /// Genres.
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Whether the current user bookmarked it.
    #[serde(default)]
    pub is_bookmarked: bool,
    /// Whether the current user reviewed it.
    #[serde(default)]
    pub is_reviewed: bool,
    /// Embedded reviews.
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Series.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Serie {
    /// Series ID.
    pub id: Id,
    /// Title.
    pub title: String,
    /// Synopsis.
    #[serde(default)]
    pub description: String,
    /// Poster path.
    #[serde(default)]
    pub photo_src: Option<String>,
    /// Production poster URL.
    #[serde(default)]
    pub photo_src_prod: Option<String>,
    /// Trailer URL.
    #[serde(default)]
    pub trailer_src: Option<String>,
    /// First air date.
    #[serde(default)]
    pub date_aired: Option<String>,
    /// IMDb rating.
    #[serde(default)]
    pub rating_imdb: Option<f64>,
    /// User ratings.
    #[serde(default)]
    pub ratings: Option<RatingInfo>,
    /// Genres.
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Whether the current user bookmarked it.
    #[serde(default)]
    pub is_bookmarked: bool,
    /// Whether the current user reviewed it.
    #[serde(default)]
    pub is_reviewed: bool,
    /// Embedded reviews.
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Season of a series.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    /// Season ID.
    pub id: Id,
    /// Title.
    pub title: String,
    /// Synopsis.
    #[serde(default)]
    pub description: String,
    /// Poster path.
    #[serde(default)]
    pub photo_src: Option<String>,
    /// Production poster URL.
    #[serde(default)]
    pub photo_src_prod: Option<String>,
    /// Trailer URL.
    #[serde(default)]
    pub trailer_src: Option<String>,
    /// IMDb rating.
    #[serde(default)]
    pub rating_imdb: Option<f64>,
    /// First air date.
    #[serde(default)]
    pub date_aired: Option<String>,
    /// Owning series.
    pub serie_id: Id,
    /// User ratings.
    #[serde(default)]
    pub ratings: Option<RatingInfo>,
    /// Whether the current user bookmarked it.
    #[serde(default)]
    pub is_bookmarked: bool,
    /// Whether the current user reviewed it.
    #[serde(default)]
    pub is_reviewed: bool,
    /// Embedded reviews.
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Episode of a season.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Episode ID.
    pub id: Id,
    /// Title.
    pub title: String,
    /// Synopsis.
    #[serde(default)]
    pub description: String,
    /// Still image path.
    #[serde(default)]
    pub photo_src: Option<String>,
    /// Production image URL.
    #[serde(default)]
    pub photo_src_prod: Option<String>,
    /// Trailer URL.
    #[serde(default)]
    pub trailer_src: Option<String>,
    /// Runtime in minutes.
    #[serde(default)]
    pub duration: Option<u32>,
    /// IMDb rating.
    #[serde(default)]
    pub rating_imdb: Option<f64>,
    /// Air date.
    #[serde(default)]
    pub date_aired: Option<String>,
    /// Owning season.
    pub season_id: Id,
    /// User ratings.
    #[serde(default)]
    pub ratings: Option<RatingInfo>,
    /// Whether the current user bookmarked it.
    #[serde(default)]
    pub is_bookmarked: bool,
    /// Whether the current user reviewed it.
    #[serde(default)]
    pub is_reviewed: bool,
    /// Embedded reviews.
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Actor or crew member. Both resources share one shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Person ID.
    pub id: Id,
    /// Full name.
    pub fullname: String,
    /// Portrait path.
    #[serde(default)]
    pub photo_src: Option<String>,
    /// Production portrait URL.
    #[serde(default)]
    pub photo_src_prod: Option<String>,
    /// Biography.
    #[serde(default)]
    pub description: Option<String>,
    /// Debut date.
    #[serde(default)]
    pub debut: Option<String>,
    /// User ratings.
    #[serde(default)]
    pub ratings: Option<RatingInfo>,
    /// Whether the current user bookmarked them.
    #[serde(default)]
    pub is_bookmarked: bool,
    /// Whether the current user reviewed them.
    #[serde(default)]
    pub is_reviewed: bool,
    /// Embedded reviews.
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Author summary embedded in a review.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAuthor {
    /// User ID.
    pub id: Id,
    /// Handle.
    #[serde(alias = "username")]
    pub user_name: String,
    /// Avatar URL.
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Vote tallies of a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct VoteCount {
    /// Upvotes.
    #[serde(default)]
    pub upvotes: u64,
    /// Downvotes.
    #[serde(default)]
    pub downvotes: u64,
}

/// Review of a catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Review ID.
    pub id: Id,
    /// Author ID.
    pub user_id: Id,
    /// Reviewed movie.
    #[serde(default)]
    pub movie_id: Option<Id>,
    /// Reviewed series.
    #[serde(default)]
    pub serie_id: Option<Id>,
    /// Reviewed actor.
    #[serde(default)]
    pub actor_id: Option<Id>,
    /// Reviewed crew member.
    #[serde(default)]
    pub crew_id: Option<Id>,
    /// Rating given.
    pub rating: u8,
    /// Headline.
    #[serde(default)]
    pub title: Option<String>,
    /// Body.
    pub content: String,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: String,
    /// Author summary.
    #[serde(default)]
    pub user: Option<ReviewAuthor>,
    /// Whether the current user upvoted it.
    #[serde(default)]
    pub is_upvoted: bool,
    /// Whether the current user downvoted it.
    #[serde(default)]
    pub is_downvoted: bool,
    /// Vote tallies.
    #[serde(default, rename = "_count")]
    pub count: Option<VoteCount>,
}

/// Review written by the current user, as listed under `users/reviews`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReview {
    /// Review ID.
    pub id: Id,
    /// Reviewed item.
    pub item_id: Id,
    /// Kind of reviewed item.
    pub item_type: ItemKind,
    /// Rating given.
    pub rating: u8,
    /// Body.
    pub content: String,
    /// Display title of the reviewed item.
    #[serde(default)]
    pub item_title: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: String,
}

/// Bookmarked item, as listed under `users/favorites`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    /// Favorite ID.
    pub id: Id,
    /// Bookmarked item.
    pub item_id: Id,
    /// Kind of bookmarked item.
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Display title of the bookmarked item.
    #[serde(default)]
    pub title: Option<String>,
    /// Poster or portrait path.
    #[serde(default)]
    pub photo_src: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: String,
}

/// User-curated list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    /// List ID.
    pub id: Id,
    /// Owner ID.
    pub user_id: Id,
    /// Name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether other users can see it.
    #[serde(default)]
    pub is_public: bool,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: String,
    /// Entries.
    #[serde(default)]
    pub items: Vec<ListItem>,
    /// Owner profile.
    #[serde(default)]
    pub user: Option<User>,
}

/// Entry of a `List`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    /// Entry ID.
    pub id: Id,
    /// Owning list.
    pub list_id: Id,
    /// Referenced movie.
    #[serde(default)]
    pub movie_id: Option<Id>,
    /// Referenced series.
    #[serde(default)]
    pub serie_id: Option<Id>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: String,
    /// Embedded movie.
    #[serde(default)]
    pub movie: Option<Movie>,
    /// Embedded series.
    #[serde(default)]
    pub serie: Option<Serie>,
}

/// Forum category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ForumCategory {
    /// Category ID.
    pub id: Id,
    /// Name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Forum tag.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ForumTag {
    /// Tag ID.
    pub id: Id,
    /// Name.
    pub name: String,
    /// URL slug.
    pub slug: String,
}

/// Forum discussion thread.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumThread {
    /// Thread ID.
    pub id: Id,
    /// Author ID.
    pub user_id: Id,
    /// Title.
    pub title: String,
    /// Opening post.
    pub content: String,
    /// Pinned to the top.
    #[serde(default)]
    pub is_pinned: bool,
    /// Closed for replies.
    #[serde(default)]
    pub is_locked: bool,
    /// Views.
    #[serde(default)]
    pub view_count: u64,
    /// Replies.
    #[serde(default)]
    pub reply_count: u64,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: String,
    /// Author profile.
    #[serde(default)]
    pub user: Option<User>,
    /// Category.
    #[serde(default)]
    pub category: Option<ForumCategory>,
    /// Tags.
    #[serde(default)]
    pub tags: Vec<ForumTag>,
}

/// Reply within a forum thread.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumReply {
    /// Reply ID.
    pub id: Id,
    /// Owning thread.
    pub thread_id: Id,
    /// Author ID.
    pub user_id: Id,
    /// Body.
    pub content: String,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: String,
    /// Author profile.
    #[serde(default)]
    pub user: Option<User>,
}
