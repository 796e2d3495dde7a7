//! Catalog subcommands: movies, series, seasons, episodes, people, genres.

use anyhow::{Context, Result};
use cinehub_api::routes::Id;
use cinehub_api::services::{
    LocalActorApi, LocalCrewApi, LocalEpisodeApi, LocalGenreApi, LocalMovieApi, LocalSeasonApi,
    LocalSerieApi, Pagination,
};
use cinehub_api::types::{Episode, Movie, Person, Review, Season, Serie};
use clap::Subcommand;
use tracing::instrument;

use super::{BrowseArgs, SearchArgs, log_page, or_dash};
use crate::context::AppContext;

/// `movies` subcommands.
#[derive(Subcommand)]
pub enum MoviesSubcommands {
    /// List movies.
    List(BrowseArgs),
    /// Show one movie with its reviews.
    Show {
        /// Movie ID.
        id: Id,
    },
    /// Search movies by title.
    Search(SearchArgs),
    /// Show the latest releases.
    Latest,
    /// Show movies related to one movie.
    Related(RelatedArgs),
    /// Count all movies.
    Count,
}

/// `series` subcommands.
#[derive(Subcommand)]
pub enum SeriesSubcommands {
    /// List series.
    List(BrowseArgs),
    /// Show one series with its reviews.
    Show {
        /// Series ID.
        id: Id,
    },
    /// Search series by title.
    Search(SearchArgs),
    /// Show the latest series.
    Latest,
    /// Show series related to one series.
    Related(RelatedArgs),
    /// List the seasons of a series.
    Seasons {
        /// Series ID.
        id: Id,
    },
}

/// `seasons` subcommands.
#[derive(Subcommand)]
pub enum SeasonsSubcommands {
    /// List seasons.
    List(BrowseArgs),
    /// Show one season.
    Show {
        /// Season ID.
        id: Id,
    },
    /// Search seasons by title.
    Search(SearchArgs),
    /// List the episodes of a season.
    Episodes {
        /// Season ID.
        id: Id,
    },
}

/// `episodes` subcommands.
#[derive(Subcommand)]
pub enum EpisodesSubcommands {
    /// List episodes.
    List(BrowseArgs),
    /// Show one episode.
    Show {
        /// Episode ID.
        id: Id,
    },
    /// Search episodes by title.
    Search(SearchArgs),
}

/// `actors` and `crew` subcommands.
#[derive(Subcommand)]
pub enum PeopleSubcommands {
    /// List people.
    List(BrowseArgs),
    /// Show one person.
    Show {
        /// Person ID.
        id: Id,
    },
    /// Search people by full name.
    Search(SearchArgs),
}

/// `genres` subcommands.
#[derive(Subcommand)]
pub enum GenresSubcommands {
    /// List all genres.
    List,
    /// Show one genre.
    Show {
        /// Genre ID.
        id: Id,
    },
}

/// Arguments for `related` subcommands.
#[derive(clap::Args)]
pub struct RelatedArgs {
    /// Item ID.
    id: Id,
    /// Page number (1-based).
    #[arg(long, default_value_t = 1)]
    page: u32,
    /// Page size.
    #[arg(long, default_value_t = 6)]
    per_page: u32,
}

impl RelatedArgs {
    const fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

/// Which people resource a `PeopleSubcommands` targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum People {
    /// `actors`.
    Actors,
    /// `crew`.
    Crew,
}

/// Runs a `movies` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
pub async fn run_movies(ctx: &AppContext, command: MoviesSubcommands) -> Result<()> {
    let client = &ctx.client;
    match command {
        MoviesSubcommands::List(args) => {
            let page = client
                .movies(&args.to_query())
                .await
                .context("failed to list movies")?;
            log_movies(&page.data);
            log_page(&page);
        }
        MoviesSubcommands::Show { id } => {
            let movie = client
                .movie(id)
                .await
                .with_context(|| format!("failed to fetch movie {id}"))?;
            log_movies(std::slice::from_ref(&movie));
            tracing::info!("{}", movie.description);
            log_reviews(&movie.reviews);
        }
        MoviesSubcommands::Search(args) => {
            let page = client
                .search_movies(&args.to_query())
                .await
                .context("movie search failed")?;
            log_movies(&page.data);
            log_page(&page);
        }
        MoviesSubcommands::Latest => {
            let movies = client
                .latest_movies()
                .await
                .context("failed to fetch latest movies")?;
            log_movies(&movies);
        }
        MoviesSubcommands::Related(args) => {
            let page = client
                .related_movies(args.id, args.pagination())
                .await
                .context("failed to fetch related movies")?;
            log_movies(&page.data);
            log_page(&page);
        }
        MoviesSubcommands::Count => {
            let count = client
                .movie_count()
                .await
                .context("failed to count movies")?;
            tracing::info!("Total: {} movies", count.count);
        }
    }
    Ok(())
}

/// Runs a `series` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
pub async fn run_series(ctx: &AppContext, command: SeriesSubcommands) -> Result<()> {
    let client = &ctx.client;
    match command {
        SeriesSubcommands::List(args) => {
            let page = client
                .series_list(&args.to_query())
                .await
                .context("failed to list series")?;
            log_series(&page.data);
            log_page(&page);
        }
        SeriesSubcommands::Show { id } => {
            let serie = client
                .serie(id)
                .await
                .with_context(|| format!("failed to fetch series {id}"))?;
            log_series(std::slice::from_ref(&serie));
            tracing::info!("{}", serie.description);
            log_reviews(&serie.reviews);
        }
        SeriesSubcommands::Search(args) => {
            let page = client
                .search_series(&args.to_query())
                .await
                .context("series search failed")?;
            log_series(&page.data);
            log_page(&page);
        }
        SeriesSubcommands::Latest => {
            let series = client
                .latest_series()
                .await
                .context("failed to fetch latest series")?;
            log_series(&series);
        }
        SeriesSubcommands::Related(args) => {
            let page = client
                .related_series(args.id, args.pagination())
                .await
                .context("failed to fetch related series")?;
            log_series(&page.data);
            log_page(&page);
        }
        SeriesSubcommands::Seasons { id } => {
            let seasons = client
                .serie_seasons(id)
                .await
                .with_context(|| format!("failed to fetch seasons of series {id}"))?;
            log_seasons(&seasons);
        }
    }
    Ok(())
}

/// Runs a `seasons` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
pub async fn run_seasons(ctx: &AppContext, command: SeasonsSubcommands) -> Result<()> {
    let client = &ctx.client;
    match command {
        SeasonsSubcommands::List(args) => {
            let page = client
                .seasons(&args.to_query())
                .await
                .context("failed to list seasons")?;
            log_seasons(&page.data);
            log_page(&page);
        }
        SeasonsSubcommands::Show { id } => {
            let season = client
                .season(id)
                .await
                .with_context(|| format!("failed to fetch season {id}"))?;
            log_seasons(std::slice::from_ref(&season));
            log_reviews(&season.reviews);
        }
        SeasonsSubcommands::Search(args) => {
            let page = client
                .search_seasons(&args.to_query())
                .await
                .context("season search failed")?;
            log_seasons(&page.data);
            log_page(&page);
        }
        SeasonsSubcommands::Episodes { id } => {
            let episodes = client
                .season_episodes(id)
                .await
                .with_context(|| format!("failed to fetch episodes of season {id}"))?;
            log_episodes(&episodes);
        }
    }
    Ok(())
}

/// Runs an `episodes` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
pub async fn run_episodes(ctx: &AppContext, command: EpisodesSubcommands) -> Result<()> {
    let client = &ctx.client;
    match command {
        EpisodesSubcommands::List(args) => {
            let page = client
                .episodes(&args.to_query())
                .await
                .context("failed to list episodes")?;
            log_episodes(&page.data);
            log_page(&page);
        }
        EpisodesSubcommands::Show { id } => {
            let episode = client
                .episode(id)
                .await
                .with_context(|| format!("failed to fetch episode {id}"))?;
            log_episodes(std::slice::from_ref(&episode));
            log_reviews(&episode.reviews);
        }
        EpisodesSubcommands::Search(args) => {
            let page = client
                .search_episodes(&args.to_query())
                .await
                .context("episode search failed")?;
            log_episodes(&page.data);
            log_page(&page);
        }
    }
    Ok(())
}

/// Runs an `actors` or `crew` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
pub async fn run_people(
    ctx: &AppContext,
    people: People,
    command: PeopleSubcommands,
) -> Result<()> {
    let client = &ctx.client;
    match command {
        PeopleSubcommands::List(args) => {
            let query = args.to_query();
            let page = match people {
                People::Actors => client.actors(&query).await,
                People::Crew => client.crew_members(&query).await,
            }
            .context("failed to list people")?;
            log_people(&page.data);
            log_page(&page);
        }
        PeopleSubcommands::Show { id } => {
            let person = match people {
                People::Actors => client.actor(id).await,
                People::Crew => client.crew(id).await,
            }
            .with_context(|| format!("failed to fetch person {id}"))?;
            log_people(std::slice::from_ref(&person));
            if let Some(description) = &person.description {
                tracing::info!("{description}");
            }
            log_reviews(&person.reviews);
        }
        PeopleSubcommands::Search(args) => {
            let query = args.to_query();
            let page = match people {
                People::Actors => client.search_actors(&query).await,
                People::Crew => client.search_crew(&query).await,
            }
            .context("people search failed")?;
            log_people(&page.data);
            log_page(&page);
        }
    }
    Ok(())
}

/// Runs a `genres` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
pub async fn run_genres(ctx: &AppContext, command: GenresSubcommands) -> Result<()> {
    let genres = match command {
        GenresSubcommands::List => ctx
            .client
            .genres()
            .await
            .context("failed to list genres")?,
        GenresSubcommands::Show { id } => vec![
            ctx.client
                .genre(id)
                .await
                .with_context(|| format!("failed to fetch genre {id}"))?,
        ],
    };
    tracing::info!("ID\tName\t\tSlug");
    for genre in &genres {
        tracing::info!(
            "{}\t{}\t\t{}",
            genre.id,
            genre.name,
            genre.slug.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

/// Runs the `home` subcommand: latest movies and series, fetched concurrently.
///
/// # Errors
///
/// Returns an error if either request fails.
#[instrument(skip_all)]
pub async fn run_home(ctx: &AppContext) -> Result<()> {
    let (movies, series) = tokio::try_join!(ctx.client.latest_movies(), ctx.client.latest_series())
        .context("failed to fetch home feed")?;
    tracing::info!("Latest movies:");
    log_movies(&movies);
    tracing::info!("Latest series:");
    log_series(&series);
    Ok(())
}

fn log_movies(movies: &[Movie]) {
    tracing::info!("ID\tIMDb\tMin\tAired\t\tTitle");
    for movie in movies {
        tracing::info!(
            "{}\t{}\t{}\t{}\t{}",
            movie.id,
            or_dash(movie.rating_imdb),
            or_dash(movie.duration),
            aired(movie.date_aired.as_deref()),
            movie.title,
        );
    }
}

fn log_series(series: &[Serie]) {
    tracing::info!("ID\tIMDb\tAired\t\tTitle");
    for serie in series {
        tracing::info!(
            "{}\t{}\t{}\t{}",
            serie.id,
            or_dash(serie.rating_imdb),
            aired(serie.date_aired.as_deref()),
            serie.title,
        );
    }
}

fn log_seasons(seasons: &[Season]) {
    tracing::info!("ID\tSerie\tIMDb\tTitle");
    for season in seasons {
        tracing::info!(
            "{}\t{}\t{}\t{}",
            season.id,
            season.serie_id,
            or_dash(season.rating_imdb),
            season.title,
        );
    }
}

fn log_episodes(episodes: &[Episode]) {
    tracing::info!("ID\tSeason\tMin\tAired\t\tTitle");
    for episode in episodes {
        tracing::info!(
            "{}\t{}\t{}\t{}\t{}",
            episode.id,
            episode.season_id,
            or_dash(episode.duration),
            aired(episode.date_aired.as_deref()),
            episode.title,
        );
    }
}

fn log_people(people: &[Person]) {
    tracing::info!("ID\tRating\tName");
    for person in people {
        tracing::info!(
            "{}\t{}\t{}",
            person.id,
            or_dash(person.ratings.map(|r| r.average_rating)),
            person.fullname,
        );
    }
}

pub(super) fn log_reviews(reviews: &[Review]) {
    if reviews.is_empty() {
        return;
    }
    tracing::info!("Reviews ({}):", reviews.len());
    for review in reviews {
        let author = review
            .user
            .as_ref()
            .map_or("(unknown)", |u| u.user_name.as_str());
        tracing::info!("  [{}] {}/5 by {}: {}", review.id, review.rating, author, review.content);
    }
}

/// Date part of an ISO 8601 timestamp.
fn aired(date: Option<&str>) -> &str {
    date.and_then(|d| d.get(..10)).unwrap_or("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aired_takes_date_part() {
        // Arrange & Act & Assert
        assert_eq!(aired(Some("1995-12-15T00:00:00.000Z")), "1995-12-15");
        assert_eq!(aired(Some("1995")), "-");
        assert_eq!(aired(None), "-");
    }
}
