//! cinehub - command-line client for the cinehub media catalog.

/// Subcommand arguments and runners.
mod commands;
/// Application configuration (TOML).
mod config;
/// Client and session wiring.
mod context;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;

use crate::commands::account::{FavoritesSubcommands, ProfileSubcommands, WatchlistSubcommands};
use crate::commands::auth::AuthSubcommands;
use crate::commands::catalog::{
    EpisodesSubcommands, GenresSubcommands, MoviesSubcommands, People, PeopleSubcommands,
    SeasonsSubcommands, SeriesSubcommands,
};
use crate::commands::community::{ForumSubcommands, ListsSubcommands, ReviewsSubcommands};
use crate::commands::{account, auth, catalog, community};
use crate::config::AppConfig;
use crate::context::AppContext;

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config/data directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Override the API base URL.
    #[arg(long, global = true, env = "CINEHUB_API_URL")]
    api_url: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Sign in, sign up, and manage the stored credential.
    Auth {
        /// Auth subcommand to run.
        #[command(subcommand)]
        command: AuthSubcommands,
    },
    /// Browse movies.
    Movies {
        /// Movies subcommand to run.
        #[command(subcommand)]
        command: MoviesSubcommands,
    },
    /// Browse series.
    Series {
        /// Series subcommand to run.
        #[command(subcommand)]
        command: SeriesSubcommands,
    },
    /// Browse seasons.
    Seasons {
        /// Seasons subcommand to run.
        #[command(subcommand)]
        command: SeasonsSubcommands,
    },
    /// Browse episodes.
    Episodes {
        /// Episodes subcommand to run.
        #[command(subcommand)]
        command: EpisodesSubcommands,
    },
    /// Browse actors.
    Actors {
        /// Actors subcommand to run.
        #[command(subcommand)]
        command: PeopleSubcommands,
    },
    /// Browse crew members.
    Crew {
        /// Crew subcommand to run.
        #[command(subcommand)]
        command: PeopleSubcommands,
    },
    /// Browse genres.
    Genres {
        /// Genres subcommand to run.
        #[command(subcommand)]
        command: GenresSubcommands,
    },
    /// Latest movies and series.
    Home,
    /// Manage your favorites.
    Favorites {
        /// Favorites subcommand to run.
        #[command(subcommand)]
        command: FavoritesSubcommands,
    },
    /// Manage your watchlist.
    Watchlist {
        /// Watchlist subcommand to run.
        #[command(subcommand)]
        command: WatchlistSubcommands,
    },
    /// Show or edit profiles.
    Profile {
        /// Profile subcommand to run.
        #[command(subcommand)]
        command: ProfileSubcommands,
    },
    /// Read and write reviews.
    Reviews {
        /// Reviews subcommand to run.
        #[command(subcommand)]
        command: ReviewsSubcommands,
    },
    /// Manage curated lists.
    Lists {
        /// Lists subcommand to run.
        #[command(subcommand)]
        command: ListsSubcommands,
    },
    /// Read and post in the forum.
    Forum {
        /// Forum subcommand to run.
        #[command(subcommand)]
        command: ForumSubcommands,
    },
    /// Local configuration.
    Config {
        /// Config subcommand to run.
        #[command(subcommand)]
        command: ConfigSubcommands,
    },
}

/// Available config subcommands.
#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Write a config file with default settings.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
    /// Print the effective settings.
    Show,
}

/// Runs a `config` subcommand.
///
/// # Errors
///
/// Returns an error if the config path cannot be resolved or the file
/// cannot be read or written.
#[instrument(skip_all)]
fn run_config(
    command: &ConfigSubcommands,
    dir: Option<&PathBuf>,
    api_url: Option<&str>,
) -> Result<()> {
    let config_path = AppConfig::path(dir).context("failed to resolve config path")?;
    match command {
        ConfigSubcommands::Init { force } => {
            if config_path.exists() && !force {
                anyhow::bail!(
                    "{} already exists, pass --force to overwrite",
                    config_path.display()
                );
            }
            AppConfig::default()
                .save(&config_path)
                .context("failed to write config")?;
            tracing::info!("Wrote {}", config_path.display());
        }
        ConfigSubcommands::Show => {
            let config = AppConfig::load(&config_path).context("failed to load config")?;
            let base_url = config.api.resolve_base_url(api_url)?;
            tracing::info!("Config:   {}", config_path.display());
            tracing::info!("Base URL: {base_url}");
            tracing::info!("Timeout:  {}s", config.api.timeout_secs);
        }
    }
    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    let cli = Cli::parse();
    let dir = cli.dir.as_ref();
    let api_url = cli.api_url.as_deref();

    if let Commands::Config { command } = &cli.command {
        return run_config(command, dir, api_url);
    }

    let ctx = AppContext::load(dir, api_url)?;
    match cli.command {
        Commands::Auth { command } => auth::run(&ctx, command).await,
        Commands::Movies { command } => catalog::run_movies(&ctx, command).await,
        Commands::Series { command } => catalog::run_series(&ctx, command).await,
        Commands::Seasons { command } => catalog::run_seasons(&ctx, command).await,
        Commands::Episodes { command } => catalog::run_episodes(&ctx, command).await,
        Commands::Actors { command } => catalog::run_people(&ctx, People::Actors, command).await,
        Commands::Crew { command } => catalog::run_people(&ctx, People::Crew, command).await,
        Commands::Genres { command } => catalog::run_genres(&ctx, command).await,
        Commands::Home => catalog::run_home(&ctx).await,
        Commands::Favorites { command } => account::run_favorites(&ctx, command).await,
        Commands::Watchlist { command } => account::run_watchlist(&ctx, command).await,
        Commands::Profile { command } => account::run_profile(&ctx, command).await,
        Commands::Reviews { command } => community::run_reviews(&ctx, command).await,
        Commands::Lists { command } => community::run_lists(&ctx, command).await,
        Commands::Forum { command } => community::run_forum(&ctx, command).await,
        Commands::Config { .. } => Ok(()),
    }
}
