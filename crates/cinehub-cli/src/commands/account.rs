//! Subcommands scoped to the signed-in user: profile, favorites, watchlist.

use anyhow::{Context, Result};
use cinehub_api::routes::Id;
use cinehub_api::services::{FavoriteQuery, LocalUserApi, ProfileUpdate};
use cinehub_api::types::{Favorite, ItemKind};
use clap::Subcommand;
use tracing::instrument;

use super::{KindArg, log_page, or_dash};
use crate::context::AppContext;

/// `profile` subcommands.
#[derive(Subcommand)]
pub enum ProfileSubcommands {
    /// Show a profile (default: your own).
    Show {
        /// User ID.
        id: Option<Id>,
    },
    /// Edit your profile.
    Update(ProfileUpdateArgs),
}

/// Arguments for `profile update`.
#[derive(clap::Args)]
pub struct ProfileUpdateArgs {
    /// New display name.
    #[arg(long)]
    name: Option<String>,
    /// New username.
    #[arg(long)]
    username: Option<String>,
    /// New avatar URL.
    #[arg(long)]
    avatar: Option<String>,
    /// New biography.
    #[arg(long)]
    bio: Option<String>,
}

/// `favorites` subcommands.
#[derive(Subcommand)]
pub enum FavoritesSubcommands {
    /// List your favorites.
    List {
        /// Restrict to one kind.
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
        /// Title search.
        #[arg(long)]
        search: Option<String>,
        /// Page number (1-based).
        #[arg(long)]
        page: Option<u32>,
    },
    /// Bookmark an item.
    Add(ItemArgs),
    /// Remove a bookmark.
    Remove(ItemArgs),
}

/// `watchlist` subcommands.
#[derive(Subcommand)]
pub enum WatchlistSubcommands {
    /// List your watchlist.
    List,
    /// Add an item to your watchlist.
    Add(ItemArgs),
    /// Remove an item from your watchlist.
    Remove {
        /// Item ID.
        item_id: Id,
    },
}

/// A catalog item reference.
#[derive(clap::Args)]
pub struct ItemArgs {
    /// Item kind.
    #[arg(value_enum)]
    pub kind: KindArg,
    /// Item ID.
    pub item_id: Id,
}

/// Runs a `profile` subcommand.
///
/// # Errors
///
/// Returns an error if not signed in or the API request fails.
#[instrument(skip_all)]
pub async fn run_profile(ctx: &AppContext, command: ProfileSubcommands) -> Result<()> {
    match command {
        ProfileSubcommands::Show { id } => {
            let id = match id {
                Some(id) => id,
                None => ctx.require_user()?.id,
            };
            let user = ctx
                .client
                .profile(id)
                .await
                .with_context(|| format!("failed to fetch profile {id}"))?;
            tracing::info!("ID:       {}", user.id);
            tracing::info!("Username: {}", user.username);
            tracing::info!("Name:     {}", user.name.as_deref().unwrap_or("-"));
            tracing::info!("Bio:      {}", user.bio.as_deref().unwrap_or("-"));
        }
        ProfileSubcommands::Update(args) => {
            let me = ctx.require_user()?;
            let update = ProfileUpdate {
                name: args.name,
                user_name: args.username,
                avatar: args.avatar,
                bio: args.bio,
            };
            let user = ctx
                .client
                .update_profile(me.id, &update)
                .await
                .context("failed to update profile")?;
            ctx.session
                .update_user(user)
                .context("failed to cache updated profile")?;
            tracing::info!("Profile updated");
        }
    }
    Ok(())
}

/// Runs a `favorites` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
pub async fn run_favorites(ctx: &AppContext, command: FavoritesSubcommands) -> Result<()> {
    match command {
        FavoritesSubcommands::List { kind, search, page } => {
            let query = FavoriteQuery {
                kind: kind.map(Into::into),
                search,
                page,
                per_page: None,
            };
            let favorites = ctx
                .client
                .favorites(&query)
                .await
                .context("failed to list favorites")?;
            log_favorites(&favorites.data);
            log_page(&favorites);
        }
        FavoritesSubcommands::Add(item) => {
            let kind: ItemKind = item.kind.into();
            ctx.client
                .add_favorite(item.item_id, kind)
                .await
                .context("failed to add favorite")?;
            tracing::info!("Added {kind} {} to favorites", item.item_id);
        }
        FavoritesSubcommands::Remove(item) => {
            let kind: ItemKind = item.kind.into();
            ctx.client
                .remove_favorite(item.item_id, kind)
                .await
                .context("failed to remove favorite")?;
            tracing::info!("Removed {kind} {} from favorites", item.item_id);
        }
    }
    Ok(())
}

/// Runs a `watchlist` subcommand.
///
/// # Errors
///
/// Returns an error if not signed in or the API request fails.
#[instrument(skip_all)]
pub async fn run_watchlist(ctx: &AppContext, command: WatchlistSubcommands) -> Result<()> {
    let me = ctx.require_user()?;
    match command {
        WatchlistSubcommands::List => {
            let items = ctx
                .client
                .watchlist(me.id)
                .await
                .context("failed to fetch watchlist")?;
            log_favorites(&items);
        }
        WatchlistSubcommands::Add(item) => {
            ctx.client
                .add_to_watchlist(me.id, item.item_id, item.kind.into())
                .await
                .context("failed to add to watchlist")?;
            tracing::info!("Added {} to watchlist", item.item_id);
        }
        WatchlistSubcommands::Remove { item_id } => {
            ctx.client
                .remove_from_watchlist(me.id, item_id)
                .await
                .context("failed to remove from watchlist")?;
            tracing::info!("Removed {item_id} from watchlist");
        }
    }
    Ok(())
}

fn log_favorites(items: &[Favorite]) {
    tracing::info!("ID\tKind\tItem\tTitle");
    for item in items {
        tracing::info!(
            "{}\t{}\t{}\t{}",
            item.id,
            item.kind,
            item.item_id,
            or_dash(item.title.as_deref()),
        );
    }
}
