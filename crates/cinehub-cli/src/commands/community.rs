//! Community subcommands: reviews, lists, forum.

use anyhow::{Context, Result};
use cinehub_api::routes::Id;
use cinehub_api::services::{
    ListFilter, ListUpdate, LocalForumApi, LocalListApi, LocalReviewApi, LocalUserApi, NewList,
    NewListItem, NewThread, ReviewFilter, ReviewInput, ThreadQuery, UserReviewQuery,
};
use cinehub_api::types::{ForumThread, List};
use clap::Subcommand;
use tracing::instrument;

use super::account::ItemArgs;
use super::catalog::log_reviews;
use super::{KindArg, log_page, or_dash};
use crate::context::AppContext;

/// `reviews` subcommands.
#[derive(Subcommand)]
pub enum ReviewsSubcommands {
    /// List reviews.
    List {
        /// Reviews of one movie.
        #[arg(long)]
        movie: Option<Id>,
        /// Reviews of one series.
        #[arg(long)]
        serie: Option<Id>,
        /// Reviews by one user.
        #[arg(long)]
        user: Option<Id>,
        /// Page number (1-based).
        #[arg(long)]
        page: Option<u32>,
    },
    /// Show one review.
    Show {
        /// Review ID.
        id: Id,
    },
    /// List your reviews.
    Mine {
        /// Restrict to one kind.
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
        /// Page number (1-based).
        #[arg(long)]
        page: Option<u32>,
    },
    /// Review an item.
    Add(ReviewArgs),
    /// Edit your review of an item.
    Update(ReviewArgs),
    /// Delete your review of an item.
    Delete(ItemArgs),
}

/// Arguments for `reviews add|update`.
#[derive(clap::Args)]
pub struct ReviewArgs {
    #[command(flatten)]
    item: ItemArgs,
    /// Rating from 1 to 5.
    #[arg(long, required = true, value_parser = clap::value_parser!(u8).range(1..=5))]
    rating: u8,
    /// Review text.
    #[arg(long, required = true)]
    content: String,
}

/// `lists` subcommands.
#[derive(Subcommand)]
pub enum ListsSubcommands {
    /// List lists.
    List {
        /// Lists of one user.
        #[arg(long)]
        user: Option<Id>,
        /// Only public lists.
        #[arg(long)]
        public: bool,
        /// Page number (1-based).
        #[arg(long)]
        page: Option<u32>,
    },
    /// Show one list with its items.
    Show {
        /// List ID.
        id: Id,
    },
    /// Create a list.
    Create {
        /// Name.
        #[arg(long, required = true)]
        name: String,
        /// Description.
        #[arg(long)]
        description: Option<String>,
        /// Make the list visible to others.
        #[arg(long)]
        public: bool,
    },
    /// Rename or redescribe a list.
    Update {
        /// List ID.
        id: Id,
        /// New name.
        #[arg(long)]
        name: Option<String>,
        /// New description.
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a list.
    Delete {
        /// List ID.
        id: Id,
    },
    /// Add a movie or series to a list.
    AddItem {
        /// List ID.
        id: Id,
        /// Movie ID.
        #[arg(long, conflicts_with = "serie", required_unless_present = "serie")]
        movie: Option<Id>,
        /// Series ID.
        #[arg(long)]
        serie: Option<Id>,
    },
    /// Remove an item from a list.
    RemoveItem {
        /// List ID.
        id: Id,
        /// Item ID.
        item_id: Id,
    },
}

/// `forum` subcommands.
#[derive(Subcommand)]
pub enum ForumSubcommands {
    /// List threads.
    Threads {
        /// Threads of one category.
        #[arg(long)]
        category: Option<Id>,
        /// Threads carrying a tag slug.
        #[arg(long)]
        tag: Option<String>,
        /// Title search.
        #[arg(long)]
        search: Option<String>,
        /// Page number (1-based).
        #[arg(long)]
        page: Option<u32>,
    },
    /// Show one thread.
    Show {
        /// Thread ID.
        id: Id,
    },
    /// Open a thread.
    Create {
        /// Title.
        #[arg(long, required = true)]
        title: String,
        /// Opening post.
        #[arg(long, required = true)]
        content: String,
        /// Category ID.
        #[arg(long)]
        category: Option<Id>,
    },
    /// Reply to a thread.
    Reply {
        /// Thread ID.
        id: Id,
        /// Reply text.
        #[arg(long, required = true)]
        content: String,
    },
    /// Delete a thread.
    Delete {
        /// Thread ID.
        id: Id,
    },
}

/// Runs a `reviews` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
pub async fn run_reviews(ctx: &AppContext, command: ReviewsSubcommands) -> Result<()> {
    let client = &ctx.client;
    match command {
        ReviewsSubcommands::List {
            movie,
            serie,
            user,
            page,
        } => {
            let filter = ReviewFilter {
                movie_id: movie,
                serie_id: serie,
                user_id: user,
                page,
                per_page: None,
            };
            let reviews = client
                .reviews(filter)
                .await
                .context("failed to list reviews")?;
            log_reviews(&reviews.data);
            log_page(&reviews);
        }
        ReviewsSubcommands::Show { id } => {
            let review = client
                .review(id)
                .await
                .with_context(|| format!("failed to fetch review {id}"))?;
            log_reviews(std::slice::from_ref(&review));
        }
        ReviewsSubcommands::Mine { kind, page } => {
            let query = UserReviewQuery {
                item_type: kind.map(Into::into),
                page,
                per_page: None,
            };
            let reviews = client
                .my_reviews(query)
                .await
                .context("failed to list your reviews")?;
            tracing::info!("ID\tKind\tItem\tRating\tTitle");
            for review in &reviews.data {
                tracing::info!(
                    "{}\t{}\t{}\t{}/5\t{}",
                    review.id,
                    review.item_type,
                    review.item_id,
                    review.rating,
                    or_dash(review.item_title.as_deref()),
                );
            }
            log_page(&reviews);
        }
        ReviewsSubcommands::Add(args) => {
            let input = ReviewInput::new(args.content, args.rating);
            let review = client
                .add_review(args.item.item_id, args.item.kind.into(), &input)
                .await
                .context("failed to add review")?;
            tracing::info!("Review {} published", review.id);
        }
        ReviewsSubcommands::Update(args) => {
            let input = ReviewInput::new(args.content, args.rating);
            client
                .update_my_review(args.item.item_id, args.item.kind.into(), &input)
                .await
                .context("failed to update review")?;
            tracing::info!("Review updated");
        }
        ReviewsSubcommands::Delete(item) => {
            client
                .delete_my_review(item.item_id, item.kind.into())
                .await
                .context("failed to delete review")?;
            tracing::info!("Review deleted");
        }
    }
    Ok(())
}

/// Runs a `lists` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
pub async fn run_lists(ctx: &AppContext, command: ListsSubcommands) -> Result<()> {
    let client = &ctx.client;
    match command {
        ListsSubcommands::List { user, public, page } => {
            let filter = ListFilter {
                user_id: user,
                is_public: public.then_some(true),
                page,
                per_page: None,
            };
            let lists = client.lists(filter).await.context("failed to list lists")?;
            log_lists(&lists.data);
            log_page(&lists);
        }
        ListsSubcommands::Show { id } => {
            let list = client
                .list(id)
                .await
                .with_context(|| format!("failed to fetch list {id}"))?;
            log_lists(std::slice::from_ref(&list));
            tracing::info!("ItemID\tKind\tTitle");
            for item in &list.items {
                let (kind, title) = match (&item.movie, &item.serie) {
                    (Some(movie), _) => ("movie", movie.title.as_str()),
                    (None, Some(serie)) => ("serie", serie.title.as_str()),
                    (None, None) => ("-", "-"),
                };
                tracing::info!("{}\t{}\t{}", item.id, kind, title);
            }
        }
        ListsSubcommands::Create {
            name,
            description,
            public,
        } => {
            let new_list = NewList {
                name,
                description,
                is_public: public,
            };
            let list = client
                .create_list(&new_list)
                .await
                .context("failed to create list")?;
            tracing::info!("List {} created", list.id);
        }
        ListsSubcommands::Update {
            id,
            name,
            description,
        } => {
            let update = ListUpdate {
                name,
                description,
                is_public: None,
            };
            client
                .update_list(id, &update)
                .await
                .with_context(|| format!("failed to update list {id}"))?;
            tracing::info!("List {id} updated");
        }
        ListsSubcommands::Delete { id } => {
            client
                .delete_list(id)
                .await
                .with_context(|| format!("failed to delete list {id}"))?;
            tracing::info!("List {id} deleted");
        }
        ListsSubcommands::AddItem { id, movie, serie } => {
            let item = match (movie, serie) {
                (Some(movie_id), _) => NewListItem::Movie(movie_id),
                (None, Some(serie_id)) => NewListItem::Serie(serie_id),
                (None, None) => anyhow::bail!("either --movie or --serie is required"),
            };
            let added = client
                .add_list_item(id, item)
                .await
                .with_context(|| format!("failed to add item to list {id}"))?;
            tracing::info!("Item {} added to list {id}", added.id);
        }
        ListsSubcommands::RemoveItem { id, item_id } => {
            client
                .remove_list_item(id, item_id)
                .await
                .with_context(|| format!("failed to remove item {item_id} from list {id}"))?;
            tracing::info!("Item {item_id} removed from list {id}");
        }
    }
    Ok(())
}

/// Runs a `forum` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
pub async fn run_forum(ctx: &AppContext, command: ForumSubcommands) -> Result<()> {
    let client = &ctx.client;
    match command {
        ForumSubcommands::Threads {
            category,
            tag,
            search,
            page,
        } => {
            let query = ThreadQuery {
                category_id: category,
                tag,
                search,
                page,
                per_page: None,
            };
            let threads = client
                .threads(&query)
                .await
                .context("failed to list threads")?;
            log_threads(&threads.data);
            log_page(&threads);
        }
        ForumSubcommands::Show { id } => {
            let thread = client
                .thread(id)
                .await
                .with_context(|| format!("failed to fetch thread {id}"))?;
            log_threads(std::slice::from_ref(&thread));
            tracing::info!("{}", thread.content);
        }
        ForumSubcommands::Create {
            title,
            content,
            category,
        } => {
            let new_thread = NewThread {
                title,
                content,
                category_id: category,
                tag_ids: Vec::new(),
            };
            let thread = client
                .create_thread(&new_thread)
                .await
                .context("failed to create thread")?;
            tracing::info!("Thread {} created", thread.id);
        }
        ForumSubcommands::Reply { id, content } => {
            let reply = client
                .reply_to_thread(id, &content)
                .await
                .with_context(|| format!("failed to reply to thread {id}"))?;
            tracing::info!("Reply {} posted", reply.id);
        }
        ForumSubcommands::Delete { id } => {
            client
                .delete_thread(id)
                .await
                .with_context(|| format!("failed to delete thread {id}"))?;
            tracing::info!("Thread {id} deleted");
        }
    }
    Ok(())
}

fn log_lists(lists: &[List]) {
    tracing::info!("ID\tOwner\tPublic\tItems\tName");
    for list in lists {
        tracing::info!(
            "{}\t{}\t{}\t{}\t{}",
            list.id,
            list.user_id,
            if list.is_public { "yes" } else { "no" },
            list.items.len(),
            list.name,
        );
    }
}

fn log_threads(threads: &[ForumThread]) {
    tracing::info!("ID\tReplies\tViews\tFlags\tTitle");
    for thread in threads {
        let flags = match (thread.is_pinned, thread.is_locked) {
            (true, true) => "P L",
            (true, false) => "P",
            (false, true) => "L",
            (false, false) => "-",
        };
        tracing::info!(
            "{}\t{}\t{}\t{}\t{}",
            thread.id,
            thread.reply_count,
            thread.view_count,
            flags,
            thread.title,
        );
    }
}
