//! `auth` subcommands.

use anyhow::{Context, Result};
use cinehub_api::services::{LocalAuthApi, SignInData, SignUpData};
use clap::Subcommand;
use tracing::instrument;

use crate::context::AppContext;

/// Account and session subcommands.
#[derive(Subcommand)]
pub enum AuthSubcommands {
    /// Sign in and store the credential.
    Signin(SigninArgs),
    /// Register a new account.
    Signup(SignupArgs),
    /// Forget the stored credential.
    Signout,
    /// Show the signed-in user.
    Whoami,
    /// Activate an account with the emailed token.
    Activate {
        /// Activation token.
        #[arg(long, required = true)]
        token: String,
    },
    /// Request a password reset email.
    ForgotPassword {
        /// Account email address.
        #[arg(long, required = true)]
        email: String,
    },
    /// Set a new password with a reset token.
    ResetPassword {
        /// Reset token.
        #[arg(long, required = true)]
        token: String,
        /// New password.
        #[arg(long, required = true, env = "CINEHUB_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

/// Arguments for `auth signin`.
#[derive(clap::Args)]
pub struct SigninArgs {
    /// Email address or username.
    #[arg(long, required = true)]
    login: String,
    /// Password.
    #[arg(long, required = true, env = "CINEHUB_PASSWORD", hide_env_values = true)]
    password: String,
}

/// Arguments for `auth signup`.
#[derive(clap::Args)]
pub struct SignupArgs {
    /// Email address.
    #[arg(long, required = true)]
    email: String,
    /// Desired username.
    #[arg(long, required = true)]
    username: String,
    /// Password.
    #[arg(long, required = true, env = "CINEHUB_PASSWORD", hide_env_values = true)]
    password: String,
    /// Display name.
    #[arg(long)]
    name: Option<String>,
}

/// Runs an `auth` subcommand.
///
/// # Errors
///
/// Returns an error if the API request or credential storage fails.
#[instrument(skip_all)]
pub async fn run(ctx: &AppContext, command: AuthSubcommands) -> Result<()> {
    match command {
        AuthSubcommands::Signin(args) => {
            let data = SignInData::new(args.login, args.password);
            let user = ctx
                .session
                .sign_in(&ctx.client, &data)
                .await
                .context("sign-in failed")?;
            tracing::info!("Signed in as {} (id {})", user.username, user.id);
        }
        AuthSubcommands::Signup(args) => {
            let data = SignUpData {
                email: args.email,
                password: args.password,
                user_name: args.username,
                name: args.name,
            };
            let response = ctx
                .session
                .sign_up(&ctx.client, &data)
                .await
                .context("sign-up failed")?;
            tracing::info!("{}", response.message);
        }
        AuthSubcommands::Signout => {
            ctx.session
                .sign_out()
                .context("failed to clear stored credential")?;
            tracing::info!("Signed out");
        }
        AuthSubcommands::Whoami => match ctx.session.user() {
            Some(user) => {
                tracing::info!("ID\tUsername\tEmail\t\tName");
                tracing::info!(
                    "{}\t{}\t\t{}\t{}",
                    user.id,
                    user.username,
                    user.email,
                    user.name.as_deref().unwrap_or("-")
                );
            }
            None => tracing::info!("Not signed in"),
        },
        AuthSubcommands::Activate { token } => {
            let response = ctx
                .client
                .activate_account(&token)
                .await
                .context("activation failed")?;
            tracing::info!("{}", response.message);
        }
        AuthSubcommands::ForgotPassword { email } => {
            let response = ctx
                .client
                .forgot_password(&email)
                .await
                .context("password reset request failed")?;
            tracing::info!("{}", response.message);
        }
        AuthSubcommands::ResetPassword { token, password } => {
            let response = ctx
                .client
                .reset_password(&token, &password)
                .await
                .context("password reset failed")?;
            tracing::info!("{}", response.message);
        }
    }
    Ok(())
}
