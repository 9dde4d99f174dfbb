use clap::{Parser, Subcommand};
use jiff::Timestamp;
use storefront::session::View;
use storefront_app::{config::ClientConfig, context::AppContext};

mod account;
mod auth;
mod cart;
mod products;
mod render;

#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront client", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) config: ClientConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Log in and remember the session
    Login(auth::LoginArgs),

    /// Log out and forget the session
    Logout,

    /// Create an account
    Register(auth::RegisterArgs),

    /// List products, optionally filtered
    Products(products::ProductsArgs),

    /// List product categories
    Categories,

    /// Show and edit the cart
    Cart(cart::CartCommand),

    /// Profile, invoices and account deletion
    Account(account::AccountCommand),

    /// List registered users
    Users,
}

impl Cli {
    /// Parse arguments, reading `.env` first when present.
    pub(crate) fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    pub(crate) async fn run(self) -> Result<(), String> {
        let ctx = AppContext::from_config(&self.config)
            .map_err(|error| format!("failed to start: {error}"))?;

        let view = ctx.session.restore(Timestamp::now());

        if self.command.needs_session() {
            require_login(view)?;
        }

        match self.command {
            Commands::Login(args) => auth::login(ctx, args).await,
            Commands::Register(args) => auth::register(ctx, args).await,
            Commands::Logout => auth::logout(ctx).await,
            Commands::Products(args) => products::list(ctx, args).await,
            Commands::Categories => products::categories(ctx).await,
            Commands::Cart(command) => cart::run(ctx, command).await,
            Commands::Account(command) => account::run(ctx, command).await,
            Commands::Users => account::users(ctx).await,
        }
    }
}

impl Commands {
    /// Everything past the login and registration forms needs a session.
    fn needs_session(&self) -> bool {
        !matches!(self, Self::Login(_) | Self::Register(_))
    }
}

fn require_login(view: View) -> Result<(), String> {
    match view {
        View::Storefront => Ok(()),
        View::Unauthenticated => Err("not logged in; run `storefront login` first".to_string()),
    }
}
