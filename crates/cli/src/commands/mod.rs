//! Subcommands

use std::{io, sync::Arc};

use clap::Subcommand;
use storefront_app::{
    api::ApiError,
    auth::AuthError,
    context::{AppContext, AppInitError},
    domain::{
        carts::CartError, checkout::CheckoutError, orders::OrderError, products::ProductError,
        profiles::ProfileError,
    },
    session::FileSessionStore,
};
use thiserror::Error;

use crate::{config::CliConfig, render::RenderError};

mod account;
mod cart;
mod checkout;
mod health;
mod inventory;
mod orders;
mod products;
mod profile;

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Check that the backend is reachable
    Health,

    /// Log in and save the session
    Login(account::LoginArgs),

    /// Create an account and log into it
    Register(account::RegisterArgs),

    /// Forget the saved session
    Logout,

    /// Show who is logged in
    Whoami,

    /// List products on sale
    Products,

    /// Manage a seller's products
    Inventory(inventory::InventoryCommand),

    /// Show and change the cart
    Cart(cart::CartCommand),

    /// Place an order for everything in the cart
    Checkout(checkout::CheckoutArgs),

    /// Show past orders
    Orders(orders::OrdersArgs),

    /// Show and edit the logged-in profile
    Profile(profile::ProfileCommand),
}

#[derive(Debug, Error)]
pub(crate) enum CommandError {
    #[error(transparent)]
    Init(#[from] AppInitError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Product(#[from] ProductError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error("health check failed")]
    Health(#[source] ApiError),

    #[error("backend reported status {0}")]
    Unhealthy(String),

    #[error("failed to read input")]
    Input(#[source] io::Error),

    #[error("failed to write output")]
    Output(#[from] io::Error),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl CommandError {
    /// Message for the terminal, without internals.
    pub(crate) fn user_message(&self) -> String {
        match self {
            Self::Auth(error) => error.user_message(),
            Self::Cart(error) => error.user_message(),
            Self::Checkout(error) => error.user_message(),
            Self::Order(error) => error.user_message(),
            Self::Product(error) => error.user_message(),
            Self::Profile(error) => error.user_message(),
            Self::Health(_) => "Backend is unreachable".to_string(),
            Self::Init(_)
            | Self::Unhealthy(_)
            | Self::Input(_)
            | Self::Output(_)
            | Self::Render(_) => {
                self.to_string()
            }
        }
    }
}

pub(crate) async fn run(config: CliConfig, out: &mut dyn io::Write) -> Result<(), CommandError> {
    let session = Arc::new(FileSessionStore::new(config.session.session_file));
    let context = AppContext::new(config.api.api_config(), session)?;

    match config.command {
        Command::Health => health::run(context.health.as_ref(), out).await,
        Command::Login(args) => account::login(&context.auth, args, out).await,
        Command::Register(args) => account::register(&context.auth, args, out).await,
        Command::Logout => account::logout(&context.auth, out),
        Command::Whoami => account::whoami(&context.auth, out),
        Command::Products => products::run(&context.catalog, out).await,
        Command::Inventory(command) => {
            inventory::run(command, &context.auth, &context.catalog, out).await
        }
        Command::Cart(command) => cart::run(command, &context.auth, &context.cart, out).await,
        Command::Checkout(args) => {
            checkout::run(args, &context.auth, &context.checkout, out).await
        }
        Command::Orders(args) => orders::run(args, &context.auth, &context.orders, out).await,
        Command::Profile(command) => profile::run(command, &context, out).await,
    }
}
