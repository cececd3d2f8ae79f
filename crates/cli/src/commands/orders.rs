//! Order history command.

use std::io;

use clap::Args;
use storefront_app::{
    auth::AuthService,
    domain::orders::{OrderHistory, models::OrderId},
};

use crate::{commands::CommandError, render};

#[derive(Debug, Args)]
pub(crate) struct OrdersArgs {
    /// Show a single order in detail
    order: Option<OrderId>,
}

pub(crate) async fn run(
    args: OrdersArgs,
    auth: &AuthService,
    history: &OrderHistory,
    out: &mut dyn io::Write,
) -> Result<(), CommandError> {
    let customer = auth.require_customer()?;

    match args.order {
        Some(order) => {
            let order = history.get(order).await?;

            render::write_order(out, &order)?;
        }
        None => {
            let orders = history.load(customer).await?;

            render::write_orders(out, &orders)?;
        }
    }

    Ok(())
}
