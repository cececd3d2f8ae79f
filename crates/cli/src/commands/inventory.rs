//! Seller inventory commands.

use std::io;

use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use storefront_app::{
    auth::AuthService,
    domain::products::{
        Catalog,
        models::{NewProduct, ProductStockId, StockUpdate},
    },
    session::UserType,
};

use crate::{commands::CommandError, render};

#[derive(Debug, Args)]
pub(crate) struct InventoryCommand {
    #[command(subcommand)]
    command: InventorySubcommand,
}

#[derive(Debug, Subcommand)]
enum InventorySubcommand {
    /// List your products
    List,

    /// Put a new product on sale
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        price: Decimal,

        /// Units available
        #[arg(long, default_value_t = 1)]
        stock: u32,
    },

    /// Change the amount or price of a product
    Stock {
        stock: ProductStockId,

        #[arg(long)]
        quantity: Option<u32>,

        #[arg(long)]
        price: Option<Decimal>,
    },

    /// Withdraw a product from sale
    Remove { stock: ProductStockId },
}

pub(crate) async fn run(
    command: InventoryCommand,
    auth: &AuthService,
    catalog: &Catalog,
    out: &mut dyn io::Write,
) -> Result<(), CommandError> {
    let seller = auth.require_role(UserType::Seller)?;

    match command.command {
        InventorySubcommand::List => {
            let products = catalog.seller_products(seller).await?;

            render::write_products(out, &products)?;
        }
        InventorySubcommand::Add {
            name,
            description,
            price,
            stock,
        } => {
            let stock = catalog
                .add_product(
                    seller,
                    NewProduct {
                        name,
                        description,
                        price,
                        initial_stock: stock,
                    },
                )
                .await?;

            render::write_products(out, &[stock])?;
        }
        InventorySubcommand::Stock {
            stock,
            quantity,
            price,
        } => {
            let stock = catalog
                .update_stock(seller, stock, StockUpdate { quantity, price })
                .await?;

            render::write_products(out, &[stock])?;
        }
        InventorySubcommand::Remove { stock } => {
            catalog.remove_product(seller, stock).await?;

            writeln!(out, "Product {stock} withdrawn")?;
        }
    }

    Ok(())
}
