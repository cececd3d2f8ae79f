//! Terminal rendering

use std::{io, ops::Range};

use rust_decimal::Decimal;
use storefront_app::{
    domain::{
        carts::models::Cart,
        checkout::models::{DISPLAY_TAX_PERCENT, PriceBreakdown},
        orders::models::Order,
        products::models::ProductStock,
        profiles::models::{Address, Profile},
    },
    money::format_amount,
    session::SessionIdentity,
};
use tabled::{
    Table,
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum RenderError {
    #[error("failed to write output")]
    Io(#[from] io::Error),
}

fn table(builder: Builder, right_aligned: Columns<Range<usize>>) -> Table {
    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(right_aligned, Alignment::right());

    table
}

pub(crate) fn write_cart(out: &mut dyn io::Write, cart: Option<&Cart>) -> Result<(), RenderError> {
    let Some(cart) = cart.filter(|cart| !cart.is_empty()) else {
        writeln!(out, "Your cart is empty")?;

        return Ok(());
    };

    let mut builder = Builder::default();

    builder.push_record(["Item", "Product", "Seller", "Qty", "Unit Price", "Line Total"]);

    for item in &cart.cart_items {
        builder.push_record([
            item.cart_item_id.to_string(),
            item.name().to_string(),
            item.product_stock.seller_name.clone().unwrap_or_default(),
            item.quantity.to_string(),
            format_amount(item.price_at_time_of_add),
            format_amount(item.line_total()),
        ]);
    }

    writeln!(out, "{}", table(builder, Columns::new(3..6)))?;
    writeln!(
        out,
        "Items: {}  Total: {}",
        cart.total_items,
        format_amount(cart.total_amount)
    )?;

    Ok(())
}

pub(crate) fn write_products(
    out: &mut dyn io::Write,
    products: &[ProductStock],
) -> Result<(), RenderError> {
    if products.is_empty() {
        writeln!(out, "No products available")?;

        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["Stock", "Product", "Seller", "Price", "Available"]);

    for stock in products {
        let available = if stock.is_in_stock() {
            stock.amount.to_string()
        } else {
            "Out of stock".to_string()
        };

        builder.push_record([
            stock.product_stock_id.to_string(),
            stock.name().to_string(),
            stock.seller_name.clone().unwrap_or_default(),
            format_amount(stock.price().unwrap_or_default()),
            available,
        ]);
    }

    writeln!(out, "{}", table(builder, Columns::new(3..5)))?;

    Ok(())
}

pub(crate) fn write_breakdown(
    out: &mut dyn io::Write,
    breakdown: &PriceBreakdown,
) -> Result<(), RenderError> {
    writeln!(out, "Subtotal:        {:>12}", format_amount(breakdown.subtotal))?;
    writeln!(
        out,
        "Tax ({DISPLAY_TAX_PERCENT}% incl.):  {:>12}",
        format_amount(breakdown.tax)
    )?;
    writeln!(out, "Total:           {:>12}", format_amount(breakdown.total))?;

    Ok(())
}

/// Order confirmation: header, frozen line items, totals.
pub(crate) fn write_order(out: &mut dyn io::Write, order: &Order) -> Result<(), RenderError> {
    writeln!(out, "Order #{}", order.order_id)?;

    if let Some(date) = order.order_date {
        writeln!(out, "Placed:   {}", date.strftime("%Y-%m-%d %H:%M"))?;
    }

    writeln!(out, "Status:   {}", order.status)?;

    if let Some(method) = &order.payment_method {
        let payment_status = order.payment_status.as_deref().unwrap_or("UNKNOWN");

        writeln!(out, "Payment:  {method} ({payment_status})")?;
    }

    if let Some(address) = &order.shipping_address {
        writeln!(out, "Ship to:  {address}")?;
    }

    if let Some(notes) = &order.order_notes {
        writeln!(out, "Notes:    {notes}")?;
    }

    let mut builder = Builder::default();

    builder.push_record(["Product", "Qty", "Price", "Line Total"]);

    for item in &order.order_items {
        builder.push_record([
            item.product_name.clone().unwrap_or_else(|| "Product".to_string()),
            item.quantity.to_string(),
            format_amount(item.price_at_time_of_order),
            format_amount(item.total_price),
        ]);
    }

    writeln!(out, "{}", table(builder, Columns::new(1..4)))?;

    write_breakdown(out, &PriceBreakdown::from_total(order.total_amount))
}

pub(crate) fn write_orders(out: &mut dyn io::Write, orders: &[Order]) -> Result<(), RenderError> {
    if orders.is_empty() {
        writeln!(out, "No orders yet")?;

        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["Order", "Date", "Items", "Total", "Status"]);

    for order in orders {
        builder.push_record([
            order.order_id.to_string(),
            order
                .order_date
                .map(|date| date.strftime("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            order.item_count().to_string(),
            format_amount(order.total_amount),
            order.status.to_string(),
        ]);
    }

    writeln!(out, "{}", table(builder, Columns::new(2..4)))?;

    Ok(())
}

pub(crate) fn write_profile(out: &mut dyn io::Write, profile: &Profile) -> Result<(), RenderError> {
    writeln!(out, "Name:     {}", profile.display_name())?;
    writeln!(out, "Email:    {}", profile.email)?;

    if let Some(phone) = &profile.phone_number {
        writeln!(out, "Phone:    {phone}")?;
    }

    if let Some(date_of_birth) = &profile.date_of_birth {
        writeln!(out, "Born:     {date_of_birth}")?;
    }

    if let Some(address) = profile
        .address
        .as_ref()
        .map(Address::one_line)
        .filter(|address| !address.is_empty())
    {
        writeln!(out, "Address:  {address}")?;
    }

    if !profile.product_stock_ids.is_empty() {
        writeln!(out, "Products: {}", profile.product_stock_ids.len())?;
    }

    if let Some(rent) = profile.total_rent.filter(|rent| *rent > Decimal::ZERO) {
        writeln!(out, "Rent:     {}", format_amount(rent))?;
    }

    Ok(())
}

pub(crate) fn write_identity(
    out: &mut dyn io::Write,
    identity: Option<&SessionIdentity>,
) -> Result<(), RenderError> {
    match identity {
        Some(identity) => writeln!(
            out,
            "{} <{}> ({} #{})",
            identity.display_name, identity.email, identity.user_type, identity.user_id
        )?,
        None => writeln!(out, "Not logged in")?,
    }

    Ok(())
}
