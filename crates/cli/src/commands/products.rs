use std::io;

use storefront_app::domain::products::Catalog;

use crate::{commands::CommandError, render};

pub(crate) async fn run(catalog: &Catalog, out: &mut dyn io::Write) -> Result<(), CommandError> {
    let products = catalog.load().await?;

    render::write_products(out, &products)?;

    Ok(())
}
