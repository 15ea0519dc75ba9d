//! Favorites commands.

use std::io::{self, Write};

use clayhouse_core::{CartStore, DurableStorage, ProductId};

use super::{CliError, write_notice};

/// List favorites in the order they were added.
pub fn list<S: DurableStorage>(store: &CartStore<S>, out: &mut impl Write) -> io::Result<()> {
    if store.favorites().is_empty() {
        return writeln!(out, "No favorites yet");
    }

    for id in store.favorites() {
        match store.catalog().find(*id) {
            Some(product) => writeln!(out, "[{id}] {} {}", product.name, product.price)?,
            None => writeln!(out, "[{id}] {}", store.product_name(*id))?,
        }
    }
    Ok(())
}

/// Toggle `product_id` in favorites.
///
/// Unlike cart commands, ids outside the catalog are accepted: favorites are
/// just ids.
pub fn toggle<S: DurableStorage>(
    store: &mut CartStore<S>,
    product_id: ProductId,
    out: &mut impl Write,
) -> Result<(), CliError> {
    if store.catalog().find(product_id).is_none() {
        tracing::warn!(product_id = %product_id, "Toggling favorite for a product not in the catalog");
    }

    let change = store.toggle_favorite(product_id);
    write_notice(out, &change.notice)?;
    Ok(())
}
