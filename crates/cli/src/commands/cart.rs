//! Cart commands.

use std::io::{self, Write};

use clayhouse_core::{CartChange, CartStore, DurableStorage, ProductId};

use super::{CliError, find_product, write_notice};

/// Print every line with its total, then the subtotal.
pub fn show<S: DurableStorage>(store: &CartStore<S>, out: &mut impl Write) -> io::Result<()> {
    if store.cart().is_empty() {
        return writeln!(out, "Your cart is empty");
    }

    let count = store.item_count();
    writeln!(
        out,
        "Cart ({count} {})",
        if count == 1 { "item" } else { "items" }
    )?;

    for line in store.cart() {
        let name = store.product_name(line.product_id);
        match store.line_total(line) {
            Some(total) => writeln!(out, "  {} × {name}  {total}", line.quantity)?,
            None => writeln!(out, "  {} × {name}  (no longer available)", line.quantity)?,
        }
    }

    writeln!(out, "Subtotal: {}", store.subtotal())
}

/// Add one unit of `product_id`.
pub fn add<S: DurableStorage>(
    store: &mut CartStore<S>,
    product_id: ProductId,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let product = find_product(store.catalog(), product_id)?;
    let change = store.add_to_cart(&product);
    report(store, &change, out)
}

/// Add one unit of `product_id` and open the cart.
pub fn buy<S: DurableStorage>(
    store: &mut CartStore<S>,
    product_id: ProductId,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let product = find_product(store.catalog(), product_id)?;
    let change = store.buy_now(&product);
    report(store, &change, out)
}

/// Drop the line for `product_id`.
pub fn remove<S: DurableStorage>(
    store: &mut CartStore<S>,
    product_id: ProductId,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let change = store.remove_from_cart(product_id)?;
    report(store, &change, out)
}

/// Take one unit of `product_id` out of the cart.
pub fn decrement<S: DurableStorage>(
    store: &mut CartStore<S>,
    product_id: ProductId,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let change = store.decrement(product_id)?;
    report(store, &change, out)
}

fn report<S: DurableStorage>(
    store: &CartStore<S>,
    change: &CartChange,
    out: &mut impl Write,
) -> Result<(), CliError> {
    write_notice(out, &change.notice)?;
    if change.open_cart {
        writeln!(out)?;
        show(store, out)?;
    }
    Ok(())
}
