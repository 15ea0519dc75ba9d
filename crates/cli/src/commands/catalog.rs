//! Catalog browsing commands.

use std::io::{self, Write};

use clayhouse_core::{CartStore, Catalog, CategoryFilter, DurableStorage, Product};

/// List products in `category`, marking favorites and cart quantities.
pub fn list<S: DurableStorage>(
    store: &CartStore<S>,
    category: &str,
    out: &mut impl Write,
) -> io::Result<()> {
    let filter: CategoryFilter = category.parse().unwrap_or_default();
    let products = store.catalog().filter(&filter);

    if products.is_empty() {
        return writeln!(out, "No products in category \"{filter}\"");
    }

    for product in products {
        write_product(out, product)?;

        let mut tags = Vec::new();
        if store.is_favorite(product.id) {
            tags.push("♥ favorite".to_string());
        }
        let in_cart = store.quantity_of(product.id);
        if in_cart > 0 {
            tags.push(format!("{in_cart} in cart"));
        }
        if !tags.is_empty() {
            writeln!(out, "    {}", tags.join(", "))?;
        }
    }
    Ok(())
}

/// List categories, starting with "All".
pub fn categories(catalog: &Catalog, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", CategoryFilter::All)?;
    for category in catalog.categories() {
        writeln!(out, "{category}")?;
    }
    Ok(())
}

fn write_product(out: &mut impl Write, product: &Product) -> io::Result<()> {
    write!(out, "[{}] {} {}", product.id, product.name, product.price)?;
    if let (Some(original), Some(percent)) = (product.original_price, product.discount_percent()) {
        write!(out, " (was {original}, {percent}% OFF)")?;
    }
    writeln!(out)?;

    if !product.category.is_empty() {
        writeln!(
            out,
            "    {} | {} {} ({} reviews)",
            product.category,
            "★".repeat(usize::from(product.full_stars())),
            product.rating,
            product.reviews
        )?;
    }
    writeln!(out, "    {}", product.description)
}
