//! CLI command implementations.
//!
//! Every command writes to a caller-supplied `Write` so output can be
//! captured in tests.

pub mod cart;
pub mod catalog;
pub mod favorites;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clayhouse_core::{
    Catalog, CatalogError, CartStore, FileStorage, Notice, Product, ProductId, StoreError,
    StoreOptions,
};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Catalog file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    ReadCatalog {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Catalog file is invalid.
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// No product with this id in the catalog.
    #[error("No product with id {0}")]
    UnknownProduct(ProductId),

    /// The store rejected the operation.
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Writing output failed.
    #[error("Output error: {0}")]
    Io(#[from] io::Error),
}

/// Everything a command needs: the store over the on-disk data directory.
pub struct Context {
    pub store: CartStore<FileStorage>,
}

impl Context {
    /// Load the catalog and open the store.
    ///
    /// # Errors
    ///
    /// Returns an error if a catalog file was given but cannot be read or
    /// parsed. Corrupt cart or favorites data is not an error.
    pub fn load(
        data_dir: &Path,
        catalog_path: Option<&Path>,
        allow_removal: bool,
    ) -> Result<Self, CliError> {
        let catalog = match catalog_path {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|source| {
                    CliError::ReadCatalog {
                        path: path.to_path_buf(),
                        source,
                    }
                })?;
                Catalog::from_json(&json)?
            }
            None => Catalog::collection(),
        };

        tracing::debug!(
            data_dir = %data_dir.display(),
            products = catalog.len(),
            allow_removal,
            "Opening store"
        );

        let options = StoreOptions {
            line_removal: allow_removal,
        };
        let store = CartStore::open(catalog, FileStorage::new(data_dir), options);
        Ok(Self { store })
    }
}

/// Look up a product, cloning it out of the catalog so the store can be
/// mutated afterwards.
pub fn find_product(catalog: &Catalog, product_id: ProductId) -> Result<Product, CliError> {
    catalog
        .find(product_id)
        .cloned()
        .ok_or(CliError::UnknownProduct(product_id))
}

/// Print a mutation outcome the way the storefront shows its toasts.
pub fn write_notice(out: &mut impl Write, notice: &Notice) -> io::Result<()> {
    writeln!(out, "{}", notice.title())?;
    writeln!(out, "  {}", notice.description())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults_to_collection() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::load(dir.path(), None, false).unwrap();

        assert_eq!(ctx.store.catalog().len(), Catalog::collection().len());
        assert!(!ctx.store.options().line_removal);
    }

    #[test]
    fn test_load_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"[{"id":7,"name":"Stoneware Mug","price":1299,"image":"mug.jpg","description":"A mug."}]"#,
        )
        .unwrap();

        let ctx = Context::load(&dir.path().join("data"), Some(&path), true).unwrap();
        let mug = find_product(ctx.store.catalog(), ProductId::new(7)).unwrap();
        assert_eq!(mug.name, "Stoneware Mug");
        assert!(ctx.store.options().line_removal);
        assert!(matches!(
            find_product(ctx.store.catalog(), ProductId::new(1)),
            Err(CliError::UnknownProduct(_))
        ));
    }

    #[test]
    fn test_load_missing_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Context::load(dir.path(), Some(&dir.path().join("nope.json")), false)
            .err()
            .unwrap();
        assert!(matches!(err, CliError::ReadCatalog { .. }));
    }

    #[test]
    fn test_load_duplicate_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let product = r#"{"id":1,"name":"A","price":100,"image":"a.jpg","description":"a"}"#;
        std::fs::write(&path, format!("[{product},{product}]")).unwrap();

        let err = Context::load(dir.path(), Some(&path), false).err().unwrap();
        assert!(matches!(
            err,
            CliError::Catalog(CatalogError::DuplicateProductId(_))
        ));
    }

    #[test]
    fn test_write_notice() {
        let mut out = Vec::new();
        write_notice(
            &mut out,
            &Notice::AddedToCart {
                product_name: "Artisan Bowl Set".to_string(),
            },
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Added to Cart!\n  Artisan Bowl Set has been added to your cart. \
             Check your cart to proceed to checkout.\n"
        );
    }
}
