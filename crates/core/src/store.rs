//! Cart and favorites state manager.
//!
//! [`CartStore`] owns the authoritative cart lines and favorites set. Each
//! mutation updates memory, writes the affected collection to durable storage
//! before returning, and reports what happened as a [`Notice`].
//!
//! # Persisted format
//!
//! Each collection lives under its own key as a versioned JSON envelope:
//!
//! ```text
//! clayhouse.cart      {"version":1,"savedAt":"...","data":[{"productId":1,"quantity":2}]}
//! clayhouse.favorites {"version":1,"savedAt":"...","data":[1,3]}
//! ```
//!
//! A bare payload without the envelope is read as a legacy value and is
//! rewritten in the current format on the next mutation.
//!
//! # Recovery
//!
//! A value that cannot be read or parsed never blocks start-up: it is logged
//! and the collection starts empty.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{Catalog, Product};
use crate::notice::Notice;
use crate::storage::{DurableStorage, StorageError};
use crate::types::{Price, ProductId, Quantity};

/// Storage key for the cart lines.
pub const CART_KEY: &str = "clayhouse.cart";

/// Storage key for the favorites set.
pub const FAVORITES_KEY: &str = "clayhouse.favorites";

/// Envelope version written by this build.
pub const STATE_VERSION: u32 = 1;

/// One aggregated cart entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: Quantity,
}

/// Optional store capabilities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreOptions {
    /// Allow [`CartStore::remove_from_cart`] and [`CartStore::decrement`].
    pub line_removal: bool,
}

impl StoreOptions {
    /// Options with line removal enabled.
    #[must_use]
    pub const fn with_line_removal() -> Self {
        Self { line_removal: true }
    }
}

/// Errors from the optional cart operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The operation needs a capability this store was not opened with.
    #[error("{0} is not enabled for this store")]
    CapabilityDisabled(&'static str),

    /// The product has no line in the cart.
    #[error("product {0} is not in the cart")]
    NotInCart(ProductId),
}

/// Why a persisted value was discarded or could not be written.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The stored text is not the expected shape.
    #[error("malformed persisted state: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("unsupported persisted state version {0}")]
    UnsupportedVersion(u32),

    /// The stored cart holds two lines for one product.
    #[error("persisted cart has more than one line for product {0}")]
    DuplicateLine(ProductId),
}

/// Result of a cart mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartChange {
    pub product_id: ProductId,
    /// Units left in the cart after the mutation; 0 once the line is gone.
    pub quantity: u32,
    /// `price × quantity` after the mutation.
    pub line_total: Price,
    pub notice: Notice,
    /// The presentation layer should open the cart view.
    pub open_cart: bool,
}

/// Result of a favorites toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteChange {
    pub product_id: ProductId,
    /// Membership after the toggle.
    pub is_favorite: bool,
    pub product_name: String,
    pub notice: Notice,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EnvelopeRef<'a, T> {
    version: u32,
    saved_at: DateTime<Utc>,
    data: &'a T,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Persisted<T> {
    Envelope { version: u32, data: T },
    Legacy(T),
}

/// Authoritative cart and favorites state.
///
/// The store takes its catalog and storage by value; nothing is read from
/// globals. Single-threaded by construction: all access goes through `&mut`.
#[derive(Debug)]
pub struct CartStore<S> {
    catalog: Catalog,
    storage: S,
    options: StoreOptions,
    cart: Vec<CartLine>,
    favorites: Vec<ProductId>,
}

impl<S: DurableStorage> CartStore<S> {
    /// Create a store and seed it from `storage`.
    ///
    /// Missing or corrupt persisted values start empty; see
    /// [`Self::load_persisted`].
    pub fn open(catalog: Catalog, storage: S, options: StoreOptions) -> Self {
        let mut store = Self {
            catalog,
            storage,
            options,
            cart: Vec::new(),
            favorites: Vec::new(),
        };
        store.load_persisted();
        store
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add one unit of `product`.
    ///
    /// Increments the existing line if there is one, otherwise appends a new
    /// line with quantity 1.
    pub fn add_to_cart(&mut self, product: &Product) -> CartChange {
        let (quantity, created) = self.increment(product.id);
        let line_total = product.price.times(quantity);

        let notice = if created {
            Notice::AddedToCart {
                product_name: product.name.clone(),
            }
        } else {
            Notice::QuantityUpdated {
                product_name: product.name.clone(),
                quantity,
                line_total,
            }
        };

        CartChange {
            product_id: product.id,
            quantity: quantity.as_u32(),
            line_total,
            notice,
            open_cart: false,
        }
    }

    /// Add one unit of `product` and ask for the cart to be opened.
    ///
    /// Same cart mutation as [`Self::add_to_cart`].
    pub fn buy_now(&mut self, product: &Product) -> CartChange {
        let (quantity, _) = self.increment(product.id);

        CartChange {
            product_id: product.id,
            quantity: quantity.as_u32(),
            line_total: product.price.times(quantity),
            notice: Notice::ReadyForCheckout {
                product_name: product.name.clone(),
            },
            open_cart: true,
        }
    }

    /// Add `product_id` to favorites if absent, remove it if present.
    ///
    /// Ids missing from the catalog are toggled all the same.
    pub fn toggle_favorite(&mut self, product_id: ProductId) -> FavoriteChange {
        let product_name = self.product_name(product_id);

        let position = self.favorites.iter().position(|id| *id == product_id);
        let is_favorite = if let Some(index) = position {
            self.favorites.remove(index);
            false
        } else {
            self.favorites.push(product_id);
            true
        };

        tracing::debug!(product_id = %product_id, is_favorite, "Favorite toggled");
        self.sync_favorites();

        let notice = if is_favorite {
            Notice::AddedToFavorites {
                product_name: product_name.clone(),
            }
        } else {
            Notice::RemovedFromFavorites {
                product_name: product_name.clone(),
            }
        };

        FavoriteChange {
            product_id,
            is_favorite,
            product_name,
            notice,
        }
    }

    /// Drop the whole line for `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CapabilityDisabled`] unless the store was opened
    /// with [`StoreOptions::line_removal`], and [`StoreError::NotInCart`] if
    /// there is no such line.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> Result<CartChange, StoreError> {
        self.require_line_removal("cart line removal")?;
        let index = self.line_index(product_id)?;

        self.cart.remove(index);
        tracing::debug!(product_id = %product_id, "Cart line removed");
        self.sync_cart();

        Ok(self.removed_change(product_id))
    }

    /// Take one unit of `product_id` out of the cart, dropping the line when
    /// the last unit goes.
    ///
    /// # Errors
    ///
    /// Same as [`Self::remove_from_cart`].
    pub fn decrement(&mut self, product_id: ProductId) -> Result<CartChange, StoreError> {
        self.require_line_removal("quantity decrement")?;
        let index = self.line_index(product_id)?;

        let remaining = self
            .cart
            .get(index)
            .and_then(|line| line.quantity.decremented());

        let Some(quantity) = remaining else {
            self.cart.remove(index);
            tracing::debug!(product_id = %product_id, "Cart line removed");
            self.sync_cart();
            return Ok(self.removed_change(product_id));
        };

        if let Some(line) = self.cart.get_mut(index) {
            line.quantity = quantity;
        }
        tracing::debug!(
            product_id = %product_id,
            quantity = quantity.as_u32(),
            "Cart line decremented"
        );
        self.sync_cart();

        let product_name = self.product_name(product_id);
        let line_total = self.unit_price(product_id).times(quantity);
        Ok(CartChange {
            product_id,
            quantity: quantity.as_u32(),
            line_total,
            notice: Notice::QuantityUpdated {
                product_name,
                quantity,
                line_total,
            },
            open_cart: false,
        })
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Replace in-memory state with the persisted copy.
    ///
    /// Never fails: a missing key yields an empty collection, and a corrupt
    /// or unreadable value is logged and also yields an empty collection.
    pub fn load_persisted(&mut self) {
        self.cart = match self.read_cart() {
            Ok(Some(cart)) => cart,
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(key = CART_KEY, error = %e, "Discarding corrupt persisted cart");
                Vec::new()
            }
        };

        self.favorites = match self.read::<Vec<ProductId>>(FAVORITES_KEY) {
            Ok(Some(ids)) => dedup_preserving_order(ids),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(
                    key = FAVORITES_KEY,
                    error = %e,
                    "Discarding corrupt persisted favorites"
                );
                Vec::new()
            }
        };

        tracing::debug!(
            cart_lines = self.cart.len(),
            favorites = self.favorites.len(),
            "Loaded persisted state"
        );
    }

    /// Write the cart to durable storage.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the storage write fails.
    pub fn persist_cart(&mut self) -> Result<(), PersistError> {
        let json = encode(&self.cart)?;
        self.storage.set(CART_KEY, &json)?;
        Ok(())
    }

    /// Write the favorites set to durable storage.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the storage write fails.
    pub fn persist_favorites(&mut self) -> Result<(), PersistError> {
        let json = encode(&self.favorites)?;
        self.storage.set(FAVORITES_KEY, &json)?;
        Ok(())
    }

    fn sync_cart(&mut self) {
        if let Err(e) = self.persist_cart() {
            tracing::error!(key = CART_KEY, error = %e, "Failed to persist cart");
        }
    }

    fn sync_favorites(&mut self) {
        if let Err(e) = self.persist_favorites() {
            tracing::error!(key = FAVORITES_KEY, error = %e, "Failed to persist favorites");
        }
    }

    fn read_cart(&self) -> Result<Option<Vec<CartLine>>, PersistError> {
        let Some(lines) = self.read::<Vec<CartLine>>(CART_KEY)? else {
            return Ok(None);
        };

        let mut seen = Vec::with_capacity(lines.len());
        for line in &lines {
            if seen.contains(&line.product_id) {
                return Err(PersistError::DuplicateLine(line.product_id));
            }
            seen.push(line.product_id);
        }
        Ok(Some(lines))
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, PersistError> {
        let Some(raw) = self.storage.get(key)? else {
            return Ok(None);
        };

        match serde_json::from_str::<Persisted<T>>(&raw)? {
            Persisted::Envelope { version, data } if version == STATE_VERSION => Ok(Some(data)),
            Persisted::Envelope { version, .. } => Err(PersistError::UnsupportedVersion(version)),
            Persisted::Legacy(data) => {
                tracing::info!(key, "Upgrading legacy persisted state on next write");
                Ok(Some(data))
            }
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Cart lines in insertion order.
    #[must_use]
    pub fn cart(&self) -> &[CartLine] {
        &self.cart
    }

    /// Favorite product ids in the order they were added.
    #[must_use]
    pub fn favorites(&self) -> &[ProductId] {
        &self.favorites
    }

    #[must_use]
    pub fn is_favorite(&self, product_id: ProductId) -> bool {
        self.favorites.contains(&product_id)
    }

    /// Quantity of `product_id` in the cart, 0 if absent.
    #[must_use]
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.cart
            .iter()
            .find(|line| line.product_id == product_id)
            .map_or(0, |line| line.quantity.as_u32())
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.cart
            .iter()
            .map(|line| u64::from(line.quantity.as_u32()))
            .sum()
    }

    /// Line total at the catalog price, or `None` if the product is unknown.
    #[must_use]
    pub fn line_total(&self, line: &CartLine) -> Option<Price> {
        self.catalog
            .find(line.product_id)
            .map(|product| product.price.times(line.quantity))
    }

    /// Sum of line totals for products present in the catalog.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.cart
            .iter()
            .filter_map(|line| self.line_total(line))
            .sum()
    }

    /// Display name for `product_id`, falling back to `Product #<id>`.
    #[must_use]
    pub fn product_name(&self, product_id: ProductId) -> String {
        self.catalog
            .find(product_id)
            .map_or_else(|| format!("Product #{product_id}"), |p| p.name.clone())
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn options(&self) -> StoreOptions {
        self.options
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the store, returning its storage handle.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Bump or create the line for `product_id` and persist.
    ///
    /// Returns the resulting quantity and whether a new line was created.
    fn increment(&mut self, product_id: ProductId) -> (Quantity, bool) {
        let (quantity, created) =
            match self.cart.iter_mut().find(|line| line.product_id == product_id) {
                Some(line) => {
                    line.quantity = line.quantity.incremented();
                    (line.quantity, false)
                }
                None => {
                    self.cart.push(CartLine {
                        product_id,
                        quantity: Quantity::ONE,
                    });
                    (Quantity::ONE, true)
                }
            };

        tracing::debug!(
            product_id = %product_id,
            quantity = quantity.as_u32(),
            created,
            "Cart line updated"
        );
        self.sync_cart();
        (quantity, created)
    }

    const fn require_line_removal(&self, operation: &'static str) -> Result<(), StoreError> {
        if self.options.line_removal {
            Ok(())
        } else {
            Err(StoreError::CapabilityDisabled(operation))
        }
    }

    fn line_index(&self, product_id: ProductId) -> Result<usize, StoreError> {
        self.cart
            .iter()
            .position(|line| line.product_id == product_id)
            .ok_or(StoreError::NotInCart(product_id))
    }

    fn unit_price(&self, product_id: ProductId) -> Price {
        self.catalog
            .find(product_id)
            .map_or(Price::ZERO, |product| product.price)
    }

    fn removed_change(&self, product_id: ProductId) -> CartChange {
        CartChange {
            product_id,
            quantity: 0,
            line_total: Price::ZERO,
            notice: Notice::RemovedFromCart {
                product_name: self.product_name(product_id),
            },
            open_cart: false,
        }
    }
}

fn encode<T: Serialize>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(&EnvelopeRef {
        version: STATE_VERSION,
        saved_at: Utc::now(),
        data,
    })
}

fn dedup_preserving_order(ids: Vec<ProductId>) -> Vec<ProductId> {
    let mut unique = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::notice::NoticeKind;
    use crate::storage::MemoryStorage;

    fn vase() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Vase".to_string(),
            price: Price::from_minor(2499),
            original_price: None,
            image: "https://example.com/vase.jpg".to_string(),
            description: "A vase".to_string(),
            category: "Decorative".to_string(),
            rating: rust_decimal::Decimal::ZERO,
            reviews: 0,
        }
    }

    fn bowl() -> Product {
        Product {
            id: ProductId::new(2),
            name: "Bowl".to_string(),
            price: Price::from_minor(1000),
            ..vase()
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![vase(), bowl()]).unwrap()
    }

    fn store() -> CartStore<MemoryStorage> {
        CartStore::open(catalog(), MemoryStorage::new(), StoreOptions::default())
    }

    fn line(id: i32, quantity: u32) -> CartLine {
        CartLine {
            product_id: ProductId::new(id),
            quantity: Quantity::new(quantity).unwrap(),
        }
    }

    #[test]
    fn test_add_to_cart_creates_then_increments() {
        let mut store = store();

        let first = store.add_to_cart(&vase());
        assert_eq!(store.cart(), &[line(1, 1)]);
        assert_eq!(first.quantity, 1);
        assert_eq!(first.line_total, Price::from_minor(2499));
        assert_eq!(
            first.notice,
            Notice::AddedToCart {
                product_name: "Vase".to_string()
            }
        );
        assert!(!first.open_cart);

        let second = store.add_to_cart(&vase());
        assert_eq!(store.cart(), &[line(1, 2)]);
        assert_eq!(second.quantity, 2);
        assert_eq!(second.line_total, Price::from_minor(4998));
        assert_eq!(
            second.notice,
            Notice::QuantityUpdated {
                product_name: "Vase".to_string(),
                quantity: Quantity::new(2).unwrap(),
                line_total: Price::from_minor(4998),
            }
        );
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut store = store();
        store.add_to_cart(&bowl());
        store.add_to_cart(&vase());
        store.add_to_cart(&bowl());

        assert_eq!(store.cart(), &[line(2, 2), line(1, 1)]);
        assert_eq!(store.item_count(), 3);
        assert_eq!(store.subtotal(), Price::from_minor(2000 + 2499));
    }

    #[test]
    fn test_buy_now_matches_add_to_cart() {
        let mut bought = store();
        let mut added = store();

        let change = bought.buy_now(&vase());
        added.add_to_cart(&vase());

        assert_eq!(bought.cart(), added.cart());
        assert_eq!(change.notice.kind(), NoticeKind::ReadyForCheckout);
        assert!(change.open_cart);
        assert_eq!(change.quantity, 1);

        let again = bought.buy_now(&vase());
        assert_eq!(again.quantity, 2);
        assert_eq!(again.line_total, Price::from_minor(4998));
    }

    #[test]
    fn test_toggle_favorite_is_an_involution() {
        let mut store = store();

        let added = store.toggle_favorite(ProductId::new(1));
        assert!(added.is_favorite);
        assert_eq!(added.product_name, "Vase");
        assert_eq!(added.notice.kind(), NoticeKind::AddedToFavorites);
        assert_eq!(store.favorites(), &[ProductId::new(1)]);

        let removed = store.toggle_favorite(ProductId::new(1));
        assert!(!removed.is_favorite);
        assert_eq!(removed.notice.kind(), NoticeKind::RemovedFromFavorites);
        assert!(store.favorites().is_empty());
    }

    #[test]
    fn test_toggle_unknown_product_uses_fallback_name() {
        let mut store = store();
        let change = store.toggle_favorite(ProductId::new(42));
        assert!(change.is_favorite);
        assert_eq!(change.product_name, "Product #42");
        assert!(store.is_favorite(ProductId::new(42)));
    }

    #[test]
    fn test_reload_reproduces_state() {
        let mut store = store();
        store.add_to_cart(&vase());
        store.add_to_cart(&bowl());
        store.add_to_cart(&vase());
        store.toggle_favorite(ProductId::new(2));
        store.toggle_favorite(ProductId::new(1));

        let cart = store.cart().to_vec();
        let favorites = store.favorites().to_vec();

        let reloaded = CartStore::open(catalog(), store.into_storage(), StoreOptions::default());
        assert_eq!(reloaded.cart(), cart.as_slice());
        assert_eq!(reloaded.favorites(), favorites.as_slice());
    }

    #[test]
    fn test_persisted_envelope_shape() {
        let mut store = store();
        store.add_to_cart(&vase());
        store.toggle_favorite(ProductId::new(1));

        let raw = store.storage().get(CART_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], 1);
        assert!(value["savedAt"].is_string());
        assert_eq!(value["data"], serde_json::json!([{"productId": 1, "quantity": 1}]));

        let raw = store.storage().get(FAVORITES_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["data"], serde_json::json!([1]));
    }

    #[test]
    fn test_missing_keys_load_empty() {
        let store = store();
        assert!(store.cart().is_empty());
        assert!(store.favorites().is_empty());
    }

    #[test]
    fn test_malformed_cart_loads_empty() {
        let mut storage = MemoryStorage::new();
        storage.set(CART_KEY, "{not json").unwrap();
        storage.set(FAVORITES_KEY, "[2]").unwrap();

        let store = CartStore::open(catalog(), storage, StoreOptions::default());
        assert!(store.cart().is_empty());
        assert_eq!(store.favorites(), &[ProductId::new(2)]);
    }

    #[test]
    fn test_wrong_shape_loads_empty() {
        let mut storage = MemoryStorage::new();
        storage
            .set(CART_KEY, r#"{"version":1,"data":{"productId":1}}"#)
            .unwrap();
        storage.set(FAVORITES_KEY, r#"["one","two"]"#).unwrap();

        let store = CartStore::open(catalog(), storage, StoreOptions::default());
        assert!(store.cart().is_empty());
        assert!(store.favorites().is_empty());
    }

    #[test]
    fn test_zero_quantity_and_duplicate_lines_are_corrupt() {
        let mut storage = MemoryStorage::new();
        storage
            .set(CART_KEY, r#"[{"productId":1,"quantity":0}]"#)
            .unwrap();
        let store = CartStore::open(catalog(), storage, StoreOptions::default());
        assert!(store.cart().is_empty());

        let mut storage = MemoryStorage::new();
        storage
            .set(
                CART_KEY,
                r#"[{"productId":1,"quantity":1},{"productId":1,"quantity":3}]"#,
            )
            .unwrap();
        let store = CartStore::open(catalog(), storage, StoreOptions::default());
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_unknown_version_loads_empty() {
        let mut storage = MemoryStorage::new();
        storage
            .set(CART_KEY, r#"{"version":9,"data":[{"productId":1,"quantity":1}]}"#)
            .unwrap();

        let store = CartStore::open(catalog(), storage, StoreOptions::default());
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_legacy_payload_loads_and_is_upgraded() {
        let mut storage = MemoryStorage::new();
        storage
            .set(CART_KEY, r#"[{"productId":2,"quantity":3}]"#)
            .unwrap();
        storage.set(FAVORITES_KEY, "[1,1,2]").unwrap();

        let mut store = CartStore::open(catalog(), storage, StoreOptions::default());
        assert_eq!(store.cart(), &[line(2, 3)]);
        assert_eq!(store.favorites(), &[ProductId::new(1), ProductId::new(2)]);

        store.add_to_cart(&bowl());
        let raw = store.storage().get(CART_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], STATE_VERSION);
        assert_eq!(value["data"], serde_json::json!([{"productId": 2, "quantity": 4}]));
    }

    #[test]
    fn test_removal_requires_capability() {
        let mut store = store();
        store.add_to_cart(&vase());

        assert_eq!(
            store.remove_from_cart(ProductId::new(1)),
            Err(StoreError::CapabilityDisabled("cart line removal"))
        );
        assert_eq!(
            store.decrement(ProductId::new(1)),
            Err(StoreError::CapabilityDisabled("quantity decrement"))
        );
        assert_eq!(store.cart(), &[line(1, 1)]);
    }

    #[test]
    fn test_remove_from_cart() {
        let mut store = CartStore::open(
            catalog(),
            MemoryStorage::new(),
            StoreOptions::with_line_removal(),
        );
        store.add_to_cart(&vase());
        store.add_to_cart(&bowl());

        let change = store.remove_from_cart(ProductId::new(1)).unwrap();
        assert_eq!(change.quantity, 0);
        assert_eq!(change.notice.kind(), NoticeKind::RemovedFromCart);
        assert_eq!(store.cart(), &[line(2, 1)]);

        assert_eq!(
            store.remove_from_cart(ProductId::new(1)),
            Err(StoreError::NotInCart(ProductId::new(1)))
        );

        let reloaded = CartStore::open(
            catalog(),
            store.into_storage(),
            StoreOptions::with_line_removal(),
        );
        assert_eq!(reloaded.cart(), &[line(2, 1)]);
    }

    #[test]
    fn test_decrement_then_remove_last_unit() {
        let mut store = CartStore::open(
            catalog(),
            MemoryStorage::new(),
            StoreOptions::with_line_removal(),
        );
        store.add_to_cart(&vase());
        store.add_to_cart(&vase());

        let change = store.decrement(ProductId::new(1)).unwrap();
        assert_eq!(change.quantity, 1);
        assert_eq!(change.line_total, Price::from_minor(2499));
        assert_eq!(change.notice.kind(), NoticeKind::QuantityUpdated);

        let change = store.decrement(ProductId::new(1)).unwrap();
        assert_eq!(change.quantity, 0);
        assert_eq!(change.notice.kind(), NoticeKind::RemovedFromCart);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_subtotal_skips_products_missing_from_catalog() {
        let mut storage = MemoryStorage::new();
        storage
            .set(
                CART_KEY,
                r#"[{"productId":1,"quantity":2},{"productId":99,"quantity":1}]"#,
            )
            .unwrap();

        let store = CartStore::open(catalog(), storage, StoreOptions::default());
        assert_eq!(store.item_count(), 3);
        assert_eq!(store.subtotal(), Price::from_minor(4998));
        assert_eq!(store.quantity_of(ProductId::new(99)), 1);
        assert_eq!(store.quantity_of(ProductId::new(2)), 0);
    }
}
