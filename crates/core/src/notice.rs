//! Structured outcomes of store mutations.
//!
//! Every mutation on [`crate::store::CartStore`] produces a [`Notice`] built
//! from the state *after* the mutation. The presentation layer shows it as a
//! transient toast using [`Notice::title`] and [`Notice::description`].

use serde::{Deserialize, Serialize};

use crate::types::{Price, Quantity};

/// What a mutation did, with exactly the data needed to describe it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all_fields = "camelCase")]
pub enum Notice {
    /// An existing cart line gained or lost a unit.
    QuantityUpdated {
        product_name: String,
        quantity: Quantity,
        line_total: Price,
    },
    /// A new cart line was created.
    AddedToCart { product_name: String },
    AddedToFavorites { product_name: String },
    RemovedFromFavorites { product_name: String },
    /// "Buy now": the product is in the cart and the cart should open.
    ReadyForCheckout { product_name: String },
    /// A cart line was dropped (removal capability only).
    RemovedFromCart { product_name: String },
}

/// The variant of a [`Notice`] without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoticeKind {
    QuantityUpdated,
    AddedToCart,
    AddedToFavorites,
    RemovedFromFavorites,
    ReadyForCheckout,
    RemovedFromCart,
}

impl Notice {
    #[must_use]
    pub const fn kind(&self) -> NoticeKind {
        match self {
            Self::QuantityUpdated { .. } => NoticeKind::QuantityUpdated,
            Self::AddedToCart { .. } => NoticeKind::AddedToCart,
            Self::AddedToFavorites { .. } => NoticeKind::AddedToFavorites,
            Self::RemovedFromFavorites { .. } => NoticeKind::RemovedFromFavorites,
            Self::ReadyForCheckout { .. } => NoticeKind::ReadyForCheckout,
            Self::RemovedFromCart { .. } => NoticeKind::RemovedFromCart,
        }
    }

    /// Display name of the product the notice is about.
    #[must_use]
    pub fn product_name(&self) -> &str {
        match self {
            Self::QuantityUpdated { product_name, .. }
            | Self::AddedToCart { product_name }
            | Self::AddedToFavorites { product_name }
            | Self::RemovedFromFavorites { product_name }
            | Self::ReadyForCheckout { product_name }
            | Self::RemovedFromCart { product_name } => product_name,
        }
    }

    /// Toast heading.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.kind().title()
    }

    /// Toast body.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::QuantityUpdated {
                product_name,
                quantity,
                line_total,
            } => format!("{product_name} - Quantity: {quantity} - Total: {line_total}"),
            Self::AddedToCart { product_name } => format!(
                "{product_name} has been added to your cart. Check your cart to proceed to checkout."
            ),
            Self::AddedToFavorites { product_name } => {
                format!("{product_name} has been added to your favorites.")
            }
            Self::RemovedFromFavorites { product_name } => {
                format!("{product_name} has been removed from your favorites.")
            }
            Self::ReadyForCheckout { product_name } => format!(
                "{product_name} has been added to your cart. Opening cart for checkout..."
            ),
            Self::RemovedFromCart { product_name } => {
                format!("{product_name} has been removed from your cart.")
            }
        }
    }
}

impl NoticeKind {
    /// Toast heading for this kind.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::QuantityUpdated => "Quantity Updated!",
            Self::AddedToCart => "Added to Cart!",
            Self::AddedToFavorites => "Added to Favorites",
            Self::RemovedFromFavorites => "Removed from Favorites",
            Self::ReadyForCheckout => "Ready for Checkout!",
            Self::RemovedFromCart => "Removed from Cart",
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title(), self.description())
    }
}
