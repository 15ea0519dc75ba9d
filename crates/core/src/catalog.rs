//! The fixed, read-only product catalog.
//!
//! The catalog is small and never changes while the process runs, so lookups
//! are plain linear scans in catalog order.

use std::collections::HashSet;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Price, ProductId};

/// Errors that can occur while building a [`Catalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two products share an id.
    #[error("duplicate product id {0}")]
    DuplicateProductId(ProductId),

    /// Catalog JSON could not be parsed.
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A purchasable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Selling price in minor units.
    pub price: Price,
    /// Price before discount, if the product is on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    /// Image URI.
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// Average review score out of 5.
    #[serde(default)]
    pub rating: Decimal,
    /// Number of reviews behind `rating`.
    #[serde(default)]
    pub reviews: u32,
}

impl Product {
    /// Whole-percent discount from `original_price`, if any.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u8> {
        self.original_price
            .and_then(|original| self.price.discount_percent_from(original))
    }

    /// Number of filled stars for `rating` (floor, capped at 5).
    #[must_use]
    pub fn full_stars(&self) -> u8 {
        use rust_decimal::prelude::ToPrimitive;

        self.rating.floor().to_u8().unwrap_or(0).min(5)
    }
}

/// Category selection for product listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Whether `product` passes this filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => product.category == *category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::Category(s.to_string()))
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Category(category) => f.write_str(category),
        }
    }
}

/// An ordered, immutable list of products with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateProductId`] if two products share an id.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateProductId(product.id));
            }
        }
        Ok(Self { products })
    }

    /// Parse a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or ids are not unique.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate over products in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Distinct non-empty categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            let category = product.category.as_str();
            if !category.is_empty() && !categories.contains(&category) {
                categories.push(category);
            }
        }
        categories
    }

    /// Products passing `filter`, in catalog order.
    #[must_use]
    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| filter.matches(product))
            .collect()
    }

    /// The three products featured on the home page.
    #[must_use]
    pub fn featured() -> Self {
        Self {
            products: vec![
                Product {
                    id: ProductId::new(1),
                    name: "Handcrafted Ceramic Vase".to_string(),
                    price: Price::from_minor(2499),
                    original_price: Some(Price::from_minor(3299)),
                    image: "https://images.pexels.com/photos/18635393/pexels-photo-18635393.jpeg"
                        .to_string(),
                    description: "Beautiful handcrafted ceramic vase with traditional patterns"
                        .to_string(),
                    category: "Decorative".to_string(),
                    rating: Decimal::new(48, 1),
                    reviews: 156,
                },
                Product {
                    id: ProductId::new(2),
                    name: "Artisan Bowl Set".to_string(),
                    price: Price::from_minor(3299),
                    original_price: Some(Price::from_minor(4199)),
                    image: "https://images.pexels.com/photos/18633243/pexels-photo-18633243.jpeg"
                        .to_string(),
                    description: "Set of three beautiful ceramic bowls perfect for serving"
                        .to_string(),
                    category: "Set".to_string(),
                    rating: Decimal::new(47, 1),
                    reviews: 89,
                },
                Product {
                    id: ProductId::new(3),
                    name: "Terracotta Collection".to_string(),
                    price: Price::from_minor(1899),
                    original_price: None,
                    image: "https://images.pexels.com/photos/19884207/pexels-photo-19884207.png"
                        .to_string(),
                    description: "Rustic charm meets contemporary style".to_string(),
                    category: "Collection".to_string(),
                    rating: Decimal::new(46, 1),
                    reviews: 134,
                },
            ],
        }
    }

    /// The full product listing.
    #[must_use]
    pub fn collection() -> Self {
        Self {
            products: vec![
                Product {
                    id: ProductId::new(1),
                    name: "Handcrafted Ceramic Vase".to_string(),
                    price: Price::from_minor(2499),
                    original_price: Some(Price::from_minor(3299)),
                    image: "https://images.pexels.com/photos/18635393/pexels-photo-18635393.jpeg"
                        .to_string(),
                    description: "Beautiful handcrafted ceramic vase with intricate floral \
                                  patterns, perfect for home decoration."
                        .to_string(),
                    category: "Decorative".to_string(),
                    rating: Decimal::new(48, 1),
                    reviews: 156,
                },
                Product {
                    id: ProductId::new(2),
                    name: "Traditional Clay Pot".to_string(),
                    price: Price::from_minor(1899),
                    original_price: Some(Price::from_minor(2499)),
                    image: "https://images.pexels.com/photos/6694342/pexels-photo-6694342.jpeg"
                        .to_string(),
                    description: "Authentic traditional clay pot, handmade by skilled artisans \
                                  using age-old techniques."
                        .to_string(),
                    category: "Functional".to_string(),
                    rating: Decimal::new(49, 1),
                    reviews: 203,
                },
                Product {
                    id: ProductId::new(3),
                    name: "Artisan Bowl Set".to_string(),
                    price: Price::from_minor(3299),
                    original_price: Some(Price::from_minor(4199)),
                    image: "https://images.pexels.com/photos/18633243/pexels-photo-18633243.jpeg"
                        .to_string(),
                    description: "Set of three beautiful ceramic bowls with unique blue \
                                  patterns, perfect for serving."
                        .to_string(),
                    category: "Set".to_string(),
                    rating: Decimal::new(47, 1),
                    reviews: 89,
                },
                Product {
                    id: ProductId::new(4),
                    name: "Terracotta Planter".to_string(),
                    price: Price::from_minor(1599),
                    original_price: None,
                    image: "https://images.pexels.com/photos/19884207/pexels-photo-19884207.png"
                        .to_string(),
                    description: "Elegant terracotta planter perfect for indoor plants and herbs."
                        .to_string(),
                    category: "Garden".to_string(),
                    rating: Decimal::new(46, 1),
                    reviews: 134,
                },
                Product {
                    id: ProductId::new(5),
                    name: "Decorative Ceramic Collection".to_string(),
                    price: Price::from_minor(4599),
                    original_price: Some(Price::from_minor(5999)),
                    image: "https://images.pexels.com/photos/6611173/pexels-photo-6611173.jpeg"
                        .to_string(),
                    description: "Exquisite collection of handmade ceramic pieces showcasing \
                                  traditional craftsmanship."
                        .to_string(),
                    category: "Collection".to_string(),
                    rating: Decimal::new(49, 1),
                    reviews: 267,
                },
            ],
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
