//! Clayhouse Core - Catalog, cart and favorites state.
//!
//! This crate provides the pieces shared by every Clayhouse component:
//! - `storefront` - Static asset server for the single-page application
//! - `cli` - Terminal front end over the cart and favorites store
//!
//! # Architecture
//!
//! The core crate performs no network I/O and never reaches for ambient
//! globals. The [`store::CartStore`] receives its [`catalog::Catalog`] and a
//! [`storage::DurableStorage`] handle at construction, so tests can drive it
//! with a fake catalog and [`storage::MemoryStorage`].
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product ids, prices and quantities
//! - [`catalog`] - The fixed, read-only product list
//! - [`storage`] - Durable key-value storage trait and backends
//! - [`store`] - Cart and favorites state manager
//! - [`notice`] - Structured mutation outcomes and their toast text
//! - [`api`] - Payloads served by the storefront's placeholder endpoints

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod catalog;
pub mod notice;
pub mod storage;
pub mod store;
pub mod types;

pub use catalog::{Catalog, CatalogError, CategoryFilter, Product};
pub use notice::{Notice, NoticeKind};
pub use storage::{DurableStorage, FileStorage, MemoryStorage, StorageError};
pub use store::{CartChange, CartLine, CartStore, FavoriteChange, StoreError, StoreOptions};
pub use types::*;
