//! Integration tests for Clayhouse.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p clayhouse-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_store` - Cart and favorites persistence across restarts on disk
//! - `storefront_api` - Storefront router driven in-process, no socket bound
