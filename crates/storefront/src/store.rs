//! JSON record store.
//!
//! The persistence layer is a handful of named JSON records on the local
//! filesystem, one file per logical record under the configured data
//! directory:
//!
//! - `products.json` - the catalog
//! - `categories.json` - display categories
//! - `neighborhoods.json` - delivery zones and fees
//! - `whatsapp.json` - the store's WhatsApp number
//! - `admin_password.json` - the shared admin password
//! - `cart.json` - the in-progress cart, restored on startup
//!
//! Reads fall back to a documented default when the record is absent; a
//! malformed record surfaces as a typed error rather than a silent reset.
//! Writes are best-effort with no transactions and no schema versioning.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use doceria_core::{Cart, Category, Neighborhood, Product};

/// Password in effect before the operator sets one.
pub const DEFAULT_ADMIN_PASSWORD: &str = "dev123";

/// Record keys, doubling as file stems under the data directory.
mod keys {
    pub const PRODUCTS: &str = "products";
    pub const CATEGORIES: &str = "categories";
    pub const NEIGHBORHOODS: &str = "neighborhoods";
    pub const WHATSAPP: &str = "whatsapp";
    pub const ADMIN_PASSWORD: &str = "admin_password";
    pub const CART: &str = "cart";
}

/// Errors from reading or writing a record.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem access failed for a record.
    #[error("I/O error on record '{key}': {source}")]
    Io {
        key: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// A record exists but does not parse as its expected shape.
    #[error("malformed record '{key}': {source}")]
    Malformed {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Key-addressed JSON record store rooted at a data directory.
///
/// Injected into [`crate::state::AppState`] as a constructor dependency;
/// it lives for the process lifetime and is never torn down.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open the store, creating the data directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            key: "data dir",
            source,
        })?;
        Ok(Self { dir })
    }

    /// The directory this store persists into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn read<T: DeserializeOwned>(&self, key: &'static str) -> Result<Option<T>, StoreError> {
        let raw = match fs::read_to_string(self.path(key)) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Io { key, source }),
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Malformed { key, source })
    }

    fn write<T: Serialize>(&self, key: &'static str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(value)
            .map_err(|source| StoreError::Malformed { key, source })?;
        fs::write(self.path(key), raw).map_err(|source| StoreError::Io { key, source })
    }

    /// Stored catalog; empty when never saved.
    ///
    /// # Errors
    ///
    /// Fails when the record cannot be read or parsed.
    pub fn products(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.read(keys::PRODUCTS)?.unwrap_or_default())
    }

    /// # Errors
    ///
    /// Fails when the record cannot be written.
    pub fn save_products(&self, products: &[Product]) -> Result<(), StoreError> {
        self.write(keys::PRODUCTS, &products)
    }

    /// Stored categories; empty when never saved.
    ///
    /// # Errors
    ///
    /// Fails when the record cannot be read or parsed.
    pub fn categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.read(keys::CATEGORIES)?.unwrap_or_default())
    }

    /// # Errors
    ///
    /// Fails when the record cannot be written.
    pub fn save_categories(&self, categories: &[Category]) -> Result<(), StoreError> {
        self.write(keys::CATEGORIES, &categories)
    }

    /// Stored delivery zones; empty when never saved.
    ///
    /// # Errors
    ///
    /// Fails when the record cannot be read or parsed.
    pub fn neighborhoods(&self) -> Result<Vec<Neighborhood>, StoreError> {
        Ok(self.read(keys::NEIGHBORHOODS)?.unwrap_or_default())
    }

    /// # Errors
    ///
    /// Fails when the record cannot be written.
    pub fn save_neighborhoods(&self, neighborhoods: &[Neighborhood]) -> Result<(), StoreError> {
        self.write(keys::NEIGHBORHOODS, &neighborhoods)
    }

    /// Stored WhatsApp number; empty string when never saved.
    ///
    /// # Errors
    ///
    /// Fails when the record cannot be read or parsed.
    pub fn whatsapp_number(&self) -> Result<String, StoreError> {
        Ok(self.read(keys::WHATSAPP)?.unwrap_or_default())
    }

    /// # Errors
    ///
    /// Fails when the record cannot be written.
    pub fn save_whatsapp_number(&self, number: &str) -> Result<(), StoreError> {
        self.write(keys::WHATSAPP, &number)
    }

    /// Stored admin password; [`DEFAULT_ADMIN_PASSWORD`] when never saved.
    ///
    /// # Errors
    ///
    /// Fails when the record cannot be read or parsed.
    pub fn admin_password(&self) -> Result<String, StoreError> {
        Ok(self
            .read(keys::ADMIN_PASSWORD)?
            .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_owned()))
    }

    /// # Errors
    ///
    /// Fails when the record cannot be written.
    pub fn save_admin_password(&self, password: &str) -> Result<(), StoreError> {
        self.write(keys::ADMIN_PASSWORD, &password)
    }

    /// Stored in-progress cart; empty when never saved.
    ///
    /// # Errors
    ///
    /// Fails when the record cannot be read or parsed.
    pub fn cart(&self) -> Result<Cart, StoreError> {
        Ok(self.read(keys::CART)?.unwrap_or_default())
    }

    /// # Errors
    ///
    /// Fails when the record cannot be written.
    pub fn save_cart(&self, cart: &Cart) -> Result<(), StoreError> {
        self.write(keys::CART, cart)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use doceria_core::types::ProductId;
    use rust_decimal::Decimal;

    fn store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        (dir, store)
    }

    fn bolo() -> Product {
        Product {
            id: ProductId::new("bolo"),
            name: "Bolo".to_owned(),
            description: String::new(),
            price: Decimal::new(5000, 2),
            image: String::new(),
            category: "Bolos".to_owned(),
            options: None,
        }
    }

    #[test]
    fn test_absent_records_fall_back_to_defaults() {
        let (_dir, store) = store();
        assert!(store.products().unwrap().is_empty());
        assert!(store.categories().unwrap().is_empty());
        assert!(store.neighborhoods().unwrap().is_empty());
        assert_eq!(store.whatsapp_number().unwrap(), "");
        assert_eq!(store.admin_password().unwrap(), DEFAULT_ADMIN_PASSWORD);
        assert!(store.cart().unwrap().is_empty());
    }

    #[test]
    fn test_products_round_trip() {
        let (_dir, store) = store();
        store.save_products(&[bolo()]).unwrap();
        assert_eq!(store.products().unwrap(), vec![bolo()]);
    }

    #[test]
    fn test_cart_round_trip() {
        let (_dir, store) = store();
        let mut cart = Cart::new();
        cart.add(&bolo(), None);
        store.save_cart(&cart).unwrap();
        assert_eq!(store.cart().unwrap(), cart);
    }

    #[test]
    fn test_password_and_number_round_trip() {
        let (_dir, store) = store();
        store.save_admin_password("s3gredo").unwrap();
        store.save_whatsapp_number("5511999990000").unwrap();
        assert_eq!(store.admin_password().unwrap(), "s3gredo");
        assert_eq!(store.whatsapp_number().unwrap(), "5511999990000");
    }

    #[test]
    fn test_malformed_record_is_a_typed_error() {
        let (dir, store) = store();
        fs::write(dir.path().join("cart.json"), "{not json").unwrap();
        assert!(matches!(
            store.cart(),
            Err(StoreError::Malformed { key: "cart", .. })
        ));
    }

    #[test]
    fn test_latest_write_wins() {
        let (_dir, store) = store();
        store.save_whatsapp_number("111").unwrap();
        store.save_whatsapp_number("222").unwrap();
        assert_eq!(store.whatsapp_number().unwrap(), "222");
    }
}
