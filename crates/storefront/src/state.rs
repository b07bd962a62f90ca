//! Application state shared across handlers.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use doceria_core::{Cart, Category, Neighborhood, Product, Wizard};

use crate::config::StorefrontConfig;
use crate::store::{Store, StoreError};

/// Admin-managed collections plus the store settings, loaded once at
/// startup and mutated only through the admin routes.
#[derive(Debug)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub neighborhoods: Vec<Neighborhood>,
    pub whatsapp_number: String,
    pub admin_password: String,
}

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds the configuration, the record store
/// and the two pieces of mutable state: the catalog collections and the
/// order wizard. The storefront serves a single shop at a time, so there
/// is one wizard behind a lock rather than per-session state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: Store,
    catalog: RwLock<CatalogState>,
    wizard: RwLock<Wizard>,
}

impl AppState {
    /// Create the application state, loading every record from the store
    /// and restoring the persisted cart into a fresh wizard.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` when a record cannot be read or is malformed.
    pub fn new(config: StorefrontConfig, store: Store) -> Result<Self, StoreError> {
        let catalog = CatalogState {
            products: store.products()?,
            categories: store.categories()?,
            neighborhoods: store.neighborhoods()?,
            whatsapp_number: store.whatsapp_number()?,
            admin_password: store.admin_password()?,
        };
        let wizard = Wizard::with_cart(store.cart()?);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                catalog: RwLock::new(catalog),
                wizard: RwLock::new(wizard),
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the record store.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.inner.store
    }

    /// Read access to the catalog collections.
    pub fn catalog(&self) -> RwLockReadGuard<'_, CatalogState> {
        self.inner
            .catalog
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Write access to the catalog collections (admin routes only).
    pub fn catalog_mut(&self) -> RwLockWriteGuard<'_, CatalogState> {
        self.inner
            .catalog
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Read access to the order wizard session.
    pub fn wizard(&self) -> RwLockReadGuard<'_, Wizard> {
        self.inner
            .wizard
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Write access to the order wizard session.
    pub fn wizard_mut(&self) -> RwLockWriteGuard<'_, Wizard> {
        self.inner
            .wizard
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Persist the cart after a mutation, fire-and-forget: a failed write
    /// loses at most that one mutation and never fails the request.
    pub fn persist_cart(&self, cart: &Cart) {
        if let Err(e) = self.inner.store.save_cart(cart) {
            tracing::warn!("Failed to persist cart: {e}");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::DEFAULT_ADMIN_PASSWORD;
    use doceria_core::types::ProductId;
    use rust_decimal::Decimal;
    use std::path::PathBuf;

    fn config(data_dir: &std::path::Path) -> StorefrontConfig {
        StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            data_dir: PathBuf::from(data_dir),
        }
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
    fn test_new_state_starts_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        let state = AppState::new(config(dir.path()), store).unwrap();

        assert!(state.catalog().products.is_empty());
        assert_eq!(state.catalog().admin_password, DEFAULT_ADMIN_PASSWORD);
        assert!(state.wizard().cart().is_empty());
    }

    #[test]
    fn test_persisted_cart_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        {
            let state = AppState::new(config(dir.path()), store.clone()).unwrap();
            let mut wizard = state.wizard_mut();
            wizard.cart_mut().add(&bolo(), None);
            state.persist_cart(wizard.cart());
        }

        // Simulate a restart: fresh state over the same store.
        let state = AppState::new(config(dir.path()), store).unwrap();
        let wizard = state.wizard();
        assert_eq!(wizard.cart().len(), 1);
        assert_eq!(wizard.cart().subtotal(), Decimal::new(5000, 2));
    }

    #[test]
    fn test_catalog_mut_is_visible_to_readers() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        let state = AppState::new(config(dir.path()), store).unwrap();

        state.catalog_mut().products = vec![bolo()];
        assert_eq!(state.catalog().products.len(), 1);
    }
}
