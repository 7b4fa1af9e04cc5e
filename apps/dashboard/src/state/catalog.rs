//! # Catalog State
//!
//! Shared product list and user directory.
//!
//! ## Product Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product State Operations                             │
//! │                                                                         │
//! │  Frontend Action          Command                 Store Change          │
//! │  ───────────────          ───────                 ────────────          │
//! │                                                                         │
//! │  Submit form ────────────► create_product() ────► AddProduct           │
//! │                                                                         │
//! │  Edit row ───────────────► update_product() ────► UpdateProduct        │
//! │                                                                         │
//! │  Click Delete ───────────► delete_product() ────► DeleteProduct        │
//! │                                                                         │
//! │  Open grid ──────────────► list_products() ─────► (read only)          │
//! │                                                                         │
//! │  NOTE: All write operations acquire the Mutex lock exclusively.         │
//! │        Read operations also acquire the lock but release it quickly.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use catalog_core::{Product, ProductAction, ProductsState, User};

/// Shared product list driven by [`ProductAction`]s.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<ProductsState>>`:
/// - `Arc`: shared ownership across command handlers
/// - `Mutex`: one writer at a time
#[derive(Debug, Clone)]
pub struct ProductStore {
    state: Arc<Mutex<ProductsState>>,
}

impl ProductStore {
    pub fn new(products: Vec<Product>) -> Self {
        ProductStore {
            state: Arc::new(Mutex::new(ProductsState::new(products))),
        }
    }

    /// Executes a function with read access to the products state.
    ///
    /// ## Usage
    /// ```rust
    /// use catalog_dashboard::state::ProductStore;
    ///
    /// let store = ProductStore::new(Vec::new());
    /// let count = store.with_products(|state| state.products().len());
    /// assert_eq!(count, 0);
    /// ```
    pub fn with_products<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ProductsState) -> R,
    {
        let state = self.state.lock().expect("Products mutex poisoned");
        f(&state)
    }

    /// Executes a function with write access to the products state.
    pub fn with_products_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ProductsState) -> R,
    {
        let mut state = self.state.lock().expect("Products mutex poisoned");
        f(&mut state)
    }

    /// Applies one action to the shared state.
    pub fn dispatch(&self, action: ProductAction) {
        self.with_products_mut(|state| state.reduce(action));
    }

    /// Copy of the current product list.
    pub fn snapshot(&self) -> Vec<Product> {
        self.with_products(|state| state.products().to_vec())
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Read-only user directory.
///
/// Loaded once at startup, so no mutex needed.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Arc<Vec<User>>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        UserDirectory {
            users: Arc::new(users),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
