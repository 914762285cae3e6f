//! # Product repository
//!
//! CRUD and query operations over the document's product sequence. Every
//! operation re-reads the document first; mutations write it back before
//! returning. The store sits behind a mutex held for the whole
//! read-mutate-write sequence, so concurrent requests in one process never
//! lose each other's updates.

use std::sync::{Mutex, MutexGuard};

use crate::storage::DocumentStore;

use super::errors::{RepositoryError, RepositoryResult};
use super::filter::ProductFilter;
use super::id::generate_id;
use super::model::{NewProduct, Product, ProductPatch};

pub struct ProductRepository {
    store: Mutex<Box<dyn DocumentStore>>,
}

impl ProductRepository {
    pub fn new(store: impl DocumentStore + 'static) -> Self {
        Self {
            store: Mutex::new(Box::new(store)),
        }
    }

    fn lock(&self) -> RepositoryResult<MutexGuard<'_, Box<dyn DocumentStore>>> {
        self.store.lock().map_err(|_| RepositoryError::LockPoisoned)
    }

    /// Every product, in document order
    pub fn get_all(&self) -> RepositoryResult<Vec<Product>> {
        let mut store = self.lock()?;
        Ok(store.read()?.products.clone())
    }

    pub fn get_by_id(&self, id: &str) -> RepositoryResult<Option<Product>> {
        let mut store = self.lock()?;
        let document = store.read()?;
        Ok(document.products.iter().find(|p| p.id == id).cloned())
    }

    /// Assign a fresh id, append, persist.
    pub fn create(&self, new_product: NewProduct) -> RepositoryResult<Product> {
        self.insert(new_product, generate_id())
    }

    fn insert(&self, new_product: NewProduct, id: String) -> RepositoryResult<Product> {
        let mut store = self.lock()?;
        let document = store.read()?;

        if document.products.iter().any(|p| p.id == id) {
            return Err(RepositoryError::DuplicateId(id));
        }

        let product = new_product.into_product(id);
        document.products.push(product.clone());
        store.write()?;

        tracing::debug!(id = %product.id, "product created");
        Ok(product)
    }

    /// Merge `patch` into the product in place. `None` if the id is absent.
    pub fn update_by_id(&self, id: &str, patch: ProductPatch) -> RepositoryResult<Option<Product>> {
        let mut store = self.lock()?;
        let document = store.read()?;

        let Some(product) = document.products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        patch.apply_to(product);
        let updated = product.clone();
        store.write()?;

        tracing::debug!(id = %id, "product updated");
        Ok(Some(updated))
    }

    /// Remove the product with `id`. Returns whether anything was removed.
    pub fn delete_by_id(&self, id: &str) -> RepositoryResult<bool> {
        let mut store = self.lock()?;
        let document = store.read()?;

        let Some(index) = document.products.iter().position(|p| p.id == id) else {
            return Ok(false);
        };
        document.products.remove(index);
        store.write()?;

        tracing::debug!(id = %id, "product deleted");
        Ok(true)
    }

    /// Case-insensitive substring match on `name`
    pub fn search_by_name(&self, name: &str) -> RepositoryResult<Vec<Product>> {
        let needle = name.to_lowercase();
        let products = self.get_all()?;
        Ok(products
            .into_iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect())
    }

    pub fn filter_by_cost_and_sales(&self, filter: &ProductFilter) -> RepositoryResult<Vec<Product>> {
        Ok(filter.apply(self.get_all()?))
    }
}
