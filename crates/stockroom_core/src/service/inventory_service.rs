//! Inventory use-case service.
//!
//! # Responsibility
//! - Own the ordered product sequence for the lifetime of the process.
//! - Persist the full sequence through the repository after every mutation.
//!
//! # Invariants
//! - Callers only get shared borrows; every mutation goes through this type
//!   and is followed by a save.
//! - A failed save never rolls back the in-memory change.
//! - Any load failure starts the service with an empty inventory.

use crate::model::product::{Product, ProductId};
use crate::repo::product_repo::{ProductRepository, RepoError, RepoResult};
use log::{debug, info, warn};

/// Direction of a stock adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockDirection {
    Add,
    Remove,
}

/// Owner of the in-memory inventory and its persistence boundary.
pub struct InventoryService<R: ProductRepository> {
    repo: R,
    products: Vec<Product>,
}

impl<R: ProductRepository> InventoryService<R> {
    /// Opens the service and loads whatever the repository holds.
    ///
    /// Missing and unreadable state both yield an empty inventory; the
    /// difference is only visible in logs.
    pub fn open(repo: R) -> Self {
        let mut service = Self {
            repo,
            products: Vec::new(),
        };
        service.load();
        service
    }

    /// Appends `product` and persists.
    ///
    /// On save failure the product stays in memory and the error is returned.
    pub fn add(&mut self, product: Product) -> RepoResult<()> {
        info!(
            "event=product_add module=service status=ok id={} count={}",
            product.id,
            self.products.len() + 1
        );
        self.products.push(product);
        self.save()
    }

    /// All products in insertion order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// First product with `id`, scanning in insertion order.
    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Adjusts stock of the first product with `id`, then persists.
    ///
    /// # Contract
    /// - Unknown id returns `RepoError::NotFound` without saving.
    /// - A removal larger than the stock on hand changes nothing but still
    ///   saves and returns `Ok(())`.
    pub fn update_quantity(
        &mut self,
        id: ProductId,
        amount: i32,
        direction: StockDirection,
    ) -> RepoResult<()> {
        let Some(product) = self.products.iter_mut().find(|product| product.id == id) else {
            warn!("event=stock_update module=service status=not_found id={id}");
            return Err(RepoError::NotFound(id));
        };

        let before = product.quantity;
        match direction {
            StockDirection::Add => product.increase_quantity(amount),
            StockDirection::Remove => product.decrease_quantity(amount),
        }

        if product.quantity == before && amount != 0 {
            debug!(
                "event=stock_update module=service status=unchanged id={id} amount={amount} direction={direction:?} quantity={before}"
            );
        } else {
            info!(
                "event=stock_update module=service status=ok id={id} amount={amount} direction={direction:?} quantity={}",
                product.quantity
            );
        }

        self.save()
    }

    /// Writes the full sequence, replacing prior persisted content.
    pub fn save(&self) -> RepoResult<()> {
        self.repo.save_products(&self.products)
    }

    /// Replaces the in-memory sequence with persisted state, or empties it.
    pub fn load(&mut self) {
        self.products = match self.repo.load_products() {
            Ok(Some(products)) => {
                info!(
                    "event=inventory_load module=service status=ok count={}",
                    products.len()
                );
                products
            }
            Ok(None) => {
                info!("event=inventory_load module=service status=missing count=0");
                Vec::new()
            }
            Err(err) => {
                warn!(
                    "event=inventory_load module=service status=error error_code=load_failed error={err}"
                );
                Vec::new()
            }
        };
    }
}
