//! Product repository contract and JSON file implementation.
//!
//! # Responsibility
//! - Load and save the whole ordered product sequence.
//! - Keep file layout and encoding inside the persistence boundary.
//!
//! # Invariants
//! - A missing file is reported as "no data", distinct from corrupt data.
//! - Encoding completes before the file is opened for writing, so an encode
//!   failure leaves the previous content intact.
//! - Non-finite prices are never written; JSON has no encoding for them and
//!   `serde_json` would emit `null`, which makes the whole file unreadable.

use crate::model::product::{Product, ProductId};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for inventory persistence and lookup operations.
#[derive(Debug)]
pub enum RepoError {
    /// File system read/write failure.
    Io(std::io::Error),
    /// Product sequence could not be serialized.
    Encode(serde_json::Error),
    /// Persisted content exists but does not decode to a product sequence.
    InvalidData(String),
    /// No product with the requested id.
    NotFound(ProductId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode inventory: {err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted inventory: {message}"),
            Self::NotFound(id) => write!(f, "product not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::InvalidData(_) => None,
            Self::NotFound(_) => None,
        }
    }
}

impl From<std::io::Error> for RepoError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Storage contract for the full product sequence.
pub trait ProductRepository {
    /// Returns `Ok(None)` when nothing has been persisted yet.
    fn load_products(&self) -> RepoResult<Option<Vec<Product>>>;
    /// Replaces persisted content with `products`.
    fn save_products(&self, products: &[Product]) -> RepoResult<()>;
}

impl<R: ProductRepository + ?Sized> ProductRepository for &R {
    fn load_products(&self) -> RepoResult<Option<Vec<Product>>> {
        (**self).load_products()
    }

    fn save_products(&self, products: &[Product]) -> RepoResult<()> {
        (**self).save_products(products)
    }
}

/// Single-file repository storing products as a JSON array.
#[derive(Debug, Clone)]
pub struct JsonFileProductRepository {
    path: PathBuf,
}

impl JsonFileProductRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProductRepository for JsonFileProductRepository {
    fn load_products(&self) -> RepoResult<Option<Vec<Product>>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let products = serde_json::from_slice::<Vec<Product>>(&bytes)
            .map_err(|err| RepoError::InvalidData(err.to_string()))?;
        Ok(Some(products))
    }

    fn save_products(&self, products: &[Product]) -> RepoResult<()> {
        let started_at = Instant::now();
        if let Some(product) = products.iter().find(|product| !product.price.is_finite()) {
            error!(
                "event=inventory_save module=repo status=error count={} error_code=non_finite_price id={}",
                products.len(),
                product.id
            );
            return Err(RepoError::InvalidData(format!(
                "product {} has non-finite price {}",
                product.id, product.price
            )));
        }
        let encoded = serde_json::to_vec_pretty(products)?;

        match std::fs::write(&self.path, encoded) {
            Ok(()) => {
                info!(
                    "event=inventory_save module=repo status=ok count={} duration_ms={}",
                    products.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=inventory_save module=repo status=error count={} duration_ms={} error_code=write_failed error={}",
                    products.len(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }
}
