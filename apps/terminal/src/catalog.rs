//! # Catalog Source
//!
//! Reads the three catalog lists from JSON files.
//!
//! ## File Layout
//! ```text
//! <catalog_dir>/
//! ├── sizes.json      [{ "id": "medium", "name": "Medium", "price": 8, "maxIngredients": 5 }]
//! ├── crusts.json     [{ "id": "thick", "name": "Thick", "price": 1.5 }]
//! └── toppings.json   [{ "id": "ham", "name": "Ham", "image": "ham.jpg" }]
//! ```
//!
//! ## Load Flow
//! ```text
//! read file ──► parse JSON ──► prices to cents ──► validate ──► Loadable::Ready
//!     │              │                │                │
//!     └──────────────┴────────────────┴────────────────┴──► Loadable::Failed(reason)
//! ```
//!
//! Each list loads on its own, so a broken `toppings.json` still lets the
//! customer pick a size and crust.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use pizza_core::validation::{validate_crusts, validate_sizes, validate_toppings};
use pizza_core::{Catalog, Crust, Loadable, Money, Size, Topping, ValidationError};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

pub const SIZES_FILE: &str = "sizes.json";
pub const CRUSTS_FILE: &str = "crusts.json";
pub const TOPPINGS_FILE: &str = "toppings.json";

// =============================================================================
// Catalog Error
// =============================================================================

/// Why one catalog list could not be loaded.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The file does not exist.
    #[error("Catalog file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not the expected JSON shape.
    #[error("Malformed {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// A price that cannot be represented as cents.
    #[error("Invalid price {price} for '{id}'")]
    InvalidPrice { id: String, price: f64 },

    /// An entry broke a catalog rule.
    #[error("Invalid catalog entry: {0}")]
    Validation(#[from] ValidationError),
}

/// Result type alias for catalog loading.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// File Records
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SizeRecord {
    id: String,
    name: String,
    price: f64,
    max_ingredients: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CrustRecord {
    id: String,
    name: String,
    price: f64,
}

fn price_to_money(id: &str, price: f64) -> CatalogResult<Money> {
    Money::from_decimal(price).ok_or_else(|| CatalogError::InvalidPrice {
        id: id.to_string(),
        price,
    })
}

impl TryFrom<SizeRecord> for Size {
    type Error = CatalogError;

    fn try_from(record: SizeRecord) -> CatalogResult<Self> {
        let price = price_to_money(&record.id, record.price)?;
        Ok(Size {
            id: record.id,
            name: record.name,
            price,
            max_ingredients: record.max_ingredients,
        })
    }
}

impl TryFrom<CrustRecord> for Crust {
    type Error = CatalogError;

    fn try_from(record: CrustRecord) -> CatalogResult<Self> {
        let price = price_to_money(&record.id, record.price)?;
        Ok(Crust {
            id: record.id,
            name: record.name,
            price,
        })
    }
}

// =============================================================================
// Catalog Source
// =============================================================================

/// Catalog files in one directory.
#[derive(Debug, Clone)]
pub struct CatalogSource {
    dir: PathBuf,
}

impl CatalogSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        CatalogSource { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Fails if the catalog directory itself is missing.
    pub fn ensure_dir(&self) -> CatalogResult<()> {
        if self.dir.is_dir() {
            Ok(())
        } else {
            Err(CatalogError::NotFound(self.dir.clone()))
        }
    }

    /// Loads all three lists. Never fails as a whole: each failing list
    /// becomes `Loadable::Failed` and is logged.
    pub fn load(&self) -> Catalog {
        debug!(dir = %self.dir.display(), "Loading catalog");
        Catalog {
            sizes: into_loadable(SIZES_FILE, self.load_sizes()),
            crusts: into_loadable(CRUSTS_FILE, self.load_crusts()),
            toppings: into_loadable(TOPPINGS_FILE, self.load_toppings()),
        }
    }

    pub fn load_sizes(&self) -> CatalogResult<Vec<Size>> {
        let sizes = read_records::<SizeRecord>(&self.dir, SIZES_FILE)?
            .into_iter()
            .map(Size::try_from)
            .collect::<CatalogResult<Vec<_>>>()?;
        validate_sizes(&sizes)?;
        Ok(sizes)
    }

    pub fn load_crusts(&self) -> CatalogResult<Vec<Crust>> {
        let crusts = read_records::<CrustRecord>(&self.dir, CRUSTS_FILE)?
            .into_iter()
            .map(Crust::try_from)
            .collect::<CatalogResult<Vec<_>>>()?;
        validate_crusts(&crusts)?;
        Ok(crusts)
    }

    pub fn load_toppings(&self) -> CatalogResult<Vec<Topping>> {
        let toppings = read_records::<Topping>(&self.dir, TOPPINGS_FILE)?;
        validate_toppings(&toppings)?;
        Ok(toppings)
    }
}

fn into_loadable<T>(file: &str, result: CatalogResult<Vec<T>>) -> Loadable<Vec<T>> {
    match &result {
        Ok(items) => debug!(file, count = items.len(), "Catalog list loaded"),
        Err(err) => warn!(file, error = %err, "Catalog list failed to load"),
    }
    result.into()
}

fn read_records<T: DeserializeOwned>(dir: &Path, file: &str) -> CatalogResult<Vec<T>> {
    let path = dir.join(file);
    let text = fs::read_to_string(&path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            CatalogError::NotFound(path.clone())
        } else {
            CatalogError::Io {
                path: path.clone(),
                source,
            }
        }
    })?;

    serde_json::from_str(&text).map_err(|source| CatalogError::Parse {
        file: file.to_string(),
        source,
    })
}
