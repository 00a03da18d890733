use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use strsim::jaro_winkler;
use tracing::info;

use crate::catalog::loader::load_catalog;
use crate::error::{PlanError, Result};
use crate::models::FoodItem;
use crate::planner::constants::FUZZY_MATCH_THRESHOLD;

/// Immutable food table, in file order, with a case-insensitive name index.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    foods: Vec<FoodItem>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from rows. On duplicate names the first row wins.
    pub fn new(foods: Vec<FoodItem>) -> Self {
        let mut index = HashMap::with_capacity(foods.len());
        for (i, food) in foods.iter().enumerate() {
            index.entry(food.key()).or_insert(i);
        }
        Self { foods, index }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(load_catalog(path)?))
    }

    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    /// Get a food by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&FoodItem> {
        self.index
            .get(&name.trim().to_lowercase())
            .map(|&i| &self.foods[i])
    }

    /// Exact match first, then the closest name by Jaro–Winkler similarity.
    pub fn find_closest(&self, name: &str) -> Option<&FoodItem> {
        if let Some(food) = self.get(name) {
            return Some(food);
        }
        let needle = name.trim().to_lowercase();
        self.foods
            .iter()
            .map(|f| (f, jaro_winkler(&f.key(), &needle)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(f, _)| f)
    }

    /// Rows with zero calories or negative nutrient values.
    pub fn degenerate_rows(&self) -> Vec<&FoodItem> {
        self.foods.iter().filter(|f| f.is_degenerate()).collect()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

/// Shared, read-only handle to a loaded catalog.
///
/// Readers take an `Arc` snapshot; the catalog is never mutated after load.
#[derive(Debug, Default)]
pub struct CatalogStore {
    current: Arc<Catalog>,
}

impl CatalogStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: Arc::new(catalog),
        }
    }

    pub fn snapshot(&self) -> Arc<Catalog> {
        Arc::clone(&self.current)
    }
}

static GLOBAL_CATALOG: OnceLock<CatalogStore> = OnceLock::new();

/// Load the process-wide catalog. Must be called once, at startup.
pub fn init_global<P: AsRef<Path>>(path: P) -> Result<&'static CatalogStore> {
    let catalog = Catalog::load(path)?;
    info!(foods = catalog.len(), "catalog loaded");
    GLOBAL_CATALOG
        .set(CatalogStore::new(catalog))
        .map_err(|_| PlanError::Configuration("catalog already initialized".to_string()))?;
    global()
}

/// The process-wide catalog store, once initialized.
pub fn global() -> Result<&'static CatalogStore> {
    GLOBAL_CATALOG
        .get()
        .ok_or_else(|| PlanError::Configuration("catalog not initialized".to_string()))
}
