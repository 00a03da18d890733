use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{PlanError, Result};
use crate::models::FoodItem;
use crate::planner::constants::REQUIRED_COLUMNS;

/// Read a food catalog from a CSV file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        PlanError::Configuration(format!("cannot open catalog {}: {}", path.display(), e))
    })?;
    read_catalog(file)
}

/// Read a food catalog from any CSV source.
///
/// Every required column must be present; extra columns are ignored. Rows
/// with zero calories or negative values are kept but logged.
pub fn read_catalog<R: Read>(reader: R) -> Result<Vec<FoodItem>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = rdr.headers()?.clone();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect();
    if !missing.is_empty() {
        return Err(PlanError::Configuration(format!(
            "catalog is missing required column(s): {}",
            missing.join(", ")
        )));
    }

    let mut foods = Vec::new();
    for (line, record) in rdr.deserialize::<FoodItem>().enumerate() {
        let food = record.map_err(|e| {
            PlanError::Configuration(format!("bad catalog row {}: {}", line + 2, e))
        })?;
        if food.is_degenerate() {
            warn!(food = %food.debug_string(), "degenerate catalog row");
        }
        foods.push(food);
    }

    debug!(rows = foods.len(), "catalog loaded");
    Ok(foods)
}
