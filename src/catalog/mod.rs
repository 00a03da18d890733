mod loader;
mod store;

pub use loader::{load_catalog, read_catalog};
pub use store::{Catalog, CatalogStore, global, init_global};
