//! Source catalog - the JSON documents written by the captain-of-data export mod
//!
//! - `products.json` - products with their proto type and icon path
//! - `machines_and_buildings.json` - machines with nested recipes
//! - `transports.json` (optional) - belts, pipes and other transports

pub mod loader;
pub mod types;

pub use loader::{SourceCatalog, read_document};
pub use types::{
    MachineRecord, MachinesDocument, ProductRecord, ProductsDocument, RecipeIo, RecipeRecord,
    TransportRecord, TransportsDocument, number_or_zero,
};
