//! Reading the export documents from disk

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

use super::types::{MachinesDocument, ProductsDocument, TransportsDocument};

/// The three export documents, loaded and parsed
#[derive(Debug, Clone, Default)]
pub struct SourceCatalog {
    pub products: ProductsDocument,
    pub machines: MachinesDocument,
    /// `None` when no transports document was supplied
    pub transports: Option<TransportsDocument>,
}

impl SourceCatalog {
    /// Load the products and machines documents, plus the optional transports document.
    ///
    /// # Errors
    /// Returns [`Error::SourceNotFound`] or [`Error::SourceParseFailed`] for any
    /// document that is missing or malformed.
    pub fn load(products: &Path, machines: &Path, transports: Option<&Path>) -> Result<Self> {
        tracing::info!("Loading products from {}", products.display());
        let products: ProductsDocument = read_document(products)?;

        tracing::info!("Loading machines from {}", machines.display());
        let machines: MachinesDocument = read_document(machines)?;

        let transports = match transports {
            Some(path) => {
                tracing::info!("Loading transports from {}", path.display());
                Some(read_document::<TransportsDocument>(path)?)
            }
            None => None,
        };

        let catalog = Self {
            products,
            machines,
            transports,
        };
        tracing::info!(
            game_version = catalog.game_version().unwrap_or("unknown"),
            products = catalog.products.products.len(),
            machines = catalog.machines.machines_and_buildings.len(),
            transports = catalog.transport_count(),
            "Loaded source catalog"
        );
        Ok(catalog)
    }

    /// Game version recorded in the products document
    #[must_use]
    pub fn game_version(&self) -> Option<&str> {
        self.products.game_version.as_deref()
    }

    /// Number of transport records (zero without a transports document)
    #[must_use]
    pub fn transport_count(&self) -> usize {
        self.transports.as_ref().map_or(0, |t| t.transports.len())
    }

    /// Total number of recipe records across all machines, duplicates included
    #[must_use]
    pub fn recipe_record_count(&self) -> usize {
        self.machines
            .machines_and_buildings
            .iter()
            .map(|m| m.recipes.len())
            .sum()
    }
}

/// Parse one JSON document.
///
/// # Errors
/// Returns [`Error::SourceNotFound`] if `path` does not exist, or
/// [`Error::SourceParseFailed`] if it is not valid for `T`.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.is_file() {
        return Err(Error::SourceNotFound {
            path: path.to_path_buf(),
        });
    }
    let reader = BufReader::new(File::open(path)?);
    serde_json::from_reader(reader).map_err(|source| Error::SourceParseFailed {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_document_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("products.json");
        let err = read_document::<ProductsDocument>(&missing).unwrap_err();
        assert!(matches!(err, Error::SourceNotFound { .. }));
    }

    #[test]
    fn test_malformed_document_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"{ not json")
            .unwrap();
        let err = read_document::<ProductsDocument>(&path).unwrap_err();
        assert!(matches!(err, Error::SourceParseFailed { .. }));
    }

    #[test]
    fn test_missing_fields_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("machines.json");
        std::fs::write(
            &path,
            r#"{"machines_and_buildings": [{"id": "Smelter", "recipes": [{"id": "R", "inputs": [{"name": "Iron ore"}]}]}]}"#,
        )
        .unwrap();
        let doc: MachinesDocument = read_document(&path).unwrap();
        let machine = &doc.machines_and_buildings[0];
        assert_eq!(machine.name, "");
        assert!(machine.electricity_consumed.is_none());
        assert!(machine.recipes[0].duration.is_none());
        assert!(machine.recipes[0].inputs[0].quantity.is_none());
        assert!(machine.recipes[0].outputs.is_empty());
    }

    #[test]
    fn test_null_strings_default() {
        let dir = tempfile::tempdir().unwrap();
        let products = dir.path().join("products.json");
        std::fs::write(
            &products,
            r#"{"game_version": null, "products": [{"id": "Product_Coal", "name": "Coal", "type": null, "icon_path": null}]}"#,
        )
        .unwrap();
        let machines = dir.path().join("machines.json");
        std::fs::write(
            &machines,
            r#"{"machines_and_buildings": [{"id": "Smelter", "name": null, "category": null, "maintenance_cost_units": null, "maintenance_cost_quantity": null, "icon_path": null, "recipes": [{"id": "R", "name": null, "inputs": null, "outputs": [{"name": null, "quantity": 1}]}]}]}"#,
        )
        .unwrap();

        let catalog = SourceCatalog::load(&products, &machines, None).unwrap();
        let product = &catalog.products.products[0];
        assert_eq!(product.icon_path, "");
        assert_eq!(product.product_type, "");
        assert_eq!(catalog.game_version(), None);

        let machine = &catalog.machines.machines_and_buildings[0];
        assert_eq!(machine.maintenance_cost_units, "");
        assert_eq!(machine.icon_path, "");
        assert_eq!(machine.name, "");
        assert!(machine.recipes[0].inputs.is_empty());
        assert_eq!(machine.recipes[0].outputs[0].name, "");
    }

    #[test]
    fn test_null_transports_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transports.json");
        std::fs::write(
            &path,
            r#"{"transports": [{"id": "PipeT1", "name": "Pipe", "icon_path": null, "throughput_per_second": 10}, {"id": "Shaft", "name": null}]}"#,
        )
        .unwrap();
        let doc: TransportsDocument = read_document(&path).unwrap();
        assert_eq!(doc.transports.len(), 2);
        assert_eq!(doc.transports[0].icon_path, "");
        assert_eq!(doc.transports[1].name, "");
    }
}
