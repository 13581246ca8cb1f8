//! Name <-> slug lookup tables built from the source catalog

use std::collections::HashMap;

use crate::slug::{entity_id_to_slug, product_id_to_slug, slugify};
use crate::source::SourceCatalog;

/// Outcome of resolving a product display name to a slug
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The name belongs to a known product
    Known(String),
    /// Unknown name; the slug was computed from the name itself
    Fallback(String),
}

impl Resolution {
    /// The resolved slug, whichever branch produced it
    #[must_use]
    pub fn slug(&self) -> &str {
        match self {
            Self::Known(slug) | Self::Fallback(slug) => slug,
        }
    }

    #[must_use]
    pub fn into_slug(self) -> String {
        match self {
            Self::Known(slug) | Self::Fallback(slug) => slug,
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Immutable lookup tables shared by every conversion step
#[derive(Debug, Clone, Default)]
pub struct LookupTables {
    /// "Iron ore" -> "iron-ore"
    product_name_to_id: HashMap<String, String>,
    /// "iron-ore" -> "Iron ore"
    product_id_to_name: HashMap<String, String>,
    /// "FoodMill" -> "food-mill"
    machine_id_to_slug: HashMap<String, String>,
}

impl LookupTables {
    /// Build the tables from loaded documents.
    ///
    /// Later products with the same name or slug overwrite earlier ones.
    #[must_use]
    pub fn build(catalog: &SourceCatalog) -> Self {
        let mut tables = Self::default();

        for product in &catalog.products.products {
            let slug = product_id_to_slug(&product.id);
            tables
                .product_name_to_id
                .insert(product.name.clone(), slug.clone());
            tables.product_id_to_name.insert(slug, product.name.clone());
        }

        for machine in &catalog.machines.machines_and_buildings {
            tables
                .machine_id_to_slug
                .insert(machine.id.clone(), entity_id_to_slug(&machine.id));
        }

        tracing::debug!(
            products = tables.product_name_to_id.len(),
            machines = tables.machine_id_to_slug.len(),
            "Built lookup tables"
        );
        tables
    }

    /// Resolve a product display name to its item slug
    #[must_use]
    pub fn resolve_product(&self, name: &str) -> Resolution {
        match self.product_name_to_id.get(name) {
            Some(slug) => Resolution::Known(slug.clone()),
            None => Resolution::Fallback(slugify(name)),
        }
    }

    /// Display name for a product slug, or the slug itself when unknown
    #[must_use]
    pub fn product_display_name<'a>(&'a self, slug: &'a str) -> &'a str {
        self.product_id_to_name.get(slug).map_or(slug, String::as_str)
    }

    /// Slug for a raw machine id
    #[must_use]
    pub fn machine_slug(&self, machine_id: &str) -> String {
        self.machine_id_to_slug
            .get(machine_id)
            .cloned()
            .unwrap_or_else(|| entity_id_to_slug(machine_id))
    }

    #[must_use]
    pub fn product_count(&self) -> usize {
        self.product_id_to_name.len()
    }
}
