//! Entity conversion - products, machines and transports into catalog items
//!
//! Each converted entity also gets an icon entry and a stem hint naming the
//! image file the sprite sheet packer should look for.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Number;

use crate::config::ConvertConfig;
use crate::lab::{Icon, Item, MachineCaps, PowerType, QuantityMap, TransportCaps};
use crate::slug::{entity_id_to_slug, product_id_to_slug};
use crate::source::{MachineRecord, ProductRecord, TransportRecord, number_or_zero};

use super::categories::{BUILDINGS, ITEMS, LOGISTICS};
use super::lookup::LookupTables;

/// Items and their icon entries, in creation order
#[derive(Debug, Clone, Default)]
pub struct ItemRegistry {
    items: Vec<Item>,
    index: HashMap<String, usize>,
    icons: Vec<Icon>,
    /// icon id -> image file stem to look for
    icon_hints: HashMap<String, String>,
}

impl ItemRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Register an item with its icon. Returns `false` (and changes nothing)
    /// when an item with the same id already exists.
    pub fn register(&mut self, item: Item, icon_hint: String) -> bool {
        if self.contains(&item.id) {
            tracing::debug!("Skipping duplicate item '{}'", item.id);
            return false;
        }
        self.index.insert(item.id.clone(), self.items.len());
        self.icon_hints.insert(item.id.clone(), icon_hint);
        self.icons.push(Icon::placeholder(item.id.clone()));
        self.items.push(item);
        true
    }

    /// Category of a registered item
    #[must_use]
    pub fn category_of(&self, id: &str) -> Option<&str> {
        self.index
            .get(id)
            .map(|&idx| self.items[idx].category.as_str())
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn icons(&self) -> &[Icon] {
        &self.icons
    }

    pub fn icons_mut(&mut self) -> &mut [Icon] {
        &mut self.icons
    }

    /// Image stem hint for an icon id, defaulting to the id itself
    #[must_use]
    pub fn icon_hint<'a>(&'a self, icon_id: &'a str) -> &'a str {
        self.icon_hints.get(icon_id).map_or(icon_id, String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Take the items and icons out of the registry
    #[must_use]
    pub fn into_parts(self) -> (Vec<Item>, Vec<Icon>) {
        (self.items, self.icons)
    }
}

/// Category for a product proto type tag
#[must_use]
pub fn product_category(product_type: &str) -> &'static str {
    match product_type {
        "VirtualProductProto" => "virtual",
        "CountableProductProto" => ITEMS,
        "LooseProductProto" => "loose",
        "FluidProductProto" => "fluids",
        "MoltenProductProto" => "molten",
        _ => ITEMS,
    }
}

/// File stem of an asset path ("Assets/Base/Icons/Wood.svg" -> "Wood"),
/// or `fallback` when the path is empty.
#[must_use]
pub fn icon_stem(icon_path: &str, fallback: &str) -> String {
    if icon_path.is_empty() {
        return fallback.to_string();
    }
    let normalized = icon_path.replace('\\', "/");
    Path::new(&normalized)
        .file_stem()
        .map_or_else(|| fallback.to_string(), |s| s.to_string_lossy().into_owned())
}

/// Convert a product record. Returns the item and its icon stem hint.
#[must_use]
pub fn convert_product(product: &ProductRecord) -> (Item, String) {
    let slug = product_id_to_slug(&product.id);
    let mut item = Item::new(
        slug.clone(),
        product.name.clone(),
        product_category(&product.product_type),
    );
    if product.product_type == "CountableProductProto" {
        item.stack = Some(1);
    }
    let hint = icon_stem(&product.icon_path, &slug);
    (item, hint)
}

/// Convert a machine record into a `buildings` item with a machine block.
#[must_use]
pub fn convert_machine(
    machine: &MachineRecord,
    lookups: &LookupTables,
    config: &ConvertConfig,
) -> (Item, String) {
    let slug = lookups.machine_slug(&machine.id);
    let mut caps = MachineCaps {
        speed: Number::from(1),
        power: None,
        usage: None,
        consumption: None,
    };

    if number_or_zero(machine.electricity_consumed.as_ref()) > 0.0 {
        caps.power = Some(PowerType::Electric);
        caps.usage = machine.electricity_consumed.clone();
    }

    if config.machine_consumption {
        let consumption = machine_consumption(machine, lookups);
        if !consumption.is_empty() {
            caps.consumption = Some(consumption);
        }
    }

    let mut item = Item::new(slug.clone(), machine.name.clone(), BUILDINGS);
    item.machine = Some(caps);
    let hint = icon_stem(&machine.icon_path, &slug);
    (item, hint)
}

/// Per-machine upkeep: maintenance product, computing and workers
fn machine_consumption(machine: &MachineRecord, lookups: &LookupTables) -> QuantityMap {
    let mut consumption = QuantityMap::new();

    if !machine.maintenance_cost_units.is_empty()
        && let Some(quantity) = positive(machine.maintenance_cost_quantity.as_ref())
    {
        let slug = lookups
            .resolve_product(&machine.maintenance_cost_units)
            .into_slug();
        consumption.insert(slug, quantity);
    }
    if let Some(computing) = positive(machine.computing_consumed.as_ref()) {
        consumption.insert(lookups.resolve_product("Computing").into_slug(), computing);
    }
    if let Some(workers) = positive(machine.workers.as_ref()) {
        consumption.insert(lookups.resolve_product("Workers").into_slug(), workers);
    }
    consumption
}

fn positive(value: Option<&Number>) -> Option<Number> {
    (number_or_zero(value) > 0.0).then(|| value.cloned()).flatten()
}

/// Convert a transport record into a `logistics` item with a belt or pipe block.
#[must_use]
pub fn convert_transport(transport: &TransportRecord) -> (Item, String) {
    let slug = entity_id_to_slug(&transport.id);
    let mut item = Item::new(slug.clone(), transport.name.clone(), LOGISTICS);

    if number_or_zero(transport.throughput_per_second.as_ref()) > 0.0
        && let Some(speed) = transport.throughput_per_second.clone()
    {
        let caps = TransportCaps { speed };
        if transport.id.to_lowercase().contains("pipe") {
            item.pipe = Some(caps);
        } else {
            item.belt = Some(caps);
        }
    }

    let hint = icon_stem(&transport.icon_path, &slug);
    (item, hint)
}
