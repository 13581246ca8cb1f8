//! Type definitions for the captain-of-data export documents
//!
//! Every field carries a serde default so a record with missing or `null`
//! keys degrades to empty strings, zeros and empty lists instead of failing
//! the whole document.

use serde::{Deserialize, Deserializer};
use serde_json::Number;

/// `products.json`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductsDocument {
    /// Game version the export was taken from (e.g. "0.6.4")
    pub game_version: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub products: Vec<ProductRecord>,
}

/// A single product entry
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductRecord {
    /// Raw product id (e.g. "Product_IronOre")
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Display name (e.g. "Iron ore")
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Proto type tag (e.g. "CountableProductProto")
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub product_type: String,
    /// Asset path of the icon (e.g. "Assets/Base/Products/Icons/IronOre.svg")
    #[serde(deserialize_with = "null_as_default")]
    pub icon_path: String,
}

/// `machines_and_buildings.json`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MachinesDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub machines_and_buildings: Vec<MachineRecord>,
}

/// A machine or building entry with its recipes
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MachineRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// In-game build menu category (unused by the output, kept for `info`)
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    /// Electricity draw in kW
    pub electricity_consumed: Option<Number>,
    pub workers: Option<Number>,
    pub computing_consumed: Option<Number>,
    /// Display name of the maintenance product
    #[serde(deserialize_with = "null_as_default")]
    pub maintenance_cost_units: String,
    pub maintenance_cost_quantity: Option<Number>,
    #[serde(deserialize_with = "null_as_default")]
    pub icon_path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub recipes: Vec<RecipeRecord>,
}

/// A recipe nested under a machine
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RecipeRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Duration in seconds
    pub duration: Option<Number>,
    #[serde(deserialize_with = "null_as_default")]
    pub inputs: Vec<RecipeIo>,
    #[serde(deserialize_with = "null_as_default")]
    pub outputs: Vec<RecipeIo>,
}

/// One input or output line of a recipe, referenced by product display name
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RecipeIo {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub quantity: Option<Number>,
}

/// `transports.json`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TransportsDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub transports: Vec<TransportRecord>,
}

/// A belt, pipe or other transport entry
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TransportRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icon_path: String,
    pub throughput_per_second: Option<Number>,
}

/// Read a numeric field as `f64`, treating missing values as zero.
#[must_use]
pub fn number_or_zero(value: Option<&Number>) -> f64 {
    value.and_then(Number::as_f64).unwrap_or(0.0)
}

/// Read an explicit `null` the same way as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
