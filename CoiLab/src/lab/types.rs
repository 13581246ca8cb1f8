//! Type definitions for the FactorioLab `data.json` document
//!
//! Field order in these structs is the key order in the written JSON.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Icon position before the sprite sheet is packed
pub const PLACEHOLDER_POSITION: &str = "0px 0px";

/// Fixed recipe cost written for every recipe
pub const RECIPE_COST: u32 = 100;

/// Product slug -> quantity, in source order
pub type QuantityMap = IndexMap<String, Number>;

/// The complete `data.json` document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabData {
    pub version: String,
    pub categories: Vec<Category>,
    pub icons: Vec<Icon>,
    pub items: Vec<Item>,
    pub recipes: Vec<Recipe>,
    pub defaults: Defaults,
}

/// Item/recipe grouping shown as a tab in the calculator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Id of the first item in this category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Sprite sheet entry for one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    pub id: String,
    /// CSS background-position into the sheet (e.g. "-64px -0px")
    pub position: String,
    /// Average color as `#rrggbb`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Icon {
    /// Create an icon entry at the placeholder position
    #[must_use]
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            position: PLACEHOLDER_POSITION.to_string(),
            color: None,
        }
    }
}

/// A product, machine or transport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub category: String,
    pub row: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine: Option<MachineCaps>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub belt: Option<TransportCaps>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipe: Option<TransportCaps>,
}

impl Item {
    /// Create a plain item with no capability blocks
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            row: 0,
            stack: None,
            machine: None,
            belt: None,
            pipe: None,
        }
    }
}

/// Machine capability block of an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineCaps {
    pub speed: Number,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub power: Option<PowerType>,
    /// Power draw in kW
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumption: Option<QuantityMap>,
}

/// Energy type of a machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerType {
    Electric,
}

/// Belt or pipe capability block of an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportCaps {
    /// Throughput per second
    pub speed: Number,
}

/// A consolidated recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub category: String,
    pub row: u32,
    /// Duration in seconds
    pub time: Number,
    /// Slugs of every machine that runs this recipe
    pub producers: Vec<String>,
    pub cost: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(rename = "in")]
    pub inputs: QuantityMap,
    #[serde(rename = "out")]
    pub outputs: QuantityMap,
}

/// Calculator defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defaults {
    pub mod_ids: Vec<String>,
    pub beacon: Option<String>,
    pub min_belt: Option<String>,
    pub max_belt: Option<String>,
    pub min_pipe: Option<String>,
    pub max_pipe: Option<String>,
    pub fuel: Option<String>,
    pub disabled_recipes: Vec<String>,
    pub min_machine_rank: Vec<String>,
    pub max_machine_rank: Vec<String>,
    pub module_rank: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_optional_fields_omitted() {
        let item = Item::new("iron-ore", "Iron ore", "loose");
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({"id": "iron-ore", "name": "Iron ore", "category": "loose", "row": 0})
        );
    }

    #[test]
    fn test_recipe_key_names() {
        let recipe = Recipe {
            id: "smelt".to_string(),
            name: "Smelt".to_string(),
            category: "recipes".to_string(),
            row: 0,
            time: Number::from(2),
            producers: vec!["furnace".to_string()],
            cost: RECIPE_COST,
            icon: None,
            inputs: QuantityMap::new(),
            outputs: QuantityMap::new(),
        };
        let value = serde_json::to_value(&recipe).unwrap();
        assert_eq!(value["in"], json!({}));
        assert_eq!(value["out"], json!({}));
        assert!(value.get("icon").is_none());
        assert_eq!(value["time"], json!(2));
    }

    #[test]
    fn test_defaults_keep_nulls() {
        let value = serde_json::to_value(Defaults::default()).unwrap();
        assert_eq!(value["minBelt"], serde_json::Value::Null);
        assert_eq!(value["moduleRank"], json!([]));
        assert_eq!(value["modIds"], json!([]));
    }

    #[test]
    fn test_machine_power_type() {
        let caps = MachineCaps {
            speed: Number::from(1),
            power: Some(PowerType::Electric),
            usage: Some(Number::from(400)),
            consumption: None,
        };
        assert_eq!(
            serde_json::to_value(&caps).unwrap(),
            json!({"speed": 1, "type": "electric", "usage": 400})
        );
    }
}
