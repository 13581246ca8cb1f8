//! Recipe consolidation
//!
//! Machines in the export each list the recipes they can run, so the same
//! recipe shows up once per machine. [`RecipeBook`] folds those into one
//! catalog recipe per recipe id with a growing producer list.
//!
//! Distinct recipes can also share a display name (e.g. two "Smelting"
//! recipes fed by different ores). When that happens both recipes get a
//! distinguishing input appended: `"Smelting (Iron ore)"`. The first recipe
//! seen with a name may already be finalized and merged when the collision
//! is found, so it is renamed in place through its arena index.

use std::collections::HashMap;

use serde_json::Number;

use crate::lab::{QuantityMap, RECIPE_COST, Recipe};
use crate::slug::entity_id_to_slug;
use crate::source::{RecipeIo, RecipeRecord};

use super::categories::RECIPES;
use super::items::ItemRegistry;
use super::lookup::LookupTables;

/// What [`RecipeBook::add`] did with a recipe record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeOutcome {
    /// A new catalog recipe was appended at `index`
    Created { index: usize },
    /// The recipe id already existed; `producer_added` is false when the
    /// producer was already listed
    Merged { index: usize, producer_added: bool },
}

/// Arena of consolidated recipes
#[derive(Debug, Clone, Default)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
    /// recipe slug -> arena index
    by_id: HashMap<String, usize>,
    /// raw display name -> arena index of the first recipe with that name
    by_name: HashMap<String, usize>,
}

impl RecipeBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a recipe run by `producer`, or add `producer` to the existing
    /// recipe with the same id.
    pub fn add(
        &mut self,
        record: &RecipeRecord,
        producer: &str,
        lookups: &LookupTables,
        items: &ItemRegistry,
    ) -> RecipeOutcome {
        let slug = entity_id_to_slug(&record.id);

        if let Some(&index) = self.by_id.get(&slug) {
            let producers = &mut self.recipes[index].producers;
            let producer_added = !producers.iter().any(|p| p == producer);
            if producer_added {
                producers.push(producer.to_string());
                tracing::debug!("Recipe '{slug}' also produced by '{producer}'");
            }
            return RecipeOutcome::Merged {
                index,
                producer_added,
            };
        }

        let inputs = resolve_quantities(&record.inputs, lookups);
        let outputs = resolve_quantities(&record.outputs, lookups);

        let icon = outputs
            .keys()
            .next()
            .or_else(|| inputs.keys().next())
            .cloned();
        let category = icon
            .as_deref()
            .and_then(|icon| items.category_of(icon))
            .unwrap_or(RECIPES)
            .to_string();

        let index = self.recipes.len();
        let name = self.unique_name(&record.name, index, &inputs, lookups);

        self.recipes.push(Recipe {
            id: slug.clone(),
            name,
            category,
            row: 0,
            time: record.duration.clone().unwrap_or_else(|| Number::from(1)),
            producers: vec![producer.to_string()],
            cost: RECIPE_COST,
            icon,
            inputs,
            outputs,
        });
        self.by_id.insert(slug, index);

        RecipeOutcome::Created { index }
    }

    /// Pick the stored name for a new recipe about to land at `new_index`,
    /// renaming the first recipe with the same display name if there is one.
    fn unique_name(
        &mut self,
        name: &str,
        new_index: usize,
        inputs: &QuantityMap,
        lookups: &LookupTables,
    ) -> String {
        let Some(&existing_index) = self.by_name.get(name) else {
            self.by_name.insert(name.to_string(), new_index);
            return name.to_string();
        };

        let existing = &mut self.recipes[existing_index];
        if let Some(input) = distinguishing_input(&existing.inputs, inputs) {
            let renamed = format!("{name} ({})", lookups.product_display_name(input));
            tracing::debug!("Renaming recipe '{}' to '{renamed}'", existing.id);
            existing.name = renamed;
        }

        match distinguishing_input(inputs, &existing.inputs) {
            Some(input) => format!("{name} ({})", lookups.product_display_name(input)),
            None => name.to_string(),
        }
    }

    /// Look up a recipe by slug
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.by_id.get(id).map(|&index| &self.recipes[index])
    }

    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    #[must_use]
    pub fn into_recipes(self) -> Vec<Recipe> {
        self.recipes
    }
}

/// Input of `candidate` that best tells it apart from `other`.
///
/// The first input (in source order) that `other` lacks; when every input is
/// shared, the alphabetically smallest one. `None` only when `candidate` has
/// no inputs.
fn distinguishing_input<'a>(candidate: &'a QuantityMap, other: &QuantityMap) -> Option<&'a str> {
    candidate
        .keys()
        .find(|key| !other.contains_key(*key))
        .or_else(|| candidate.keys().min())
        .map(String::as_str)
}

/// Resolve input/output lines to slug -> quantity, missing quantities as 1
fn resolve_quantities(lines: &[RecipeIo], lookups: &LookupTables) -> QuantityMap {
    lines
        .iter()
        .map(|line| {
            let slug = lookups.resolve_product(&line.name).into_slug();
            let quantity = line.quantity.clone().unwrap_or_else(|| Number::from(1));
            (slug, quantity)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lab::Item;
    use crate::source::{ProductRecord, SourceCatalog};
    use pretty_assertions::assert_eq;

    fn lookups() -> LookupTables {
        let mut catalog = SourceCatalog::default();
        for (id, name) in [
            ("Product_IronOre", "Iron ore"),
            ("Product_CopperOre", "Copper ore"),
            ("Product_Coal", "Coal"),
            ("Product_MoltenIron", "Molten iron"),
            ("Product_MoltenCopper", "Molten copper"),
            ("Product_Slag", "Slag"),
        ] {
            catalog.products.products.push(ProductRecord {
                id: id.to_string(),
                name: name.to_string(),
                ..Default::default()
            });
        }
        LookupTables::build(&catalog)
    }

    fn items() -> ItemRegistry {
        let mut registry = ItemRegistry::new();
        registry.register(Item::new("molten-iron", "Molten iron", "molten"), "x".into());
        registry.register(Item::new("iron-ore", "Iron ore", "loose"), "x".into());
        registry
    }

    fn io(lines: &[(&str, i64)]) -> Vec<RecipeIo> {
        lines
            .iter()
            .map(|(name, qty)| RecipeIo {
                name: (*name).to_string(),
                quantity: Some(Number::from(*qty)),
            })
            .collect()
    }

    fn record(id: &str, name: &str, inputs: &[(&str, i64)], outputs: &[(&str, i64)]) -> RecipeRecord {
        RecipeRecord {
            id: id.to_string(),
            name: name.to_string(),
            duration: Some(Number::from(20)),
            inputs: io(inputs),
            outputs: io(outputs),
        }
    }

    #[test]
    fn test_merge_producers_any_order() {
        let smelt = record("SmeltIron", "Iron smelting", &[("Iron ore", 2)], &[("Molten iron", 2)]);
        let (lookups, items) = (lookups(), items());

        for order in [["furnace", "arc-furnace"], ["arc-furnace", "furnace"]] {
            let mut book = RecipeBook::new();
            assert_eq!(
                book.add(&smelt, order[0], &lookups, &items),
                RecipeOutcome::Created { index: 0 }
            );
            assert_eq!(
                book.add(&smelt, order[1], &lookups, &items),
                RecipeOutcome::Merged { index: 0, producer_added: true }
            );
            assert_eq!(
                book.add(&smelt, order[0], &lookups, &items),
                RecipeOutcome::Merged { index: 0, producer_added: false }
            );

            assert_eq!(book.len(), 1);
            let recipe = book.get("smelt-iron").unwrap();
            assert_eq!(recipe.producers, order);
            assert_eq!(recipe.name, "Iron smelting");
        }
    }

    #[test]
    fn test_created_recipe_fields() {
        let mut book = RecipeBook::new();
        book.add(
            &record("SmeltIron", "Iron smelting", &[("Iron ore", 2), ("Coal", 1)], &[("Molten iron", 2), ("Slag", 1)]),
            "furnace",
            &lookups(),
            &items(),
        );
        let recipe = &book.recipes()[0];
        assert_eq!(recipe.id, "smelt-iron");
        assert_eq!(recipe.icon.as_deref(), Some("molten-iron"));
        assert_eq!(recipe.category, "molten");
        assert_eq!(recipe.cost, 100);
        assert_eq!(recipe.time, Number::from(20));
        let inputs: Vec<_> = recipe.inputs.keys().map(String::as_str).collect();
        assert_eq!(inputs, ["iron-ore", "coal"]);
        assert_eq!(recipe.outputs["slag"], Number::from(1));
    }

    #[test]
    fn test_icon_falls_back_to_input_and_category_to_recipes() {
        let mut book = RecipeBook::new();
        book.add(&record("Dump", "Dumping", &[("Coal", 5)], &[]), "dump", &lookups(), &items());
        let recipe = &book.recipes()[0];
        assert_eq!(recipe.icon.as_deref(), Some("coal"));
        // coal is a known product but not a registered item here
        assert_eq!(recipe.category, "recipes");
    }

    #[test]
    fn test_unknown_product_slugified() {
        let mut book = RecipeBook::new();
        book.add(&record("Goo", "Goo", &[("Mystery Goo!", 1)], &[]), "vat", &lookups(), &items());
        assert!(book.recipes()[0].inputs.contains_key("mystery-goo"));
    }

    #[test]
    fn test_missing_quantity_and_duration_default() {
        let mut book = RecipeBook::new();
        let raw = RecipeRecord {
            id: "Sparse".to_string(),
            name: "Sparse".to_string(),
            duration: None,
            inputs: vec![RecipeIo {
                name: "Coal".to_string(),
                quantity: None,
            }],
            outputs: Vec::new(),
        };
        book.add(&raw, "m", &lookups(), &items());
        let recipe = &book.recipes()[0];
        assert_eq!(recipe.inputs["coal"], Number::from(1));
        assert_eq!(recipe.time, Number::from(1));
    }

    #[test]
    fn test_empty_recipe() {
        let mut book = RecipeBook::new();
        book.add(&record("Idle", "Idle", &[], &[]), "m", &lookups(), &items());
        let value = serde_json::to_value(&book.recipes()[0]).unwrap();
        assert_eq!(value["in"], serde_json::json!({}));
        assert_eq!(value["out"], serde_json::json!({}));
        assert!(value.get("icon").is_none());
        assert_eq!(value["category"], "recipes");
    }

    #[test]
    fn test_name_collision_renames_both() {
        let (lookups, items) = (lookups(), items());
        let mut book = RecipeBook::new();
        book.add(&record("SmeltIron", "Smelting", &[("Iron ore", 2)], &[("Molten iron", 2)]), "furnace", &lookups, &items);
        book.add(&record("SmeltCopper", "Smelting", &[("Copper ore", 2)], &[("Molten copper", 2)]), "furnace", &lookups, &items);

        let names: Vec<_> = book.recipes().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Smelting (Iron ore)", "Smelting (Copper ore)"]);
    }

    #[test]
    fn test_rename_after_merge() {
        let (lookups, items) = (lookups(), items());
        let mut book = RecipeBook::new();
        let iron = record("SmeltIron", "Smelting", &[("Iron ore", 2), ("Coal", 1)], &[("Molten iron", 2)]);
        book.add(&iron, "furnace", &lookups, &items);
        book.add(&iron, "arc-furnace", &lookups, &items);
        book.add(&record("SmeltCopper", "Smelting", &[("Copper ore", 2), ("Coal", 1)], &[]), "furnace", &lookups, &items);

        let first = book.get("smelt-iron").unwrap();
        assert_eq!(first.name, "Smelting (Iron ore)");
        assert_eq!(first.producers, ["furnace", "arc-furnace"]);
        assert_eq!(book.get("smelt-copper").unwrap().name, "Smelting (Copper ore)");
    }

    #[test]
    fn test_shared_inputs_fall_back_alphabetically() {
        let (lookups, items) = (lookups(), items());
        let mut book = RecipeBook::new();
        book.add(&record("A", "Mix", &[("Iron ore", 1), ("Coal", 1)], &[("Slag", 1)]), "m", &lookups, &items);
        book.add(&record("B", "Mix", &[("Iron ore", 3), ("Coal", 3)], &[("Slag", 4)]), "m", &lookups, &items);

        // Same input set: both use the alphabetically smallest input, "coal"
        assert_eq!(book.get("a").unwrap().name, "Mix (Coal)");
        assert_eq!(book.get("b").unwrap().name, "Mix (Coal)");
    }

    #[test]
    fn test_new_recipe_without_inputs_keeps_name() {
        let (lookups, items) = (lookups(), items());
        let mut book = RecipeBook::new();
        book.add(&record("Mine", "Mining", &[("Coal", 1)], &[("Iron ore", 1)]), "m", &lookups, &items);
        book.add(&record("MineFree", "Mining", &[], &[("Iron ore", 1)]), "m", &lookups, &items);

        assert_eq!(book.get("mine").unwrap().name, "Mining (Coal)");
        assert_eq!(book.get("mine-free").unwrap().name, "Mining");
    }

    #[test]
    fn test_existing_without_inputs_not_renamed() {
        let (lookups, items) = (lookups(), items());
        let mut book = RecipeBook::new();
        book.add(&record("MineFree", "Mining", &[], &[("Iron ore", 1)]), "m", &lookups, &items);
        book.add(&record("Mine", "Mining", &[("Coal", 1)], &[("Iron ore", 1)]), "m", &lookups, &items);

        assert_eq!(book.get("mine-free").unwrap().name, "Mining");
        assert_eq!(book.get("mine").unwrap().name, "Mining (Coal)");
    }

    #[test]
    fn test_third_collision_compares_against_first() {
        let (lookups, items) = (lookups(), items());
        let mut book = RecipeBook::new();
        book.add(&record("S1", "Smelting", &[("Iron ore", 1)], &[]), "m", &lookups, &items);
        book.add(&record("S2", "Smelting", &[("Copper ore", 1)], &[]), "m", &lookups, &items);
        book.add(&record("S3", "Smelting", &[("Iron ore", 1), ("Coal", 1)], &[]), "m", &lookups, &items);

        assert_eq!(book.get("s1").unwrap().name, "Smelting (Iron ore)");
        assert_eq!(book.get("s2").unwrap().name, "Smelting (Copper ore)");
        // Coal is the input S1 lacks
        assert_eq!(book.get("s3").unwrap().name, "Smelting (Coal)");
    }
}
