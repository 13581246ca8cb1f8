//! Category list construction

use std::collections::{HashMap, HashSet};

use crate::lab::{Category, Item};

pub const ITEMS: &str = "items";
pub const BUILDINGS: &str = "buildings";
pub const LOGISTICS: &str = "logistics";
/// Fallback category for recipes whose icon is not a known item
pub const RECIPES: &str = "recipes";

/// Canonical tab order; only categories actually referenced are emitted
pub const CATEGORY_ORDER: [&str; 8] = [
    "virtual", ITEMS, "loose", "fluids", "molten", BUILDINGS, LOGISTICS, RECIPES,
];

/// Build the ordered category list.
///
/// `referenced` holds every category used by an item or recipe. The icon of a
/// category is the first item (in item order) that belongs to it.
#[must_use]
pub fn build_categories(referenced: &HashSet<String>, items: &[Item]) -> Vec<Category> {
    let mut first_item: HashMap<&str, &str> = HashMap::new();
    for item in items {
        first_item
            .entry(item.category.as_str())
            .or_insert(item.id.as_str());
    }

    CATEGORY_ORDER
        .iter()
        .filter(|id| referenced.contains(**id))
        .map(|id| Category {
            id: (*id).to_string(),
            name: title_case(&id.replace('-', " ")),
            icon: first_item.get(id).map(|s| (*s).to_string()),
        })
        .collect()
}

/// Uppercase the first letter of every word, lowercase the rest
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
