//! Slug normalization for catalog identifiers
//!
//! Display names and raw game ids are turned into the lowercase, hyphenated
//! ids used throughout the FactorioLab document.
//!
//! - [`slugify`] - display names (`"Iron ore"` -> `"iron-ore"`)
//! - [`entity_id_to_slug`] - camel-case ids (`"FoodMill"` -> `"food-mill"`)
//! - [`product_id_to_slug`] - product ids (`"Product_IronOre"` -> `"iron-ore"`)

use std::sync::LazyLock;

use regex::Regex;

/// Prefix carried by every product id in the export.
const PRODUCT_PREFIX: &str = "Product_";
/// Second prefix for virtual products (`Product_Virtual_Electricity`).
const VIRTUAL_PREFIX: &str = "Virtual_";

static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"));
static LOWER_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("valid regex"));
static ACRONYM_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("valid regex"));

/// Convert a display name to a slug.
///
/// Lowercases, collapses every run of non-alphanumeric characters into a
/// single hyphen and trims hyphens from both ends. Empty or fully
/// non-alphanumeric input yields an empty string.
#[must_use]
pub fn slugify(name: &str) -> String {
    let lower = name.to_lowercase();
    NON_ALNUM
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

/// Convert a camel-case entity id (machine, recipe, transport) to a slug.
///
/// Splits `aB` boundaries and acronym-to-word boundaries (`ABCWord` ->
/// `ABC-Word`), then lowercases.
#[must_use]
pub fn entity_id_to_slug(raw_id: &str) -> String {
    split_camel_case(raw_id).to_lowercase()
}

/// Convert a product id to a slug.
///
/// Strips the `Product_` prefix and, for virtual products, the `Virtual_`
/// prefix before splitting camel case.
#[must_use]
pub fn product_id_to_slug(raw_id: &str) -> String {
    let id = raw_id.strip_prefix(PRODUCT_PREFIX).unwrap_or(raw_id);
    let id = id.strip_prefix(VIRTUAL_PREFIX).unwrap_or(id);
    entity_id_to_slug(id)
}

fn split_camel_case(raw_id: &str) -> String {
    let split = LOWER_UPPER.replace_all(raw_id, "$1-$2");
    ACRONYM_WORD.replace_all(&split, "$1-$2").into_owned()
}
