//! CLI interface for inspecting the export documents
use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;

use crate::cli::progress::print_stat;
use crate::source::SourceCatalog;

pub fn execute(products: &Path, machines: &Path, transports: Option<&Path>) -> anyhow::Result<()> {
    let catalog = SourceCatalog::load(products, machines, transports)
        .context("Failed to load source documents")?;

    let machine_records = &catalog.machines.machines_and_buildings;
    let with_recipes = machine_records.iter().filter(|m| !m.recipes.is_empty()).count();

    print_stat("Game", catalog.game_version().unwrap_or("unknown"));
    print_stat("Products", catalog.products.products.len());
    print_stat(
        "Machines",
        format!("{} ({with_recipes} with recipes)", machine_records.len()),
    );
    print_stat("Recipes", catalog.recipe_record_count());
    print_stat("Transports", catalog.transport_count());

    let mut by_type: BTreeMap<&str, usize> = BTreeMap::new();
    for product in &catalog.products.products {
        *by_type.entry(product.product_type.as_str()).or_default() += 1;
    }
    if !by_type.is_empty() {
        println!("\nProduct types:");
        for (kind, count) in by_type {
            println!("  {kind}: {count}");
        }
    }

    let mut by_category: BTreeMap<&str, usize> = BTreeMap::new();
    for machine in machine_records {
        *by_category.entry(machine.category.as_str()).or_default() += 1;
    }
    if !by_category.is_empty() {
        println!("\nMachine categories:");
        for (category, count) in by_category {
            let category = if category.is_empty() { "(none)" } else { category };
            println!("  {category}: {count}");
        }
    }

    Ok(())
}
