//! Conversion pipeline
//!
//! [`Converter`] owns every intermediate table and runs the fixed sequence
//! load, lookups, products, machines and recipes, transports, categories,
//! icons, output. Each step finishes before the next one starts.
//!
//! # Example
//!
//! ```no_run
//! use coilab::config::{ConvertConfig, ConvertInputs};
//! use coilab::convert::convert;
//!
//! let inputs = ConvertInputs::new("products.json", "machines_and_buildings.json")
//!     .with_transports("transports.json")
//!     .with_icons("icons/");
//! let summary = convert(&inputs, &ConvertConfig::default())?;
//! println!("{} items, {} recipes", summary.items, summary.recipes);
//! # Ok::<(), coilab::Error>(())
//! ```

pub mod categories;
pub mod defaults;
pub mod items;
pub mod lookup;
pub mod recipes;
pub mod types;

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::atlas::{AtlasReport, AtlasRequest, pack_icons};
use crate::config::{ConvertConfig, ConvertInputs};
use crate::error::Result;
use crate::lab::LabData;
use crate::source::SourceCatalog;

pub use categories::{CATEGORY_ORDER, build_categories};
pub use defaults::build_defaults;
pub use items::{ItemRegistry, convert_machine, convert_product, convert_transport};
pub use lookup::{LookupTables, Resolution};
pub use recipes::{RecipeBook, RecipeOutcome};
pub use types::{ConvertPhase, ConvertProgress, ConvertProgressCallback, ConvertSummary};

/// Version written when the products document carries none
pub const FALLBACK_VERSION: &str = "0.0.0";

/// Conversion state for one run
#[derive(Debug, Clone)]
pub struct Converter {
    config: ConvertConfig,
    catalog: SourceCatalog,
    lookups: LookupTables,
    items: ItemRegistry,
    recipes: RecipeBook,
    /// Every category used by an item or recipe
    referenced: HashSet<String>,
    machine_items: usize,
}

impl Converter {
    /// Start a conversion of an already loaded catalog
    #[must_use]
    pub fn new(catalog: SourceCatalog, config: ConvertConfig) -> Self {
        let lookups = LookupTables::build(&catalog);
        Self {
            config,
            catalog,
            lookups,
            items: ItemRegistry::new(),
            recipes: RecipeBook::new(),
            referenced: HashSet::new(),
            machine_items: 0,
        }
    }

    /// Load the source documents named by `inputs`.
    ///
    /// # Errors
    /// Returns an error if a document is missing or malformed.
    pub fn load(inputs: &ConvertInputs, config: ConvertConfig) -> Result<Self> {
        let catalog = SourceCatalog::load(
            &inputs.products,
            &inputs.machines,
            inputs.transports.as_deref(),
        )?;
        Ok(Self::new(catalog, config))
    }

    /// Register every product as an item.
    pub fn convert_products(&mut self, progress: ConvertProgressCallback) {
        let products = &self.catalog.products.products;
        progress(&ConvertProgress::new(ConvertPhase::Products, 0, products.len()));

        for product in products {
            let (item, hint) = convert_product(product);
            let category = item.category.clone();
            if self.items.register(item, hint) {
                self.referenced.insert(category);
            }
        }
        tracing::info!("Converted {} products", products.len());
    }

    /// Register machines that run at least one recipe, then fold their
    /// recipes into the recipe book.
    pub fn convert_machines(&mut self, progress: ConvertProgressCallback) {
        let machines = &self.catalog.machines.machines_and_buildings;
        let total = machines.len();
        progress(&ConvertProgress::new(ConvertPhase::Machines, 0, total));

        for (idx, machine) in machines.iter().enumerate() {
            progress(&ConvertProgress::with_item(
                ConvertPhase::Machines,
                idx + 1,
                total,
                &machine.name,
            ));

            if machine.recipes.is_empty() {
                tracing::debug!("Skipping machine '{}' without recipes", machine.id);
                continue;
            }

            let (item, hint) = convert_machine(machine, &self.lookups, &self.config);
            let producer = item.id.clone();
            let category = item.category.clone();
            if self.items.register(item, hint) {
                self.referenced.insert(category);
                self.machine_items += 1;
            }

            for record in &machine.recipes {
                let outcome = self.recipes.add(record, &producer, &self.lookups, &self.items);
                if let RecipeOutcome::Created { index } = outcome {
                    self.referenced
                        .insert(self.recipes.recipes()[index].category.clone());
                }
            }
        }
        tracing::info!(
            "Converted {} machines into {} recipes",
            self.machine_items,
            self.recipes.len()
        );
    }

    /// Register belts, pipes and other transports not already present.
    pub fn convert_transports(&mut self, progress: ConvertProgressCallback) {
        let Some(document) = &self.catalog.transports else {
            tracing::debug!("No transports document, skipping transports");
            return;
        };
        progress(&ConvertProgress::new(
            ConvertPhase::Transports,
            0,
            document.transports.len(),
        ));

        let mut added = 0usize;
        for transport in &document.transports {
            let (item, hint) = convert_transport(transport);
            let category = item.category.clone();
            if self.items.register(item, hint) {
                self.referenced.insert(category);
                added += 1;
            }
        }
        tracing::info!("Converted {added} transports");
    }

    /// Pack the sprite sheet into `output_dir`, updating icon positions and
    /// colors. Does nothing to the icons when there is no icon folder.
    ///
    /// # Errors
    /// Returns an error if the icon folder cannot be read or the sheet cannot
    /// be written.
    pub fn pack_icons(&mut self, icon_folder: Option<&Path>, output_dir: &Path) -> Result<AtlasReport> {
        let stems: Vec<String> = self
            .items
            .icons()
            .iter()
            .map(|icon| self.items.icon_hint(&icon.id).to_lowercase())
            .collect();
        let sheet_path = output_dir.join(&self.config.sheet_file);
        let request = AtlasRequest {
            icon_folder,
            sheet_path: &sheet_path,
            tile_size: self.config.icon_size,
        };
        pack_icons(self.items.icons_mut(), &stems, &request)
    }

    /// Number of items created from machines
    #[must_use]
    pub fn machine_items(&self) -> usize {
        self.machine_items
    }

    #[must_use]
    pub fn items(&self) -> &ItemRegistry {
        &self.items
    }

    #[must_use]
    pub fn recipes(&self) -> &RecipeBook {
        &self.recipes
    }

    #[must_use]
    pub fn lookups(&self) -> &LookupTables {
        &self.lookups
    }

    /// Assemble the final catalog document.
    #[must_use]
    pub fn into_lab_data(self) -> LabData {
        let categories = build_categories(&self.referenced, self.items.items());
        let defaults = build_defaults(self.catalog.transports.as_ref());
        let version = self
            .catalog
            .game_version()
            .unwrap_or(FALLBACK_VERSION)
            .to_string();
        let (items, icons) = self.items.into_parts();

        LabData {
            version,
            categories,
            icons,
            items,
            recipes: self.recipes.into_recipes(),
            defaults,
        }
    }
}

/// Write `data` as pretty-printed JSON to `output_dir/file_name`, creating
/// the directory if needed. Returns the written path.
///
/// # Errors
/// Returns an error if the directory or file cannot be written.
pub fn write_output(data: &LabData, output_dir: &Path, file_name: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(file_name);

    let mut writer = BufWriter::new(File::create(&path)?);
    serde_json::to_writer_pretty(&mut writer, data)?;
    writer.flush()?;

    tracing::info!("Wrote {}", path.display());
    Ok(path)
}

/// Run a full conversion.
///
/// # Errors
/// Returns an error if a source document is missing or malformed, or an
/// output cannot be written.
pub fn convert(inputs: &ConvertInputs, config: &ConvertConfig) -> Result<ConvertSummary> {
    convert_with_progress(inputs, config, &|_| {})
}

/// Run a full conversion, reporting each phase to `progress`.
///
/// # Errors
/// Returns an error if the config is invalid, a source document is missing
/// or malformed, or an output cannot be written.
pub fn convert_with_progress(
    inputs: &ConvertInputs,
    config: &ConvertConfig,
    progress: ConvertProgressCallback,
) -> Result<ConvertSummary> {
    config.validate()?;

    progress(&ConvertProgress::new(ConvertPhase::Loading, 0, 0));
    let mut converter = Converter::load(inputs, config.clone())?;
    let recipe_records = converter.catalog.recipe_record_count();

    converter.convert_products(progress);
    converter.convert_machines(progress);
    converter.convert_transports(progress);

    progress(&ConvertProgress::new(
        ConvertPhase::Categories,
        0,
        converter.referenced.len(),
    ));

    progress(&ConvertProgress::new(
        ConvertPhase::Icons,
        0,
        converter.items.icons().len(),
    ));
    std::fs::create_dir_all(&inputs.output)?;
    let atlas = converter.pack_icons(inputs.icons.as_deref(), &inputs.output)?;
    let machine_items = converter.machine_items();

    let data = converter.into_lab_data();
    progress(&ConvertProgress::new(ConvertPhase::Writing, 0, 1));
    let data_path = write_output(&data, &inputs.output, &config.data_file)?;

    let summary = ConvertSummary {
        version: data.version,
        data_path,
        categories: data.categories.len(),
        icons: data.icons.len(),
        items: data.items.len(),
        machine_items,
        recipes: data.recipes.len(),
        recipe_records,
        atlas,
    };
    progress(&ConvertProgress::new(ConvertPhase::Complete, 1, 1));

    tracing::info!(
        categories = summary.categories,
        icons = summary.icons,
        items = summary.items,
        recipes = summary.recipes,
        "Conversion complete"
    );
    Ok(summary)
}
