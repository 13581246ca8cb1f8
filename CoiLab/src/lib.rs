//! # CoiLab
//!
//! Converts the JSON catalog exported from Captain of Industry (by the
//! captain-of-data mod) into a FactorioLab `data.json` and an icon sprite
//! sheet.
//!
//! ## What it does
//!
//! - **Items** - products, machines and transports become catalog items
//! - **Recipes** - the per-machine recipe lists are consolidated into one
//!   recipe per id with every producing machine, and recipes sharing a
//!   display name are renamed after a distinguishing input
//! - **Categories and defaults** - ordered category tabs, slowest and
//!   fastest belt and pipe
//! - **Icons** - image files are packed into a 16-column sprite sheet with
//!   per-icon positions and average colors
//!
//! ## Quick Start
//!
//! ```no_run
//! use coilab::prelude::*;
//!
//! let inputs = ConvertInputs::new("products.json", "machines_and_buildings.json")
//!     .with_transports("transports.json")
//!     .with_icons("Assets/")
//!     .with_output("factoriolab_output");
//! let summary = convert(&inputs, &ConvertConfig::default())?;
//! println!(
//!     "{} items, {} recipes, {} icons placed",
//!     summary.items,
//!     summary.recipes,
//!     summary.atlas.placed()
//! );
//! # Ok::<(), coilab::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `atlas` (default) - sprite sheet packing via the `image` crate. Without
//!   it icons keep their placeholder position and no sheet is written.
//! - `cli` (default) - Enables the `coilab` command-line binary

pub mod atlas;
pub mod config;
pub mod convert;
pub mod error;
pub mod lab;
pub mod slug;
pub mod source;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};

    pub use crate::config::{ConvertConfig, ConvertInputs, DEFAULT_ICON_SIZE};
    pub use crate::convert::{
        ConvertPhase, ConvertProgress, ConvertSummary, Converter, convert, convert_with_progress,
        write_output,
    };
    pub use crate::lab::{Category, Defaults, Icon, Item, LabData, Recipe};
    pub use crate::source::SourceCatalog;

    // Sprite sheet exports
    pub use crate::atlas::{AtlasReport, SkipReason, TileOutcome};

    pub use crate::slug::{entity_id_to_slug, product_id_to_slug, slugify};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
