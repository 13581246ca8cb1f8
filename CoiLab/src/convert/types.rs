//! Types for conversion progress tracking and results

use std::path::PathBuf;

use crate::atlas::AtlasReport;

/// Progress callback type for conversion runs
pub type ConvertProgressCallback<'a> = &'a (dyn Fn(&ConvertProgress) + Sync + Send);

/// Progress information during a conversion
#[derive(Debug, Clone)]
pub struct ConvertProgress {
    /// Current pipeline phase
    pub phase: ConvertPhase,
    /// Current record number (1-indexed), 0 when the phase starts
    pub current: usize,
    /// Number of records in this phase
    pub total: usize,
    /// Name of the record being processed (if applicable)
    pub current_item: Option<String>,
}

impl ConvertProgress {
    /// Create a new progress update
    #[must_use]
    pub fn new(phase: ConvertPhase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
            current_item: None,
        }
    }

    /// Create a progress update naming the record being processed
    #[must_use]
    pub fn with_item(phase: ConvertPhase, current: usize, total: usize, item: impl Into<String>) -> Self {
        Self {
            phase,
            current,
            total,
            current_item: Some(item.into()),
        }
    }

    /// Whether this update announces the start of its phase
    #[must_use]
    pub fn is_phase_start(&self) -> bool {
        self.current == 0
    }
}

/// Phase of a conversion run, in pipeline order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertPhase {
    /// Reading the source documents
    Loading,
    /// Converting products into items
    Products,
    /// Converting machines and consolidating their recipes
    Machines,
    /// Converting belts and pipes
    Transports,
    /// Building categories and defaults
    Categories,
    /// Packing the icon sprite sheet
    Icons,
    /// Writing data.json
    Writing,
    /// Conversion complete
    Complete,
}

impl ConvertPhase {
    /// Number of phases before [`ConvertPhase::Complete`]
    pub const STEPS: usize = 7;

    /// Get a human-readable description of this phase
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "Loading source documents",
            Self::Products => "Converting products",
            Self::Machines => "Converting machines and recipes",
            Self::Transports => "Converting transports",
            Self::Categories => "Building categories",
            Self::Icons => "Packing icons",
            Self::Writing => "Writing catalog",
            Self::Complete => "Complete",
        }
    }

    /// 1-indexed step number, `STEPS` for [`ConvertPhase::Complete`]
    #[must_use]
    pub fn step(self) -> usize {
        match self {
            Self::Loading => 1,
            Self::Products => 2,
            Self::Machines => 3,
            Self::Transports => 4,
            Self::Categories => 5,
            Self::Icons => 6,
            Self::Writing | Self::Complete => 7,
        }
    }
}

/// What a conversion run produced
#[derive(Debug, Clone)]
pub struct ConvertSummary {
    /// Version written to the catalog
    pub version: String,
    /// Path of the written `data.json`
    pub data_path: PathBuf,
    pub categories: usize,
    pub icons: usize,
    pub items: usize,
    /// Items created from machines
    pub machine_items: usize,
    /// Consolidated recipes
    pub recipes: usize,
    /// Recipe records read, one per machine that lists them
    pub recipe_records: usize,
    /// Result of the sprite sheet step
    pub atlas: AtlasReport,
}

impl ConvertSummary {
    /// Path of the sprite sheet, if one was written
    #[must_use]
    pub fn sheet_path(&self) -> Option<&PathBuf> {
        match &self.atlas {
            AtlasReport::Packed { sheet, .. } => sheet.as_ref(),
            AtlasReport::Skipped(_) => None,
        }
    }
}
