//! CLI interface for the catalog conversion
use std::path::Path;
use std::time::Instant;

use anyhow::Context;

use crate::atlas::AtlasReport;
use crate::cli::progress::{print_done, print_phase, print_stat};
use crate::config::{ConvertConfig, ConvertInputs};
use crate::convert::{ConvertProgress, ConvertSummary, convert_with_progress};

/// Arguments of `coilab convert`
pub struct ConvertArgs<'a> {
    pub products: &'a Path,
    pub machines: &'a Path,
    pub transports: Option<&'a Path>,
    pub icons: Option<&'a Path>,
    pub output: &'a Path,
    pub icon_size: Option<u32>,
    pub config: Option<&'a Path>,
    pub machine_consumption: bool,
    pub quiet: bool,
}

pub fn execute(args: &ConvertArgs<'_>) -> anyhow::Result<()> {
    let config = resolve_config(args)?;

    let mut inputs = ConvertInputs::new(args.products, args.machines).with_output(args.output);
    if let Some(path) = args.transports {
        inputs = inputs.with_transports(path);
    }
    if let Some(path) = args.icons {
        inputs = inputs.with_icons(path);
    }

    let started = Instant::now();
    let quiet = args.quiet;
    let progress = move |update: &ConvertProgress| {
        if !quiet && update.is_phase_start() {
            print_phase(update.phase);
        }
    };

    let summary = convert_with_progress(&inputs, &config, &progress)
        .with_context(|| format!("Failed to convert {}", args.products.display()))?;

    if !quiet {
        print_summary(&summary);
        print_done(started.elapsed());
    }
    Ok(())
}

/// Config file values with command-line overrides applied
fn resolve_config(args: &ConvertArgs<'_>) -> anyhow::Result<ConvertConfig> {
    let mut config = match args.config {
        Some(path) => ConvertConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ConvertConfig::default(),
    };
    if let Some(size) = args.icon_size {
        config.icon_size = size;
    }
    if args.machine_consumption {
        config.machine_consumption = true;
    }
    config.validate().context("Invalid options")?;
    Ok(config)
}

fn print_summary(summary: &ConvertSummary) {
    println!();
    print_stat("Version", &summary.version);
    print_stat("Categories", summary.categories);
    print_stat("Items", summary.items);
    print_stat("Machines", summary.machine_items);
    print_stat(
        "Recipes",
        format!("{} (from {} records)", summary.recipes, summary.recipe_records),
    );
    print_stat("Icons", summary.icons);
    match &summary.atlas {
        AtlasReport::Skipped(reason) => print_stat("Sheet", format!("skipped, {}", reason.as_str())),
        AtlasReport::Packed { .. } => {
            print_stat(
                "Sheet",
                format!(
                    "{} placed, {} missing, {} failed",
                    summary.atlas.placed(),
                    summary.atlas.missing(),
                    summary.atlas.failed()
                ),
            );
        }
    }
    print_stat("Data", summary.data_path.display());
    if let Some(sheet) = summary.sheet_path() {
        print_stat("Sprites", sheet.display());
    }
}
