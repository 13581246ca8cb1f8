//! CLI progress display utilities
//!
//! Step lines with emojis for the conversion phases, plus the summary
//! table printed at the end of a run.

use std::time::Duration;

use console::{Emoji, style};
use indicatif::HumanDuration;

use crate::convert::ConvertPhase;

// =============================================================================
// Emoji Constants (with ASCII fallbacks for terminals without emoji support)
// =============================================================================

/// Magnifying glass - for reading/scanning operations
pub static LOOKING_GLASS: Emoji<'_, '_> = Emoji("🔍 ", "");
/// Gear - for processing/conversion operations
pub static GEAR: Emoji<'_, '_> = Emoji("⚙️  ", "");
/// Factory - for machines and recipes
pub static FACTORY: Emoji<'_, '_> = Emoji("🏭 ", "");
/// Truck - for transports
pub static TRUCK: Emoji<'_, '_> = Emoji("🚚 ", "");
/// Link - for linking/indexing operations
pub static LINK: Emoji<'_, '_> = Emoji("🔗 ", "");
/// Picture - for texture/image operations
pub static PICTURE: Emoji<'_, '_> = Emoji("🖼️  ", "");
/// Floppy disk - for writing/saving operations
pub static DISK: Emoji<'_, '_> = Emoji("💾 ", "");
/// Sparkles - for completion
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");

// =============================================================================
// Step-Based Progress
// =============================================================================

/// Print a step indicator: `[1/7] 🔍 Message...`
pub fn print_step(current: usize, total: usize, emoji: Emoji, msg: &str) {
    println!(
        "{} {}{}",
        style(format!("[{current}/{total}]")).bold().dim(),
        emoji,
        msg
    );
}

/// Print the step line for the start of a conversion phase
pub fn print_phase(phase: ConvertPhase) {
    if phase == ConvertPhase::Complete {
        return;
    }
    print_step(
        phase.step(),
        ConvertPhase::STEPS,
        phase_emoji(phase),
        &format!("{}...", phase.as_str()),
    );
}

/// Print completion message: `✨ Done in 2s`
pub fn print_done(elapsed: Duration) {
    println!("{} Done in {}", SPARKLE, HumanDuration(elapsed));
}

/// Print one aligned `label: value` summary line
pub fn print_stat(label: &str, value: impl std::fmt::Display) {
    println!("  {:<12} {}", style(format!("{label}:")).dim(), value);
}

fn phase_emoji(phase: ConvertPhase) -> Emoji<'static, 'static> {
    match phase {
        ConvertPhase::Loading => LOOKING_GLASS,
        ConvertPhase::Products => GEAR,
        ConvertPhase::Machines => FACTORY,
        ConvertPhase::Transports => TRUCK,
        ConvertPhase::Categories => LINK,
        ConvertPhase::Icons => PICTURE,
        ConvertPhase::Writing => DISK,
        ConvertPhase::Complete => SPARKLE,
    }
}
