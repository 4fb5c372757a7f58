use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::optimizer::MacroLimits;

/// tbell_combo — find the lowest-calorie Taco Bell combo that meets your macro limits.
#[derive(Parser, Debug)]
#[command(name = "tbell_combo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the menu CSV written by the scraper.
    #[arg(short, long, default_value = "tbell_menu.csv")]
    pub file: PathBuf,

    /// JSON file with saved limits (used as defaults when present).
    #[arg(short, long)]
    pub limits: Option<PathBuf>,

    /// Where to write the bubble chart (SVG).
    #[arg(short, long, default_value = "tbell_combo.svg")]
    pub chart: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve once with the given limits and print the combo.
    Solve(LimitArgs),

    /// Interactively adjust limits and re-solve until done.
    Dashboard,
}

impl Default for Command {
    fn default() -> Self {
        Command::Solve(LimitArgs::default())
    }
}

/// Per-limit overrides; unset flags keep the loaded or default value.
#[derive(Args, Debug, Default, Clone)]
pub struct LimitArgs {
    /// Total fat maximum (g).
    #[arg(long)]
    pub total_fat_max: Option<f64>,

    /// Saturated fat maximum (g).
    #[arg(long)]
    pub saturated_fat_max: Option<f64>,

    /// Sugar minimum (g).
    #[arg(long)]
    pub sugar_min: Option<f64>,

    /// Sugar maximum (g).
    #[arg(long)]
    pub sugar_max: Option<f64>,

    /// Carbohydrates minimum (g).
    #[arg(long)]
    pub carbs_min: Option<f64>,

    /// Protein minimum (g).
    #[arg(long)]
    pub protein_min: Option<f64>,

    /// Protein maximum (g).
    #[arg(long)]
    pub protein_max: Option<f64>,

    /// Sodium maximum, in grams.
    #[arg(long)]
    pub sodium_max: Option<f64>,
}

impl LimitArgs {
    /// Apply the flags that were given on top of `base`.
    pub fn apply(&self, base: MacroLimits) -> MacroLimits {
        MacroLimits {
            total_fat_max: self.total_fat_max.unwrap_or(base.total_fat_max),
            saturated_fat_max: self.saturated_fat_max.unwrap_or(base.saturated_fat_max),
            sugar_min: self.sugar_min.unwrap_or(base.sugar_min),
            sugar_max: self.sugar_max.unwrap_or(base.sugar_max),
            carbohydrates_min: self.carbs_min.unwrap_or(base.carbohydrates_min),
            protein_min: self.protein_min.unwrap_or(base.protein_min),
            protein_max: self.protein_max.unwrap_or(base.protein_max),
            sodium_max_g: self.sodium_max.unwrap_or(base.sodium_max_g),
        }
    }
}
