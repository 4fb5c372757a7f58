use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::optimizer::constants::*;

/// User-adjustable nutrient limits for a combo.
///
/// Ranges are not validated: a minimum above its maximum just makes the
/// problem infeasible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacroLimits {
    pub total_fat_max: f64,
    pub saturated_fat_max: f64,
    pub sugar_min: f64,
    pub sugar_max: f64,
    pub carbohydrates_min: f64,
    pub protein_min: f64,
    pub protein_max: f64,
    /// Grams, not milligrams.
    pub sodium_max_g: f64,
}

impl Default for MacroLimits {
    fn default() -> Self {
        Self {
            total_fat_max: DEFAULT_TOTAL_FAT_MAX,
            saturated_fat_max: DEFAULT_SATURATED_FAT_MAX,
            sugar_min: DEFAULT_SUGAR_MIN,
            sugar_max: DEFAULT_SUGAR_MAX,
            carbohydrates_min: DEFAULT_CARBOHYDRATES_MIN,
            protein_min: DEFAULT_PROTEIN_MIN,
            protein_max: DEFAULT_PROTEIN_MAX,
            sodium_max_g: DEFAULT_SODIUM_MAX_G,
        }
    }
}

impl MacroLimits {
    /// Sodium bound in the menu's unit.
    pub fn sodium_max_mg(&self) -> f64 {
        self.sodium_max_g * MG_PER_G
    }
}

/// Load limits from a JSON file. Missing fields take their defaults.
pub fn load_limits<P: AsRef<Path>>(path: P) -> Result<MacroLimits> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save limits to a JSON file.
pub fn save_limits<P: AsRef<Path>>(path: P, limits: &MacroLimits) -> Result<()> {
    let json = serde_json::to_string_pretty(limits)?;
    fs::write(path, json)?;
    Ok(())
}
