/// Upper bound on how many of a single item a combo may contain.
pub const MAX_QUANTITY: u32 = 15;

/// Prefix of every decision variable name; chart labels strip it again.
pub const VARIABLE_PREFIX: &str = "MenuItems_";

/// Sodium limits are entered in grams but the menu lists milligrams.
pub const MG_PER_G: f64 = 1000.0;

// ─────────────────────────────────────────────────────────────────────────────
// Default limits for a combo
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_TOTAL_FAT_MAX: f64 = 70.0;
pub const DEFAULT_SATURATED_FAT_MAX: f64 = 20.0;
pub const DEFAULT_SUGAR_MIN: f64 = 80.0;
pub const DEFAULT_SUGAR_MAX: f64 = 100.0;
pub const DEFAULT_CARBOHYDRATES_MIN: f64 = 260.0;
pub const DEFAULT_PROTEIN_MIN: f64 = 45.0;
pub const DEFAULT_PROTEIN_MAX: f64 = 85.0;

/// Grams; becomes 10 000 mg.
pub const DEFAULT_SODIUM_MAX_G: f64 = 10.0;

// ─────────────────────────────────────────────────────────────────────────────
// Constraint names
// ─────────────────────────────────────────────────────────────────────────────

pub const LOWER_SUFFIX: &str = "_lower";
pub const UPPER_SUFFIX: &str = "_upper";
