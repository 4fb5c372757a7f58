use dialoguer::{Confirm, Input};

use crate::error::{ComboError, Result};
use crate::optimizer::MacroLimits;

/// Prompt for a number, offering `default` as the pre-filled answer.
pub fn prompt_number(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| ComboError::InvalidInput(format!("Invalid number for '{}': {}", prompt, input)))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Walk through every limit, using `current` as the defaults.
pub fn prompt_limits(current: &MacroLimits) -> Result<MacroLimits> {
    println!("Limits for Combo");

    Ok(MacroLimits {
        total_fat_max: prompt_number("Total Fat Max", current.total_fat_max)?,
        saturated_fat_max: prompt_number("Saturated Fat Max", current.saturated_fat_max)?,
        sugar_min: prompt_number("Sugar Min", current.sugar_min)?,
        sugar_max: prompt_number("Sugar Max", current.sugar_max)?,
        carbohydrates_min: prompt_number("Carbohydrates Min", current.carbohydrates_min)?,
        protein_min: prompt_number("Protein Min", current.protein_min)?,
        protein_max: prompt_number("Protein Max", current.protein_max)?,
        sodium_max_g: prompt_number("Sodium Max (g)", current.sodium_max_g)?,
    })
}
