use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::error::{ComboError, Result};
use crate::menu::MenuTable;
use crate::models::{MenuItem, Nutrient};

/// Name fragments that mark a row as a drink rather than food.
pub const BEVERAGE_KEYWORDS: [&str; 8] = [
    "oz", "proof", "Water", "Wine", "Juice", "Coffee", "Creamer", "Milk",
];

/// Leading numeric run of a label: digits, optional decimal points, optional
/// thousands separators.
static NUMERIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]*\.*,*[0-9]+,*").expect("valid numeric pattern"));

/// Cut a raw label down to the text ending at its first numeric run.
///
/// `"370 cal"` becomes `"370"`, `"1,250mg"` becomes `"1,250"`, `"<1 g"` becomes
/// `"<1"`. Text with no digits is returned unchanged.
pub fn clean_value(raw: &str) -> &str {
    NUMERIC_RUN
        .find(raw)
        .map(|m| &raw[..m.end()])
        .unwrap_or(raw)
}

/// Turn one raw label into a nutrient amount.
///
/// Under-threshold markers (`<1`, `<5`, ...) count as zero.
pub fn parse_nutrient(item: &str, nutrient: Nutrient, raw: &str) -> Result<f64> {
    let cleaned = clean_value(raw.trim());

    let value = if cleaned.starts_with('<') {
        0.0
    } else {
        cleaned.replace(',', "").parse::<f64>().unwrap_or(f64::NAN)
    };

    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ComboError::MalformedField {
            item: item.to_string(),
            field: nutrient.column().to_string(),
            value: raw.to_string(),
        })
    }
}

/// Case-sensitive check against [`BEVERAGE_KEYWORDS`].
pub fn is_beverage(name: &str) -> bool {
    BEVERAGE_KEYWORDS.iter().any(|kw| name.contains(kw))
}

/// Drop beverage rows, keeping the others in order.
pub fn retain_food(menu: &mut MenuTable) {
    menu.retain(|item| {
        let drink = is_beverage(&item.name);
        if drink {
            debug!("Dropping beverage '{}'", item.name);
        }
        !drink
    });
}

/// Convert one scraped row (`name` then eleven labels) into a menu item.
pub fn row_to_item(row: &[String]) -> Result<MenuItem> {
    let (name, labels) = row.split_first().ok_or_else(|| ComboError::Parse {
        row: "<empty>".to_string(),
        message: "row has no cells".to_string(),
    })?;

    if labels.len() != Nutrient::ALL.len() {
        return Err(ComboError::Parse {
            row: name.clone(),
            message: format!(
                "expected {} nutrient values, found {}",
                Nutrient::ALL.len(),
                labels.len()
            ),
        });
    }

    let mut item = MenuItem::zeroed(name.clone());
    for (nutrient, raw) in Nutrient::ALL.into_iter().zip(labels) {
        *item.get_mut(nutrient) = parse_nutrient(name, nutrient, raw)?;
    }
    Ok(item)
}

/// Clean scraped rows into a menu table, dropping drinks unless asked not to.
pub fn build_menu(rows: &[Vec<String>], keep_beverages: bool) -> Result<MenuTable> {
    let items = rows
        .iter()
        .map(|row| row_to_item(row))
        .collect::<Result<Vec<_>>>()?;
    for item in &items {
        debug!("Cleaned {}", item.debug_string());
    }

    let mut menu = MenuTable::new(items);
    if !keep_beverages {
        retain_food(&mut menu);
    }
    Ok(menu)
}
