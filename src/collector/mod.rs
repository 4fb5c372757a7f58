pub mod clean;
pub mod fetch;
pub mod parse;

pub use clean::{
    build_menu, clean_value, is_beverage, parse_nutrient, retain_food, row_to_item,
    BEVERAGE_KEYWORDS,
};
pub use fetch::{fetch_html, read_html, DEFAULT_MENU_URL};
pub use parse::{extract_rows, ROW_CLASSES};

use log::info;

use crate::error::Result;
use crate::menu::MenuTable;

/// Parse a nutrition grid page all the way to a cleaned menu table.
pub fn collect_menu(html: &str, keep_beverages: bool) -> Result<MenuTable> {
    let rows = extract_rows(html)?;
    let menu = build_menu(&rows, keep_beverages)?;
    info!(
        "Collected {} items ({} rows scraped)",
        menu.len(),
        rows.len()
    );
    Ok(menu)
}
