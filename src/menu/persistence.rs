use std::path::Path;

use log::debug;

use crate::error::{ComboError, Result};
use crate::menu::MenuTable;
use crate::models::{MenuItem, MENU_COLUMNS};

/// Load the menu table from a CSV file.
///
/// The header must match the fixed column schema. Duplicate names keep their
/// first occurrence.
pub fn load_menu<P: AsRef<Path>>(path: P) -> Result<MenuTable> {
    let mut rdr = csv::Reader::from_path(path)?;

    let headers = rdr.headers()?;
    if !headers.iter().eq(MENU_COLUMNS.iter().copied()) {
        return Err(ComboError::InvalidInput(format!(
            "Unexpected menu header: {}",
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    let mut items = Vec::new();
    for record in rdr.deserialize() {
        let item: MenuItem = record?;
        if let Some(nutrient) = item.invalid_nutrient() {
            return Err(ComboError::MalformedField {
                value: item.get(nutrient).to_string(),
                field: nutrient.column().to_string(),
                item: item.name,
            });
        }
        items.push(item);
    }

    debug!("Read {} menu rows", items.len());
    Ok(MenuTable::new(items))
}

/// Save the menu table as CSV with the fixed header.
pub fn save_menu<P: AsRef<Path>>(path: P, menu: &MenuTable) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    // serialize() only emits the header for the first record
    if menu.is_empty() {
        wtr.write_record(MENU_COLUMNS)?;
    }
    for item in menu.iter() {
        wtr.serialize(item)?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "Menu Item,Calories,Total Fat (g),Saturated Fat (g),Trans Fat (g),Cholesterol (mg),Sodium (mg),Carbohydrates (g),Dietary Fiber (g),Sugars (g),Added Sugars (g),Protein (g)";

    #[test]
    fn test_load_and_save_roundtrip() {
        let csv = format!(
            "{HEADER}\nCrunchy Taco,170,9,3.5,0,25,310,13,3,1,0,8\nBean Burrito,350,9,3.5,0,5,1040,54,9,3,0,13\n"
        );

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let menu = load_menu(file.path()).unwrap();
        assert_eq!(menu.names(), vec!["Crunchy Taco", "Bean Burrito"]);
        assert_eq!(menu.get("Crunchy Taco").unwrap().saturated_fat, 3.5);

        let out_file = NamedTempFile::new().unwrap();
        save_menu(out_file.path(), &menu).unwrap();

        let reloaded = load_menu(out_file.path()).unwrap();
        assert_eq!(reloaded.items(), menu.items());
    }

    #[test]
    fn test_empty_menu_keeps_header() {
        let out_file = NamedTempFile::new().unwrap();
        save_menu(out_file.path(), &MenuTable::default()).unwrap();

        let text = std::fs::read_to_string(out_file.path()).unwrap();
        assert_eq!(text.trim_end(), HEADER);
        assert!(load_menu(out_file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_negative_value_rejected() {
        let csv = format!("{HEADER}\nOdd Item,-5,0,0,0,0,0,0,0,0,0,0\n");
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        match load_menu(file.path()) {
            Err(ComboError::MalformedField { item, field, .. }) => {
                assert_eq!(item, "Odd Item");
                assert_eq!(field, "Calories");
            }
            other => panic!("expected malformed field, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_header_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Name,Calories\nTaco,170\n").unwrap();
        assert!(matches!(
            load_menu(file.path()),
            Err(ComboError::InvalidInput(_))
        ));
    }
}
