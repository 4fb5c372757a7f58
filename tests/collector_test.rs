use tempfile::NamedTempFile;

use tbell_combo_rs::collector::{collect_menu, is_beverage};
use tbell_combo_rs::menu::{load_menu, save_menu};
use tbell_combo_rs::ComboError;

fn grid_row(class: &str, name: &str, labels: [&str; 11]) -> String {
    let cells: String = labels
        .iter()
        .map(|l| format!(r#"<td label="{l}" class="ar">{l}</td>"#))
        .collect();
    format!(r#"<tr class="{class}"><td class="al"><span title="{name}">{name}</span></td>{cells}</tr>"#)
}

fn nutrition_page() -> String {
    let rows = [
        grid_row(
            "odd",
            "Crunchy Taco",
            ["170 cal", "9g", "3.5g", "0g", "25mg", "310mg", "13g", "3g", "1g", "0g", "8g"],
        ),
        grid_row(
            "even",
            "Large Baja Blast (30 oz)",
            ["280 cal", "0g", "0g", "0g", "0mg", "85mg", "75g", "0g", "75g", "75g", "0g"],
        ),
        grid_row(
            "odd",
            "Nachos BellGrande&reg;",
            ["740 cal", "38g", "7g", "&lt;1g", "35mg", "1,100mg", "82g", "15g", "5g", "&lt;1g", "16g"],
        ),
        grid_row(
            "even",
            "Bean Burrito",
            ["350 cal", "9g", "3.5g", "0g", "&lt;5mg", "1,040mg", "54g", "9g", "3g", "0g", "13g"],
        ),
    ];
    format!(
        "<html><body><table class=\"inmGrid\"><tbody>{}</tbody></table></body></html>",
        rows.concat()
    )
}

#[test]
fn test_collect_orders_odd_then_even_and_drops_drinks() {
    let menu = collect_menu(&nutrition_page(), false).unwrap();

    assert_eq!(
        menu.names(),
        vec!["Crunchy Taco", "Nachos BellGrande\u{ae}", "Bean Burrito"]
    );
    assert!(menu.iter().all(|item| !is_beverage(&item.name)));
}

#[test]
fn test_collect_keeps_drinks_on_request() {
    let menu = collect_menu(&nutrition_page(), true).unwrap();
    assert_eq!(
        menu.names(),
        vec![
            "Crunchy Taco",
            "Nachos BellGrande\u{ae}",
            "Large Baja Blast (30 oz)",
            "Bean Burrito",
        ]
    );
}

#[test]
fn test_collected_values_are_clean() {
    let menu = collect_menu(&nutrition_page(), false).unwrap();

    let nachos = menu.get("Nachos BellGrande\u{ae}").unwrap();
    assert_eq!(nachos.calories, 740.0);
    assert_eq!(nachos.sodium, 1100.0);
    assert_eq!(nachos.trans_fat, 0.0);
    assert_eq!(nachos.added_sugars, 0.0);

    let burrito = menu.get("Bean Burrito").unwrap();
    assert_eq!(burrito.cholesterol, 0.0);
    assert_eq!(burrito.sodium, 1040.0);

    assert!(menu.iter().all(|item| item.is_valid()));
}

#[test]
fn test_menu_csv_roundtrip() {
    let menu = collect_menu(&nutrition_page(), false).unwrap();

    let file = NamedTempFile::new().unwrap();
    save_menu(file.path(), &menu).unwrap();

    let text = std::fs::read_to_string(file.path()).unwrap();
    assert!(text.starts_with("Menu Item,Calories,Total Fat (g)"));
    assert!(!text.contains("1,100"));

    let reloaded = load_menu(file.path()).unwrap();
    assert_eq!(reloaded.items(), menu.items());
}

#[test]
fn test_malformed_value_names_item_and_field() {
    let page = grid_row(
        "odd",
        "Mystery Item",
        ["170 cal", "9g", "3.5g", "0g", "25mg", "n/a", "13g", "3g", "1g", "0g", "8g"],
    );

    match collect_menu(&format!("<table>{page}</table>"), false) {
        Err(ComboError::MalformedField { item, field, value }) => {
            assert_eq!(item, "Mystery Item");
            assert_eq!(field, "Sodium (mg)");
            assert_eq!(value, "n/a");
        }
        other => panic!("expected malformed field, got {other:?}"),
    }
}
