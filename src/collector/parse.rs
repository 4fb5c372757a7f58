use log::debug;
use scraper::{ElementRef, Html, Selector};

use crate::error::{ComboError, Result};
use crate::models::Nutrient;

/// Row classes of the nutrition grid, in the order their rows are collected.
pub const ROW_CLASSES: [&str; 2] = ["odd", "even"];

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ComboError::Parse {
        row: css.to_string(),
        message: format!("bad selector: {e}"),
    })
}

/// Value of `attr` on the element itself or its first descendant carrying it.
fn find_attr(el: ElementRef<'_>, attr: &str) -> Option<String> {
    el.descendants()
        .filter_map(ElementRef::wrap)
        .find_map(|d| d.value().attr(attr))
        .map(str::to_string)
}

/// Pull `[name, label x 11]` out of one grid row.
///
/// Returns `Ok(None)` for rows without a title cell.
fn extract_row(tr: ElementRef<'_>) -> std::result::Result<Option<Vec<String>>, String> {
    let cells: Vec<ElementRef<'_>> = tr
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "td")
        .collect();

    let title = cells.iter().enumerate().find_map(|(idx, td)| {
        td.value().attr("class")?;
        find_attr(*td, "title").map(|name| (idx, name))
    });
    let Some((title_idx, name)) = title else {
        return Ok(None);
    };

    let expected = Nutrient::ALL.len();
    let following = &cells[title_idx + 1..];
    if following.len() < expected {
        return Err(format!(
            "expected {expected} nutrient cells after '{name}', found {}",
            following.len()
        ));
    }

    let mut row = Vec::with_capacity(expected + 1);
    row.push(name);
    for (col, td) in following.iter().take(expected).enumerate() {
        let label = find_attr(*td, "label")
            .ok_or_else(|| format!("cell {} of '{}' has no label", col + 1, row[0]))?;
        row.push(label);
    }
    Ok(Some(row))
}

/// Extract every menu row from the nutrition grid page.
///
/// All `tr.odd` rows come first, then all `tr.even` rows, each in document
/// order. Each row is the item name followed by the raw label of its eleven
/// nutrient cells.
pub fn extract_rows(html: &str) -> Result<Vec<Vec<String>>> {
    let document = Html::parse_document(html);
    let mut rows = Vec::new();

    for class in ROW_CLASSES {
        let sel = selector(&format!("tr.{class}"))?;
        for (idx, tr) in document.select(&sel).enumerate() {
            match extract_row(tr) {
                Ok(Some(row)) => rows.push(row),
                Ok(None) => debug!("Skipping {class} row {}: no title cell", idx + 1),
                Err(message) => {
                    return Err(ComboError::Parse {
                        row: format!("{class} #{}", idx + 1),
                        message,
                    })
                }
            }
        }
    }

    debug!("Extracted {} rows", rows.len());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_row(class: &str, name: &str, labels: &[&str]) -> String {
        let cells: String = labels
            .iter()
            .map(|l| format!(r#"<td label="{l}" class="ar">{l}</td>"#))
            .collect();
        format!(
            r#"<tr class="{class}"><td class="al"><a href="/i/1" title="{name}">{name}</a></td>{cells}</tr>"#
        )
    }

    const TACO: [&str; 11] = [
        "170 cal", "9g", "3.5g", "0g", "25mg", "310mg", "13g", "3g", "1g", "0g", "8g",
    ];

    #[test]
    fn test_odd_rows_before_even() {
        let html = format!(
            "<table><tbody>{}{}{}</tbody></table>",
            grid_row("odd", "Crunchy Taco", &TACO),
            grid_row("even", "Soft Taco", &TACO),
            grid_row("odd", "Bean Burrito", &TACO),
        );

        let rows = extract_rows(&html).unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(names, vec!["Crunchy Taco", "Bean Burrito", "Soft Taco"]);
        assert_eq!(rows[0].len(), 12);
        assert_eq!(rows[0][1], "170 cal");
        assert_eq!(rows[0][11], "8g");
    }

    #[test]
    fn test_entities_decoded() {
        let mut labels = TACO;
        labels[3] = "&lt;1g";
        let html = format!(
            "<table>{}</table>",
            grid_row("odd", "Nachos &amp; Cheese", &labels)
        );

        let rows = extract_rows(&html).unwrap();
        assert_eq!(rows[0][0], "Nachos & Cheese");
        assert_eq!(rows[0][4], "<1g");
    }

    #[test]
    fn test_rows_without_title_skipped() {
        let html = format!(
            r#"<table><tr class="odd"><td>spacer</td></tr>{}</table>"#,
            grid_row("odd", "Crunchy Taco", &TACO)
        );
        assert_eq!(extract_rows(&html).unwrap().len(), 1);
    }

    #[test]
    fn test_short_row_is_error() {
        let html = format!("<table>{}</table>", grid_row("even", "Taco", &TACO[..5]));
        match extract_rows(&html) {
            Err(ComboError::Parse { row, message }) => {
                assert_eq!(row, "even #1");
                assert!(message.contains("Taco"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_label_is_error() {
        let html = format!(
            "<table>{}</table>",
            grid_row("odd", "Taco", &TACO).replace(r#"label="9g" "#, "")
        );
        assert!(matches!(extract_rows(&html), Err(ComboError::Parse { .. })));
    }
}
