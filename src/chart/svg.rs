use std::fs;
use std::path::Path;

use log::info;
use rand::Rng;

use crate::chart::pack::pack_circles;
use crate::error::Result;
use crate::models::ComboSolution;
use crate::optimizer::VARIABLE_PREFIX;

pub const CHART_TITLE: &str = "Taco Bell Combo";
pub const CANVAS_WIDTH: f64 = 1500.0;
pub const CANVAS_HEIGHT: f64 = 1000.0;

/// Drawn radius relative to the packed radius.
const DISC_SCALE: f64 = 0.7;
/// Offset of the quantity label below the name label, in chart units.
const QUANTITY_OFFSET: f64 = 0.1;
const TITLE_BAND: f64 = 80.0;
const FONT_SIZE: f64 = 16.0;

/// Chart label for a decision variable: the name without its fixed prefix.
pub fn label_for(variable: &str) -> &str {
    variable.get(VARIABLE_PREFIX.len()..).unwrap_or(variable)
}

/// Random `#rrggbb` fill colour.
pub fn random_fill<R: Rng>(rng: &mut R) -> String {
    format!("#{:06x}", rng.gen_range(0..=0xFF_FFFFu32))
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn push_line(out: &mut String, line: String) {
    out.push_str(&line);
    out.push('\n');
}

/// Centered text in a white rounded box.
fn boxed_label(out: &mut String, x: f64, y: f64, text: &str) {
    let width = text.chars().count() as f64 * FONT_SIZE * 0.6 + 16.0;
    let height = FONT_SIZE + 12.0;
    push_line(
        out,
        format!(
            r#"  <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" rx="6" fill="white" stroke="black"/>"#,
            x - width / 2.0,
            y - height / 2.0,
            width,
            height
        ),
    );
    push_line(
        out,
        format!(
            r#"  <text x="{x:.1}" y="{y:.1}" font-size="{FONT_SIZE}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
            escape_xml(text)
        ),
    );
}

/// Render the combo as a bubble chart: one disc per selected item, area
/// proportional to its quantity, labelled with the item name and quantity.
pub fn render_svg<R: Rng>(solution: &ComboSolution, rng: &mut R) -> String {
    let mut out = String::new();
    push_line(
        &mut out,
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CANVAS_WIDTH}" height="{CANVAS_HEIGHT}" viewBox="0 0 {CANVAS_WIDTH} {CANVAS_HEIGHT}">"#
        ),
    );
    push_line(
        &mut out,
        r#"  <rect width="100%" height="100%" fill="white"/>"#.to_string(),
    );
    push_line(
        &mut out,
        format!(
            r#"  <text x="{:.1}" y="{:.1}" font-size="28" text-anchor="middle">{CHART_TITLE}</text>"#,
            CANVAS_WIDTH / 2.0,
            TITLE_BAND / 2.0 + 10.0
        ),
    );

    let values: Vec<f64> = solution
        .selections
        .iter()
        .map(|s| s.quantity as f64)
        .collect();
    let packed = pack_circles(&values);

    // Square plot area under the title, so discs stay round.
    let lim = packed
        .iter()
        .map(|p| (p.circle.x.abs() + p.circle.r).max(p.circle.y.abs() + p.circle.r))
        .fold(0.0, f64::max);
    let side = (CANVAS_HEIGHT - TITLE_BAND).min(CANVAS_WIDTH);
    let scale = if lim > 0.0 { side / 2.0 / lim } else { 1.0 };
    let (cx, cy) = (CANVAS_WIDTH / 2.0, TITLE_BAND + side / 2.0);
    let to_px = |x: f64, y: f64| (cx + x * scale, cy - y * scale);

    for (selection, p) in solution.selections.iter().zip(&packed) {
        let c = p.circle;
        let (px, py) = to_px(c.x, c.y);
        push_line(
            &mut out,
            format!(
                r#"  <circle cx="{px:.1}" cy="{py:.1}" r="{:.1}" fill="{}" fill-opacity="0.9" stroke="black" stroke-width="2"/>"#,
                c.r * DISC_SCALE * scale,
                random_fill(rng)
            ),
        );
        boxed_label(&mut out, px, py, label_for(&selection.variable));

        let (qx, qy) = to_px(c.x, c.y - QUANTITY_OFFSET);
        boxed_label(&mut out, qx, qy, &selection.quantity.to_string());
    }

    out.push_str("</svg>\n");
    out
}

/// Render the chart and write it to `path`.
pub fn write_chart<P: AsRef<Path>, R: Rng>(
    path: P,
    solution: &ComboSolution,
    rng: &mut R,
) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, render_svg(solution, rng))?;
    info!("Wrote chart to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Selection;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn combo() -> ComboSolution {
        ComboSolution {
            selections: vec![
                Selection {
                    variable: "MenuItems_Bean Burrito".to_string(),
                    item: "Bean Burrito".to_string(),
                    quantity: 3,
                },
                Selection {
                    variable: "MenuItems_Chips & Cheese".to_string(),
                    item: "Chips & Cheese".to_string(),
                    quantity: 1,
                },
            ],
            total_calories: 1270.0,
            constraints: Vec::new(),
        }
    }

    #[test]
    fn test_label_strips_prefix() {
        assert_eq!(label_for("MenuItems_Crunchy Taco"), "Crunchy Taco");
        assert_eq!(label_for("short"), "short");
    }

    #[test]
    fn test_random_fill_format() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let fill = random_fill(&mut rng);
            assert_eq!(fill.len(), 7);
            assert!(fill.starts_with('#'));
            assert!(fill[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_render_has_disc_and_labels_per_item() {
        let mut rng = StdRng::seed_from_u64(42);
        let svg = render_svg(&combo(), &mut rng);

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(CHART_TITLE));
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.contains(">Bean Burrito</text>"));
        assert!(svg.contains(">Chips &amp; Cheese</text>"));
        assert!(svg.contains(">3</text>"));
        assert!(!svg.contains("MenuItems_"));
    }

    #[test]
    fn test_render_one_element_per_line() {
        let svg = render_svg(&combo(), &mut StdRng::seed_from_u64(3));
        let lines: Vec<&str> = svg.lines().collect();

        // svg open, background, title, then circle + two boxed labels per item, close
        assert_eq!(lines.len(), 3 + 2 * 5 + 1);
        assert!(lines[0].starts_with("<svg ") && lines[0].ends_with('>'));
        assert_eq!(lines[1], r#"  <rect width="100%" height="100%" fill="white"/>"#);
        assert_eq!(lines.last(), Some(&"</svg>"));
        assert_eq!(svg.matches("<rect").count(), 1 + 2 * 2);
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_same_seed_same_chart() {
        let a = render_svg(&combo(), &mut StdRng::seed_from_u64(1));
        let b = render_svg(&combo(), &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }
}
