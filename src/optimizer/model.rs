use crate::menu::MenuTable;
use crate::models::{ComboSolution, ConstraintReport, Nutrient, Relation, Selection};
use crate::optimizer::constants::{LOWER_SUFFIX, UPPER_SUFFIX, VARIABLE_PREFIX};
use crate::optimizer::limits::MacroLimits;

/// One linear constraint: sum of `nutrient x quantity` over the menu compared
/// against `bound`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintSpec {
    pub name: &'static str,
    pub nutrient: Nutrient,
    pub relation: Relation,
    pub bound: f64,
}

impl ConstraintSpec {
    fn new(name: &'static str, nutrient: Nutrient, relation: Relation, bound: f64) -> Self {
        Self {
            name,
            nutrient,
            relation,
            bound,
        }
    }
}

/// Build the constraint set for the given limits, in declaration order.
pub fn constraint_specs(limits: &MacroLimits) -> Vec<ConstraintSpec> {
    use Nutrient::*;
    use Relation::*;

    vec![
        ConstraintSpec::new("TotalFat", TotalFat, AtMost, limits.total_fat_max),
        ConstraintSpec::new("Saturated Fat", SaturatedFat, AtMost, limits.saturated_fat_max),
        ConstraintSpec::new("Carbohydrates_lower", Carbohydrates, AtLeast, limits.carbohydrates_min),
        ConstraintSpec::new("Sugars_lower", Sugars, AtLeast, limits.sugar_min),
        ConstraintSpec::new("Sugars_upper", Sugars, AtMost, limits.sugar_max),
        ConstraintSpec::new("Protein_lower", Protein, AtLeast, limits.protein_min),
        ConstraintSpec::new("Protein_upper", Protein, AtMost, limits.protein_max),
        ConstraintSpec::new("Sodium", Sodium, AtMost, limits.sodium_max_mg()),
    ]
}

/// Name a constraint is reported under: paired bounds share one name.
pub fn report_name(name: &str) -> String {
    name.replace(LOWER_SUFFIX, "").replace(UPPER_SUFFIX, "")
}

/// Decision variable name for a menu item.
pub fn variable_name(item: &str) -> String {
    format!("{VARIABLE_PREFIX}{item}")
}

/// Sum of `nutrient x quantity` for concrete quantities.
pub fn realized_total(menu: &MenuTable, quantities: &[u32], nutrient: Nutrient) -> f64 {
    menu.iter()
        .zip(quantities)
        .map(|(item, &qty)| item.get(nutrient) * qty as f64)
        .sum()
}

/// Summarize concrete per-item quantities (menu order) into a combo.
pub fn evaluate_combo(
    menu: &MenuTable,
    quantities: &[u32],
    specs: &[ConstraintSpec],
) -> ComboSolution {
    let selections = menu
        .iter()
        .zip(quantities)
        .filter(|&(_, &qty)| qty > 0)
        .map(|(item, &quantity)| Selection {
            variable: variable_name(&item.name),
            item: item.name.clone(),
            quantity,
        })
        .collect();

    let mut constraints: Vec<ConstraintReport> = Vec::new();
    for spec in specs {
        let name = report_name(spec.name);
        match constraints.iter_mut().find(|r| r.name == name) {
            Some(report) => report.bounds.push((spec.relation, spec.bound)),
            None => constraints.push(ConstraintReport {
                name,
                realized: realized_total(menu, quantities, spec.nutrient),
                bounds: vec![(spec.relation, spec.bound)],
            }),
        }
    }

    ComboSolution {
        selections,
        total_calories: realized_total(menu, quantities, Nutrient::Calories),
        constraints,
    }
}
