use good_lp::{
    default_solver, variable, variables, Expression, ResolutionError, Solution, SolverModel,
    Variable,
};
use log::{debug, info};

use crate::error::{ComboError, Result};
use crate::menu::MenuTable;
use crate::models::{Nutrient, Relation, SolveOutcome};
use crate::optimizer::constants::MAX_QUANTITY;
use crate::optimizer::limits::MacroLimits;
use crate::optimizer::model::{constraint_specs, evaluate_combo, variable_name};

fn weighted_sum(menu: &MenuTable, quantities: &[Variable], nutrient: Nutrient) -> Expression {
    menu.iter()
        .zip(quantities)
        .map(|(item, &qty)| item.get(nutrient) * qty)
        .sum()
}

/// Find the lowest-calorie combo that satisfies every limit.
///
/// One integer variable in `0..=MAX_QUANTITY` per menu item. The model is
/// rebuilt from scratch on every call. Infeasible and unbounded problems are
/// returned as outcomes; only a failing solver is an error.
pub fn solve_combo(menu: &MenuTable, limits: &MacroLimits) -> Result<SolveOutcome> {
    if menu.is_empty() {
        return Err(ComboError::EmptyMenu);
    }

    let specs = constraint_specs(limits);

    let mut vars = variables!();
    let quantities: Vec<Variable> = menu
        .iter()
        .map(|item| {
            vars.add(
                variable()
                    .integer()
                    .min(0)
                    .max(MAX_QUANTITY)
                    .name(variable_name(&item.name)),
            )
        })
        .collect();

    let objective = weighted_sum(menu, &quantities, Nutrient::Calories);
    let mut model = vars.minimise(objective).using(default_solver);

    for spec in &specs {
        let lhs = weighted_sum(menu, &quantities, spec.nutrient);
        debug!("Constraint {} {} {}", spec.name, spec.relation, spec.bound);
        model = model.with(match spec.relation {
            Relation::AtMost => lhs.leq(spec.bound),
            Relation::AtLeast => lhs.geq(spec.bound),
        });
    }

    info!(
        "Solving over {} items with {} constraints",
        menu.len(),
        specs.len()
    );

    let solution = match model.solve() {
        Ok(solution) => solution,
        Err(ResolutionError::Infeasible) => {
            info!("Problem is infeasible under the current limits");
            return Ok(SolveOutcome::Infeasible);
        }
        Err(ResolutionError::Unbounded) => {
            info!("Problem is unbounded");
            return Ok(SolveOutcome::Unbounded);
        }
        Err(e) => return Err(ComboError::Solver(e.to_string())),
    };

    let counts: Vec<u32> = quantities
        .iter()
        .map(|&q| solution.value(q).round().clamp(0.0, MAX_QUANTITY as f64) as u32)
        .collect();

    let combo = evaluate_combo(menu, &counts, &specs);
    info!(
        "Optimal combo: {} items, {} calories",
        combo.total_items(),
        combo.total_calories
    );
    Ok(SolveOutcome::Optimal(combo))
}
