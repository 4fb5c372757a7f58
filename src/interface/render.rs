use crate::models::{ComboSolution, SolveOutcome};

pub const APP_TITLE: &str = "Taco Bell Healthy Items Tool";

/// Print the tool banner.
pub fn display_banner() {
    println!();
    println!("=== {} ===", APP_TITLE);
    println!("Uses linear optimization to find orders that meet the nutritional");
    println!("limits you set, with as few calories as possible.");
    println!();
}

/// Print the outcome of a solve.
pub fn display_outcome(outcome: &SolveOutcome) {
    match outcome {
        SolveOutcome::Optimal(solution) => display_combo(solution),
        SolveOutcome::Infeasible => {
            println!("No combo satisfies the current limits.");
            println!("Try loosening a bound (e.g. a lower carbohydrate or protein minimum).");
        }
        SolveOutcome::Unbounded => {
            println!("The problem is unbounded under the current limits; no combo to show.");
        }
    }
}

/// Display a combo: total calories, chosen items and each constraint.
pub fn display_combo(solution: &ComboSolution) {
    println!("Total Calories: {}", solution.total_calories);
    println!();

    if solution.is_empty() {
        println!("(the empty combo already satisfies every limit)");
        println!();
    } else {
        let width = solution
            .selections
            .iter()
            .map(|s| s.item.len())
            .max()
            .unwrap_or(10);

        println!("--- Combo ---");
        for selection in &solution.selections {
            println!(
                "  {:<width$}  x{:>2}",
                selection.item,
                selection.quantity,
                width = width
            );
        }
        println!("Total items: {}", solution.total_items());
        println!();
    }

    println!("--- Constraints ---");
    let width = solution
        .constraints
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(10);
    for report in &solution.constraints {
        let bounds: Vec<String> = report
            .bounds
            .iter()
            .map(|(relation, bound)| format!("{} {}", relation, bound))
            .collect();
        let status = if report.is_satisfied() { "ok" } else { "VIOLATED" };
        println!(
            "  {:<width$}  {:>9.1}  [{}]  {}",
            report.name,
            report.realized,
            bounds.join(", "),
            status,
            width = width
        );
    }
    println!();
}
