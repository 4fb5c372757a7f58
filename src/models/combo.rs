use std::fmt;

/// Direction of a linear constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    AtMost,
    AtLeast,
}

impl Relation {
    /// Whether `value` satisfies `value <rel> bound`, with a small tolerance.
    pub fn holds(self, value: f64, bound: f64) -> bool {
        const EPS: f64 = 1e-6;
        match self {
            Relation::AtMost => value <= bound + EPS,
            Relation::AtLeast => value >= bound - EPS,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::AtMost => write!(f, "<="),
            Relation::AtLeast => write!(f, ">="),
        }
    }
}

/// One menu item picked by the solver.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Solver variable name (`MenuItems_<item>`).
    pub variable: String,

    /// Menu item name.
    pub item: String,

    /// How many of this item go into the combo.
    pub quantity: u32,
}

/// Realized value of one (possibly two-sided) nutrient constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintReport {
    /// Constraint name with `_lower`/`_upper` removed.
    pub name: String,

    /// Weighted nutrient sum for the chosen quantities.
    pub realized: f64,

    /// Every bound declared under this name.
    pub bounds: Vec<(Relation, f64)>,
}

impl ConstraintReport {
    pub fn is_satisfied(&self) -> bool {
        self.bounds
            .iter()
            .all(|&(relation, bound)| relation.holds(self.realized, bound))
    }
}

/// A feasible combo returned by the optimizer.
#[derive(Debug, Clone, Default)]
pub struct ComboSolution {
    /// Items with strictly positive quantity, in menu order.
    pub selections: Vec<Selection>,

    /// Objective value: total calories of the combo.
    pub total_calories: f64,

    /// Constraint reports in declaration order.
    pub constraints: Vec<ConstraintReport>,
}

impl ComboSolution {
    pub fn quantity_of(&self, item: &str) -> u32 {
        self.selections
            .iter()
            .find(|s| s.item == item)
            .map(|s| s.quantity)
            .unwrap_or(0)
    }

    pub fn total_items(&self) -> u32 {
        self.selections.iter().map(|s| s.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

/// Result of one solve: a combo, or the reason there is none.
#[derive(Debug, Clone)]
pub enum SolveOutcome {
    Optimal(ComboSolution),
    Infeasible,
    Unbounded,
}

impl SolveOutcome {
    pub fn solution(&self) -> Option<&ComboSolution> {
        match self {
            SolveOutcome::Optimal(solution) => Some(solution),
            _ => None,
        }
    }
}
