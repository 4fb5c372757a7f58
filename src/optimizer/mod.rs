pub mod constants;
pub mod limits;
pub mod model;
pub mod solve;

pub use constants::*;
pub use limits::{load_limits, save_limits, MacroLimits};
pub use model::{
    constraint_specs, evaluate_combo, realized_total, report_name, variable_name, ConstraintSpec,
};
pub use solve::solve_combo;
