mod combo;
mod menu_item;

pub use combo::{ComboSolution, ConstraintReport, Relation, Selection, SolveOutcome};
pub use menu_item::{MenuItem, Nutrient, MENU_COLUMNS};
