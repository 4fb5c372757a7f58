pub mod chart;
pub mod cli;
pub mod collector;
pub mod error;
pub mod interface;
pub mod menu;
pub mod models;
pub mod optimizer;

pub use error::{ComboError, Result};
pub use menu::MenuTable;
pub use models::{ComboSolution, MenuItem, SolveOutcome};
