mod persistence;
mod table;

pub use persistence::{load_menu, save_menu};
pub use table::MenuTable;
