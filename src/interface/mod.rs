pub mod prompts;
pub mod render;

pub use prompts::{prompt_limits, prompt_number, prompt_yes_no};
pub use render::{display_banner, display_combo, display_outcome, APP_TITLE};
