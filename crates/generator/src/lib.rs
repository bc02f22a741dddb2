//! Template-based ad-copy generator — turns a campaign input into one
//! variant per rhetorical angle (Pain → Solution, Before / After,
//! Proof & Authority).

pub mod angles;
pub mod clauses;
pub mod engine;
pub mod export;
pub mod prompt;

pub use angles::AngleTemplate;
pub use engine::{generate, script_outline};
pub use export::copy_all_text;
pub use prompt::build_prompt;
