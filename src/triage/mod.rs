pub mod calculator;
pub mod refiner;
pub mod summary;

pub use calculator::{calculate_triage, TriageOutcome};
pub use refiner::refine;
pub use summary::{baseline_context, build_transcript, generate_summary};
