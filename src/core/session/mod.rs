pub mod controller;
pub mod types;

pub use controller::SessionController;
pub use types::{SessionStatus, SkipReason, SubmitOutcome, SummaryResult};
