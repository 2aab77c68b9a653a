pub mod confirm;
pub mod store;

pub use confirm::{AssumeYes, Confirmer, DialoguerConfirmer};
pub use store::{HistoryStore, PREVIEW_CHARS, RemoveOutcome};
