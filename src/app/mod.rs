pub mod dispatch;
pub mod overrides;

pub use dispatch::{dispatch, submit_until_interrupted};
pub use overrides::apply_overrides;
