pub mod api;
pub mod document;
pub mod export;
pub mod history;
pub mod request;
pub mod session;
