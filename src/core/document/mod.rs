pub mod loader;

pub use loader::{LoadedDocument, SUPPORTED_EXTENSIONS, has_supported_extension, load_document};
