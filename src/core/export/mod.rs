pub mod clipboard;
pub mod file;

pub use clipboard::{ClipboardBackend, CopyOutcome, SystemClipboard, copy_to_clipboard};
pub use file::{
    BlobHandle, BlobStore, ExportOutcome, FsBlobStore, MARKDOWN_MIME, export_as_file,
    export_file_name, today_file_name,
};
