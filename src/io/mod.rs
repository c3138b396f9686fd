//! File collaborators of the core: the identifier source and the export sink

pub mod export;
pub mod source;

pub use export::{dump_records, export_file_name, export_to_dir, write_export};
pub use source::{IdentifierSource, load_identifiers, read_identifiers};
