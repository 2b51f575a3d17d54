pub mod aggregate;
pub mod sort;

pub use aggregate::Aggregator;
pub use sort::{
    DEFAULT_TOP, GroupEntry, NO_EXTENSION_LABEL, effective_top, extensions_by_files, languages_by_code,
    top_files_by_code, top_files_by_size,
};
