pub mod directory_result;
pub mod file_record;
pub mod repository;
pub mod stat;

pub use directory_result::DirectoryResult;
pub use file_record::FileRecord;
pub use repository::RepositoryStats;
pub use stat::{Averages, Stat};
