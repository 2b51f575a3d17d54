pub mod git;

pub use git::GitHistoryCollector;
