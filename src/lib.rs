//! Turn the textual output of `git log --numstat` into structured commit
//! records and compute summary statistics over them: commits per week,
//! churn per file, fix-commit frequency per file, and commits per author.
//!
//! Obtaining the raw log text (running git) and rendering the result
//! tables are left to the caller; this crate only parses and aggregates.

pub mod classify;
pub mod error;
pub mod history;
pub mod model;
pub mod parse;
pub mod stats;
pub mod util;

pub use error::{GitPulseError, Result};
pub use history::CommitHistoryStore;
pub use model::{Author, CommitRecord, FileChange};
pub use parse::{parse_log, parse_reader, LogParser, ParseOutcome};
