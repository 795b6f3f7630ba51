//! Summary statistics over a parsed commit history.
//!
//! All functions take an immutable store and return ordered row tables
//! ready for rendering or JSON export. Sort order is pinned: metric
//! descending, then key ascending, so output is deterministic.

use crate::history::CommitHistoryStore;
use crate::util::week_start;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Row limit for the per-file and per-author tables.
pub const TOP_N: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekBucket {
    /// Monday of the ISO week, UTC.
    pub week_start: NaiveDate,
    pub commits: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChurn {
    pub filename: String,
    pub lines_added: u64,
    pub lines_deleted: u64,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixCount {
    pub filename: String,
    pub fix_commits: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorCommits {
    pub name: String,
    pub commits: u64,
}

/// Commit count per ISO calendar week, ascending by week.
pub fn commit_frequency_by_week(history: &CommitHistoryStore) -> Vec<WeekBucket> {
    let mut week_map: HashMap<NaiveDate, u64> = HashMap::new();
    for record in history {
        *week_map.entry(week_start(&record.timestamp)).or_insert(0) += 1;
    }

    let mut buckets: Vec<WeekBucket> = week_map
        .into_iter()
        .map(|(week_start, commits)| WeekBucket { week_start, commits })
        .collect();
    buckets.sort_by_key(|b| b.week_start);
    buckets
}

/// Top files by lines added plus deleted. Binary changes carry zero
/// counts and so contribute nothing to the totals.
pub fn churn_by_file(history: &CommitHistoryStore) -> Vec<FileChurn> {
    let mut file_map: HashMap<&str, (u64, u64)> = HashMap::new();
    for record in history {
        for change in &record.file_changes {
            let entry = file_map.entry(change.filename.as_str()).or_insert((0, 0));
            entry.0 += change.lines_added as u64;
            entry.1 += change.lines_deleted as u64;
        }
    }

    let mut rows: Vec<FileChurn> = file_map
        .into_iter()
        .map(|(filename, (lines_added, lines_deleted))| FileChurn {
            filename: filename.to_string(),
            lines_added,
            lines_deleted,
            total: lines_added + lines_deleted,
        })
        .collect();
    rows.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.filename.cmp(&b.filename)));
    rows.truncate(TOP_N);
    rows
}

/// Top files by how often they appear in fix commits (message contains
/// "fix", case-insensitive).
pub fn fix_frequency_by_file(history: &CommitHistoryStore) -> Vec<FixCount> {
    let mut fix_map: HashMap<&str, u64> = HashMap::new();
    for record in history {
        if !record.message.to_lowercase().contains("fix") {
            continue;
        }
        for change in &record.file_changes {
            *fix_map.entry(change.filename.as_str()).or_insert(0) += 1;
        }
    }

    let mut rows: Vec<FixCount> = fix_map
        .into_iter()
        .map(|(filename, fix_commits)| FixCount {
            filename: filename.to_string(),
            fix_commits,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.fix_commits
            .cmp(&a.fix_commits)
            .then_with(|| a.filename.cmp(&b.filename))
    });
    rows.truncate(TOP_N);
    rows
}

/// Top contributors by commit count, grouped by author display name.
/// Two emails under one name are merged on purpose.
pub fn commits_by_author(history: &CommitHistoryStore) -> Vec<AuthorCommits> {
    let mut author_map: HashMap<&str, u64> = HashMap::new();
    for record in history {
        *author_map.entry(record.author.name.as_str()).or_insert(0) += 1;
    }

    let mut rows: Vec<AuthorCommits> = author_map
        .into_iter()
        .map(|(name, commits)| AuthorCommits {
            name: name.to_string(),
            commits,
        })
        .collect();
    rows.sort_by(|a, b| b.commits.cmp(&a.commits).then_with(|| a.name.cmp(&b.name)));
    rows.truncate(TOP_N);
    rows
}
