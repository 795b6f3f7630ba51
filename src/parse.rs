//! Stateful parsing of the classified line stream into commit records.

use crate::classify::{classify_line, HeaderFields, LineClass, StatFields, HEADER_DELIMITER};
use crate::error::Result;
use crate::history::CommitHistoryStore;
use crate::model::{Author, CommitRecord, FileChange};
use crate::util::parse_commit_date;
use std::io::BufRead;
use tracing::warn;

/// Result of a full parse: the structured history plus a count of lines
/// that were skipped as malformed.
#[derive(Debug)]
pub struct ParseOutcome {
    pub history: CommitHistoryStore,
    pub skipped_lines: u64,
}

enum ParserState {
    AwaitingHeader,
    /// The commit currently accumulating file changes.
    InFileChanges(CommitRecord),
}

/// Line-at-a-time parser for `git log --numstat` text.
///
/// A malformed line never aborts the parse; it is skipped, counted, and
/// reported via `tracing`.
pub struct LogParser {
    state: ParserState,
    records: Vec<CommitRecord>,
    skipped_lines: u64,
}

impl LogParser {
    pub fn new() -> Self {
        Self {
            state: ParserState::AwaitingHeader,
            records: Vec::new(),
            skipped_lines: 0,
        }
    }

    pub fn feed_line(&mut self, line: &str) {
        match classify_line(line) {
            LineClass::Header(header) => self.on_header(header, line),
            LineClass::FileStat(stat) => self.on_file_stat(stat, line),
            LineClass::Blank => self.flush_pending(),
            LineClass::Other => {
                // A delimiter-bearing line that failed header
                // classification is a malformed header; anything else
                // (shortstat summaries etc.) is expected noise.
                if line.contains(HEADER_DELIMITER) {
                    self.skip(line, "malformed commit header");
                }
            }
        }
    }

    pub fn finish(mut self) -> ParseOutcome {
        self.flush_pending();
        ParseOutcome {
            history: CommitHistoryStore::from_records(self.records),
            skipped_lines: self.skipped_lines,
        }
    }

    fn on_header(&mut self, header: HeaderFields<'_>, line: &str) {
        // A header while a commit is pending means the previous block had
        // no blank separator; flush it first.
        self.flush_pending();

        let Some(timestamp) = parse_commit_date(header.date) else {
            self.skip(line, "unparseable commit date");
            return;
        };

        self.state = ParserState::InFileChanges(CommitRecord {
            hash: header.hash.to_string(),
            author: Author {
                name: header.author_name.to_string(),
                email: header.author_email.to_string(),
            },
            timestamp,
            message: header.message.to_string(),
            file_changes: Vec::new(),
        });
    }

    fn on_file_stat(&mut self, stat: StatFields<'_>, line: &str) {
        match &mut self.state {
            ParserState::InFileChanges(record) => {
                record.file_changes.push(FileChange {
                    filename: stat.filename.to_string(),
                    lines_added: stat.added.unwrap_or(0),
                    lines_deleted: stat.deleted.unwrap_or(0),
                    is_binary: stat.added.is_none() || stat.deleted.is_none(),
                });
            }
            ParserState::AwaitingHeader => self.skip(line, "file stat outside a commit block"),
        }
    }

    fn flush_pending(&mut self) {
        let prev = std::mem::replace(&mut self.state, ParserState::AwaitingHeader);
        if let ParserState::InFileChanges(record) = prev {
            self.records.push(record);
        }
    }

    fn skip(&mut self, line: &str, reason: &str) {
        self.skipped_lines += 1;
        warn!(line, reason, "skipping log line");
    }
}

impl Default for LogParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a complete log text held in memory.
pub fn parse_log(text: &str) -> ParseOutcome {
    let mut parser = LogParser::new();
    for line in text.lines() {
        parser.feed_line(line);
    }
    parser.finish()
}

/// Parse from a buffered reader. Only transport failures are errors;
/// malformed content is handled line-locally as in [`parse_log`].
pub fn parse_reader<R: BufRead>(reader: R) -> Result<ParseOutcome> {
    let mut parser = LogParser::new();
    for line in reader.lines() {
        parser.feed_line(&line?);
    }
    Ok(parser.finish())
}
