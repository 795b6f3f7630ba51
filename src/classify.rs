//! Classification of single raw log lines.
//!
//! The expected input interleaves pipe-delimited commit headers
//! (`%H|%an|%ae|%ad|%s`) with numstat lines (`added<TAB>deleted<TAB>path`),
//! blocks separated by blank lines. Everything else (e.g. the shortstat
//! summary) is `Other`.

/// Field delimiter used in the pretty-format header line.
pub const HEADER_DELIMITER: char = '|';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    Header(HeaderFields<'a>),
    FileStat(StatFields<'a>),
    Blank,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFields<'a> {
    pub hash: &'a str,
    pub author_name: &'a str,
    pub author_email: &'a str,
    pub date: &'a str,
    /// Everything after the fourth delimiter; may itself contain the
    /// delimiter character.
    pub message: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatFields<'a> {
    /// `None` for the numstat dash (binary file).
    pub added: Option<u32>,
    pub deleted: Option<u32>,
    pub filename: &'a str,
}

pub fn classify_line(line: &str) -> LineClass<'_> {
    if line.trim().is_empty() {
        return LineClass::Blank;
    }
    if let Some(header) = try_header(line) {
        return LineClass::Header(header);
    }
    if let Some(stat) = try_file_stat(line) {
        return LineClass::FileStat(stat);
    }
    LineClass::Other
}

/// Split on the delimiter with at most 4 cut points, so a message that
/// contains the delimiter stays in one piece. All 5 fields must be
/// non-empty.
fn try_header(line: &str) -> Option<HeaderFields<'_>> {
    if !line.contains(HEADER_DELIMITER) {
        return None;
    }
    let mut parts = line.splitn(5, HEADER_DELIMITER);
    let hash = parts.next()?;
    let author_name = parts.next()?;
    let author_email = parts.next()?;
    let date = parts.next()?;
    let message = parts.next()?;

    if [hash, author_name, author_email, date, message]
        .iter()
        .any(|field| field.is_empty())
    {
        return None;
    }

    Some(HeaderFields { hash, author_name, author_email, date, message })
}

fn try_file_stat(line: &str) -> Option<StatFields<'_>> {
    let (added_tok, rest) = split_token(line)?;
    let (deleted_tok, filename) = split_token(rest)?;
    let added = parse_count(added_tok)?;
    let deleted = parse_count(deleted_tok)?;
    let filename = filename.trim_end();
    if filename.is_empty() {
        return None;
    }
    Some(StatFields { added, deleted, filename })
}

/// First whitespace-delimited token and the remainder. The remainder
/// keeps internal whitespace so filenames with spaces survive.
fn split_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    let cut = s.find(char::is_whitespace)?;
    Some((&s[..cut], s[cut..].trim_start()))
}

fn parse_count(token: &str) -> Option<Option<u32>> {
    if token == "-" {
        Some(None)
    } else {
        token.parse::<u32>().ok().map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_header() {
        let line = "abc123|Alice|a@x.com|2024-01-01|fix null pointer";
        match classify_line(line) {
            LineClass::Header(h) => {
                assert_eq!(h.hash, "abc123");
                assert_eq!(h.author_name, "Alice");
                assert_eq!(h.author_email, "a@x.com");
                assert_eq!(h.date, "2024-01-01");
                assert_eq!(h.message, "fix null pointer");
            }
            other => panic!("expected header, got {other:?}"),
        }
    }

    #[test]
    fn delimiter_in_message_stays_in_message() {
        let line = "abc123|Alice|a@x.com|2024-01-01|refactor a|b|c handling";
        match classify_line(line) {
            LineClass::Header(h) => assert_eq!(h.message, "refactor a|b|c handling"),
            other => panic!("expected header, got {other:?}"),
        }
    }

    #[test]
    fn header_with_too_few_fields_is_other() {
        assert_eq!(
            classify_line("abc123|Alice|a@x.com|2024-01-01"),
            LineClass::Other
        );
    }

    #[test]
    fn header_with_empty_field_is_other() {
        assert_eq!(
            classify_line("abc123|Alice|a@x.com|2024-01-01|"),
            LineClass::Other
        );
        assert_eq!(
            classify_line("abc123||a@x.com|2024-01-01|msg"),
            LineClass::Other
        );
    }

    #[test]
    fn classifies_numstat_line() {
        match classify_line("3\t1\tsrc/main.c") {
            LineClass::FileStat(s) => {
                assert_eq!(s.added, Some(3));
                assert_eq!(s.deleted, Some(1));
                assert_eq!(s.filename, "src/main.c");
            }
            other => panic!("expected file stat, got {other:?}"),
        }
    }

    #[test]
    fn numstat_accepts_spaces_and_space_filenames() {
        match classify_line("10 0 docs/release notes.md") {
            LineClass::FileStat(s) => assert_eq!(s.filename, "docs/release notes.md"),
            other => panic!("expected file stat, got {other:?}"),
        }
    }

    #[test]
    fn dash_marks_binary() {
        match classify_line("-\t-\tassets/logo.png") {
            LineClass::FileStat(s) => {
                assert_eq!(s.added, None);
                assert_eq!(s.deleted, None);
                assert_eq!(s.filename, "assets/logo.png");
            }
            other => panic!("expected file stat, got {other:?}"),
        }
    }

    #[test]
    fn blank_and_whitespace_lines() {
        assert_eq!(classify_line(""), LineClass::Blank);
        assert_eq!(classify_line("   \t "), LineClass::Blank);
    }

    #[test]
    fn shortstat_summary_is_other() {
        assert_eq!(
            classify_line(" 3 files changed, 10 insertions(+), 2 deletions(-)"),
            LineClass::Other
        );
    }
}
