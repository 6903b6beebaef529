use crate::error::{Result, TallyError};
use once_cell::sync::Lazy;
use regex::Regex;

static COMMIT: Lazy<Regex> = Lazy::new(|| compile(r"^commit [a-f0-9]{40}"));
static TITLE: Lazy<Regex> = Lazy::new(|| compile(r"^    [^\t\n\f\r ]+"));
static AUTHOR: Lazy<Regex> = Lazy::new(|| compile(r"^Author: "));
static DATE: Lazy<Regex> = Lazy::new(|| compile(r"^Date:"));
static INSERTIONS: Lazy<Regex> = Lazy::new(|| compile(r"([0-9]+) insertions\(\+\)"));
static DELETIONS: Lazy<Regex> = Lazy::new(|| compile(r"([0-9]+) deletions\(-\)"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid pattern")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Commit,
    Title,
    Author,
    Date,
}

/// Classify a header line. The checks are exclusive and run in order, so a
/// commit header is never also taken as a title.
pub fn classify(line: &str) -> Option<LineKind> {
    if COMMIT.is_match(line) {
        Some(LineKind::Commit)
    } else if TITLE.is_match(line) {
        Some(LineKind::Title)
    } else if AUTHOR.is_match(line) {
        Some(LineKind::Author)
    } else if DATE.is_match(line) {
        Some(LineKind::Date)
    } else {
        None
    }
}

pub fn insertions(line: &str) -> Result<Option<u64>> {
    capture_count(&INSERTIONS, line)
}

pub fn deletions(line: &str) -> Result<Option<u64>> {
    capture_count(&DELETIONS, line)
}

fn capture_count(re: &Regex, line: &str) -> Result<Option<u64>> {
    let Some(digits) = re.captures(line).and_then(|c| c.get(1)) else {
        return Ok(None);
    };
    parse_count(digits.as_str(), line).map(Some)
}

pub(crate) fn parse_count(digits: &str, line: &str) -> Result<u64> {
    digits.parse::<u64>().map_err(|source| TallyError::ParseCount {
        line: line.trim_end().to_string(),
        source,
    })
}
