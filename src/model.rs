use std::fmt;

/// Changed lines on a single diffstat line at or above which a commit is reported.
pub const LARGE_COMMIT_THRESHOLD: u64 = 1000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub commits: u64,
    pub insertions: u64,
    pub deletions: u64,
    pub large_commits: u64,
}

impl Totals {
    pub fn new() -> Self {
        Self::default()
    }

    /// The scanner rejects any line that would push this sum past `u64::MAX`.
    pub fn total_lines(&self) -> u64 {
        self.insertions.saturating_add(self.deletions)
    }
}

impl fmt::Display for Totals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "commits: {}, total lines: {}, additions: {}, deletions: {}",
            self.commits,
            self.total_lines(),
            self.insertions,
            self.deletions
        )
    }
}

/// Most recent header lines seen in the log, kept verbatim until reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitContext {
    pub commit: String,
    pub title: String,
    pub author: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LargeCommit {
    pub seq: u64,
    pub commit: String,
    pub title: String,
    pub author: String,
    pub date: String,
    pub line: String,
}

impl LargeCommit {
    pub fn capture(seq: u64, context: &CommitContext, line: &str) -> Self {
        Self {
            seq,
            commit: context.commit.trim().to_string(),
            title: context.title.trim().to_string(),
            author: context.author.trim().to_string(),
            date: context.date.trim().to_string(),
            line: line.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub threshold: u64,
    pub progress: bool,
    pub styled: bool,
}

impl ScanOptions {
    pub fn new() -> Self {
        Self {
            threshold: LARGE_COMMIT_THRESHOLD,
            progress: false,
            styled: false,
        }
    }

    pub fn with_threshold(mut self, threshold: u64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_styling(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::new()
    }
}
