use crate::error::{Result, TallyError};
use crate::model::{CommitContext, LargeCommit, ScanOptions, Totals, LARGE_COMMIT_THRESHOLD};
use crate::patterns::{self, LineKind};
use crate::report;
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, trace};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

const PROGRESS_EVERY: u64 = 4096;

/// Running state for one pass over a commit log.
#[derive(Debug, Clone)]
pub struct Scanner {
    threshold: u64,
    totals: Totals,
    context: CommitContext,
}

impl Scanner {
    pub fn new(threshold: u64) -> Self {
        Self {
            threshold,
            totals: Totals::new(),
            context: CommitContext::default(),
        }
    }

    /// Account for one line of the log and return the large commit it
    /// triggered, if any.
    ///
    /// Only the changes counted on this very line are compared against the
    /// threshold. A diffstat split over several lines never adds up across
    /// them.
    pub fn feed(&mut self, line: &str) -> Result<Option<LargeCommit>> {
        match patterns::classify(line) {
            Some(LineKind::Commit) => {
                self.context.commit = line.to_string();
                self.totals.commits += 1;
            }
            Some(LineKind::Title) => self.context.title = line.to_string(),
            Some(LineKind::Author) => self.context.author = line.to_string(),
            Some(LineKind::Date) => self.context.date = line.to_string(),
            None => {}
        }

        let inserted = patterns::insertions(line)?.unwrap_or(0);
        let deleted = patterns::deletions(line)?.unwrap_or(0);
        let changed = inserted.checked_add(deleted).ok_or_else(|| overflow(line))?;
        let insertions = self.totals.insertions.checked_add(inserted).ok_or_else(|| overflow(line))?;
        let deletions = self.totals.deletions.checked_add(deleted).ok_or_else(|| overflow(line))?;
        // the summary adds both totals, so their sum must stay in range too
        insertions.checked_add(deletions).ok_or_else(|| overflow(line))?;
        self.totals.insertions = insertions;
        self.totals.deletions = deletions;

        if changed < self.threshold {
            return Ok(None);
        }
        self.totals.large_commits += 1;
        let large = LargeCommit::capture(self.totals.large_commits, &self.context, line);
        debug!("large commit {}: {} changed lines", large.seq, changed);
        Ok(Some(large))
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    pub fn context(&self) -> &CommitContext {
        &self.context
    }

    pub fn finish(self) -> Totals {
        self.totals
    }
}

fn overflow(line: &str) -> TallyError {
    TallyError::Overflow {
        line: line.trim_end().to_string(),
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(LARGE_COMMIT_THRESHOLD)
    }
}

/// Scan `input` to the end, writing large-commit blocks as they are found
/// and the summary line last.
pub fn scan<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    options: &ScanOptions,
    progress: &ProgressBar,
) -> Result<Totals> {
    let mut scanner = Scanner::new(options.threshold);
    let mut buf = Vec::new();
    let mut lines = 0u64;

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lines += 1;
        let line = String::from_utf8_lossy(&buf);
        trace!("line {lines}: {}", line.trim_end());

        if let Some(large) = scanner.feed(&line)? {
            report::write_large_commit(out, &large, options.styled)?;
        }
        if lines % PROGRESS_EVERY == 0 {
            progress.set_message(format!("{lines} lines, {} commits", scanner.totals().commits));
            progress.tick();
        }
    }

    let totals = scanner.finish();
    report::write_summary(out, &totals)?;
    out.flush()?;
    info!("scanned {lines} lines");
    Ok(totals)
}

/// `-` stands for standard input.
pub fn open_source(source: &str) -> Result<Box<dyn BufRead>> {
    if source == "-" {
        debug!("reading commit log from stdin");
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let path = Path::new(source);
    let file = File::open(path).map_err(|source| TallyError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("opened commit log {}", path.display());
    Ok(Box::new(BufReader::new(file)))
}

pub fn exec(source: &str, options: &ScanOptions) -> anyhow::Result<Totals> {
    let input = open_source(source)?;

    let pb = if options.progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Scanning commit log...");
        pb
    } else {
        ProgressBar::hidden()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = scan(input, &mut out, options, &pb);
    pb.finish_and_clear();

    result.with_context(|| format!("Failed to scan commit log '{source}'"))
}
