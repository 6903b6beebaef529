use crate::model::{ScanOptions, LARGE_COMMIT_THRESHOLD};
use anyhow::Result;
use clap::Parser;
use std::io;

#[derive(Parser)]
#[command(name = "commit-tally")]
#[command(about = "Commit and line-change totals from `git log --stat` output")]
#[command(version)]
pub struct Cli {
    #[arg(help = "Saved `git log --stat` output, `-` for stdin, or `help`")]
    pub log: Option<String>,

    /// Anything past the log path; its presence means usage is printed.
    #[arg(hide = true)]
    pub extra: Vec<String>,

    #[arg(
        long,
        help = "Changed lines on one diffstat line that mark a large commit",
        default_value_t = LARGE_COMMIT_THRESHOLD
    )]
    pub threshold: u64,

    #[arg(long, help = "Show a progress spinner on stderr", default_value_t = false)]
    pub progress: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn options(&self) -> ScanOptions {
        ScanOptions::new()
            .with_threshold(self.threshold)
            .with_progress(self.progress)
            .with_styling(console::colors_enabled())
    }

    /// The log to scan, or `None` when the arguments call for usage: no log,
    /// the literal `help`, or more than one argument.
    pub fn source(&self) -> Option<&str> {
        match self.log.as_deref() {
            Some("help") | None => None,
            Some(_) if !self.extra.is_empty() => None,
            source => source,
        }
    }

    pub fn execute(self) -> Result<()> {
        let options = self.options();
        match self.source() {
            None => {
                crate::report::write_usage(&mut io::stdout().lock(), options.styled)?;
                Ok(())
            }
            Some(source) => crate::scan::exec(source, &options).map(|_| ()),
        }
    }
}
