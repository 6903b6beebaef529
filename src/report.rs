use crate::model::{LargeCommit, Totals};
use console::style;
use std::io::{self, Write};

pub const USAGE: &str = "\
firstly enter your git repository and execute:
  $ git log --author='xxx' --since=2020-3-1 --until=2020-6-30 --stat > ~/git-20h1.commits
secondly, run this tool on the saved log:
  $ commit-tally ~/git-20h1.commits
or pipe the log straight in:
  $ git log --stat | commit-tally -
";

pub fn write_usage<W: Write>(out: &mut W, styled: bool) -> io::Result<()> {
    writeln!(out, "{}", style("Usage").bold().force_styling(styled))?;
    writeln!(out, "{USAGE}")
}

pub fn write_large_commit<W: Write>(out: &mut W, large: &LargeCommit, styled: bool) -> io::Result<()> {
    let header = format!("large commit {}", large.seq);
    writeln!(out, "{}", style(header).bold().yellow().force_styling(styled))?;
    writeln!(out, "{}", large.commit)?;
    writeln!(out, "{}", large.title)?;
    writeln!(out, "{}", large.author)?;
    writeln!(out, "{}", large.date)?;
    writeln!(out, "{}", large.line)?;
    writeln!(out)
}

pub fn write_summary<W: Write>(out: &mut W, totals: &Totals) -> io::Result<()> {
    writeln!(out, "{totals}")
}
