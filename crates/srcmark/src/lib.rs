// crates/srcmark/src/lib.rs

use std::ffi::OsStr;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use walkdir::WalkDir;

pub mod config;
pub mod filter;
pub mod language_id;
pub mod runner;
pub mod watch;

use config::AppConfig;
use filter::FileGlobFilter;
use runner::{process_file, process_untitled, Outcome};

/// Tally of one batch run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub inserted: usize,
    pub replaced: usize,
    pub unchanged: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Summary {
    pub fn processed(&self) -> usize {
        self.inserted + self.replaced + self.unchanged + self.skipped + self.failed
    }

    fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Inserted(_) => self.inserted += 1,
            Outcome::Replaced(_) => self.replaced += 1,
            Outcome::Unchanged => self.unchanged += 1,
            Outcome::Skipped(_) => self.skipped += 1,
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} files: {} inserted, {} replaced, {} unchanged, {} skipped, {} failed",
            self.processed(),
            self.inserted,
            self.replaced,
            self.unchanged,
            self.skipped,
            self.failed
        )
    }
}

/// One-shot batch mode: walk the configured paths and bring every matching
/// file's first line up to date. A file that fails to read or write is
/// reported on stderr and never stops the rest of the batch.
pub fn run(config: &AppConfig) -> Result<Summary> {
    let filter = FileGlobFilter::new(&config.file_glob)?;
    let mut summary = Summary::default();

    for file in collect_files(config) {
        match process_file(&file, config, &filter) {
            Ok(outcome) => {
                summary.record(&outcome);
                let changed = matches!(outcome, Outcome::Inserted(_) | Outcome::Replaced(_));
                if changed || config.verbose {
                    println!("{}: {}", file.display(), outcome);
                }
            }
            Err(err) => {
                summary.failed += 1;
                eprintln!("{}: {:#}", file.display(), err);
            }
        }
    }
    Ok(summary)
}

/// Stdin mode: treat the input as one untitled document and write the
/// result to stdout, the way an unsaved editor buffer would be handled.
pub fn run_stdin(config: &AppConfig, language_id: &str, file_name_hint: Option<&str>) -> Result<()> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read stdin")?;
    print!(
        "{}",
        process_untitled(&content, language_id, file_name_hint, config)
    );
    Ok(())
}

/// Watch mode entry point; see [`watch::run_watch`].
pub fn run_watch(config: &AppConfig) -> Result<()> {
    let filter = FileGlobFilter::new(&config.file_glob)?;
    watch::run_watch(config, &filter)
}

/// Expands the configured paths into the list of candidate files. `.git`
/// trees never participate.
fn collect_files(config: &AppConfig) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in &config.paths {
        if path.is_file() {
            files.push(path.clone());
        } else {
            let walker = WalkDir::new(path)
                .into_iter()
                .filter_entry(|entry| entry.file_name() != OsStr::new(".git"));
            files.extend(
                walker
                    .filter_map(|entry| entry.ok())
                    .filter(|entry| entry.file_type().is_file())
                    .map(|entry| entry.into_path()),
            );
        }
    }
    files.sort();
    files
}
