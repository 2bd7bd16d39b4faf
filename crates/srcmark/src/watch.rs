// crates/srcmark/src/watch.rs

//! Watch mode. In the editor the marker was maintained on became-active and
//! save events; on the command line the same triggers arrive as filesystem
//! events. Raw events are debounced, filtered through the glob pre-check,
//! and serialized per path with a short cooldown after each
//! decide-and-apply cycle, so rapid duplicate triggers (including the event
//! caused by our own rewrite) collapse into a no-op instead of
//! double-processing.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use notify::RecursiveMode;
use notify_debouncer_mini::{new_debouncer, DebouncedEventKind};

use crate::config::AppConfig;
use crate::filter::FileGlobFilter;
use crate::runner::{process_file, Outcome};

/// Window for batching raw filesystem events into one trigger.
const DEBOUNCE_WINDOW: Duration = Duration::from_millis(100);

/// Per-path cooldown after one decide-and-apply cycle.
const COOLDOWN: Duration = Duration::from_millis(500);

/// Watches the configured paths and processes files as they change. Runs
/// until the event channel closes (normally: until the process is killed).
pub fn run_watch(config: &AppConfig, filter: &FileGlobFilter) -> Result<()> {
    let (tx, rx) = mpsc::channel();
    let mut debouncer =
        new_debouncer(DEBOUNCE_WINDOW, tx).context("Failed to create the file watcher")?;

    for path in &config.paths {
        debouncer
            .watcher()
            .watch(path, RecursiveMode::Recursive)
            .with_context(|| format!("Failed to watch {}", path.display()))?;
        println!("Watching {}", path.display());
    }

    let mut recently_processed: HashMap<PathBuf, Instant> = HashMap::new();

    for result in rx {
        let events = match result {
            Ok(events) => events,
            Err(err) => {
                eprintln!("Watch error: {}", err);
                continue;
            }
        };

        // Drop entries that are long out of their cooldown so the map does
        // not grow with every file ever touched.
        let now = Instant::now();
        recently_processed.retain(|_, at| now.duration_since(*at) < COOLDOWN * 2);

        for event in events {
            if !matches!(event.kind, DebouncedEventKind::Any) {
                continue;
            }
            handle_change(&event.path, config, filter, &mut recently_processed);
        }
    }
    Ok(())
}

fn handle_change(
    path: &Path,
    config: &AppConfig,
    filter: &FileGlobFilter,
    recently_processed: &mut HashMap<PathBuf, Instant>,
) {
    if !path.is_file() || in_git_dir(path) {
        return;
    }
    if let Some(at) = recently_processed.get(path) {
        if at.elapsed() < COOLDOWN {
            return;
        }
    }

    match process_file(path, config, filter) {
        Ok(Outcome::Unchanged) | Ok(Outcome::Skipped(_)) if !config.verbose => {}
        Ok(outcome) => println!("{}: {}", path.display(), outcome),
        // One file failing must not take the watcher down.
        Err(err) => eprintln!("{}: {:#}", path.display(), err),
    }
    recently_processed.insert(path.to_path_buf(), Instant::now());
}

/// True when any component of the path is a `.git` directory.
pub(crate) fn in_git_dir(path: &Path) -> bool {
    path.components().any(|c| c.as_os_str() == OsStr::new(".git"))
}
