// crates/srcmark/src/filter.rs

use std::path::Path;

use anyhow::{Context, Result};
use globset::{GlobBuilder, GlobMatcher};

/// Pre-check gate in front of the decision engine: documents whose absolute
/// path does not match the configured glob never reach the core.
#[derive(Debug, Clone)]
pub struct FileGlobFilter {
    matcher: GlobMatcher,
}

impl FileGlobFilter {
    /// Compiles the glob. `*` and `?` do not cross path separators; use
    /// `**` to span directories. The default pattern `**/*` matches
    /// everything.
    pub fn new(pattern: &str) -> Result<Self> {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .with_context(|| format!("Invalid glob pattern '{}'", pattern))?;
        Ok(FileGlobFilter {
            matcher: glob.compile_matcher(),
        })
    }

    pub fn matches(&self, path: &Path) -> bool {
        self.matcher.is_match(path)
    }
}
