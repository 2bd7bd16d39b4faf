// crates/srcmark/src/config.rs

use std::env;
use std::path::PathBuf;

use decide_marker::MarkerConfig;

/// Environment variable that disables all edits, wherever the tool runs.
pub const DISABLE_ENV: &str = "SRCMARK_DISABLE";

/// Environment variable overriding project-root discovery.
pub const ROOT_ENV: &str = "SRCMARK_ROOT";

/// Centralized runtime configuration composed from CLI + environment.
/// Built once in `main` and passed down by reference.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Files or directories to process.
    pub paths: Vec<PathBuf>,
    /// Explicit project root; `None` means discover per file.
    pub root_override: Option<PathBuf>,
    /// Glob the absolute path must match before a file reaches the core.
    pub file_glob: String,
    /// The pure decision-engine configuration.
    pub marker: MarkerConfig,
    /// Print decisions without writing files.
    pub dry_run: bool,
    /// Enable verbose logging.
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            paths: vec![PathBuf::from(".")],
            root_override: None,
            file_glob: "**/*".to_string(),
            marker: MarkerConfig::default(),
            dry_run: false,
            verbose: false,
        }
    }
}

impl AppConfig {
    /// Applies the environment on top of whatever the CLI produced:
    /// `SRCMARK_DISABLE` forces the kill switch, `SRCMARK_ROOT` supplies a
    /// root when no `--root` was given.
    pub fn apply_env(&mut self) {
        if env::var(DISABLE_ENV).is_ok() {
            self.marker.enabled = false;
        }
        if self.root_override.is_none() {
            if let Ok(root) = env::var(ROOT_ENV) {
                if !root.is_empty() {
                    self.root_override = Some(PathBuf::from(root));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.paths, vec![PathBuf::from(".")]);
        assert_eq!(config.file_glob, "**/*");
        assert!(config.root_override.is_none());
        assert!(config.marker.enabled);
        assert!(config.marker.auto_detect_comment);
        assert!(config.marker.skip_if_present);
        assert!(config.marker.comment_prefix.is_none());
        assert!(!config.dry_run);
        assert!(!config.verbose);
    }
}
