// crates/srcmark/src/runner.rs

//! Document provider and edit applicator. Reads one file, asks the decision
//! engine what the first line should become, and rewrites the file in a
//! single write. All degraded cases (unreadable, not text, filtered out)
//! resolve to a [`Outcome::Skipped`] so one file never stops a batch.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use decide_marker::{decide, Decision, DocumentSnapshot};
use get_project_root::get_project_root;

use crate::config::AppConfig;
use crate::filter::FileGlobFilter;
use crate::language_id::language_id_for_path;

/// What happened to one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Marker inserted above the existing content.
    Inserted(String),
    /// Stale first line rewritten in place.
    Replaced(String),
    /// Already up to date, or nothing the engine wants to change.
    Unchanged,
    /// Bypassed before any decision was made.
    Skipped(String),
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Inserted(text) => write!(f, "inserted {:?}", text),
            Outcome::Replaced(text) => write!(f, "replaced with {:?}", text),
            Outcome::Unchanged => write!(f, "unchanged"),
            Outcome::Skipped(reason) => write!(f, "skipped ({})", reason),
        }
    }
}

/// Processes a single file on disk: decide, then apply.
///
/// The glob pre-check runs here so no filtered document ever reaches the
/// decision engine. With `dry_run` set the decision is reported but the
/// file is left untouched.
pub fn process_file(path: &Path, config: &AppConfig, filter: &FileGlobFilter) -> Result<Outcome> {
    let abs_path = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

    if !filter.matches(&abs_path) {
        return Ok(Outcome::Skipped("glob filter".to_string()));
    }

    let bytes =
        fs::read(&abs_path).with_context(|| format!("Failed to read {}", abs_path.display()))?;
    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        // The editor host would never hand the core a binary document;
        // the CLI equivalent is skipping anything that is not UTF-8 text.
        Err(_) => return Ok(Outcome::Skipped("not UTF-8 text".to_string())),
    };

    let project_root = resolve_project_root(&abs_path, config);
    let snapshot = DocumentSnapshot {
        language_id: language_id_for_path(&abs_path),
        first_line: content.lines().next().unwrap_or("").to_string(),
        path: abs_path.clone(),
        is_untitled: false,
        file_name_hint: None,
        project_root,
    };

    let (outcome, new_content) = apply_decision(decide(&snapshot, &config.marker), &content);

    if let Some(new_content) = new_content {
        if !config.dry_run {
            fs::write(&abs_path, new_content)
                .with_context(|| format!("Failed to write {}", abs_path.display()))?;
        }
    }
    Ok(outcome)
}

/// Processes a document read from stdin as an untitled document and returns
/// the resulting text. Untitled documents label from the hint alone.
pub fn process_untitled(
    content: &str,
    language_id: &str,
    file_name_hint: Option<&str>,
    config: &AppConfig,
) -> String {
    let snapshot = DocumentSnapshot {
        language_id: language_id.to_string(),
        first_line: content.lines().next().unwrap_or("").to_string(),
        path: PathBuf::new(),
        is_untitled: true,
        file_name_hint: file_name_hint.map(str::to_string),
        project_root: config.root_override.clone(),
    };
    match apply_decision(decide(&snapshot, &config.marker), content) {
        (_, Some(new_content)) => new_content,
        (_, None) => content.to_string(),
    }
}

/// Turns a decision into the rewritten document, if the decision edits.
fn apply_decision(decision: Decision, content: &str) -> (Outcome, Option<String>) {
    match decision {
        Decision::NoOp => (Outcome::Unchanged, None),
        Decision::InsertAtTop(text) => {
            let new_content = format!("{}{}{}", text, line_ending_of(content), content);
            (Outcome::Inserted(text), Some(new_content))
        }
        Decision::ReplaceFirstLine(text) => {
            let new_content = replace_first_line(content, &text);
            (Outcome::Replaced(text), Some(new_content))
        }
    }
}

fn resolve_project_root(abs_path: &Path, config: &AppConfig) -> Option<PathBuf> {
    match &config.root_override {
        Some(root) => Some(fs::canonicalize(root).unwrap_or_else(|_| root.clone())),
        None => get_project_root(abs_path),
    }
}

/// The document's own line-ending convention; CRLF wins if it appears at all.
fn line_ending_of(content: &str) -> &'static str {
    if content.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

/// Replaces exactly the text of line 0, leaving its terminator in place.
fn replace_first_line(content: &str, text: &str) -> String {
    match content.find('\n') {
        Some(newline) => {
            let line_end = if newline > 0 && content.as_bytes()[newline - 1] == b'\r' {
                newline - 1
            } else {
                newline
            };
            format!("{}{}", text, &content[line_end..])
        }
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decide_marker::MarkerConfig;
    use std::fs;
    use tempfile::tempdir;

    fn config_with_root(root: &Path) -> AppConfig {
        AppConfig {
            root_override: Some(root.to_path_buf()),
            ..AppConfig::default()
        }
    }

    fn any_filter() -> FileGlobFilter {
        FileGlobFilter::new("**/*").unwrap()
    }

    #[test]
    fn test_insert_into_python_file() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("app.py");
        fs::write(&file, "print('hi')\n").unwrap();

        let outcome = process_file(&file, &config_with_root(temp.path()), &any_filter()).unwrap();

        let root_name = temp.path().file_name().unwrap().to_string_lossy();
        let marker = format!("# {}/app.py", root_name);
        assert_eq!(outcome, Outcome::Inserted(marker.clone()));
        let content = fs::read_to_string(&file).unwrap();
        assert_eq!(content, format!("{}\nprint('hi')\n", marker));
    }

    #[test]
    fn test_second_run_is_unchanged() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("app.py");
        fs::write(&file, "print('hi')\n").unwrap();
        let config = config_with_root(temp.path());

        process_file(&file, &config, &any_filter()).unwrap();
        let after_first = fs::read_to_string(&file).unwrap();
        let outcome = process_file(&file, &config, &any_filter()).unwrap();

        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(fs::read_to_string(&file).unwrap(), after_first);
    }

    #[test]
    fn test_stale_marker_is_replaced() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("main.rs");
        fs::write(&file, "// old/path/main.rs\nfn main() {}\n").unwrap();

        let outcome = process_file(&file, &config_with_root(temp.path()), &any_filter()).unwrap();

        let root_name = temp.path().file_name().unwrap().to_string_lossy();
        let marker = format!("// {}/main.rs", root_name);
        assert_eq!(outcome, Outcome::Replaced(marker.clone()));
        let content = fs::read_to_string(&file).unwrap();
        assert_eq!(content, format!("{}\nfn main() {{}}\n", marker));
    }

    #[test]
    fn test_json_is_left_alone() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("data.json");
        fs::write(&file, "{\"a\": 1}\n").unwrap();

        let outcome = process_file(&file, &config_with_root(temp.path()), &any_filter()).unwrap();

        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(fs::read_to_string(&file).unwrap(), "{\"a\": 1}\n");
    }

    #[test]
    fn test_crlf_content_keeps_crlf() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("app.py");
        fs::write(&file, "print('hi')\r\nprint('bye')\r\n").unwrap();

        process_file(&file, &config_with_root(temp.path()), &any_filter()).unwrap();

        let content = fs::read_to_string(&file).unwrap();
        let root_name = temp.path().file_name().unwrap().to_string_lossy();
        assert_eq!(
            content,
            format!("# {}/app.py\r\nprint('hi')\r\nprint('bye')\r\n", root_name)
        );
    }

    #[test]
    fn test_replace_on_crlf_file_preserves_terminator() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("main.rs");
        fs::write(&file, "// stale.rs\r\nfn main() {}\r\n").unwrap();

        process_file(&file, &config_with_root(temp.path()), &any_filter()).unwrap();

        let content = fs::read_to_string(&file).unwrap();
        let root_name = temp.path().file_name().unwrap().to_string_lossy();
        assert_eq!(
            content,
            format!("// {}/main.rs\r\nfn main() {{}}\r\n", root_name)
        );
    }

    #[test]
    fn test_empty_file_gets_marker_and_newline() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("empty.py");
        fs::write(&file, "").unwrap();

        let outcome = process_file(&file, &config_with_root(temp.path()), &any_filter()).unwrap();

        assert!(matches!(outcome, Outcome::Inserted(_)));
        let content = fs::read_to_string(&file).unwrap();
        let root_name = temp.path().file_name().unwrap().to_string_lossy();
        assert_eq!(content, format!("# {}/empty.py\n", root_name));
    }

    #[test]
    fn test_glob_filter_skips_before_any_decision() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("app.py");
        fs::write(&file, "print('hi')\n").unwrap();
        let filter = FileGlobFilter::new("**/*.rs").unwrap();

        let outcome = process_file(&file, &config_with_root(temp.path()), &filter).unwrap();

        assert_eq!(outcome, Outcome::Skipped("glob filter".to_string()));
        assert_eq!(fs::read_to_string(&file).unwrap(), "print('hi')\n");
    }

    #[test]
    fn test_non_utf8_file_is_skipped() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("blob.py");
        fs::write(&file, [0xff, 0xfe, 0x00, 0x42]).unwrap();

        let outcome = process_file(&file, &config_with_root(temp.path()), &any_filter()).unwrap();

        assert_eq!(outcome, Outcome::Skipped("not UTF-8 text".to_string()));
    }

    #[test]
    fn test_dry_run_reports_without_writing() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("app.py");
        fs::write(&file, "print('hi')\n").unwrap();
        let config = AppConfig {
            dry_run: true,
            ..config_with_root(temp.path())
        };

        let outcome = process_file(&file, &config, &any_filter()).unwrap();

        assert!(matches!(outcome, Outcome::Inserted(_)));
        assert_eq!(fs::read_to_string(&file).unwrap(), "print('hi')\n");
    }

    #[test]
    fn test_disabled_changes_nothing() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("app.py");
        fs::write(&file, "print('hi')\n").unwrap();
        let mut config = config_with_root(temp.path());
        config.marker = MarkerConfig {
            enabled: false,
            ..MarkerConfig::default()
        };

        let outcome = process_file(&file, &config, &any_filter()).unwrap();

        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(fs::read_to_string(&file).unwrap(), "print('hi')\n");
    }

    #[test]
    fn test_untitled_document_from_hint() {
        let config = AppConfig::default();
        let result = process_untitled("print('hi')\n", "python", Some("scratch.py"), &config);
        assert_eq!(result, "# scratch.py\nprint('hi')\n");
    }

    #[test]
    fn test_untitled_document_without_hint() {
        let config = AppConfig::default();
        let result = process_untitled("", "python", None, &config);
        assert_eq!(result, "# untitled\n");
    }

    #[test]
    fn test_replace_first_line_without_trailing_newline() {
        assert_eq!(replace_first_line("// stale.rs", "// fresh.rs"), "// fresh.rs");
    }

    #[test]
    fn test_line_ending_detection() {
        assert_eq!(line_ending_of("a\nb"), "\n");
        assert_eq!(line_ending_of("a\r\nb"), "\r\n");
        assert_eq!(line_ending_of(""), "\n");
    }
}
