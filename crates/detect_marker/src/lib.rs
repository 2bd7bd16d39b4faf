// crates/detect_marker/src/lib.rs

//! Heuristic detection of existing marker comments.
//!
//! A stale marker (old label, same comment syntax) must be *replaced*, not
//! duplicated, so this crate answers "does this line look like a marker?"
//! without requiring an exact text match. The heuristic is deliberately
//! permissive: a short bare token such as `main` still counts as path-like.
//! A false positive merely replaces a line that already looked like a path.

use comment_syntax::CommentSyntax;
use once_cell::sync::Lazy;
use regex::Regex;

// ---------------------------------------------------------------------------
//  Regexes
// ---------------------------------------------------------------------------

// Ends in a dot followed by 1-8 word characters, e.g. ".rs", ".html"
static EXTENSION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.\w{1,8}$").unwrap());

// Entirely word characters, hyphens, dots and slashes; no spaces
static FILE_NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w\-./\\]+$").unwrap());

/// Returns `true` if `line` is likely an existing marker comment written in
/// `syntax`, i.e. a comment whose content looks like a file path.
pub fn is_likely_marker(line: &str, syntax: &CommentSyntax) -> bool {
    let prefix = match syntax.prefix() {
        Some(prefix) => prefix.trim(),
        // No comment syntax, nothing to detect.
        None => return false,
    };

    let trimmed = line.trim();
    if !trimmed.starts_with(prefix) {
        return false;
    }

    let mut content = trimmed[prefix.len()..].trim();

    // Closing token, when the syntax has one, is optional here: a marker
    // left behind with a missing suffix should still be recognized.
    if let Some(suffix) = syntax.suffix() {
        if let Some(stripped) = content.strip_suffix(suffix.trim()) {
            content = stripped.trim();
        }
    }

    has_extension(content) || has_path_separator(content) || looks_like_file_name(content)
}

fn has_extension(content: &str) -> bool {
    EXTENSION_RE.is_match(content)
}

fn has_path_separator(content: &str) -> bool {
    content.contains('/') || content.contains('\\')
}

fn looks_like_file_name(content: &str) -> bool {
    !content.is_empty() && FILE_NAME_RE.is_match(content)
}
