// crates/decide_marker/src/lib.rs

//! The decision engine: given one document snapshot and one configuration,
//! produce the single edit (or non-edit) that brings the file's first line
//! to its marker comment. Pure function, no I/O; the host reads documents
//! and applies edits.

use std::path::PathBuf;

use comment_syntax::{CommentSyntax, DEFAULT_PREFIX};
use compute_label::compute_label;
use detect_marker::is_likely_marker;

/// Everything the engine needs to know about one document, captured at the
/// moment of the decision.
#[derive(Debug, Clone)]
pub struct DocumentSnapshot {
    /// Editor-style language id, e.g. `"rust"` or `"python"`.
    pub language_id: String,
    /// Literal text of line 0; empty string for an empty document.
    pub first_line: String,
    /// Absolute path of the document.
    pub path: PathBuf,
    /// Whether the document has never been saved.
    pub is_untitled: bool,
    /// Display name the host knows for an untitled document.
    pub file_name_hint: Option<String>,
    /// Project root used for relative labels, if one is known.
    pub project_root: Option<PathBuf>,
}

/// Per-invocation configuration. Immutable for the duration of one decision.
#[derive(Debug, Clone)]
pub struct MarkerConfig {
    /// Global kill switch.
    pub enabled: bool,
    /// Whether to consult the per-language syntax table.
    pub auto_detect_comment: bool,
    /// Explicit override prefix; empty counts as unset.
    pub comment_prefix: Option<String>,
    /// Whether an exact first-line match suppresses any edit.
    pub skip_if_present: bool,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        MarkerConfig {
            enabled: true,
            auto_detect_comment: true,
            comment_prefix: None,
            skip_if_present: true,
        }
    }
}

/// The desired edit. Carried text never ends in a newline; the host appends
/// its own line-ending convention when inserting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    NoOp,
    InsertAtTop(String),
    ReplaceFirstLine(String),
}

impl Decision {
    /// The marker text this decision would write, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Decision::NoOp => None,
            Decision::InsertAtTop(text) | Decision::ReplaceFirstLine(text) => Some(text),
        }
    }
}

/// Decides what to do with the first line of `doc` under `config`.
///
/// Re-running on a document whose first line already carries the up-to-date
/// marker yields `NoOp` (with `skip_if_present` on), so applying the result
/// and deciding again always converges.
pub fn decide(doc: &DocumentSnapshot, config: &MarkerConfig) -> Decision {
    if !config.enabled {
        return Decision::NoOp;
    }

    let syntax = resolve_syntax(&doc.language_id, config);
    let label = compute_label(
        &doc.path,
        doc.is_untitled,
        doc.file_name_hint.as_deref(),
        doc.project_root.as_deref(),
    );

    let target = match syntax.format_line(&label) {
        Some(target) => target,
        // No comment syntax available (e.g. JSON): nothing to maintain.
        None => return Decision::NoOp,
    };

    if config.skip_if_present && doc.first_line.trim() == target.trim() {
        return Decision::NoOp;
    }

    if is_likely_marker(&doc.first_line, &syntax) {
        Decision::ReplaceFirstLine(target)
    } else {
        Decision::InsertAtTop(target)
    }
}

/// Resolves the comment syntax for a language under the configuration.
///
/// Precedence is inherited behavior: an explicit override prefix applies
/// only when auto-detect is off or the override differs from the default
/// `//`; otherwise auto-detect consults the table, and the final fallback
/// is the override prefix or `//`.
fn resolve_syntax(language_id: &str, config: &MarkerConfig) -> CommentSyntax {
    let override_prefix = config
        .comment_prefix
        .as_deref()
        .filter(|prefix| !prefix.is_empty());

    if let Some(prefix) = override_prefix {
        if !config.auto_detect_comment || prefix != DEFAULT_PREFIX {
            return CommentSyntax::line(prefix);
        }
    }

    if config.auto_detect_comment {
        if let Some(syntax) = comment_syntax::lookup(language_id) {
            return syntax;
        }
    }

    CommentSyntax::line(override_prefix.unwrap_or(DEFAULT_PREFIX))
}
