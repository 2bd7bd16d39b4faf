// crates/comment_syntax/src/lib.rs

//! `comment_syntax` — per-language comment knowledge, kept in one place so
//! the rest of the workspace stays free of giant `match lang { … }` chains.
//!
//!  * **One value type** – [`CommentSyntax`] – a line prefix, a prefix/suffix
//!    pair, or "this format has no comments at all".
//!  * **One static table** – [`lookup`] – maps an editor-style language id
//!    (`"rust"`, `"python"`, `"html"`, …) to its syntax.
//!  * **One formatter** – [`CommentSyntax::format_line`] – the single source
//!    of truth for the literal text of a marker line.

/// Line-comment prefix used when nothing better is known.
pub const DEFAULT_PREFIX: &str = "//";

/// Comment syntax of a single language.
///
/// `Unsupported` marks formats that have no comment syntax whatsoever
/// (e.g. strict JSON); nothing can ever be written into such a file, which
/// is distinct from a language that is merely absent from the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentSyntax {
    /// Single-line comment, e.g. `// label`.
    Line { prefix: String },
    /// Comment requiring a closing token, e.g. `<!-- label -->`.
    Block { prefix: String, suffix: String },
    /// The format has no comment syntax at all.
    Unsupported,
}

impl CommentSyntax {
    pub fn line(prefix: impl Into<String>) -> Self {
        CommentSyntax::Line {
            prefix: prefix.into(),
        }
    }

    pub fn block(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        CommentSyntax::Block {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// The opening token, if the syntax has one.
    pub fn prefix(&self) -> Option<&str> {
        match self {
            CommentSyntax::Line { prefix } => Some(prefix),
            CommentSyntax::Block { prefix, .. } => Some(prefix),
            CommentSyntax::Unsupported => None,
        }
    }

    /// The closing token, if the syntax requires one.
    pub fn suffix(&self) -> Option<&str> {
        match self {
            CommentSyntax::Block { suffix, .. } => Some(suffix),
            _ => None,
        }
    }

    /// Renders the marker line for `label`, or `None` when the syntax cannot
    /// represent a comment. Callers must not build marker text any other
    /// way; the stale-marker heuristic relies on this exact shape.
    pub fn format_line(&self, label: &str) -> Option<String> {
        match self {
            CommentSyntax::Line { prefix } => Some(format!("{} {}", prefix, label)),
            CommentSyntax::Block { prefix, suffix } => {
                Some(format!("{} {} {}", prefix, label, suffix))
            }
            CommentSyntax::Unsupported => None,
        }
    }
}

/// Returns the [`CommentSyntax`] for an editor-style language id, or `None`
/// when the language is not in the table. Ids are matched verbatim; the
/// caller decides what an unknown id falls back to.
pub fn lookup(language_id: &str) -> Option<CommentSyntax> {
    let syntax = match language_id {
        // C-style comments
        "javascript" | "javascriptreact" | "typescript" | "typescriptreact" | "java" | "c"
        | "cpp" | "csharp" | "go" | "swift" | "kotlin" | "rust" | "php" | "dart" | "scala"
        | "groovy" | "objective-c" | "objective-cpp" => CommentSyntax::line("//"),

        // Hash/pound comments
        "python" | "ruby" | "perl" | "shell" | "bash" | "sh" | "zsh" | "fish" | "powershell"
        | "yaml" | "toml" | "makefile" | "cmake" | "dockerfile" | "nginx" | "coffee" | "r" => {
            CommentSyntax::line("#")
        }

        // SQL-style comments
        "sql" | "lua" | "haskell" | "elm" | "purescript" => CommentSyntax::line("--"),

        // Lisp-style comments
        "clojure" | "lisp" | "scheme" | "racket" => CommentSyntax::line(";"),

        // Percent comments
        "erlang" | "prolog" | "latex" | "bibtex" | "matlab" => CommentSyntax::line("%"),

        // Markup languages
        "html" | "xml" | "markdown" | "svg" => CommentSyntax::block("<!--", "-->"),

        // CSS-style comments
        "css" => CommentSyntax::block("/*", "*/"),
        "less" | "scss" | "sass" | "stylus" => CommentSyntax::line("//"),

        // Other
        "vim" => CommentSyntax::line("\""),
        "ini" => CommentSyntax::line(";"),
        "properties" | "gitignore" | "editorconfig" | "graphql" => CommentSyntax::line("#"),
        // Strict JSON has no comments
        "json" => CommentSyntax::Unsupported,
        "jsonc" | "json5" => CommentSyntax::line("//"),

        _ => return None,
    };
    Some(syntax)
}
