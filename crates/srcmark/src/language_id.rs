// crates/srcmark/src/language_id.rs

//! Language detection for the document provider. An editor host hands the
//! core a language id directly; on the command line the id is derived from
//! the file name. Ids chosen here line up with the entries of the
//! `comment_syntax` table; anything unrecognized passes through lowercased
//! and takes the engine's fallback.

use std::path::Path;

/// Returns the language id for a path.
///
/// Well-known basenames win over extensions (a `Makefile` has no extension;
/// `CMakeLists.txt` must not classify as text). Unknown extensions are
/// returned as-is, lowercased; extensionless files return their lowercased
/// file name.
pub fn language_id_for_path(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match file_name.as_str() {
        "makefile" | "gnumakefile" => return "makefile".to_string(),
        "dockerfile" | "containerfile" => return "dockerfile".to_string(),
        "cmakelists.txt" => return "cmake".to_string(),
        ".gitignore" => return "gitignore".to_string(),
        ".editorconfig" => return "editorconfig".to_string(),
        _ => {}
    }

    let ext = match path.extension() {
        Some(ext) => ext.to_string_lossy().to_lowercase(),
        None => return file_name,
    };

    let id = match ext.as_str() {
        "rs" => "rust",
        "py" | "pyw" => "python",
        "js" | "mjs" | "cjs" => "javascript",
        "jsx" => "javascriptreact",
        "ts" => "typescript",
        "tsx" => "typescriptreact",
        "java" => "java",
        "c" | "h" => "c",
        "cpp" | "cc" | "cxx" | "hpp" | "hh" | "hxx" => "cpp",
        "cs" => "csharp",
        "go" => "go",
        "swift" => "swift",
        "kt" | "kts" => "kotlin",
        "php" => "php",
        "dart" => "dart",
        "scala" => "scala",
        "groovy" => "groovy",
        "m" => "objective-c",
        "mm" => "objective-cpp",
        "rb" => "ruby",
        "pl" | "pm" => "perl",
        "sh" => "shell",
        "bash" => "bash",
        "zsh" => "zsh",
        "fish" => "fish",
        "ps1" | "psm1" => "powershell",
        "yaml" | "yml" => "yaml",
        "toml" => "toml",
        "cmake" => "cmake",
        "coffee" => "coffee",
        "r" => "r",
        "sql" => "sql",
        "lua" => "lua",
        "hs" => "haskell",
        "elm" => "elm",
        "purs" => "purescript",
        "clj" | "cljs" | "cljc" => "clojure",
        "lisp" | "lsp" => "lisp",
        "scm" | "ss" => "scheme",
        "rkt" => "racket",
        "erl" | "hrl" => "erlang",
        "tex" => "latex",
        "bib" => "bibtex",
        "html" | "htm" => "html",
        "xml" | "xsd" | "xsl" => "xml",
        "md" | "markdown" => "markdown",
        "svg" => "svg",
        "css" => "css",
        "less" => "less",
        "scss" => "scss",
        "sass" => "sass",
        "styl" => "stylus",
        "vim" => "vim",
        "ini" | "cfg" => "ini",
        "properties" => "properties",
        "graphql" | "gql" => "graphql",
        "json" => "json",
        "jsonc" => "jsonc",
        "json5" => "json5",
        _ => return ext,
    };
    id.to_string()
}
