// crates/compute_label/src/lib.rs

use std::path::Path;

/// Computes the human-readable label embedded in a marker comment.
///
/// * Untitled (unsaved) documents label as the base name of the hint, or the
///   literal `"untitled"` when no hint exists.
/// * With a known project root, the label is `"<rootName>/<relativePath>"`
///   with `/` separators. A document exactly at the root, outside the root,
///   or whose relative path cannot be computed labels as its base name.
/// * With no root, the label is the document's base name.
///
/// # Arguments
///
/// * `doc_path` - Absolute path of the document.
/// * `is_untitled` - Whether the document has never been saved.
/// * `file_name_hint` - Display name the host knows for an untitled document.
/// * `project_root` - Absolute path of the project root, if one is known.
pub fn compute_label(
    doc_path: &Path,
    is_untitled: bool,
    file_name_hint: Option<&str>,
    project_root: Option<&Path>,
) -> String {
    if is_untitled {
        return file_name_hint
            .map(Path::new)
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "untitled".to_string());
    }

    let root = match project_root {
        Some(root) => root,
        None => return base_name(doc_path),
    };

    // A root with no base name of its own (e.g. "/") cannot produce a
    // "<rootName>/<rel>" label.
    let root_name = match root.file_name() {
        Some(name) => name.to_string_lossy(),
        None => return base_name(doc_path),
    };

    match doc_path.strip_prefix(root) {
        // Relative path must be non-empty; a document sitting exactly at the
        // root labels as its base name, never as "<rootName>/".
        Ok(rel) if !rel.as_os_str().is_empty() => {
            let rel: Vec<_> = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect();
            format!("{}/{}", root_name, rel.join("/"))
        }
        // Empty relative path, document outside the root, or any failure of
        // the relative computation: fall back to the base name.
        _ => base_name(doc_path),
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
