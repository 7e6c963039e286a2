//! Candidate file enumeration: literal file, directory of headers, or glob.

use std::path::{Component, Path, PathBuf};

use ignore::overrides::OverrideBuilder;
use ignore::WalkBuilder;
use tracing::debug;

use crate::error::VtableError;

/// Extension of the header files picked up when the pattern is a directory.
pub const HEADER_EXT: &str = "h";

/// Resolve `pattern` to the ordered list of files to scan.
///
/// * an existing file is the single candidate;
/// * an existing directory yields every `*.h` beneath it (only the top level unless `recurse`);
/// * anything else is treated as a glob: the leading glob-free directories form the
///   walk root and the remainder is matched with gitignore glob semantics.
///
/// Candidates are returned sorted by path so repeated calls visit files in the same order.
/// Zero candidates is an error carrying the pattern.
pub fn candidate_files(pattern: &str, recurse: bool) -> Result<Vec<PathBuf>, VtableError> {
    if pattern.trim().is_empty() {
        return Err(VtableError::InvalidArgs("File pattern must not be empty".to_string()));
    }

    let path = Path::new(pattern);
    let files = if path.is_file() {
        vec![path.to_path_buf()]
    } else if path.is_dir() {
        walk_headers(path, recurse)
    } else if has_glob_meta(pattern) {
        walk_glob(pattern, recurse)?
    } else {
        Vec::new()
    };

    if files.is_empty() {
        return Err(VtableError::NoMatchingFiles { pattern: pattern.to_string() });
    }
    debug!(pattern = %pattern, files = files.len(), "Resolved candidate files");
    Ok(files)
}

fn has_glob_meta(s: &str) -> bool {
    s.contains(['*', '?', '[', '{'])
}

fn walker(root: &Path, max_depth: Option<usize>) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);
    // SDK include trees are not git repositories; never filter on ignore files or hidden bits.
    builder.standard_filters(false);
    builder.follow_links(true);
    builder.max_depth(max_depth);
    builder.sort_by_file_name(|a, b| a.cmp(b));
    builder
}

fn walk_headers(dir: &Path, recurse: bool) -> Vec<PathBuf> {
    let max_depth = if recurse { None } else { Some(1) };
    let mut files = Vec::new();
    for entry in walker(dir, max_depth).build() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                debug!(error = %e, "Skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let is_header = entry.path().extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(HEADER_EXT));
        if is_header {
            files.push(entry.into_path());
        }
    }
    files
}

/// Split a glob into its literal directory prefix and the glob remainder.
fn split_glob(pattern: &str) -> (PathBuf, String) {
    let mut root = PathBuf::new();
    let mut rest: Vec<String> = Vec::new();
    for component in Path::new(pattern).components() {
        let text = component.as_os_str().to_string_lossy();
        if rest.is_empty() && !has_glob_meta(&text) {
            root.push(component.as_os_str());
        } else if let Component::Normal(_) = component {
            rest.push(text.into_owned());
        }
    }
    // The final literal component is the file name, not a directory.
    if rest.is_empty() {
        if let Some(name) = root.file_name().map(|n| n.to_string_lossy().into_owned()) {
            root.pop();
            rest.push(name);
        }
    }
    if root.as_os_str().is_empty() {
        root.push(".");
    }
    (root, rest.join("/"))
}

fn walk_glob(pattern: &str, recurse: bool) -> Result<Vec<PathBuf>, VtableError> {
    let (root, glob) = split_glob(pattern);
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let glob_err = |source| VtableError::InvalidGlob { pattern: pattern.to_string(), source };
    let mut overrides = OverrideBuilder::new(&root);
    overrides.add(&glob).map_err(glob_err)?;
    let overrides = overrides.build().map_err(glob_err)?;

    let max_depth = if recurse { None } else { Some(glob.split('/').count()) };
    let mut files = Vec::new();
    for entry in walker(&root, max_depth).build() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                debug!(error = %e, "Skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        if overrides.matched(entry.path(), false).is_whitelist() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "// header\n").unwrap();
    }

    fn names(files: &[PathBuf]) -> Vec<String> {
        files.iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_literal_file_is_single_candidate() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("d2d1.h");
        touch(&file);
        let files = candidate_files(file.to_str().unwrap(), false).unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_literal_file_any_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("ocidl.idl.txt");
        touch(&file);
        let files = candidate_files(file.to_str().unwrap(), false).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_directory_top_level_only() {
        let tmp = tempfile::tempdir().unwrap();
        touch(&tmp.path().join("b.h"));
        touch(&tmp.path().join("a.h"));
        touch(&tmp.path().join("notes.txt"));
        touch(&tmp.path().join("sub").join("c.h"));

        let files = candidate_files(tmp.path().to_str().unwrap(), false).unwrap();
        assert_eq!(names(&files), vec!["a.h", "b.h"]);
    }

    #[test]
    fn test_directory_recursive() {
        let tmp = tempfile::tempdir().unwrap();
        touch(&tmp.path().join("a.h"));
        touch(&tmp.path().join("sub").join("c.h"));
        touch(&tmp.path().join("sub").join("deeper").join("d.H"));

        let files = candidate_files(tmp.path().to_str().unwrap(), true).unwrap();
        let mut got = names(&files);
        got.sort();
        assert_eq!(got, vec!["a.h", "c.h", "d.H"]);
    }

    #[test]
    fn test_glob_in_directory() {
        let tmp = tempfile::tempdir().unwrap();
        touch(&tmp.path().join("d2d1.h"));
        touch(&tmp.path().join("d2d1_1.h"));
        touch(&tmp.path().join("dwrite.h"));
        touch(&tmp.path().join("sub").join("d2d1_2.h"));

        let pattern = format!("{}/d2d1*.h", tmp.path().display());
        let files = candidate_files(&pattern, false).unwrap();
        assert_eq!(names(&files), vec!["d2d1.h", "d2d1_1.h"]);
    }

    #[test]
    fn test_glob_recursive() {
        let tmp = tempfile::tempdir().unwrap();
        touch(&tmp.path().join("d2d1.h"));
        touch(&tmp.path().join("sub").join("d2d1_2.h"));
        touch(&tmp.path().join("sub").join("dwrite.h"));

        let pattern = format!("{}/d2d1*.h", tmp.path().display());
        let files = candidate_files(&pattern, true).unwrap();
        let mut got = names(&files);
        got.sort();
        assert_eq!(got, vec!["d2d1.h", "d2d1_2.h"]);
    }

    #[test]
    fn test_no_matching_files_for_missing_path() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.h");
        let err = candidate_files(missing.to_str().unwrap(), false).unwrap_err();
        assert!(matches!(err, VtableError::NoMatchingFiles { .. }));
    }

    #[test]
    fn test_no_matching_files_for_empty_glob() {
        let tmp = tempfile::tempdir().unwrap();
        touch(&tmp.path().join("a.h"));
        let pattern = format!("{}/*.hpp", tmp.path().display());
        let err = candidate_files(&pattern, true).unwrap_err();
        match err {
            VtableError::NoMatchingFiles { pattern: p } => assert_eq!(p, pattern),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_no_matching_files_for_headerless_dir() {
        let tmp = tempfile::tempdir().unwrap();
        touch(&tmp.path().join("readme.md"));
        let err = candidate_files(tmp.path().to_str().unwrap(), true).unwrap_err();
        assert!(matches!(err, VtableError::NoMatchingFiles { .. }));
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let err = candidate_files("  ", false).unwrap_err();
        assert!(matches!(err, VtableError::InvalidArgs(_)));
    }

    #[test]
    fn test_split_glob() {
        let (root, glob) = split_glob("include/um/d2d1*.h");
        assert_eq!(root, PathBuf::from("include/um"));
        assert_eq!(glob, "d2d1*.h");

        let (root, glob) = split_glob("*.h");
        assert_eq!(root, PathBuf::from("."));
        assert_eq!(glob, "*.h");

        let (root, glob) = split_glob("include/*/d2d1.h");
        assert_eq!(root, PathBuf::from("include"));
        assert_eq!(glob, "*/d2d1.h");
    }
}
