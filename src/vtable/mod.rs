//! Vtable extraction: locate an interface declaration, resolve its bases and
//! collect its method slots.

mod locator;
mod root;
mod scanner;
mod status;
mod types;

pub use locator::{Declaration, DeclarationMatch, DeclarationPatterns};
pub use root::{root_methods, ROOT_INTERFACE};
pub use scanner::{MethodScanner, ScannedMethod};
pub use status::{StatusDisplay, StatusHandle};
pub use types::*;

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::VtableError;
use crate::files::candidate_files;
use crate::{clean_path, line_at, read_file_lossy};

use status::ClearOnDrop;

/// Longest base-interface chain followed before giving up.
pub const MAX_INHERITANCE_DEPTH: usize = 64;

// ─── Entry points ────────────────────────────────────────────────────

/// Extract the full vtable of `interface_name` from the headers matched by `file_pattern`.
///
/// `file_pattern` may be a file, a directory (its `*.h` files, subdirectories only with
/// `recurse`) or a glob. Candidate files are tried in path order; the first one that
/// declares the interface produces the result. Unreadable candidates are logged and skipped. Declarative bases are resolved from the
/// same file. With a status handle, each file path is shown before it is read and the
/// channel is cleared once the call returns, whatever the outcome.
pub fn find_vtable(
    interface_name: &str,
    file_pattern: &str,
    recurse: bool,
    status: Option<StatusHandle<'_>>,
) -> Result<VTableResult, VtableError> {
    let _clear = ClearOnDrop(status);
    validate_interface_name(interface_name)?;

    let files = candidate_files(file_pattern, recurse)?;
    let mut chain = Vec::new();
    match resolve_in_files(interface_name, &files, status, &mut chain)? {
        Some(result) => {
            info!(
                name = %interface_name,
                path = %result.source_path.display(),
                methods = result.methods.len(),
                "Resolved vtable"
            );
            Ok(result)
        }
        None => Err(VtableError::InterfaceNotFound {
            name: interface_name.to_string(),
            pattern: file_pattern.to_string(),
        }),
    }
}

/// Every interface declared in the headers matched by `file_pattern`, in file then text order.
pub fn list_interfaces(
    file_pattern: &str,
    recurse: bool,
    status: Option<StatusHandle<'_>>,
) -> Result<Vec<InterfaceSummary>, VtableError> {
    let _clear = ClearOnDrop(status);
    let files = candidate_files(file_pattern, recurse)?;
    let patterns = DeclarationPatterns::any()?;

    let mut summaries = Vec::new();
    for path in &files {
        let Some(text) = read_or_skip(path, status) else {
            continue;
        };
        for found in patterns.locate_all(&text) {
            let (Some(kind), Some(decl)) = (found.kind(), found.declaration()) else {
                continue;
            };
            summaries.push(InterfaceSummary {
                name: decl.name.clone(),
                kind,
                interface_id: decl.iid.clone(),
                base: decl.base.clone(),
                path: path.clone(),
                line: line_at(&text, decl.start),
            });
        }
    }
    debug!(pattern = %file_pattern, interfaces = summaries.len(), "Listed interfaces");
    Ok(summaries)
}

fn validate_interface_name(name: &str) -> Result<(), VtableError> {
    if name.is_empty() {
        return Err(VtableError::InvalidArgs("Interface name must not be empty".to_string()));
    }
    if !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(VtableError::InvalidArgs(format!(
            "Interface name '{}' is not an identifier",
            name
        )));
    }
    Ok(())
}

// ─── Resolution ──────────────────────────────────────────────────────

fn read_candidate(path: &Path, status: Option<StatusHandle<'_>>) -> Result<String, VtableError> {
    if let Some(handle) = status {
        handle.show(&clean_path(&path.to_string_lossy()));
    }
    let (text, lossy) = read_file_lossy(path)?;
    if lossy {
        debug!(path = %path.display(), "Non-UTF8 bytes replaced while reading header");
    }
    Ok(text)
}

/// Candidate text, or `None` after logging when the file can't be read.
fn read_or_skip(path: &Path, status: Option<StatusHandle<'_>>) -> Option<String> {
    match read_candidate(path, status) {
        Ok(text) => Some(text),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Skipping unreadable header");
            None
        }
    }
}

/// Try each file in turn; `None` when no readable file declares `name`.
///
/// `chain` holds the interfaces whose bases are currently being resolved.
fn resolve_in_files(
    name: &str,
    files: &[PathBuf],
    status: Option<StatusHandle<'_>>,
    chain: &mut Vec<String>,
) -> Result<Option<VTableResult>, VtableError> {
    let patterns = DeclarationPatterns::for_interface(name)?;
    for path in files {
        let Some(text) = read_or_skip(path, status) else {
            continue;
        };
        if let Some(result) = resolve_in_text(&patterns, &text, path, status, chain)? {
            return Ok(Some(result));
        }
    }
    Ok(None)
}

fn resolve_in_text(
    patterns: &DeclarationPatterns,
    text: &str,
    path: &Path,
    status: Option<StatusHandle<'_>>,
    chain: &mut Vec<String>,
) -> Result<Option<VTableResult>, VtableError> {
    let found = patterns.locate(text);
    let (Some(kind), Some(decl)) = (found.kind(), found.declaration()) else {
        debug!(path = %path.display(), "No declaration in file");
        return Ok(None);
    };
    assemble(kind, decl, text, path, status, chain).map(Some)
}

/// Build the vtable for a located declaration: inherited prefix, then own methods.
fn assemble(
    kind: GrammarKind,
    decl: &Declaration,
    text: &str,
    path: &Path,
    status: Option<StatusHandle<'_>>,
    chain: &mut Vec<String>,
) -> Result<VTableResult, VtableError> {
    let name = decl.name.as_str();
    debug!(name = %name, kind = %kind, path = %path.display(), "Found declaration");

    let mut methods = match decl.base.as_deref() {
        None => Vec::new(),
        Some(base) if base == ROOT_INTERFACE => root_methods().to_vec(),
        Some(base) => resolve_base(base, name, path, status, chain)?.methods,
    };

    let offset = methods.len();
    let own = MethodScanner::new(kind, name)?.scan(text, decl.end);
    methods.extend(own.into_iter().enumerate().map(|(i, m)| MethodRecord {
        index: offset + i,
        name: m.name,
        line_number: Some(m.line),
        defining_interface: name.to_string(),
        interface_id: Some(decl.iid.clone()),
    }));

    Ok(VTableResult {
        methods,
        source_path: path.to_path_buf(),
    })
}

/// Resolve `base` from the same file `derived` was declared in.
///
/// A read failure here is fatal, unlike for top-level candidates.
fn resolve_base(
    base: &str,
    derived: &str,
    path: &Path,
    status: Option<StatusHandle<'_>>,
    chain: &mut Vec<String>,
) -> Result<VTableResult, VtableError> {
    chain.push(derived.to_string());
    if chain.iter().any(|n| n.eq_ignore_ascii_case(base)) {
        let mut names = std::mem::take(chain);
        names.push(base.to_string());
        return Err(VtableError::InheritanceCycle { chain: names });
    }
    if chain.len() > MAX_INHERITANCE_DEPTH {
        let mut names = std::mem::take(chain);
        names.push(base.to_string());
        return Err(VtableError::InheritanceTooDeep {
            limit: MAX_INHERITANCE_DEPTH,
            chain: names,
        });
    }

    debug!(base = %base, derived = %derived, path = %path.display(), "Resolving base interface");
    let patterns = DeclarationPatterns::for_interface(base)?;
    let text = read_candidate(path, status)?;
    let resolved = resolve_in_text(&patterns, &text, path, status, chain)?;
    chain.pop();

    resolved.ok_or_else(|| VtableError::BaseInterfaceUnresolved {
        base: base.to_string(),
        derived: derived.to_string(),
        path: clean_path(&path.to_string_lossy()),
    })
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "vtable_tests.rs"]
mod tests;
