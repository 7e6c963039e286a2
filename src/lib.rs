//! # vtfind: COM vtable layout extraction
//!
//! Locates a COM-style interface declaration in C/C++ headers and reports its
//! virtual method table: every slot in order, including slots inherited from
//! base interfaces.
//!
//! Two declaration idioms are understood:
//!
//! * MIDL-generated headers (`MIDL_INTERFACE("...")` plus a C `...Vtbl` struct)
//! * Direct2D/DirectWrite style headers (`DX_DECLARE_INTERFACE("...") IFoo : public IBar`)
//!
//! ## Library usage
//!
//! The crate is primarily a CLI tool, but the extraction pipeline is exposed as
//! a library for integration testing and benchmarking.
//!
//! ```no_run
//! let result = vtfind::find_vtable("ID2D1Brush", "C:/sdk/include/um", true, None).unwrap();
//! for m in &result.methods {
//!     println!("{} {}", m.index, m.name);
//! }
//! ```

pub mod error;
pub mod files;
pub mod vtable;

pub use error::VtableError;
pub use files::candidate_files;
pub use vtable::{
    find_vtable, list_interfaces, root_methods, GrammarKind, InterfaceSummary, MethodRecord,
    StatusDisplay, StatusHandle, VTableResult, MAX_INHERITANCE_DEPTH, ROOT_INTERFACE,
};

// ─── Path / text helpers ─────────────────────────────────────────────

/// Strip the `\\?\` extended-length path prefix that Windows canonicalize adds.
#[must_use]
pub fn clean_path(p: &str) -> String {
    p.strip_prefix(r"\\?\").unwrap_or(p).to_string()
}

/// Read a file as a String, using lossy UTF-8 conversion for non-UTF8 files.
/// Returns `(content, was_lossy)` where `was_lossy` is true if replacement characters
/// were inserted. SDK headers occasionally carry Windows-1252 bytes in comments.
pub fn read_file_lossy(path: &std::path::Path) -> std::io::Result<(String, bool)> {
    let raw = std::fs::read(path)?;
    match String::from_utf8(raw) {
        Ok(s) => Ok((s, false)),
        Err(e) => Ok((String::from_utf8_lossy(e.as_bytes()).into_owned(), true)),
    }
}

/// 1-based line number of the byte at `offset`: newlines before it, plus one.
///
/// Offsets past the end of `text` are clamped.
#[must_use]
pub fn line_at(text: &str, offset: usize) -> u32 {
    let end = offset.min(text.len());
    text.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() as u32 + 1
}


// ─── Property-based tests (proptest) ─────────────────────────────────
