//! Declaration locator: finds an interface declaration in header text.
//!
//! Two idioms are recognized. MIDL-generated headers:
//!
//! ```text
//!     MIDL_INTERFACE("2cd90691-12e2-11dc-9fed-001143a055f9")
//!     ID2D1Resource : public IUnknown
//! ```
//!
//! and the hand-written Direct2D/DirectWrite style:
//!
//! ```text
//! interface DX_DECLARE_INTERFACE("2cd90691-12e2-11dc-9fed-001143a055f9") ID2D1Resource  : public IUnknown
//! ```
//!
//! Only the second form contributes its base name for recursive resolution; in
//! MIDL output the C `Vtbl` struct already spells out every inherited slot.

use regex::{Captures, Regex};

use crate::error::VtableError;

use super::types::GrammarKind;

/// 8-4-4-4-12 hex groups.
const GUID_PATTERN: &str =
    r"[0-9A-Fa-f]{8}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{12}";

/// Name fragment used when listing every declaration instead of looking for one.
const ANY_NAME: &str = r"\w+";

// ─── Match result ────────────────────────────────────────────────────

/// A located interface declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Byte offset where the declaration starts.
    pub start: usize,
    /// Byte offset just past the declaration; method scanning begins here.
    pub end: usize,
    /// Interface name as spelled in the header.
    pub name: String,
    /// Braced IID, e.g. `{2cd90691-12e2-11dc-9fed-001143a055f9}`.
    pub iid: String,
    /// Base interface to resolve recursively (declarative idiom only).
    pub base: Option<String>,
}

/// Outcome of looking for a declaration in one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationMatch {
    Classic(Declaration),
    Declarative(Declaration),
    NoMatch,
}

impl DeclarationMatch {
    pub fn kind(&self) -> Option<GrammarKind> {
        match self {
            Self::Classic(_) => Some(GrammarKind::Classic),
            Self::Declarative(_) => Some(GrammarKind::Declarative),
            Self::NoMatch => None,
        }
    }

    pub fn declaration(&self) -> Option<&Declaration> {
        match self {
            Self::Classic(d) | Self::Declarative(d) => Some(d),
            Self::NoMatch => None,
        }
    }

    pub fn start(&self) -> Option<usize> {
        self.declaration().map(|d| d.start)
    }

}

// ─── Patterns ────────────────────────────────────────────────────────

/// Compiled declaration grammars for one interface name (or for any name).
pub struct DeclarationPatterns {
    classic: Regex,
    declarative: Regex,
}

impl DeclarationPatterns {
    /// Patterns matching the declaration of `name`, compared case-insensitively.
    pub fn for_interface(name: &str) -> Result<Self, VtableError> {
        Self::build(&format!("(?i:{})", regex::escape(name)))
    }

    /// Patterns matching every interface declaration.
    pub fn any() -> Result<Self, VtableError> {
        Self::build(ANY_NAME)
    }

    fn build(name: &str) -> Result<Self, VtableError> {
        let classic = format!(
            r#"(?m)MIDL_INTERFACE\(\s*"(?P<iid>{GUID_PATTERN})"\s*\)[ \t]*\r?\n[ \t]*(?P<name>{name})[ \t]*(?::[ \t]*public[ \t]+\w+[ \t]*)?\r?$"#
        );
        let declarative = format!(
            r#"DX_DECLARE_INTERFACE\(\s*"(?P<iid>{GUID_PATTERN})"\s*\)\s*(?P<name>{name})\s*:\s*public\s+(?P<base>\w+)"#
        );
        Ok(Self {
            classic: compile(&classic)?,
            declarative: compile(&declarative)?,
        })
    }

    /// First declaration in `text`, trying the MIDL idiom before the declarative one.
    pub fn locate(&self, text: &str) -> DeclarationMatch {
        if let Some(caps) = self.classic.captures(text) {
            return classic_match(&caps);
        }
        if let Some(caps) = self.declarative.captures(text) {
            return declarative_match(&caps);
        }
        DeclarationMatch::NoMatch
    }

    /// Every declaration in `text`, in textual order.
    pub fn locate_all(&self, text: &str) -> Vec<DeclarationMatch> {
        let mut found: Vec<DeclarationMatch> = self.classic.captures_iter(text)
            .map(|caps| classic_match(&caps))
            .chain(self.declarative.captures_iter(text).map(|caps| declarative_match(&caps)))
            .collect();
        found.sort_by_key(|m| m.start());
        found
    }
}

fn compile(pattern: &str) -> Result<Regex, VtableError> {
    Regex::new(pattern).map_err(|source| VtableError::InvalidRegex {
        pattern: pattern.to_string(),
        source,
    })
}

fn braced(iid: &str) -> String {
    format!("{{{}}}", iid)
}

fn declaration(caps: &Captures<'_>, base: Option<String>) -> Declaration {
    let whole = caps.get(0).map_or(0..0, |m| m.range());
    Declaration {
        start: whole.start,
        end: whole.end,
        name: caps["name"].to_string(),
        iid: braced(&caps["iid"]),
        base,
    }
}

fn classic_match(caps: &Captures<'_>) -> DeclarationMatch {
    // Any `: public Base` is already flattened into the Vtbl struct
    DeclarationMatch::Classic(declaration(caps, None))
}

fn declarative_match(caps: &Captures<'_>) -> DeclarationMatch {
    let base = caps["base"].to_string();
    DeclarationMatch::Declarative(declaration(caps, Some(base)))
}
