//! Core data types for vtable extraction.

use std::path::PathBuf;

use serde::Serialize;

// ─── Grammar Kind ────────────────────────────────────────────────────

/// The declaration idiom an interface was found in.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum GrammarKind {
    /// MIDL output: `MIDL_INTERFACE("...")` + name line, methods in the C `<Name>Vtbl` struct.
    Classic,
    /// `DX_DECLARE_INTERFACE("...") <Name> : public <Base>`, methods as `STDMETHOD` lines.
    Declarative,
}

impl GrammarKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Declarative => "declarative",
        }
    }
}

impl std::fmt::Display for GrammarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── Method Record ───────────────────────────────────────────────────

/// One vtable slot.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MethodRecord {
    /// Zero-based slot position in the full vtable.
    pub index: usize,
    pub name: String,
    /// 1-based line of the method name; `None` for the implicit `IUnknown` slots.
    pub line_number: Option<u32>,
    /// Interface whose declaration contains this method.
    pub defining_interface: String,
    /// Braced IID of `defining_interface`; `None` for the implicit `IUnknown` slots.
    pub interface_id: Option<String>,
}

// ─── VTable Result ───────────────────────────────────────────────────

/// Full vtable of the requested interface.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VTableResult {
    /// Slots in vtable order; `methods[i].index == i`.
    pub methods: Vec<MethodRecord>,
    /// File in which the most-derived interface was declared.
    pub source_path: PathBuf,
}

impl VTableResult {
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

// ─── Interface Summary ───────────────────────────────────────────────

/// An interface declaration found while listing a header set.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceSummary {
    pub name: String,
    pub kind: GrammarKind,
    pub interface_id: String,
    /// Declared base; only captured for the declarative idiom.
    pub base: Option<String>,
    pub path: PathBuf,
    pub line: u32,
}
