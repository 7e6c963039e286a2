//! Method scanner: collects the method slots that follow a located declaration.

use regex::Regex;
use tracing::debug;

use crate::error::VtableError;
use crate::line_at;

use super::types::GrammarKind;

/// `HRESULT ( STDMETHODCALLTYPE *QueryInterface )(` inside a MIDL `Vtbl` struct.
const CLASSIC_METHOD: &str = r"STDMETHODCALLTYPE\s*\*\s*(?P<name>\w+)\s*\)\s*\(";

/// `STDMETHOD(Name)(` or `STDMETHOD_(ReturnType, Name)(`.
const DECLARATIVE_METHOD: &str =
    r"\bSTDMETHOD(?:_\(\s*[^,()]+?\s*,|\()\s*(?P<name>\w+)\s*\)\s*\(";

/// One method found in the header text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedMethod {
    pub name: String,
    /// 1-based line of the method name.
    pub line: u32,
}

/// Grammar-specific method and terminator patterns for one interface.
pub struct MethodScanner {
    /// Classic only: the companion `<Name>Vtbl` struct to advance to first.
    anchor: Option<Regex>,
    method: Regex,
    terminator: Regex,
}

impl MethodScanner {
    pub fn new(kind: GrammarKind, interface: &str) -> Result<Self, VtableError> {
        let name = regex::escape(interface);
        let scanner = match kind {
            GrammarKind::Classic => Self {
                anchor: Some(compile(&format!(r"\b(?i:{name})Vtbl\b"))?),
                method: compile(CLASSIC_METHOD)?,
                terminator: compile(&format!(r"\bEND_INTERFACE\b|\}}\s*(?i:{name})Vtbl\b"))?,
            },
            GrammarKind::Declarative => Self {
                anchor: None,
                method: compile(DECLARATIVE_METHOD)?,
                terminator: compile(&format!(r"\}}\s*;?[ \t]*//[ \t]*interface[ \t]+(?i:{name})\b"))?,
            },
        };
        Ok(scanner)
    }

    /// Methods declared after byte offset `start`, up to the terminator.
    ///
    /// A missing `Vtbl` struct yields no methods; a missing terminator lets the
    /// scan run to the end of the text.
    pub fn scan(&self, text: &str, start: usize) -> Vec<ScannedMethod> {
        let from = match &self.anchor {
            Some(anchor) => match anchor.find_at(text, start) {
                Some(m) => m.end(),
                None => {
                    debug!(offset = start, "No Vtbl struct after declaration");
                    return Vec::new();
                }
            },
            None => start,
        };

        let limit = match self.terminator.find_at(text, from) {
            Some(m) => m.start(),
            None => {
                debug!(offset = from, "No terminator after declaration, scanning to end of text");
                text.len()
            }
        };

        let mut methods = Vec::new();
        let mut pos = from;
        while let Some(caps) = self.method.captures_at(text, pos) {
            let Some(whole) = caps.get(0) else { break };
            // Terminator wins ties
            if whole.start() >= limit {
                break;
            }
            if let Some(name) = caps.name("name") {
                methods.push(ScannedMethod {
                    name: name.as_str().to_string(),
                    line: line_at(text, name.end()),
                });
            }
            pos = whole.end();
        }
        methods
    }
}

fn compile(pattern: &str) -> Result<Regex, VtableError> {
    Regex::new(pattern).map_err(|source| VtableError::InvalidRegex {
        pattern: pattern.to_string(),
        source,
    })
}
