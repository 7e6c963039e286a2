//! Unified error type for vtable extraction.

use thiserror::Error;

/// All errors that can occur while locating and resolving an interface vtable.
#[derive(Error, Debug)]
pub enum VtableError {
    /// I/O error (file read, directory access)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error (result output)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The file/directory/glob pattern resolved to zero candidate files
    #[error("Pattern matched no files: {pattern}")]
    NoMatchingFiles { pattern: String },

    /// Candidate files exist but none of them declares the interface
    #[error("Interface '{name}' not found in files matching '{pattern}'")]
    InterfaceNotFound { name: String, pattern: String },

    /// A declared base interface could not be found in the file of its derived interface
    #[error("Base interface '{base}' of '{derived}' not found in {path}")]
    BaseInterfaceUnresolved {
        base: String,
        derived: String,
        path: String,
    },

    /// Base interface references loop back on themselves
    #[error("Inheritance cycle while resolving base interfaces: {}", .chain.join(" -> "))]
    InheritanceCycle { chain: Vec<String> },

    /// Base interface chain nests deeper than the resolver follows
    #[error("Base interface chain deeper than {limit} levels: {}", .chain.join(" -> "))]
    InheritanceTooDeep { limit: usize, chain: Vec<String> },

    /// Regex built from an interface name failed to compile
    #[error("Invalid regex pattern '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Invalid glob in the file pattern
    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: ignore::Error,
    },

    /// Argument validation error
    #[error("{0}")]
    InvalidArgs(String),
}
