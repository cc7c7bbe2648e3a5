//! Error types for the SCX engine.

use thiserror::Error;

/// Errors raised by recombination strategies and configuration lookup.
///
/// All of them abort the current invocation. The engine never retries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScxError {
    /// `scx` found no crossover genome where it needs one: on either
    /// parent, or on the child after mutation.
    #[error("cannot apply scx: {role} has no crossover genome")]
    MissingCrossover { role: &'static str },

    /// `scxFromSupport` was invoked with a support individual that carries
    /// no crossover genome (or with no support individual at all).
    #[error("cannot apply scx from support: support individual has no crossover genome")]
    MissingSupport,

    /// A configuration name does not match any registered operator.
    #[error("unknown {kind} operator: {name:?}")]
    UnknownOperator { kind: &'static str, name: String },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A parent is shorter than the gene position being read.
    #[error("parent {parent} has {len} genes, position {position} is out of range")]
    LengthMismatch {
        parent: usize,
        len: usize,
        position: usize,
    },

    /// A strategy received fewer parents than it needs.
    #[error("{strategy} needs at least {required} parents, got {got}")]
    NotEnoughParents {
        strategy: &'static str,
        required: usize,
        got: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScxError>;
