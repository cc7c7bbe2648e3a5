//! Named mutation operators applied by `scx`.
//!
//! Mutation itself belongs to the outer driver. The engine only needs to
//! resolve the `scxMutation` name to something callable, so drivers
//! register their operators in a [`MutationRegistry`] and the engine looks
//! them up once, when an [`ScxContext`](super::ScxContext) is built.

use super::config::ScxConfig;
use crate::error::{Result, ScxError};
use rand::RngCore;
use std::collections::BTreeMap;
use std::fmt;

/// A mutation operator: mutates an individual in place.
pub type MutationFn<I> = fn(&mut I, &ScxConfig, &mut dyn RngCore);

/// Name of the built-in operator that leaves the individual unchanged.
pub const NO_MUTATION: &str = "none";

/// Name → operator map for mutation.
///
/// # Examples
///
/// ```
/// use rand::{Rng, RngCore};
/// use u_metacross::scx::{MutationRegistry, RealIndividual, ScxConfig};
///
/// fn jitter(ind: &mut RealIndividual, _: &ScxConfig, rng: &mut dyn RngCore) {
///     for g in &mut ind.genes {
///         *g += rng.random_range(-0.01..0.01);
///     }
/// }
///
/// let registry = MutationRegistry::new().with("jitter", jitter);
/// assert!(registry.get("jitter").is_ok());
/// assert!(registry.get("none").is_ok());
/// assert!(registry.get("missing").is_err());
/// ```
pub struct MutationRegistry<I> {
    operators: BTreeMap<String, MutationFn<I>>,
}

impl<I> MutationRegistry<I> {
    /// Creates a registry holding only the [`NO_MUTATION`] operator.
    pub fn new() -> Self {
        let mut operators: BTreeMap<String, MutationFn<I>> = BTreeMap::new();
        operators.insert(NO_MUTATION.to_string(), no_mutation::<I>);
        Self { operators }
    }

    /// Registers `op` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, op: MutationFn<I>) {
        self.operators.insert(name.into(), op);
    }

    /// Builder form of [`register`](Self::register).
    pub fn with(mut self, name: impl Into<String>, op: MutationFn<I>) -> Self {
        self.register(name, op);
        self
    }

    /// Looks up an operator by name.
    pub fn get(&self, name: &str) -> Result<MutationFn<I>> {
        self.operators.get(name).copied().ok_or_else(|| {
            log::warn!("mutation operator {name:?} is not registered");
            ScxError::UnknownOperator {
                kind: "mutation",
                name: name.to_string(),
            }
        })
    }

    /// Registered names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.operators.keys().map(String::as_str)
    }
}

impl<I> Default for MutationRegistry<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> fmt::Debug for MutationRegistry<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.operators.keys()).finish()
    }
}

fn no_mutation<I>(_individual: &mut I, _config: &ScxConfig, _rng: &mut dyn RngCore) {}
