//! Scalar value generators that parameterize primitives.
//!
//! A [`Construct`] turns a sequence length into an index in `[0, length)`.
//! Three variants exist:
//!
//! - [`Construct::Number`]: a fixed sample in `[0, 1)` drawn once at creation
//! - [`Construct::Random`]: a fresh uniform draw on every call
//! - [`Construct::Inline`]: the antipodal index of a previously resolved one
//!
//! The variant set is closed. Random selection goes through the
//! [`ConstructKind`] registry rather than through the enum itself, so the
//! set a primitive may draw from is explicit at each call site.

use rand::seq::IndexedRandom;
use rand::Rng;
use std::fmt;

/// A value-generation strategy for primitive indices and weights.
///
/// Constructs are immutable after creation. A `Number` keeps its sample
/// for its whole lifetime, which makes primitives safe to share between
/// genomes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Construct {
    /// Fixed sample in `[0, 1)`, scaled by the length on every call.
    Number(f64),
    /// Uniform draw in `[0, length)` on every call.
    Random,
    /// `(prev + length / 2) % length`, or unresolved when `prev` is unknown.
    Inline,
}

impl Construct {
    /// Resolves this construct against a sequence of `length` elements.
    ///
    /// `prev` is the other endpoint when it is already known. Only
    /// `Inline` looks at it; it returns `None` when `prev` is `None`.
    /// Every resolved value lies in `[0, length)`.
    ///
    /// `length` must be positive.
    pub fn value<R: Rng>(&self, prev: Option<usize>, length: usize, rng: &mut R) -> Option<usize> {
        debug_assert!(length > 0, "construct resolved against an empty sequence");
        match *self {
            Construct::Number(sample) => Some(scale(sample, length)),
            Construct::Random => Some(rng.random_range(0..length)),
            Construct::Inline => prev.map(|p| (p + length / 2) % length),
        }
    }

    /// Returns the kind of this construct.
    pub fn kind(&self) -> ConstructKind {
        match self {
            Construct::Number(_) => ConstructKind::Number,
            Construct::Random => ConstructKind::Random,
            Construct::Inline => ConstructKind::Inline,
        }
    }
}

/// `floor(length * sample)`, kept strictly below `length`.
fn scale(sample: f64, length: usize) -> usize {
    ((length as f64 * sample) as usize).min(length - 1)
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Construct::Number(sample) => write!(f, "{sample}"),
            Construct::Random => f.write_str("RAND"),
            Construct::Inline => f.write_str("INLINE"),
        }
    }
}

/// Registry of construct variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstructKind {
    Number,
    Random,
    Inline,
}

impl ConstructKind {
    /// Every variant. Used for `start` and `end` constructs.
    pub const ALL: [ConstructKind; 3] =
        [ConstructKind::Number, ConstructKind::Random, ConstructKind::Inline];

    /// Variants that resolve without a prior value. Used for `special`,
    /// which is always asked without one.
    pub const INDEPENDENT: [ConstructKind; 2] = [ConstructKind::Number, ConstructKind::Random];

    /// Creates a fresh construct of this kind.
    ///
    /// `Number` draws its fixed sample from `rng` here, once.
    pub fn build<R: Rng>(self, rng: &mut R) -> Construct {
        match self {
            ConstructKind::Number => Construct::Number(rng.random::<f64>()),
            ConstructKind::Random => Construct::Random,
            ConstructKind::Inline => Construct::Inline,
        }
    }

    /// Picks a kind uniformly from `kinds` and builds it.
    ///
    /// # Panics
    /// Panics if `kinds` is empty.
    pub fn choose_from<R: Rng>(kinds: &[ConstructKind], rng: &mut R) -> Construct {
        let kind = *kinds.choose(rng).expect("construct registry must not be empty");
        kind.build(rng)
    }
}
