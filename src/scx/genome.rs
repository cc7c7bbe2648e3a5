//! Evolvable crossover genomes and their reproduction operators.
//!
//! A [`CrossoverGenome`] is an ordered, never-empty list of primitives.
//! Executing it runs each primitive in order on a gene sequence. Two
//! genomes combine into a child genome through a [`Reproduction`]
//! operator, which is how crossover operators themselves evolve.
//!
//! # Reproduction Operators
//!
//! | Name | Child |
//! |------|-------|
//! | `fixedPointReproduction` | `a[..p1] ++ b[p2..]`, cut points capped at a combined 200 |
//! | `variableReproduction` | wrap-around slices of both parents, trimmed to `2 × dimensions` |
//! | `randomReproduction` | fresh, length in `[1, min(len a + len b, 2 × dimensions)]` |
//! | `randomFixedLengthReproduction` | fresh, length `(len a + len b) / 2` |
//! | `randomLengthReproduction` | fresh, length in `[1, 2 × dimensions]` |
//!
//! Inherited primitives are shared by `Arc`, never deep-copied.

use super::config::ScxConfig;
use super::primitive::Primitive;
use crate::error::{Result, ScxError};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Combined cut-point budget of [`Reproduction::FixedPoint`].
pub const FIXED_POINT_CAP: usize = 200;

/// An ordered sequence of primitives acting as a crossover operator.
///
/// Cloning is cheap: only the `Arc` handles are copied.
///
/// Deserializing goes through [`CrossoverGenome::from_primitives`], so an
/// empty `primitives` list is rejected.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGenome"))]
pub struct CrossoverGenome {
    primitives: Vec<Arc<Primitive>>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGenome {
    primitives: Vec<Arc<Primitive>>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGenome> for CrossoverGenome {
    type Error = ScxError;

    fn try_from(raw: RawGenome) -> Result<Self> {
        CrossoverGenome::from_primitives(raw.primitives).ok_or_else(|| {
            ScxError::InvalidConfig("crossover genome must hold at least one primitive".into())
        })
    }
}

impl CrossoverGenome {
    /// Creates a genome of `length` random primitives.
    ///
    /// Each primitive kind is drawn uniformly. A `length` of 0 is raised
    /// to 1 so the genome is never empty.
    pub fn random<R: Rng>(length: usize, rng: &mut R) -> Self {
        let primitives = (0..length.max(1))
            .map(|_| Arc::new(Primitive::random(rng)))
            .collect();
        Self { primitives }
    }

    /// Builds a genome from existing primitives.
    ///
    /// Returns `None` if `primitives` is empty.
    pub fn from_primitives(primitives: Vec<Arc<Primitive>>) -> Option<Self> {
        if primitives.is_empty() {
            None
        } else {
            Some(Self { primitives })
        }
    }

    /// Number of primitives. Always at least 1.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Always `false`. Provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn primitives(&self) -> &[Arc<Primitive>] {
        &self.primitives
    }

    pub fn iter(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().map(Arc::as_ref)
    }

    /// Applies every primitive, in order, to `genes` in place.
    pub fn execute<R: Rng>(&self, genes: &mut [f64], rng: &mut R) {
        for primitive in &self.primitives {
            primitive.execute(genes, rng);
        }
    }

    /// Cut-point reproduction: `self[..p1] ++ other[p2..]`.
    ///
    /// `p1` and `p2` are uniform in `[0, len]` of their parent. When
    /// `p1 + p2` exceeds [`FIXED_POINT_CAP`], both are reduced by half the
    /// overflow (floored at 0). An empty result falls back to one
    /// primitive chosen between `self`'s first and `other`'s last.
    pub fn fixed_point_reproduction<R: Rng>(
        &self,
        other: &CrossoverGenome,
        _config: &ScxConfig,
        rng: &mut R,
    ) -> CrossoverGenome {
        let mut p1 = rng.random_range(0..=self.len());
        let mut p2 = rng.random_range(0..=other.len());
        let combined = p1 + p2;
        if combined > FIXED_POINT_CAP {
            let shrink = (combined - FIXED_POINT_CAP) / 2;
            p1 = p1.saturating_sub(shrink);
            p2 = p2.saturating_sub(shrink);
        }

        let mut primitives: Vec<Arc<Primitive>> = self.primitives[..p1].to_vec();
        primitives.extend_from_slice(&other.primitives[p2..]);

        if primitives.is_empty() {
            let first = &self.primitives[0];
            let last = &other.primitives[other.len() - 1];
            let pick = if rng.random_bool(0.5) { first } else { last };
            primitives.push(Arc::clone(pick));
        }

        log::debug!(
            "fixed point reproduction: p1={p1} p2={p2} child_len={}",
            primitives.len()
        );
        CrossoverGenome { primitives }
    }

    /// Rotated-slice reproduction.
    ///
    /// From each parent, takes a wrap-around slice of random length in
    /// `[0, len]` starting at a random offset, then concatenates the two.
    /// An empty result falls back to one primitive drawn from both
    /// parents. Random elements are then removed until the length is at
    /// most `2 × dimensions`.
    pub fn variable_reproduction<R: Rng>(
        &self,
        other: &CrossoverGenome,
        config: &ScxConfig,
        rng: &mut R,
    ) -> CrossoverGenome {
        let my_start = rng.random_range(0..=self.len());
        let other_start = rng.random_range(0..=other.len());
        let my_take = rng.random_range(0..=self.len());
        let other_take = rng.random_range(0..=other.len());

        let mut primitives: Vec<Arc<Primitive>> = self
            .rotated(my_start, my_take)
            .chain(other.rotated(other_start, other_take))
            .cloned()
            .collect();

        if primitives.is_empty() {
            let pool: Vec<&Arc<Primitive>> =
                self.primitives.iter().chain(other.primitives.iter()).collect();
            let pick = pool.choose(rng).expect("parent genomes are never empty");
            primitives.push(Arc::clone(*pick));
        }

        let cap = config.max_genome_length().max(1);
        while primitives.len() > cap {
            let idx = rng.random_range(0..primitives.len());
            primitives.remove(idx);
        }

        log::debug!(
            "variable reproduction: took {my_take}+{other_take}, child_len={}",
            primitives.len()
        );
        CrossoverGenome { primitives }
    }

    /// Fresh genome, length uniform in `[1, min(len a + len b, 2 × dimensions)]`.
    pub fn random_reproduction<R: Rng>(
        &self,
        other: &CrossoverGenome,
        config: &ScxConfig,
        rng: &mut R,
    ) -> CrossoverGenome {
        let upper = (self.len() + other.len()).min(config.max_genome_length()).max(1);
        let length = rng.random_range(1..=upper);
        CrossoverGenome::random(length, rng)
    }

    /// Fresh genome of length `(len a + len b) / 2`.
    pub fn random_fixed_length_reproduction<R: Rng>(
        &self,
        other: &CrossoverGenome,
        _config: &ScxConfig,
        rng: &mut R,
    ) -> CrossoverGenome {
        CrossoverGenome::random((self.len() + other.len()) / 2, rng)
    }

    /// Fresh genome, length uniform in `[1, 2 × dimensions]`.
    pub fn random_length_reproduction<R: Rng>(
        &self,
        _other: &CrossoverGenome,
        config: &ScxConfig,
        rng: &mut R,
    ) -> CrossoverGenome {
        let length = rng.random_range(1..=config.max_genome_length().max(1));
        CrossoverGenome::random(length, rng)
    }

    /// `count` primitives starting at `offset`, wrapping around.
    fn rotated(&self, offset: usize, count: usize) -> impl Iterator<Item = &Arc<Primitive>> {
        let len = self.len();
        (0..count).map(move |i| &self.primitives[(offset + i) % len])
    }
}

impl fmt::Display for CrossoverGenome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Crossover{")?;
        for (i, primitive) in self.primitives.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{primitive}")?;
        }
        f.write_str("}")
    }
}

/// Named genome-level reproduction operators.
///
/// Selected by the `scxRecombination` configuration key.
///
/// # Examples
///
/// ```
/// use u_metacross::scx::Reproduction;
///
/// let op: Reproduction = "variableReproduction".parse().unwrap();
/// assert_eq!(op, Reproduction::Variable);
/// assert!("crossbreed".parse::<Reproduction>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Reproduction {
    #[cfg_attr(feature = "serde", serde(rename = "fixedPointReproduction"))]
    FixedPoint,
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "variableReproduction"))]
    Variable,
    #[cfg_attr(feature = "serde", serde(rename = "randomReproduction"))]
    Random,
    #[cfg_attr(feature = "serde", serde(rename = "randomFixedLengthReproduction"))]
    RandomFixedLength,
    #[cfg_attr(feature = "serde", serde(rename = "randomLengthReproduction"))]
    RandomLength,
}

impl Reproduction {
    /// Every registered reproduction operator.
    pub const ALL: [Reproduction; 5] = [
        Reproduction::FixedPoint,
        Reproduction::Variable,
        Reproduction::Random,
        Reproduction::RandomFixedLength,
        Reproduction::RandomLength,
    ];

    /// The configuration name of this operator.
    pub fn name(self) -> &'static str {
        match self {
            Reproduction::FixedPoint => "fixedPointReproduction",
            Reproduction::Variable => "variableReproduction",
            Reproduction::Random => "randomReproduction",
            Reproduction::RandomFixedLength => "randomFixedLengthReproduction",
            Reproduction::RandomLength => "randomLengthReproduction",
        }
    }

    /// Combines two parent genomes into a child genome.
    ///
    /// Never fails and never returns an empty genome.
    pub fn apply<R: Rng>(
        self,
        a: &CrossoverGenome,
        b: &CrossoverGenome,
        config: &ScxConfig,
        rng: &mut R,
    ) -> CrossoverGenome {
        match self {
            Reproduction::FixedPoint => a.fixed_point_reproduction(b, config, rng),
            Reproduction::Variable => a.variable_reproduction(b, config, rng),
            Reproduction::Random => a.random_reproduction(b, config, rng),
            Reproduction::RandomFixedLength => a.random_fixed_length_reproduction(b, config, rng),
            Reproduction::RandomLength => a.random_length_reproduction(b, config, rng),
        }
    }
}

impl fmt::Display for Reproduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Reproduction {
    type Err = ScxError;

    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == name)
            .ok_or_else(|| ScxError::UnknownOperator {
                kind: "reproduction",
                name: name.to_string(),
            })
    }
}
