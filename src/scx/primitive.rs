//! Parameterized gene-transform primitives.
//!
//! A [`Primitive`] holds three constructs. `start` and `end` pick two
//! positions in the gene sequence. `special` supplies a weight. The
//! [`PrimitiveKind`] decides what happens at those positions:
//!
//! - [`PrimitiveKind::Swap`]: exchange two wrap-around windows of random width
//! - [`PrimitiveKind::Merge`]: blend the two positions towards each other
//!
//! Primitives are frozen at construction. Fields are private and no method
//! takes `&mut self`, so genomes share them through `Arc` without copying.

use super::construct::{Construct, ConstructKind};
use crate::error::{Result, ScxError};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::fmt;

/// Denominator used to turn the `special` construct into a blend weight.
const WEIGHT_RESOLUTION: usize = 10_000;

/// The gene-transform variant of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrimitiveKind {
    /// Exchange two contiguous wrap-around windows.
    Swap,
    /// Blend the values at two positions.
    Merge,
}

impl PrimitiveKind {
    /// Registry of every primitive variant.
    pub const ALL: [PrimitiveKind; 2] = [PrimitiveKind::Swap, PrimitiveKind::Merge];

    /// Picks a variant uniformly from the registry.
    pub fn random<R: Rng>(rng: &mut R) -> PrimitiveKind {
        *Self::ALL.choose(rng).expect("primitive registry must not be empty")
    }
}

/// One gene-transform operation of a crossover genome.
///
/// Deserializing goes through [`Primitive::from_parts`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPrimitive"))]
pub struct Primitive {
    kind: PrimitiveKind,
    start: Construct,
    end: Construct,
    special: Construct,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPrimitive {
    kind: PrimitiveKind,
    start: Construct,
    end: Construct,
    special: Construct,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPrimitive> for Primitive {
    type Error = ScxError;

    fn try_from(raw: RawPrimitive) -> Result<Self> {
        Primitive::from_parts(raw.kind, raw.start, raw.end, raw.special)
    }
}

impl Primitive {
    /// Creates a primitive of the given kind with random constructs.
    ///
    /// `start` and `end` are drawn independently from every construct
    /// kind. `special` is drawn only from kinds that resolve without a
    /// prior value.
    pub fn new<R: Rng>(kind: PrimitiveKind, rng: &mut R) -> Self {
        let start = ConstructKind::choose_from(&ConstructKind::ALL, rng);
        let end = ConstructKind::choose_from(&ConstructKind::ALL, rng);
        let special = ConstructKind::choose_from(&ConstructKind::INDEPENDENT, rng);
        Self {
            kind,
            start,
            end,
            special,
        }
    }

    /// Creates a primitive of a uniformly random kind.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let kind = PrimitiveKind::random(rng);
        Self::new(kind, rng)
    }

    /// Assembles a primitive from explicit constructs.
    ///
    /// Fails if `special` is [`Construct::Inline`], which would never
    /// resolve.
    pub fn from_parts(
        kind: PrimitiveKind,
        start: Construct,
        end: Construct,
        special: Construct,
    ) -> Result<Self> {
        if special == Construct::Inline {
            return Err(ScxError::InvalidConfig(
                "special construct must resolve without a prior value".into(),
            ));
        }
        Ok(Self {
            kind,
            start,
            end,
            special,
        })
    }

    pub fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    pub fn start(&self) -> Construct {
        self.start
    }

    pub fn end(&self) -> Construct {
        self.end
    }

    pub fn special(&self) -> Construct {
        self.special
    }

    /// Resolves the `(start, end)` positions for a sequence.
    ///
    /// # Algorithm
    ///
    /// 1. Resolve `start` with no prior value
    /// 2. Resolve `end`, passing the resolved `start` (if any)
    /// 3. If `start` is still unresolved:
    ///    - both are `Inline`: use one shared uniform index for both
    ///    - otherwise: resolve `start` again, now passing `end`
    ///
    /// Both positions lie in `[0, genes.len())`.
    ///
    /// # Panics
    /// Panics if `genes` is empty.
    pub fn values<R: Rng>(&self, genes: &[f64], rng: &mut R) -> (usize, usize) {
        let length = genes.len();
        assert!(length > 0, "cannot resolve positions in an empty sequence");

        let start = self.start.value(None, length, rng);
        let end = self.end.value(start, length, rng);
        match (start, end) {
            (Some(s), Some(e)) => (s, e),
            (None, Some(e)) => {
                let s = self
                    .start
                    .value(Some(e), length, rng)
                    .expect("inline start resolves once end is known");
                (s, e)
            }
            // Only `end = Inline` can stay unresolved, and only when
            // `start` was unresolved too: both are Inline.
            _ => {
                let shared = rng.random_range(0..length);
                (shared, shared)
            }
        }
    }

    /// Applies this primitive to `genes` in place.
    ///
    /// The sequence length never changes. An empty sequence is left as is.
    pub fn execute<R: Rng>(&self, genes: &mut [f64], rng: &mut R) {
        if genes.is_empty() {
            return;
        }
        match self.kind {
            PrimitiveKind::Swap => self.swap(genes, rng),
            PrimitiveKind::Merge => self.merge(genes, rng),
        }
    }

    /// Exchanges two wrap-around windows of width
    /// `floor(len / uniform(2, len))`.
    ///
    /// Both windows are read before anything is written. Writes then
    /// alternate between the two windows, so overlapping windows do not
    /// yield a clean permutation.
    fn swap<R: Rng>(&self, genes: &mut [f64], rng: &mut R) {
        let length = genes.len();
        let (start, end) = self.values(genes, rng);
        let width = swap_width(length, rng);

        let start_piece: Vec<f64> = (0..width).map(|i| genes[(start + i) % length]).collect();
        let end_piece: Vec<f64> = (0..width).map(|i| genes[(end + i) % length]).collect();

        for i in 0..width {
            genes[(start + i) % length] = end_piece[i];
            genes[(end + i) % length] = start_piece[i];
        }

        log::trace!("swap start={start} end={end} width={width}");
    }

    /// Blends the values at `start` and `end` using the weight supplied
    /// by `special`. Both new values come from the original pair.
    fn merge<R: Rng>(&self, genes: &mut [f64], rng: &mut R) {
        let (start, end) = self.values(genes, rng);
        let weight = self
            .special
            .value(None, WEIGHT_RESOLUTION, rng)
            .expect("special construct is never inline") as f64
            / WEIGHT_RESOLUTION as f64;

        let old_start = genes[start];
        let old_end = genes[end];
        genes[start] = weighted_average(old_start, old_end, weight);
        genes[end] = weighted_average(old_end, old_start, weight);

        log::trace!("merge start={start} end={end} weight={weight}");
    }
}

/// `x * weight + y * (1 - weight)`.
fn weighted_average(x: f64, y: f64, weight: f64) -> f64 {
    x * weight + y * (1.0 - weight)
}

/// `floor(length / uniform(2, length))`, roughly 1 to `length / 2`.
///
/// Sequences shorter than 3 use a divisor of 2: a single gene gets an
/// empty window and two genes get a window of one.
fn swap_width<R: Rng>(length: usize, rng: &mut R) -> usize {
    let divisor = if length > 2 {
        rng.random_range(2.0..length as f64)
    } else {
        2.0
    };
    (length as f64 / divisor) as usize
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}(start: {}, end: {}, special: {})",
            self.kind, self.start, self.end, self.special
        )
    }
}
