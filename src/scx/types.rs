//! Individual traits consumed by the recombination strategies.
//!
//! The engine never evaluates or selects individuals. It only reads parent
//! gene sequences and genomes and writes the child's. [`Individual`] and
//! [`ScxIndividual`] describe that narrow contract; [`RealIndividual`] is a
//! ready-made implementation for real-valued problems.

use super::genome::CrossoverGenome;
use rand::Rng;

/// Marker trait for fitness values.
///
/// Fitness must support comparison and be cheaply copyable. The engine
/// does not interpret the ordering; the outer driver decides whether
/// higher or lower is better.
///
/// Built-in implementations exist for `f64` and `f32`.
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Value assigned to individuals that have not been evaluated yet.
    fn unevaluated() -> Self;

    /// Converts the fitness to `f64` for logging and statistics.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn unevaluated() -> Self {
        f64::NEG_INFINITY
    }

    fn to_f64(self) -> f64 {
        self
    }
}

impl Fitness for f32 {
    fn unevaluated() -> Self {
        f32::NEG_INFINITY
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// A candidate solution carrying its own fitness.
pub trait Individual: Clone + Send + Sync {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the current fitness of this individual.
    fn fitness(&self) -> Self::Fitness;

    /// Sets the fitness of this individual.
    fn set_fitness(&mut self, fitness: Self::Fitness);
}

/// An individual with a real-valued gene sequence and, for self-adaptive
/// recombination, its own crossover genome.
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone)]
/// struct Candidate {
///     genes: Vec<f64>,
///     fitness: f64,
///     crossover: Option<CrossoverGenome>,
/// }
///
/// impl ScxIndividual for Candidate {
///     fn genes(&self) -> &[f64] { &self.genes }
///     fn set_genes(&mut self, genes: Vec<f64>) { self.genes = genes; }
///     fn crossover(&self) -> Option<&CrossoverGenome> { self.crossover.as_ref() }
///     fn set_crossover(&mut self, c: Option<CrossoverGenome>) { self.crossover = c; }
/// }
/// ```
pub trait ScxIndividual: Individual {
    /// The gene sequence.
    fn genes(&self) -> &[f64];

    /// Replaces the gene sequence.
    fn set_genes(&mut self, genes: Vec<f64>);

    /// The nested crossover genome, if this individual carries one.
    fn crossover(&self) -> Option<&CrossoverGenome>;

    /// Replaces the nested crossover genome.
    fn set_crossover(&mut self, crossover: Option<CrossoverGenome>);
}

/// Real-valued individual with an optional crossover genome.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealIndividual {
    pub genes: Vec<f64>,
    pub fitness: f64,
    pub crossover: Option<CrossoverGenome>,
}

impl RealIndividual {
    /// Creates an unevaluated individual without a genome.
    pub fn new(genes: Vec<f64>) -> Self {
        Self {
            genes,
            fitness: f64::unevaluated(),
            crossover: None,
        }
    }

    /// Attaches a crossover genome.
    pub fn with_crossover(mut self, crossover: CrossoverGenome) -> Self {
        self.crossover = Some(crossover);
        self
    }

    /// Creates an individual with `dimensions` genes uniform in `[0, 1)`
    /// and a random genome of `genome_length` primitives.
    pub fn random<R: Rng>(dimensions: usize, genome_length: usize, rng: &mut R) -> Self {
        let genes = (0..dimensions).map(|_| rng.random::<f64>()).collect();
        let crossover = CrossoverGenome::random(genome_length, rng);
        Self::new(genes).with_crossover(crossover)
    }
}

impl Default for RealIndividual {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Individual for RealIndividual {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

impl ScxIndividual for RealIndividual {
    fn genes(&self) -> &[f64] {
        &self.genes
    }

    fn set_genes(&mut self, genes: Vec<f64>) {
        self.genes = genes;
    }

    fn crossover(&self) -> Option<&CrossoverGenome> {
        self.crossover.as_ref()
    }

    fn set_crossover(&mut self, crossover: Option<CrossoverGenome>) {
        self.crossover = crossover;
    }
}
