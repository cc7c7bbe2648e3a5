//! SCX configuration.
//!
//! [`ScxConfig`] holds every key the recombination strategies read, plus
//! the outer-loop keys that are carried through untouched.

use super::genome::Reproduction;
use crate::error::{Result, ScxError};

/// Configuration for recombination and genome reproduction.
///
/// # Defaults
///
/// ```
/// use u_metacross::scx::{Reproduction, ScxConfig};
///
/// let config = ScxConfig::default();
/// assert_eq!(config.dimensions, 10);
/// assert_eq!(config.scx_recombination, Reproduction::Variable);
/// assert_eq!(config.scx_mutation, "none");
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_metacross::scx::ScxConfig;
///
/// let config = ScxConfig::default()
///     .with_dimensions(30)
///     .with_number_of_points(2)
///     .with_scx_recombination_name("fixedPointReproduction")
///     .unwrap()
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ScxConfig {
    /// Problem dimensionality.
    ///
    /// `2 × dimensions` caps the genome length of the variable, random
    /// and random-length reproduction operators.
    pub dimensions: usize,

    /// Number of cut points used by `npoint`.
    pub number_of_points: usize,

    /// Genome reproduction operator applied by `scx`.
    pub scx_recombination: Reproduction,

    /// Name of the mutation operator applied by `scx` to each child.
    ///
    /// Resolved against a [`MutationRegistry`](super::MutationRegistry)
    /// when an [`ScxContext`](super::ScxContext) is created.
    pub scx_mutation: String,

    /// Length of the genomes a driver creates for its initial population.
    pub initial_genome_length: usize,

    /// Random seed for the run. Read by the outer driver.
    pub seed: Option<u64>,

    /// Evaluation budget per run. Read by the outer driver.
    pub evals: usize,

    /// Fitness at which a run stops. Read by the outer driver.
    pub max_fitness: f64,

    /// Number of independent runs. Read by the outer driver.
    pub runs: usize,

    /// Fitness function name. Read by the outer driver.
    pub problem: String,

    /// Population type name. Read by the outer driver.
    pub pop_type: Option<String>,

    /// Experiment name. Read by the outer driver.
    pub name: String,
}

impl Default for ScxConfig {
    fn default() -> Self {
        Self {
            dimensions: 10,
            number_of_points: 1,
            scx_recombination: Reproduction::default(),
            scx_mutation: "none".into(),
            initial_genome_length: 10,
            seed: None,
            evals: 10_000,
            max_fitness: f64::INFINITY,
            runs: 1,
            problem: String::new(),
            pop_type: None,
            name: String::new(),
        }
    }
}

impl ScxConfig {
    /// Sets the problem dimensionality.
    pub fn with_dimensions(mut self, n: usize) -> Self {
        self.dimensions = n;
        self
    }

    /// Sets the number of `npoint` cut points.
    pub fn with_number_of_points(mut self, n: usize) -> Self {
        self.number_of_points = n;
        self
    }

    /// Sets the genome reproduction operator.
    pub fn with_scx_recombination(mut self, op: Reproduction) -> Self {
        self.scx_recombination = op;
        self
    }

    /// Sets the genome reproduction operator by configuration name.
    ///
    /// Fails on names that are not registered.
    pub fn with_scx_recombination_name(self, name: &str) -> Result<Self> {
        Ok(self.with_scx_recombination(name.parse()?))
    }

    /// Sets the mutation operator name.
    pub fn with_scx_mutation(mut self, name: impl Into<String>) -> Self {
        self.scx_mutation = name.into();
        self
    }

    /// Sets the initial genome length.
    pub fn with_initial_genome_length(mut self, n: usize) -> Self {
        self.initial_genome_length = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_evals(mut self, evals: usize) -> Self {
        self.evals = evals;
        self
    }

    pub fn with_max_fitness(mut self, fitness: f64) -> Self {
        self.max_fitness = fitness;
        self
    }

    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    pub fn with_problem(mut self, problem: impl Into<String>) -> Self {
        self.problem = problem.into();
        self
    }

    pub fn with_pop_type(mut self, pop_type: impl Into<String>) -> Self {
        self.pop_type = Some(pop_type.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Genome length cap used by the dimension-bounded reproduction operators.
    pub fn max_genome_length(&self) -> usize {
        self.dimensions.saturating_mul(2)
    }

    /// Validates the configuration.
    ///
    /// Only the keys the engine interprets are checked.
    pub fn validate(&self) -> Result<()> {
        if self.dimensions == 0 {
            return Err(ScxError::InvalidConfig("dimensions must be at least 1".into()));
        }
        if self.initial_genome_length == 0 {
            return Err(ScxError::InvalidConfig(
                "initial_genome_length must be at least 1".into(),
            ));
        }
        if self.scx_mutation.is_empty() {
            return Err(ScxError::InvalidConfig("scx_mutation must name an operator".into()));
        }
        Ok(())
    }
}
