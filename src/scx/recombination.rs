//! Top-level recombination strategies.
//!
//! Each strategy writes a child's gene sequence (and, for `scx`, its
//! crossover genome) from a slice of parents. An outer driver picks one by
//! configuration name through [`Recombination`].
//!
//! | Name | Child genes |
//! |------|-------------|
//! | `uniform` | each position copied from a uniformly chosen parent |
//! | `npoint` | donor parent rotates at `numberOfPoints` random cut positions |
//! | `arithmetic` | per-position mean over all parents |
//! | `scx` | child genome (reproduced from the parents' genomes) applied to both parents' genes |
//! | `scxFromSupport` | a support individual's genome applied to both parents' genes |
//!
//! Unequal parent lengths are handled per strategy:
//!
//! - `uniform` reads `parents[0].len()` positions and fails with
//!   [`ScxError::LengthMismatch`] if any parent is shorter
//! - `npoint` and `arithmetic` truncate to the shortest parent
//! - `scx` and `scxFromSupport` keep the first half of the concatenation

use super::config::ScxConfig;
use super::mutation::{MutationFn, MutationRegistry};
use super::types::{Fitness, ScxIndividual};
use crate::error::{Result, ScxError};
use rand::seq::index;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Validated configuration plus resolved operators, shared by every
/// recombination call of a run.
pub struct ScxContext<'a, I> {
    config: &'a ScxConfig,
    mutation: MutationFn<I>,
}

impl<'a, I: ScxIndividual> ScxContext<'a, I> {
    /// Validates `config` and resolves its `scx_mutation` name.
    ///
    /// Fails fast on an invalid config or an unknown mutation name, before
    /// any recombination runs.
    pub fn new(config: &'a ScxConfig, mutations: &MutationRegistry<I>) -> Result<Self> {
        config.validate()?;
        let mutation = mutations.get(&config.scx_mutation)?;
        Ok(Self { config, mutation })
    }

    pub fn config(&self) -> &ScxConfig {
        self.config
    }
}

/// Named recombination strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Recombination {
    Uniform,
    #[cfg_attr(feature = "serde", serde(rename = "npoint"))]
    NPoint,
    Arithmetic,
    Scx,
    ScxFromSupport,
}

impl Recombination {
    /// Every registered strategy.
    pub const ALL: [Recombination; 5] = [
        Recombination::Uniform,
        Recombination::NPoint,
        Recombination::Arithmetic,
        Recombination::Scx,
        Recombination::ScxFromSupport,
    ];

    /// The configuration name of this strategy.
    pub fn name(self) -> &'static str {
        match self {
            Recombination::Uniform => "uniform",
            Recombination::NPoint => "npoint",
            Recombination::Arithmetic => "arithmetic",
            Recombination::Scx => "scx",
            Recombination::ScxFromSupport => "scxFromSupport",
        }
    }

    /// Runs this strategy, writing into `child`.
    ///
    /// `support` is only read by [`Recombination::ScxFromSupport`], which
    /// fails with [`ScxError::MissingSupport`] when it is `None`.
    pub fn apply<I: ScxIndividual, R: Rng>(
        self,
        child: &mut I,
        parents: &[&I],
        support: Option<&I>,
        ctx: &ScxContext<'_, I>,
        rng: &mut R,
    ) -> Result<()> {
        match self {
            Recombination::Uniform => uniform(child, parents, rng),
            Recombination::NPoint => npoint(child, parents, ctx.config, rng),
            Recombination::Arithmetic => arithmetic(child, parents),
            Recombination::Scx => scx(child, parents, ctx, rng),
            Recombination::ScxFromSupport => {
                let support = support.ok_or(ScxError::MissingSupport)?;
                scx_from_support(child, parents, support, rng)
            }
        }
    }
}

impl fmt::Display for Recombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Recombination {
    type Err = ScxError;

    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| ScxError::UnknownOperator {
                kind: "recombination",
                name: name.to_string(),
            })
    }
}

fn require_parents<I>(parents: &[&I], strategy: &'static str, required: usize) -> Result<()> {
    if parents.len() < required {
        return Err(ScxError::NotEnoughParents {
            strategy,
            required,
            got: parents.len(),
        });
    }
    Ok(())
}

/// Uniform crossover.
///
/// For each of the `parents[0].genes().len()` positions, copies the value
/// of a uniformly chosen parent. Every parent must be at least that long;
/// a shorter one fails with [`ScxError::LengthMismatch`] and leaves the
/// child untouched.
pub fn uniform<I: ScxIndividual, R: Rng>(child: &mut I, parents: &[&I], rng: &mut R) -> Result<()> {
    require_parents(parents, "uniform", 1)?;
    let max_common = parents[0].genes().len();
    if let Some((i, p)) = parents
        .iter()
        .enumerate()
        .find(|(_, p)| p.genes().len() < max_common)
    {
        return Err(ScxError::LengthMismatch {
            parent: i,
            len: p.genes().len(),
            position: p.genes().len(),
        });
    }

    let genes = (0..max_common)
        .map(|g| parents[rng.random_range(0..parents.len())].genes()[g])
        .collect();
    child.set_genes(genes);
    Ok(())
}

/// N-point crossover.
///
/// Samples `min(number_of_points, max_common)` distinct cut positions in
/// `[0, max_common)`, where `max_common` is the shortest parent length.
/// Sweeping left to right, the donor advances cyclically through the
/// parents at each cut position (before copying that position).
pub fn npoint<I: ScxIndividual, R: Rng>(
    child: &mut I,
    parents: &[&I],
    config: &ScxConfig,
    rng: &mut R,
) -> Result<()> {
    require_parents(parents, "npoint", 1)?;
    let max_common = parents
        .iter()
        .map(|p| p.genes().len())
        .min()
        .unwrap_or(0);
    let amount = config.number_of_points.min(max_common);

    let mut is_cut = vec![false; max_common];
    for point in index::sample(rng, max_common, amount) {
        is_cut[point] = true;
    }

    let mut donor = 0usize;
    let mut genes = Vec::with_capacity(max_common);
    for (g, &cut) in is_cut.iter().enumerate() {
        if cut {
            donor += 1;
        }
        genes.push(parents[donor % parents.len()].genes()[g]);
    }
    child.set_genes(genes);
    Ok(())
}

/// Arithmetic crossover: per-position mean across all parents, truncated
/// to the shortest parent.
pub fn arithmetic<I: ScxIndividual>(child: &mut I, parents: &[&I]) -> Result<()> {
    require_parents(parents, "arithmetic", 1)?;
    let max_common = parents
        .iter()
        .map(|p| p.genes().len())
        .min()
        .unwrap_or(0);
    let n = parents.len() as f64;
    let genes = (0..max_common)
        .map(|g| parents.iter().map(|p| p.genes()[g]).sum::<f64>() / n)
        .collect();
    child.set_genes(genes);
    Ok(())
}

/// Self-adaptive crossover.
///
/// # Steps
///
/// 1. Reproduce the two parents' genomes with `config.scx_recombination`
///    and store the result as the child's genome
/// 2. Apply the resolved `scx_mutation` operator to the child
/// 3. Run the child's genome over `parents[0].genes ++ parents[1].genes`
/// 4. Keep the first half as the child's genes
///
/// Fails with [`ScxError::MissingCrossover`] if either parent has no genome.
pub fn scx<I: ScxIndividual, R: Rng>(
    child: &mut I,
    parents: &[&I],
    ctx: &ScxContext<'_, I>,
    rng: &mut R,
) -> Result<()> {
    require_parents(parents, "scx", 2)?;
    let first = parents[0].crossover().ok_or(ScxError::MissingCrossover {
        role: "first parent",
    })?;
    let second = parents[1].crossover().ok_or(ScxError::MissingCrossover {
        role: "second parent",
    })?;

    let genome = ctx.config.scx_recombination.apply(first, second, ctx.config, rng);
    log::debug!(
        "scx: {} reproduced genomes {}+{} into {}",
        ctx.config.scx_recombination,
        first.len(),
        second.len(),
        genome.len()
    );
    child.set_crossover(Some(genome));
    (ctx.mutation)(child, ctx.config, rng);

    let mut genes = concat_genes(parents[0], parents[1]);
    let genome = child
        .crossover()
        .ok_or(ScxError::MissingCrossover { role: "child" })?;
    genome.execute(&mut genes, rng);
    genes.truncate(genes.len() / 2);
    child.set_genes(genes);
    Ok(())
}

/// Applies `support`'s genome to `parents[0].genes ++ parents[1].genes`
/// and keeps the first half as the child's genes.
///
/// The genome is borrowed, not inherited: the child's own genome is left
/// as is. Fails with [`ScxError::MissingSupport`] if `support` has none.
pub fn scx_from_support<I: ScxIndividual, R: Rng>(
    child: &mut I,
    parents: &[&I],
    support: &I,
    rng: &mut R,
) -> Result<()> {
    require_parents(parents, "scxFromSupport", 2)?;
    let genome = support.crossover().ok_or(ScxError::MissingSupport)?;
    log::debug!(
        "scx from support: genome of {} primitives, support fitness {}",
        genome.len(),
        Fitness::to_f64(support.fitness())
    );

    let mut genes = concat_genes(parents[0], parents[1]);
    genome.execute(&mut genes, rng);
    genes.truncate(genes.len() / 2);
    child.set_genes(genes);
    Ok(())
}

fn concat_genes<I: ScxIndividual>(a: &I, b: &I) -> Vec<f64> {
    let mut genes = Vec::with_capacity(a.genes().len() + b.genes().len());
    genes.extend_from_slice(a.genes());
    genes.extend_from_slice(b.genes());
    genes
}

/// Produces one child per parent pair, sequentially.
///
/// Job `i` uses its own generator seeded with
/// [`derive_seed(base_seed, i)`](crate::random::derive_seed), so the
/// output matches [`par_recombine`] for the same inputs.
pub fn recombine_batch<I: ScxIndividual + Default>(
    strategy: Recombination,
    pairs: &[(&I, &I)],
    support: Option<&I>,
    ctx: &ScxContext<'_, I>,
    base_seed: u64,
) -> Result<Vec<I>> {
    pairs
        .iter()
        .enumerate()
        .map(|(i, pair)| recombine_job(strategy, i, *pair, support, ctx, base_seed))
        .collect()
}

/// Parallel form of [`recombine_batch`]. Each worker owns its generator.
#[cfg(feature = "parallel")]
pub fn par_recombine<I: ScxIndividual + Default>(
    strategy: Recombination,
    pairs: &[(&I, &I)],
    support: Option<&I>,
    ctx: &ScxContext<'_, I>,
    base_seed: u64,
) -> Result<Vec<I>> {
    use rayon::prelude::*;

    pairs
        .par_iter()
        .enumerate()
        .map(|(i, pair)| recombine_job(strategy, i, *pair, support, ctx, base_seed))
        .collect()
}

fn recombine_job<I: ScxIndividual + Default>(
    strategy: Recombination,
    index: usize,
    (a, b): (&I, &I),
    support: Option<&I>,
    ctx: &ScxContext<'_, I>,
    base_seed: u64,
) -> Result<I> {
    let mut rng = crate::random::create_rng(crate::random::derive_seed(base_seed, index as u64));
    let mut child = I::default();
    strategy.apply(&mut child, &[a, b], support, ctx, &mut rng)?;
    Ok(child)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::scx::{CrossoverGenome, RealIndividual, Reproduction};
    use rand::RngCore;

    fn ind(genes: &[f64]) -> RealIndividual {
        RealIndividual::new(genes.to_vec())
    }

    fn with_genome(genes: &[f64], len: usize, seed: u64) -> RealIndividual {
        let mut rng = create_rng(seed);
        ind(genes).with_crossover(CrossoverGenome::random(len, &mut rng))
    }

    fn strip_genome(child: &mut RealIndividual, _: &ScxConfig, _: &mut dyn RngCore) {
        child.crossover = None;
    }

    // ---- uniform ----

    #[test]
    fn test_uniform_single_parent_copies() {
        let mut rng = create_rng(42);
        let p = ind(&[1.0, 2.0, 3.0, 4.0]);
        let mut child = RealIndividual::default();
        uniform(&mut child, &[&p], &mut rng).unwrap();
        assert_eq!(child.genes, p.genes);
    }

    #[test]
    fn test_uniform_mixes_parents() {
        let mut rng = create_rng(42);
        let a = ind(&[0.0; 50]);
        let b = ind(&[1.0; 50]);
        let mut child = RealIndividual::default();
        uniform(&mut child, &[&a, &b], &mut rng).unwrap();
        assert_eq!(child.genes.len(), 50);
        assert!(child.genes.iter().all(|&g| g == 0.0 || g == 1.0));
        assert!(child.genes.contains(&0.0) && child.genes.contains(&1.0));
    }

    #[test]
    fn test_uniform_shorter_parent_fails() {
        let mut rng = create_rng(42);
        let a = ind(&[1.0, 2.0, 3.0]);
        let b = ind(&[1.0, 2.0]);
        let mut child = ind(&[9.0]);
        let err = uniform(&mut child, &[&a, &b], &mut rng).unwrap_err();
        assert_eq!(
            err,
            ScxError::LengthMismatch {
                parent: 1,
                len: 2,
                position: 2
            }
        );
        assert_eq!(child.genes, vec![9.0]);
    }

    #[test]
    fn test_uniform_longer_parent_truncates() {
        let mut rng = create_rng(42);
        let a = ind(&[1.0, 2.0]);
        let b = ind(&[1.0, 2.0, 3.0]);
        let mut child = RealIndividual::default();
        uniform(&mut child, &[&a, &b], &mut rng).unwrap();
        assert_eq!(child.genes, vec![1.0, 2.0]);
    }

    #[test]
    fn test_uniform_no_parents() {
        let mut rng = create_rng(42);
        let mut child = RealIndividual::default();
        let parents: [&RealIndividual; 0] = [];
        assert!(matches!(
            uniform(&mut child, &parents, &mut rng),
            Err(ScxError::NotEnoughParents { .. })
        ));
    }

    // ---- npoint ----

    #[test]
    fn test_npoint_zero_points_copies_first() {
        let mut rng = create_rng(42);
        let config = ScxConfig::default().with_number_of_points(0);
        let a = ind(&[1.0, 2.0, 3.0, 4.0]);
        let b = ind(&[5.0, 6.0, 7.0]);
        let mut child = RealIndividual::default();
        npoint(&mut child, &[&a, &b], &config, &mut rng).unwrap();
        assert_eq!(child.genes, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_npoint_all_points_alternates() {
        // Every position is a cut, so the donor advances before each copy.
        let mut rng = create_rng(42);
        let config = ScxConfig::default().with_number_of_points(100);
        let a = ind(&[0.0; 6]);
        let b = ind(&[1.0; 6]);
        let mut child = RealIndividual::default();
        npoint(&mut child, &[&a, &b], &config, &mut rng).unwrap();
        assert_eq!(child.genes, vec![1.0, 0.0, 1.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_npoint_single_cut_is_prefix_suffix() {
        let mut rng = create_rng(42);
        let config = ScxConfig::default().with_number_of_points(1);
        let a = ind(&[0.0; 10]);
        let b = ind(&[1.0; 10]);
        for _ in 0..50 {
            let mut child = RealIndividual::default();
            npoint(&mut child, &[&a, &b], &config, &mut rng).unwrap();
            let switch = child.genes.iter().position(|&g| g == 1.0).unwrap();
            assert!(child.genes[..switch].iter().all(|&g| g == 0.0));
            assert!(child.genes[switch..].iter().all(|&g| g == 1.0));
        }
    }

    // ---- arithmetic ----

    #[test]
    fn test_arithmetic_mean() {
        let a = ind(&[1.0, 2.0, 3.0]);
        let b = ind(&[3.0, 2.0, 1.0]);
        let mut child = RealIndividual::default();
        arithmetic(&mut child, &[&a, &b]).unwrap();
        assert_eq!(child.genes, vec![2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_arithmetic_truncates_to_shortest() {
        let a = ind(&[1.0, 2.0, 3.0]);
        let b = ind(&[3.0]);
        let c = ind(&[2.0, 7.0]);
        let mut child = RealIndividual::default();
        arithmetic(&mut child, &[&a, &b, &c]).unwrap();
        assert_eq!(child.genes, vec![2.0]);
    }

    // ---- scx ----

    #[test]
    fn test_scx_produces_half_length() {
        let mut rng = create_rng(42);
        let config = ScxConfig::default().with_dimensions(5);
        let registry = MutationRegistry::new();
        let ctx = ScxContext::new(&config, &registry).unwrap();
        let a = with_genome(&[0.1, 0.2, 0.3, 0.4, 0.5], 4, 1);
        let b = with_genome(&[0.6, 0.7, 0.8, 0.9, 1.0], 6, 2);
        for op in Reproduction::ALL {
            let config = config.clone().with_scx_recombination(op);
            let ctx = ScxContext::new(&config, &registry).unwrap();
            let mut child = RealIndividual::default();
            scx(&mut child, &[&a, &b], &ctx, &mut rng).unwrap();
            assert_eq!(child.genes.len(), 5);
            assert!(child.crossover.as_ref().is_some_and(|g| g.len() >= 1));
        }
        let mut child = RealIndividual::default();
        scx(&mut child, &[&a, &b], &ctx, &mut rng).unwrap();
        assert_eq!(child.genes.len(), 5);
    }

    #[test]
    fn test_scx_genes_come_from_parents_pool() {
        // Swaps move values, merges blend them; every child gene stays
        // within the parents' value range.
        let mut rng = create_rng(42);
        let config = ScxConfig::default();
        let registry = MutationRegistry::new();
        let ctx = ScxContext::new(&config, &registry).unwrap();
        let a = with_genome(&[1.0; 8], 10, 3);
        let b = with_genome(&[2.0; 8], 10, 4);
        let mut child = RealIndividual::default();
        scx(&mut child, &[&a, &b], &ctx, &mut rng).unwrap();
        assert!(child.genes.iter().all(|&g| (1.0 - 1e-9..=2.0 + 1e-9).contains(&g)));
    }

    #[test]
    fn test_scx_missing_parent_genome() {
        let mut rng = create_rng(42);
        let config = ScxConfig::default();
        let registry = MutationRegistry::new();
        let ctx = ScxContext::new(&config, &registry).unwrap();
        let a = with_genome(&[1.0, 2.0], 3, 1);
        let b = ind(&[3.0, 4.0]);
        let mut child = RealIndividual::default();
        assert_eq!(
            scx(&mut child, &[&a, &b], &ctx, &mut rng),
            Err(ScxError::MissingCrossover {
                role: "second parent"
            })
        );
        assert_eq!(
            scx(&mut child, &[&b, &a], &ctx, &mut rng),
            Err(ScxError::MissingCrossover {
                role: "first parent"
            })
        );
    }

    #[test]
    fn test_scx_mutation_removing_genome_fails() {
        let mut rng = create_rng(42);
        let config = ScxConfig::default().with_scx_mutation("strip");
        let registry = MutationRegistry::new().with("strip", strip_genome);
        let ctx = ScxContext::new(&config, &registry).unwrap();
        let a = with_genome(&[1.0, 2.0], 3, 1);
        let b = with_genome(&[3.0, 4.0], 3, 2);
        let mut child = RealIndividual::default();
        assert_eq!(
            scx(&mut child, &[&a, &b], &ctx, &mut rng),
            Err(ScxError::MissingCrossover { role: "child" })
        );
    }

    #[test]
    fn test_scx_needs_two_parents() {
        let mut rng = create_rng(42);
        let config = ScxConfig::default();
        let registry = MutationRegistry::new();
        let ctx = ScxContext::new(&config, &registry).unwrap();
        let a = with_genome(&[1.0], 1, 1);
        let mut child = RealIndividual::default();
        assert!(matches!(
            scx(&mut child, &[&a], &ctx, &mut rng),
            Err(ScxError::NotEnoughParents { required: 2, .. })
        ));
    }

    #[test]
    fn test_scx_deterministic() {
        let config = ScxConfig::default().with_dimensions(4);
        let registry = MutationRegistry::new();
        let ctx = ScxContext::new(&config, &registry).unwrap();
        let a = with_genome(&[0.1, 0.2, 0.3, 0.4], 5, 1);
        let b = with_genome(&[0.5, 0.6, 0.7, 0.8], 5, 2);
        let run = || {
            let mut rng = create_rng(11);
            let mut child = RealIndividual::default();
            scx(&mut child, &[&a, &b], &ctx, &mut rng).unwrap();
            child
        };
        assert_eq!(run(), run());
    }

    // ---- scxFromSupport ----

    #[test]
    fn test_scx_from_support() {
        let mut rng = create_rng(42);
        let a = ind(&[1.0, 2.0, 3.0]);
        let b = ind(&[4.0, 5.0, 6.0]);
        let support = with_genome(&[], 5, 9);
        let mut child = RealIndividual::default();
        scx_from_support(&mut child, &[&a, &b], &support, &mut rng).unwrap();
        assert_eq!(child.genes.len(), 3);
        assert!(child.crossover.is_none());
    }

    #[test]
    fn test_scx_from_support_missing_genome() {
        let mut rng = create_rng(42);
        let a = ind(&[1.0]);
        let b = ind(&[2.0]);
        let support = ind(&[]);
        let mut child = RealIndividual::default();
        assert_eq!(
            scx_from_support(&mut child, &[&a, &b], &support, &mut rng),
            Err(ScxError::MissingSupport)
        );
    }

    // ---- registry / dispatch ----

    #[test]
    fn test_context_rejects_unknown_mutation() {
        let config = ScxConfig::default().with_scx_mutation("gauss");
        let registry: MutationRegistry<RealIndividual> = MutationRegistry::new();
        assert!(matches!(
            ScxContext::new(&config, &registry),
            Err(ScxError::UnknownOperator { kind: "mutation", .. })
        ));
    }

    #[test]
    fn test_context_rejects_invalid_config() {
        let config = ScxConfig::default().with_dimensions(0);
        let registry: MutationRegistry<RealIndividual> = MutationRegistry::new();
        assert!(ScxContext::new(&config, &registry).is_err());
    }

    #[test]
    fn test_recombination_names_roundtrip() {
        for s in Recombination::ALL {
            assert_eq!(s.name().parse::<Recombination>().unwrap(), s);
        }
        assert!("onepoint".parse::<Recombination>().is_err());
    }

    #[test]
    fn test_apply_dispatch() {
        let mut rng = create_rng(42);
        let config = ScxConfig::default();
        let registry = MutationRegistry::new();
        let ctx = ScxContext::new(&config, &registry).unwrap();
        let a = with_genome(&[1.0, 2.0, 3.0], 3, 1);
        let b = with_genome(&[3.0, 2.0, 1.0], 3, 2);

        let mut child = RealIndividual::default();
        Recombination::Arithmetic
            .apply(&mut child, &[&a, &b], None, &ctx, &mut rng)
            .unwrap();
        assert_eq!(child.genes, vec![2.0, 2.0, 2.0]);

        for s in Recombination::ALL {
            let mut child = RealIndividual::default();
            s.apply(&mut child, &[&a, &b], Some(&a), &ctx, &mut rng).unwrap();
            assert_eq!(child.genes.len(), 3, "{s}");
        }

        let mut child = RealIndividual::default();
        assert_eq!(
            Recombination::ScxFromSupport.apply(&mut child, &[&a, &b], None, &ctx, &mut rng),
            Err(ScxError::MissingSupport)
        );
    }

    #[test]
    fn test_recombine_batch_deterministic() {
        let config = ScxConfig::default();
        let registry = MutationRegistry::new();
        let ctx = ScxContext::new(&config, &registry).unwrap();
        let a = with_genome(&[0.1, 0.2, 0.3, 0.4], 5, 1);
        let b = with_genome(&[0.5, 0.6, 0.7, 0.8], 5, 2);
        let pairs = vec![(&a, &b); 8];
        let first = recombine_batch(Recombination::Scx, &pairs, None, &ctx, 5).unwrap();
        let second = recombine_batch(Recombination::Scx, &pairs, None, &ctx, 5).unwrap();
        assert_eq!(first.len(), 8);
        assert_eq!(first, second);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_par_recombine_matches_sequential() {
        let config = ScxConfig::default();
        let registry = MutationRegistry::new();
        let ctx = ScxContext::new(&config, &registry).unwrap();
        let a = with_genome(&[0.1, 0.2, 0.3, 0.4], 5, 1);
        let b = with_genome(&[0.5, 0.6, 0.7, 0.8], 5, 2);
        let pairs = vec![(&a, &b); 32];
        let seq = recombine_batch(Recombination::Scx, &pairs, None, &ctx, 5).unwrap();
        let par = par_recombine(Recombination::Scx, &pairs, None, &ctx, 5).unwrap();
        assert_eq!(seq, par);
    }
}
