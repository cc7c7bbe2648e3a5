//! Meta-evolutionary crossover operators.
//!
//! Represents crossover operators themselves as evolvable genomes and
//! provides the recombination strategies an outer evolutionary loop
//! invokes by name:
//!
//! - **SCX (self-adaptive crossover)**: each individual carries a
//!   [`CrossoverGenome`](scx::CrossoverGenome) built from parameterized
//!   swap/merge primitives. Parents' genomes reproduce into the child's,
//!   which is then applied to the parents' genes.
//! - **Classic recombination**: uniform, n-point and arithmetic crossover
//!   over real-valued gene sequences.
//!
//! # Architecture
//!
//! The crate covers the operator layer only. Population management,
//! selection, fitness evaluation and termination belong to the caller,
//! which talks to this crate through the [`ScxIndividual`](scx::ScxIndividual)
//! trait and an [`ScxConfig`](scx::ScxConfig).
//!
//! All randomness comes from an explicitly passed generator
//! (see [`random`]), so runs are reproducible and workers never share
//! generator state.

pub mod error;
pub mod random;
pub mod scx;

pub use error::{Result, ScxError};
