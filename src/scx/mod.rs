//! Self-adaptive crossover (SCX).
//!
//! Crossover operators are represented as evolvable genomes. A
//! [`CrossoverGenome`] is an ordered list of [`Primitive`]s, each
//! parameterized by three [`Construct`]s. Genomes travel with individuals
//! and reproduce alongside them, so the operator that builds a child is
//! itself the product of evolution.
//!
//! # Layers
//!
//! - [`Construct`]: index and weight generators (`Number`, `Random`, `Inline`)
//! - [`Primitive`]: one gene transform (`Swap` or `Merge`)
//! - [`CrossoverGenome`]: ordered primitives plus [`Reproduction`] operators
//! - [`Recombination`]: named strategies an outer driver invokes on individuals
//!
//! # Usage
//!
//! ```
//! use u_metacross::random::create_rng;
//! use u_metacross::scx::{
//!     MutationRegistry, RealIndividual, Recombination, ScxConfig, ScxContext,
//! };
//!
//! let config = ScxConfig::default().with_dimensions(4);
//! let mutations = MutationRegistry::new();
//! let ctx = ScxContext::new(&config, &mutations).unwrap();
//!
//! let mut rng = create_rng(42);
//! let a = RealIndividual::random(4, 6, &mut rng);
//! let b = RealIndividual::random(4, 6, &mut rng);
//!
//! let mut child = RealIndividual::default();
//! Recombination::Scx
//!     .apply(&mut child, &[&a, &b], None, &ctx, &mut rng)
//!     .unwrap();
//! assert_eq!(child.genes.len(), 4);
//! assert!(child.crossover.is_some());
//! ```
//!
//! # References
//!
//! - Smith & Fogarty (1996), "Recombination Strategy Adaptation via Evolution
//!   of Gene Linkage"
//! - Goldman & Tauritz (2011), "Self-Configuring Crossover"

mod config;
mod construct;
mod genome;
mod mutation;
mod primitive;
pub mod recombination;
mod types;

pub use config::ScxConfig;
pub use construct::{Construct, ConstructKind};
pub use genome::{CrossoverGenome, Reproduction, FIXED_POINT_CAP};
pub use mutation::{MutationFn, MutationRegistry, NO_MUTATION};
pub use primitive::{Primitive, PrimitiveKind};
pub use recombination::{Recombination, ScxContext};
pub use types::{Fitness, Individual, RealIndividual, ScxIndividual};
