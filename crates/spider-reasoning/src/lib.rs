//! Inference rules over spider diagrams.
//!
//! - [`rules`]: the [`InferenceRule`] trait and the built-in rules.
//! - [`args`], [`instructions`]: rule arguments and how to gather them.
//! - [`registry`]: rule lookup and dispatch by name.
//! - [`proof`]: the goal sequence of a proof attempt.

pub mod args;
pub mod error;
pub mod instructions;
pub mod proof;
pub mod registry;
pub mod rules;

pub use args::{ArgumentKind, RuleArg};
pub use error::RuleApplicationError;
pub use instructions::ArgumentSelection;
pub use proof::{Proof, ProofStep, RuleApplication};
pub use registry::RuleRegistry;
pub use rules::{ApplyStyle, DoubleNegationElimination, EquivalenceIntroduction, InferenceRule};
