//! The combinator algebra over the two-state carrier, plus runtime-verifiable
//! law witnesses.

pub mod combinators;
pub mod laws;
pub mod partial;
pub mod zip;

pub use laws::LawWitness;
pub use partial::{guarded, Guarded, Partial};
