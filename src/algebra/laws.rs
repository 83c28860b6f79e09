//! Law witnesses. Runtime-verifiable checks of the combinator laws: both
//! evaluation paths are materialized so a failing witness shows what diverged.

use crate::core::{NullOpt, Nullable};

/// Both sides of a combinator law, evaluated on one input.
#[derive(Debug)]
pub struct LawWitness<V: Nullable> {
    pub lhs: NullOpt<V>,
    pub rhs: NullOpt<V>,
    pub holds: bool,
}

impl<V: Nullable + PartialEq> LawWitness<V> {
    /// `input.map(identity) == input`.
    pub fn map_identity(input: NullOpt<V>) -> Self
    where
        V: Clone,
    {
        let lhs = input.clone().map(|value| value);
        let rhs = input;
        let holds = lhs == rhs;
        Self { lhs, rhs, holds }
    }

    /// `input.map(f).map(g) == input.map(g ∘ f)`.
    pub fn map_composition<T, U, F, G>(input: NullOpt<T>, f: F, g: G) -> Self
    where
        T: Nullable + Clone,
        U: Nullable,
        F: Fn(T) -> U,
        G: Fn(U) -> V,
    {
        let lhs = input.clone().map(&f).map(&g);
        let rhs = input.map(|value| g(f(value)));
        let holds = lhs == rhs;
        Self { lhs, rhs, holds }
    }

    /// `input.flat_map(f).flat_map(g) == input.flat_map(|v| f(v).flat_map(g))`.
    pub fn flat_map_associativity<T, U, F, G>(input: NullOpt<T>, f: F, g: G) -> Self
    where
        T: Nullable + Clone,
        U: Nullable,
        F: Fn(T) -> NullOpt<U>,
        G: Fn(U) -> NullOpt<V>,
    {
        let lhs = input.clone().flat_map(&f).flat_map(&g);
        let rhs = input.flat_map(|value| f(value).flat_map(&g));
        let holds = lhs == rhs;
        Self { lhs, rhs, holds }
    }

    pub fn is_valid(&self) -> bool {
        self.holds
    }
}
