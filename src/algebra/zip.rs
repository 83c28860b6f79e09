//! Pairing and unpairing. `zip` annihilates on any absent side; `unzip`
//! distributes absence to every component.

use crate::core::{NullOpt, Nullable};

impl<T: Nullable> NullOpt<T> {
    /// Pair two present values; yield absent if either side is absent.
    #[inline]
    pub fn zip<U>(self, other: NullOpt<U>) -> NullOpt<(T, U)>
    where
        U: Nullable,
    {
        match (self.to_option(), other.to_option()) {
            (Some(a), Some(b)) => NullOpt::of((a, b)),
            _ => NullOpt::empty(),
        }
    }
}

impl<A: Nullable, B: Nullable> NullOpt<(A, B)> {
    /// Split a present pair into two present carriers; an absent pair
    /// splits into two absent carriers.
    #[inline]
    pub fn unzip(self) -> (NullOpt<A>, NullOpt<B>) {
        match self.to_option() {
            Some((a, b)) => (NullOpt::of(a), NullOpt::of(b)),
            None => (NullOpt::empty(), NullOpt::empty()),
        }
    }
}

impl<A: Nullable, B: Nullable, C: Nullable> NullOpt<(A, B, C)> {
    /// Triple analogue of [`unzip`](NullOpt::unzip).
    #[inline]
    pub fn unzip3(self) -> (NullOpt<A>, NullOpt<B>, NullOpt<C>) {
        match self.to_option() {
            Some((a, b, c)) => (NullOpt::of(a), NullOpt::of(b), NullOpt::of(c)),
            None => (NullOpt::empty(), NullOpt::empty(), NullOpt::empty()),
        }
    }
}
