//! The combinator surface. Every operation is a total function of
//! {Present, Absent} × inputs; lazily-supplied arguments run at most once,
//! only on the branch that needs them.

use crate::core::{NullOpt, Nullable};

use super::partial::Partial;

impl<T: Nullable> NullOpt<T> {
    /// Apply `f` to the held value. Absent maps to absent.
    ///
    /// The result is built through [`of`](NullOpt::of), so an `f` that lands
    /// on `U`'s absent marker yields the canonical absent instance — the
    /// carrier has no "present wrapping the marker" state to hold it. Use
    /// [`flat_map`](NullOpt::flat_map) when `f` itself decides presence.
    #[inline]
    pub fn map<U, F>(self, f: F) -> NullOpt<U>
    where
        U: Nullable,
        F: FnOnce(T) -> U,
    {
        match self.to_option() {
            Some(value) => NullOpt::of(f(value)),
            None => NullOpt::empty(),
        }
    }

    /// Apply a carrier-returning `f` and take its result as-is, with no
    /// re-wrapping. Absent maps to absent without calling `f`.
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> NullOpt<U>
    where
        U: Nullable,
        F: FnOnce(T) -> NullOpt<U>,
    {
        match self.to_option() {
            Some(value) => f(value),
            None => NullOpt::empty(),
        }
    }

    /// Keep a present value only if `p` holds for it.
    #[inline]
    pub fn filter<P>(self, p: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if self.exists(p) {
            self
        } else {
            Self::empty()
        }
    }

    /// Keep a present value only if `p` does not hold for it.
    #[inline]
    pub fn filter_not<P>(self, p: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.filter(|value| !p(value))
    }

    /// Collapse both states: `f(value)` when present, `if_empty()` when
    /// absent. `if_empty` is evaluated lazily, only on the absent path.
    #[inline]
    pub fn fold<B, E, F>(self, if_empty: E, f: F) -> B
    where
        E: FnOnce() -> B,
        F: FnOnce(T) -> B,
    {
        match self.to_option() {
            Some(value) => f(value),
            None => if_empty(),
        }
    }

    /// The held value, or `default()` evaluated only when absent.
    #[inline]
    pub fn get_or_else<D>(self, default: D) -> T
    where
        D: FnOnce() -> T,
    {
        self.fold(default, |value| value)
    }

    /// Self when present, otherwise `alt()` evaluated only when absent.
    #[inline]
    pub fn or_else<A>(self, alt: A) -> Self
    where
        A: FnOnce() -> Self,
    {
        if self.is_defined() {
            self
        } else {
            alt()
        }
    }

    /// True iff present and `p` holds for the held value.
    #[inline]
    pub fn exists<P>(&self, p: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self.as_ref() {
            Some(value) => p(value),
            None => false,
        }
    }

    /// True iff absent, or present with `p` holding for the held value.
    #[inline]
    pub fn forall<P>(&self, p: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self.as_ref() {
            Some(value) => p(value),
            None => true,
        }
    }

    /// Run `f` on the held value, if any. The one combinator that exists
    /// for its side effect.
    #[inline]
    pub fn for_each<F>(self, f: F)
    where
        F: FnOnce(T),
    {
        if let Some(value) = self.to_option() {
            f(value);
        }
    }

    /// Apply a partial function where it is defined: present values inside
    /// `pf`'s domain map through its body, everything else collapses to
    /// absent.
    #[inline]
    pub fn collect<PF>(self, pf: PF) -> NullOpt<PF::Out>
    where
        PF: Partial<T>,
        PF::Out: Nullable,
    {
        match self.to_option() {
            Some(value) if pf.is_defined_at(&value) => NullOpt::of(pf.apply(value)),
            _ => NullOpt::empty(),
        }
    }
}
