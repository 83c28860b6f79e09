//! Partial functions: a body paired with a defined-at guard. The capability
//! `collect` consumes.

/// A function defined on a subset of its input domain.
///
/// Callers must check [`is_defined_at`](Partial::is_defined_at) before
/// [`apply`](Partial::apply); applying outside the defined domain is a logic
/// error on the implementation's terms (the provided [`Guarded`] adapter
/// debug-asserts it).
pub trait Partial<A> {
    /// Result type of the defined region.
    type Out;

    /// Whether the function is defined at `value`.
    fn is_defined_at(&self, value: &A) -> bool;

    /// Apply the function. Only meaningful when `is_defined_at(&value)`.
    fn apply(self, value: A) -> Self::Out;
}

/// A partial function assembled from a guard predicate and a body closure.
pub struct Guarded<P, F> {
    guard: P,
    body: F,
}

/// Pair a guard with a body: defined exactly where `guard` holds.
#[inline]
pub fn guarded<A, B, P, F>(guard: P, body: F) -> Guarded<P, F>
where
    P: Fn(&A) -> bool,
    F: FnOnce(A) -> B,
{
    Guarded { guard, body }
}

impl<A, B, P, F> Partial<A> for Guarded<P, F>
where
    P: Fn(&A) -> bool,
    F: FnOnce(A) -> B,
{
    type Out = B;

    #[inline]
    fn is_defined_at(&self, value: &A) -> bool {
        (self.guard)(value)
    }

    #[inline]
    fn apply(self, value: A) -> B {
        debug_assert!((self.guard)(&value), "applied outside the defined domain");
        (self.body)(value)
    }
}
