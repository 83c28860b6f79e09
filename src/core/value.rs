//! NullOpt: the carrier. `repr(transparent)` over the type's representation,
//! so Present and Absent cost exactly what `T::Repr` costs.

use super::error::EmptyValueAccess;
use super::nullable::Nullable;

/// A two-state optional value whose absent state is the reserved
/// representation of `T`.
///
/// Immutable value semantics: no operation mutates an instance in place,
/// every combinator produces a new one. Two absent instances always compare
/// equal; a present instance can never hold the absent marker, because
/// [`of`](NullOpt::of) normalizes the marker to Absent at construction.
#[repr(transparent)]
pub struct NullOpt<T: Nullable> {
    repr: T::Repr,
}

// Zero-overhead representations stay the size of the bare type.
const _: () = {
    assert!(
        core::mem::size_of::<NullOpt<&'static u8>>() == core::mem::size_of::<&'static u8>()
    );
    assert!(
        core::mem::size_of::<NullOpt<core::num::NonZeroU64>>()
            == core::mem::size_of::<core::num::NonZeroU64>()
    );
    assert!(core::mem::size_of::<NullOpt<char>>() == core::mem::size_of::<char>());
};

impl<T: Nullable> NullOpt<T> {
    /// Present, wrapping `value`. If `value` is the absent marker for `T`
    /// (possible only for sentinel-carrying types), the result is the
    /// canonical absent instance, not a present-wrapping-the-marker state.
    #[inline(always)]
    pub fn of(value: T) -> Self {
        Self {
            repr: T::embed(value),
        }
    }

    /// The canonical absent instance.
    #[inline(always)]
    pub fn empty() -> Self {
        Self { repr: T::absent() }
    }

    /// True iff absent.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        T::is_absent(&self.repr)
    }

    /// True iff present.
    #[inline(always)]
    pub fn is_defined(&self) -> bool {
        !self.is_empty()
    }

    /// True iff present. Alias of [`is_defined`](NullOpt::is_defined).
    #[inline(always)]
    pub fn non_empty(&self) -> bool {
        self.is_defined()
    }

    /// Borrow the held value, if any.
    #[inline(always)]
    pub fn as_ref(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(T::project_ref(&self.repr))
        }
    }

    /// True iff present and the held value equals `probe`. Absent contains
    /// nothing, including the absent marker itself.
    #[inline]
    pub fn contains(&self, probe: &T) -> bool
    where
        T: PartialEq,
    {
        match self.as_ref() {
            Some(value) => value == probe,
            None => false,
        }
    }

    /// Forced unwrap, propagating form. The only failing operation in the
    /// crate: absent instances yield [`EmptyValueAccess`], deterministically.
    #[inline]
    pub fn or_fail(self) -> Result<T, EmptyValueAccess> {
        if self.is_empty() {
            Err(EmptyValueAccess)
        } else {
            Ok(T::project(self.repr))
        }
    }

    /// Forced unwrap, panicking form.
    ///
    /// # Panics
    ///
    /// Panics with the [`EmptyValueAccess`] message when absent. Prefer
    /// [`or_fail`](NullOpt::or_fail) where the caller can propagate.
    #[inline]
    #[track_caller]
    pub fn get(self) -> T {
        match self.or_fail() {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }

    /// Convert to the standard optional type, preserving the state.
    #[inline]
    pub fn to_option(self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(T::project(self.repr))
        }
    }
}

impl<T: Nullable + Clone> Clone for NullOpt<T> {
    #[inline]
    fn clone(&self) -> Self {
        match self.as_ref() {
            Some(value) => Self::of(value.clone()),
            None => Self::empty(),
        }
    }
}

impl<T: Nullable + Copy> Copy for NullOpt<T> where T::Repr: Copy {}

impl<T: Nullable + PartialEq> PartialEq for NullOpt<T> {
    /// Value equality. All absent instances are equal; absent never equals
    /// present.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (self.as_ref(), other.as_ref()) {
            (None, None) => true,
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: Nullable + Eq> Eq for NullOpt<T> {}

impl<T: Nullable + core::hash::Hash> core::hash::Hash for NullOpt<T> {
    /// Same discriminant-then-value scheme as `Option`, so a `NullOpt` and
    /// its `to_option` image hash identically under the same hasher.
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.as_ref().hash(state)
    }
}

impl<T: Nullable + core::fmt::Debug> core::fmt::Debug for NullOpt<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.as_ref() {
            Some(value) => f.debug_tuple("Present").field(value).finish(),
            None => f.write_str("Absent"),
        }
    }
}

impl<T: Nullable> Default for NullOpt<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}
