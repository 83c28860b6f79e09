//! In-band optional values. Absence lives in the representation, not in a tag.
//!
//! [`NullOpt<T>`] is a two-state carrier (Present / Absent) whose absent state
//! reuses a representation `T` cannot occupy: a null pointer for references,
//! zero for the `NonZero` family, a reserved sentinel for user types. Types
//! with no spare representation fall back to an `Option`-backed storage, which
//! the compiler's niche optimization flattens wherever a niche exists.
//!
//! The [`Nullable`] trait is the representation contract; the combinator
//! surface (`map`, `flat_map`, `filter`, `zip`, `fold`, ...) lives on
//! [`NullOpt`] itself and converts losslessly to and from `Option<T>`.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod algebra;
pub mod convert;
pub mod core;
pub mod iter;

/// Prelude for convenient imports of primary API types.
pub mod prelude {
    pub use crate::algebra::{guarded, Guarded, Partial};
    pub use crate::core::{EmptyValueAccess, NullOpt, Nullable};
    pub use crate::iter::{IntoIter, Iter};
}

// Re-export primary types at crate root for convenience.
pub use crate::algebra::{guarded, Guarded, LawWitness, Partial};
pub use crate::core::{EmptyValueAccess, NullOpt, Nullable};
pub use crate::iter::{IntoIter, Iter};
