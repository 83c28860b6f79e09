//! The one error. Everything else is total.

/// Forced unwrap hit the absent state.
///
/// Returned by [`NullOpt::or_fail`](crate::NullOpt::or_fail) and carried in
/// the panic message of [`NullOpt::get`](crate::NullOpt::get). Nothing else
/// in the crate fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyValueAccess;

impl core::fmt::Display for EmptyValueAccess {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("forced unwrap of absent value")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EmptyValueAccess {}
