//! The conversion boundary: lossless round trips with `Option`, the
//! `Result`-sided pair, and optional serde support (serialized as `Option`).

use crate::core::{NullOpt, Nullable};

impl<T: Nullable> NullOpt<T> {
    /// Build from the standard optional type, preserving the state.
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::of(value),
            None => Self::empty(),
        }
    }

    /// The held value on the `Ok` side, or `err()` on the `Err` side when
    /// absent. `err` is evaluated only on the absent path.
    #[inline]
    pub fn ok_or_else<E, F>(self, err: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self.to_option() {
            Some(value) => Ok(value),
            None => Err(err()),
        }
    }

    /// The mirror of [`ok_or_else`](NullOpt::ok_or_else): the held value on
    /// the `Err` side, or `ok()` on the `Ok` side when absent. `ok` is
    /// evaluated only on the absent path.
    #[inline]
    pub fn err_or_else<B, F>(self, ok: F) -> Result<B, T>
    where
        F: FnOnce() -> B,
    {
        match self.to_option() {
            Some(value) => Err(value),
            None => Ok(ok()),
        }
    }
}

impl<T: Nullable> From<Option<T>> for NullOpt<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

impl<T: Nullable> From<NullOpt<T>> for Option<T> {
    #[inline]
    fn from(value: NullOpt<T>) -> Self {
        value.to_option()
    }
}

impl<T: Nullable + PartialEq> PartialEq<Option<T>> for NullOpt<T> {
    #[inline]
    fn eq(&self, other: &Option<T>) -> bool {
        match (self.as_ref(), other.as_ref()) {
            (None, None) => true,
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(feature = "serde")]
impl<T> serde::Serialize for NullOpt<T>
where
    T: Nullable + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self.as_ref() {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for NullOpt<T>
where
    T: Nullable + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from_option)
    }
}
