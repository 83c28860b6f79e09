//! The guts. Representation contract, the carrier type, the one error.

pub mod error;
pub mod nullable;
pub mod value;

pub use error::EmptyValueAccess;
pub use nullable::Nullable;
pub use value::NullOpt;
