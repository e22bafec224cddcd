//! opt: a flat optional container `Opt<T>` with an explicit presence flag.
//! One generic definition covers every `T`; `define_opt!` and
//! `define_opt_primitives!` name concrete instantiations after their type.

pub mod error;
pub mod generate;
pub mod opt;
pub mod optional;

#[cfg(feature = "primitives")]
pub mod primitives;

pub use error::{OptError, Result};
pub use opt::Opt;
pub use optional::Optional;

#[doc(hidden)]
pub use paste;

#[cfg(feature = "primitives")]
pub use primitives::*;
