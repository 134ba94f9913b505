//! Railway oriented containers and combinators.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `maybe_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Optional Values
//!
//! ```
//! use maybe_rail::Maybe;
//!
//! let port = Maybe::some("8080")
//!     .and_then(|p| Maybe::from(p.parse::<u16>().ok()))
//!     .map(|p| p + 1);
//!
//! assert_eq!(port.value_or_default(80), 8081);
//! ```
//!
//! ## Railway Pipeline
//!
//! ```
//! use maybe_rail::prelude::*;
//!
//! let mut logged = Vec::new();
//! let doubled = Outcome::ok(5)
//!     .ensure(|x| *x > 0, "must be positive")
//!     .map(|x| x * 2)
//!     .on_success(|x| logged.push(*x));
//!
//! assert_eq!(doubled, Outcome::ok(10));
//! assert_eq!(logged, vec![10]);
//! ```
//!
//! ## From Maybe to Outcome
//!
//! ```
//! use maybe_rail::prelude::*;
//!
//! let mut misses = 0;
//! let outcome = Maybe::<String>::none()
//!     .to_outcome("missing")
//!     .on_failure(|_| misses += 1);
//!
//! assert_eq!(misses, 1);
//! assert_eq!(outcome.error(), "missing");
//! ```
#![cfg_attr(not(any(feature = "std", test)), no_std)]

extern crate alloc;

/// Conversions between std containers and the railway containers
pub mod convert;
/// Formatting constructors for failures
pub mod macros;
/// Optional value container
pub mod maybe;
/// Success/failure containers
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Combinator traits
pub mod traits;
/// Shared message, collection and contract violation types
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use maybe::Maybe;
pub use outcome::{Outcome, Status};
pub use traits::*;
pub use types::{ContractViolation, ErrorMessage, ErrorVec};
