//! Combinator layer for railway pipelines.
//!
//! This module defines the traits that chain [`Maybe`](crate::Maybe),
//! [`Outcome`](crate::Outcome) and [`Status`](crate::Status) values without
//! branching at the call site:
//!
//! - [`ToOutcome`]: Enters the railway from an optional value
//! - [`OutcomeExt`]: Transforms, guards and taps on [`Outcome`](crate::Outcome)
//! - [`StatusExt`]: Taps on value-less [`Status`](crate::Status)
//!
//! # Examples
//!
//! ```
//! use maybe_rail::traits::{OutcomeExt, ToOutcome};
//! use maybe_rail::Maybe;
//!
//! let mut misses = 0;
//! let outcome = Maybe::<&str>::none()
//!     .to_outcome("missing")
//!     .map(str::len)
//!     .on_failure(|_| misses += 1);
//!
//! assert_eq!(misses, 1);
//! assert_eq!(outcome.error(), "missing");
//! ```

pub mod outcome_ext;
pub mod status_ext;
pub mod to_outcome;

pub use outcome_ext::OutcomeExt;
pub use status_ext::StatusExt;
pub use to_outcome::ToOutcome;
