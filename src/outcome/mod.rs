//! Success/failure containers for railway pipelines.
//!
//! This module provides [`Outcome`], which carries a value or a failure
//! message, and [`Status`], its value-less sibling for steps that only
//! succeed or fail.
//!
//! # Key Components
//!
//! - [`Outcome`] - A value on success, an [`ErrorMessage`](crate::types::ErrorMessage) on failure
//! - [`Status`] - Success flag or failure message, plus [`Status::combine`]
//! - `FromIterator` support with first-failure-wins semantics
//!
//! # Examples
//!
//! ```
//! use maybe_rail::outcome::{Outcome, Status};
//!
//! let outcome = Outcome::ok(10);
//! assert_eq!(outcome.status(), Status::ok());
//!
//! let values: Outcome<Vec<i32>> = vec![Outcome::ok(1), Outcome::ok(2)].into_iter().collect();
//! assert_eq!(values.into_value(), vec![1, 2]);
//! ```
pub mod core;
pub mod iter;
pub mod status;

pub use self::core::*;
pub use self::status::*;
