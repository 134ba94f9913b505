//! Shared building blocks for the containers.
//!
//! This module holds the message type carried by failed outcomes, the
//! inline collection used when failures are accumulated, and the
//! [`ContractViolation`] describing API misuse.
//!
//! # Examples
//!
//! ```
//! use maybe_rail::types::{ContractViolation, ErrorMessage};
//!
//! let message: ErrorMessage = "user not found".into();
//! assert_eq!(message, "user not found");
//!
//! let violation = ContractViolation::AbsentValue;
//! assert_eq!(violation.to_string(), "Maybe does not have a value");
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod contract_violation;

pub use contract_violation::*;

use alloc_type::Cow;

/// Message carried by a failed [`Outcome`](crate::Outcome) or [`Status`](crate::Status).
///
/// Static strings are stored borrowed, formatted messages are owned.
pub type ErrorMessage = Cow<'static, str>;

/// SmallVec-backed collection used for accumulating failure messages.
///
/// Uses inline storage for a single element, the common case when
/// combining statuses where only one step failed.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
