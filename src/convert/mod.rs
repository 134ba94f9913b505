//! Conversion helpers between std containers and the railway containers.
//!
//! These adapters make it straightforward to adopt `maybe-rail` incrementally
//! by wrapping `Option`/`Result` values produced by other code, or by
//! flattening outcomes back into std types at API boundaries.
//!
//! # Examples
//!
//! ```
//! use maybe_rail::convert::*;
//! use maybe_rail::{Maybe, Outcome};
//!
//! let maybe = option_to_maybe(Some(42));
//! assert_eq!(maybe, Maybe::some(42));
//!
//! let outcome = result_to_outcome("7".parse::<u8>());
//! assert_eq!(outcome, Outcome::ok(7));
//! ```

use crate::maybe::Maybe;
use crate::outcome::{Outcome, Status};
use crate::traits::ToOutcome;
use crate::types::ErrorMessage;
use core::fmt::Display;

/// Converts an `Option` into a [`Maybe`].
///
/// # Examples
///
/// ```
/// use maybe_rail::convert::option_to_maybe;
///
/// assert!(option_to_maybe(None::<u8>).is_absent());
/// ```
#[inline]
pub fn option_to_maybe<T>(option: Option<T>) -> Maybe<T> {
    Maybe::from(option)
}

/// Converts a [`Maybe`] into an `Option`.
///
/// # Examples
///
/// ```
/// use maybe_rail::convert::maybe_to_option;
/// use maybe_rail::Maybe;
///
/// assert_eq!(maybe_to_option(Maybe::some(1)), Some(1));
/// ```
#[inline]
pub fn maybe_to_option<T>(maybe: Maybe<T>) -> Option<T> {
    maybe.into_option()
}

/// Converts a [`Maybe`] into an [`Outcome`], failing with `message` when absent.
///
/// # Arguments
///
/// * `maybe` - The optional value
/// * `message` - Failure description used on absence
///
/// # Examples
///
/// ```
/// use maybe_rail::convert::maybe_to_outcome;
/// use maybe_rail::Maybe;
///
/// let outcome = maybe_to_outcome(Maybe::<u32>::none(), "no session");
/// assert_eq!(outcome.error(), "no session");
/// ```
#[inline]
pub fn maybe_to_outcome<T, M>(maybe: Maybe<T>, message: M) -> Outcome<T>
where
    M: Into<ErrorMessage>,
{
    maybe.to_outcome(message)
}

/// Converts a `Result` into an [`Outcome`], rendering the error with `Display`.
///
/// # Examples
///
/// ```
/// use maybe_rail::convert::result_to_outcome;
///
/// let outcome = result_to_outcome(Err::<(), _>("connection refused"));
/// assert_eq!(outcome.error(), "connection refused");
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T>
where
    E: Display,
{
    Outcome::from_result(result)
}

/// Converts an [`Outcome`] into a `Result` carrying the failure message.
///
/// # Examples
///
/// ```
/// use maybe_rail::convert::outcome_to_result;
/// use maybe_rail::Outcome;
///
/// assert_eq!(outcome_to_result(Outcome::ok(5)), Ok(5));
/// ```
#[inline]
pub fn outcome_to_result<T>(outcome: Outcome<T>) -> Result<T, ErrorMessage> {
    outcome.into_result()
}

/// Drops the value of an [`Outcome`], keeping its success or failure.
///
/// # Examples
///
/// ```
/// use maybe_rail::convert::outcome_to_status;
/// use maybe_rail::{Outcome, Status};
///
/// assert_eq!(outcome_to_status(Outcome::<u8>::fail("x")), Status::fail("x"));
/// ```
#[inline]
pub fn outcome_to_status<T>(outcome: Outcome<T>) -> Status {
    Status::from(outcome)
}

/// Converts a `Result<(), E>` into a [`Status`], rendering the error with `Display`.
///
/// # Examples
///
/// ```
/// use maybe_rail::convert::result_to_status;
///
/// assert!(result_to_status(Ok::<(), &str>(())).is_success());
/// assert_eq!(result_to_status(Err::<(), _>("locked")).error(), "locked");
/// ```
#[inline]
pub fn result_to_status<E>(result: Result<(), E>) -> Status
where
    E: Display,
{
    Status::from(Outcome::from_result(result))
}

/// Converts a [`Status`] into a `Result<(), ErrorMessage>`.
#[inline]
pub fn status_to_result(status: Status) -> Result<(), ErrorMessage> {
    status.into_result()
}

/// Combines the statuses of many outcomes into one [`Status`].
///
/// Every failure message is kept, joined with `", "`.
///
/// # Examples
///
/// ```
/// use maybe_rail::convert::combine_outcomes;
/// use maybe_rail::Outcome;
///
/// let status = combine_outcomes([
///     Outcome::ok(1),
///     Outcome::fail("b failed"),
///     Outcome::fail("c failed"),
/// ]);
/// assert_eq!(status.error(), "b failed, c failed");
/// ```
pub fn combine_outcomes<T, I>(outcomes: I) -> Status
where
    I: IntoIterator<Item = Outcome<T>>,
{
    Status::combine(outcomes.into_iter().map(Status::from))
}
