use crate::types::alloc_type::String;
use crate::types::contract_violation::{violated, ContractViolation};
use crate::types::ErrorMessage;
use alloc::string::ToString;
use core::fmt::Display;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::status::Status;

/// Result of a fallible step: a value on success, a message on failure.
///
/// Ordinary failures are data, not panics. An `Outcome` is consumed through
/// pattern matching, the flag queries, or the combinators of
/// [`OutcomeExt`](crate::traits::OutcomeExt), which forward the first failure
/// untouched through every later transform.
///
/// # Serde Support
///
/// `Outcome` implements `Serialize` and `Deserialize` when `T` does and the
/// `serde` feature is enabled.
///
/// # Type Parameters
///
/// * `T` - The success value type
///
/// # Variants
///
/// * `Success(T)` - The step produced a value
/// * `Failure(ErrorMessage)` - The step failed with a description
///
/// # Examples
///
/// ```
/// use maybe_rail::Outcome;
///
/// let ok = Outcome::ok(42);
/// assert!(ok.is_success());
/// assert_eq!(ok.value(), &42);
///
/// let failed = Outcome::<i32>::fail("bad input");
/// assert!(failed.is_failure());
/// assert_eq!(failed.error(), "bad input");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum Outcome<T> {
    Success(T),
    Failure(ErrorMessage),
}

impl<T> Outcome<T> {
    /// Creates a successful outcome.
    ///
    /// # Arguments
    ///
    /// * `value` - The success value to wrap
    #[inline]
    pub fn ok(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome.
    ///
    /// # Arguments
    ///
    /// * `message` - Description of the failure, borrowed if `'static` or owned
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::Outcome;
    ///
    /// let id = 7;
    /// let failed = Outcome::<()>::fail(format!("user {id} not found"));
    /// assert_eq!(failed.error(), "user 7 not found");
    /// ```
    #[inline]
    pub fn fail<M>(message: M) -> Self
    where
        M: Into<ErrorMessage>,
    {
        Self::Failure(message.into())
    }

    /// Returns `true` if the outcome holds a value.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome holds a failure message.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrows the success value.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::FailedOutcomeValue`] on failure.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => violated(ContractViolation::FailedOutcomeValue),
        }
    }

    /// Consumes the outcome and returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::FailedOutcomeValue`] on failure.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => violated(ContractViolation::FailedOutcomeValue),
        }
    }

    /// Borrows the failure message.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::SuccessfulOutcomeError`] on success.
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use maybe_rail::Outcome;
    ///
    /// let _ = Outcome::ok(1).error();
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn error(&self) -> &str {
        match self {
            Self::Success(_) => violated(ContractViolation::SuccessfulOutcomeError),
            Self::Failure(message) => message.as_ref(),
        }
    }

    /// Returns the success value, if any.
    #[must_use]
    #[inline]
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the failure message, if any.
    #[must_use]
    #[inline]
    pub fn as_error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(message) => Some(message.as_ref()),
        }
    }

    /// Drops the value, keeping only success or the failure message.
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::{Outcome, Status};
    ///
    /// assert_eq!(Outcome::ok("saved").status(), Status::ok());
    /// assert_eq!(Outcome::<()>::fail("disk full").status(), Status::fail("disk full"));
    /// ```
    #[inline]
    pub fn status(&self) -> Status {
        match self {
            Self::Success(_) => Status::Success,
            Self::Failure(message) => Status::Failure(message.clone()),
        }
    }

    /// Converts into a standard `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::Outcome;
    ///
    /// assert_eq!(Outcome::ok(3).into_result(), Ok(3));
    /// assert!(Outcome::<i32>::fail("nope").into_result().is_err());
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, ErrorMessage> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(message) => Err(message),
        }
    }

    /// Wraps a standard `Result`, rendering the error with its `Display` impl.
    ///
    /// # Arguments
    ///
    /// * `result` - The result to convert
    #[inline]
    pub fn from_result<E>(result: Result<T, E>) -> Self
    where
        E: Display,
    {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(ErrorMessage::Owned(error.to_string())),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, ErrorMessage> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T> From<Outcome<T>> for Result<T, String> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result().map_err(ErrorMessage::into_owned)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Display,
{
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T> From<Outcome<T>> for Status {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(_) => Status::Success,
            Outcome::Failure(message) => Status::Failure(message),
        }
    }
}
