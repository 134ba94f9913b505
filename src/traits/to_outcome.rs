use crate::maybe::Maybe;
use crate::outcome::Outcome;
use crate::types::ErrorMessage;

/// Conversion of optional values into the railway.
///
/// Presence becomes [`Outcome::Success`], absence becomes
/// [`Outcome::Failure`] with the caller's message. The conversion is total.
///
/// # Examples
///
/// ```
/// use maybe_rail::prelude::*;
///
/// let found = Maybe::some("ferris").to_outcome("user not found");
/// assert_eq!(found, Outcome::ok("ferris"));
///
/// let missing = Maybe::<&str>::none().to_outcome("user not found");
/// assert_eq!(missing.error(), "user not found");
///
/// let from_std = Some(3).to_outcome("no value");
/// assert!(from_std.is_success());
/// ```
pub trait ToOutcome<T> {
    /// Converts into an [`Outcome`], failing with `message` when no value is present.
    ///
    /// # Arguments
    ///
    /// * `message` - Failure description used when the value is absent
    fn to_outcome<M>(self, message: M) -> Outcome<T>
    where
        M: Into<ErrorMessage>;
}

impl<T> ToOutcome<T> for Maybe<T> {
    #[inline]
    fn to_outcome<M>(self, message: M) -> Outcome<T>
    where
        M: Into<ErrorMessage>,
    {
        match self {
            Maybe::Present(value) => Outcome::ok(value),
            Maybe::Absent => Outcome::fail(message),
        }
    }
}

impl<T> ToOutcome<T> for Option<T> {
    #[inline]
    fn to_outcome<M>(self, message: M) -> Outcome<T>
    where
        M: Into<ErrorMessage>,
    {
        Maybe::from(self).to_outcome(message)
    }
}
