use crate::types::alloc_type::String;
use crate::types::contract_violation::{violated, ContractViolation};
use crate::types::{ErrorMessage, ErrorVec};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Separator used by [`Status::combine`] when joining failure messages.
pub const DEFAULT_SEPARATOR: &str = ", ";

/// Success or failure of a step that has no meaningful return value.
///
/// # Examples
///
/// ```
/// use maybe_rail::Status;
///
/// let saved = Status::ok();
/// assert!(saved.is_success());
///
/// let rejected = Status::fail("quota exceeded");
/// assert_eq!(rejected.error(), "quota exceeded");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum Status {
    Success,
    Failure(ErrorMessage),
}

impl Status {
    /// Creates a successful status.
    #[inline]
    pub const fn ok() -> Self {
        Self::Success
    }

    /// Creates a failed status.
    ///
    /// # Arguments
    ///
    /// * `message` - Description of the failure
    #[inline]
    pub fn fail<M>(message: M) -> Self
    where
        M: Into<ErrorMessage>,
    {
        Self::Failure(message.into())
    }

    #[must_use]
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    #[must_use]
    #[inline]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrows the failure message.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::SuccessfulOutcomeError`] on success.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn error(&self) -> &str {
        match self {
            Self::Success => violated(ContractViolation::SuccessfulOutcomeError),
            Self::Failure(message) => message.as_ref(),
        }
    }

    /// Returns the failure message, if any.
    #[must_use]
    #[inline]
    pub fn as_error(&self) -> Option<&str> {
        match self {
            Self::Success => None,
            Self::Failure(message) => Some(message.as_ref()),
        }
    }

    /// Converts into a standard `Result<(), ErrorMessage>`.
    #[inline]
    pub fn into_result(self) -> Result<(), ErrorMessage> {
        match self {
            Self::Success => Ok(()),
            Self::Failure(message) => Err(message),
        }
    }

    /// Combines statuses, joining every failure message with `", "`.
    ///
    /// The combined status is a success only if every input succeeded.
    /// Unlike the transform combinators this inspects every input, so that
    /// all failures are reported at once.
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::Status;
    ///
    /// let all = Status::combine([Status::ok(), Status::ok()]);
    /// assert!(all.is_success());
    ///
    /// let some = Status::combine([
    ///     Status::fail("name is empty"),
    ///     Status::ok(),
    ///     Status::fail("age is negative"),
    /// ]);
    /// assert_eq!(some.error(), "name is empty, age is negative");
    /// ```
    pub fn combine<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = Status>,
    {
        Self::combine_with(statuses, DEFAULT_SEPARATOR)
    }

    /// Combines statuses, joining every failure message with `separator`.
    ///
    /// A single failure keeps its message as-is, without reallocating.
    pub fn combine_with<I>(statuses: I, separator: &str) -> Self
    where
        I: IntoIterator<Item = Status>,
    {
        let mut failures: ErrorVec<ErrorMessage> = statuses
            .into_iter()
            .filter_map(|status| match status {
                Status::Success => None,
                Status::Failure(message) => Some(message),
            })
            .collect();

        match failures.len() {
            0 => Self::Success,
            1 => match failures.pop() {
                Some(message) => Self::Failure(message),
                None => Self::Success,
            },
            _ => Self::Failure(ErrorMessage::Owned(join(&failures, separator))),
        }
    }
}

impl Default for Status {
    #[inline]
    fn default() -> Self {
        Self::Success
    }
}

/// Success iff all statuses succeed; see [`Status::combine`].
impl FromIterator<Status> for Status {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Status>,
    {
        Self::combine(iter)
    }
}

impl From<Status> for Result<(), ErrorMessage> {
    #[inline]
    fn from(status: Status) -> Self {
        status.into_result()
    }
}

fn join(messages: &[ErrorMessage], separator: &str) -> String {
    let capacity = messages.iter().map(|m| m.len()).sum::<usize>()
        + separator.len() * messages.len().saturating_sub(1);
    let mut joined = String::with_capacity(capacity);
    for (index, message) in messages.iter().enumerate() {
        if index > 0 {
            joined.push_str(separator);
        }
        joined.push_str(message);
    }
    joined
}
