use core::fmt::{self, Display};

/// Misuse of a container API.
///
/// Reading the value of an absent [`Maybe`](crate::Maybe) or of a failed
/// [`Outcome`](crate::Outcome), reading the error of a success, or building a
/// present `Maybe` from an empty nullable source are programming errors, not
/// domain failures. The panicking accessors abort with the [`Display`] text
/// of one of these variants; the `try_*` accessors return it instead.
///
/// # Examples
///
/// ```
/// use maybe_rail::{ContractViolation, Maybe};
///
/// let missing: Maybe<i32> = Maybe::none();
/// assert_eq!(missing.try_value(), Err(ContractViolation::AbsentValue));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractViolation {
    /// The value of an absent `Maybe` was requested.
    AbsentValue,
    /// A present `Maybe` was requested from an empty nullable source.
    NullValue,
    /// The value of a failed `Outcome` was requested.
    FailedOutcomeValue,
    /// The error of a successful `Outcome` or `Status` was requested.
    SuccessfulOutcomeError,
}

impl ContractViolation {
    /// Returns the static description of the violation.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::AbsentValue => "Maybe does not have a value",
            Self::NullValue => "cannot create a present Maybe from a null value",
            Self::FailedOutcomeValue => "Outcome is a failure and does not have a value",
            Self::SuccessfulOutcomeError => "Outcome is a success and does not have an error",
        }
    }
}

impl Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl core::error::Error for ContractViolation {}

/// Aborts the current operation because the container API was misused.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn violated(violation: ContractViolation) -> ! {
    panic!("{}", violation)
}
