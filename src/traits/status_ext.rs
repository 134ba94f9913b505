use crate::outcome::Status;

/// Taps for value-less [`Status`] results.
///
/// # Examples
///
/// ```
/// use maybe_rail::traits::StatusExt;
/// use maybe_rail::Status;
///
/// let mut rollbacks = 0;
/// let status = Status::fail("constraint violated")
///     .on_success(|| unreachable!())
///     .on_failure(|| rollbacks += 1);
///
/// assert_eq!(rollbacks, 1);
/// assert_eq!(status.error(), "constraint violated");
/// ```
pub trait StatusExt: Sized {
    /// Calls `action` if the status is a success; returns the status unchanged.
    fn on_success<A>(self, action: A) -> Self
    where
        A: FnOnce();

    /// Calls `action` if the status is a failure; returns the status unchanged.
    fn on_failure<A>(self, action: A) -> Self
    where
        A: FnOnce();

    /// Hands the whole status to `f` and returns its result.
    #[inline]
    fn on_both<U, F>(self, f: F) -> U
    where
        F: FnOnce(Self) -> U,
    {
        f(self)
    }
}

impl StatusExt for Status {
    #[inline]
    fn on_success<A>(self, action: A) -> Self
    where
        A: FnOnce(),
    {
        if self.is_success() {
            action();
        }
        self
    }

    #[inline]
    fn on_failure<A>(self, action: A) -> Self
    where
        A: FnOnce(),
    {
        if self.is_failure() {
            action();
        }
        self
    }
}
