use crate::outcome::core::Outcome;
use crate::types::ErrorMessage;

/// Collects success values, stopping at the first failure.
///
/// Items after the first failure are not consumed, matching the railway
/// behaviour of the transform combinators.
///
/// # Examples
///
/// ```
/// use maybe_rail::Outcome;
///
/// let parsed: Outcome<Vec<u8>> = ["1", "2", "x", "y"]
///     .into_iter()
///     .map(|s| Outcome::from(s.parse::<u8>()))
///     .collect();
/// assert_eq!(parsed.error(), "invalid digit found in string");
/// ```
impl<T, C> FromIterator<Outcome<T>> for Outcome<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Outcome<T>>,
    {
        let mut failure: Option<ErrorMessage> = None;
        let collected: C = iter
            .into_iter()
            .map_while(|item| match item {
                Outcome::Success(value) => Some(value),
                Outcome::Failure(message) => {
                    failure = Some(message);
                    None
                },
            })
            .collect();

        match failure {
            Some(message) => Outcome::Failure(message),
            None => Outcome::Success(collected),
        }
    }
}

impl<T> IntoIterator for Outcome<T> {
    type Item = T;
    type IntoIter = ::core::option::IntoIter<T>;

    /// Yields the success value once; a failure yields nothing.
    fn into_iter(self) -> Self::IntoIter {
        self.into_result().ok().into_iter()
    }
}
