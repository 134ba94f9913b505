use crate::maybe::core::Maybe;

pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

pub struct IterMut<'a, T> {
    inner: Option<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.into_option() }
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Maybe<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Maybe<T> {
    /// Iterates over the held value: one item when present, none when absent.
    pub fn iter(&self) -> Iter<'_, T> {
        match self {
            Maybe::Present(value) => Iter { inner: Some(value) },
            Maybe::Absent => Iter { inner: None },
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        match self {
            Maybe::Present(value) => IterMut { inner: Some(value) },
            Maybe::Absent => IterMut { inner: None },
        }
    }
}

/// Collects present values; the result is absent as soon as one item is absent.
///
/// Items after the first absence are not consumed.
///
/// # Examples
///
/// ```
/// use maybe_rail::Maybe;
///
/// let all: Maybe<Vec<i32>> = vec![Maybe::some(1), Maybe::some(2)].into_iter().collect();
/// assert_eq!(all, Maybe::some(vec![1, 2]));
///
/// let gap: Maybe<Vec<i32>> = vec![Maybe::some(1), Maybe::none()].into_iter().collect();
/// assert!(gap.is_absent());
/// ```
impl<A, V> FromIterator<Maybe<A>> for Maybe<V>
where
    V: FromIterator<A>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Maybe<A>>,
    {
        let mut saw_absent = false;
        let collected: V = iter
            .into_iter()
            .map_while(|item| match item {
                Maybe::Present(value) => Some(value),
                Maybe::Absent => {
                    saw_absent = true;
                    None
                },
            })
            .collect();

        if saw_absent {
            Maybe::Absent
        } else {
            Maybe::Present(collected)
        }
    }
}
