use crate::errors::ListCombinationsError;
use crate::list_combination_iter::ListCombinationIter;

/// Generator of simple combinations over an ordered set of source lists.
///
/// Owns its lists for its whole lifetime, so combinations observed by an
/// in-flight iterator can never change under it. Acts purely as a factory:
/// every call to `iter` returns a fresh, independently positioned cursor.
pub struct ListCombinations<T> {
    lists: Vec<Vec<T>>,
}

impl<T: Clone> ListCombinations<T> {
    /// Builds a generator from an ordered collection of source lists.
    ///
    /// The lists are taken over by value and validated eagerly: if any list
    /// is empty the whole construction fails with `EmptyList` carrying the
    /// position of the offending list, before a single combination is
    /// produced. Zero source lists is accepted and yields exactly one empty
    /// combination.
    ///
    /// # Examples
    /// let generator = ListCombinations::of(vec![vec![1, 2, 3], vec![4, 5]]);
    /// // the generator will produce [1,4], [1,5], [2,4], [2,5], [3,4], [3,5]
    pub fn of<I>(lists: I) -> Result<ListCombinations<T>, ListCombinationsError>
    where
        I: IntoIterator<Item = Vec<T>>,
    {
        let mut stored = Vec::new();
        for (position, list) in lists.into_iter().enumerate() {
            if list.is_empty() {
                return Err(ListCombinationsError::EmptyList(position));
            }
            stored.push(list);
        }
        Ok(ListCombinations { lists: stored })
    }

    /// Returns the number of source lists.
    pub fn len(&self) -> usize {
        self.lists.len()
    }
    /// Returns `true` if the generator holds no source lists.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
    /// Returns the exact number of combinations a full iteration produces,
    /// or `None` when the product of the list lengths overflows `usize`.
    pub fn total(&self) -> Option<usize> {
        self.lists
            .iter()
            .try_fold(1usize, |acc, list| acc.checked_mul(list.len()))
    }
    // Returns an iterator over the combinations
    pub fn iter(&self) -> ListCombinationIter<'_, T> {
        ListCombinationIter {
            cursor: vec![0; self.lists.len()],
            started: false,
            exhausted: false,
            lists: &self.lists,
        }
    }
}

impl<'a, T: Clone> IntoIterator for &'a ListCombinations<T> {
    type Item = Vec<T>;

    type IntoIter = ListCombinationIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
