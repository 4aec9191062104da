use crate::errors::ListCombinationsError;
use std::iter::FusedIterator;

/// Cursor over the combinations of a `ListCombinations` generator.
///
/// The cursor holds one index per source list and advances like an odometer,
/// the index into the last list turning fastest. Obtained from
/// `ListCombinations::iter`; each instance is independent of every other.
pub struct ListCombinationIter<'a, T: Clone> {
    pub(crate) cursor: Vec<usize>,
    pub(crate) started: bool,
    pub(crate) exhausted: bool,
    pub(crate) lists: &'a Vec<Vec<T>>,
}

impl<T: Clone> ListCombinationIter<'_, T> {
    /// Returns `true` while at least one more combination is pending.
    /// Does not mutate the cursor, repeated calls always agree.
    pub fn has_next(&self) -> bool {
        if self.exhausted {
            return false;
        }
        if !self.started {
            return true;
        }
        self.cursor
            .iter()
            .zip(self.lists)
            .any(|(&idx, list)| idx + 1 < list.len())
    }

    /// Produces the next combination.
    ///
    /// The first call yields the combination at the all-zero cursor. Every
    /// later call advances the cursor one mixed-radix step before reading:
    /// the last index is incremented, and on reaching the length of its list
    /// it resets to zero and carries into the index to its left. When the
    /// carry runs off the first list the iterator is exhausted and this and
    /// all further calls return `EndOfSequence`.
    pub fn try_next(&mut self) -> Result<Vec<T>, ListCombinationsError> {
        if self.exhausted {
            return Err(ListCombinationsError::EndOfSequence);
        }
        if !self.started {
            self.started = true;
            return Ok(self.current());
        }
        let mut digit = self.cursor.len();
        loop {
            if digit == 0 {
                self.exhausted = true;
                return Err(ListCombinationsError::EndOfSequence);
            }
            digit -= 1;
            self.cursor[digit] += 1;
            if self.cursor[digit] < self.lists[digit].len() {
                break;
            }
            self.cursor[digit] = 0;
        }
        Ok(self.current())
    }

    /// builds a fresh combination by cloning the element each index points at
    fn current(&self) -> Vec<T> {
        self.cursor
            .iter()
            .zip(self.lists)
            .map(|(&idx, list)| list[idx].clone())
            .collect()
    }
}

impl<T: Clone> Iterator for ListCombinationIter<'_, T> {
    type Item = Vec<T>;
    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let mut max = Some(1usize);
        for list in self.lists {
            max = max.and_then(|m| m.checked_mul(list.len()));
        }
        (0, max)
    }
}
impl<T: Clone> FusedIterator for ListCombinationIter<'_, T> {}
