use alloc::boxed::Box;
use core::iter::FusedIterator;

use crate::Reflect;

// -----------------------------------------------------------------------------
// Sequence

/// An indexable run of reflected values.
///
/// This is the indexed accessor pair used by both `name[i]` and `get(i)`
/// address segments: [`get`](Sequence::get) reads an element and
/// [`set`](Sequence::set) replaces one.
///
/// # Examples
///
/// ```
/// use vc_discovery::{Reflect, ops::Sequence};
///
/// let mut list = vec![1_u8, 2, 3];
/// assert_eq!(Sequence::len(&list), 3);
///
/// list.set(1, Box::new(20_u8)).unwrap();
/// assert_eq!(Sequence::get(&list, 1).unwrap().downcast_ref::<u8>(), Some(&20));
///
/// // wrong item type is handed back
/// assert!(list.set(0, Box::new("x".to_string())).is_err());
/// ```
pub trait Sequence: Reflect {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the element at `index` mutably.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Replaces the element at `index`.
    ///
    /// The value is handed back if `index` is out of range or the value has
    /// the wrong type.
    fn set(&mut self, index: usize, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;
}

impl dyn Sequence {
    /// Iterates over the elements in index order.
    #[inline]
    pub fn iter(&self) -> SequenceIter<'_> {
        SequenceIter {
            sequence: self,
            index: 0,
        }
    }
}

// -----------------------------------------------------------------------------
// SequenceIter

/// An iterator over the elements of a [`Sequence`].
pub struct SequenceIter<'a> {
    sequence: &'a dyn Sequence,
    index: usize,
}

impl<'a> Iterator for SequenceIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.sequence.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let hint = self.sequence.len().saturating_sub(self.index);
        (hint, Some(hint))
    }
}

impl ExactSizeIterator for SequenceIter<'_> {}

impl FusedIterator for SequenceIter<'_> {}
