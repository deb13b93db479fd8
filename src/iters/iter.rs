
use crate::BoundedList;
use std::{
    iter::*,
    fmt::{self, Debug,},
};

/// Creates a new `Iter` from parts.
///
/// # Params
///
/// list --- The `BoundedList` to iterate over.
/// ends --- The ends of the `BoundedList` to iterate over.
#[inline]
pub fn new_iter<'t, T: 't,>(list: &'t BoundedList<T,>, ends: Option<(usize, usize,)>,) -> Iter<'t, T,> {
    Iter { list, ends, remaining: list.len(), }
}

/// An iterator over the values of a `BoundedList` from head to tail.
pub struct Iter<'t, T: 't,> {
    /// The `BoundedList` to iterate over.
    list: &'t BoundedList<T,>,
    /// The ends still to be yielded.
    ends: Option<(usize, usize,)>,
    /// The number of values still to be yielded.
    remaining: usize,
}

impl<'t, T: 't,> Clone for Iter<'t, T,> {
    #[inline]
    fn clone(&self) -> Self {
        Self { list: self.list, ends: self.ends, remaining: self.remaining, }
    }
}

impl<'t, T: 't + Debug,> Debug for Iter<'t, T,> {
    fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
        fmt.debug_list().entries(self.clone()).finish()
    }
}

impl<'t, T: 't,> Iterator for Iter<'t, T,> {
    type Item = &'t T;

    fn next(&mut self) -> Option<Self::Item,> {
        let (node, tail,) = self.ends?;
        let list = self.list;

        self.ends = if node == tail { None }
            else { list.node(node).next().map(|next| (next, tail,)) };
        self.remaining -= 1;

        list.node(node).value()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize,>,) {
        (self.remaining, Some(self.remaining),)
    }
}

impl<'t, T: 't,> DoubleEndedIterator for Iter<'t, T,> {
    fn next_back(&mut self) -> Option<Self::Item,> {
        let (head, node,) = self.ends?;
        let list = self.list;

        self.ends = if node == head { None }
            else { list.node(node).prev().map(|prev| (head, prev,)) };
        self.remaining -= 1;

        list.node(node).value()
    }
}

impl<'t, T: 't,> ExactSizeIterator for Iter<'t, T,> {}

impl<'t, T: 't,> FusedIterator for Iter<'t, T,> {}
