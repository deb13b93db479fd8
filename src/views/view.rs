
use crate::BoundedList;
use std::{
    ops::Deref, convert::AsRef, borrow::Borrow,
    fmt::{self, Debug,},
};

/// Creates a `View` of the live `Node` at `node`, `None` if the `Node` is released.
///
/// # Params
///
/// list --- The `BoundedList` holding the `Node`.
/// node --- The index of the `Node` in the `BoundedList`.
#[inline]
pub fn new_view<'t, T: 't,>(list: &'t BoundedList<T,>, node: usize,) -> Option<View<'t, T,>,> {
    list.node(node).value().map(|value| View { list, node, value, })
}

/// A read-only cursor on one value of a `BoundedList` which can step to its neighbours.
pub struct View<'t, T: 't,> {
    list: &'t BoundedList<T,>,
    node: usize,
    value: &'t T,
}

impl<'t, T: 't,> View<'t, T,> {
    /// Returns a [`View`] of the next value towards the tail.
    #[inline]
    pub fn next(&self) -> Option<Self,> {
        self.list.node(self.node).next().and_then(|next| new_view(self.list, next,))
    }
    /// Returns a [`View`] of the previous value towards the head.
    #[inline]
    pub fn prev(&self) -> Option<Self,> {
        self.list.node(self.node).prev().and_then(|prev| new_view(self.list, prev,))
    }
    /// Returns the viewed value for the lifetime of the list.
    #[inline]
    pub fn get(&self) -> &'t T { self.value }
    #[inline]
    pub(crate) fn index(&self) -> usize { self.node }
}

impl<'t, T: 't,> Clone for View<'t, T,> {
    #[inline]
    fn clone(&self) -> Self { *self }
}

impl<'t, T: 't,> Copy for View<'t, T,> {}

impl<'t, T: 't,> Deref for View<'t, T,> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target { self.value }
}

impl<'t, T: 't,> AsRef<T> for View<'t, T,> {
    #[inline]
    fn as_ref(&self) -> &T { self.value }
}

impl<'t, T: 't,> Borrow<T> for View<'t, T,> {
    #[inline]
    fn borrow(&self) -> &T { self.value }
}

impl<'t, T: 't + PartialEq,> PartialEq for View<'t, T,> {
    #[inline]
    fn eq(&self, rhs: &Self) -> bool { T::eq(self, rhs,) }
}

impl<'i, 't, T: 't + PartialEq,> PartialEq<&'i T,> for View<'t, T,> {
    #[inline]
    fn eq(&self, rhs: &&T) -> bool { T::eq(self, rhs,) }
}

impl<'t, T: 't + Debug,> Debug for View<'t, T,> {
    fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
        fmt.debug_tuple("View").field(self.value).finish()
    }
}
