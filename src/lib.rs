//! [`bounded-vec-list`] is an implementation of a bounded Doubly-Linked-List using an
//! underlying [`Vec`] to store the nodes, together with the containers built on it:
//! a [`Stack`], a [`Queue`], a [`DoublyEndedList`] and a decimal [`BigInteger`]
//! which keeps one digit per node.
//!
//! Nodes link to each other by their index in the node [`Vec`], so every node is owned
//! by exactly one list and released nodes are recycled rather than freed.

use std::fmt::{self, Debug,};

use tracing::{debug, trace,};

/// Generates the shared read-only surface of a container wrapping a `list` field.
macro_rules! bounded_container {
    ($name:ident) => {
        impl<T,> $name<T,> {
            /// Returns a new empty container bounded by [`DEFAULT_MAX_LEN`](crate::DEFAULT_MAX_LEN).
            #[inline]
            pub fn new() -> Self {
                Self { list: $crate::BoundedList::new(), }
            }
            /// Returns a new empty container which holds at most `max_len` values.
            ///
            /// # Params
            ///
            /// max_len --- The maximum number of values.
            #[inline]
            pub fn with_max_len(max_len: usize,) -> Self {
                Self { list: $crate::BoundedList::with_max_len(max_len,), }
            }
            /// Returns the number of values in the container.
            #[inline]
            pub fn len(&self,) -> usize { self.list.len() }
            /// `true` if the container holds no values.
            #[inline]
            pub fn is_empty(&self,) -> bool { self.list.is_empty() }
            /// `true` if the container holds its maximum number of values.
            #[inline]
            pub fn is_full(&self,) -> bool { self.list.is_full() }
            /// Returns the maximum number of values the container can hold.
            #[inline]
            pub fn max_len(&self,) -> usize { self.list.max_len() }
            /// Returns an iterator over the values from head to tail.
            #[inline]
            pub fn iter(&self,) -> $crate::Iter<'_, T,> { self.list.iter() }
        }

        impl<T,> Default for $name<T,> {
            #[inline]
            fn default() -> Self { Self::new() }
        }
    };
}

mod nodes;
mod iters;
mod views;
mod error;
mod stack;
mod queue;
mod deque;
mod integer;
mod tests;

use self::nodes::*;
pub use self::iters::Iter;
pub use self::views::View;
pub use self::error::{Error, Result,};
pub use self::stack::Stack;
pub use self::queue::Queue;
pub use self::deque::DoublyEndedList;
pub use self::integer::BigInteger;

/// The maximum length of a container built without an explicit bound.
pub const DEFAULT_MAX_LEN: usize = usize::MAX;

/// A doubly-linked-list backed by a `Vec` which holds at most `max_len` values.
///
/// The list itself applies no insertion policy; the containers built on it decide
/// where values go and check the bound before linking a new [`Node`].
#[derive(Clone,)]
pub struct BoundedList<T,> {
    /// The [`Node`]s of the [`BoundedList`], live and released.
    nodes: Vec<Node<T,>,>,
    /// The number of live [`Node`]s in the [`BoundedList`].
    len: usize,
    /// The maximum number of live [`Node`]s.
    max_len: usize,
    /// The head and tail indexes of the linked list in `nodes`.
    ends: Option<(usize, usize,)>,
    /// A stack of released [`Node`]s waiting to be reused.
    empty: Option<usize,>,
}

impl<T,> BoundedList<T,> {
    /// Disconnect the passed [`Node`] and relink its neighbours to each other.
    ///
    /// # Params
    ///
    /// node --- The index of the [`Node`] to disconnect.
    fn disconnect(&mut self, node: usize,) {
        let next = self.nodes[node].next();
        let prev = self.nodes[node].prev();

        if let Some(next) = next { self.nodes[next].set_prev(prev,) }
        if let Some(prev) = prev { self.nodes[prev].set_next(next,) }
        self.nodes[node].set_prev(None,);
        self.nodes[node].set_next(None,);
    }
    /// Stores a new [`Node`] and returns its index.
    ///
    /// A released [`Node`] is reused before the `Vec` grows.
    ///
    /// # Params
    ///
    /// node --- The populated [`Node`] to store.
    fn new_node(&mut self, node: Node<T,>,) -> usize {
        self.len += 1;

        match self.empty {
            Some(new) => {
                //Pop the released `Node` off the empty stack.
                self.empty = self.nodes[new].stack_pop();
                debug_assert!(self.nodes[new].value().is_none(), "reused a live `Node`: {:?}", new,);
                self.nodes[new] = node;
                trace!(node = new, len = self.len, "reused node");

                new
            },
            None => {
                let new = self.nodes.len();

                self.nodes.push(node,);
                trace!(node = new, len = self.len, "allocated node");

                new
            },
        }
    }
    /// Links a new [`Node`] holding `value` between `prev` and `next` and returns its index.
    ///
    /// The caller is responsible for updating `ends`.
    ///
    /// # Params
    ///
    /// prev --- The index of the [`Node`] before the new one.
    /// value --- The value to populate the [`Node`] with.
    /// next --- The index of the [`Node`] after the new one.
    fn link_between(&mut self, prev: Option<usize,>, value: T, next: Option<usize,>,) -> usize {
        let node = match (prev, next,) {
            (None, None,) => Node::new(value,),
            (Some(prev,), None,) => Node::with_prev(prev, value,),
            (None, Some(next,),) => Node::with_next(value, next,),
            (Some(prev,), Some(next,),) => Node::with_links(prev, value, next,),
        };
        let new = self.new_node(node,);

        if let Some(prev) = prev { self.nodes[prev].set_next(Some(new,),) }
        if let Some(next) = next { self.nodes[next].set_prev(Some(new,),) }

        new
    }
    /// Unlinks the passed [`Node`], places it on the `empty` stack and returns its value.
    ///
    /// The caller is responsible for updating `ends`.
    ///
    /// # Params
    ///
    /// node --- The index of the [`Node`] to remove.
    fn remove_node(&mut self, node: usize,) -> Option<T,> {
        self.disconnect(node,);

        let value = self.nodes[node].release()?;

        self.len -= 1;
        self.nodes[node].stack_push(self.empty,);
        self.empty = Some(node,);
        trace!(node, len = self.len, "released node");

        Some(value,)
    }
}

impl<T,> BoundedList<T,> {
    /// Returns a new empty [`BoundedList`] bounded by [`DEFAULT_MAX_LEN`].
    #[inline]
    pub const fn new() -> Self {
        Self::with_max_len(DEFAULT_MAX_LEN,)
    }
    /// Returns a new empty [`BoundedList`] which holds at most `max_len` values.
    ///
    /// # Params
    ///
    /// max_len --- The maximum number of values.
    #[inline]
    pub const fn with_max_len(max_len: usize,) -> Self {
        Self { nodes: Vec::new(), len: 0, max_len, ends: None, empty: None, }
    }
    /// Returns the number of values in this [`BoundedList`].
    #[inline]
    pub const fn len(&self) -> usize { self.len }
    /// `true` if this [`BoundedList`] is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool { self.len() == 0 }
    /// `true` if this [`BoundedList`] holds `max_len` values.
    #[inline]
    pub const fn is_full(&self) -> bool { self.len() == self.max_len() }
    /// Returns the maximum number of values in this [`BoundedList`].
    #[inline]
    pub const fn max_len(&self) -> usize { self.max_len }
    /// Returns the first value.
    #[inline]
    pub fn front(&self) -> Option<&T,> {
        self.ends.and_then(|(head, _,)| self.nodes[head].value())
    }
    /// Returns the last value.
    #[inline]
    pub fn back(&self) -> Option<&T,> {
        self.ends.and_then(|(_, tail,)| self.nodes[tail].value())
    }
    /// Returns an iterator over all values from head to tail.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T,> {
        iters::new_iter(self, self.ends,)
    }
    /// Returns a [`View`] of the head value.
    #[inline]
    pub fn front_view(&self) -> Option<View<'_, T,>,> {
        self.ends.and_then(|(head, _,)| views::new_view(self, head,))
    }
    /// Returns a [`View`] of the tail value.
    #[inline]
    pub fn back_view(&self) -> Option<View<'_, T,>,> {
        self.ends.and_then(|(_, tail,)| views::new_view(self, tail,))
    }
    /// Releases every value, walking from the tail to the head.
    pub fn clear(&mut self) {
        while self.unlink_back().is_some() {}

        self.nodes.clear();
        self.empty = None;
    }
}

impl<T,> BoundedList<T,> {
    /// Returns the [`Node`] at `index` in the node `Vec`.
    #[inline]
    pub(crate) fn node(&self, index: usize,) -> &Node<T,> { &self.nodes[index] }
    /// Fails with [`Error::CapacityExceeded`] if another value would exceed `max_len`.
    pub(crate) fn ensure_room(&self) -> Result<()> {
        if self.len() < self.max_len() { return Ok(()) }

        debug!(max_len = self.max_len(), "capacity exceeded");
        Err(Error::CapacityExceeded { max_len: self.max_len(), })
    }
    /// Links a new head [`Node`] holding `value` and returns its index.
    ///
    /// # Params
    ///
    /// value --- The value to push on.
    pub(crate) fn link_front(&mut self, value: T,) -> usize {
        let head = self.ends.map(|(head, _,)| head);
        let new = self.link_between(None, value, head,);

        self.ends = Some(match self.ends {
            None => (new, new,),
            Some((_, tail,)) => (new, tail,),
        },);

        new
    }
    /// Links a new tail [`Node`] holding `value` and returns its index.
    ///
    /// # Params
    ///
    /// value --- The value to push on.
    pub(crate) fn link_back(&mut self, value: T,) -> usize {
        let tail = self.ends.map(|(_, tail,)| tail);
        let new = self.link_between(tail, value, None,);

        self.ends = Some(match self.ends {
            None => (new, new,),
            Some((head, _,)) => (head, new,),
        },);

        new
    }
    /// Unlinks the head [`Node`] and returns its value.
    pub(crate) fn unlink_front(&mut self) -> Option<T,> {
        let (head, tail,) = self.ends?;

        self.ends = if head == tail { None }
            else { self.nodes[head].next().map(|next| (next, tail,)) };
        self.remove_node(head,)
    }
    /// Unlinks the tail [`Node`] and returns its value.
    pub(crate) fn unlink_back(&mut self) -> Option<T,> {
        let (head, tail,) = self.ends?;

        self.ends = if head == tail { None }
            else { self.nodes[tail].prev().map(|prev| (head, prev,)) };
        self.remove_node(tail,)
    }
    /// Unlinks an arbitrary live [`Node`] and returns its value.
    ///
    /// # Params
    ///
    /// node --- The index of the [`Node`] to unlink.
    pub(crate) fn unlink(&mut self, node: usize,) -> Option<T,> {
        let (head, tail,) = self.ends?;

        match (node == head, node == tail,) {
            (true, true,) => self.ends = None,
            (true, false,) => self.ends = self.nodes[node].next().map(|next| (next, tail,)),
            (false, true,) => self.ends = self.nodes[node].prev().map(|prev| (head, prev,)),
            _ => (),
        }

        self.remove_node(node,)
    }
    /// Returns the index of the first [`Node`] (head to tail) whose value passes `pred`.
    ///
    /// # Params
    ///
    /// pred --- The test a value must pass.
    pub(crate) fn position_node(&self, mut pred: impl FnMut(&T) -> bool,) -> Option<usize,> {
        let mut at = self.front_view()?;

        loop {
            if pred(at.get()) { return Some(at.index()) }
            at = at.next()?;
        }
    }
}

impl<T,> Default for BoundedList<T,> {
    #[inline]
    fn default() -> Self { Self::new() }
}

impl<'t, T,> IntoIterator for &'t BoundedList<T,> {
    type Item = &'t T;
    type IntoIter = Iter<'t, T,>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<T: PartialEq,> PartialEq for BoundedList<T,> {
    fn eq(&self, rhs: &Self) -> bool {
        self.len() == rhs.len()
        && self.iter().zip(rhs.iter()).all(|(lhs, rhs,)| lhs == rhs)
    }
}

impl<T: Eq,> Eq for BoundedList<T,> {}

impl<T: Debug,> Debug for BoundedList<T,> {
    fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
        fmt.debug_list().entries(self.iter()).finish()
    }
}
