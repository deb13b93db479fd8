//! A general list which inserts at either end and removes by value.

use crate::{BoundedList, Result,};

/// A bounded list supporting insertion at both ends.
#[derive(Clone, Debug,)]
pub struct DoublyEndedList<T,> {
    list: BoundedList<T,>,
}

bounded_container!(DoublyEndedList);

impl<T,> DoublyEndedList<T,> {
    /// Appends a value after the current tail.
    ///
    /// # Params
    ///
    /// value --- The value to push on.
    ///
    /// # Errors
    ///
    /// * [`Error::CapacityExceeded`](crate::Error::CapacityExceeded) if the list is full.
    pub fn add_end(&mut self, value: T,) -> Result<()> {
        self.list.ensure_room()?;
        self.list.link_back(value,);

        Ok(())
    }
    /// Prepends a value before the current head.
    ///
    /// # Params
    ///
    /// value --- The value to push on.
    ///
    /// # Errors
    ///
    /// * [`Error::CapacityExceeded`](crate::Error::CapacityExceeded) if the list is full.
    pub fn add_start(&mut self, value: T,) -> Result<()> {
        self.list.ensure_room()?;
        self.list.link_front(value,);

        Ok(())
    }
    /// Returns the first value.
    #[inline]
    pub fn front(&self,) -> Option<&T> { self.list.front() }
    /// Returns the last value.
    #[inline]
    pub fn back(&self,) -> Option<&T> { self.list.back() }
}

impl<T: PartialEq,> DoublyEndedList<T,> {
    /// Removes the first value (head to tail) equal to `value` and returns it.
    ///
    /// # Params
    ///
    /// value --- The value to search for.
    pub fn remove(&mut self, value: &T,) -> Option<T> {
        let node = self.list.position_node(|x| x == value,)?;

        self.list.unlink(node,)
    }
    /// Returns `true` if `value` is found in the list.
    ///
    /// # Params
    ///
    /// value --- The value to search for.
    pub fn contains(&self, value: &T,) -> bool {
        self.iter().any(|x| x == value)
    }
}
