//! A FIFO container which pushes at the head of its list and pops at the tail.

use crate::{BoundedList, Error, Result,};
use tracing::debug;

/// A bounded first-in-first-out queue.
#[derive(Clone, Debug,)]
pub struct Queue<T,> {
    list: BoundedList<T,>,
}

bounded_container!(Queue);

impl<T,> Queue<T,> {
    /// Pushes a value into the back of the [`Queue`].
    ///
    /// # Params
    ///
    /// value --- The value to push on.
    ///
    /// # Errors
    ///
    /// * [`Error::CapacityExceeded`] if the [`Queue`] is full; the [`Queue`] is unchanged.
    pub fn push(&mut self, value: T,) -> Result<()> {
        self.list.ensure_room()?;
        self.list.link_front(value,);

        Ok(())
    }
    /// Pops the oldest value out of the [`Queue`].
    ///
    /// # Errors
    ///
    /// * [`Error::Empty`] if the [`Queue`] is empty.
    pub fn pop(&mut self,) -> Result<T> {
        self.list.unlink_back().ok_or_else(|| {
            debug!("pop on an empty queue");
            Error::Empty
        })
    }
    /// Returns the oldest value in the [`Queue`] without removing it.
    ///
    /// # Errors
    ///
    /// * [`Error::Empty`] if the [`Queue`] is empty.
    pub fn peek(&self,) -> Result<&T> {
        self.list.back().ok_or_else(|| {
            debug!("peek on an empty queue");
            Error::Empty
        })
    }
    /// Releases every value, oldest first.
    #[inline]
    pub fn clear(&mut self,) { self.list.clear() }
}
