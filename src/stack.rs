//! A LIFO container which pushes and pops at the head of its list.

use crate::{BoundedList, Error, Result,};
use tracing::debug;

/// A bounded last-in-first-out stack.
#[derive(Clone, Debug,)]
pub struct Stack<T,> {
    list: BoundedList<T,>,
}

bounded_container!(Stack);

impl<T,> Stack<T,> {
    /// Pushes a value onto the top of the [`Stack`].
    ///
    /// # Params
    ///
    /// value --- The value to push on.
    ///
    /// # Errors
    ///
    /// * [`Error::CapacityExceeded`] if the [`Stack`] is full; the [`Stack`] is unchanged.
    pub fn push(&mut self, value: T,) -> Result<()> {
        self.list.ensure_room()?;
        self.list.link_front(value,);

        Ok(())
    }
    /// Pops the value off the top of the [`Stack`].
    ///
    /// # Errors
    ///
    /// * [`Error::Empty`] if the [`Stack`] is empty.
    pub fn pop(&mut self,) -> Result<T> {
        self.list.unlink_front().ok_or_else(|| {
            debug!("pop on an empty stack");
            Error::Empty
        })
    }
    /// Returns the value on the top of the [`Stack`] without removing it.
    ///
    /// # Errors
    ///
    /// * [`Error::Empty`] if the [`Stack`] is empty.
    pub fn peek(&self,) -> Result<&T> {
        self.list.front().ok_or_else(|| {
            debug!("peek on an empty stack");
            Error::Empty
        })
    }
}
