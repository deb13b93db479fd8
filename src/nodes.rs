
/// A node in a doubly linked list.
///
/// Links are indexes into the `nodes` vector of the owning
/// [`BoundedList`](crate::BoundedList) and never own their neighbours.
#[derive(Clone, Debug,)]
pub struct Node<T,> {
  /// The value inside this [`Node`], `None` once the [`Node`] is released.
  value: Option<T>,
  /// The index of the previous [`Node`].
  prev: Option<usize>,
  /// The index of the next [`Node`].
  next: Option<usize>,
}

impl<T,> Node<T,> {
  /// Create a new, populated [`Node`] with no neighbours.
  ///
  /// # Params
  ///
  /// value --- The value to populate the [`Node`] with.
  #[inline]
  pub fn new(value: T,) -> Self {
    Self { value: Some(value,), prev: None, next: None, }
  }
  /// Create a new [`Node`] linked back to `prev`.
  ///
  /// # Params
  ///
  /// prev --- The index of the previous [`Node`].
  /// value --- The value to populate the [`Node`] with.
  #[inline]
  pub fn with_prev(prev: usize, value: T,) -> Self {
    Self { value: Some(value,), prev: Some(prev,), next: None, }
  }
  /// Create a new [`Node`] linked forward to `next`.
  ///
  /// # Params
  ///
  /// value --- The value to populate the [`Node`] with.
  /// next --- The index of the next [`Node`].
  #[inline]
  pub fn with_next(value: T, next: usize,) -> Self {
    Self { value: Some(value,), prev: None, next: Some(next,), }
  }
  /// Create a new [`Node`] linked to both neighbours.
  ///
  /// # Params
  ///
  /// prev --- The index of the previous [`Node`].
  /// value --- The value to populate the [`Node`] with.
  /// next --- The index of the next [`Node`].
  #[inline]
  pub fn with_links(prev: usize, value: T, next: usize,) -> Self {
    Self { value: Some(value,), prev: Some(prev,), next: Some(next,), }
  }
  /// The index of the previous [`Node`].
  #[inline]
  pub fn prev(&self,) -> Option<usize> { self.prev }
  /// The index of the next [`Node`].
  #[inline]
  pub fn next(&self,) -> Option<usize> { self.next }
  #[inline]
  pub fn set_prev(&mut self, prev: Option<usize>,) { self.prev = prev }
  #[inline]
  pub fn set_next(&mut self, next: Option<usize>,) { self.next = next }
  /// The value held by this [`Node`], `None` if it has been released.
  #[inline]
  pub fn value(&self,) -> Option<&T> { self.value.as_ref() }
  /// Moves the value out of this [`Node`] and clears its links.
  pub fn release(&mut self,) -> Option<T> {
    self.prev = None;
    self.next = None;
    self.value.take()
  }
  /// Pushes this released [`Node`] onto the head of the free stack.
  #[inline]
  pub fn stack_push(&mut self, next: Option<usize>,) { self.next = next }
  /// Pops this released [`Node`] off the head of the free stack.
  #[inline]
  pub fn stack_pop(&mut self,) -> Option<usize> { self.next.take() }
}
