use crate::error::QueueError;

/// A bounded first-in, first-out queue.
///
/// Every operation returns immediately: a full queue rejects `add` with
/// [`QueueError::QueueFull`] and an empty one rejects `pop` with
/// [`QueueError::QueueEmpty`], in both cases without touching its contents.
/// Implementations carry no internal synchronization.
pub trait Queue<T> {
    /// Appends `value` behind the most recently added element.
    fn add(&mut self, value: T) -> Result<(), QueueError<T>>;

    /// Removes and returns the oldest element.
    fn pop(&mut self) -> Result<T, QueueError<T>>;

    /// Maximum number of elements the queue can hold. Never changes.
    fn cap(&self) -> usize;

    /// Number of elements currently held.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.len() == self.cap()
    }
}
