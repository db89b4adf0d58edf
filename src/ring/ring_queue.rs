use std::{
    fmt::{self, Debug},
    mem::MaybeUninit,
};

use crate::{error::QueueError, queue::Queue};

use super::cursors::RingCursors;

/// Bounded FIFO queue over a fixed ring of `capacity + 1` slots.
///
/// The slot under the back cursor is never occupied, which keeps a full ring
/// distinguishable from an empty one without a separate count. Storage is
/// allocated once in [`RingQueue::new`] and never grows.
///
/// ```
/// use ringy::{QueueError, RingQueue};
///
/// let mut queue = RingQueue::new(2);
/// queue.add("a").unwrap();
/// queue.add("b").unwrap();
/// assert_eq!(queue.add("c"), Err(QueueError::QueueFull("c")));
///
/// assert_eq!(queue.pop(), Ok("a"));
/// assert_eq!(queue.pop(), Ok("b"));
/// assert_eq!(queue.pop(), Err(QueueError::QueueEmpty));
/// ```
pub struct RingQueue<T> {
    cursors: RingCursors,
    slots: Box<[MaybeUninit<T>]>,
}

impl<T> RingQueue<T> {
    /// Creates a queue holding at most `capacity` elements.
    ///
    /// A capacity of 0 is accepted and yields a queue that rejects every add.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is `usize::MAX`, as the reserved slot would
    /// overflow the slot count.
    pub fn new(capacity: usize) -> Self {
        let num_slots = capacity.checked_add(1).expect("capacity overflow");

        let slots = (0..num_slots)
            .map(|_| MaybeUninit::uninit())
            .collect::<Box<[_]>>();

        Self {
            cursors: RingCursors::default(),
            slots,
        }
    }

    #[inline]
    fn num_slots(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn cap(&self) -> usize {
        self.num_slots() - 1
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cursors.len(self.num_slots())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cursors.is_full(self.num_slots())
    }

    #[inline]
    fn set_element(&mut self, index: usize, elem: T) {
        self.slots[index].write(elem);
    }

    #[inline]
    fn take_element(&mut self, index: usize) -> T {
        // slot lies in the occupied region; it keeps a stale bitwise copy once vacated
        unsafe { self.slots[index].assume_init_read() }
    }

    pub fn add(&mut self, elem: T) -> Result<(), QueueError<T>> {
        if self.is_full() {
            return Err(QueueError::QueueFull(elem));
        }

        let index = self.cursors.back();
        self.set_element(index, elem);
        self.cursors.back_forward(self.num_slots());

        Ok(())
    }

    pub fn pop(&mut self) -> Result<T, QueueError<T>> {
        if self.is_empty() {
            return Err(QueueError::QueueEmpty);
        }

        let index = self.cursors.front();
        self.cursors.front_forward(self.num_slots());

        Ok(self.take_element(index))
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.cursors
            .occupied(self.num_slots())
            // every yielded slot lies in the occupied region
            .map(move |index| unsafe { self.slots[index].assume_init_ref() })
    }
}

impl<T> Queue<T> for RingQueue<T> {
    #[inline]
    fn add(&mut self, value: T) -> Result<(), QueueError<T>> {
        RingQueue::add(self, value)
    }

    #[inline]
    fn pop(&mut self) -> Result<T, QueueError<T>> {
        RingQueue::pop(self)
    }

    #[inline]
    fn cap(&self) -> usize {
        RingQueue::cap(self)
    }

    #[inline]
    fn len(&self) -> usize {
        RingQueue::len(self)
    }
}

impl<T> Debug for RingQueue<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingQueue")
            .field("cap", &self.cap())
            .field("len", &self.len())
            .field("elements", &DebugElements(self))
            .finish()
    }
}

struct DebugElements<'a, T>(&'a RingQueue<T>);

impl<T> Debug for DebugElements<'_, T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T> Drop for RingQueue<T> {
    fn drop(&mut self) {
        for index in self.cursors.occupied(self.num_slots()) {
            // slot lies in the occupied region and is dropped once
            unsafe { self.slots[index].assume_init_drop() };
        }
    }
}
