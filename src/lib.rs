mod queue;
mod ring;

pub mod error;

pub use error::QueueError;
pub use queue::Queue;
pub use ring::RingQueue;

/// Creates a bounded queue behind the [`Queue`] interface.
///
/// Callers that only need the queue operations can hold the returned box and
/// stay independent of the circular buffer behind it.
pub fn new<T>(capacity: usize) -> Box<dyn Queue<T>>
where
    T: 'static,
{
    Box::new(RingQueue::new(capacity))
}
