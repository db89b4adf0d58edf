use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum QueueError<T> {
    /// The rejected value is handed back so a failed add never drops it.
    #[error("queue is full and cannot be added to")]
    QueueFull(T),

    #[error("queue is empty and no element can be popped")]
    QueueEmpty,
}

impl<T> QueueError<T> {
    pub fn into_inner(self) -> Option<T> {
        match self {
            QueueError::QueueFull(elem) => Some(elem),
            QueueError::QueueEmpty => None,
        }
    }
}
