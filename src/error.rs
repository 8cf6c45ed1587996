//! The ways a retrieval can fail.

/// A type-erased failure raised by a generation routine.
///
/// Fallible routines (see [`Stream::try_new`][`crate::Stream::try_new`])
/// may fail with any error type; it reaches the consumer boxed, unmodified.
pub
type ProducerError = ::std::boxed::Box<
    dyn ::std::error::Error + Send + Sync + 'static,
>;

/// Errors reported by the retrieval surface of a
/// [`Stream`][`crate::Stream`].
#[derive(Debug, ::thiserror::Error)]
pub
enum Error {
    /// The generation routine has finished and no items remain.
    ///
    /// Iteration (see [`Stream::items`][`crate::Stream::items`]) treats this
    /// as normal termination; every other caller sees it as a failed
    /// retrieval. It is permanent: once reported, the only items a stream
    /// can still deliver are pushed-back ones.
    #[error("end of stream")]
    EndOfStream,

    /// There is no retained item eligible for push-back.
    ///
    /// Reported by [`Stream::unget`][`crate::Stream::unget`] when nothing
    /// has been retrieved yet, when a previous `unget` already consumed the
    /// retained item, or when the preceding operation was a
    /// [`peek`][`crate::Stream::peek`]. Only one item can be returned to the
    /// stream at a time.
    #[error("more than one item returned to the stream without an intervening retrieval")]
    MultipleUnget,

    /// The generation routine failed.
    ///
    /// The error surfaces from the `get` or `peek` which resumed the
    /// routine; the routine is permanently finished afterwards.
    #[error(transparent)]
    Producer(ProducerError),
}
