//! Stream semantics for anything eagerly traversable.

use_prelude!();

use ::tracing::trace;

use crate::stream::Stream;

/// Grants the retrieval surface of a [`Stream`] to any collaborator whose
/// items can be traversed eagerly, that is, to any [`IntoIterator`].
///
/// This is the lazy counterpart of plain iteration: the traversal is not
/// driven until items are actually requested, and it never runs further
/// than the item satisfying the current retrieval.
///
/// # Example
///
/// ```rust
/// use ::pushback::prelude::*;
///
/// let mut stream = vec![1, 2].streamed();
///
/// assert_eq!(stream.get().unwrap(), 1);
/// stream.unget().unwrap();
/// assert_eq!(stream.get().unwrap(), 1);
/// assert_eq!(stream.get().unwrap(), 2);
/// ```
pub
trait Streamable : IntoIterator + Sized {
    /// Wraps this collaborator's traversal in a [`Streamed`] adapter.
    fn streamed<'gen> (self: Self)
      -> Streamed<'gen, Self>
    where
        Self : 'gen,
        Self::IntoIter : 'gen,
        Self::Item : 'gen,
    {
        Streamed::new(self)
    }
}

impl<I : IntoIterator> Streamable for I {}

/// A collaborator wrapped with stream semantics.
///
/// Owns the collaborator and, lazily initialized on first use then reused
/// for the lifetime of the adapter, the [`Stream`] driving its traversal.
/// The retrieval surface ([`get`][`Self::get`], [`peek`][`Self::peek`],
/// [`unget`][`Self::unget`], ...) is delegated to that stream; it performs
/// no buffering of its own.
pub
struct Streamed<'gen, I : IntoIterator> {
    /// The collaborator, until its traversal is claimed by the stream.
    source: Option<I>,

    /// Created on first use, reused thereafter.
    stream: Option<Stream<'gen, I::Item>>,
}

impl<'gen, I> Streamed<'gen, I>
where
    I : IntoIterator + 'gen,
    I::IntoIter : 'gen,
    I::Item : 'gen,
{
    /// Wraps `source` without driving its traversal.
    pub
    fn new (source: I)
      -> Self
    {
        Self {
            source: Some(source),
            stream: None,
        }
    }

    /// The [`Stream`] lazily wrapped around the collaborator's traversal.
    ///
    /// The first call constructs it, with the generation routine "traverse
    /// the source, emitting each item"; every later call returns the
    /// same instance, wherever its read position has advanced to.
    pub
    fn stream (self: &'_ mut Self)
      -> &'_ mut Stream<'gen, I::Item>
    {
        let source = &mut self.source;
        self.stream.get_or_insert_with(|| {
            trace!("wrapping traversal in a stream");
            let source = source.take();
            Stream::new(move |emitter| async move {
                if let Some(source) = source {
                    for item in source {
                        emitter.emit(item).await;
                    }
                }
            })
        })
    }

    /// Retrieves the next item of the traversal. See [`Stream::get`].
    ///
    /// # Errors
    ///
    /// Same as [`Stream::get`].
    pub
    fn get (self: &'_ mut Self)
      -> Result<I::Item, Error>
    where
        I::Item : Clone,
    {
        self.stream().get()
    }

    /// Retrieves the next item, wrapped in a one-element array. See
    /// [`Stream::get_values`].
    ///
    /// # Errors
    ///
    /// Same as [`Stream::get`].
    pub
    fn get_values (self: &'_ mut Self)
      -> Result<[I::Item; 1], Error>
    where
        I::Item : Clone,
    {
        self.stream().get_values()
    }

    /// Looks at the next item without advancing. See [`Stream::peek`].
    ///
    /// # Errors
    ///
    /// Same as [`Stream::peek`].
    pub
    fn peek (self: &'_ mut Self)
      -> Result<I::Item, Error>
    where
        I::Item : Clone,
    {
        self.stream().peek()
    }

    /// Looks at the next item, wrapped in a one-element array. See
    /// [`Stream::peek_values`].
    ///
    /// # Errors
    ///
    /// Same as [`Stream::peek`].
    pub
    fn peek_values (self: &'_ mut Self)
      -> Result<[I::Item; 1], Error>
    where
        I::Item : Clone,
    {
        self.stream().peek_values()
    }

    /// Returns the most recently retrieved item to the front of the
    /// traversal. See [`Stream::unget`].
    ///
    /// # Errors
    ///
    /// Same as [`Stream::unget`].
    pub
    fn unget (self: &'_ mut Self)
      -> Result<(), Error>
    {
        self.stream().unget()
    }
}
