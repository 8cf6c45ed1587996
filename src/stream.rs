//! The consumer side: the pull interface over a suspended generation
//! routine.

use_prelude!();

use ::tracing::trace;

use crate::iter::Items;

type Producer<'gen> = Pin<::std::boxed::Box<
    dyn Future<Output = Result<(), ProducerError>> + 'gen
>>;

/// A pull-based, lazily-evaluated sequence with single-item push-back.
///
/// A `Stream` owns a _generation routine_, an `async` block given an
/// [`Emitter`] at construction, and drives it no further than the next
/// [`emit`][`Emitter::emit`] each time an item is requested. Between
/// retrievals the routine stays suspended inside its `emit`, so a routine
/// which loops forever is a valid, infinite stream.
///
/// On top of plain retrieval ([`get`][`Self::get`]), a `Stream` supports
/// looking at the next item without advancing ([`peek`][`Self::peek`]) and
/// returning the most recently retrieved item to the front of the sequence
/// ([`unget`][`Self::unget`]), exactly one item deep.
///
/// A `Stream` is a strictly single-consumer, single-threaded value: the
/// generation routine and its consumer alternate on one call stack, and the
/// type is deliberately not [`Send`].
///
/// # Example
///
/// ```rust
/// use ::pushback::Stream;
///
/// let mut naturals = Stream::new(|emitter| async move {
///     let mut n = 0_u64;
///     loop {
///         emitter.emit(n).await;
///         n += 1;
///     }
/// });
///
/// assert_eq!(naturals.get().unwrap(), 0);
/// assert_eq!(naturals.peek().unwrap(), 1);
/// assert_eq!(naturals.get().unwrap(), 1);
/// ```
pub
struct Stream<'gen, T> {
    /// `None` once the routine has run to completion or failed; never
    /// becomes `Some` again.
    pub(in crate)
    producer: Option<Producer<'gen>>,

    /// The one-slot handoff buffer, shared with the [`Emitter`].
    pub(in crate)
    slot: Rc<CellOption<T>>,

    /// Pushed-back items awaiting redelivery, front first. Holds at most
    /// one item under normal operation, two transiently when an `unget`
    /// lands ahead of a peeked item.
    pub(in crate)
    pending: VecDeque<T>,

    /// The most recently retrieved item, retained so it can be pushed back
    /// exactly once.
    pub(in crate)
    last_item: Option<T>,
}

impl<'gen, T> Stream<'gen, T> {
    /// Creates a new `Stream` whose items come from `generation`.
    ///
    /// The routine is given an [`Emitter`] and must hand items over through
    /// [`Emitter::emit`]. It is started lazily: no part of the routine's
    /// body runs until the first retrieval.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ::pushback::Stream;
    ///
    /// let mut stream = Stream::new(|emitter| async move {
    ///     emitter.emit("hello").await;
    ///     emitter.emit("world").await;
    /// });
    ///
    /// assert_eq!(stream.get().unwrap(), "hello");
    /// ```
    pub
    fn new<F> (generation: impl FnOnce(Emitter<T>) -> F)
      -> Self
    where
        F : Future<Output = ()> + 'gen,
    {
        Self::try_new(move |emitter| {
            let future = generation(emitter);
            async move {
                future.await;
                Ok::<_, ProducerError>(())
            }
        })
    }

    /// Creates a new `Stream` whose generation routine may fail.
    ///
    /// An `Err` returned by the routine surfaces unmodified (type-erased as
    /// [`ProducerError`]) from the [`get`][`Self::get`] or
    /// [`peek`][`Self::peek`] which resumed it, and permanently finishes the
    /// routine.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ::pushback::{Error, Stream};
    ///
    /// let mut stream = Stream::try_new(|emitter| async move {
    ///     emitter.emit(1).await;
    ///     Err(::std::io::Error::other("flaky source"))
    /// });
    ///
    /// assert_eq!(stream.get().unwrap(), 1);
    /// assert!(matches!(stream.get(), Err(Error::Producer(_))));
    /// assert!(matches!(stream.get(), Err(Error::EndOfStream)));
    /// ```
    pub
    fn try_new<F, E> (generation: impl FnOnce(Emitter<T>) -> F)
      -> Self
    where
        F : Future<Output = Result<(), E>> + 'gen,
        E : Into<ProducerError> + 'gen,
    {
        let slot = Rc::new(CellOption::None);
        let future = generation(Emitter::new(Rc::clone(&slot)));
        Self {
            producer: Some(::std::boxed::Box::pin(async move {
                future.await.map_err(Into::into)
            })),
            slot,
            pending: VecDeque::new(),
            last_item: None,
        }
    }

    /// Retrieves the next item from the stream, advancing it by one.
    ///
    /// A pushed-back item is redelivered first, without resuming the
    /// generation routine; otherwise the routine runs until its next emit.
    /// The returned item is retained (as a clone) so that it can be
    /// [`unget`][`Self::unget`] exactly once.
    ///
    /// # Errors
    ///
    ///   - [`Error::EndOfStream`] once the routine has finished and no items
    ///     remain,
    ///
    ///   - [`Error::Producer`] if the routine fails while being resumed.
    ///
    /// # Panics
    ///
    /// If the generation routine suspends on anything other than an
    /// [`emit`][`Emitter::emit`].
    pub
    fn get (self: &'_ mut Self)
      -> Result<T, Error>
    where
        T : Clone,
    {
        let item = self.pull()?;
        self.last_item = Some(item.clone());
        Ok(item)
    }

    /// Retrieves the next item, wrapped in a one-element array.
    ///
    /// Interoperability shim for array-returning iteration idioms; a nested
    /// container emitted as an item is wrapped as-is, never flattened.
    ///
    /// # Errors
    ///
    /// Same as [`get`][`Self::get`].
    pub
    fn get_values (self: &'_ mut Self)
      -> Result<[T; 1], Error>
    where
        T : Clone,
    {
        Ok([self.get()?])
    }

    /// Looks at the next item without advancing the stream.
    ///
    /// Implemented as a retrieval immediately followed by a push-back, with
    /// the retained last item saved across the pair: repeated `peek`s keep
    /// returning the same item, and a `peek` never counts as the "last
    /// retrieval" eligible for [`unget`][`Self::unget`] by the caller.
    ///
    /// # Errors
    ///
    /// Same as [`get`][`Self::get`]. A failed `peek` leaves the push-back
    /// state untouched.
    ///
    /// # Panics
    ///
    /// Same as [`get`][`Self::get`].
    pub
    fn peek (self: &'_ mut Self)
      -> Result<T, Error>
    where
        T : Clone,
    {
        let current = self.last_item.take();
        let peeked = self.get().and_then(|item| {
            self.unget()?;
            Ok(item)
        });
        self.last_item = current;
        peeked
    }

    /// Looks at the next item, wrapped in a one-element array.
    ///
    /// # Errors
    ///
    /// Same as [`peek`][`Self::peek`].
    pub
    fn peek_values (self: &'_ mut Self)
      -> Result<[T; 1], Error>
    where
        T : Clone,
    {
        Ok([self.peek()?])
    }

    /// Returns the most recently retrieved item to the front of the stream,
    /// so that the next [`get`][`Self::get`] or [`peek`][`Self::peek`]
    /// delivers it again, ahead of anything else, produced or peeked.
    ///
    /// Only one item can be returned at a time: the retained item is
    /// consumed by the push-back, and only a later successful retrieval
    /// makes another one eligible.
    ///
    /// # Errors
    ///
    /// [`Error::MultipleUnget`] if there is no retained item: nothing has
    /// been retrieved yet, a previous `unget` already consumed it, or the
    /// preceding operation was a `peek`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ::pushback::{Error, Stream};
    ///
    /// let mut stream = Stream::new(|emitter| async move {
    ///     emitter.emit(1).await;
    ///     emitter.emit(2).await;
    /// });
    ///
    /// assert_eq!(stream.get()?, 1);
    /// stream.unget()?;
    /// assert!(matches!(stream.unget(), Err(Error::MultipleUnget)));
    /// assert_eq!(stream.get()?, 1);
    /// # Ok::<(), ::pushback::Error>(())
    /// ```
    pub
    fn unget (self: &'_ mut Self)
      -> Result<(), Error>
    {
        match self.last_item.take() {
            | Some(item) => {
                self.pending.push_front(item);
                Ok(())
            },
            | None => Err(Error::MultipleUnget),
        }
    }

    /// Iterates over all remaining items, lazily.
    ///
    /// The iterator yields `Result`s: end of stream terminates it normally
    /// (it is not an iteration error), while a generation failure is yielded
    /// once, after which the iterator terminates too. Dropping it and
    /// calling `items` again resumes from the current position: a stream is
    /// forward-only, there is no rewinding beyond the one-item push-back.
    ///
    /// Also available as `IntoIterator` on `&mut Stream`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ::pushback::Stream;
    ///
    /// let mut stream = Stream::new(|emitter| async move {
    ///     for word in ["zero", "one", "two"] {
    ///         emitter.emit(word).await;
    ///     }
    /// });
    ///
    /// let words = stream.items().collect::<Result<Vec<_>, _>>().unwrap();
    /// assert_eq!(words, ["zero", "one", "two"]);
    /// ```
    pub
    fn items (self: &'_ mut Self)
      -> Items<'_, 'gen, T>
    {
        Items(self)
    }

    /// Delivers the next item: a pushed-back one if any, else whatever the
    /// generation routine emits next.
    fn pull (self: &'_ mut Self)
      -> Result<T, Error>
    {
        if let Some(item) = self.pending.pop_front() {
            return Ok(item);
        }
        self.resume()
    }

    /// Resumes the generation routine until it hands off one item or runs
    /// to completion. Must not be called while `pending` holds items.
    fn resume (self: &'_ mut Self)
      -> Result<T, Error>
    {
        let producer = match self.producer.as_mut() {
            | Some(producer) => producer,
            // A finished producer is never resumed again.
            | None => return Err(Error::EndOfStream),
        };
        create_context!(cx);
        match producer.as_mut().poll(&mut cx) {
            | Poll::Pending => {
                match self.slot.take() {
                    | Some(item) => Ok(item),
                    | None => panic!(
                        "generation routine suspended without emitting an item \
                         (`Emitter::emit` is the only await point a generation \
                         routine may suspend on)",
                    ),
                }
            },
            | Poll::Ready(outcome) => {
                self.producer = None;
                match outcome {
                    | Ok(()) => {
                        trace!("generation routine finished");
                        Err(Error::EndOfStream)
                    },
                    | Err(source) => {
                        trace!(%source, "generation routine failed");
                        Err(Error::Producer(source))
                    },
                }
            },
        }
    }
}
