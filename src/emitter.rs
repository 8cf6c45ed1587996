//! The producer side of the handoff: the handle a generation routine uses
//! to hand items to its consumer, one at a time.

use_prelude!();

/// The handle given to a generation routine, through which it emits items.
///
/// An `Emitter` is the only way generation logic may interact with its
/// [`Stream`][`crate::Stream`]: it is handed to the routine at
/// [construction][`crate::Stream::new`], cannot be cloned, and shares the
/// single-item handoff slot with the consumer side.
///
/// # Example
///
/// ```rust
/// use ::pushback::{Emitter, Stream};
///
/// async fn countdown (emitter: Emitter<u32>, mut remaining: u32)
/// {
///     while let Some(next) = remaining.checked_sub(1) {
///         emitter.emit(remaining).await;
///         remaining = next;
///     }
/// }
///
/// let mut stream = Stream::new(|emitter| countdown(emitter, 3));
/// assert_eq!(stream.get().unwrap(), 3);
/// assert_eq!(stream.get().unwrap(), 2);
/// assert_eq!(stream.get().unwrap(), 1);
/// ```
pub
struct Emitter<T> {
    slot: Rc<CellOption<T>>,
}

impl<T> Emitter<T> {
    pub(in crate)
    fn new (slot: Rc<CellOption<T>>)
      -> Self
    {
        Self { slot }
    }

    /// Hands one item to the consumer and suspends the generation routine
    /// until the next item is requested.
    ///
    /// The returned future is the suspension point: on its first poll it
    /// moves `value` into the handoff slot and stays pending; it completes
    /// once the consumer has drained the slot and pulls again. Not awaiting
    /// it hands off nothing.
    ///
    /// `emit` must not be awaited concurrently with itself (single
    /// generation routine, not re-entrant).
    pub
    fn emit (self: &'_ Self, value: T)
      -> Emit<'_, T>
    {
        Emit {
            slot: &self.slot,
            value: Some(value),
        }
    }
}

::pin_project_lite::pin_project! {
    /// The suspension point of a generation routine.
    ///
    /// Created by [`Emitter::emit`]; resolves once the emitted item has
    /// been delivered and the consumer requests another.
    #[must_use = "an item is only handed off once the `emit` future is awaited"]
    pub
    struct Emit<'emitter, T> {
        slot: &'emitter CellOption<T>,
        value: Option<T>,
    }
}

impl<T> Future for Emit<'_, T> {
    type Output = ();

    fn poll (self: Pin<&'_ mut Self>, _: &'_ mut Context<'_>)
      -> Poll<()>
    {
        let this = self.project();
        if let Some(value) = this.value.take() {
            let prev = this.slot.set(value);
            debug_assert!(prev.is_none(), "handoff slot was not empty");
            //  1. First poll: the slot has just been filled, which triggers
            //     the pending suspension so that the consumer side
            //     (`Stream::resume`) gets to extract the value out of it.
            Poll::Pending
        } else if this.slot.is_some() {
            //  2. Resumed before the slot was drained. Keep waiting.
            Poll::Pending
        } else {
            //  3. The slot is empty again: the generation routine may
            //     resume its execution, to fill it again or to complete.
            Poll::Ready(())
        }
    }
}
