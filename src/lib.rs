//! Pull-based lazy streams with single-item push-back.
//!
//! A [`Stream`] is like an iterator, except that it lets you look at
//! ([`peek`][`Stream::peek`]) or return ([`unget`][`Stream::unget`]) exactly
//! one item to the front of the sequence, and that its items come from a
//! _generation routine_: an `async` block which is suspended at each
//! [`emit`][`Emitter::emit`] and resumed only when the consumer pulls.
//!
//! The generation routine is lazy: it performs no work until the first
//! retrieval, and never runs further than the emit satisfying the current
//! retrieval. An infinite generation loop is therefore a perfectly valid
//! stream.
//!
//! # Example
//!
//! ```rust
//! use ::pushback::{Error, Stream};
//!
//! let mut stream = Stream::new(|emitter| async move {
//!     emitter.emit(1).await;
//!     emitter.emit(2).await;
//! });
//!
//! assert_eq!(stream.get()?, 1);
//! stream.unget()?;
//! assert_eq!(stream.get()?, 1);
//! assert_eq!(stream.peek()?, 2);
//! assert_eq!(stream.get()?, 2);
//! assert!(matches!(stream.get(), Err(Error::EndOfStream)));
//! # Ok::<(), ::pushback::Error>(())
//! ```
//!
//! Anything eagerly traversable (any [`IntoIterator`]) can borrow the same
//! retrieval surface through [`Streamable::streamed`]:
//!
//! ```rust
//! use ::pushback::prelude::*;
//!
//! let mut stream = vec!["a", "b"].streamed();
//!
//! assert_eq!(stream.peek()?, "a");
//! assert_eq!(stream.get()?, "a");
//! assert_eq!(stream.get()?, "b");
//! # Ok::<(), ::pushback::Error>(())
//! ```

#![warn(
    future_incompatible,
    rust_2018_compatibility,
    missing_docs,
    clippy::cargo,
    clippy::pedantic,
)]
#![deny(
    unused_must_use,
)]
#![doc(test(attr(deny(warnings))))]

#[path = "public_prelude.rs"]
pub
mod prelude;

#[macro_use]
mod utils;

mod iter;

pub use self::emitter::*;
mod emitter;

pub use self::error::*;
mod error;

pub use self::stream::*;
mod stream;

pub use self::streamable::*;
mod streamable;

pub use self::iter::Items;
