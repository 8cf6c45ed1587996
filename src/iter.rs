use_prelude!();

use crate::stream::Stream;

/// Lazy, forward-only iteration over the remaining items of a
/// [`Stream`].
///
/// Created by [`Stream::items`] (or `IntoIterator` on `&mut Stream`). End
/// of stream terminates the iteration normally; a generation failure is
/// yielded once as an `Err`, after which the iteration terminates too.
pub
struct Items<'stream, 'gen, T> (
    pub(in crate) &'stream mut Stream<'gen, T>,
);

impl<T> Iterator for Items<'_, '_, T>
where
    T : Clone,
{
    type Item = Result<T, Error>;

    fn next (self: &'_ mut Self)
      -> Option<Result<T, Error>>
    {
        match self.0.get() {
            | Ok(item) => Some(Ok(item)),
            | Err(Error::EndOfStream) => None,
            | Err(other) => Some(Err(other)),
        }
    }
}

impl<'stream, 'gen, T> IntoIterator for &'stream mut Stream<'gen, T>
where
    T : Clone,
{
    type Item = Result<T, Error>;
    type IntoIter = Items<'stream, 'gen, T>;

    fn into_iter (self: &'stream mut Stream<'gen, T>)
      -> Items<'stream, 'gen, T>
    {
        self.items()
    }
}
