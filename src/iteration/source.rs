//! Sequence source contract.

/// Pull-based producer of records with explicit release.
///
/// Typical implementors wrap a storage cursor.
pub trait SequenceSource {
    type Item;
    type Error;

    /// Produce the next record: `Ok(Some(_))` while records remain,
    /// `Ok(None)` once exhausted.
    fn next(&mut self) -> Result<Option<Self::Item>, Self::Error>;

    /// Release the source. Must be safe to call more than once.
    fn close(&mut self);
}

impl<S: SequenceSource + ?Sized> SequenceSource for &mut S {
    type Item = S::Item;
    type Error = S::Error;

    fn next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        (**self).next()
    }

    fn close(&mut self) {
        (**self).close()
    }
}

impl<S: SequenceSource + ?Sized> SequenceSource for Box<S> {
    type Item = S::Item;
    type Error = S::Error;

    fn next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        (**self).next()
    }

    fn close(&mut self) {
        (**self).close()
    }
}

/// Adapts any iterator of `Result`s into a source; `close` drops the rest.
#[derive(Debug)]
pub struct IterSource<I> {
    iter: Option<I>,
}

impl<I> IterSource<I> {
    pub fn new(iter: I) -> Self {
        Self { iter: Some(iter) }
    }

    pub fn is_closed(&self) -> bool {
        self.iter.is_none()
    }
}

impl<I, T, E> SequenceSource for IterSource<I>
where
    I: Iterator<Item = Result<T, E>>,
{
    type Item = T;
    type Error = E;

    fn next(&mut self) -> Result<Option<T>, E> {
        match self.iter.as_mut() {
            Some(iter) => Iterator::next(iter).transpose(),
            None => Ok(None),
        }
    }

    fn close(&mut self) {
        self.iter = None;
    }
}

/// Closes the wrapped source when dropped.
pub(crate) struct CloseGuard<'a, S: SequenceSource + ?Sized> {
    source: &'a mut S,
}

impl<'a, S: SequenceSource + ?Sized> CloseGuard<'a, S> {
    pub(crate) fn new(source: &'a mut S) -> Self {
        Self { source }
    }

    pub(crate) fn source(&mut self) -> &mut S {
        self.source
    }
}

impl<S: SequenceSource + ?Sized> Drop for CloseGuard<'_, S> {
    fn drop(&mut self) {
        self.source.close();
    }
}
