//! Removing one level of nesting (`flatten`) and sequencing fallible steps
//! (`chain`).

use crate::either::{Either, Left, Right};

impl<E, A> Either<E, Either<E, A>> {
    /// Unwraps one level of nesting. The inner `Either` of a `Right` is
    /// returned as it is; an outer `Left` passes through.
    pub fn flatten(self) -> Either<E, A> {
        match self {
            Left(e) => Left(e),
            Right(inner) => inner,
        }
    }
}

impl<E, A> Either<E, A> {
    /// Runs the next fallible step on a `Right` payload. Same as `map`
    /// followed by `flatten`.
    pub fn chain<B, F>(self, f: F) -> Either<E, B>
    where
        F: FnOnce(A) -> Either<E, B>,
    {
        self.map(f).flatten()
    }
}

/// Free-function form of [`Either::flatten`].
pub fn flatten<E, A>(nested: Either<E, Either<E, A>>) -> Either<E, A> {
    nested.flatten()
}

/// Curried `chain`: `chain(f)(either)`.
pub fn chain<E, A, B, F>(f: F) -> impl Fn(Either<E, A>) -> Either<E, B>
where
    F: Fn(A) -> Either<E, B>,
{
    move |fa| fa.chain(&f)
}
