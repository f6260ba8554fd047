//! Eliminating an `Either` into a single value.

use crate::either::{Either, Left, Right};
use std::convert::identity;

impl<E, A> Either<E, A> {
    /// Calls `on_left` with the error or `on_right` with the value. Both
    /// handlers produce the same type.
    pub fn fold<B, L, R>(self, on_left: L, on_right: R) -> B
    where
        L: FnOnce(E) -> B,
        R: FnOnce(A) -> B,
    {
        match self {
            Left(e) => on_left(e),
            Right(a) => on_right(a),
        }
    }

    /// Returns the `Right` payload, or the fallback computed from the error.
    pub fn get_or_else<L>(self, on_left: L) -> A
    where
        L: FnOnce(E) -> A,
    {
        self.fold(on_left, identity)
    }
}

/// Curried `fold`: `fold(on_left, on_right)(either)`.
pub fn fold<E, A, B, L, R>(on_left: L, on_right: R) -> impl Fn(Either<E, A>) -> B
where
    L: Fn(E) -> B,
    R: Fn(A) -> B,
{
    move |ma| ma.fold(&on_left, &on_right)
}

/// Curried `get_or_else`: `get_or_else(on_left)(either)`.
pub fn get_or_else<E, A, L>(on_left: L) -> impl Fn(Either<E, A>) -> A
where
    L: Fn(E) -> A,
{
    move |ma| ma.get_or_else(&on_left)
}
