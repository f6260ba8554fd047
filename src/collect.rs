//! Working with sequences of `Either`s.

use crate::either::{Either, Left, Right};

/// Yields the errors of `eithers`, in order.
pub fn lefts<E, A, I>(eithers: I) -> impl Iterator<Item = E>
where
    I: IntoIterator<Item = Either<E, A>>,
{
    eithers.into_iter().filter_map(Either::into_left)
}

/// Yields the success values of `eithers`, in order.
pub fn rights<E, A, I>(eithers: I) -> impl Iterator<Item = A>
where
    I: IntoIterator<Item = Either<E, A>>,
{
    eithers.into_iter().filter_map(Either::into_right)
}

/// Splits `eithers` into all errors and all success values.
pub fn partition<E, A, I>(eithers: I) -> (Vec<E>, Vec<A>)
where
    I: IntoIterator<Item = Either<E, A>>,
{
    let mut errors = Vec::new();
    let mut values = Vec::new();
    for either in eithers {
        match either {
            Left(e) => errors.push(e),
            Right(a) => values.push(a),
        }
    }
    (errors, values)
}

/// Collecting stops at the first `Left`, which becomes the result.
/// Otherwise every `Right` payload is gathered into `V`.
impl<E, A, V> FromIterator<Either<E, A>> for Either<E, V>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Either<E, A>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Either::into_result)
            .collect::<Result<V, E>>()
            .into()
    }
}
