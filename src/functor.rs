//! Mapping over the success side (`map`) and applying a wrapped function
//! to a wrapped value (`ap`).

use crate::either::{Either, Left, Right};

impl<E, A> Either<E, A> {
    /// Applies `f` to a `Right` payload. A `Left` is returned untouched.
    pub fn map<B, F>(self, f: F) -> Either<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Left(e) => Left(e),
            Right(a) => Right(f(a)),
        }
    }

    /// Applies `f` to a `Left` payload. A `Right` is returned untouched.
    pub fn map_left<D, F>(self, f: F) -> Either<D, A>
    where
        F: FnOnce(E) -> D,
    {
        match self {
            Left(e) => Left(f(e)),
            Right(a) => Right(a),
        }
    }
}

impl<E, F> Either<E, F> {
    /// Applies the function held in `self` to the value held in `fa`.
    ///
    /// An error on the function side wins and `fa` is not inspected; after
    /// that an error on the value side wins.
    pub fn ap<A, B>(self, fa: Either<E, A>) -> Either<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Left(e) => Left(e),
            Right(f) => match fa {
                Left(e) => Left(e),
                Right(a) => Right(f(a)),
            },
        }
    }
}

/// Curried `map`: `map(f)(either)`.
pub fn map<E, A, B, F>(f: F) -> impl Fn(Either<E, A>) -> Either<E, B>
where
    F: Fn(A) -> B,
{
    move |fa| fa.map(&f)
}

/// Curried `ap`: `ap(fa)(fab)`.
pub fn ap<E, A, B, F>(fa: Either<E, A>) -> impl FnOnce(Either<E, F>) -> Either<E, B>
where
    F: FnOnce(A) -> B,
{
    move |fab| fab.ap(fa)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::either::{left, right};

    #[test]
    fn test_map_transforms_right() {
        let double = map(|x: i32| x * 2);
        assert_eq!(double(right::<&str, _>(21)), Right(42));
        assert_eq!(double(right::<&str, _>(1)), Right(2));
    }

    #[test]
    fn test_map_passes_left_through() {
        let len = map(|s: String| s.len());
        assert_eq!(len(left::<_, String>("err")), Left("err"));
    }

    #[test]
    fn test_map_does_not_call_fn_on_left() {
        let either: Either<&str, i32> = left("err");
        let mapped = either.map(|_: i32| -> i32 { panic!("must not run") });
        assert_eq!(mapped, Left("err"));
    }

    #[test]
    fn test_map_left_only_touches_error() {
        let err: Either<&str, i32> = left("abc");
        let ok: Either<&str, i32> = right(1);

        assert_eq!(err.map_left(str::len), Left(3));
        assert_eq!(ok.map_left(str::len), Right(1));
    }

    #[test]
    fn test_ap_applies_wrapped_function() {
        let fab: Either<&str, fn(i32) -> i32> = right(|x| x * 2);
        assert_eq!(ap(right(5))(fab), Right(10));
    }

    #[test]
    fn test_ap_function_error_wins() {
        let fab: Either<&str, fn(i32) -> i32> = left("fnErr");
        assert_eq!(ap(left("valErr"))(fab), Left("fnErr"));
    }

    #[test]
    fn test_ap_value_error_when_function_present() {
        let fab: Either<&str, fn(i32) -> i32> = right(|x| x + 1);
        assert_eq!(ap(left("valErr"))(fab), Left("valErr"));
    }

    #[test]
    fn test_ap_with_two_argument_function() {
        let add = |a: i32| move |b: i32| a + b;
        let partial: Either<&str, _> = right(add).ap(right(3));
        assert_eq!(partial.ap(right(4)), Right(7));
    }
}
