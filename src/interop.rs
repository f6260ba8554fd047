//! Boundary adapter between fallible futures and `Either`.
//!
//! A future whose output is `Result<A, E>` fails through its `Err` channel.
//! The adapters here turn it into a future that always completes with a
//! value: `Ok` becomes `Right`, `Err` becomes `Left`. This is the only place
//! where the `Result` failure channel is translated; nothing downstream of
//! it fails on its own.

use crate::either::Either;
use futures::future::{FutureExt, IntoFuture, Map, TryFuture, TryFutureExt};

type Settle<Fut> = fn(
    Result<<Fut as TryFuture>::Ok, <Fut as TryFuture>::Error>,
) -> Either<<Fut as TryFuture>::Error, <Fut as TryFuture>::Ok>;

/// Future returned by [`from_future`] and [`EitherFutureExt::into_either`].
pub type IntoEither<Fut> = Map<IntoFuture<Fut>, Settle<Fut>>;

pub trait EitherFutureExt: TryFuture + Sized {
    /// Completes with `Right(ok)` or `Left(err)` once `self` settles.
    ///
    /// No task is spawned. Dropping the returned future drops `self`.
    fn into_either(self) -> IntoEither<Self> {
        let settle: Settle<Self> = Either::from;
        TryFutureExt::into_future(self).map(settle)
    }
}

impl<Fut: TryFuture> EitherFutureExt for Fut {}

/// Adapts a fallible future into one that always yields an `Either`.
pub fn from_future<Fut>(fut: Fut) -> IntoEither<Fut>
where
    Fut: TryFuture,
{
    fut.into_either()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::either::{Left, Right};
    use futures::executor::block_on;
    use futures::future::{err, ok};

    #[test]
    fn test_resolved_future_becomes_right() {
        let settled = block_on(from_future(ok::<&str, &str>("ok")));
        assert_eq!(settled, Right("ok"));
    }

    #[test]
    fn test_rejected_future_becomes_left() {
        let settled = block_on(from_future(err::<i32, &str>("bad")));
        assert_eq!(settled, Left("bad"));
    }

    #[test]
    fn test_async_block_adapts() {
        let source = async { "7".parse::<u8>() };
        let settled = block_on(source.into_either());
        assert_eq!(settled, Right(7));
    }
}
