//! # Either: Errors as Values
//!
//! A disjoint union of two outcomes, `Left` (error) and `Right` (success),
//! with the functional toolkit around it.
//!
//! ## Patterns Covered
//!
//! 1. **Construction & Predicates** - `right`, `left`, `is_right`, `is_left`
//! 2. **Functor** - `map` over the success side, errors pass through
//! 3. **Applicative** - `ap` applies a wrapped function to a wrapped value
//! 4. **Flattening** - `flatten` and `chain` for nested/sequenced steps
//! 5. **Folding** - `fold` and `get_or_else` to get a plain value back out
//! 6. **Future Interop** - `from_future` turns a failing future into one
//!    that always yields an `Either`
//! 7. **Collections** - `lefts`, `rights`, `partition`, `collect`
//!
//! `map`, `ap`, `chain`, `fold` and `get_or_else` exist both as methods and
//! as curried free functions. `flatten` is a method and a plain function;
//! `lefts`, `rights` and `partition` are plain functions over iterators:
//!
//! ```
//! use either_fp::{map, right, Either};
//!
//! let double = map(|x: i32| x * 2);
//! assert_eq!(double(right::<&str, _>(21)), Either::Right(42));
//! assert_eq!(right::<&str, i32>(21).map(|x| x * 2), Either::Right(42));
//! ```
//!
//! ## Running the Tour
//!
//! ```bash
//! cargo run --bin either_tour
//! cargo run --bin either_tour -- tour.toml
//! ```
//!
//! ## Key Dependencies
//!
//! - `futures` - Future adapters behind `from_future`
//! - `serde` - Tagged wire shape for `Either`

pub mod collect;
pub mod either;
pub mod fold;
pub mod functor;
pub mod interop;
pub mod monad;

pub use collect::{lefts, partition, rights};
pub use either::{is_left, is_right, left, right, Either, Left, Right};
pub use fold::{fold, get_or_else};
pub use functor::{ap, map};
pub use interop::{from_future, EitherFutureExt, IntoEither};
pub use monad::{chain, flatten};
