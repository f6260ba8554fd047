//! The `Either` sum type: construction, predicates and conversions.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A value that is exactly one of two outcomes.
///
/// `Left` carries an error of type `E`, `Right` carries a success value of
/// type `A`. The payload is never mutated once the value is built; every
/// operation in this crate consumes an `Either` and returns a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<E, A> {
    /// The error outcome.
    Left(E),
    /// The success outcome.
    Right(A),
}

pub use Either::{Left, Right};

/// Wraps a success value.
pub fn right<E, A>(value: A) -> Either<E, A> {
    Right(value)
}

/// Wraps an error value.
pub fn left<E, A>(error: E) -> Either<E, A> {
    Left(error)
}

/// True when `either` holds a success value.
pub fn is_right<E, A>(either: &Either<E, A>) -> bool {
    either.is_right()
}

/// True when `either` holds an error.
pub fn is_left<E, A>(either: &Either<E, A>) -> bool {
    either.is_left()
}

impl<E, A> Either<E, A> {
    pub fn right(value: A) -> Self {
        Right(value)
    }

    pub fn left(error: E) -> Self {
        Left(error)
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Right(_))
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Left(_))
    }

    /// Borrows the error, if this is a `Left`.
    pub fn left_ref(&self) -> Option<&E> {
        match self {
            Left(e) => Some(e),
            Right(_) => None,
        }
    }

    /// Borrows the success value, if this is a `Right`.
    pub fn right_ref(&self) -> Option<&A> {
        match self {
            Left(_) => None,
            Right(a) => Some(a),
        }
    }

    /// Takes the error, if this is a `Left`.
    pub fn into_left(self) -> Option<E> {
        match self {
            Left(e) => Some(e),
            Right(_) => None,
        }
    }

    /// Takes the success value, if this is a `Right`.
    pub fn into_right(self) -> Option<A> {
        match self {
            Left(_) => None,
            Right(a) => Some(a),
        }
    }

    /// Borrows the payload without consuming `self`.
    pub fn as_ref(&self) -> Either<&E, &A> {
        match self {
            Left(e) => Left(e),
            Right(a) => Right(a),
        }
    }

    /// Swaps the two sides: an error becomes the success value and back.
    pub fn flip(self) -> Either<A, E> {
        match self {
            Left(e) => Right(e),
            Right(a) => Left(a),
        }
    }

    /// `Right` becomes `Ok`, `Left` becomes `Err`.
    pub fn into_result(self) -> Result<A, E> {
        self.into()
    }
}

impl<E, A> From<Result<A, E>> for Either<E, A> {
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(a) => Right(a),
            Err(e) => Left(e),
        }
    }
}

impl<E, A> From<Either<E, A>> for Result<A, E> {
    fn from(either: Either<E, A>) -> Self {
        match either {
            Left(e) => Err(e),
            Right(a) => Ok(a),
        }
    }
}

impl<E: fmt::Display, A: fmt::Display> fmt::Display for Either<E, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Left(e) => write!(f, "Left({e})"),
            Right(a) => write!(f, "Right({a})"),
        }
    }
}

// =============================================================================
// Wire shape: {"tag": "Left", "error": ..} / {"tag": "Right", "value": ..}
// =============================================================================

#[derive(Serialize)]
#[serde(tag = "tag")]
enum TaggedRef<'a, E, A> {
    Left { error: &'a E },
    Right { value: &'a A },
}

#[derive(Deserialize)]
#[serde(tag = "tag", deny_unknown_fields)]
enum Tagged<E, A> {
    Left { error: E },
    Right { value: A },
}

impl<E: Serialize, A: Serialize> Serialize for Either<E, A> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let tagged = match self {
            Left(error) => TaggedRef::Left { error },
            Right(value) => TaggedRef::Right { value },
        };
        tagged.serialize(serializer)
    }
}

impl<'de, E, A> Deserialize<'de> for Either<E, A>
where
    E: Deserialize<'de>,
    A: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Tagged::deserialize(deserializer)? {
            Tagged::Left { error } => Left(error),
            Tagged::Right { value } => Right(value),
        })
    }
}
