use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Debug;

/// Reserved key carrying the error discriminant in a tagged failure payload.
pub const TYPE_KEY: &str = "type";
/// Reserved key carrying a prior failure's payload in a chained failure.
pub const CAUSE_KEY: &str = "cause";

/// Either a computation's value or its structured error.
///
/// The error side defaults to [`Value`] so callers can carry anything from a
/// bare tag string to a nested JSON payload without committing to an error
/// taxonomy up front. Outcomes are plain values: every method takes `self`
/// and hands back a fresh outcome, the inert branch passing through as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(tag = "type")]
pub enum Outcome<T, E = Value> {
    Success { value: T },
    Failure { error: E },
}

impl<T, E> Outcome<T, E> {
    pub fn success(value: T) -> Self {
        Self::Success { value }
    }

    pub fn failure(error: E) -> Self {
        Self::Failure { error }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    pub fn value(self) -> Option<T> {
        match self {
            Self::Success { value } => Some(value),
            Self::Failure { .. } => None,
        }
    }

    pub fn error(self) -> Option<E> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error),
        }
    }

    /// Applies `f` to the carried value. A failure passes through with its
    /// error untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Self::Success { value } => Outcome::Success { value: f(value) },
            Self::Failure { error } => Outcome::Failure { error },
        }
    }

    /// Applies `f` to the carried error. A success passes through with its
    /// value untouched.
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Self::Success { value } => Outcome::Success { value },
            Self::Failure { error } => Outcome::Failure { error: f(error) },
        }
    }

    /// Chains into another outcome-producing step. The closure's outcome is
    /// returned directly, so chains never nest.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Success { value } => f(value),
            Self::Failure { error } => Outcome::Failure { error },
        }
    }

    /// Returns the carried value, or `fallback` on failure. The error payload
    /// is discarded.
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Success { value } => value,
            Self::Failure { .. } => fallback,
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success { value } => Ok(value),
            Self::Failure { error } => Err(error),
        }
    }
}

impl<T, E> Outcome<T, E>
where
    E: Debug,
{
    /// Returns the carried value.
    ///
    /// # Panics
    ///
    /// Panics with the carried error on a failure. This is the single place
    /// where a value-level failure turns into control-flow failure; call
    /// sites that want to keep errors as values should use [`Outcome::map_err`]
    /// or [`Outcome::unwrap_or`] instead.
    pub fn unwrap(self) -> T {
        match self {
            Self::Success { value } => value,
            Self::Failure { error } => {
                panic!("called `Outcome::unwrap` on a failure: {:?}", error)
            }
        }
    }
}

impl<T> Outcome<T, Value> {
    /// Builds a failure whose payload is `{ "type": tag, ...fields }`.
    ///
    /// The `type` key is reserved for the discriminant: a field named `type`
    /// supplied by the caller is dropped rather than allowed to shadow it.
    pub fn failure_with(
        tag: impl Into<String>,
        fields: impl IntoIterator<Item = (String, Value)>,
    ) -> Self {
        let mut error = Map::new();
        error.insert(TYPE_KEY.to_string(), Value::String(tag.into()));

        for (key, value) in fields {
            if key == TYPE_KEY {
                tracing::warn!("Dropping caller field {:?}: the discriminant is reserved", key);
                continue;
            }
            error.insert(key, value);
        }

        Self::Failure {
            error: Value::Object(error),
        }
    }

    /// Extracts this failure's payload as a `("cause", payload)` field, ready
    /// to be handed to [`Outcome::failure_with`] when building the next
    /// failure in a chain.
    ///
    /// # Panics
    ///
    /// Panics on a success: a success has no payload to chain from.
    pub fn cause(&self) -> (String, Value) {
        match self {
            Self::Failure { error } => (CAUSE_KEY.to_string(), error.clone()),
            Self::Success { .. } => {
                panic!("cause fragments can only be taken from a failure")
            }
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success { value },
            Err(error) => Self::Failure { error },
        }
    }
}
