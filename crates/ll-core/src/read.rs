//! Fail-open read policy.
//!
//! Reads that feed a screen never surface storage failures. Instead of
//! swallowing the error, a read returns [`SoftRead::Degraded`] carrying the
//! empty fallback (empty list, absent record, `false`) together with the
//! reason, so callers can render an empty state and still log what went wrong.

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum SoftRead<T> {
    /// The read reached storage and returned this value.
    Loaded(T),
    /// The read failed; `fallback` is the empty value to render.
    Degraded { fallback: T, reason: String },
}

impl<T> SoftRead<T> {
    pub fn degraded(fallback: T, reason: impl Into<String>) -> Self {
        Self::Degraded {
            fallback,
            reason: reason.into(),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    pub fn value(&self) -> &T {
        match self {
            Self::Loaded(value) => value,
            Self::Degraded { fallback, .. } => fallback,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Self::Loaded(value) => value,
            Self::Degraded { fallback, .. } => fallback,
        }
    }

    /// Reason of the failure, if the read degraded.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Loaded(_) => None,
            Self::Degraded { reason, .. } => Some(reason),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> SoftRead<U> {
        match self {
            Self::Loaded(value) => SoftRead::Loaded(f(value)),
            Self::Degraded { fallback, reason } => SoftRead::Degraded {
                fallback: f(fallback),
                reason,
            },
        }
    }
}

impl<T: Default> SoftRead<T> {
    /// Converts a storage result, substituting `T::default()` on error.
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(err) => Self::degraded(T::default(), err.to_string()),
        }
    }
}
