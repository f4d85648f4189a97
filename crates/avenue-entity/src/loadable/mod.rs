//! Asynchronous load state of a value.
//!
//! [`LoadableData`] is what a fetch collaborator hands to its consumers.
//! The lifecycle is `Loaded -> Loading -> (Loaded | Errored)`, and both end
//! states may go back to `Loading` on retry.
//!
//! While a fetch is in flight, `data` holds the previous value (stale but
//! usable for display). Only the very first load, built with
//! [`LoadableData::pending`], starts from `T::default()`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a [`LoadableData`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    /// `data` is current.
    Loaded,
    /// A fetch is in flight; `data` is the previous value.
    Loading,
    /// The most recent fetch failed; `data` is the previous value.
    Errored,
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded => write!(f, "loaded"),
            Self::Loading => write!(f, "loading"),
            Self::Errored => write!(f, "errored"),
        }
    }
}

/// A value together with the state of its most recent fetch.
///
/// Consumers must check `loading` and `error` before trusting `data`;
/// [`ready`](Self::ready) does both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadableData<T> {
    pub data: T,
    pub loading: bool,
    /// Message of the most recent failure, produced by the fetch collaborator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> LoadableData<T> {
    /// Settled state holding a fresh value.
    pub fn loaded(data: T) -> Self {
        Self {
            data,
            loading: false,
            error: None,
        }
    }

    /// In-flight state carrying the previous value forward.
    pub fn loading(previous: T) -> Self {
        Self {
            data: previous,
            loading: true,
            error: None,
        }
    }

    /// Failed state keeping the previous value.
    pub fn failed(previous: T, message: impl Into<String>) -> Self {
        Self {
            data: previous,
            loading: false,
            error: Some(message.into()),
        }
    }

    /// Current lifecycle state. An in-flight fetch wins over a stale error.
    pub fn state(&self) -> LoadState {
        if self.loading {
            LoadState::Loading
        } else if self.error.is_some() {
            LoadState::Errored
        } else {
            LoadState::Loaded
        }
    }

    /// The value, only when it is settled and not from a failed fetch.
    pub fn ready(&self) -> Option<&T> {
        match self.state() {
            LoadState::Loaded => Some(&self.data),
            LoadState::Loading | LoadState::Errored => None,
        }
    }

    /// Start a (re)fetch, keeping the current value.
    pub fn begin_reload(self) -> Self {
        Self::loading(self.data)
    }

    /// Settle an in-flight fetch with its outcome.
    pub fn resolve(self, outcome: Result<T, String>) -> Self {
        match outcome {
            Ok(data) => Self::loaded(data),
            Err(message) => Self::failed(self.data, message),
        }
    }

    /// Transform the value, keeping the load state.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadableData<U> {
        LoadableData {
            data: f(self.data),
            loading: self.loading,
            error: self.error,
        }
    }

    /// Take the value regardless of state.
    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T: Default> LoadableData<T> {
    /// Initial state before the first fetch has completed.
    pub fn pending() -> Self {
        Self::loading(T::default())
    }
}

impl<T: Default> Default for LoadableData<T> {
    fn default() -> Self {
        Self::pending()
    }
}

/// Wrap a freshly loaded value.
pub fn wrap<T>(value: T) -> LoadableData<T> {
    LoadableData::loaded(value)
}

/// Wrap the previous value while a fetch is in flight.
pub fn wrap_loading<T>(previous: T) -> LoadableData<T> {
    LoadableData::loading(previous)
}

/// Wrap the previous value after a failed fetch.
pub fn wrap_error<T>(previous: T, message: impl Into<String>) -> LoadableData<T> {
    LoadableData::failed(previous, message)
}
