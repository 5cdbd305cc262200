// SPDX-License-Identifier: MIT OR Apache-2.0
//! Raising anomalies as errors and recovering them at a boundary.

use crate::anomaly::{Anomaly, Fields, make_anomaly};
use crate::category::Category;
use crate::status::Classify;
use std::error::Error;
use tracing::{debug, trace};

/// Message used by [`unauthorized`] and `unauthorized!()` when the caller
/// gives none.
pub const UNAUTHORIZED_MESSAGE: &str = "Authentication required";

/// An error whose payload is an [`Anomaly`].
///
/// Displays as the anomaly's message. The full record, including any extra
/// fields, stays reachable through [`AnomalyError::anomaly`] and
/// [`extract_anomaly`].
#[derive(Debug, thiserror::Error)]
#[error("{}", .anomaly.message)]
pub struct AnomalyError {
    anomaly: Anomaly,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

impl AnomalyError {
    /// Wrap an anomaly.
    pub fn new(anomaly: Anomaly) -> Self {
        Self {
            anomaly,
            source: None,
        }
    }

    /// Attach an underlying cause, reported through [`Error::source`].
    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// The structured payload.
    pub fn anomaly(&self) -> &Anomaly {
        &self.anomaly
    }

    /// Consume the error, keeping only the payload.
    pub fn into_anomaly(self) -> Anomaly {
        self.anomaly
    }

    /// Shorthand for `self.anomaly().category`.
    pub fn category(&self) -> Category {
        self.anomaly.category
    }
}

impl From<Anomaly> for AnomalyError {
    fn from(anomaly: Anomaly) -> Self {
        Self::new(anomaly)
    }
}

impl Classify for AnomalyError {
    fn category(&self) -> Option<Category> {
        Some(self.anomaly.category)
    }
}

/// Build an anomaly with [`make_anomaly`] and return it as an error.
///
/// Always returns `Err`; the `T` parameter lets the call sit in tail
/// position of any function returning `Result<T, AnomalyError>`.
pub fn raise<T>(
    category: Category,
    message: impl Into<String>,
    data: Option<Fields>,
) -> Result<T, AnomalyError> {
    raise_anomaly(make_anomaly(category, message, data))
}

/// Return a ready-made anomaly as an error.
pub fn raise_anomaly<T>(anomaly: Anomaly) -> Result<T, AnomalyError> {
    debug!(
        category = %anomaly.category,
        status = anomaly.category.http_status(),
        anomaly = %anomaly,
        "raising anomaly"
    );
    Err(anomaly.into())
}

/// Raise a [`Category::NotFound`] anomaly.
pub fn not_found<T>(message: impl Into<String>, data: Option<Fields>) -> Result<T, AnomalyError> {
    raise(Category::NotFound, message, data)
}

/// Raise a [`Category::Forbidden`] anomaly.
pub fn forbidden<T>(message: impl Into<String>, data: Option<Fields>) -> Result<T, AnomalyError> {
    raise(Category::Forbidden, message, data)
}

/// Raise a [`Category::Incorrect`] anomaly.
pub fn incorrect<T>(message: impl Into<String>, data: Option<Fields>) -> Result<T, AnomalyError> {
    raise(Category::Incorrect, message, data)
}

/// Raise a [`Category::Conflict`] anomaly.
pub fn conflict<T>(message: impl Into<String>, data: Option<Fields>) -> Result<T, AnomalyError> {
    raise(Category::Conflict, message, data)
}

/// Raise a [`Category::Fault`] anomaly.
pub fn fault<T>(message: impl Into<String>, data: Option<Fields>) -> Result<T, AnomalyError> {
    raise(Category::Fault, message, data)
}

/// Raise a [`Category::Unavailable`] anomaly.
pub fn unavailable<T>(
    message: impl Into<String>,
    data: Option<Fields>,
) -> Result<T, AnomalyError> {
    raise(Category::Unavailable, message, data)
}

/// Raise a [`Category::Unsupported`] anomaly.
pub fn unsupported<T>(
    message: impl Into<String>,
    data: Option<Fields>,
) -> Result<T, AnomalyError> {
    raise(Category::Unsupported, message, data)
}

/// Raise a [`Category::Unauthorized`] anomaly with [`UNAUTHORIZED_MESSAGE`].
pub fn unauthorized<T>(data: Option<Fields>) -> Result<T, AnomalyError> {
    unauthorized_with(UNAUTHORIZED_MESSAGE, data)
}

/// Raise a [`Category::Unauthorized`] anomaly with a custom message.
pub fn unauthorized_with<T>(
    message: impl Into<String>,
    data: Option<Fields>,
) -> Result<T, AnomalyError> {
    raise(Category::Unauthorized, message, data)
}

/// Find the anomaly carried by `err` or by any error in its source chain.
///
/// Returns `None` when no error in the chain is an [`AnomalyError`].
pub fn extract_anomaly<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a Anomaly> {
    std::iter::successors(Some(err), |e| (*e).source())
        .find_map(|e| e.downcast_ref::<AnomalyError>())
        .map(AnomalyError::anomaly)
}

/// Normalise any error into an anomaly.
///
/// Uses [`extract_anomaly`] when possible; otherwise wraps the error's
/// display text in a [`Category::Fault`] anomaly.
pub fn to_anomaly(err: &(dyn Error + 'static)) -> Anomaly {
    if let Some(anomaly) = extract_anomaly(err) {
        return anomaly.clone();
    }
    let message = err.to_string();
    trace!(error = %message, "classifying foreign error as fault");
    Anomaly::new(Category::Fault, message)
}
