// SPDX-License-Identifier: MIT OR Apache-2.0
//! The closed set of anomaly categories.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Why an operation failed.
///
/// The set is closed: adding a category is a compile-time visible change to
/// this enum and to the exhaustive status match in [`Category::http_status`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// The callee is not reachable right now. Retry later.
    Unavailable,
    /// The operation was cut short before it could finish.
    Interrupted,
    /// The caller sent something malformed or invalid.
    Incorrect,
    /// The caller is known but not allowed to do this.
    Forbidden,
    /// The caller has not identified itself.
    Unauthorized,
    /// The addressed thing does not exist.
    NotFound,
    /// The request collides with the current state.
    Conflict,
    /// Something broke on the callee side.
    Fault,
    /// The callee is overloaded. Back off and retry.
    Busy,
    /// The callee does not implement what was asked.
    Unsupported,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 10] = [
        Self::Unavailable,
        Self::Interrupted,
        Self::Incorrect,
        Self::Forbidden,
        Self::Unauthorized,
        Self::NotFound,
        Self::Conflict,
        Self::Fault,
        Self::Busy,
        Self::Unsupported,
    ];

    /// Stable kebab-case identifier (e.g. `"not-found"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unavailable => "unavailable",
            Self::Interrupted => "interrupted",
            Self::Incorrect => "incorrect",
            Self::Forbidden => "forbidden",
            Self::Unauthorized => "unauthorized",
            Self::NotFound => "not-found",
            Self::Conflict => "conflict",
            Self::Fault => "fault",
            Self::Busy => "busy",
            Self::Unsupported => "unsupported",
        }
    }

    /// HTTP status a boundary layer should answer with.
    pub const fn http_status(self) -> u16 {
        match self {
            Self::Unavailable => 503,
            Self::Interrupted => 500,
            Self::Incorrect => 400,
            Self::Forbidden => 403,
            Self::Unauthorized => 401,
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::Fault => 500,
            Self::Busy => 503,
            Self::Unsupported => 501,
        }
    }

    /// `true` when the status falls in `400..500`.
    pub const fn is_client_error(self) -> bool {
        let status = self.http_status();
        status >= 400 && status < 500
    }

    /// `true` when the status is `500` or above.
    pub const fn is_server_error(self) -> bool {
        self.http_status() >= 500
    }

    /// `true` for transient conditions where repeating the same request
    /// may succeed.
    pub const fn is_retryable(self) -> bool {
        matches!(self, Self::Unavailable | Self::Interrupted | Self::Busy)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name any [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown anomaly category: {0:?}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
