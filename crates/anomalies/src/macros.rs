// SPDX-License-Identifier: MIT OR Apache-2.0
//! Early-return macros for raising anomalies.
//!
//! Each macro expands to `return` of [`raise`](crate::raise) (or
//! [`raise_anomaly`](crate::raise_anomaly)) with the error converted by
//! `From::from`, so it works in any function whose error type implements
//! `From<AnomalyError>` (including `anyhow::Error`) and emits the same
//! `debug!` event as the functions.
//!
//! The message follows `anyhow::bail!`: a string literal with inline
//! captures, a format string plus arguments, or any single expression
//! that is `Into<String>`. A leading `data = <Fields>` attaches a payload.

#[doc(hidden)]
#[macro_export]
macro_rules! __anomaly_message {
    ($msg:literal $(,)?) => {
        ::std::format!($msg)
    };
    ($msg:expr $(,)?) => {
        ::core::convert::Into::<::std::string::String>::into($msg)
    };
    ($fmt:expr, $($arg:tt)+) => {
        ::std::format!($fmt, $($arg)+)
    };
}

/// Return early with an anomaly of the given category.
///
/// ```
/// use anomalies::{AnomalyError, Category, Fields, raise};
///
/// fn reserve(seats: u32) -> Result<u32, AnomalyError> {
///     if seats > 8 {
///         raise!(Category::Incorrect, "cannot reserve {seats} seats");
///     }
///     Ok(seats)
/// }
///
/// let err = reserve(9).unwrap_err();
/// assert_eq!(err.category(), Category::Incorrect);
/// assert_eq!(err.to_string(), "cannot reserve 9 seats");
///
/// fn cancel(reason: String, seats: u32) -> Result<(), AnomalyError> {
///     let data: Fields = [("seats".to_string(), seats.into())].into_iter().collect();
///     raise!(Category::Conflict, data = data, reason);
/// }
///
/// let err = cancel("already cancelled".to_string(), 2).unwrap_err();
/// assert_eq!(err.to_string(), "already cancelled");
/// assert_eq!(err.anomaly().data()["seats"], 2);
/// ```
///
/// A single argument is taken as a ready-made [`Anomaly`](crate::Anomaly).
#[macro_export]
macro_rules! raise {
    ($category:expr, data = $data:expr, $($msg:tt)+) => {
        return $crate::raise(
            $category,
            $crate::__anomaly_message!($($msg)+),
            ::core::option::Option::Some($data),
        )
        .map_err(::core::convert::From::from)
    };
    ($category:expr, $($msg:tt)+) => {
        return $crate::raise(
            $category,
            $crate::__anomaly_message!($($msg)+),
            ::core::option::Option::None,
        )
        .map_err(::core::convert::From::from)
    };
    ($anomaly:expr $(,)?) => {
        return $crate::raise_anomaly($anomaly).map_err(::core::convert::From::from)
    };
}

/// Return early with a `not-found` anomaly.
#[macro_export]
macro_rules! not_found {
    ($($arg:tt)+) => {
        $crate::raise!($crate::Category::NotFound, $($arg)+)
    };
}

/// Return early with a `forbidden` anomaly.
#[macro_export]
macro_rules! forbidden {
    ($($arg:tt)+) => {
        $crate::raise!($crate::Category::Forbidden, $($arg)+)
    };
}

/// Return early with an `incorrect` anomaly.
#[macro_export]
macro_rules! incorrect {
    ($($arg:tt)+) => {
        $crate::raise!($crate::Category::Incorrect, $($arg)+)
    };
}

/// Return early with a `conflict` anomaly.
#[macro_export]
macro_rules! conflict {
    ($($arg:tt)+) => {
        $crate::raise!($crate::Category::Conflict, $($arg)+)
    };
}

/// Return early with a `fault` anomaly.
#[macro_export]
macro_rules! fault {
    ($($arg:tt)+) => {
        $crate::raise!($crate::Category::Fault, $($arg)+)
    };
}

/// Return early with an `unavailable` anomaly.
#[macro_export]
macro_rules! unavailable {
    ($($arg:tt)+) => {
        $crate::raise!($crate::Category::Unavailable, $($arg)+)
    };
}

/// Return early with an `unsupported` anomaly.
#[macro_export]
macro_rules! unsupported {
    ($($arg:tt)+) => {
        $crate::raise!($crate::Category::Unsupported, $($arg)+)
    };
}

/// Return early with an `unauthorized` anomaly.
///
/// Without a message (`unauthorized!()` or `unauthorized!(data = ..)`) the
/// message is [`UNAUTHORIZED_MESSAGE`](crate::UNAUTHORIZED_MESSAGE).
#[macro_export]
macro_rules! unauthorized {
    () => {
        $crate::raise!($crate::Category::Unauthorized, $crate::UNAUTHORIZED_MESSAGE)
    };
    (data = $data:expr $(,)?) => {
        $crate::raise!(
            $crate::Category::Unauthorized,
            data = $data,
            $crate::UNAUTHORIZED_MESSAGE
        )
    };
    ($($arg:tt)+) => {
        $crate::raise!($crate::Category::Unauthorized, $($arg)+)
    };
}
