// SPDX-License-Identifier: MIT OR Apache-2.0
#![doc = include_str!("../README.md")]
//! anomalies
#![deny(unsafe_code)]
#![warn(missing_docs)]
//!
//! A closed taxonomy of failure categories, each bound to one HTTP status.

mod macros;

pub mod anomaly;
pub mod category;
pub mod error;
pub mod status;

pub use anomaly::{Anomaly, Fields, UNKNOWN_CATEGORY_KEY, is_anomaly, make_anomaly};
pub use category::{Category, UnknownCategory};
pub use error::{
    AnomalyError, UNAUTHORIZED_MESSAGE, conflict, extract_anomaly, fault, forbidden, incorrect,
    not_found, raise, raise_anomaly, to_anomaly, unauthorized, unauthorized_with, unavailable,
    unsupported,
};
pub use status::{Classify, DEFAULT_STATUS, STATUS_TABLE, http_status, is_client_error, is_server_error};
