// SPDX-License-Identifier: MIT OR Apache-2.0
//! Category → HTTP status lookup and the client/server split.

use crate::category::Category;
use serde_json::Value;

/// Status answered for anything without a recognised category.
pub const DEFAULT_STATUS: u16 = 500;

/// The full category → status table, in [`Category::ALL`] order.
pub const STATUS_TABLE: [(Category, u16); 10] = [
    (Category::Unavailable, Category::Unavailable.http_status()),
    (Category::Interrupted, Category::Interrupted.http_status()),
    (Category::Incorrect, Category::Incorrect.http_status()),
    (Category::Forbidden, Category::Forbidden.http_status()),
    (Category::Unauthorized, Category::Unauthorized.http_status()),
    (Category::NotFound, Category::NotFound.http_status()),
    (Category::Conflict, Category::Conflict.http_status()),
    (Category::Fault, Category::Fault.http_status()),
    (Category::Busy, Category::Busy.http_status()),
    (Category::Unsupported, Category::Unsupported.http_status()),
];

/// Anything that may carry an anomaly category.
///
/// Boundary code classifies through this trait instead of matching on
/// concrete error types. Returning `None` means "not classified" and maps
/// to [`DEFAULT_STATUS`].
pub trait Classify {
    /// The category this value is tagged with, if any.
    fn category(&self) -> Option<Category>;
}

impl Classify for Category {
    fn category(&self) -> Option<Category> {
        Some(*self)
    }
}

/// A JSON value classifies only as an object whose `category` member is a
/// string naming a known category.
impl Classify for Value {
    fn category(&self) -> Option<Category> {
        self.as_object()?
            .get("category")?
            .as_str()?
            .parse()
            .ok()
    }
}

impl<T: Classify> Classify for Option<T> {
    fn category(&self) -> Option<Category> {
        self.as_ref().and_then(|v| v.category())
    }
}

impl<T: Classify + ?Sized> Classify for &T {
    fn category(&self) -> Option<Category> {
        (**self).category()
    }
}

impl<T: Classify + ?Sized> Classify for Box<T> {
    fn category(&self) -> Option<Category> {
        (**self).category()
    }
}

/// HTTP status for `value`; [`DEFAULT_STATUS`] when it has no known
/// category. Never fails.
pub fn http_status<T: Classify + ?Sized>(value: &T) -> u16 {
    value
        .category()
        .map_or(DEFAULT_STATUS, Category::http_status)
}

/// `true` iff [`http_status`] is in `400..500`.
pub fn is_client_error<T: Classify + ?Sized>(value: &T) -> bool {
    (400..500).contains(&http_status(value))
}

/// `true` iff [`http_status`] is `500` or above.
pub fn is_server_error<T: Classify + ?Sized>(value: &T) -> bool {
    http_status(value) >= 500
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn table_matches_category_order() {
        let cats: Vec<_> = STATUS_TABLE.iter().map(|(c, _)| *c).collect();
        assert_eq!(cats, Category::ALL.to_vec());
    }

    #[test]
    fn table_values() {
        let expected = [
            ("unavailable", 503),
            ("interrupted", 500),
            ("incorrect", 400),
            ("forbidden", 403),
            ("unauthorized", 401),
            ("not-found", 404),
            ("conflict", 409),
            ("fault", 500),
            ("busy", 503),
            ("unsupported", 501),
        ];
        for ((cat, status), (name, want)) in STATUS_TABLE.iter().zip(expected) {
            assert_eq!(cat.as_str(), name);
            assert_eq!(*status, want, "{name}");
        }
    }

    #[test]
    fn json_record_lookup() {
        assert_eq!(http_status(&json!({"category": "not-found"})), 404);
        assert_eq!(http_status(&json!({"category": "conflict", "message": "x"})), 409);
    }

    #[test]
    fn unclassified_json_defaults_to_500() {
        let inputs = [
            json!({}),
            json!({"category": null}),
            json!({"category": "teapot"}),
            json!({"category": 404}),
            json!({"category": ["not-found"]}),
            json!({"message": "no category"}),
            json!("not-found"),
            json!(["not-found"]),
            json!(42),
            json!(null),
        ];
        for v in &inputs {
            assert_eq!(http_status(v), DEFAULT_STATUS, "{v}");
            assert!(!is_client_error(v), "{v}");
            assert!(is_server_error(v), "{v}");
        }
    }

    #[test]
    fn option_and_reference_impls() {
        let none: Option<Category> = None;
        assert_eq!(http_status(&none), 500);
        assert_eq!(http_status(&Some(Category::Forbidden)), 403);
        let cat = Category::Incorrect;
        assert_eq!(http_status(&&cat), 400);
        let boxed: Box<Category> = Box::new(Category::Unsupported);
        assert_eq!(http_status(&boxed), 501);
    }

    #[test]
    fn client_error_set() {
        let client: Vec<_> = Category::ALL
            .into_iter()
            .filter(|c| is_client_error(c))
            .collect();
        assert_eq!(
            client,
            vec![
                Category::Incorrect,
                Category::Forbidden,
                Category::Unauthorized,
                Category::NotFound,
                Category::Conflict,
            ]
        );
    }

    #[test]
    fn server_error_set() {
        let server: Vec<_> = Category::ALL
            .into_iter()
            .filter(|c| is_server_error(c))
            .collect();
        assert_eq!(
            server,
            vec![
                Category::Unavailable,
                Category::Interrupted,
                Category::Fault,
                Category::Busy,
                Category::Unsupported,
            ]
        );
    }

    #[test]
    fn free_functions_agree_with_methods() {
        for c in Category::ALL {
            assert_eq!(http_status(&c), c.http_status());
            assert_eq!(is_client_error(&c), c.is_client_error());
            assert_eq!(is_server_error(&c), c.is_server_error());
        }
    }
}
