//! Fail-soft navigation, coercion, and editing over decoded JSON documents.
//!
//! ```
//! use jsonvalue::json::{JsonValue, Kind};
//!
//! let doc = JsonValue::parse(r#"{"status": true, "data": [{"City": "Pune"}]}"#);
//! assert!(doc.at_key("status").bool_value());
//! assert_eq!(doc.get(jsonvalue::json_path!("data", 0, "City")).string_value(), "Pune");
//!
//! let missing = doc.get(jsonvalue::json_path!("data", 3, "City"));
//! assert_eq!(missing.kind(), Kind::Null);
//! assert!(missing.error().is_some());
//! ```

/// JSON value wrapper, paths, options, and errors.
pub mod json;
