//! # dynel-core
//!
//! A dynamically-typed value container for JSON-like data: a discriminated
//! union over null, bool, int, double, string, array, object, and function
//! callbacks, with native construction, indexing, and mutation ergonomics
//! and a bidirectional bridge to textual JSON (via `serde_json`).
//!
//! Arrays and objects share one ordered child representation with string
//! keys; array keys are synthesized (`"~0"`, `"~1"`, ...) and renumbered on
//! removal, object keys preserve insertion order and tolerate duplicates
//! with last-match-wins reads. Partial JSON patches merge recursively for
//! objects and overwrite everything else.
//!
//! ## Quick start
//!
//! ```rust
//! use dynel_core::{Element, Type};
//!
//! let mut doc = Element::from(Type::Object);
//! doc.set("name", "dynel")?;
//! doc.set("retries", 3)?;
//!
//! // Chained mutation without existence checks: missing keys vivify as Null.
//! doc.get_key_mut("limits")?.set_type(Type::Object);
//! doc.get_key_mut("limits")?.set("burst", 10)?;
//!
//! assert_eq!(
//!     doc.to_json(0)?,
//!     r#"{"name":"dynel","retries":3,"limits":{"burst":10}}"#
//! );
//!
//! // Partial patches merge recursively for objects.
//! doc.apply_json(r#"{"retries":5}"#)?;
//! assert_eq!(doc.get_key("retries").i(), 5);
//! # Ok::<(), dynel_core::ElementError>(())
//! ```
//!
//! ## Modules
//!
//! - [`element`] — the [`Element`] container and its mutation/query protocol
//! - [`json`] — [`Element`] ↔ `serde_json::Value` bridge and text wrappers
//! - [`types`] — the [`Type`] discriminant
//! - [`error`] — [`ElementError`] and the crate [`Result`] alias

mod children;
pub mod element;
pub mod error;
pub mod json;
pub mod types;

pub use children::ARRAY_INDEX_PREFIX;
pub use element::{Element, FunctionCallback};
pub use error::{ElementError, Result};
pub use json::{from_json_value, to_json_value};
pub use types::Type;
