//! # Storefront Props
//!
//! Shared-structure value tree and the path algebra used to address it.
//!
//! Every section instance carries an open-ended props tree. Editing code
//! never mutates that tree in place: each write returns a new root that
//! shares every untouched subtree with the old one, so change detection
//! downstream can compare containers by pointer.
//!
//! ## Example
//!
//! ```rust
//! use storefront_props::{get, set, Value};
//! use serde_json::json;
//!
//! let props = Value::from(json!({
//!     "hero": { "title": "Welcome" },
//!     "items": [{ "label": "A" }, { "label": "B" }]
//! }));
//!
//! assert_eq!(get(&props, "items[1].label").and_then(Value::as_str), Some("B"));
//!
//! let next = set(&props, "hero.title", Value::from("Namaste"));
//! assert!(next.field("items").unwrap().ptr_eq(props.field("items").unwrap()));
//! ```

pub mod ops;
pub mod path;
pub mod value;

pub use ops::{append, get, move_item, remove_at, set, MAX_ARRAY_GAP};
pub use path::{parse_path, PropPath, Segment};
pub use value::{Map, Value};
