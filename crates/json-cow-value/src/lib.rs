//! json-cow-value - JSON documents with structurally shared containers.
//!
//! A [`Doc`] is a JSON value whose arrays and objects live behind [`Arc`]
//! pointers. Cloning a `Doc` never copies a container; it only bumps a
//! reference count. Editing code obtains a private copy of a container with
//! [`Arc::make_mut`], which copies the container only while it is still
//! shared, so unchanged subtrees stay reference-identical between a document
//! and the documents derived from it.
//!
//! # Example
//!
//! ```
//! use json_cow_value::{deep_equal, Doc};
//! use serde_json::json;
//!
//! let a = Doc::from(json!({"items": [1, 2, 3], "meta": {"v": 1}}));
//! let b = a.clone();
//!
//! assert!(a.ptr_eq(&b));
//! assert!(deep_equal(&a, &b));
//! ```
//!
//! [`Arc`]: std::sync::Arc
//! [`Arc::make_mut`]: std::sync::Arc::make_mut

pub mod convert;
pub mod doc;
pub mod json_equal;

pub use doc::{Doc, Map};
pub use json_equal::{deep_equal, number_equal};
