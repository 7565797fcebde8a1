//! JSON equality utilities.
//!
//! Provides deep structural equality for [`Doc`](crate::Doc) values.

mod deep_equal;

pub use deep_equal::{deep_equal, number_equal};
