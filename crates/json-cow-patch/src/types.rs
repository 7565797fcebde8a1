//! Core types for the JSON Patch module.

use std::fmt;
use std::str::FromStr;

use json_cow_pointer::JsonPointerError;
use json_cow_value::Doc;
use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PatchError {
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
    #[error("path {path} does not exist")]
    PathNotFound { path: String },
    #[error("can't mutate {token}, it is banned")]
    BannedKey { token: String },
    #[error("assertion failed, expected {actual} to equal {expected}")]
    AssertionFailed { expected: Doc, actual: Doc },
}

impl PatchError {
    pub(crate) fn not_found(path: &str) -> Self {
        PatchError::PathNotFound {
            path: path.to_string(),
        }
    }
}

impl From<JsonPointerError> for PatchError {
    fn from(err: JsonPointerError) -> Self {
        match err {
            JsonPointerError::BannedKey(token) => PatchError::BannedKey { token },
            JsonPointerError::PointerInvalid(path) => PatchError::PathNotFound { path },
            other => PatchError::InvalidOperation(other.to_string()),
        }
    }
}

// ── Operation kind ────────────────────────────────────────────────────────

/// The six RFC 6902 operation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Add,
    Remove,
    Replace,
    Move,
    Copy,
    Test,
}

impl OpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpKind::Add => "add",
            OpKind::Remove => "remove",
            OpKind::Replace => "replace",
            OpKind::Move => "move",
            OpKind::Copy => "copy",
            OpKind::Test => "test",
        }
    }
}

impl FromStr for OpKind {
    type Err = PatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(OpKind::Add),
            "remove" => Ok(OpKind::Remove),
            "replace" => Ok(OpKind::Replace),
            "move" => Ok(OpKind::Move),
            "copy" => Ok(OpKind::Copy),
            "test" => Ok(OpKind::Test),
            other => Err(PatchError::InvalidOperation(format!(
                "unknown op {other:?}"
            ))),
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Op enum ───────────────────────────────────────────────────────────────

/// A JSON Patch operation.
///
/// Pointers are kept as written and resolved when the operation is applied,
/// so error messages name the pointer exactly as the caller supplied it.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Add { path: String, value: Doc },
    Remove { path: String },
    Replace { path: String, value: Doc },
    Move { from: String, path: String },
    Copy { from: String, path: String },
    Test { path: String, value: Doc },
}

impl Op {
    pub fn add(path: impl Into<String>, value: impl Into<Doc>) -> Self {
        Op::Add {
            path: path.into(),
            value: value.into(),
        }
    }

    pub fn remove(path: impl Into<String>) -> Self {
        Op::Remove { path: path.into() }
    }

    pub fn replace(path: impl Into<String>, value: impl Into<Doc>) -> Self {
        Op::Replace {
            path: path.into(),
            value: value.into(),
        }
    }

    pub fn move_from(from: impl Into<String>, path: impl Into<String>) -> Self {
        Op::Move {
            from: from.into(),
            path: path.into(),
        }
    }

    pub fn copy_from(from: impl Into<String>, path: impl Into<String>) -> Self {
        Op::Copy {
            from: from.into(),
            path: path.into(),
        }
    }

    pub fn test(path: impl Into<String>, value: impl Into<Doc>) -> Self {
        Op::Test {
            path: path.into(),
            value: value.into(),
        }
    }

    pub fn kind(&self) -> OpKind {
        match self {
            Op::Add { .. } => OpKind::Add,
            Op::Remove { .. } => OpKind::Remove,
            Op::Replace { .. } => OpKind::Replace,
            Op::Move { .. } => OpKind::Move,
            Op::Copy { .. } => OpKind::Copy,
            Op::Test { .. } => OpKind::Test,
        }
    }

    /// Returns the destination pointer of the operation.
    pub fn path(&self) -> &str {
        match self {
            Op::Add { path, .. }
            | Op::Remove { path }
            | Op::Replace { path, .. }
            | Op::Move { path, .. }
            | Op::Copy { path, .. }
            | Op::Test { path, .. } => path.as_str(),
        }
    }

    /// Returns the source pointer of `move` and `copy`.
    pub fn from(&self) -> Option<&str> {
        match self {
            Op::Move { from, .. } | Op::Copy { from, .. } => Some(from.as_str()),
            _ => None,
        }
    }
}

// ── Result types ──────────────────────────────────────────────────────────

/// Result of applying a single operation.
#[derive(Debug, Clone)]
pub struct OpResult {
    /// The document after applying the operation.
    pub doc: Doc,
    /// The value displaced at `path` by the operation, if any.
    pub old: Option<Doc>,
}

/// Result of applying a full patch.
#[derive(Debug, Clone)]
pub struct PatchResult {
    pub doc: Doc,
    pub res: Vec<OpResult>,
}

/// Options for [`apply_patch_with`](crate::apply_patch_with).
#[derive(Debug, Clone)]
pub struct ApplyPatchOptions {
    /// Require pointers to be empty or start with `/`, and enforce the
    /// pointer length and path depth limits. When false, a pointer without
    /// a leading `/` has its first character dropped.
    ///
    /// Banned keys are rejected either way.
    pub validate: bool,
}

impl Default for ApplyPatchOptions {
    fn default() -> Self {
        Self { validate: true }
    }
}
