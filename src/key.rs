//! Namespaced resource keys.
//!
//! Every typed collection in a [`ResourcePack`](crate::pack::ResourcePack) is
//! keyed by a [`ResourceKey`] of the form `namespace:path`. This module is the
//! single source of truth for key syntax; all other modules parse and format
//! keys through it rather than splitting strings directly.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Namespace assumed when a key string carries no explicit namespace.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Errors produced when parsing or constructing a resource key.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// The namespace contains a character outside `[a-z0-9_.-]`.
    #[error("invalid character {0:?} in namespace {1:?}")]
    InvalidNamespace(char, String),

    /// The path contains a character outside `[a-z0-9_.-/]`.
    #[error("invalid character {0:?} in path {1:?}")]
    InvalidPath(char, String),

    /// The namespace or path is empty.
    #[error("empty {0} in resource key")]
    Empty(&'static str),
}

/// A namespaced identifier for a pack resource.
///
/// Keys are the stable identity of every typed asset: two sources
/// contributing to the same key are describing the same logical asset and are
/// combined by the merge rules in [`crate::merge`].
///
/// # Example
///
/// ```
/// use packmill::key::ResourceKey;
///
/// let key: ResourceKey = "item/ruby_sword".parse().unwrap();
/// assert_eq!(key.namespace(), "minecraft"); // default namespace
/// assert_eq!(key.path(), "item/ruby_sword");
/// assert_eq!(key.to_string(), "minecraft:item/ruby_sword");
///
/// let key: ResourceKey = "packmill:glyphs/coin".parse().unwrap();
/// assert_eq!(key.namespace(), "packmill");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceKey {
    namespace: String,
    path: String,
}

impl ResourceKey {
    /// Create a key from an explicit namespace and path.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError`] if either part is empty or contains characters
    /// outside the allowed set.
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> Result<Self, KeyError> {
        let namespace = namespace.into();
        let path = path.into();

        if namespace.is_empty() {
            return Err(KeyError::Empty("namespace"));
        }
        if path.is_empty() {
            return Err(KeyError::Empty("path"));
        }
        if let Some(c) = namespace.chars().find(|c| !is_namespace_char(*c)) {
            return Err(KeyError::InvalidNamespace(c, namespace));
        }
        if let Some(c) = path.chars().find(|c| !is_path_char(*c)) {
            return Err(KeyError::InvalidPath(c, path));
        }

        Ok(Self { namespace, path })
    }

    /// Create a key in the default `minecraft` namespace.
    pub fn minecraft(path: impl Into<String>) -> Result<Self, KeyError> {
        Self::new(DEFAULT_NAMESPACE, path)
    }

    /// The namespace part of the key.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The path part of the key.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for ResourceKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::new(DEFAULT_NAMESPACE, s),
        }
    }
}

fn is_namespace_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '.' | '-')
}

fn is_path_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}
