//! Evaluation configuration
//!
//! Options that change how a path is resolved against a value tree. The
//! struct is serde-friendly so hosts can embed it in their own settings.

use serde::{Deserialize, Serialize};

/// Flag enabling dynamic key resolution on [`Value::Dynamic`](crate::Value::Dynamic) nodes
pub const ALLOW_DYNAMIC: u32 = 1;

/// Options controlling path evaluation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonPathConfig {
    /// Resolve keys on dynamic host objects through their accessor
    pub allow_dynamic: bool,
}

impl JsonPathConfig {
    /// Default configuration: plain data access only
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            allow_dynamic: false,
        }
    }

    /// Build a configuration from bit flags such as [`ALLOW_DYNAMIC`]
    ///
    /// Unknown bits are ignored.
    #[must_use]
    pub const fn from_flags(flags: u32) -> Self {
        Self {
            allow_dynamic: flags & ALLOW_DYNAMIC != 0,
        }
    }

    /// Enable or disable dynamic key resolution
    #[inline]
    #[must_use]
    pub const fn allow_dynamic(mut self, enabled: bool) -> Self {
        self.allow_dynamic = enabled;
        self
    }

    /// Flags equivalent to this configuration
    #[must_use]
    pub const fn flags(&self) -> u32 {
        if self.allow_dynamic { ALLOW_DYNAMIC } else { 0 }
    }
}
