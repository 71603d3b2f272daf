//! Script filter: `[(@.length-1)]`
//!
//! Only array-length arithmetic is evaluated: `@.length`, `@.length-N` and
//! `@.length+N`. Any other script is rejected instead of guessed at.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{FilterEvaluator, WorkingCollection};
use crate::access;
use crate::error::{JsonPathResult, unsupported_script_error};
use crate::tokens::PathKey;
use crate::value::Value;

static LENGTH_SCRIPT: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^@\.length\s*(?:([+-])\s*(\d+))?$").ok());

impl<'a> FilterEvaluator<'a> {
    /// Resolve the script to an offset from the end of each array and select that element
    pub(crate) fn apply_script(
        &self,
        collection: &[Cow<'a, Value>],
        script: &str,
    ) -> JsonPathResult<WorkingCollection<'a>> {
        let offset = script_offset(script).ok_or_else(|| unsupported_script_error(script))?;

        let mut results = Vec::new();
        for node in collection {
            let Some(items) = node.as_array() else {
                continue;
            };
            let Ok(len) = i64::try_from(items.len()) else {
                continue;
            };
            let index = len.saturating_add(offset);
            // A negative result is out of range, not a from-the-end index
            if index < 0 {
                continue;
            }
            results.extend(access::child(node, &PathKey::Index(index), self.config()));
        }
        Ok(results)
    }
}

/// Offset relative to the array length that `script` evaluates to
///
/// `@.length-1` yields `Some(-1)`; unsupported scripts yield `None`.
#[must_use]
pub fn script_offset(script: &str) -> Option<i64> {
    let captures = LENGTH_SCRIPT.as_ref()?.captures(script.trim())?;
    let Some(amount) = captures.get(2) else {
        return Some(0);
    };
    let amount: i64 = amount.as_str().parse().ok()?;
    match captures.get(1).map(|sign| sign.as_str()) {
        Some("-") => Some(-amount),
        _ => Some(amount),
    }
}
